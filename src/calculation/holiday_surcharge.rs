//! Public-holiday surcharge partitioning.

use chrono::Duration;

use crate::models::{HourBucket, ShiftReason, WorkingPeriodTimecard};

use super::public_holidays::{HolidayZone, is_public_holiday};

/// Partitions hours worked on public holidays into habitual (contract-rate)
/// and occasional (additional-rate) buckets.
///
/// The split follows the same planning concurrency rule as the Sunday and
/// night surcharges: holiday work inside the usual weekly slot is habitual,
/// work outside it is occasional.
pub fn apply_holiday_surcharge(
    timecard: WorkingPeriodTimecard,
    zone: HolidayZone,
) -> WorkingPeriodTimecard {
    let mut contract_hours = Duration::zero();
    let mut additional_hours = Duration::zero();

    for shift in &timecard.shifts {
        if shift.reason == ShiftReason::Inactive || !is_public_holiday(shift.date(), zone) {
            continue;
        }
        if timecard.shift_matches_planning(shift) {
            contract_hours = contract_hours + shift.duration;
        } else {
            additional_hours = additional_hours + shift.duration;
        }
    }

    let mut timecard = timecard;
    if contract_hours > Duration::zero() {
        timecard = timecard.register(HourBucket::HolidayContract, contract_hours);
    }
    if additional_hours > Duration::zero() {
        timecard = timecard.register(HourBucket::HolidayAdditional, additional_hours);
    }
    timecard
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DateRange, Shift, TimeSlot, WorkingPeriod};
    use chrono::{Datelike, NaiveDate, NaiveTime};
    use std::collections::HashMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn shift(id: &str, day: NaiveDate, start: u32, hours: i64, reason: ShiftReason) -> Shift {
        Shift {
            id: id.to_string(),
            employee_id: "emp_001".to_string(),
            client_id: "client_001".to_string(),
            start: day.and_time(time(start)),
            duration: Duration::hours(hours),
            reason,
            precedence_date: None,
            source_id: None,
        }
    }

    fn timecard_with_planning_on(day: NaiveDate) -> WorkingPeriodTimecard {
        let mut planning = HashMap::new();
        planning.insert(
            day.weekday(),
            vec![TimeSlot::new(time(9), time(13)).unwrap()],
        );
        WorkingPeriodTimecard::new(
            WorkingPeriod {
                employee_id: "emp_001".to_string(),
                contract_id: "contract_001".to_string(),
                range: DateRange::new(date(2023, 7, 10), date(2023, 7, 17)).unwrap(),
            },
            planning,
        )
    }

    // ==========================================================================
    // HS-001: habitual holiday work lands in the contract bucket
    // ==========================================================================
    #[test]
    fn test_hs_001_planned_holiday_work_is_habitual() {
        // 2023-07-14, Fête nationale, falls in the period.
        let holiday = date(2023, 7, 14);
        let card = timecard_with_planning_on(holiday).with_shifts(vec![shift(
            "shift_001",
            holiday,
            9,
            4,
            ShiftReason::Permanent,
        )]);

        let card = apply_holiday_surcharge(card, HolidayZone::Metropolitan);
        assert_eq!(
            card.buckets.get(HourBucket::HolidayContract),
            Duration::hours(4)
        );
        assert_eq!(
            card.buckets.get(HourBucket::HolidayAdditional),
            Duration::zero()
        );
    }

    // ==========================================================================
    // HS-002: occasional holiday work lands in the additional bucket
    // ==========================================================================
    #[test]
    fn test_hs_002_unplanned_holiday_work_is_occasional() {
        let holiday = date(2023, 7, 14);
        let card = timecard_with_planning_on(holiday).with_shifts(vec![shift(
            "shift_001",
            holiday,
            15,
            3,
            ShiftReason::Remplacement,
        )]);

        let card = apply_holiday_surcharge(card, HolidayZone::Metropolitan);
        assert_eq!(
            card.buckets.get(HourBucket::HolidayAdditional),
            Duration::hours(3)
        );
    }

    #[test]
    fn test_ordinary_day_carries_no_holiday_surcharge() {
        let day = date(2023, 7, 13);
        let card = timecard_with_planning_on(day).with_shifts(vec![shift(
            "shift_001",
            day,
            9,
            4,
            ShiftReason::Permanent,
        )]);

        let card = apply_holiday_surcharge(card, HolidayZone::Metropolitan);
        assert!(card.buckets.is_empty());
    }

    #[test]
    fn test_zone_specific_holiday() {
        // Saint Stephen's Day is a holiday only in Alsace–Moselle.
        let day = date(2023, 12, 26);
        let make_card = || {
            WorkingPeriodTimecard::new(
                WorkingPeriod {
                    employee_id: "emp_001".to_string(),
                    contract_id: "contract_001".to_string(),
                    range: DateRange::new(date(2023, 12, 25), date(2024, 1, 1)).unwrap(),
                },
                HashMap::new(),
            )
            .with_shifts(vec![shift("shift_001", day, 9, 4, ShiftReason::Permanent)])
        };

        let metropolitan = apply_holiday_surcharge(make_card(), HolidayZone::Metropolitan);
        assert_eq!(
            metropolitan.buckets.get(HourBucket::HolidayAdditional),
            Duration::zero()
        );

        let alsace = apply_holiday_surcharge(make_card(), HolidayZone::AlsaceMoselle);
        assert_eq!(
            alsace.buckets.get(HourBucket::HolidayAdditional),
            Duration::hours(4)
        );
    }
}
