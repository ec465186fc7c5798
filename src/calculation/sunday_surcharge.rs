//! Sunday surcharge partitioning.

use chrono::{Datelike, Duration, Weekday};

use crate::models::{HourBucket, ShiftReason, WorkingPeriodTimecard};

/// Partitions the period's Sunday hours into contract-rate and
/// additional-rate buckets.
///
/// A Sunday shift concurrent with the usual weekly-planning slot for that
/// day is habitual contract work; one outside the planning earns the
/// additional rate. Synthetic inactive fillers never carry a surcharge.
pub fn apply_sunday_surcharge(timecard: WorkingPeriodTimecard) -> WorkingPeriodTimecard {
    let mut contract_hours = Duration::zero();
    let mut additional_hours = Duration::zero();

    for shift in &timecard.shifts {
        if shift.reason == ShiftReason::Inactive || shift.date().weekday() != Weekday::Sun {
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
        timecard = timecard.register(HourBucket::SundayContract, contract_hours);
    }
    if additional_hours > Duration::zero() {
        timecard = timecard.register(HourBucket::SundayAdditional, additional_hours);
    }
    timecard
}
