//! Bench (idle-time) allocation records.

use chrono::{Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::duration::minutes;
use super::time_slot::TimeSlot;

/// One bench slot to create on a specific date.
///
/// Emitted by the bench generator while walking the free fragments of the
/// contractual availability planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotToCreate {
    /// The employee the slot is allocated to.
    pub employee_id: String,
    /// The contract whose availability the slot consumes.
    pub contract_id: String,
    /// The day the slot falls on.
    pub date: NaiveDate,
    /// The allocated time window.
    pub slot: TimeSlot,
    /// The allocated duration (equals the window length).
    #[serde(with = "minutes")]
    pub duration: Duration,
    /// Whether the window overlaps a recorded leave period; drives the
    /// downstream Absence vs Intercontrat classification.
    pub during_leave: bool,
}

/// A weekly-recurring bench allocation.
///
/// Post-processing groups daily [`SlotToCreate`] records sharing an
/// identical `(slot, during_leave)` pair into one record keyed by the set
/// of weekdays it recurs on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchAllocation {
    /// The employee the allocation belongs to.
    pub employee_id: String,
    /// The contract whose availability is consumed.
    pub contract_id: String,
    /// The weekdays the slot recurs on, ordered from Monday.
    pub weekdays: Vec<Weekday>,
    /// The recurring time window.
    pub slot: TimeSlot,
    /// The per-occurrence duration.
    #[serde(with = "minutes")]
    pub duration: Duration,
    /// Whether the window overlaps a recorded leave period.
    pub during_leave: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn slot(start: (u32, u32), end: (u32, u32)) -> TimeSlot {
        TimeSlot::new(
            NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_slot_to_create_serde_round_trip() {
        let record = SlotToCreate {
            employee_id: "emp_001".to_string(),
            contract_id: "contract_001".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 5, 2).unwrap(),
            slot: slot((9, 0), (12, 0)),
            duration: Duration::hours(3),
            during_leave: false,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: SlotToCreate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_bench_allocation_serde_round_trip() {
        let record = BenchAllocation {
            employee_id: "emp_001".to_string(),
            contract_id: "contract_001".to_string(),
            weekdays: vec![Weekday::Mon, Weekday::Thu],
            slot: slot((14, 0), (16, 30)),
            duration: Duration::minutes(150),
            during_leave: true,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: BenchAllocation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
