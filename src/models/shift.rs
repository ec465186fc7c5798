//! Shift model and related types.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::duration::minutes;
use super::time_slot::TimeSlot;

/// The business reason a shift was scheduled.
///
/// A closed enumeration: the attribution allocator and the curation stage
/// both match on it exhaustively, so adding a reason forces every consumer
/// to decide how to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftReason {
    /// Recurring assignment at a client.
    Permanent,
    /// One-off assignment.
    Ponctuel,
    /// Replacement of another employee.
    Remplacement,
    /// Bench filler: contracted availability with no assignment.
    Intercontrat,
    /// Bench filler generated over a recorded leave period.
    Absence,
    /// Partial pay maintenance period.
    MaintienPartiel,
    /// Prospective (not yet confirmed) assignment.
    Prospective,
    /// Synthetic filler for the unworked days of a partial period.
    Inactive,
}

impl ShiftReason {
    /// Attribution priority for billable reasons, lower sorts first.
    ///
    /// Ponctuel outranks Remplacement which outranks Permanent; all other
    /// reasons are not billable and never receive attributions.
    pub fn attribution_priority(&self) -> Option<u8> {
        match self {
            ShiftReason::Ponctuel => Some(0),
            ShiftReason::Remplacement => Some(1),
            ShiftReason::Permanent => Some(2),
            ShiftReason::Intercontrat
            | ShiftReason::Absence
            | ShiftReason::MaintienPartiel
            | ShiftReason::Prospective
            | ShiftReason::Inactive => None,
        }
    }

    /// Whether shifts with this reason are bench fillers produced by an
    /// earlier bench generation run. Curation removes them so the current
    /// run recomputes bench from scratch.
    pub fn is_bench_filler(&self) -> bool {
        matches!(self, ShiftReason::Intercontrat | ShiftReason::Absence)
    }
}

/// Represents a work shift.
///
/// Immutable; curation may split a shift into fragments, producing derived
/// records whose `source_id` points back to the original.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee working the shift.
    pub employee_id: String,
    /// The client the shift is worked for.
    pub client_id: String,
    /// The start of the shift.
    pub start: NaiveDateTime,
    /// The worked duration.
    #[serde(with = "minutes")]
    pub duration: Duration,
    /// Why the shift was scheduled.
    pub reason: ShiftReason,
    /// Tie-break key for the attribution sort.
    #[serde(default)]
    pub precedence_date: Option<NaiveDate>,
    /// For fragments produced by curation, the id of the original shift.
    #[serde(default)]
    pub source_id: Option<String>,
}

impl Shift {
    /// The end of the shift.
    pub fn end(&self) -> NaiveDateTime {
        self.start + self.duration
    }

    /// The calendar date the shift starts on.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// The shift's time-of-day window, when it fits within one day.
    ///
    /// Slot algebra (leave splitting, planning concurrency, bench occupancy)
    /// operates on within-day windows, which is the shape curated shifts
    /// take; a midnight-crossing shift has no single-day window and yields
    /// `None`.
    pub fn time_slot(&self) -> Option<TimeSlot> {
        let end = self.end();
        if end.date() != self.start.date() {
            return None;
        }
        TimeSlot::new(self.start.time(), end.time()).ok()
    }

    /// The id attributions are keyed by: the original shift id for
    /// fragments, the shift's own id otherwise.
    pub fn root_id(&self) -> &str {
        self.source_id.as_deref().unwrap_or(&self.id)
    }

    /// Creates a derived fragment of this shift covering `slot` on the same
    /// date. The fragment id is suffixed with its position and `source_id`
    /// keeps the lineage for attribution reconciliation.
    pub fn fragment(&self, slot: TimeSlot, index: usize) -> Shift {
        Shift {
            id: format!("{}-{}", self.id, index),
            employee_id: self.employee_id.clone(),
            client_id: self.client_id.clone(),
            start: self.start.date().and_time(slot.start()),
            duration: slot.duration(),
            reason: self.reason,
            precedence_date: self.precedence_date,
            source_id: Some(self.root_id().to_string()),
        }
    }

    /// The part of the shift falling inside the night window, as a duration.
    ///
    /// The night window crosses midnight (`night_start` in the evening,
    /// `night_end` the following morning); each calendar night the shift
    /// touches contributes its overlap.
    pub fn night_portion(&self, night_start: NaiveTime, night_end: NaiveTime) -> Duration {
        let start = self.start;
        let end = self.end();
        let mut total = Duration::zero();

        // The night reaching into the shift's first day begins the evening
        // before it.
        let mut day = match self.start.date().pred_opt() {
            Some(d) => d,
            None => self.start.date(),
        };
        while day <= end.date() {
            let window_start = day.and_time(night_start);
            let window_end = match day.succ_opt() {
                Some(next) => next.and_time(night_end),
                None => break,
            };
            let overlap_start = start.max(window_start);
            let overlap_end = end.min(window_end);
            if overlap_end > overlap_start {
                total += overlap_end - overlap_start;
            }
            day = match day.succ_opt() {
                Some(d) => d,
                None => break,
            };
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_shift(start: NaiveDateTime, duration: Duration, reason: ShiftReason) -> Shift {
        Shift {
            id: "shift_001".to_string(),
            employee_id: "emp_001".to_string(),
            client_id: "client_001".to_string(),
            start,
            duration,
            reason,
            precedence_date: None,
            source_id: None,
        }
    }

    fn night_start() -> NaiveTime {
        NaiveTime::from_hms_opt(21, 0, 0).unwrap()
    }

    fn night_end() -> NaiveTime {
        NaiveTime::from_hms_opt(6, 0, 0).unwrap()
    }

    // ==========================================================================
    // SH-001: within-day time slot
    // ==========================================================================
    #[test]
    fn test_sh_001_time_slot_for_within_day_shift() {
        let shift = make_shift(
            make_datetime("2023-05-15", "09:00:00"),
            Duration::hours(8),
            ShiftReason::Permanent,
        );
        let slot = shift.time_slot().unwrap();
        assert_eq!(slot.start(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(slot.end(), NaiveTime::from_hms_opt(17, 0, 0).unwrap());
    }

    // ==========================================================================
    // SH-002: midnight-crossing shift has no single-day slot
    // ==========================================================================
    #[test]
    fn test_sh_002_time_slot_none_for_overnight_shift() {
        let shift = make_shift(
            make_datetime("2023-05-15", "22:00:00"),
            Duration::hours(8),
            ShiftReason::Permanent,
        );
        assert!(shift.time_slot().is_none());
    }

    // ==========================================================================
    // SH-003: night portion of an overnight shift
    // ==========================================================================
    #[test]
    fn test_sh_003_night_portion_overnight() {
        // 22:00 to 06:00 the next day: all 8 hours fall in the night window.
        let shift = make_shift(
            make_datetime("2023-05-15", "22:00:00"),
            Duration::hours(8),
            ShiftReason::Permanent,
        );
        assert_eq!(
            shift.night_portion(night_start(), night_end()),
            Duration::hours(8)
        );
    }

    #[test]
    fn test_night_portion_evening_shift() {
        // 18:00 to 23:00: two hours past 21:00.
        let shift = make_shift(
            make_datetime("2023-05-15", "18:00:00"),
            Duration::hours(5),
            ShiftReason::Permanent,
        );
        assert_eq!(
            shift.night_portion(night_start(), night_end()),
            Duration::hours(2)
        );
    }

    #[test]
    fn test_night_portion_early_morning_shift() {
        // 04:00 to 09:00: two hours before 06:00 fall in the previous night.
        let shift = make_shift(
            make_datetime("2023-05-15", "04:00:00"),
            Duration::hours(5),
            ShiftReason::Permanent,
        );
        assert_eq!(
            shift.night_portion(night_start(), night_end()),
            Duration::hours(2)
        );
    }

    #[test]
    fn test_night_portion_day_shift_is_zero() {
        let shift = make_shift(
            make_datetime("2023-05-15", "09:00:00"),
            Duration::hours(8),
            ShiftReason::Permanent,
        );
        assert_eq!(
            shift.night_portion(night_start(), night_end()),
            Duration::zero()
        );
    }

    // ==========================================================================
    // SH-004: fragment lineage
    // ==========================================================================
    #[test]
    fn test_sh_004_fragment_keeps_lineage() {
        let shift = make_shift(
            make_datetime("2023-05-15", "09:00:00"),
            Duration::hours(8),
            ShiftReason::Ponctuel,
        );
        let slot = TimeSlot::new(
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        )
        .unwrap();

        let fragment = shift.fragment(slot, 1);
        assert_eq!(fragment.id, "shift_001-1");
        assert_eq!(fragment.source_id.as_deref(), Some("shift_001"));
        assert_eq!(fragment.root_id(), "shift_001");
        assert_eq!(fragment.duration, Duration::hours(3));
        assert_eq!(fragment.start, make_datetime("2023-05-15", "09:00:00"));

        // Fragmenting a fragment still points at the original.
        let nested = fragment.fragment(slot, 2);
        assert_eq!(nested.root_id(), "shift_001");
    }

    #[test]
    fn test_attribution_priority_ranking() {
        assert_eq!(ShiftReason::Ponctuel.attribution_priority(), Some(0));
        assert_eq!(ShiftReason::Remplacement.attribution_priority(), Some(1));
        assert_eq!(ShiftReason::Permanent.attribution_priority(), Some(2));
        assert_eq!(ShiftReason::Intercontrat.attribution_priority(), None);
        assert_eq!(ShiftReason::Inactive.attribution_priority(), None);
    }

    #[test]
    fn test_bench_filler_reasons() {
        assert!(ShiftReason::Intercontrat.is_bench_filler());
        assert!(ShiftReason::Absence.is_bench_filler());
        assert!(!ShiftReason::Permanent.is_bench_filler());
        assert!(!ShiftReason::Inactive.is_bench_filler());
    }

    #[test]
    fn test_reason_serialization() {
        assert_eq!(
            serde_json::to_string(&ShiftReason::MaintienPartiel).unwrap(),
            "\"maintien_partiel\""
        );
        assert_eq!(
            serde_json::to_string(&ShiftReason::Ponctuel).unwrap(),
            "\"ponctuel\""
        );
    }

    #[test]
    fn test_shift_serde_round_trip() {
        let shift = make_shift(
            make_datetime("2023-05-15", "09:00:00"),
            Duration::minutes(450),
            ShiftReason::Remplacement,
        );
        let json = serde_json::to_string(&shift).unwrap();
        let back: Shift = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shift);
    }
}
