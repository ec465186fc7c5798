//! Calendar date range value type.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A date range, `start` inclusive and `end` exclusive, invariant `end > start`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timecard_engine::models::DateRange;
///
/// let week = DateRange::new(
///     NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 5, 8).unwrap(),
/// ).unwrap();
/// assert_eq!(week.num_days(), 7);
/// assert!(week.contains(NaiveDate::from_ymd_opt(2023, 5, 7).unwrap()));
/// assert!(!week.contains(NaiveDate::from_ymd_opt(2023, 5, 8).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, failing with [`EngineError::InvalidRange`] if `end <= start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if end <= start {
            return Err(EngineError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The range start (inclusive).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The range end (exclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// The number of calendar days covered.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// The covered span as a [`Duration`].
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether `date` falls within the range (start inclusive, end exclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Iterates the calendar days of the range in ascending order.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let (start, end) = (self.start, self.end);
        start.iter_days().take_while(move |d| *d < end)
    }

    /// The overlapping portion of two ranges, if any.
    pub fn intersect(&self, other: &DateRange) -> Option<DateRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if end <= start {
            return None;
        }
        Some(Self { start, end })
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
        DateRange::new(start, end).unwrap()
    }

    // ==========================================================================
    // DR-001: construction invariant
    // ==========================================================================
    #[test]
    fn test_dr_001_rejects_end_before_start() {
        assert!(DateRange::new(date(2023, 5, 10), date(2023, 5, 10)).is_err());
        assert!(DateRange::new(date(2023, 5, 10), date(2023, 5, 9)).is_err());
    }

    // ==========================================================================
    // DR-002: half-open containment
    // ==========================================================================
    #[test]
    fn test_dr_002_contains_is_half_open() {
        let r = range(date(2023, 5, 1), date(2023, 5, 8));
        assert!(r.contains(date(2023, 5, 1)));
        assert!(r.contains(date(2023, 5, 7)));
        assert!(!r.contains(date(2023, 5, 8)));
        assert!(!r.contains(date(2023, 4, 30)));
    }

    #[test]
    fn test_iter_days_excludes_end() {
        let r = range(date(2023, 5, 1), date(2023, 5, 4));
        let days: Vec<NaiveDate> = r.iter_days().collect();
        assert_eq!(
            days,
            vec![date(2023, 5, 1), date(2023, 5, 2), date(2023, 5, 3)]
        );
    }

    #[test]
    fn test_num_days() {
        assert_eq!(range(date(2023, 5, 1), date(2023, 5, 8)).num_days(), 7);
        assert_eq!(range(date(2023, 5, 1), date(2023, 5, 2)).num_days(), 1);
    }

    #[test]
    fn test_intersect_overlapping_ranges() {
        let a = range(date(2023, 5, 1), date(2023, 5, 10));
        let b = range(date(2023, 5, 5), date(2023, 5, 20));
        assert_eq!(
            a.intersect(&b),
            Some(range(date(2023, 5, 5), date(2023, 5, 10)))
        );
    }

    #[test]
    fn test_intersect_disjoint_ranges_is_none() {
        let a = range(date(2023, 5, 1), date(2023, 5, 10));
        let b = range(date(2023, 5, 10), date(2023, 5, 20));
        assert_eq!(a.intersect(&b), None);
    }

    #[test]
    fn test_display() {
        let r = range(date(2023, 5, 1), date(2023, 5, 8));
        assert_eq!(r.to_string(), "[2023-05-01, 2023-05-08)");
    }

    #[test]
    fn test_serde_round_trip() {
        let original = range(date(2023, 5, 1), date(2023, 5, 8));
        let json = serde_json::to_string(&original).unwrap();
        let back: DateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }
}
