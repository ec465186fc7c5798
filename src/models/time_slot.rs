//! Time-of-day slot value type and interval algebra.
//!
//! [`TimeSlot`] is the foundation for every overlap and subtraction decision
//! in the engine: leave-shift splitting, planning concurrency checks and
//! bench occupancy all reduce to the operations defined here.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A time-of-day range with exclusive end, invariant `end > start`.
///
/// Immutable value type; equality, ordering and hashing are by value. The
/// invariant is enforced by [`TimeSlot::new`]; every operation below only
/// ever produces valid slots.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use timecard_engine::models::TimeSlot;
///
/// let morning = TimeSlot::new(
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
/// ).unwrap();
/// assert_eq!(morning.duration(), chrono::Duration::hours(3));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TimeSlot {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeSlot {
    /// Creates a slot, failing with [`EngineError::InvalidSlot`] if `end <= start`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> EngineResult<Self> {
        if end <= start {
            return Err(EngineError::InvalidSlot { start, end });
        }
        Ok(Self { start, end })
    }

    /// The slot start (inclusive).
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// The slot end (exclusive).
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// The slot length.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Strict overlap test: boundaries excluded, so back-to-back slots such
    /// as `12:00–13:00` and `13:00–14:00` do NOT overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Inclusive overlap test: back-to-back slots count as touching.
    pub fn overlaps_inclusive(&self, other: &TimeSlot) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Strict inclusion test: `other` lies strictly inside `self`,
    /// boundaries excluded.
    pub fn includes(&self, other: &TimeSlot) -> bool {
        self.start < other.start && other.end < self.end
    }

    /// Inclusive inclusion test: `other` lies within `self`, boundaries
    /// allowed to coincide.
    pub fn includes_inclusive(&self, other: &TimeSlot) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The overlapping portion of two slots, if any.
    pub fn intersection(&self, other: &TimeSlot) -> Option<TimeSlot> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Self {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// The portion(s) of `self` not covered by `other`.
    ///
    /// Structural cases, in evaluation order:
    /// - no strict overlap: `self` unchanged;
    /// - `other` left-aligned and ending earlier: right remainder;
    /// - `other` right-aligned and starting later: left remainder;
    /// - `other` covers `self` (inclusive boundaries): empty;
    /// - `other` strictly inside `self`: left and right remainders;
    /// - anything else (a partial overlap crossing one boundary): empty.
    ///
    /// The final catch-all is deliberate and load-bearing: callers that
    /// subtract cumulatively rely on a boundary-crossing occupant consuming
    /// the whole slot rather than leaving a sliver.
    pub fn subtract(&self, other: &TimeSlot) -> Vec<TimeSlot> {
        if !self.overlaps(other) {
            return vec![*self];
        }
        if other.start == self.start && other.end < self.end {
            return vec![Self {
                start: other.end,
                end: self.end,
            }];
        }
        if other.end == self.end && other.start > self.start {
            return vec![Self {
                start: self.start,
                end: other.start,
            }];
        }
        if other.includes_inclusive(self) {
            return vec![];
        }
        if self.includes(other) {
            return vec![
                Self {
                    start: self.start,
                    end: other.start,
                },
                Self {
                    start: other.end,
                    end: self.end,
                },
            ];
        }
        vec![]
    }

    /// Merges two slots when they overlap or touch.
    ///
    /// Adjacency is *inclusive* here, unlike [`TimeSlot::overlaps`]: overlap
    /// tests must not treat back-to-back shifts as conflicting, but
    /// continuity merges must, so `12:00–13:00` and `13:00–14:00` merge into
    /// `12:00–14:00`. Disjoint slots are returned unmerged, ordered by
    /// start.
    pub fn add(&self, other: &TimeSlot) -> Vec<TimeSlot> {
        if self.overlaps_inclusive(other) {
            return vec![Self {
                start: self.start.min(other.start),
                end: self.end.max(other.end),
            }];
        }
        let mut slots = vec![*self, *other];
        slots.sort();
        slots
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}
