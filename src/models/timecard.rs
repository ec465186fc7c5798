//! The working-period timecard aggregate and its hour buckets.

use std::collections::{BTreeMap, HashMap};

use chrono::{Duration, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::duration::to_decimal_hours;
use super::leave::Leave;
use super::shift::Shift;
use super::time_slot::TimeSlot;
use super::working_period::WorkingPeriod;

/// The closed enumeration of pay-rate hour buckets.
///
/// Every rate the cascade can produce is listed here; cascade branches and
/// the attribution allocator match exhaustively, so adding a rate forces
/// every consumer to handle it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HourBucket {
    /// Sum of curated worked-shift durations over the period.
    Weekly,
    /// Synthetic filler hours covering the unworked days of a partial period.
    Inactive,
    /// All recorded leave durations.
    Leaves,
    /// Paid leave durations.
    LeavesPaid,
    /// Unpaid leave durations.
    LeavesUnpaid,
    /// National-holiday leave durations.
    NationalHolidayLeaves,
    /// Remaining paid+holiday leave budget convertible into normal hours.
    NormalAvailable,
    /// Excess hours absorbed at the normal rate from the available pool.
    Normal,
    /// Hours beyond contract after normal absorption, rounded up to the minute.
    AdditionalHours,
    /// Hours covered by the contract.
    Contract,
    /// Contracted-but-unworked hours; the bench generation budget.
    Intercontract,
    /// Full-time supplementary hours at the 25% rate (first tier).
    SupplementaryTwentyFivePercent,
    /// Full-time supplementary hours at the 50% rate (beyond the first tier).
    SupplementaryFiftyPercent,
    /// Complementary hours inside the contractual allowance, at the 10% rate.
    ComplementaryTenPercent,
    /// Standard part-time complementary hours inside a tenth of the
    /// contracted hours, at the 11% rate.
    ComplementaryElevenPercent,
    /// Complementary hours beyond the reduced-rate fill, at the 25% rate.
    ComplementaryTwentyFivePercent,
    /// Sunday hours concurrent with the usual weekly planning.
    SundayContract,
    /// Sunday hours outside the usual weekly planning.
    SundayAdditional,
    /// Night hours concurrent with the usual weekly planning.
    NightContract,
    /// Night hours outside the usual weekly planning.
    NightAdditional,
    /// Public-holiday hours concurrent with the usual weekly planning.
    HolidayContract,
    /// Public-holiday hours outside the usual weekly planning.
    HolidayAdditional,
}

impl std::fmt::Display for HourBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Persistent bucket→duration totals.
///
/// A zero-valued bucket and an absent bucket are indistinguishable through
/// [`BucketTotals::get`]. Updates return a new value; the pipeline threads
/// copies through its stages instead of mutating shared state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BucketTotals(BTreeMap<HourBucket, Duration>);

impl BucketTotals {
    /// An empty totals map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The duration recorded for `bucket`, zero when absent.
    pub fn get(&self, bucket: HourBucket) -> Duration {
        self.0.get(&bucket).copied().unwrap_or_else(Duration::zero)
    }

    /// The recorded duration as decimal hours, for the export surface.
    pub fn hours(&self, bucket: HourBucket) -> Decimal {
        to_decimal_hours(self.get(bucket))
    }

    /// Returns a copy with `bucket` set to `value`.
    pub fn register(&self, bucket: HourBucket, value: Duration) -> Self {
        let mut map = self.0.clone();
        map.insert(bucket, value);
        Self(map)
    }

    /// Returns a copy with `value` added onto `bucket`.
    pub fn accumulate(&self, bucket: HourBucket, value: Duration) -> Self {
        let current = self.get(bucket);
        self.register(bucket, current + value)
    }

    /// The sum of the listed buckets.
    pub fn sum_of(&self, buckets: &[HourBucket]) -> Duration {
        buckets
            .iter()
            .fold(Duration::zero(), |acc, b| acc + self.get(*b))
    }

    /// Iterates recorded buckets in enum order.
    pub fn iter(&self) -> impl Iterator<Item = (HourBucket, Duration)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    /// Whether no bucket is recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for BucketTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let minutes: BTreeMap<HourBucket, i64> = self
            .0
            .iter()
            .map(|(bucket, value)| (*bucket, value.num_minutes()))
            .collect();
        minutes.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BucketTotals {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let minutes = BTreeMap::<HourBucket, i64>::deserialize(deserializer)?;
        Ok(Self(
            minutes
                .into_iter()
                .map(|(bucket, mins)| (bucket, Duration::minutes(mins)))
                .collect(),
        ))
    }
}

/// A shift's share of the period's bucket totals.
///
/// Keyed by the original (pre-fragmentation) shift id. For a given timecard,
/// summing one bucket across all analyzed shifts never exceeds the
/// timecard's total for that bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedShift {
    /// The original shift id the attribution is keyed by.
    pub shift_id: String,
    /// The bucket durations attributed to this shift.
    pub buckets: BucketTotals,
}

/// The central aggregate: one employee-contract-period timecard.
///
/// Created once per working period and threaded through the classification
/// pipeline; every stage consumes and returns the aggregate, so partially
/// computed timecards are ordinary values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingPeriodTimecard {
    /// The employee the timecard belongs to.
    pub employee_id: String,
    /// The contract the period was divided from.
    pub contract_id: String,
    /// The covered working period.
    pub period: WorkingPeriod,
    /// Curated shifts of the period (fragments included, bench fillers removed).
    pub shifts: Vec<Shift>,
    /// Curated leaves of the period.
    pub leaves: Vec<Leave>,
    /// Snapshot of the weekly worked-hours planning applicable to the period.
    pub planning: HashMap<Weekday, Vec<TimeSlot>>,
    /// Finalized bucket totals.
    pub buckets: BucketTotals,
    /// Meal tickets earned over the period.
    pub meal_tickets: u32,
    /// Per-shift attribution breakdown, populated by the allocator.
    pub shift_attributions: Option<Vec<AnalyzedShift>>,
}

impl WorkingPeriodTimecard {
    /// Creates an empty timecard for a working period.
    pub fn new(period: WorkingPeriod, planning: HashMap<Weekday, Vec<TimeSlot>>) -> Self {
        Self {
            employee_id: period.employee_id.clone(),
            contract_id: period.contract_id.clone(),
            period,
            shifts: Vec::new(),
            leaves: Vec::new(),
            planning,
            buckets: BucketTotals::new(),
            meal_tickets: 0,
            shift_attributions: None,
        }
    }

    /// Returns a copy with `bucket` registered at `value`.
    pub fn register(self, bucket: HourBucket, value: Duration) -> Self {
        Self {
            buckets: self.buckets.register(bucket, value),
            ..self
        }
    }

    /// Returns a copy carrying `shifts`.
    pub fn with_shifts(self, shifts: Vec<Shift>) -> Self {
        Self { shifts, ..self }
    }

    /// Returns a copy carrying `leaves`.
    pub fn with_leaves(self, leaves: Vec<Leave>) -> Self {
        Self { leaves, ..self }
    }

    /// Returns a copy with the meal-ticket count set.
    pub fn with_meal_tickets(self, meal_tickets: u32) -> Self {
        Self {
            meal_tickets,
            ..self
        }
    }

    /// Returns a copy with the attribution breakdown populated.
    pub fn with_attributions(self, attributions: Vec<AnalyzedShift>) -> Self {
        Self {
            shift_attributions: Some(attributions),
            ..self
        }
    }

    /// The planned slots for `weekday` in this period's planning snapshot,
    /// sorted by start.
    pub fn planning_slots(&self, weekday: Weekday) -> Vec<TimeSlot> {
        let mut slots = self.planning.get(&weekday).cloned().unwrap_or_default();
        slots.sort();
        slots
    }

    /// Whether a shift's time window is concurrent with the usual
    /// weekly-planning slot for its day.
    ///
    /// Concurrency uses inclusive inclusion: a shift exactly filling its
    /// planned slot is habitual work, not additional work. Shifts without a
    /// single-day window are never concurrent.
    pub fn shift_matches_planning(&self, shift: &Shift) -> bool {
        use chrono::Datelike;
        let Some(slot) = shift.time_slot() else {
            return false;
        };
        self.planning_slots(shift.date().weekday())
            .iter()
            .any(|planned| planned.includes_inclusive(&slot))
    }
}
