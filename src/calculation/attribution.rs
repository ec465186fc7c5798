//! Premium attribution allocator.
//!
//! Redistributes the period's finalized bucket totals back onto the
//! individual shifts that generated them. Four independent surcharge
//! families are walked greedily over the billable shifts in priority order;
//! the per-family contributions are then merged per original shift.

use std::collections::BTreeMap;

use chrono::Duration;

use crate::config::RuleSet;
use crate::models::{
    AnalyzedShift, BucketTotals, HourBucket, Shift, WorkingPeriodTimecard,
};

/// The additional-hour rate buckets attributed as one family.
const ADDITIONAL_RATE_FAMILY: [HourBucket; 5] = [
    HourBucket::SupplementaryTwentyFivePercent,
    HourBucket::SupplementaryFiftyPercent,
    HourBucket::ComplementaryTenPercent,
    HourBucket::ComplementaryElevenPercent,
    HourBucket::ComplementaryTwentyFivePercent,
];

/// The holiday surcharge family.
const HOLIDAY_FAMILY: [HourBucket; 2] = [HourBucket::HolidayContract, HourBucket::HolidayAdditional];

/// The Sunday surcharge family.
const SUNDAY_FAMILY: [HourBucket; 2] = [HourBucket::SundayContract, HourBucket::SundayAdditional];

/// The night surcharge family.
const NIGHT_FAMILY: [HourBucket; 2] = [HourBucket::NightContract, HourBucket::NightAdditional];

/// A billable shift in the allocation walk, with its effective capacity for
/// the current family and what it has absorbed so far.
struct WalkEntry<'a> {
    shift: &'a Shift,
    capacity: Duration,
    attributed: Duration,
}

/// Walks one surcharge family and records its contributions.
///
/// Shifts are sorted ascending by `(priority, precedence_date)` where
/// Ponctuel outranks Remplacement which outranks Permanent; the sort is
/// stable, so equal keys keep their curated order. Each bucket's total is
/// poured over the walk; a shift absorbs up to its remaining capacity and
/// the walk stops early once the bucket is exhausted. Any remainder left
/// when total capacity is insufficient is dropped silently.
fn allocate_family(
    timecard: &WorkingPeriodTimecard,
    family: &[HourBucket],
    effective: impl Fn(&Shift) -> Duration,
    contributions: &mut BTreeMap<String, BucketTotals>,
) {
    let mut entries: Vec<WalkEntry<'_>> = timecard
        .shifts
        .iter()
        .filter(|s| s.reason.attribution_priority().is_some())
        .map(|s| WalkEntry {
            shift: s,
            capacity: effective(s),
            attributed: Duration::zero(),
        })
        .collect();
    entries.sort_by_key(|e| {
        (
            e.shift.reason.attribution_priority().unwrap_or(u8::MAX),
            e.shift.precedence_date,
        )
    });

    for bucket in family {
        let mut remaining = timecard.buckets.get(*bucket);
        if remaining <= Duration::zero() {
            continue;
        }
        for entry in &mut entries {
            let available = (entry.capacity - entry.attributed).max(Duration::zero());
            let take = remaining.min(available);
            if take > Duration::zero() {
                let totals = contributions
                    .entry(entry.shift.root_id().to_string())
                    .or_default();
                *totals = totals.accumulate(*bucket, take);
                entry.attributed = entry.attributed + take;
                remaining = remaining - take;
            }
            if remaining <= Duration::zero() {
                break;
            }
        }
    }
}

/// Populates the timecard's per-shift attribution breakdown.
///
/// The four families — additional-hour rates, holiday, Sunday and night —
/// are allocated independently; the night family remaps each shift's
/// effective window to its night portion. Contributions are merged per
/// original shift id (curation fragments reconcile through their source id)
/// and shifts with nothing attributed are dropped.
pub fn attribute_premiums(
    timecard: WorkingPeriodTimecard,
    rules: &RuleSet,
) -> WorkingPeriodTimecard {
    let mut contributions: BTreeMap<String, BucketTotals> = BTreeMap::new();

    allocate_family(
        &timecard,
        &ADDITIONAL_RATE_FAMILY,
        |s| s.duration,
        &mut contributions,
    );
    allocate_family(&timecard, &HOLIDAY_FAMILY, |s| s.duration, &mut contributions);
    allocate_family(&timecard, &SUNDAY_FAMILY, |s| s.duration, &mut contributions);
    allocate_family(
        &timecard,
        &NIGHT_FAMILY,
        |s| s.night_portion(rules.night_window.start, rules.night_window.end),
        &mut contributions,
    );

    let attributions: Vec<AnalyzedShift> = contributions
        .into_iter()
        .filter(|(_, buckets)| !buckets.is_empty())
        .map(|(shift_id, buckets)| AnalyzedShift { shift_id, buckets })
        .collect();

    timecard.with_attributions(attributions)
}
