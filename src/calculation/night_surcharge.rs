//! Night surcharge partitioning.

use chrono::Duration;

use crate::config::RuleSet;
use crate::models::{HourBucket, ShiftReason, WorkingPeriodTimecard};

/// Partitions the period's night hours into contract-rate and
/// additional-rate buckets.
///
/// Only the portion of a shift falling inside the configured night window
/// counts; the contract/additional split follows the same planning
/// concurrency rule as the other surcharges.
pub fn apply_night_surcharge(
    timecard: WorkingPeriodTimecard,
    rules: &RuleSet,
) -> WorkingPeriodTimecard {
    let mut contract_hours = Duration::zero();
    let mut additional_hours = Duration::zero();

    for shift in &timecard.shifts {
        if shift.reason == ShiftReason::Inactive {
            continue;
        }
        let night = shift.night_portion(rules.night_window.start, rules.night_window.end);
        if night <= Duration::zero() {
            continue;
        }
        if timecard.shift_matches_planning(shift) {
            contract_hours = contract_hours + night;
        } else {
            additional_hours = additional_hours + night;
        }
    }

    let mut timecard = timecard;
    if contract_hours > Duration::zero() {
        timecard = timecard.register(HourBucket::NightContract, contract_hours);
    }
    if additional_hours > Duration::zero() {
        timecard = timecard.register(HourBucket::NightAdditional, additional_hours);
    }
    timecard
}
