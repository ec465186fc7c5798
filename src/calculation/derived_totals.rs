//! Derived contract and intercontract totals.

use chrono::Duration;

use crate::models::{EmploymentContract, HourBucket, WorkingPeriodTimecard};

/// Registers the period's derived totals.
///
/// `Intercontract` is the contracted time left uncovered by shifts, leaves
/// and inactive fillers; it becomes the bench generation budget.
/// `Contract` is the covered time net of additional hours. Both are floored
/// at zero.
pub fn compute_derived_totals(
    timecard: WorkingPeriodTimecard,
    contract: &EmploymentContract,
) -> WorkingPeriodTimecard {
    let covered = timecard.buckets.sum_of(&[
        HourBucket::Weekly,
        HourBucket::Leaves,
        HourBucket::Inactive,
    ]);
    let additional = timecard.buckets.get(HourBucket::AdditionalHours);

    let intercontract = (contract.weekly_contracted_hours - covered).max(Duration::zero());
    let contract_hours = (covered - additional).max(Duration::zero());

    timecard
        .register(HourBucket::Intercontract, intercontract)
        .register(HourBucket::Contract, contract_hours)
}
