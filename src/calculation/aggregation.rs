//! Base aggregation and the additional-hours split.
//!
//! These are the opening stages of the classification chain: total the
//! curated shifts and leaves, build the available-normal pool, then split
//! the excess over the contracted hours into normal absorption and
//! additional hours.

use chrono::Duration;

use crate::models::duration::ceil_to_minute;
use crate::models::{
    CompensationClass, EmploymentContract, HourBucket, ShiftReason, WorkingPeriodTimecard,
};

/// Registers the period's base totals.
///
/// `Weekly` sums the curated worked shifts; `Inactive` sums the synthetic
/// fillers of a partial period; the leave buckets split by compensation
/// class; `NormalAvailable` is the paid+holiday leave pool consumed by the
/// additional-hours split.
pub fn aggregate_base_totals(timecard: WorkingPeriodTimecard) -> WorkingPeriodTimecard {
    let mut weekly = Duration::zero();
    let mut inactive = Duration::zero();
    for shift in &timecard.shifts {
        if shift.reason == ShiftReason::Inactive {
            inactive = inactive + shift.duration;
        } else {
            weekly = weekly + shift.duration;
        }
    }

    let mut leaves = Duration::zero();
    let mut paid = Duration::zero();
    let mut unpaid = Duration::zero();
    let mut holiday = Duration::zero();
    for leave in &timecard.leaves {
        leaves = leaves + leave.duration;
        match leave.compensation {
            CompensationClass::Paid => paid = paid + leave.duration,
            CompensationClass::Unpaid => unpaid = unpaid + leave.duration,
            CompensationClass::NationalHoliday => holiday = holiday + leave.duration,
        }
    }

    timecard
        .register(HourBucket::Weekly, weekly)
        .register(HourBucket::Inactive, inactive)
        .register(HourBucket::Leaves, leaves)
        .register(HourBucket::LeavesPaid, paid)
        .register(HourBucket::LeavesUnpaid, unpaid)
        .register(HourBucket::NationalHolidayLeaves, holiday)
        .register(HourBucket::NormalAvailable, paid + holiday)
}

/// Splits the hours beyond contract into normal absorption and additional
/// hours.
///
/// `raw = Weekly + Inactive + NationalHolidayLeaves − weekly_contracted_hours
/// + extra_hours_allowance`. A non-positive raw leaves no additional hours;
/// otherwise the available-normal pool absorbs as much as it can at the
/// normal rate and the remainder, rounded up to the minute, becomes
/// additional hours for the rate cascade.
pub fn split_additional_hours(
    timecard: WorkingPeriodTimecard,
    contract: &EmploymentContract,
) -> WorkingPeriodTimecard {
    let raw = timecard.buckets.sum_of(&[
        HourBucket::Weekly,
        HourBucket::Inactive,
        HourBucket::NationalHolidayLeaves,
    ]) - contract.weekly_contracted_hours
        + contract.extra_hours_allowance;

    if raw <= Duration::zero() {
        return timecard.register(HourBucket::AdditionalHours, Duration::zero());
    }

    let available = timecard.buckets.get(HourBucket::NormalAvailable);
    let normal = available.min(raw);
    let additional = ceil_to_minute((raw - normal).max(Duration::zero()));

    timecard
        .register(HourBucket::NormalAvailable, available - normal)
        .register(HourBucket::Normal, normal)
        .register(HourBucket::AdditionalHours, additional)
}
