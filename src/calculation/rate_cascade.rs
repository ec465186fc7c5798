//! The additional-hours rate cascade.
//!
//! Splits a period's additional hours into rate buckets according to the
//! contract category: supplementary tiers for full-time contracts,
//! complementary tiers for the two part-time flavors.

use chrono::Duration;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::RuleSet;
use crate::models::{ContractCategory, EmploymentContract, HourBucket, WorkingPeriodTimecard};

/// The reduced-rate fill ceiling for a standard part-time contract: a
/// fraction of the contracted hours, floored to the rounding step.
fn standard_complementary_ceiling(contract: &EmploymentContract, rules: &RuleSet) -> Duration {
    let contracted_minutes = Decimal::from(contract.weekly_contracted_hours.num_minutes());
    let step_minutes = Decimal::from(rules.complementary_rounding.num_minutes().max(1));
    let raw_minutes = contracted_minutes * rules.complementary_standard_fraction;
    let steps = (raw_minutes / step_minutes).floor().to_i64().unwrap_or(0);
    Duration::minutes(steps * rules.complementary_rounding.num_minutes().max(1))
}

/// Applies the rate cascade to the period's additional hours.
///
/// - Full-time: the first tier (up to the supplementary threshold) earns the
///   25% supplementary rate, the remainder the 50% rate.
/// - Part-time with allowance: hours inside the contractual allowance earn
///   the 10% complementary rate, the remainder the 25% rate.
/// - Standard part-time: hours up to a tenth of the contracted hours
///   (floored to the rounding step) earn the 11% complementary rate, the
///   remainder the 25% rate.
///
/// Zero-valued buckets are not registered.
pub fn apply_rate_cascade(
    timecard: WorkingPeriodTimecard,
    contract: &EmploymentContract,
    rules: &RuleSet,
) -> WorkingPeriodTimecard {
    let additional = timecard.buckets.get(HourBucket::AdditionalHours);
    if additional <= Duration::zero() {
        return timecard;
    }

    let (first_bucket, first_ceiling, rest_bucket) = match contract.category {
        ContractCategory::FullTime => (
            HourBucket::SupplementaryTwentyFivePercent,
            rules.supplementary_threshold,
            HourBucket::SupplementaryFiftyPercent,
        ),
        ContractCategory::PartTimeWithAllowance => (
            HourBucket::ComplementaryTenPercent,
            contract.extra_hours_allowance,
            HourBucket::ComplementaryTwentyFivePercent,
        ),
        ContractCategory::PartTimeStandard => (
            HourBucket::ComplementaryElevenPercent,
            standard_complementary_ceiling(contract, rules),
            HourBucket::ComplementaryTwentyFivePercent,
        ),
    };

    let first = additional.min(first_ceiling).max(Duration::zero());
    let rest = additional - first;

    let mut timecard = timecard;
    if first > Duration::zero() {
        timecard = timecard.register(first_bucket, first);
    }
    if rest > Duration::zero() {
        timecard = timecard.register(rest_bucket, rest);
    }
    timecard
}
