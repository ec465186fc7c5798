//! Meal ticket entitlement.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::config::RuleSet;
use crate::models::{
    ContractCategory, Employee, EmploymentContract, Shift, ShiftReason, WorkingPeriodTimecard,
};

/// Whether a part-time day qualifies for a ticket.
///
/// Requires the configured seniority, a minimum worked total, work on both
/// sides of noon, and at least one shift overlapping the midday window. A
/// day earns at most one ticket however many shifts qualify.
fn part_time_day_qualifies(
    day: NaiveDate,
    shifts: &[&Shift],
    employee: &Employee,
    rules: &RuleSet,
) -> bool {
    if employee.seniority_days(day) < rules.meal_ticket.min_seniority_days {
        return false;
    }

    let total = shifts
        .iter()
        .fold(Duration::zero(), |acc, s| acc + s.duration);
    if total < rules.meal_ticket.min_daily_hours {
        return false;
    }

    let noon = day.and_time(rules.meal_ticket.noon);
    let starts_before_noon = shifts.iter().any(|s| s.start < noon);
    let ends_after_noon = shifts.iter().any(|s| s.end() > noon);
    if !starts_before_noon || !ends_after_noon {
        return false;
    }

    let window_start = day.and_time(rules.meal_ticket.midday_window.start());
    let window_end = day.and_time(rules.meal_ticket.midday_window.end());
    shifts
        .iter()
        .any(|s| s.start < window_end && s.end() > window_start)
}

/// Counts the period's meal tickets.
///
/// Full-time contracts earn one ticket per calendar day with any worked
/// shift; part-time contracts apply the qualification rule per day.
/// Synthetic inactive fillers never earn tickets.
pub fn count_meal_tickets(
    timecard: WorkingPeriodTimecard,
    employee: &Employee,
    contract: &EmploymentContract,
    rules: &RuleSet,
) -> WorkingPeriodTimecard {
    let mut by_day: BTreeMap<NaiveDate, Vec<&Shift>> = BTreeMap::new();
    for shift in &timecard.shifts {
        if shift.reason == ShiftReason::Inactive {
            continue;
        }
        by_day.entry(shift.date()).or_default().push(shift);
    }

    let tickets = match contract.category {
        ContractCategory::FullTime => by_day.len() as u32,
        ContractCategory::PartTimeWithAllowance | ContractCategory::PartTimeStandard => by_day
            .iter()
            .filter(|(day, shifts)| part_time_day_qualifies(**day, shifts, employee, rules))
            .count() as u32,
    };

    timecard.with_meal_tickets(tickets)
}
