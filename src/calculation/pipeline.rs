//! The per-period classification chain and the per-employee driver.
//!
//! One call per employee: contracts are clipped to the requested range and
//! divided into working periods; each period runs the full chain (curation,
//! aggregation, cascade, surcharges, derived totals, meal tickets,
//! attribution, bench generation). A failing period is recorded and skipped
//! without corrupting its siblings.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::RuleSet;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    BenchAllocation, DateRange, Employee, EmploymentContract, Leave, Shift, WorkingPeriod,
    WorkingPeriodTimecard,
};

use super::aggregation::{aggregate_base_totals, split_additional_hours};
use super::attribution::attribute_premiums;
use super::bench::generate_bench;
use super::curation::{curate_leaves, curate_shifts, fill_partial_period};
use super::derived_totals::compute_derived_totals;
use super::holiday_surcharge::apply_holiday_surcharge;
use super::meal_tickets::count_meal_tickets;
use super::night_surcharge::apply_night_surcharge;
use super::period_division::divide_into_working_periods;
use super::public_holidays::HolidayZone;
use super::rate_cascade::apply_rate_cascade;
use super::sunday_surcharge::apply_sunday_surcharge;

/// A working period whose computation failed.
///
/// Sibling periods are unaffected; the caller decides whether to abort the
/// employee or report a partial result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodFailure {
    /// The period that failed.
    pub period: WorkingPeriod,
    /// The rendered failure cause.
    pub message: String,
}

/// The output envelope of one employee computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeComputation {
    /// Identifier stamped on this computation run.
    pub computation_id: Uuid,
    /// The employee computed.
    pub employee_id: String,
    /// The requested date range.
    pub range: DateRange,
    /// One finalized timecard per successfully computed working period.
    pub timecards: Vec<WorkingPeriodTimecard>,
    /// The generated bench allocations, across all periods.
    pub bench_allocations: Vec<BenchAllocation>,
    /// Periods that failed, with their causes.
    pub failures: Vec<PeriodFailure>,
}

/// Runs the full classification chain for one working period.
///
/// Returns the finalized timecard and the bench allocations generated from
/// its intercontract budget.
///
/// # Errors
///
/// [`EngineError::MissingPlanning`] when the contract has no weekly-planning
/// validity window covering the period.
pub fn compute_period_timecard(
    employee: &Employee,
    contract: &EmploymentContract,
    period: WorkingPeriod,
    shifts: &[Shift],
    leaves: &[Leave],
    rules: &RuleSet,
    zone: HolidayZone,
) -> EngineResult<(WorkingPeriodTimecard, Vec<BenchAllocation>)> {
    let period_start = period.range.start();
    if !contract
        .weekly_planning
        .iter()
        .any(|w| w.validity.contains(period_start))
    {
        return Err(EngineError::MissingPlanning {
            contract_id: contract.id.clone(),
            date: period_start,
        });
    }

    let period_shifts: Vec<Shift> = shifts
        .iter()
        .filter(|s| period.range.contains(s.date()))
        .cloned()
        .collect();
    let period_leaves: Vec<Leave> = leaves
        .iter()
        .filter(|l| period.range.contains(l.date))
        .cloned()
        .collect();
    let existing_bench: Vec<Shift> = period_shifts
        .iter()
        .filter(|s| s.reason.is_bench_filler())
        .cloned()
        .collect();

    let curated_leaves = curate_leaves(&period_leaves, contract);
    let mut curated_shifts = curate_shifts(&period_shifts, &curated_leaves);
    curated_shifts.extend(fill_partial_period(&period, contract));

    let timecard = WorkingPeriodTimecard::new(period, contract.planning_snapshot(period_start))
        .with_shifts(curated_shifts)
        .with_leaves(curated_leaves);

    let timecard = aggregate_base_totals(timecard);
    let timecard = split_additional_hours(timecard, contract);
    let timecard = apply_rate_cascade(timecard, contract, rules);
    let timecard = apply_sunday_surcharge(timecard);
    let timecard = apply_night_surcharge(timecard, rules);
    let timecard = apply_holiday_surcharge(timecard, zone);
    let timecard = compute_derived_totals(timecard, contract);
    let timecard = count_meal_tickets(timecard, employee, contract, rules);
    let timecard = attribute_premiums(timecard, rules);

    let bench = generate_bench(&timecard, contract, &existing_bench);
    Ok((timecard, bench))
}

/// Computes every working period of `employee` over `range`.
///
/// # Errors
///
/// [`EngineError::NoMatchingContract`] when no contract covers any part of
/// the range, and [`EngineError::UnsupportedLocale`] when the configured
/// holiday zone is unknown. Per-period failures are collected in the
/// result, not returned as errors.
pub fn compute_employee(
    employee: &Employee,
    contracts: &[EmploymentContract],
    shifts: &[Shift],
    leaves: &[Leave],
    range: &DateRange,
    rules: &RuleSet,
) -> EngineResult<EmployeeComputation> {
    let zone = HolidayZone::parse(&rules.holiday_zone)?;
    info!(employee_id = %employee.id, range = %range, "Computing employee timecards");

    let active: Vec<(&EmploymentContract, DateRange)> = contracts
        .iter()
        .filter(|c| c.employee_id == employee.id)
        .filter_map(|c| c.active_range(range).map(|clipped| (c, clipped)))
        .collect();
    if active.is_empty() {
        return Err(EngineError::NoMatchingContract {
            employee_id: employee.id.clone(),
            start: range.start(),
            end: range.end(),
        });
    }

    let mut computation = EmployeeComputation {
        computation_id: Uuid::new_v4(),
        employee_id: employee.id.clone(),
        range: *range,
        timecards: Vec::new(),
        bench_allocations: Vec::new(),
        failures: Vec::new(),
    };

    for (contract, clipped) in active {
        let periods = divide_into_working_periods(contract, &clipped)?;
        debug!(
            contract_id = %contract.id,
            periods = periods.len(),
            "Contract range divided"
        );
        for period in periods {
            match compute_period_timecard(
                employee,
                contract,
                period.clone(),
                shifts,
                leaves,
                rules,
                zone,
            ) {
                Ok((timecard, bench)) => {
                    debug!(
                        contract_id = %contract.id,
                        period = %timecard.period.range,
                        meal_tickets = timecard.meal_tickets,
                        "Period computed"
                    );
                    computation.timecards.push(timecard);
                    computation.bench_allocations.extend(bench);
                }
                Err(error) => {
                    warn!(
                        contract_id = %contract.id,
                        period = %period.range,
                        %error,
                        "Period computation failed"
                    );
                    computation.failures.push(PeriodFailure {
                        period,
                        message: error.to_string(),
                    });
                }
            }
        }
    }

    Ok(computation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContractCategory, PlanningWindow, ShiftReason, TimeSlot};
    use chrono::{Duration, NaiveDate, NaiveTime, Weekday};
    use std::collections::HashMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn employee() -> Employee {
        Employee {
            id: "emp_001".to_string(),
            employment_start_date: date(2022, 1, 1),
        }
    }

    fn weekday_planning() -> Vec<PlanningWindow> {
        let mut slots = HashMap::new();
        for day in [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu] {
            slots.insert(
                day,
                vec![TimeSlot::new(time(9), time(15)).unwrap()],
            );
        }
        vec![PlanningWindow {
            validity: DateRange::new(date(2023, 1, 2), date(2024, 1, 1)).unwrap(),
            slots,
        }]
    }

    fn contract() -> EmploymentContract {
        EmploymentContract {
            id: "contract_001".to_string(),
            employee_id: "emp_001".to_string(),
            start_date: date(2023, 1, 2),
            end_date: None,
            overtime_averaging_period: Duration::days(7),
            weekly_contracted_hours: Duration::hours(24),
            category: ContractCategory::PartTimeStandard,
            extra_hours_allowance: Duration::zero(),
            weekly_planning: weekday_planning(),
            availability_planning: weekday_planning(),
        }
    }

    fn shift(id: &str, day: NaiveDate, start: u32, hours: i64) -> Shift {
        Shift {
            id: id.to_string(),
            employee_id: "emp_001".to_string(),
            client_id: "client_001".to_string(),
            start: day.and_time(time(start)),
            duration: Duration::hours(hours),
            reason: ShiftReason::Permanent,
            precedence_date: None,
            source_id: None,
        }
    }

    // ==========================================================================
    // PL-001: no covering contract is a hard error
    // ==========================================================================
    #[test]
    fn test_pl_001_no_matching_contract() {
        let range = DateRange::new(date(2022, 6, 1), date(2022, 6, 8)).unwrap();
        let result = compute_employee(
            &employee(),
            &[contract()],
            &[],
            &[],
            &range,
            &RuleSet::default(),
        );
        assert!(matches!(
            result,
            Err(EngineError::NoMatchingContract { .. })
        ));
    }

    // ==========================================================================
    // PL-002: a period without planning fails alone
    // ==========================================================================
    #[test]
    fn test_pl_002_period_failure_does_not_corrupt_siblings() {
        let mut contract = contract();
        // Planning only covers the first of the two requested weeks.
        contract.weekly_planning[0].validity =
            DateRange::new(date(2023, 1, 2), date(2023, 5, 8)).unwrap();

        let range = DateRange::new(date(2023, 5, 1), date(2023, 5, 15)).unwrap();
        let computation = compute_employee(
            &employee(),
            &[contract],
            &[shift("shift_001", date(2023, 5, 2), 9, 6)],
            &[],
            &range,
            &RuleSet::default(),
        )
        .unwrap();

        assert_eq!(computation.timecards.len(), 1);
        assert_eq!(computation.failures.len(), 1);
        assert_eq!(
            computation.failures[0].period.range,
            DateRange::new(date(2023, 5, 8), date(2023, 5, 15)).unwrap()
        );
        assert!(computation.failures[0].message.contains("no planning"));
    }

    // ==========================================================================
    // PL-003: the driver produces one timecard per working period
    // ==========================================================================
    #[test]
    fn test_pl_003_one_timecard_per_period() {
        let range = DateRange::new(date(2023, 5, 1), date(2023, 5, 15)).unwrap();
        let computation = compute_employee(
            &employee(),
            &[contract()],
            &[
                shift("shift_001", date(2023, 5, 2), 9, 6),
                shift("shift_002", date(2023, 5, 9), 9, 6),
            ],
            &[],
            &range,
            &RuleSet::default(),
        )
        .unwrap();

        assert_eq!(computation.timecards.len(), 2);
        assert!(computation.failures.is_empty());
        assert_eq!(computation.employee_id, "emp_001");
        for timecard in &computation.timecards {
            assert!(timecard.shift_attributions.is_some());
        }
    }

    #[test]
    fn test_unsupported_zone_is_a_hard_error() {
        let mut rules = RuleSet::default();
        rules.holiday_zone = "DE".to_string();
        let range = DateRange::new(date(2023, 5, 1), date(2023, 5, 8)).unwrap();
        let result = compute_employee(&employee(), &[contract()], &[], &[], &range, &rules);
        assert!(matches!(result, Err(EngineError::UnsupportedLocale { .. })));
    }

    #[test]
    fn test_contracts_of_other_employees_ignored() {
        let mut foreign = contract();
        foreign.employee_id = "emp_999".to_string();
        let range = DateRange::new(date(2023, 5, 1), date(2023, 5, 8)).unwrap();
        let result = compute_employee(
            &employee(),
            &[foreign],
            &[],
            &[],
            &range,
            &RuleSet::default(),
        );
        assert!(matches!(
            result,
            Err(EngineError::NoMatchingContract { .. })
        ));
    }
}
