//! Calendar period division.
//!
//! Splits a contract's active date range into averaging-aligned working
//! periods: a leading partial period up to the first Monday boundary, full
//! averaging windows from Monday to Monday, and a trailing partial period
//! after the last boundary.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::EngineResult;
use crate::models::{DateRange, EmploymentContract, WorkingPeriod};

/// The next Monday on or after `date`.
fn next_or_same_monday(date: NaiveDate) -> NaiveDate {
    let offset = (7 - date.weekday().num_days_from_monday()) % 7;
    date + Duration::days(i64::from(offset))
}

/// The previous Monday on or before `date`.
pub(crate) fn previous_or_same_monday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Divides a clipped `[start, end)` range of `contract`'s life into ordered
/// working periods.
///
/// The output partitions the range exactly: contiguous, non-overlapping,
/// ascending, with partial periods at either edge when the contract's
/// boundaries are not Monday-aligned.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timecard_engine::calculation::divide_into_working_periods;
/// use timecard_engine::models::DateRange;
/// # use std::collections::HashMap;
/// # use chrono::Duration;
/// # use timecard_engine::models::{ContractCategory, EmploymentContract};
/// # let contract = EmploymentContract {
/// #     id: "contract_001".to_string(),
/// #     employee_id: "emp_001".to_string(),
/// #     start_date: NaiveDate::from_ymd_opt(2023, 5, 4).unwrap(),
/// #     end_date: None,
/// #     overtime_averaging_period: Duration::days(7),
/// #     weekly_contracted_hours: Duration::hours(35),
/// #     category: ContractCategory::FullTime,
/// #     extra_hours_allowance: Duration::zero(),
/// #     weekly_planning: vec![],
/// #     availability_planning: vec![],
/// # };
/// // Thursday 2023-05-04 through Wednesday 2023-05-17.
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2023, 5, 4).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 5, 17).unwrap(),
/// ).unwrap();
///
/// let periods = divide_into_working_periods(&contract, &range).unwrap();
/// assert_eq!(periods.len(), 3); // Thu-Mon, Mon-Mon, Mon-Wed
/// ```
pub fn divide_into_working_periods(
    contract: &EmploymentContract,
    range: &DateRange,
) -> EngineResult<Vec<WorkingPeriod>> {
    let averaging_days = contract.averaging_days().max(1);
    let start = range.start();
    let end = range.end();

    let first_monday = next_or_same_monday(start);
    let last_monday = previous_or_same_monday(end);

    let period = |range: DateRange| WorkingPeriod {
        employee_id: contract.employee_id.clone(),
        contract_id: contract.id.clone(),
        range,
    };

    // The whole range fits before the first aligned boundary.
    if start < first_monday && end - Duration::days(1) < first_monday {
        return Ok(vec![period(*range)]);
    }

    let mut periods = Vec::new();

    if start < first_monday {
        periods.push(period(DateRange::new(start, first_monday)?));
    }

    let full_count = (last_monday - first_monday).num_days() / averaging_days;
    for i in 0..full_count {
        let period_start = first_monday + Duration::days(i * averaging_days);
        let period_end = period_start + Duration::days(averaging_days);
        periods.push(period(DateRange::new(period_start, period_end)?));
    }

    if end > last_monday {
        periods.push(period(DateRange::new(last_monday, end)?));
    }

    Ok(periods)
}
