//! Employee model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents an employee whose timecards are being computed.
///
/// The upstream provider supplies one employee per computation together with
/// their shifts, leaves and contracts. Only the fields this core consumes
/// are carried: the identifier ties records together, the employment start
/// date drives the meal-ticket seniority rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The date the employee started employment.
    pub employment_start_date: NaiveDate,
}

impl Employee {
    /// The employee's seniority in days as of `date`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use timecard_engine::models::Employee;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     employment_start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    /// };
    /// assert_eq!(employee.seniority_days(NaiveDate::from_ymd_opt(2023, 1, 16).unwrap()), 15);
    /// ```
    pub fn seniority_days(&self, date: NaiveDate) -> i64 {
        (date - self.employment_start_date).num_days()
    }
}
