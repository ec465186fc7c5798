//! Employment contract model and weekly planning.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::date_range::DateRange;
use super::duration::minutes;
use super::time_slot::TimeSlot;

/// The contract category driving the additional-hours rate cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractCategory {
    /// Full-time: additional hours are supplementary (25% then 50%).
    FullTime,
    /// Part-time with a contractual extra-hours allowance: complementary
    /// hours fill the allowance at 10%, the remainder at 25%.
    PartTimeWithAllowance,
    /// Standard part-time: complementary hours up to a tenth of the
    /// contracted hours at 11%, the remainder at 25%.
    PartTimeStandard,
}

/// One validity window of a weekly planning: for dates inside `validity`,
/// the expected slots per weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningWindow {
    /// The date range during which this weekly pattern applies.
    pub validity: DateRange,
    /// Planned time slots per weekday.
    pub slots: HashMap<Weekday, Vec<TimeSlot>>,
}

/// Represents an employment contract.
///
/// Contracts arrive already curated (merged where applicable) from the
/// upstream provider and are immutable for the duration of one computation.
/// Two separate weekday→slots plannings are carried: `weekly_planning`
/// describes the hours usually worked (drives holiday-leave substitution,
/// boundary filling and surcharge concurrency checks), while
/// `availability_planning` describes the contractual availability consumed
/// by the bench generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploymentContract {
    /// Unique identifier for the contract.
    pub id: String,
    /// The employee this contract belongs to.
    pub employee_id: String,
    /// First day the contract is active.
    pub start_date: NaiveDate,
    /// Day the contract ends (exclusive), if it has ended.
    pub end_date: Option<NaiveDate>,
    /// Length of the overtime averaging window, typically 7 days.
    #[serde(with = "minutes")]
    pub overtime_averaging_period: Duration,
    /// Contracted hours per averaging window.
    #[serde(with = "minutes")]
    pub weekly_contracted_hours: Duration,
    /// The category driving the rate cascade.
    pub category: ContractCategory,
    /// Contractual extra-hours allowance; only meaningful for
    /// [`ContractCategory::PartTimeWithAllowance`].
    #[serde(with = "minutes")]
    pub extra_hours_allowance: Duration,
    /// Usual worked-hours planning, per validity window.
    pub weekly_planning: Vec<PlanningWindow>,
    /// Contractual availability planning, per validity window.
    pub availability_planning: Vec<PlanningWindow>,
}

fn slots_in(windows: &[PlanningWindow], date: NaiveDate) -> Vec<TimeSlot> {
    let weekday = date.weekday();
    windows
        .iter()
        .find(|w| w.validity.contains(date))
        .and_then(|w| w.slots.get(&weekday))
        .map(|slots| {
            let mut slots = slots.clone();
            slots.sort();
            slots
        })
        .unwrap_or_default()
}

impl EmploymentContract {
    /// The averaging window length in whole days.
    pub fn averaging_days(&self) -> i64 {
        self.overtime_averaging_period.num_days()
    }

    /// The portion of `requested` during which this contract is active,
    /// if any. An open-ended contract is clipped to the requested end.
    pub fn active_range(&self, requested: &DateRange) -> Option<DateRange> {
        let end = self.end_date.unwrap_or(requested.end());
        let life = DateRange::new(self.start_date, end).ok()?;
        life.intersect(requested)
    }

    /// The usual worked-hours slots planned on `date`, sorted by start.
    ///
    /// Empty when no validity window covers the date or the weekday has no
    /// planned slots.
    pub fn planning_slots(&self, date: NaiveDate) -> Vec<TimeSlot> {
        slots_in(&self.weekly_planning, date)
    }

    /// The contractual availability slots on `date`, sorted by start.
    pub fn availability_slots(&self, date: NaiveDate) -> Vec<TimeSlot> {
        slots_in(&self.availability_planning, date)
    }

    /// The weekly worked-hours pattern applicable on `date`, as a
    /// weekday→slots snapshot for the timecard.
    pub fn planning_snapshot(&self, date: NaiveDate) -> HashMap<Weekday, Vec<TimeSlot>> {
        self.weekly_planning
            .iter()
            .find(|w| w.validity.contains(date))
            .map(|w| w.slots.clone())
            .unwrap_or_default()
    }
}
