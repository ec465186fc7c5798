//! Calculation logic for the timecard engine.
//!
//! This module contains the full classification chain: public-holiday
//! computation, working-period division, shift/leave curation, base
//! aggregation and the additional-hours split, the rate cascade, the
//! Sunday/night/holiday surcharges, derived totals, meal tickets, premium
//! attribution and bench generation, plus the per-employee pipeline driver.

mod aggregation;
mod attribution;
mod bench;
mod curation;
mod derived_totals;
mod holiday_surcharge;
mod meal_tickets;
mod night_surcharge;
mod period_division;
mod pipeline;
mod public_holidays;
mod rate_cascade;
mod sunday_surcharge;

pub use aggregation::{aggregate_base_totals, split_additional_hours};
pub use attribution::attribute_premiums;
pub use bench::{generate_bench, generate_bench_slots, group_bench_slots};
pub use curation::{curate_leaves, curate_shifts, fill_partial_period};
pub use derived_totals::compute_derived_totals;
pub use holiday_surcharge::apply_holiday_surcharge;
pub use meal_tickets::count_meal_tickets;
pub use night_surcharge::apply_night_surcharge;
pub use period_division::divide_into_working_periods;
pub use pipeline::{
    EmployeeComputation, PeriodFailure, compute_employee, compute_period_timecard,
};
pub use public_holidays::{
    HolidayZone, PublicHoliday, holidays_in_range, holidays_in_year, is_public_holiday,
};
pub use rate_cascade::apply_rate_cascade;
pub use sunday_surcharge::apply_sunday_surcharge;
