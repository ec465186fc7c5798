//! Rule parameter configuration for the timecard engine.
//!
//! This module provides the statutory rule constants, the strongly-typed
//! [`RuleSet`] bundling them, and the YAML loader for deployments that
//! override them.

mod loader;
mod types;

pub use loader::RuleLoader;
pub use types::{
    COMPLEMENTARY_ROUNDING_MINUTES, COMPLEMENTARY_STANDARD_FRACTION, DEFAULT_HOLIDAY_ZONE,
    MEAL_TICKET_MIN_DAILY_HOURS, MEAL_TICKET_MIN_SENIORITY_DAYS, MEAL_TICKET_WINDOW_END_HOUR,
    MEAL_TICKET_WINDOW_START_HOUR, MealTicketRules, NIGHT_END_HOUR, NIGHT_START_HOUR, NOON_HOUR,
    NightWindow, RuleSet, SUPPLEMENTARY_THRESHOLD_HOURS,
};
