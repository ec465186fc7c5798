//! Rule parameter types for the timecard engine.
//!
//! The statutory thresholds and windows driving the classification cascade
//! live here as named constants, bundled into a strongly-typed [`RuleSet`]
//! that can also be deserialized from a YAML file.

use chrono::{Duration, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::duration::minutes;
use crate::models::TimeSlot;

/// Full-time supplementary hours switch from the 25% to the 50% rate past
/// this many hours.
pub const SUPPLEMENTARY_THRESHOLD_HOURS: i64 = 8;

/// Standard part-time contracts fill their reduced-rate complementary bucket
/// up to this fraction of the contracted hours.
pub const COMPLEMENTARY_STANDARD_FRACTION: Decimal = Decimal::from_parts(1, 0, 0, false, 1); // 0.1

/// The reduced-rate complementary fill is floored to this step.
pub const COMPLEMENTARY_ROUNDING_MINUTES: i64 = 15;

/// Night hours start at this hour of the evening.
pub const NIGHT_START_HOUR: u32 = 21;

/// Night hours end at this hour of the following morning.
pub const NIGHT_END_HOUR: u32 = 6;

/// Part-time meal tickets require at least this seniority.
pub const MEAL_TICKET_MIN_SENIORITY_DAYS: i64 = 15;

/// Part-time meal tickets require at least this many worked hours in the day.
pub const MEAL_TICKET_MIN_DAILY_HOURS: i64 = 6;

/// Part-time meal tickets require a shift overlapping this midday window.
pub const MEAL_TICKET_WINDOW_START_HOUR: u32 = 11;

/// End of the qualifying midday window.
pub const MEAL_TICKET_WINDOW_END_HOUR: u32 = 15;

/// The noon pivot: one shift must start before it and one must end after it.
pub const NOON_HOUR: u32 = 12;

/// Default locale code for the public-holiday rule set.
pub const DEFAULT_HOLIDAY_ZONE: &str = "FR";

/// The night window, expressed as an evening start and a next-morning end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightWindow {
    /// Evening start of the night window.
    pub start: NaiveTime,
    /// Next-morning end of the night window.
    pub end: NaiveTime,
}

/// Parameters of the part-time meal-ticket rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealTicketRules {
    /// Minimum employee seniority in days.
    pub min_seniority_days: i64,
    /// Minimum total shift duration over the day.
    #[serde(with = "minutes")]
    pub min_daily_hours: Duration,
    /// A shift must overlap this window.
    pub midday_window: TimeSlot,
    /// One shift must start before this time and one must end after it.
    pub noon: NaiveTime,
}

/// The rule parameter set consumed by the classification pipeline.
///
/// [`RuleSet::default`] carries the statutory constants; deployments can
/// override them from a YAML file through the loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Full-time 25%→50% supplementary boundary.
    #[serde(with = "minutes")]
    pub supplementary_threshold: Duration,
    /// Fraction of contracted hours filled at the 11% complementary rate.
    pub complementary_standard_fraction: Decimal,
    /// Rounding step for the 11% complementary fill.
    #[serde(with = "minutes")]
    pub complementary_rounding: Duration,
    /// The night surcharge window.
    pub night_window: NightWindow,
    /// The part-time meal-ticket rule parameters.
    pub meal_ticket: MealTicketRules,
    /// Locale code for the public-holiday rule set.
    pub holiday_zone: String,
}

fn hms(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).expect("constant hour is valid")
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            supplementary_threshold: Duration::hours(SUPPLEMENTARY_THRESHOLD_HOURS),
            complementary_standard_fraction: COMPLEMENTARY_STANDARD_FRACTION,
            complementary_rounding: Duration::minutes(COMPLEMENTARY_ROUNDING_MINUTES),
            night_window: NightWindow {
                start: hms(NIGHT_START_HOUR),
                end: hms(NIGHT_END_HOUR),
            },
            meal_ticket: MealTicketRules {
                min_seniority_days: MEAL_TICKET_MIN_SENIORITY_DAYS,
                min_daily_hours: Duration::hours(MEAL_TICKET_MIN_DAILY_HOURS),
                midday_window: TimeSlot::new(
                    hms(MEAL_TICKET_WINDOW_START_HOUR),
                    hms(MEAL_TICKET_WINDOW_END_HOUR),
                )
                .expect("constant window is valid"),
                noon: hms(NOON_HOUR),
            },
            holiday_zone: DEFAULT_HOLIDAY_ZONE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_carries_statutory_constants() {
        let rules = RuleSet::default();
        assert_eq!(rules.supplementary_threshold, Duration::hours(8));
        assert_eq!(
            rules.complementary_standard_fraction,
            Decimal::from_str("0.1").unwrap()
        );
        assert_eq!(rules.complementary_rounding, Duration::minutes(15));
        assert_eq!(rules.night_window.start, hms(21));
        assert_eq!(rules.night_window.end, hms(6));
        assert_eq!(rules.meal_ticket.min_seniority_days, 15);
        assert_eq!(rules.meal_ticket.min_daily_hours, Duration::hours(6));
        assert_eq!(rules.meal_ticket.noon, hms(12));
        assert_eq!(rules.holiday_zone, "FR");
    }

    #[test]
    fn test_yaml_round_trip() {
        let rules = RuleSet::default();
        let yaml = serde_yaml::to_string(&rules).unwrap();
        let back: RuleSet = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, rules);
    }
}
