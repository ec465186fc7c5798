//! Minute-precision duration helpers.
//!
//! All durations in the engine are carried as [`chrono::Duration`] and
//! serialized as whole minutes. This module provides the serde adapter plus
//! the rounding helpers used by the classification pipeline.

use chrono::Duration;
use rust_decimal::Decimal;

/// Serde adapter serializing a [`Duration`] as a whole number of minutes.
///
/// Use with `#[serde(with = "crate::models::duration::minutes")]`.
pub mod minutes {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes the duration as its total number of minutes.
    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(value.num_minutes())
    }

    /// Deserializes a number of minutes into a duration.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let mins = i64::deserialize(deserializer)?;
        Ok(Duration::minutes(mins))
    }
}

/// Rounds a duration up to the next whole minute.
///
/// Durations already on a minute boundary are returned unchanged.
///
/// # Example
///
/// ```
/// use chrono::Duration;
/// use timecard_engine::models::duration::ceil_to_minute;
///
/// assert_eq!(ceil_to_minute(Duration::seconds(90)), Duration::minutes(2));
/// assert_eq!(ceil_to_minute(Duration::minutes(5)), Duration::minutes(5));
/// ```
pub fn ceil_to_minute(value: Duration) -> Duration {
    let secs = value.num_seconds();
    let mut mins = secs.div_euclid(60);
    if secs.rem_euclid(60) > 0 {
        mins += 1;
    }
    Duration::minutes(mins)
}

/// Rounds a duration down to the nearest multiple of `step`.
///
/// Used by the standard part-time complementary branch, which fills its
/// reduced-rate bucket up to a tenth of the contracted hours floored to the
/// nearest quarter hour.
///
/// # Example
///
/// ```
/// use chrono::Duration;
/// use timecard_engine::models::duration::floor_to_step;
///
/// let step = Duration::minutes(15);
/// assert_eq!(floor_to_step(Duration::minutes(144), step), Duration::minutes(135));
/// assert_eq!(floor_to_step(Duration::minutes(135), step), Duration::minutes(135));
/// ```
pub fn floor_to_step(value: Duration, step: Duration) -> Duration {
    let step_mins = step.num_minutes();
    if step_mins <= 0 {
        return value;
    }
    let mins = value.num_minutes();
    Duration::minutes(mins - mins.rem_euclid(step_mins))
}

/// Converts a duration to decimal hours.
///
/// This is the view the export collaborator consumes: bucket totals are
/// computed in minutes but reported in decimal hours.
///
/// # Example
///
/// ```
/// use chrono::Duration;
/// use rust_decimal::Decimal;
/// use timecard_engine::models::duration::to_decimal_hours;
///
/// assert_eq!(to_decimal_hours(Duration::minutes(135)), Decimal::new(225, 2)); // 2.25
/// ```
pub fn to_decimal_hours(value: Duration) -> Decimal {
    Decimal::new(value.num_minutes(), 0) / Decimal::new(60, 0)
}
