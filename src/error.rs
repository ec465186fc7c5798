//! Error types for the timecard engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during timecard computation.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// The main error type for the timecard engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timecard_engine::error::EngineError;
///
/// let error = EngineError::UnsupportedLocale {
///     code: "DE-BY".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unsupported locale code: DE-BY");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date range was constructed with `end <= start`.
    #[error("Invalid date range: {start} to {end}")]
    InvalidRange {
        /// The requested start date (inclusive).
        start: NaiveDate,
        /// The requested end date (exclusive).
        end: NaiveDate,
    },

    /// A time slot was constructed with `end <= start`.
    #[error("Invalid time slot: {start} to {end}")]
    InvalidSlot {
        /// The requested slot start.
        start: NaiveTime,
        /// The requested slot end.
        end: NaiveTime,
    },

    /// No contract covers the requested computation range.
    #[error("No contract for employee '{employee_id}' covers {start} to {end}")]
    NoMatchingContract {
        /// The employee whose contracts were searched.
        employee_id: String,
        /// The requested start date (inclusive).
        start: NaiveDate,
        /// The requested end date (exclusive).
        end: NaiveDate,
    },

    /// Holiday computation was requested for an unrecognized subdivision code.
    #[error("Unsupported locale code: {code}")]
    UnsupportedLocale {
        /// The locale code that was not recognized.
        code: String,
    },

    /// A contract has no planning window covering the given date.
    #[error("Contract '{contract_id}' has no planning covering {date}")]
    MissingPlanning {
        /// The contract whose planning was searched.
        contract_id: String,
        /// The date for which planning was requested.
        date: NaiveDate,
    },

    /// Rule parameter file was not found at the specified path.
    #[error("Rule file not found: {path}")]
    RulesNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rule parameter file could not be parsed.
    #[error("Failed to parse rule file '{path}': {message}")]
    RulesParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
