//! Error types for roster loading and pay statistics.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the loader and the calculations can report.

use thiserror::Error;

/// The main error type for roster statistics.
///
/// # Example
///
/// ```
/// use roster_stats::error::EngineError;
///
/// let error = EngineError::RosterNotFound {
///     path: "res/missing.txt".to_string(),
/// };
/// assert_eq!(error.to_string(), "Roster file not found: res/missing.txt");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The roster file could not be opened.
    #[error("Roster file not found: {path}")]
    RosterNotFound {
        /// The path that could not be opened.
        path: String,
    },

    /// The roster file was opened but reading it failed.
    #[error("Failed to read roster file '{path}': {message}")]
    RosterRead {
        /// The path being read.
        path: String,
        /// A description of the I/O error.
        message: String,
    },

    /// A line did not contain enough comma-separated fields.
    #[error("Malformed record on line {line}: expected at least 5 fields, found {fields}")]
    MalformedRecord {
        /// The 1-based line number.
        line: usize,
        /// The number of fields found.
        fields: usize,
    },

    /// A numeric field could not be parsed.
    #[error("Invalid {field} on line {line}: '{value}'")]
    InvalidField {
        /// The 1-based line number.
        line: usize,
        /// The name of the field (`sin`, `salary` or `rate`).
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },

    /// A statistic that divides by the record count was requested for an empty roster.
    #[error("Roster contains no employee records")]
    EmptyRoster,

    /// A calculation left the range of the money type.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
