//! Error types for the room availability engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a query, the configuration layer or the flat-file
//! data source can report.

use thiserror::Error;

use crate::models::PeriodId;

/// The main error type for the room availability engine.
///
/// Missing data is never an error: a room or weekday that has no
/// reservations simply reads as free. Only data that cannot be interpreted
/// at all (an unknown weekday token, an unknown period) and loader failures
/// surface here.
///
/// # Example
///
/// ```
/// use room_availability::error::EngineError;
///
/// let error = EngineError::UnknownPeriod { id: 9 };
/// assert_eq!(error.to_string(), "Unknown period: 9");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A weekday token could not be mapped to a canonical weekday.
    #[error("Unrecognized weekday: '{token}'")]
    UnrecognizedWeekday {
        /// The token as it was received.
        token: String,
    },

    /// A period identifier has no entry in the period table.
    #[error("Unknown period: {id}")]
    UnknownPeriod {
        /// The requested period identifier.
        id: PeriodId,
    },

    /// A period table entry was rejected while building the table.
    #[error("Invalid period {id}: {message}")]
    InvalidPeriod {
        /// The offending period identifier.
        id: PeriodId,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A room or schedule file was not found.
    #[error("Data source not found: {path}")]
    DataSourceNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A room or schedule file could not be read as CSV.
    #[error("Failed to read data source '{path}': {message}")]
    DataSourceParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
