//! Error types for the Gratuity Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while recording employees and
//! computing gratuity.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Gratuity Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently from the calculator up to the HTTP layer.
///
/// # Example
///
/// ```
/// use gratuity_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound { id: 42 };
/// assert_eq!(error.to_string(), "Employee not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// A calendar date could not be parsed as `YYYY-MM-DD`.
    #[error("Invalid date for '{field}': '{value}' is not a YYYY-MM-DD calendar date")]
    InvalidDate {
        /// The field that carried the date.
        field: String,
        /// The rejected input text.
        value: String,
    },

    /// A salary component was negative.
    #[error("Negative amount for '{field}': {value}")]
    NegativeMoney {
        /// The monetary field that was negative.
        field: String,
        /// The rejected amount.
        value: Decimal,
    },

    /// A monetary result does not fit in a decimal amount.
    #[error("Amount overflow computing '{field}' from the given salary components")]
    AmountOverflow {
        /// The quantity whose computation overflowed.
        field: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No employee exists with the requested identifier.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: u64,
    },

    /// The employee store failed to read or write its data.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
