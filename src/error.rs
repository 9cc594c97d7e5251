//! Error types for the Employee Directory engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while recording employees,
//! loading configuration, and exporting data.

use thiserror::Error;

/// The main error type for the Employee Directory engine.
///
/// An unknown employee id is not an error: lookups return `Option` and the
/// caller decides how to present "not found".
///
/// # Example
///
/// ```
/// use employee_directory::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/directory.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/directory.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The employee name was empty or contained characters other than letters and spaces.
    #[error("Invalid employee name '{name}': {message}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// A description of what made the name invalid.
        message: String,
    },

    /// The base salary was not a positive number.
    #[error("Invalid base salary '{value}': {message}")]
    InvalidSalary {
        /// The rejected value, as given.
        value: String,
        /// A description of what made the salary invalid.
        message: String,
    },

    /// A performance rating outside 0 to 5 was rejected under the strict policy.
    #[error("Invalid performance rating {rating}: must be between 0 and 5")]
    InvalidRating {
        /// The rejected rating.
        rating: f64,
    },

    /// Raw form input could not be parsed.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The form field that failed to parse.
        field: String,
        /// A description of the parse failure.
        message: String,
    },

    /// The directory has issued every representable employee id.
    #[error("No employee ids left to assign")]
    IdsExhausted,

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

    /// Configuration parsed but holds values the salary rules cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Writing the export failed.
    #[error("Failed to export employee data to '{path}': {message}")]
    ExportFailed {
        /// The export destination.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },
}

impl EngineError {
    /// Returns true for errors caused by invalid user input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidName { .. }
                | EngineError::InvalidSalary { .. }
                | EngineError::InvalidRating { .. }
                | EngineError::InvalidInput { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
