//! Error types for the Payroll Engine.
//!
//! The salary calculator itself is total and never fails. These errors cover
//! everything around it: loading and validating the rate table, and checking
//! employee records before they are handed to the calculator.

use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/statutory.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/statutory.yaml"
/// );
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

    /// The rate table was parsed but breaks one of its structural rules.
    #[error("Invalid rate table: {message}")]
    InvalidRateTable {
        /// What was wrong with the table.
        message: String,
    },

    /// An employee record was rejected before reaching the calculator.
    #[error("Invalid employee '{employee_id}' field '{field}': {message}")]
    InvalidEmployee {
        /// The ID of the offending employee.
        employee_id: String,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The same employee ID appeared twice in one payroll run.
    #[error("Duplicate employee id: {employee_id}")]
    DuplicateEmployee {
        /// The repeated ID.
        employee_id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
