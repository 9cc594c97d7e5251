//! Request types for the form layer.
//!
//! Requests carry the raw text a user typed into a form. The `parse_*`
//! functions turn that text into typed values, reporting anything that is
//! not a number as a validation error.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Input for adding a new employee.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddEmployeeRequest {
    /// Employee name. Surrounding whitespace is trimmed.
    pub name: String,
    /// Base salary as typed.
    pub base_salary: String,
}

/// Input naming a single employee.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeIdRequest {
    /// Employee id as typed.
    pub employee_id: String,
}

/// Input for setting a performance rating.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingRequest {
    /// Employee id as typed.
    pub employee_id: String,
    /// Rating as typed.
    pub rating: String,
}

impl AddEmployeeRequest {
    /// Creates a request from raw field values.
    pub fn new(name: impl Into<String>, base_salary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_salary: base_salary.into(),
        }
    }
}

impl EmployeeIdRequest {
    /// Creates a request from a raw id value.
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
        }
    }
}

impl RatingRequest {
    /// Creates a request from raw field values.
    pub fn new(employee_id: impl Into<String>, rating: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            rating: rating.into(),
        }
    }
}

/// Parses an employee id.
///
/// # Example
///
/// ```
/// use employee_directory::form::parse_employee_id;
///
/// assert_eq!(parse_employee_id(" 12 ").unwrap(), 12);
/// assert!(parse_employee_id("twelve").is_err());
/// ```
pub fn parse_employee_id(input: &str) -> EngineResult<u32> {
    let trimmed = input.trim();
    trimmed.parse().map_err(|_| EngineError::InvalidInput {
        field: "employee_id".to_string(),
        message: format!("'{}' is not a valid employee id", trimmed),
    })
}

/// Parses a base salary, which must be a positive number.
pub fn parse_base_salary(input: &str) -> EngineResult<f64> {
    let trimmed = input.trim();
    let salary: f64 = trimmed.parse().map_err(|_| EngineError::InvalidSalary {
        value: trimmed.to_string(),
        message: "must be a valid number".to_string(),
    })?;

    if !salary.is_finite() || salary <= 0.0 {
        return Err(EngineError::InvalidSalary {
            value: trimmed.to_string(),
            message: "must be a positive number".to_string(),
        });
    }
    Ok(salary)
}

/// Parses a performance rating.
///
/// Only the number format is checked here; the range is enforced by the
/// directory's rating policy.
pub fn parse_rating(input: &str) -> EngineResult<f64> {
    let trimmed = input.trim();
    trimmed.parse().map_err(|_| EngineError::InvalidInput {
        field: "performance_rating".to_string(),
        message: format!("'{}' is not a valid rating", trimmed),
    })
}
