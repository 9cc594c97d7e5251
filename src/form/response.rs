//! Response types for the form layer.
//!
//! This module defines the outcomes returned by successful form actions
//! and the [`FormError`] shown when an action fails.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::RatingUpdate;

/// A new employee was added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeAdded {
    /// The id assigned to the employee.
    pub id: u32,
}

/// Attendance was marked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceMarked {
    /// The employee id.
    pub id: u32,
    /// The employee name.
    pub name: String,
    /// Attendance count after marking.
    pub attended_days: u32,
}

/// A performance rating was submitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingSet {
    /// The employee id.
    pub id: u32,
    /// The employee name.
    pub name: String,
    /// Whether the rating replaced the previous one.
    pub outcome: RatingUpdate,
    /// The rating held after the update.
    pub performance_rating: f64,
}

/// Salary was calculated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryCalculated {
    /// The employee id.
    pub id: u32,
    /// The employee name.
    pub name: String,
    /// The calculated salary.
    pub salary: f64,
}

/// Form error response structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl FormError {
    /// Creates a new form error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates an employee not found error.
    pub fn employee_not_found(id: u32) -> Self {
        Self::new("EMPLOYEE_NOT_FOUND", format!("Employee not found: {}", id))
    }

    /// Creates an error for an action that needs at least one employee.
    pub fn no_employees() -> Self {
        Self::new("NO_EMPLOYEES", "No employees to display")
    }
}

impl From<EngineError> for FormError {
    fn from(error: EngineError) -> Self {
        let code = match &error {
            EngineError::InvalidName { .. } => "INVALID_NAME",
            EngineError::InvalidSalary { .. } => "INVALID_SALARY",
            EngineError::InvalidRating { .. } => "INVALID_RATING",
            EngineError::InvalidInput { .. } => "VALIDATION_ERROR",
            EngineError::IdsExhausted => "IDS_EXHAUSTED",
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => "CONFIG_ERROR",
            EngineError::ExportFailed { .. } => "EXPORT_FAILED",
        };
        Self::new(code, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_error_serialization() {
        let error = FormError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
    }

    #[test]
    fn test_employee_not_found_error() {
        let error = FormError::employee_not_found(42);
        assert_eq!(error.code, "EMPLOYEE_NOT_FOUND");
        assert!(error.message.contains("42"));
    }

    #[test]
    fn test_engine_error_codes() {
        let cases = [
            (
                EngineError::InvalidName {
                    name: "X1".to_string(),
                    message: "bad".to_string(),
                },
                "INVALID_NAME",
            ),
            (
                EngineError::InvalidSalary {
                    value: "0".to_string(),
                    message: "bad".to_string(),
                },
                "INVALID_SALARY",
            ),
            (EngineError::InvalidRating { rating: 6.0 }, "INVALID_RATING"),
            (
                EngineError::InvalidInput {
                    field: "employee_id".to_string(),
                    message: "bad".to_string(),
                },
                "VALIDATION_ERROR",
            ),
            (EngineError::IdsExhausted, "IDS_EXHAUSTED"),
            (
                EngineError::ConfigNotFound {
                    path: "x".to_string(),
                },
                "CONFIG_ERROR",
            ),
            (
                EngineError::ExportFailed {
                    path: "x".to_string(),
                    message: "bad".to_string(),
                },
                "EXPORT_FAILED",
            ),
        ];

        for (engine_error, code) in cases {
            let message = engine_error.to_string();
            let form_error: FormError = engine_error.into();
            assert_eq!(form_error.code, code);
            assert_eq!(form_error.message, message);
        }
    }

    #[test]
    fn test_rating_set_serialization() {
        let response = RatingSet {
            id: 1,
            name: "Ada".to_string(),
            outcome: RatingUpdate::Ignored,
            performance_rating: 3.0,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["outcome"], "ignored");
        assert_eq!(json["performance_rating"], 3.0);
    }
}
