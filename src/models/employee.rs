//! Employee model and related types.
//!
//! This module defines the [`Employee`] record: identity fixed at creation,
//! plus attendance and performance rating that change over time.

use serde::Serialize;

use crate::calculation::{SalaryBreakdown, calculate_salary};
use crate::config::{MAX_PERFORMANCE_RATING, RatingPolicy, SalaryRules};
use crate::error::{EngineError, EngineResult};

/// The outcome of setting a performance rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingUpdate {
    /// The rating was in range and replaced the previous one.
    Applied,
    /// The rating was out of range and the previous one was kept.
    Ignored,
}

/// An employee record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    id: u32,
    name: String,
    base_salary: f64,
    attended_days: u32,
    performance_rating: f64,
}

/// Returns true if `name` is non-blank and made of ASCII letters and spaces.
fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty() && name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

fn is_valid_rating(rating: f64) -> bool {
    (0.0..=MAX_PERFORMANCE_RATING).contains(&rating)
}

impl Employee {
    /// Creates a new employee with no attendance and a rating of 0.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidName`] if the name is blank or holds anything
    ///   other than letters and spaces
    /// - [`EngineError::InvalidSalary`] if the base salary is not a finite
    ///   number greater than 0
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_directory::models::Employee;
    ///
    /// let employee = Employee::new(1, "Ada Lovelace", 3000.0)?;
    /// assert_eq!(employee.attended_days(), 0);
    /// assert_eq!(employee.performance_rating(), 0.0);
    /// assert!(Employee::new(2, "R2D2", 3000.0).is_err());
    /// # Ok::<(), employee_directory::error::EngineError>(())
    /// ```
    pub fn new(id: u32, name: impl Into<String>, base_salary: f64) -> EngineResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        validate_base_salary(base_salary)?;

        Ok(Self {
            id,
            name,
            base_salary,
            attended_days: 0,
            performance_rating: 0.0,
        })
    }

    /// Returns the employee id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the employee name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base monthly salary.
    pub fn base_salary(&self) -> f64 {
        self.base_salary
    }

    /// Returns the number of attendance marks.
    pub fn attended_days(&self) -> u32 {
        self.attended_days
    }

    /// Returns the current performance rating.
    pub fn performance_rating(&self) -> f64 {
        self.performance_rating
    }

    /// Records one more day of attendance.
    ///
    /// There is no calendar check: marking twice on the same day counts twice.
    pub fn mark_attendance(&mut self) {
        self.attended_days = self.attended_days.saturating_add(1);
    }

    /// Sets the performance rating, silently keeping the old one if `rating`
    /// is outside 0 to 5.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_directory::models::{Employee, RatingUpdate};
    ///
    /// let mut employee = Employee::new(1, "Ada", 3000.0)?;
    /// assert_eq!(employee.set_performance_rating(4.0), RatingUpdate::Applied);
    /// assert_eq!(employee.set_performance_rating(6.0), RatingUpdate::Ignored);
    /// assert_eq!(employee.performance_rating(), 4.0);
    /// # Ok::<(), employee_directory::error::EngineError>(())
    /// ```
    pub fn set_performance_rating(&mut self, rating: f64) -> RatingUpdate {
        if is_valid_rating(rating) {
            self.performance_rating = rating;
            RatingUpdate::Applied
        } else {
            RatingUpdate::Ignored
        }
    }

    /// Sets the performance rating under the given policy.
    ///
    /// Under [`RatingPolicy::Strict`] an out-of-range rating is an
    /// [`EngineError::InvalidRating`]; the stored rating is unchanged either way.
    pub fn apply_performance_rating(
        &mut self,
        rating: f64,
        policy: RatingPolicy,
    ) -> EngineResult<RatingUpdate> {
        match (self.set_performance_rating(rating), policy) {
            (RatingUpdate::Ignored, RatingPolicy::Strict) => {
                Err(EngineError::InvalidRating { rating })
            }
            (update, _) => Ok(update),
        }
    }

    /// Calculates salary with the default rules.
    pub fn calculate_salary(&self) -> f64 {
        self.calculate_salary_with(&SalaryRules::default())
    }

    /// Calculates salary with the given rules.
    pub fn calculate_salary_with(&self, rules: &SalaryRules) -> f64 {
        self.salary_breakdown(rules).total
    }

    /// Returns each component of the salary under the given rules.
    pub fn salary_breakdown(&self, rules: &SalaryRules) -> SalaryBreakdown {
        calculate_salary(
            self.base_salary,
            self.attended_days,
            self.performance_rating,
            rules,
        )
    }

    /// Returns a multi-line summary using the default rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_directory::models::Employee;
    ///
    /// let employee = Employee::new(7, "Grace Hopper", 3000.0)?;
    /// assert_eq!(
    ///     employee.details(),
    ///     "ID: 7\nName: Grace Hopper\nBase Salary: $3000.00\nAttended Days: 0\n\
    ///      Performance Rating: 0.00\nCalculated Salary: $0.00"
    /// );
    /// # Ok::<(), employee_directory::error::EngineError>(())
    /// ```
    pub fn details(&self) -> String {
        self.details_with(&SalaryRules::default())
    }

    /// Returns a multi-line summary, computing salary with the given rules.
    pub fn details_with(&self, rules: &SalaryRules) -> String {
        format!(
            "ID: {}\nName: {}\nBase Salary: ${:.2}\nAttended Days: {}\nPerformance Rating: {:.2}\nCalculated Salary: ${:.2}",
            self.id,
            self.name,
            self.base_salary,
            self.attended_days,
            self.performance_rating,
            self.calculate_salary_with(rules)
        )
    }
}

fn validate_name(name: &str) -> EngineResult<()> {
    if name.trim().is_empty() {
        return Err(EngineError::InvalidName {
            name: name.to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if !is_valid_name(name) {
        return Err(EngineError::InvalidName {
            name: name.to_string(),
            message: "must only contain letters and spaces".to_string(),
        });
    }
    Ok(())
}

fn validate_base_salary(base_salary: f64) -> EngineResult<()> {
    if !base_salary.is_finite() || base_salary <= 0.0 {
        return Err(EngineError::InvalidSalary {
            value: base_salary.to_string(),
            message: "must be a positive number".to_string(),
        });
    }
    Ok(())
}
