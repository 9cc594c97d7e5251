//! Salary calculation functionality.
//!
//! Salary is the attendance-based share of the base salary plus a
//! performance bonus unlocked at rating thresholds.

use serde::Serialize;

use crate::config::SalaryRules;

/// The result of a salary calculation, including each component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalaryBreakdown {
    /// Base salary divided by the days-per-month divisor.
    pub per_day: f64,
    /// Per-day rate multiplied by attended days.
    pub earned: f64,
    /// The bonus rate from the matched tier, or 0.
    pub bonus_rate: f64,
    /// Bonus rate multiplied by base salary.
    pub bonus: f64,
    /// Earned pay plus bonus.
    pub total: f64,
}

/// Returns the bonus rate for a performance rating.
///
/// The highest tier whose `min_rating` is at or below `rating` applies.
/// Ratings below every tier earn no bonus.
///
/// # Examples
///
/// ```
/// use employee_directory::calculation::performance_bonus_rate;
/// use employee_directory::config::SalaryRules;
///
/// let rules = SalaryRules::default();
/// assert_eq!(performance_bonus_rate(4.5, &rules), 0.2);
/// assert_eq!(performance_bonus_rate(4.4, &rules), 0.1);
/// assert_eq!(performance_bonus_rate(3.4, &rules), 0.0);
/// ```
pub fn performance_bonus_rate(rating: f64, rules: &SalaryRules) -> f64 {
    rules
        .matching_tier(rating)
        .map(|tier| tier.rate)
        .unwrap_or(0.0)
}

/// Calculates salary from base salary, attendance and rating.
///
/// The arithmetic is plain `f64` with no rounding, evaluated as
/// `base / days_per_month * attended_days + bonus_rate * base`.
///
/// # Examples
///
/// ```
/// use employee_directory::calculation::calculate_salary;
/// use employee_directory::config::SalaryRules;
///
/// let breakdown = calculate_salary(3000.0, 30, 4.5, &SalaryRules::default());
/// assert_eq!(breakdown.per_day, 100.0);
/// assert_eq!(breakdown.earned, 3000.0);
/// assert_eq!(breakdown.bonus, 600.0);
/// assert_eq!(breakdown.total, 3600.0);
/// ```
pub fn calculate_salary(
    base_salary: f64,
    attended_days: u32,
    performance_rating: f64,
    rules: &SalaryRules,
) -> SalaryBreakdown {
    let per_day = base_salary / rules.days_per_month;
    let earned = per_day * f64::from(attended_days);
    let bonus_rate = performance_bonus_rate(performance_rating, rules);
    let bonus = if bonus_rate > 0.0 {
        bonus_rate * base_salary
    } else {
        0.0
    };

    SalaryBreakdown {
        per_day,
        earned,
        bonus_rate,
        bonus,
        total: earned + bonus,
    }
}
