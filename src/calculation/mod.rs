//! Calculation logic for the employee directory.
//!
//! This module contains the salary calculation: attendance-based pay from
//! the per-day rate plus the performance bonus tiers.

mod salary;

pub use salary::{SalaryBreakdown, calculate_salary, performance_bonus_rate};
