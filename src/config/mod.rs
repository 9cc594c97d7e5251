//! Configuration loading and management for the employee directory.
//!
//! This module provides functionality to load the directory configuration
//! from a YAML file: the rating policy and the salary rules.
//!
//! # Example
//!
//! ```no_run
//! use employee_directory::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/directory.yaml").unwrap();
//! println!("Days per month: {}", config.salary_rules().days_per_month);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BonusTier, DirectoryConfig, MAX_PERFORMANCE_RATING, RatingPolicy, SalaryRules};
