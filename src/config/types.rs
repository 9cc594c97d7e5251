//! Configuration types for the employee directory.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Highest performance rating an employee can hold.
pub const MAX_PERFORMANCE_RATING: f64 = 5.0;

/// How out-of-range performance ratings are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingPolicy {
    /// Out-of-range ratings are dropped and the previous rating is kept.
    #[default]
    Ignore,
    /// Out-of-range ratings are reported as [`EngineError::InvalidRating`].
    Strict,
}

/// A performance bonus unlocked at a rating threshold.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BonusTier {
    /// Minimum rating (inclusive) that unlocks this tier.
    pub min_rating: f64,
    /// Bonus as a fraction of base salary.
    pub rate: f64,
}

/// Rules for turning base salary, attendance and rating into pay.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SalaryRules {
    /// Divisor applied to the base salary to get the per-day rate.
    pub days_per_month: f64,
    /// Bonus tiers. The highest tier whose threshold is met applies.
    pub bonus_tiers: Vec<BonusTier>,
}

impl Default for SalaryRules {
    fn default() -> Self {
        Self {
            days_per_month: 30.0,
            bonus_tiers: vec![
                BonusTier {
                    min_rating: 4.5,
                    rate: 0.2,
                },
                BonusTier {
                    min_rating: 3.5,
                    rate: 0.1,
                },
            ],
        }
    }
}

impl SalaryRules {
    /// Checks that the rules can produce a meaningful salary.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.days_per_month.is_finite() || self.days_per_month <= 0.0 {
            return Err(EngineError::InvalidConfig {
                field: "salary.days_per_month".to_string(),
                message: format!("must be a positive number, got {}", self.days_per_month),
            });
        }

        for (index, tier) in self.bonus_tiers.iter().enumerate() {
            if !(0.0..=MAX_PERFORMANCE_RATING).contains(&tier.min_rating) {
                return Err(EngineError::InvalidConfig {
                    field: format!("salary.bonus_tiers[{}].min_rating", index),
                    message: format!("must be between 0 and 5, got {}", tier.min_rating),
                });
            }
            if !tier.rate.is_finite() || tier.rate < 0.0 {
                return Err(EngineError::InvalidConfig {
                    field: format!("salary.bonus_tiers[{}].rate", index),
                    message: format!("must be a non-negative number, got {}", tier.rate),
                });
            }
        }

        Ok(())
    }

    /// Returns the highest-threshold tier unlocked by `rating`, if any.
    pub(crate) fn matching_tier(&self, rating: f64) -> Option<&BonusTier> {
        self.bonus_tiers
            .iter()
            .filter(|tier| rating >= tier.min_rating)
            .max_by(|a, b| a.min_rating.total_cmp(&b.min_rating))
    }
}

/// The complete directory configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// How out-of-range ratings are handled by directory operations.
    pub rating_policy: RatingPolicy,
    /// Salary rules used for calculation, display and export.
    pub salary: SalaryRules,
}
