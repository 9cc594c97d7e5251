//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading directory
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{DirectoryConfig, RatingPolicy, SalaryRules};

/// Loads and provides access to directory configuration.
///
/// Every key in the file is optional; missing keys fall back to the
/// defaults of [`DirectoryConfig`].
///
/// # File Format
///
/// ```text
/// rating_policy: ignore   # or strict
/// salary:
///   days_per_month: 30
///   bonus_tiers:
///     - { min_rating: 4.5, rate: 0.2 }
///     - { min_rating: 3.5, rate: 0.1 }
/// ```
///
/// # Example
///
/// ```no_run
/// use employee_directory::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/directory.yaml").unwrap();
/// println!("Rating policy: {:?}", loader.rating_policy());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: DirectoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML
    /// - The salary rules fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        info!(
            path = %path_str,
            rating_policy = ?loader.rating_policy(),
            "Loaded directory configuration"
        );
        Ok(loader)
    }

    /// Parses configuration from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use employee_directory::config::{ConfigLoader, RatingPolicy};
    ///
    /// let loader = ConfigLoader::from_yaml_str("rating_policy: strict")?;
    /// assert_eq!(loader.rating_policy(), RatingPolicy::Strict);
    /// assert_eq!(loader.salary_rules().days_per_month, 30.0);
    /// # Ok::<(), employee_directory::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> EngineResult<Self> {
        // An empty document deserializes to unit, not to a defaulted struct.
        let config: DirectoryConfig = if content.trim().is_empty() {
            DirectoryConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?
        };

        config.salary.validate()?;
        Ok(Self { config })
    }

    /// Returns the underlying directory configuration.
    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> DirectoryConfig {
        self.config
    }

    /// Returns the configured rating policy.
    pub fn rating_policy(&self) -> RatingPolicy {
        self.config.rating_policy
    }

    /// Returns the configured salary rules.
    pub fn salary_rules(&self) -> &SalaryRules {
        &self.config.salary
    }
}
