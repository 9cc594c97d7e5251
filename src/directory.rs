//! The in-memory employee directory.
//!
//! The [`Directory`] owns every employee record together with the id
//! counter, the rating policy and the salary rules they are evaluated with.

use tracing::{debug, info, warn};

use crate::config::{ConfigLoader, DirectoryConfig, RatingPolicy, SalaryRules};
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, RatingUpdate};

/// First id handed out by a new directory.
pub const FIRST_EMPLOYEE_ID: u32 = 1;

/// An ordered collection of employees with sequential id assignment.
///
/// Records are kept in creation order. Ids start at
/// [`FIRST_EMPLOYEE_ID`], advance only when an add succeeds, and are never
/// reused. The directory is a plain owned value; a host sharing it between
/// threads must wrap the whole directory in a single lock.
///
/// # Example
///
/// ```
/// use employee_directory::directory::Directory;
///
/// let mut directory = Directory::new();
/// let id = directory.add_employee("Ada Lovelace", 3000.0)?;
/// assert_eq!(id, 1);
///
/// directory.mark_attendance(id);
/// assert_eq!(directory.find_by_id(id).unwrap().attended_days(), 1);
/// assert!(directory.find_by_id(99).is_none());
/// # Ok::<(), employee_directory::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Directory {
    employees: Vec<Employee>,
    next_id: Option<u32>,
    config: DirectoryConfig,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory {
    /// Creates an empty directory with the default configuration.
    pub fn new() -> Self {
        Self::from_validated(DirectoryConfig::default())
    }

    /// Creates an empty directory with the given configuration.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidConfig`] if the salary rules fail validation.
    pub fn with_config(config: DirectoryConfig) -> EngineResult<Self> {
        config.salary.validate()?;
        Ok(Self::from_validated(config))
    }

    /// Creates an empty directory from a loaded configuration.
    ///
    /// The loader has already validated the salary rules.
    pub fn from_loader(loader: ConfigLoader) -> Self {
        Self::from_validated(loader.into_config())
    }

    fn from_validated(config: DirectoryConfig) -> Self {
        Self {
            employees: Vec::new(),
            next_id: Some(FIRST_EMPLOYEE_ID),
            config,
        }
    }

    /// Returns the rating policy applied by [`Directory::set_performance_rating`].
    pub fn rating_policy(&self) -> RatingPolicy {
        self.config.rating_policy
    }

    /// Returns the salary rules used for calculation, details and export.
    pub fn rules(&self) -> &SalaryRules {
        &self.config.salary
    }

    /// Validates and adds a new employee, returning the assigned id.
    ///
    /// On failure the directory is unchanged and no id is consumed.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidName`] or [`EngineError::InvalidSalary`] if
    ///   validation fails
    /// - [`EngineError::IdsExhausted`] if every id has been issued
    pub fn add_employee(&mut self, name: &str, base_salary: f64) -> EngineResult<u32> {
        let id = self.next_id.ok_or(EngineError::IdsExhausted)?;

        let employee = Employee::new(id, name, base_salary).inspect_err(|err| {
            warn!(name = %name, error = %err, "Rejected new employee");
        })?;

        self.employees.push(employee);
        self.next_id = id.checked_add(1);
        info!(employee_id = id, name = %name, "Added employee");
        Ok(id)
    }

    /// Finds an employee by id.
    pub fn find_by_id(&self, id: u32) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id() == id)
    }

    /// Finds an employee by id for mutation.
    pub fn find_by_id_mut(&mut self, id: u32) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|employee| employee.id() == id)
    }

    /// Returns the number of employees.
    pub fn count(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the directory holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Iterates over all employees in the order they were added.
    pub fn list_all(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    /// Marks one day of attendance for the employee with `id`.
    ///
    /// Returns the updated employee, or `None` if no employee has that id.
    pub fn mark_attendance(&mut self, id: u32) -> Option<&Employee> {
        let employee = self.find_by_id_mut(id)?;
        employee.mark_attendance();
        debug!(
            employee_id = id,
            attended_days = employee.attended_days(),
            "Marked attendance"
        );
        Some(&*employee)
    }

    /// Sets the performance rating of the employee with `id` under the
    /// directory's rating policy.
    ///
    /// Returns `Ok(None)` if no employee has that id.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidRating`] if the rating is outside 0 to 5 and the
    /// policy is [`RatingPolicy::Strict`].
    pub fn set_performance_rating(
        &mut self,
        id: u32,
        rating: f64,
    ) -> EngineResult<Option<RatingUpdate>> {
        let policy = self.rating_policy();
        let Some(employee) = self.find_by_id_mut(id) else {
            return Ok(None);
        };

        rate_employee(employee, rating, policy).map(Some)
    }

    /// Calculates the salary of the employee with `id` using the directory's rules.
    pub fn calculate_salary(&self, id: u32) -> Option<f64> {
        self.find_by_id(id)
            .map(|employee| employee.calculate_salary_with(self.rules()))
    }

    /// Returns the details summary of the employee with `id` using the directory's rules.
    pub fn details(&self, id: u32) -> Option<String> {
        self.find_by_id(id)
            .map(|employee| employee.details_with(self.rules()))
    }
}

/// Applies `rating` to `employee` under `policy` and logs the outcome.
pub(crate) fn rate_employee(
    employee: &mut Employee,
    rating: f64,
    policy: RatingPolicy,
) -> EngineResult<RatingUpdate> {
    let id = employee.id();
    match employee.apply_performance_rating(rating, policy) {
        Ok(RatingUpdate::Applied) => {
            debug!(employee_id = id, rating, "Updated performance rating");
            Ok(RatingUpdate::Applied)
        }
        Ok(RatingUpdate::Ignored) => {
            warn!(employee_id = id, rating, "Ignored out-of-range performance rating");
            Ok(RatingUpdate::Ignored)
        }
        Err(err) => {
            warn!(employee_id = id, rating, "Rejected out-of-range performance rating");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BonusTier;

    fn create_test_directory() -> Directory {
        let mut directory = Directory::new();
        directory.add_employee("Ada Lovelace", 3000.0).unwrap();
        directory.add_employee("Grace Hopper", 4500.0).unwrap();
        directory.add_employee("Alan Turing", 6000.0).unwrap();
        directory
    }

    fn strict_directory() -> Directory {
        Directory::with_config(DirectoryConfig {
            rating_policy: RatingPolicy::Strict,
            ..DirectoryConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_new_directory_is_empty() {
        let directory = Directory::new();
        assert_eq!(directory.count(), 0);
        assert!(directory.is_empty());
        assert_eq!(directory.list_all().count(), 0);
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut directory = Directory::new();
        assert_eq!(directory.add_employee("Ada", 1000.0).unwrap(), 1);
        assert_eq!(directory.add_employee("Grace", 1000.0).unwrap(), 2);
        assert_eq!(directory.add_employee("Alan", 1000.0).unwrap(), 3);
        assert_eq!(directory.count(), 3);
    }

    #[test]
    fn test_failed_add_does_not_consume_id() {
        let mut directory = Directory::new();
        assert_eq!(directory.add_employee("Ada", 1000.0).unwrap(), 1);

        assert!(directory.add_employee("R2D2", 1000.0).is_err());
        assert!(directory.add_employee("Grace", 0.0).is_err());
        assert_eq!(directory.count(), 1);

        assert_eq!(directory.add_employee("Grace", 1000.0).unwrap(), 2);
    }

    #[test]
    fn test_add_reports_validation_errors() {
        let mut directory = Directory::new();
        assert!(matches!(
            directory.add_employee("", 1000.0),
            Err(EngineError::InvalidName { .. })
        ));
        assert!(matches!(
            directory.add_employee("Ada", -5.0),
            Err(EngineError::InvalidSalary { .. })
        ));
        assert!(directory.is_empty());
    }

    #[test]
    fn test_ids_exhausted() {
        let mut directory = Directory::new();
        directory.next_id = Some(u32::MAX);

        assert_eq!(directory.add_employee("Ada", 1000.0).unwrap(), u32::MAX);
        assert!(matches!(
            directory.add_employee("Grace", 1000.0),
            Err(EngineError::IdsExhausted)
        ));
        assert_eq!(directory.count(), 1);
    }

    #[test]
    fn test_find_by_id() {
        let directory = create_test_directory();

        let employee = directory.find_by_id(2).unwrap();
        assert_eq!(employee.id(), 2);
        assert_eq!(employee.name(), "Grace Hopper");

        assert!(directory.find_by_id(0).is_none());
        assert!(directory.find_by_id(4).is_none());
    }

    #[test]
    fn test_list_all_preserves_insertion_order() {
        let directory = create_test_directory();
        let names: Vec<&str> = directory.list_all().map(Employee::name).collect();
        assert_eq!(names, vec!["Ada Lovelace", "Grace Hopper", "Alan Turing"]);
    }

    #[test]
    fn test_mark_attendance_by_id() {
        let mut directory = create_test_directory();

        let employee = directory.mark_attendance(1).unwrap();
        assert_eq!(employee.attended_days(), 1);
        directory.mark_attendance(1);
        assert_eq!(directory.find_by_id(1).unwrap().attended_days(), 2);
        assert_eq!(directory.find_by_id(2).unwrap().attended_days(), 0);

        assert!(directory.mark_attendance(42).is_none());
    }

    #[test]
    fn test_set_rating_unknown_id_is_none() {
        let mut directory = create_test_directory();
        assert_eq!(directory.set_performance_rating(42, 4.0).unwrap(), None);
    }

    #[test]
    fn test_set_rating_ignore_policy() {
        let mut directory = create_test_directory();

        assert_eq!(
            directory.set_performance_rating(1, 4.0).unwrap(),
            Some(RatingUpdate::Applied)
        );
        assert_eq!(
            directory.set_performance_rating(1, 6.0).unwrap(),
            Some(RatingUpdate::Ignored)
        );
        assert_eq!(directory.find_by_id(1).unwrap().performance_rating(), 4.0);
    }

    #[test]
    fn test_set_rating_strict_policy() {
        let mut directory = strict_directory();
        let id = directory.add_employee("Ada", 3000.0).unwrap();
        directory.set_performance_rating(id, 3.0).unwrap();

        match directory.set_performance_rating(id, -1.0) {
            Err(EngineError::InvalidRating { rating }) => assert_eq!(rating, -1.0),
            other => panic!("Expected InvalidRating error, got {:?}", other),
        }
        assert_eq!(directory.find_by_id(id).unwrap().performance_rating(), 3.0);
    }

    #[test]
    fn test_calculate_salary_by_id() {
        let mut directory = create_test_directory();
        for _ in 0..30 {
            directory.mark_attendance(1);
        }
        directory.set_performance_rating(1, 4.5).unwrap();

        assert_eq!(directory.calculate_salary(1), Some(3600.0));
        assert_eq!(directory.calculate_salary(2), Some(0.0));
        assert_eq!(directory.calculate_salary(9), None);
    }

    #[test]
    fn test_directory_rules_drive_salary_and_details() {
        let mut directory = Directory::with_config(DirectoryConfig {
            rating_policy: RatingPolicy::Ignore,
            salary: SalaryRules {
                days_per_month: 20.0,
                bonus_tiers: vec![BonusTier {
                    min_rating: 4.0,
                    rate: 0.5,
                }],
            },
        })
        .unwrap();
        let id = directory.add_employee("Ada", 2000.0).unwrap();
        for _ in 0..10 {
            directory.mark_attendance(id);
        }
        directory.set_performance_rating(id, 4.0).unwrap();

        assert_eq!(directory.calculate_salary(id), Some(2000.0));
        assert!(
            directory
                .details(id)
                .unwrap()
                .ends_with("Calculated Salary: $2000.00")
        );
        assert!(directory.details(id + 1).is_none());
    }

    #[test]
    fn test_with_config_rejects_invalid_salary_rules() {
        let result = Directory::with_config(DirectoryConfig {
            rating_policy: RatingPolicy::Ignore,
            salary: SalaryRules {
                days_per_month: 0.0,
                bonus_tiers: vec![],
            },
        });

        match result {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "salary.days_per_month");
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_with_config_rejects_out_of_range_tier() {
        let result = Directory::with_config(DirectoryConfig {
            rating_policy: RatingPolicy::Ignore,
            salary: SalaryRules {
                days_per_month: 30.0,
                bonus_tiers: vec![BonusTier {
                    min_rating: f64::NAN,
                    rate: 0.2,
                }],
            },
        });
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_with_config_salaries_stay_finite() {
        let mut directory = strict_directory();
        let id = directory.add_employee("Ada", 3000.0).unwrap();
        assert!(directory.calculate_salary(id).unwrap().is_finite());
    }

    #[test]
    fn test_from_loader_uses_loaded_policy() {
        let loader = ConfigLoader::from_yaml_str("rating_policy: strict").unwrap();
        let directory = Directory::from_loader(loader);
        assert_eq!(directory.rating_policy(), RatingPolicy::Strict);
        assert_eq!(directory.rules(), &SalaryRules::default());
    }
}
