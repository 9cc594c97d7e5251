//! Form action handlers.
//!
//! Each handler takes a raw request, parses it, applies it to the
//! [`Directory`] and returns a typed outcome or a [`FormError`].

use std::path::Path;

use tracing::warn;

use crate::directory::{Directory, rate_employee};
use crate::export::{EmployeeRow, employee_rows, export_to_file};

use super::request::{
    AddEmployeeRequest, EmployeeIdRequest, RatingRequest, parse_base_salary, parse_employee_id,
    parse_rating,
};
use super::response::{AttendanceMarked, EmployeeAdded, FormError, RatingSet, SalaryCalculated};

/// A type alias for Results returned by form handlers.
pub type FormResult<T> = Result<T, FormError>;

fn not_found(id: u32, action: &str) -> FormError {
    warn!(employee_id = id, action, "Employee not found");
    FormError::employee_not_found(id)
}

/// Adds a new employee from raw form input.
///
/// # Example
///
/// ```
/// use employee_directory::directory::Directory;
/// use employee_directory::form::{AddEmployeeRequest, add_employee};
///
/// let mut directory = Directory::new();
/// let added = add_employee(&mut directory, AddEmployeeRequest::new("  Ada  ", "3000")).unwrap();
/// assert_eq!(added.id, 1);
/// assert_eq!(directory.find_by_id(1).unwrap().name(), "Ada");
/// ```
pub fn add_employee(
    directory: &mut Directory,
    request: AddEmployeeRequest,
) -> FormResult<EmployeeAdded> {
    let base_salary = parse_base_salary(&request.base_salary)?;
    let id = directory.add_employee(request.name.trim(), base_salary)?;
    Ok(EmployeeAdded { id })
}

/// Marks one day of attendance.
pub fn mark_attendance(
    directory: &mut Directory,
    request: EmployeeIdRequest,
) -> FormResult<AttendanceMarked> {
    let id = parse_employee_id(&request.employee_id)?;
    let employee = directory
        .mark_attendance(id)
        .ok_or_else(|| not_found(id, "mark_attendance"))?;

    Ok(AttendanceMarked {
        id,
        name: employee.name().to_string(),
        attended_days: employee.attended_days(),
    })
}

/// Sets a performance rating under the directory's rating policy.
pub fn set_performance_rating(
    directory: &mut Directory,
    request: RatingRequest,
) -> FormResult<RatingSet> {
    let id = parse_employee_id(&request.employee_id)?;
    let policy = directory.rating_policy();
    // An unknown id is reported before the rating is looked at.
    let Some(employee) = directory.find_by_id_mut(id) else {
        return Err(not_found(id, "set_performance_rating"));
    };
    let rating = parse_rating(&request.rating)?;

    let outcome = rate_employee(employee, rating, policy)?;

    Ok(RatingSet {
        id,
        name: employee.name().to_string(),
        outcome,
        performance_rating: employee.performance_rating(),
    })
}

/// Calculates the salary of one employee.
pub fn calculate_salary(
    directory: &Directory,
    request: EmployeeIdRequest,
) -> FormResult<SalaryCalculated> {
    let id = parse_employee_id(&request.employee_id)?;
    let employee = directory
        .find_by_id(id)
        .ok_or_else(|| not_found(id, "calculate_salary"))?;

    Ok(SalaryCalculated {
        id,
        name: employee.name().to_string(),
        salary: employee.calculate_salary_with(directory.rules()),
    })
}

/// Returns the number of employees.
pub fn total_employees(directory: &Directory) -> usize {
    directory.count()
}

/// Returns the rows of the employee table.
///
/// An empty directory has nothing to display and yields
/// [`FormError::no_employees`].
pub fn employee_table(directory: &Directory) -> FormResult<Vec<EmployeeRow>> {
    if directory.is_empty() {
        return Err(FormError::no_employees());
    }
    Ok(employee_rows(directory))
}

/// Exports all employees to a tab-separated file.
pub fn export_employees<P: AsRef<Path>>(directory: &Directory, path: P) -> FormResult<()> {
    export_to_file(directory, path)?;
    Ok(())
}
