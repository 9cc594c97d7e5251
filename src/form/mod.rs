//! Form layer for the employee directory.
//!
//! This module maps raw form input (text typed into fields) onto directory
//! operations: adding employees, marking attendance, setting ratings,
//! calculating salary, listing the employee table and exporting it.

mod handlers;
mod request;
mod response;

pub use handlers::{
    FormResult, add_employee, calculate_salary, employee_table, export_employees,
    mark_attendance, set_performance_rating, total_employees,
};
pub use request::{
    AddEmployeeRequest, EmployeeIdRequest, RatingRequest, parse_base_salary, parse_employee_id,
    parse_rating,
};
pub use response::{AttendanceMarked, EmployeeAdded, FormError, RatingSet, SalaryCalculated};
