//! Tabular employee data and tab-separated export.
//!
//! [`EmployeeRow`] is the snapshot shown in the employee table and written
//! to the export. The export is a header line followed by one line per
//! employee, fields separated by tabs, every line terminated by `\n`.
//! Numbers use their `Display` form, so no precision is imposed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::directory::Directory;
use crate::error::{EngineError, EngineResult};

/// Column headers of the employee table and export, in order.
pub const EXPORT_HEADERS: [&str; 5] = [
    "Employee ID",
    "Name",
    "Attended Days",
    "Performance Rating",
    "Salary",
];

const FIELD_SEPARATOR: &str = "\t";

/// One row of the employee table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRow {
    /// The employee id.
    pub id: u32,
    /// The employee name.
    pub name: String,
    /// Number of attendance marks.
    pub attended_days: u32,
    /// Current performance rating.
    pub performance_rating: f64,
    /// Salary under the directory's rules.
    pub salary: f64,
}

impl EmployeeRow {
    /// Renders the row as one tab-separated line, without the terminator.
    pub fn to_tsv_line(&self) -> String {
        [
            self.id.to_string(),
            self.name.clone(),
            self.attended_days.to_string(),
            self.performance_rating.to_string(),
            self.salary.to_string(),
        ]
        .join(FIELD_SEPARATOR)
    }
}

/// Builds the table rows for every employee, in insertion order.
pub fn employee_rows(directory: &Directory) -> Vec<EmployeeRow> {
    directory
        .list_all()
        .map(|employee| EmployeeRow {
            id: employee.id(),
            name: employee.name().to_string(),
            attended_days: employee.attended_days(),
            performance_rating: employee.performance_rating(),
            salary: employee.calculate_salary_with(directory.rules()),
        })
        .collect()
}

/// Renders the full export as a string.
///
/// # Example
///
/// ```
/// use employee_directory::directory::Directory;
/// use employee_directory::export::render_tsv;
///
/// let mut directory = Directory::new();
/// directory.add_employee("Ada", 3000.0)?;
/// directory.mark_attendance(1);
///
/// assert_eq!(
///     render_tsv(&directory),
///     "Employee ID\tName\tAttended Days\tPerformance Rating\tSalary\n1\tAda\t1\t0\t100\n"
/// );
/// # Ok::<(), employee_directory::error::EngineError>(())
/// ```
pub fn render_tsv(directory: &Directory) -> String {
    let mut output = EXPORT_HEADERS.join(FIELD_SEPARATOR);
    output.push('\n');
    for row in employee_rows(directory) {
        output.push_str(&row.to_tsv_line());
        output.push('\n');
    }
    output
}

/// Writes the export to `writer`.
///
/// # Errors
///
/// [`EngineError::ExportFailed`] if the writer fails. The directory is
/// never modified.
pub fn write_tsv<W: Write>(directory: &Directory, writer: W) -> EngineResult<()> {
    write_to(directory, writer, "<writer>")
}

/// Writes the export to a file at `path`, creating or truncating it.
///
/// # Errors
///
/// [`EngineError::ExportFailed`] if the file cannot be created or written.
pub fn export_to_file<P: AsRef<Path>>(directory: &Directory, path: P) -> EngineResult<()> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let file = File::create(path).map_err(|e| {
        warn!(path = %path_str, error = %e, "Failed to create export file");
        EngineError::ExportFailed {
            path: path_str.clone(),
            message: e.to_string(),
        }
    })?;

    write_to(directory, BufWriter::new(file), &path_str)
}

fn write_to<W: Write>(directory: &Directory, mut writer: W, destination: &str) -> EngineResult<()> {
    let content = render_tsv(directory);

    writer
        .write_all(content.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| {
            warn!(path = %destination, error = %e, "Failed to write employee export");
            EngineError::ExportFailed {
                path: destination.to_string(),
                message: e.to_string(),
            }
        })?;

    info!(
        path = %destination,
        rows = directory.count(),
        "Exported employee data"
    );
    Ok(())
}
