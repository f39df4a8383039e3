// ============================================================
// STUDENT CSV ROW TYPES
// ============================================================
// Raw import rows and serialized export rows

use serde::Serialize;

use crate::domain::error::{AppError, Result};
use crate::domain::student::{NewStudent, StudentRecord};

/// One data row of an import file, fields still as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentCsvRow {
    /// 1-based position among data rows (the header is not counted).
    pub row_number: usize,
    pub name: String,
    pub age: String,
    pub email: String,
    pub password: String,
}

impl StudentCsvRow {
    /// Convert into an insertable student. Text fields are kept verbatim;
    /// `age` must parse as an integer once surrounding whitespace is removed.
    pub fn into_new_student(self) -> Result<NewStudent> {
        let age = self.age.trim().parse::<i64>().map_err(|_| {
            AppError::ValidationError(format!(
                "row {}: Age must be an integer, got {:?}",
                self.row_number, self.age
            ))
        })?;

        Ok(NewStudent {
            name: self.name,
            age,
            email: self.email,
            password: self.password,
        })
    }
}

/// One line of an export file, in `EXPORT_HEADERS` order.
#[derive(Debug, Serialize)]
pub struct ExportRow<'a> {
    pub index: usize,
    pub name: &'a str,
    pub age: i64,
    pub email: &'a str,
    pub pass_word: &'a str,
}

impl<'a> ExportRow<'a> {
    pub fn from_record(index: usize, record: &'a StudentRecord) -> Self {
        Self {
            index,
            name: &record.name,
            age: record.age,
            email: &record.email,
            pass_word: &record.password,
        }
    }
}
