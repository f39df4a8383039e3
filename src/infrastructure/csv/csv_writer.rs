// ============================================================
// CSV WRITER
// ============================================================
// Stream student records into an export file, one row at a time

use std::path::Path;

use csv::WriterBuilder;

use crate::domain::csv::{ExportRow, EXPORT_HEADERS};
use crate::domain::error::{AppError, Result};
use crate::domain::student::StudentRecord;
use crate::infrastructure::storage::ensure_parent_dir;

/// Write `records` to `path` in iteration order, prefixed by the export
/// header. Returns the number of data rows written.
///
/// The target is truncated on open; a failure midway leaves whatever rows
/// were already flushed.
pub fn write_students<'a>(
    path: &Path,
    records: impl IntoIterator<Item = &'a StudentRecord>,
) -> Result<usize> {
    ensure_parent_dir(path).map_err(|e| {
        AppError::IoError(format!(
            "Failed to create export directory for {}: {}",
            path.display(),
            e
        ))
    })?;

    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| {
            AppError::IoError(format!("Failed to open {} for writing: {}", path.display(), e))
        })?;

    wtr.write_record(EXPORT_HEADERS)?;

    let mut written = 0;
    for (index, record) in records.into_iter().enumerate() {
        wtr.serialize(ExportRow::from_record(index, record))?;
        written += 1;
    }

    wtr.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::student::NewStudent;

    #[test]
    fn test_header_has_unlabeled_index_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![
            NewStudent::new("Alice", 20, "a@x.com", "p1").into_record(1),
            NewStudent::new("Bob", 19, "b@x.com", "p2").into_record(2),
        ];

        let written = write_students(&path, &records).unwrap();
        assert_eq!(written, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], ",name,age,email,pass_word");
        assert_eq!(lines[1], "0,Alice,20,a@x.com,p1");
        assert_eq!(lines[2], "1,Bob,19,b@x.com,p2");
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![NewStudent::new("Smith, Jo", 30, "j@x.com", "p\"q").into_record(7)];

        write_students(&path, &records).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content.lines().nth(1).unwrap(),
            "0,\"Smith, Jo\",30,j@x.com,\"p\"\"q\""
        );
    }

    #[test]
    fn test_creates_missing_export_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exports").join("nested").join("out.csv");

        assert_eq!(write_students(&path, &[] as &[StudentRecord]).unwrap(), 0);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap().trim_end(),
            ",name,age,email,pass_word"
        );
    }

    #[test]
    fn test_unwritable_target_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let err = write_students(&blocker.join("out.csv"), &[] as &[StudentRecord]).unwrap_err();
        assert!(matches!(err, AppError::IoError(_)));
    }
}
