// ============================================================
// CSV PARSER
// ============================================================
// Read student CSV files with encoding detection and header resolution

use std::io::ErrorKind;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use encoding_rs::{UTF_8, WINDOWS_1252};

use crate::domain::csv::{StudentColumns, StudentCsvRow};
use crate::domain::error::{AppError, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Parser for comma-delimited student files with a required header row.
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a CSV file into raw student rows.
    ///
    /// Fails with `NotFound` when the file is absent and with `SchemaError`
    /// when a required column is missing. Both are reported before any row
    /// is returned, so callers never see a partial sheet.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<StudentCsvRow>> {
        let content = self.read_with_encoding_detection(path)?;
        self.parse_content(&content)
    }

    /// Parse CSV content from string
    pub fn parse_content(&self, content: &str) -> Result<Vec<StudentCsvRow>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::None)
            .flexible(false)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .clone();
        let columns = StudentColumns::resolve(headers.iter())?;

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let row_number = index + 1;
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", row_number, e))
            })?;
            rows.push(Self::parse_row(row_number, &columns, &record)?);
        }

        Ok(rows)
    }

    /// Read file bytes as UTF-8, falling back to Windows-1252. A leading
    /// byte order mark is dropped.
    fn read_with_encoding_detection(&self, path: &Path) -> Result<String> {
        let buffer = std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                AppError::NotFound(format!("CSV file not found: {}", path.display()))
            }
            _ => AppError::IoError(format!("Failed to read {}: {}", path.display(), e)),
        })?;

        let (content, _, had_errors) = UTF_8.decode(&buffer);
        if !had_errors {
            return Ok(content.into_owned());
        }

        // A UTF-8 BOM in front of a Windows-1252 body must not steer the
        // fallback back to UTF-8.
        let body = buffer.strip_prefix(UTF8_BOM).unwrap_or(&buffer);
        let (content, _) = WINDOWS_1252.decode_without_bom_handling(body);
        Ok(content.into_owned())
    }

    fn parse_row(
        row_number: usize,
        columns: &StudentColumns,
        record: &StringRecord,
    ) -> Result<StudentCsvRow> {
        let field = |idx: usize| {
            record.get(idx).map(str::to_string).ok_or_else(|| {
                AppError::ParseError(format!(
                    "CSV row {} has no field at column {}",
                    row_number,
                    idx + 1
                ))
            })
        };

        Ok(StudentCsvRow {
            row_number,
            name: field(columns.name)?,
            age: field(columns.age)?,
            email: field(columns.email)?,
            password: field(columns.password)?,
        })
    }
}
