// ============================================================
// CSV IMPORT USE CASE
// ============================================================
// Persist one student record per CSV row, in file order

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::error::Result;
use crate::domain::repository::StudentRepository;
use crate::infrastructure::csv::CsvParser;

#[derive(Debug, Serialize)]
pub struct ImportSummary {
    pub source: PathBuf,
    pub imported: usize,
}

pub struct CsvImportUseCase {
    repository: Arc<dyn StudentRepository>,
    parser: CsvParser,
}

impl CsvImportUseCase {
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self {
            repository,
            parser: CsvParser::new(),
        }
    }

    /// Import every row of the CSV file at `path`.
    ///
    /// Header problems fail the whole import before anything is written.
    /// After that, rows are committed one at a time: a bad row or a store
    /// failure stops the import and leaves earlier rows persisted. Rows are
    /// never de-duplicated, so importing the same file twice stores every
    /// row twice.
    pub async fn execute(&self, path: &Path) -> Result<ImportSummary> {
        let rows = self.parser.parse_file(path)?;
        info!(source = %path.display(), rows = rows.len(), "Importing students from CSV");

        let mut imported = 0;
        for row in rows {
            let student = row.into_new_student()?;
            let record = self.repository.insert(&student).await?;
            debug!(id = record.id, name = %record.name, "Imported student");
            imported += 1;
        }

        info!(source = %path.display(), imported, "CSV import finished");

        Ok(ImportSummary {
            source: path.to_path_buf(),
            imported,
        })
    }
}
