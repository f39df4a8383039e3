// ============================================================
// CSV EXPORT USE CASE
// ============================================================
// Dump every stored student to a CSV file, ordered by name

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::domain::error::Result;
use crate::domain::repository::StudentRepository;
use crate::domain::student::StudentOrder;
use crate::infrastructure::csv::write_students;

#[derive(Debug, Serialize)]
pub struct ExportSummary {
    pub destination: PathBuf,
    pub exported: usize,
}

pub struct CsvExportUseCase {
    repository: Arc<dyn StudentRepository>,
}

impl CsvExportUseCase {
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, path: &Path) -> Result<ExportSummary> {
        let students = self
            .repository
            .list_all_ordered_by(StudentOrder::Name)
            .await?;

        let exported = write_students(path, &students)?;
        info!(destination = %path.display(), exported, "CSV export finished");

        Ok(ExportSummary {
            destination: path.to_path_buf(),
            exported,
        })
    }
}
