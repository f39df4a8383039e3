use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::domain::error::{AppError, Result};
use crate::infrastructure::storage::write_file;

#[derive(Debug, Serialize)]
pub struct UploadSummary {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Stages an uploaded CSV body at the path the importer reads from.
pub struct UploadUseCase {
    target: PathBuf,
}

impl UploadUseCase {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Replace the staged file with `body`. Contents are not inspected;
    /// the importer reports schema problems when it runs.
    pub fn execute(&self, body: &[u8]) -> Result<UploadSummary> {
        if body.is_empty() {
            return Err(AppError::ValidationError(
                "Upload body is empty".to_string(),
            ));
        }

        write_file(&self.target, body).map_err(|e| {
            AppError::IoError(format!(
                "Failed to stage upload at {}: {}",
                self.target.display(),
                e
            ))
        })?;

        info!(path = %self.target.display(), bytes = body.len(), "Staged CSV upload");

        Ok(UploadSummary {
            path: self.target.clone(),
            bytes: body.len(),
        })
    }
}
