use std::fmt;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    SchemaError(String),
    ValidationError(String),
    ParseError(String),
    ConfigError(String),
    DatabaseError(String),
    IoError(String),
}

impl AppError {
    /// Short machine-readable name, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::SchemaError(_) => "schema",
            AppError::ValidationError(_) => "validation",
            AppError::ParseError(_) => "parse",
            AppError::ConfigError(_) => "config",
            AppError::DatabaseError(_) => "database",
            AppError::IoError(_) => "io",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::SchemaError(msg) => write!(f, "Schema error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            AppError::IoError(err.to_string())
        } else {
            AppError::ParseError(err.to_string())
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts_to_io_variant() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, AppError::IoError(_)));
        assert_eq!(err.kind(), "io");
    }

    #[test]
    fn test_display_prefixes_kind() {
        let err = AppError::SchemaError("missing column `Password`".to_string());
        assert_eq!(err.to_string(), "Schema error: missing column `Password`");
    }
}
