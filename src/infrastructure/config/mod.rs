use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::error::{AppError, Result};

pub const CONFIG_FILE: &str = "Rollbook.toml";
pub const ENV_PREFIX: &str = "ROLLBOOK_";

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    #[validate(length(min = 1))]
    pub host: String,
    #[validate(range(min = 1))]
    pub port: u16,
    /// Largest accepted upload body, in bytes.
    #[validate(range(min = 1))]
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
            max_upload_bytes: 10 * 1024 * 1024, // 10MB
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    #[validate(nested)]
    pub server: ServerConfig,
    #[validate(length(min = 1))]
    pub database_url: String,
    /// Directory the upload endpoint stages files into and the importer reads from.
    #[validate(length(min = 1))]
    pub upload_dir: String,
    #[validate(length(min = 1))]
    pub import_file: String,
    #[validate(length(min = 1))]
    pub export_dir: String,
    #[validate(length(min = 1))]
    pub export_file: String,
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database_url: "sqlite://rollbook.db".to_string(),
            upload_dir: "media".to_string(),
            import_file: "students.csv".to_string(),
            export_dir: "exports".to_string(),
            export_file: "students.csv".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load `.env`, then layer defaults, `Rollbook.toml` and `ROLLBOOK_*`
    /// variables (nested keys split on `__`, e.g. `ROLLBOOK_SERVER__PORT`).
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_figment(Self::figment(Path::new(CONFIG_FILE)))
    }

    pub fn figment(config_file: &Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: AppConfig = figment
            .extract()
            .map_err(|e| AppError::ConfigError(format!("Failed to load config: {}", e)))?;

        config
            .validate()
            .map_err(|e| AppError::ConfigError(format!("Invalid config: {}", e)))?;

        Ok(config)
    }

    pub fn import_path(&self) -> PathBuf {
        Path::new(&self.upload_dir).join(&self.import_file)
    }

    pub fn export_path(&self) -> PathBuf {
        Path::new(&self.export_dir).join(&self.export_file)
    }
}
