use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::domain::error::Result;
use crate::domain::repository::StudentRepository;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::db::SqliteStudentRepository;
use crate::interfaces::http::{start_server, HttpState};

pub async fn run() -> Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.log_filter);

    let repository: Arc<dyn StudentRepository> =
        Arc::new(SqliteStudentRepository::init(&config.database_url).await?);
    warn!("Student passwords are stored and exported as plaintext");

    let state = web::Data::new(HttpState::new(&config, repository));
    info!(
        host = %config.server.host,
        port = config.server.port,
        import_path = %config.import_path().display(),
        export_path = %config.export_path().display(),
        "Starting HTTP server"
    );

    start_server(state, &config.server)?.await?;
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
