//! Server binary for the OrgChart service.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `ORGCHART_CONFIG` (default
//!    `orgchart-config.yaml`), falling back to defaults
//! 2. Initialize structured logging (tracing)
//! 3. Open the configured storage backend
//! 4. Serve the HTTP API until the process is terminated

mod error;

use std::path::PathBuf;
use std::sync::Arc;

use orgchart_api::{AppState, ServerConfig, start_server};
use orgchart_core::{OrgChartConfig, StorageBackend};
use orgchart_core::config::{LoggingSettings, StorageSettings};
use orgchart_db::{PostgresConfig, PostgresPool, Storage};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::LaunchError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "orgchart-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, storage setup, or the HTTP server
/// fails.
#[tokio::main]
async fn main() -> Result<(), LaunchError> {
    let config_path = config_path();
    let config = OrgChartConfig::load(&config_path)?;

    init_logging(&config.logging);
    info!(
        path = %config_path.display(),
        backend = ?config.storage.backend,
        port = config.server.port,
        "orgchart-server starting"
    );

    let storage = open_storage(&config.storage).await?;
    info!(storage = storage.name(), "Storage ready");

    let state = Arc::new(AppState::new(storage));
    start_server(&ServerConfig::from(&config.server), state).await?;

    info!("orgchart-server stopped");
    Ok(())
}

fn config_path() -> PathBuf {
    std::env::var_os("ORGCHART_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// `RUST_LOG` wins over the configured level when set.
fn init_logging(settings: &LoggingSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    if settings.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

async fn open_storage(settings: &StorageSettings) -> Result<Storage, LaunchError> {
    match settings.backend {
        StorageBackend::Memory => Ok(Storage::in_memory()),
        StorageBackend::Postgres => {
            let pg_config = PostgresConfig::new(&settings.postgres_url)
                .with_max_connections(settings.max_connections);
            let pool = PostgresPool::connect(&pg_config).await?;
            if settings.run_migrations {
                pool.run_migrations().await?;
            }
            Ok(Storage::Postgres(pool))
        }
    }
}
