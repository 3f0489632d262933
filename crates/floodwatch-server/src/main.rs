//! Floodwatch service binary.
//!
//! Receives water-level readings from the roadside sensor and publishes
//! the derived flood status to map-routing clients.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `floodwatch-config.yaml` (or
//!    `$FLOODWATCH_CONFIG`), then apply environment overrides
//! 2. Initialize structured logging (tracing)
//! 3. Create the flood monitor in the clear state
//! 4. Bind the HTTP listener and serve until terminated

mod error;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use floodwatch_api::{start_server, AppState, ServerConfig};
use floodwatch_core::config::{LogFormat, LoggingConfig, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use floodwatch_core::FloodwatchConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the server cannot
/// bind its listener.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = config_path();
    let config = load_config(&config_path)?;

    init_logging(&config.logging);

    info!("floodwatch starting");
    if config_path.exists() {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
    }
    info!(
        threshold_cm = config.flood.threshold_cm,
        blocked_ways = ?config.flood.blocked_ways,
        "Flood monitor configured"
    );

    let state = Arc::new(AppState::from_config(&config.flood));
    let server_config = ServerConfig::from(&config.server);

    serve(&server_config, state).await?;
    Ok(())
}

/// Resolve the config file path from `FLOODWATCH_CONFIG` or the default.
fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV).map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Load configuration, falling back to defaults when no file exists.
fn load_config(path: &Path) -> Result<FloodwatchConfig, AppError> {
    Ok(FloodwatchConfig::load(path)?)
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `logging.level`.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    match logging.format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .init(),
    }
}

/// Run the HTTP server until the process is terminated.
async fn serve(config: &ServerConfig, state: Arc<AppState>) -> Result<(), AppError> {
    start_server(config, state).await?;
    Ok(())
}
