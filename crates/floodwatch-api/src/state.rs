//! Shared application state for the Floodwatch API server.
//!
//! [`AppState`] owns the single [`FloodMonitor`] for the process. It is
//! wrapped in [`Arc`](std::sync::Arc) once at startup and injected into
//! every handler through Axum's `State` extractor, so the ingest and
//! status handlers see the same flood flag without any module-level
//! globals.

use floodwatch_core::{FloodConfig, FloodMonitor};

/// Shared state for the Axum application.
#[derive(Debug, Default)]
pub struct AppState {
    /// The flood monitor written by `POST /data` and read by `GET /status`.
    pub monitor: FloodMonitor,
}

impl AppState {
    /// Create application state around an existing monitor.
    pub const fn new(monitor: FloodMonitor) -> Self {
        Self { monitor }
    }

    /// Create application state from the `flood` configuration section.
    pub fn from_config(config: &FloodConfig) -> Self {
        Self::new(FloodMonitor::from_config(config))
    }
}
