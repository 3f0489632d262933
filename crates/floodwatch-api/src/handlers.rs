//! HTTP endpoint handlers for the Floodwatch API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/data` | Submit a water-level reading from the sensor |
//! | `GET` | `/status` | Current flood flag and blocked road segments |
//! | `GET` | `/health` | Service health check |

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use floodwatch_core::{FloodStatus, Reading};
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Acknowledgement for an accepted reading.
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    /// Always `"success"`.
    pub status: &'static str,
    /// Flood flag computed from this reading.
    pub flood: bool,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Crate version.
    pub version: &'static str,
}

// ---------------------------------------------------------------------------
// POST /data
// ---------------------------------------------------------------------------

/// Accept a reading and overwrite the flood state.
///
/// The body must be a JSON object; anything else is rejected with
/// `400` and leaves the state untouched. A missing or non-numeric
/// `muc_nuoc` field counts as 0 cm.
pub async fn ingest(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<IngestResponse>, ApiError> {
    let Json(body) = payload?;
    let reading = Reading::from_json(&body)?;
    let transition = state.monitor.ingest(&reading);

    Ok(Json(IngestResponse {
        status: "success",
        flood: transition.current.is_flooded(),
    }))
}

// ---------------------------------------------------------------------------
// GET /status
// ---------------------------------------------------------------------------

/// Report the flood flag and, while flooded, every blocked segment.
pub async fn status(State(state): State<Arc<AppState>>) -> Json<FloodStatus> {
    Json(state.monitor.status())
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Liveness check. Does not touch flood state.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "floodwatch",
        version: env!("CARGO_PKG_VERSION"),
    })
}
