//! Axum router construction for the Floodwatch API.
//!
//! Assembles the routes into a single [`Router`] with permissive CORS so
//! the browser map client can poll from any origin.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `POST /data` -- sensor reading ingest
/// - `GET /status` -- flood flag and blocked ways
/// - `GET /health` -- liveness check
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/data", post(handlers::ingest))
        .route("/status", get(handlers::status))
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
