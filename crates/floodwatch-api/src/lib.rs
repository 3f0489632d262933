//! HTTP API for Floodwatch.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`POST /data`** for the water-level sensor to push readings
//! - **`GET /status`** for map-routing clients to poll the flood flag and
//!   the road segments to avoid
//! - **`GET /health`** for liveness checks
//!
//! # Architecture
//!
//! Both reading endpoints share one [`FloodMonitor`] held in [`AppState`].
//! Ingest overwrites its atomic flag; status reads it. No handler ever
//! blocks, so the default multi-threaded Tokio runtime serves any mix of
//! concurrent submissions and polls.
//!
//! [`FloodMonitor`]: floodwatch_core::FloodMonitor

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
