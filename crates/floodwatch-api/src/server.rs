//! HTTP server lifecycle.
//!
//! Provides [`start_server`] which binds to a TCP port and serves the
//! router until the process is terminated.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use floodwatch_core::config::HttpConfig;
use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Configuration for the HTTP listener.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from(&HttpConfig::default())
    }
}

impl From<&HttpConfig> for ServerConfig {
    fn from(config: &HttpConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
        }
    }
}

impl ServerConfig {
    /// Resolve the configured host and port to a socket address.
    ///
    /// Accepts bare IPv4 or IPv6 literals (`0.0.0.0`, `::`).
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let ip: IpAddr = self
            .host
            .trim()
            .parse()
            .map_err(|e| ServerError::Bind(format!("invalid address {}: {e}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Serve the ingest and status routes on `host:port`.
///
/// Runs until the process is terminated; there is no drain step because
/// the flood flag needs no flushing.
///
/// # Errors
///
/// [`ServerError::Bind`] when `host` is not an IP literal (hostnames
/// such as `localhost` are not resolved) or the port is already taken.
/// [`ServerError::Serve`] if accepting connections fails afterwards.
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    let router = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(%addr, "Floodwatch API listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    Ok(())
}

/// Errors that can occur when starting or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}
