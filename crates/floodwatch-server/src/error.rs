//! Error types for the Floodwatch binary.
//!
//! [`AppError`] wraps every failure that can end the process, so `main`
//! can propagate with `?`.

/// Top-level error for the Floodwatch binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: floodwatch_core::ConfigError,
    },

    /// The HTTP server failed to bind or stopped with an error.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: floodwatch_api::ServerError,
    },
}
