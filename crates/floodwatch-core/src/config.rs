//! Configuration loading and typed config structures for Floodwatch.
//!
//! Configuration lives in `floodwatch-config.yaml` next to the binary's
//! working directory (or wherever `FLOODWATCH_CONFIG` points). Every
//! field has a default, so a missing file or a partial file is valid.
//! Configuration is read once at startup and never changes afterwards.
//!
//! Environment variables override file values:
//! - `FLOODWATCH_HOST` overrides `server.host`
//! - `FLOODWATCH_PORT` overrides `server.port`
//! - `FLOOD_THRESHOLD_CM` overrides `flood.threshold_cm`
//! - `FLOODED_WAYS` overrides `flood.blocked_ways` (comma-separated)

use std::path::Path;

use serde::Deserialize;

use crate::monitor::DEFAULT_THRESHOLD_CM;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "floodwatch-config.yaml";

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "FLOODWATCH_CONFIG";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is not usable.
    #[error("invalid value for {field}: {message}")]
    Invalid {
        /// Dotted path of the offending field, or the env variable name.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
///
/// Mirrors the structure of `floodwatch-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FloodwatchConfig {
    /// Flood classification settings.
    #[serde(default)]
    pub flood: FloodConfig,

    /// HTTP listener settings.
    #[serde(default)]
    pub server: HttpConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FloodwatchConfig {
    /// Load configuration for process startup.
    ///
    /// Reads `path` if it exists, otherwise starts from defaults. Then
    /// applies environment overrides and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file exists but cannot be read,
    /// [`ConfigError::Yaml`] if it is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value or override is unusable.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Same as [`load`](Self::load), with overrides taken from `lookup`
    /// instead of the process environment.
    ///
    /// # Errors
    ///
    /// As for [`load`](Self::load).
    pub fn load_with<F>(path: &Path, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            serde_yml::from_str(&contents)?
        } else {
            Self::default()
        };
        config.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// Environment overrides are not applied.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (normally the process
    /// environment).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("FLOODWATCH_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("FLOODWATCH_PORT") {
            self.server.port = port.trim().parse().map_err(|e| ConfigError::Invalid {
                field: "FLOODWATCH_PORT",
                message: format!("{port:?} is not a port number: {e}"),
            })?;
        }
        if let Some(threshold) = lookup("FLOOD_THRESHOLD_CM") {
            self.flood.threshold_cm =
                threshold.trim().parse().map_err(|e| ConfigError::Invalid {
                    field: "FLOOD_THRESHOLD_CM",
                    message: format!("{threshold:?} is not a number: {e}"),
                })?;
        }
        if let Some(ways) = lookup("FLOODED_WAYS") {
            self.flood.blocked_ways = ways.split(',').map(|w| w.trim().to_owned()).collect();
        }
        Ok(())
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.flood.threshold_cm.is_finite() {
            return Err(ConfigError::Invalid {
                field: "flood.threshold_cm",
                message: format!("{} is not a finite number", self.flood.threshold_cm),
            });
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "server.host",
                message: "must not be empty".to_owned(),
            });
        }
        Ok(())
    }
}

/// Flood classification configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FloodConfig {
    /// Water level in centimetres above which the road is flooded.
    #[serde(default = "default_threshold_cm")]
    pub threshold_cm: f64,

    /// Road-segment identifiers blocked while flooded.
    #[serde(default = "default_blocked_ways")]
    pub blocked_ways: Vec<String>,
}

impl Default for FloodConfig {
    fn default() -> Self {
        Self {
            threshold_cm: default_threshold_cm(),
            blocked_ways: default_blocked_ways(),
        }
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    /// Address to bind (all interfaces by default).
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive (trace, debug, info, warn, error) used
    /// when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

const fn default_threshold_cm() -> f64 {
    DEFAULT_THRESHOLD_CM
}

fn default_blocked_ways() -> Vec<String> {
    vec!["1279915923".to_owned()]
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_owned()
}
