//! Flood state derivation for Floodwatch.
//!
//! A remote sensor pushes water-level readings; map-routing clients poll
//! for which road segments to avoid. This crate holds everything between
//! those two sides that is not HTTP:
//!
//! - [`reading`] -- interpreting the loosely-typed water level field
//! - [`state`] -- the shared atomic flood flag and its two-state machine
//! - [`status`] -- the blocked-way list and the published status shape
//! - [`monitor`] -- [`FloodMonitor`], the state holder with its ingest
//!   and status access paths
//! - [`config`] -- typed configuration loaded from YAML and the environment

pub mod config;
pub mod monitor;
pub mod reading;
pub mod state;
pub mod status;

pub use config::{ConfigError, FloodConfig, FloodwatchConfig};
pub use monitor::FloodMonitor;
pub use reading::{Reading, ReadingError, WaterLevel};
pub use state::{FloodLevel, FloodState, Transition};
pub use status::{BlockedWays, FloodStatus};
