//! Flood monitor: the state holder with its two access paths.
//!
//! [`FloodMonitor`] combines the configured threshold and blocked-way
//! list with the shared [`FloodState`]. [`FloodMonitor::ingest`] is the
//! only writer; [`FloodMonitor::status`] is a pure read. Both take
//! `&self`, so one monitor behind an `Arc` serves every request task.

use tracing::{debug, info, warn};

use crate::config::FloodConfig;
use crate::reading::Reading;
use crate::state::{FloodLevel, FloodState, Transition};
use crate::status::{BlockedWays, FloodStatus};

/// Default flood threshold in centimetres.
pub const DEFAULT_THRESHOLD_CM: f64 = 1.5;

/// Classify a water level against a threshold.
///
/// Strictly greater-than: a level equal to the threshold is clear. NaN
/// compares false and is therefore clear as well.
pub const fn classify(water_level_cm: f64, threshold_cm: f64) -> FloodLevel {
    FloodLevel::from_flooded(water_level_cm > threshold_cm)
}

/// Derives and publishes flood status from incoming readings.
#[derive(Debug)]
pub struct FloodMonitor {
    threshold_cm: f64,
    blocked_ways: BlockedWays,
    state: FloodState,
}

impl FloodMonitor {
    /// Create a monitor in the clear state.
    pub const fn new(threshold_cm: f64, blocked_ways: BlockedWays) -> Self {
        Self {
            threshold_cm,
            blocked_ways,
            state: FloodState::new(),
        }
    }

    /// Create a monitor from the `flood` configuration section.
    pub fn from_config(config: &FloodConfig) -> Self {
        Self::new(
            config.threshold_cm,
            BlockedWays::new(config.blocked_ways.iter().map(String::as_str)),
        )
    }

    /// Apply a reading, overwriting the current flood state.
    pub fn ingest(&self, reading: &Reading) -> Transition {
        let level = reading.level();
        let water_level_cm = level.cm();

        if level.is_defaulted() {
            debug!(source = level.source(), "Water level absent or non-numeric, using 0 cm");
        }
        info!(water_level_cm, source = level.source(), "Sensor reading received");

        let transition = self.state.store(classify(water_level_cm, self.threshold_cm));

        if transition.changed() {
            match transition.current {
                FloodLevel::Flooded => warn!(
                    water_level_cm,
                    threshold_cm = self.threshold_cm,
                    blocked_ways = self.blocked_ways.len(),
                    "Flood detected, blocking road segments"
                ),
                FloodLevel::Clear => info!(
                    water_level_cm,
                    threshold_cm = self.threshold_cm,
                    "Water receded, road segments reopened"
                ),
            }
        }

        transition
    }

    /// Snapshot of the current status for pollers.
    pub fn status(&self) -> FloodStatus {
        FloodStatus::project(self.state.is_flooded(), &self.blocked_ways)
    }

    /// Current level of the state machine.
    pub fn level(&self) -> FloodLevel {
        self.state.level()
    }
}

impl Default for FloodMonitor {
    fn default() -> Self {
        Self::from_config(&FloodConfig::default())
    }
}
