//! Shared flood state.
//!
//! [`FloodState`] is the one piece of mutable state in the service: a
//! single flag written by every accepted reading and read by every
//! status poll. It is an [`AtomicBool`] so handler tasks never block
//! each other and no reader can observe a partial update.
//!
//! Concurrent writers race with last-write-wins semantics. Readings
//! carry no sequence numbers, so when two submissions overlap either one
//! may determine the final state.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// The two states of the flood state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloodLevel {
    /// Water is at or below the threshold; no segments are blocked.
    Clear,
    /// Water is above the threshold; configured segments are blocked.
    Flooded,
}

impl FloodLevel {
    /// Map the stored flag to a level.
    pub const fn from_flooded(flooded: bool) -> Self {
        if flooded { Self::Flooded } else { Self::Clear }
    }

    /// Whether this level blocks road segments.
    pub const fn is_flooded(self) -> bool {
        matches!(self, Self::Flooded)
    }
}

impl fmt::Display for FloodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clear => write!(f, "clear"),
            Self::Flooded => write!(f, "flooded"),
        }
    }
}

/// Outcome of a state write: the level before and after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Level observed immediately before the write.
    pub previous: FloodLevel,
    /// Level stored by the write.
    pub current: FloodLevel,
}

impl Transition {
    /// Whether the write moved the state machine to a different level.
    pub fn changed(self) -> bool {
        self.previous != self.current
    }
}

/// Process-wide flood flag, starting [`FloodLevel::Clear`].
#[derive(Debug, Default)]
pub struct FloodState {
    flooded: AtomicBool,
}

impl FloodState {
    /// Create a state in [`FloodLevel::Clear`].
    pub const fn new() -> Self {
        Self {
            flooded: AtomicBool::new(false),
        }
    }

    /// Current level.
    pub fn level(&self) -> FloodLevel {
        FloodLevel::from_flooded(self.is_flooded())
    }

    /// Whether the state is currently [`FloodLevel::Flooded`].
    pub fn is_flooded(&self) -> bool {
        self.flooded.load(Ordering::Acquire)
    }

    /// Overwrite the level, returning what was replaced.
    ///
    /// The swap is a single atomic read-modify-write, so `previous` is
    /// exactly the value this write displaced even under contention.
    pub fn store(&self, level: FloodLevel) -> Transition {
        let previous = self.flooded.swap(level.is_flooded(), Ordering::AcqRel);
        Transition {
            previous: FloodLevel::from_flooded(previous),
            current: level,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn starts_clear() {
        let state = FloodState::new();
        assert_eq!(state.level(), FloodLevel::Clear);
        assert!(!state.is_flooded());
    }

    #[test]
    fn store_reports_transition() {
        let state = FloodState::new();

        let t = state.store(FloodLevel::Flooded);
        assert_eq!(t.previous, FloodLevel::Clear);
        assert_eq!(t.current, FloodLevel::Flooded);
        assert!(t.changed());

        let t = state.store(FloodLevel::Flooded);
        assert!(!t.changed());

        let t = state.store(FloodLevel::Clear);
        assert_eq!(t.previous, FloodLevel::Flooded);
        assert!(t.changed());
        assert_eq!(state.level(), FloodLevel::Clear);
    }

    #[test]
    fn level_display() {
        assert_eq!(FloodLevel::Clear.to_string(), "clear");
        assert_eq!(FloodLevel::Flooded.to_string(), "flooded");
    }

    #[tokio::test]
    async fn concurrent_writers_agree_on_one_transition() {
        let state = Arc::new(FloodState::new());
        let mut handles = Vec::new();
        for _ in 0..64 {
            let state = Arc::clone(&state);
            handles.push(tokio::spawn(async move {
                state.store(FloodLevel::Flooded)
            }));
        }

        let mut changed = 0_usize;
        for handle in handles {
            let transition = handle.await.unwrap();
            assert_eq!(transition.current, FloodLevel::Flooded);
            if transition.changed() {
                assert_eq!(transition.previous, FloodLevel::Clear);
                changed = changed.saturating_add(1);
            }
        }

        // Each swap displaces exactly what the previous write stored, so
        // only the first writer sees the Clear -> Flooded edge.
        assert_eq!(changed, 1);
        assert_eq!(state.level(), FloodLevel::Flooded);
    }
}
