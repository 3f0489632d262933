//! Published flood status and the blocked road-segment list.

use serde::{Deserialize, Serialize};

/// Road-segment identifiers reported as impassable while flooded.
///
/// Configured once at startup and never mutated. Order follows the
/// configuration; blank and repeated identifiers are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedWays {
    ways: Vec<String>,
}

impl BlockedWays {
    /// Build the list from configured identifiers.
    pub fn new<I, S>(ways: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut kept: Vec<String> = Vec::new();
        for way in ways {
            let way = way.into().trim().to_owned();
            if !way.is_empty() && !kept.contains(&way) {
                kept.push(way);
            }
        }
        Self { ways: kept }
    }

    /// The identifiers in configured order.
    pub fn as_slice(&self) -> &[String] {
        &self.ways
    }

    /// Number of configured identifiers.
    pub fn len(&self) -> usize {
        self.ways.len()
    }

    /// Whether no identifiers are configured.
    pub fn is_empty(&self) -> bool {
        self.ways.is_empty()
    }
}

/// Body of `GET /status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloodStatus {
    /// Whether the last accepted reading was above the threshold.
    pub flood: bool,
    /// All configured segments when flooded, otherwise empty.
    #[serde(rename = "blockedWays")]
    pub blocked_ways: Vec<String>,
}

impl FloodStatus {
    /// Project the flood flag onto the configured segment list.
    pub fn project(flood: bool, ways: &BlockedWays) -> Self {
        let blocked_ways = if flood {
            ways.as_slice().to_vec()
        } else {
            Vec::new()
        };
        Self { flood, blocked_ways }
    }
}
