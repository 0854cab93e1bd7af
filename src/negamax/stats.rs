//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `pick_position` call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards evaluated, terminal or not.
    pub nodes_visited: u64,

    /// Alpha-beta cutoffs taken.
    pub cutoffs: u64,

    /// Deepest ply reached (root is 1).
    pub max_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,

    /// The move came from the random opening branch.
    pub random_opening: bool,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
