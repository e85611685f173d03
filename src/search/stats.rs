//! Search statistics for diagnostics and algorithm comparison.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
///
/// Counters only record what the search did; they never feed back into
/// which action is chosen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States visited, root included.
    pub nodes: u64,

    /// Terminal states evaluated with `utility`.
    pub terminals: u64,

    /// Alpha or beta cutoffs taken. Always zero for plain minimax.
    pub cutoffs: u64,

    /// Deepest ply below the root reached.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
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

    /// Record a visit to a state `depth` plies below the root.
    pub(crate) fn visit(&mut self, depth: u16) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Add another search's counters to these.
    pub fn accumulate(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.terminals += other.terminals;
        self.cutoffs += other.cutoffs;
        self.max_depth = self.max_depth.max(other.max_depth);
        self.time_us += other.time_us;
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
