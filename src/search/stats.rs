//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one agent decision.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited by minimax (root candidates included).
    pub nodes: u64,

    /// Branches cut by alpha-beta.
    pub cutoffs: u64,

    /// Positions scored by the static evaluator.
    pub evaluations: u64,

    /// Root candidates ranked.
    pub candidates: u32,

    /// Depth used for this decision.
    pub depth: u32,

    /// Whether the second-ranked move was played.
    pub noise_applied: bool,

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

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of expanded interior nodes that were cut.
    #[must_use]
    pub fn cutoff_rate(&self) -> f64 {
        let interior = self.nodes.saturating_sub(self.evaluations);
        if interior == 0 {
            0.0
        } else {
            self.cutoffs as f64 / interior as f64
        }
    }
}
