//! Search statistics.

use std::time::Duration;

use serde::Serialize;

/// Counters for a single search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStatistics {
    /// Loop iterations, including the one that hit a limit.
    pub iterations: u64,
    /// Successor states produced by enabled transitions.
    pub generated: u64,
    /// Nodes moved from the open frontier to the closed set.
    pub expanded: u64,
    /// Successors that matched a known state.
    pub duplicates: u64,
    /// Open nodes re-parented onto a cheaper path.
    pub relaxations: u64,
    /// Wall-clock time of the search.
    pub elapsed_ms: u64,
}

impl SearchStatistics {
    /// Successors generated per expanded node.
    pub fn branching_factor(&self) -> f64 {
        if self.expanded == 0 {
            0.0
        } else {
            self.generated as f64 / self.expanded as f64
        }
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms)
    }
}
