//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics from the most recent move decision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited, root included.
    pub nodes: u64,

    /// Branches cut by alpha-beta pruning.
    pub cutoffs: u64,

    /// Deepest search that ran to completion (0 = none did).
    pub completed_depth: u32,

    /// Whether the deadline interrupted the search.
    pub timed_out: bool,

    /// Total time spent deciding (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_per_second() {
        let stats = SearchStats {
            nodes: 500,
            time_us: 250_000,
            ..SearchStats::default()
        };
        assert!((stats.nodes_per_second() - 2000.0).abs() < 1e-9);
        assert_eq!(SearchStats::default().nodes_per_second(), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut stats = SearchStats {
            nodes: 3,
            timed_out: true,
            ..SearchStats::default()
        };
        stats.reset();
        assert_eq!(stats, SearchStats::default());
    }
}
