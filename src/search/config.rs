//! Search agent configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration shared by the minimax and alpha-beta agents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Fixed search depth for minimax, in plies (default: 3).
    pub depth: u32,

    /// Deepest iteration alpha-beta's iterative deepening will start
    /// (default: 20).
    pub max_depth: u32,

    /// Abort the search once less than this much time remains, leaving the
    /// driver a margin to receive the reply (default: 10 ms).
    pub timer_threshold: Duration,

    /// Seed for the agent's own RNG (fallback moves).
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            max_depth: 20,
            timer_threshold: Duration::from_millis(10),
            seed: 42,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_timer_threshold(mut self, threshold: Duration) -> Self {
        self.timer_threshold = threshold;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
