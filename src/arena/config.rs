//! Match configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Limits the driver enforces on every match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Time an agent has to reply to one move request (default: 50 ms).
    pub move_time_limit: Duration,

    /// Turns after which the match is stopped and scored as it stands
    /// (default: 500). Real games end long before this.
    pub max_turns: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            move_time_limit: Duration::from_millis(50),
            max_turns: 500,
        }
    }
}

impl MatchConfig {
    pub fn with_move_time_limit(mut self, limit: Duration) -> Self {
        self.move_time_limit = limit;
        self
    }

    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }
}
