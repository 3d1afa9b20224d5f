//! Match orchestration.
//!
//! [`play_match`] runs a single game between two [`Agent`](crate::search::Agent)s
//! under a per-move time limit; [`Tournament`] runs many and keeps tallies.

pub mod config;
pub mod driver;
pub mod tournament;

// Re-export main types
pub use config::MatchConfig;
pub use driver::{play_match, MatchOutcome, Termination};
pub use tournament::{Standing, Tally, Tournament, TournamentReport};
