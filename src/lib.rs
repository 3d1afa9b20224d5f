//! # rust-jaipur
//!
//! A two-player Jaipur engine with adversarial search agents.
//!
//! ## Design Principles
//!
//! 1. **Value-Semantics State**: `GameState` owns everything it holds.
//!    `snapshot()` is an independent copy, so agents can search freely
//!    without ever touching the live game.
//!
//! 2. **Validate, Then Mutate**: every move is checked in full before any
//!    field changes. A rejected move leaves the state as it was.
//!
//! 3. **Explicit Randomness**: all shuffles and agent choices draw from a
//!    seeded `GameRng`. A seed replays a match exactly.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: the deck is an `im::Vector`, hands
//!   and the market are `Copy` multisets, so snapshots are cheap.
//!
//! - **Exact Move Sets**: exchanges are enumerated as combinations of card
//!   counts, and every `MoveSet` is de-duplicated and sorted.
//!
//! - **Deadline-Aware Search**: minimax and alpha-beta poll a `Deadline`
//!   at every node and fall back to their best known move.
//!
//! ## Modules
//!
//! - `core`: players, RNG, moves, errors and the game state
//! - `cards`: goods, card multisets and token ladders
//! - `rules`: move enumeration, move application, scoring
//! - `search`: agents and position evaluators
//! - `arena`: match driver and tournaments
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//!
//! use rust_jaipur::arena::{play_match, MatchConfig};
//! use rust_jaipur::core::GameRng;
//! use rust_jaipur::search::{GreedyAgent, RandomAgent};
//!
//! let mut greedy = GreedyAgent::new("Greedy", 1);
//! let mut random = RandomAgent::new("Random", 2);
//! let config = MatchConfig::default().with_move_time_limit(Duration::from_secs(1));
//!
//! let outcome = play_match(&mut greedy, &mut random, &config, &mut GameRng::new(42));
//! assert!(!outcome.history.is_empty());
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod search;
pub mod arena;

// Re-export commonly used types
pub use crate::core::{GameRng, GameState, InvalidMove, Move, MoveRecord, PlayerId, PlayerMap};

pub use crate::cards::{Good, GoodCounts, TokenSupply};

pub use crate::rules::{GameResult, MoveSet};

pub use crate::search::{
    Agent, AlphaBetaAgent, Deadline, Evaluator, GreedyAgent, HeuristicFilterAgent, MinimaxAgent,
    RandomAgent, SearchConfig, SearchStats,
};

pub use crate::arena::{play_match, MatchConfig, MatchOutcome, Termination, Tournament};
