//! Move-choosing agents.
//!
//! Every agent implements [`Agent`]. The simple ones pick from the legal
//! moves directly:
//!
//! - [`RandomAgent`]: uniform choice
//! - [`GreedyAgent`]: largest immediate visible-score gain
//! - [`HeuristicFilterAgent`]: prefers moves touching chosen goods
//!
//! The search agents look ahead over speculative snapshots and score the
//! frontier with a pluggable [`Evaluator`]:
//!
//! - [`MinimaxAgent`]: fixed depth, random move on timeout
//! - [`AlphaBetaAgent`]: iterative deepening until the deadline
//!
//! Both poll the [`Deadline`] at every node and give up once less than
//! `SearchConfig::timer_threshold` remains.

pub mod agent;
pub mod alphabeta;
pub mod config;
mod context;
pub mod deadline;
pub mod eval;
pub mod minimax;
pub mod stats;

// Re-export main types
pub use agent::{Agent, GreedyAgent, HeuristicFilterAgent, RandomAgent};
pub use alphabeta::AlphaBetaAgent;
pub use config::SearchConfig;
pub use deadline::Deadline;
pub use eval::{terminal_value, Evaluator, ImmediateGain, Mobility, ScoreMargin, SellOptions};
pub use minimax::MinimaxAgent;
pub use stats::SearchStats;
