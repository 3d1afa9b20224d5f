//! Rules of the game.
//!
//! - `moves`: the legal-move enumerator and `MoveSet`
//! - `engine`: the move applicator (`apply_move`, `forecast`)
//! - `scoring`: scores, end-of-game detection and the result
//!
//! All three are `impl GameState` blocks so callers see one surface:
//! `state.legal_moves()`, `state.apply_move(mv)`, `state.is_terminal()`.

pub mod engine;
pub mod moves;
pub mod scoring;

pub use moves::{MoveSet, MAX_EXCHANGE};
pub use scoring::GameResult;
