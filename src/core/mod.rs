//! Core engine types: players, RNG, moves, errors and the game state.
//!
//! Everything above this module (rules, search, arena) is written against
//! these types. The state is deliberately plain data; the behavior that
//! mutates it lives in `rules`.

pub mod action;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, MoveRecord};
pub use error::InvalidMove;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use state::{
    GameState, PlayerBoard, CAMEL_BONUS, HAND_LIMIT, MARKET_SIZE, STARTING_HAND,
    STARTING_MARKET_CAMELS,
};
