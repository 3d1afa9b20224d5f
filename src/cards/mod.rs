//! Card catalog: card types, card multisets and token ladders.
//!
//! This is static game data plus the small containers built on it. The
//! rules live in `rules`; nothing here knows whose turn it is.

pub mod counts;
pub mod good;
pub mod tokens;

pub use counts::GoodCounts;
pub use good::Good;
pub use tokens::{Ladder, TokenSupply, DEPLETED_LADDERS_TO_END, MAX_BONUS_TIER, MIN_BONUS_SALE};
