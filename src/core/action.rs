//! Move representation.
//!
//! A player either takes from the market or sells from their hand, never
//! both in one turn:
//! - `TakeCamels`: every camel in the market
//! - `Take(good)`: a single card
//! - `Exchange { give, take }`: swap equal-size multisets with the market
//! - `Sell { good, count }`: discard cards of one type for tokens

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use crate::cards::{Good, GoodCounts};

/// A complete game move.
///
/// Moves are plain values: they can be hashed, compared, stored in a
/// `MoveSet`, serialized into match history and applied to any snapshot.
///
/// ```
/// use rust_jaipur::cards::{Good, GoodCounts};
/// use rust_jaipur::core::Move;
///
/// let trade = Move::Exchange {
///     give: [Good::Cloth, Good::Spice].into_iter().collect(),
///     take: GoodCounts::of(Good::Gold, 2),
/// };
/// assert_eq!(trade.to_string(), "Exchange [Cloth, Spice] for [Gold, Gold]");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Move {
    /// Take every camel in the market.
    TakeCamels,
    /// Take one card from the market.
    Take(Good),
    /// Swap cards from hand and herd for the same number of market cards.
    Exchange { give: GoodCounts, take: GoodCounts },
    /// Sell `count` cards of one good.
    Sell { good: Good, count: u8 },
}

impl Move {
    /// Whether this move takes or sells `good`, for filtering heuristics.
    ///
    /// For exchanges only the taken side counts: it is what the player gains.
    #[must_use]
    pub fn acquires_or_sells(&self, good: Good) -> bool {
        match *self {
            Move::TakeCamels => good.is_camel(),
            Move::Take(g) | Move::Sell { good: g, .. } => g == good,
            Move::Exchange { take, .. } => take.contains(good),
        }
    }

    #[must_use]
    pub fn is_sale(&self) -> bool {
        matches!(self, Move::Sell { .. })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::TakeCamels => f.write_str("Take camels"),
            Move::Take(good) => write!(f, "Take {good}"),
            Move::Exchange { give, take } => write!(f, "Exchange {give} for {take}"),
            Move::Sell { good, count } => write!(f, "Sell {count} {good}"),
        }
    }
}

/// A recorded move with its score impact, for match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number when the move was applied (starts at 1).
    pub turn: u32,

    /// The player who moved.
    pub player: PlayerId,

    /// The move applied.
    pub mv: Move,

    /// Change in each player's visible score caused by the move.
    pub visible_delta: PlayerMap<i32>,
}
