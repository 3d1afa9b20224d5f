//! Rule violations raised by the move applicator.

use crate::cards::Good;

/// A move that breaks a rule precondition.
///
/// Returned synchronously by `GameState::apply_move`; the state is left
/// exactly as it was before the call. Running out of deck cards or tokens
/// is never an `InvalidMove`: those degrade to "nothing extra granted".
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The requested card is not in the market.
    #[display("{} is not in the market", _0)]
    NotInMarket(Good),

    /// `TakeCamels` with no camel in the market.
    #[display("there are no camels in the market")]
    NoCamelsInMarket,

    /// Taking a good would push the hand past the limit.
    #[display("hand already holds {} cards", _0)]
    HandFull(usize),

    /// An exchange would leave the hand above the limit.
    #[display("exchange would leave {} cards in hand", _0)]
    HandLimit(usize),

    /// An exchange with nothing on either side.
    #[display("exchange must trade at least one card")]
    EmptyExchange,

    /// Give and take sides of an exchange differ in size.
    #[display("exchange gives {} cards but takes {}", give, take)]
    ExchangeSizeMismatch { give: usize, take: usize },

    /// The same good appears on both sides of an exchange.
    #[display("{} appears on both sides of the exchange", _0)]
    ExchangeOverlap(Good),

    /// The player does not hold enough of a good to give it away.
    #[display("not enough {} to give", _0)]
    InsufficientCards(Good),

    /// The market does not hold enough of a good to take it.
    #[display("not enough {} in the market", _0)]
    InsufficientMarket(Good),

    /// Camels are never sold.
    #[display("camels cannot be sold")]
    CamelsNotForSale,

    /// A sale below the good's minimum size.
    #[display("{} must be sold at least {} at a time", good, minimum)]
    SaleTooSmall { good: Good, minimum: u8 },

    /// Selling more cards than the hand holds.
    #[display("cannot sell {} {}: only {} held", requested, good, held)]
    NotEnoughToSell { good: Good, requested: u8, held: u8 },
}

impl std::error::Error for InvalidMove {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_descriptive() {
        assert_eq!(
            InvalidMove::NotInMarket(Good::Gold).to_string(),
            "Gold is not in the market"
        );
        assert_eq!(
            InvalidMove::ExchangeSizeMismatch { give: 1, take: 3 }.to_string(),
            "exchange gives 1 cards but takes 3"
        );
        assert_eq!(
            InvalidMove::NotEnoughToSell { good: Good::Cloth, requested: 4, held: 3 }.to_string(),
            "cannot sell 4 Cloth: only 3 held"
        );
    }
}
