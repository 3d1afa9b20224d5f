//! Move applicator.
//!
//! `apply_move` validates a move completely before touching the state, so
//! a rejected move is a no-op. After every accepted move the camel token
//! is recomputed and the turn passes to the other player; there is no
//! pass and no repeated turn.

use tracing::trace;

use crate::cards::{Good, GoodCounts};
use crate::core::{GameState, InvalidMove, Move, HAND_LIMIT};

impl GameState {
    /// Apply a move for the active player.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMove` if a precondition fails; the state is unchanged.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), InvalidMove> {
        match mv {
            Move::TakeCamels => self.take_camels()?,
            Move::Take(good) => self.take_card(good)?,
            Move::Exchange { give, take } => self.exchange(give, take)?,
            Move::Sell { good, count } => self.sell(good, count)?,
        }

        trace!(player = %self.active_player, %mv, turn = self.turn, "move applied");

        self.update_camel_token();
        self.active_player = self.active_player.opponent();
        self.turn += 1;
        Ok(())
    }

    /// Apply a move to a snapshot, leaving `self` untouched.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMove` if the move is not applicable here.
    pub fn forecast(&self, mv: Move) -> Result<GameState, InvalidMove> {
        let mut next = self.snapshot();
        next.apply_move(mv)?;
        Ok(next)
    }

    fn take_camels(&mut self) -> Result<(), InvalidMove> {
        let camels = self.market.get(Good::Camel);
        if camels == 0 {
            return Err(InvalidMove::NoCamelsInMarket);
        }

        self.market.set(Good::Camel, 0);
        self.boards[self.active_player].herd += camels;
        self.replenish_market();
        Ok(())
    }

    fn take_card(&mut self, good: Good) -> Result<(), InvalidMove> {
        if !self.market.contains(good) {
            return Err(InvalidMove::NotInMarket(good));
        }

        let board = &mut self.boards[self.active_player];
        if good.is_camel() {
            board.herd += 1;
        } else {
            let held = board.hand_size();
            if held >= HAND_LIMIT {
                return Err(InvalidMove::HandFull(held));
            }
            board.hand.add(good, 1);
        }

        self.market.remove(good, 1);
        self.replenish_market();
        Ok(())
    }

    fn exchange(&mut self, give: GoodCounts, take: GoodCounts) -> Result<(), InvalidMove> {
        if give.total() != take.total() {
            return Err(InvalidMove::ExchangeSizeMismatch {
                give: give.total(),
                take: take.total(),
            });
        }
        if give.is_empty() {
            return Err(InvalidMove::EmptyExchange);
        }
        if let Some(good) = give.common_good(&take) {
            return Err(InvalidMove::ExchangeOverlap(good));
        }

        let kept = self.boards[self.active_player]
            .holdings()
            .minus(&give)
            .map_err(InvalidMove::InsufficientCards)?;
        let market = self
            .market
            .minus(&take)
            .map_err(InvalidMove::InsufficientMarket)?;

        let holdings = kept.plus(&take);
        let hand_size = holdings.without_camels().total();
        if hand_size > HAND_LIMIT {
            return Err(InvalidMove::HandLimit(hand_size));
        }

        self.market = market.plus(&give);
        self.boards[self.active_player].set_holdings(holdings);
        Ok(())
    }

    fn sell(&mut self, good: Good, count: u8) -> Result<(), InvalidMove> {
        if good.is_camel() {
            return Err(InvalidMove::CamelsNotForSale);
        }
        if count < good.min_sale() {
            return Err(InvalidMove::SaleTooSmall {
                good,
                minimum: good.min_sale(),
            });
        }

        let player = self.active_player;
        let held = self.boards[player].hand.get(good);
        if !self.boards[player].hand.remove(good, count) {
            return Err(InvalidMove::NotEnoughToSell {
                good,
                requested: count,
                held,
            });
        }

        for _ in 0..count {
            self.discard.push_back(good);
        }

        for _ in 0..count {
            if let Some(token) = self.tokens.take_goods_token(good) {
                self.boards[player].goods_tokens.push(token);
            }
        }
        if let Some(bonus) = self.tokens.take_bonus_token(count) {
            self.boards[player].bonus_tokens.push(bonus);
        }
        Ok(())
    }
}
