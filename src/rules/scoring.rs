//! Scoring and termination.
//!
//! All predicates here are pure and work the same on the live game and on
//! any speculative snapshot.

use crate::cards::DEPLETED_LADDERS_TO_END;
use crate::core::{GameState, PlayerId, CAMEL_BONUS};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal total scores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

impl GameState {
    /// Visible score of the player to move.
    #[must_use]
    pub fn visible_score(&self) -> i32 {
        self.visible_score_for(self.active_player)
    }

    /// Total score of the player to move.
    #[must_use]
    pub fn total_score(&self) -> i32 {
        self.total_score_for(self.active_player)
    }

    /// Face-up goods tokens plus the camel token.
    #[must_use]
    pub fn visible_score_for(&self, player: PlayerId) -> i32 {
        let goods: i32 = self.boards[player].goods_tokens.iter().map(|&t| i32::from(t)).sum();
        goods + self.camel_bonus(player)
    }

    /// Visible score plus the hidden bonus tokens.
    #[must_use]
    pub fn total_score_for(&self, player: PlayerId) -> i32 {
        let bonus: i32 = self.boards[player].bonus_tokens.iter().map(|&t| i32::from(t)).sum();
        self.visible_score_for(player) + bonus
    }

    /// The game ends when the deck is empty or three goods ladders are.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.deck.is_empty() || self.tokens.depleted_count() >= DEPLETED_LADDERS_TO_END
    }

    /// True only at a terminal state where `player` has the higher total.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.is_terminal() && self.total_score_for(player) > self.total_score_for(player.opponent())
    }

    /// True only at a terminal state where `player` has the lower total.
    #[must_use]
    pub fn is_loser(&self, player: PlayerId) -> bool {
        self.is_terminal() && self.total_score_for(player) < self.total_score_for(player.opponent())
    }

    /// Final result by total score, `None` while the game is running.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_terminal() {
            return None;
        }
        Some(self.result_by_score())
    }

    /// Result by total score regardless of whether the game has ended.
    #[must_use]
    pub fn result_by_score(&self) -> GameResult {
        let first = self.total_score_for(PlayerId::FIRST);
        let second = self.total_score_for(PlayerId::SECOND);
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::SECOND),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    fn camel_bonus(&self, player: PlayerId) -> i32 {
        if self.camel_token == Some(player) {
            CAMEL_BONUS
        } else {
            0
        }
    }
}
