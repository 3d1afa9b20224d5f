//! Position evaluators for depth-limited search.
//!
//! An evaluator scores a state from one player's point of view; larger is
//! better for that player. Every evaluator here returns `+inf` for a
//! decided terminal state the player has won and `-inf` for one it has
//! lost, so search always prefers a real win over any heuristic estimate.

use crate::cards::Good;
use crate::core::{GameState, PlayerId};

/// Scores a state for one player.
///
/// Plain closures of the right shape are evaluators too:
///
/// ```
/// use rust_jaipur::core::{GameRng, GameState, PlayerId};
/// use rust_jaipur::search::Evaluator;
///
/// let herd = |state: &GameState, player: PlayerId| f64::from(state.board(player).herd);
/// let state = GameState::new_game("a", "b", &mut GameRng::new(1));
/// assert!(herd.evaluate(&state, PlayerId::FIRST) >= 0.0);
/// ```
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, state: &GameState, player: PlayerId) -> f64;
}

impl<F> Evaluator for F
where
    F: Fn(&GameState, PlayerId) -> f64 + Send + Sync,
{
    fn evaluate(&self, state: &GameState, player: PlayerId) -> f64 {
        self(state, player)
    }
}

/// `±inf` if the game is over and decided, `None` otherwise.
#[must_use]
pub fn terminal_value(state: &GameState, player: PlayerId) -> Option<f64> {
    if state.is_winner(player) {
        Some(f64::INFINITY)
    } else if state.is_loser(player) {
        Some(f64::NEG_INFINITY)
    } else {
        None
    }
}

/// Best visible-score gain `player` could make with one move right now.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateGain;

impl Evaluator for ImmediateGain {
    fn evaluate(&self, state: &GameState, player: PlayerId) -> f64 {
        if let Some(value) = terminal_value(state, player) {
            return value;
        }

        let mut view = state.snapshot();
        view.active_player = player;
        let base = view.visible_score_for(player);

        view.legal_moves()
            .iter()
            .filter_map(|&mv| view.forecast(mv).ok())
            .map(|next| next.visible_score_for(player) - base)
            .max()
            .map_or(0.0, f64::from)
    }
}

/// Number of sale moves open to `player`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SellOptions;

impl Evaluator for SellOptions {
    fn evaluate(&self, state: &GameState, player: PlayerId) -> f64 {
        if let Some(value) = terminal_value(state, player) {
            return value;
        }
        let sales = state
            .legal_moves_for(player)
            .iter()
            .filter(|mv| mv.is_sale())
            .count();
        sales as f64
    }
}

/// Number of moves open to `player`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mobility;

impl Evaluator for Mobility {
    fn evaluate(&self, state: &GameState, player: PlayerId) -> f64 {
        if let Some(value) = terminal_value(state, player) {
            return value;
        }
        state.legal_moves_for(player).len() as f64
    }
}

/// Visible-score margin over the opponent plus a small credit for jewels
/// in hand.
#[derive(Clone, Copy, Debug)]
pub struct ScoreMargin {
    /// Credit per jewel card (Diamond, Gold, Silver) held.
    pub jewel_weight: f64,
}

impl Default for ScoreMargin {
    fn default() -> Self {
        Self { jewel_weight: 0.5 }
    }
}

impl Evaluator for ScoreMargin {
    fn evaluate(&self, state: &GameState, player: PlayerId) -> f64 {
        if let Some(value) = terminal_value(state, player) {
            return value;
        }

        let jewels = |p: PlayerId| -> f64 {
            Good::JEWELS
                .iter()
                .map(|&g| f64::from(state.board(p).hand.get(g)))
                .sum()
        };
        let margin = state.visible_score_for(player) - state.visible_score_for(player.opponent());
        f64::from(margin) + self.jewel_weight * (jewels(player) - jewels(player.opponent()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::GoodCounts;
    use crate::core::GameRng;

    fn state() -> GameState {
        let mut state = GameState::new_game("a", "b", &mut GameRng::new(4));
        state.camel_token = None;
        for player in PlayerId::all() {
            state.boards[player].hand = GoodCounts::new();
            state.boards[player].herd = 0;
        }
        state
    }

    #[test]
    fn test_terminal_values() {
        let mut s = state();
        s.deck.clear();
        s.boards[PlayerId::FIRST].goods_tokens.push(5);

        for evaluator in [&ImmediateGain as &dyn Evaluator, &SellOptions, &Mobility, &ScoreMargin::default()] {
            assert_eq!(evaluator.evaluate(&s, PlayerId::FIRST), f64::INFINITY);
            assert_eq!(evaluator.evaluate(&s, PlayerId::SECOND), f64::NEG_INFINITY);
        }
    }

    #[test]
    fn test_immediate_gain_finds_best_move() {
        let mut s = state();
        s.market = GoodCounts::of(Good::Leather, 5);
        s.boards[PlayerId::SECOND].hand = GoodCounts::of(Good::Diamond, 2);

        // Top two diamond tokens: 7 + 7, no bonus for a pair
        assert_eq!(ImmediateGain.evaluate(&s, PlayerId::SECOND), 14.0);
        assert_eq!(ImmediateGain.evaluate(&s, PlayerId::FIRST), 0.0);
    }

    #[test]
    fn test_sell_options_counts_sales() {
        let mut s = state();
        s.boards[PlayerId::FIRST].hand = GoodCounts::of(Good::Cloth, 3);
        assert_eq!(SellOptions.evaluate(&s, PlayerId::FIRST), 3.0);
    }

    #[test]
    fn test_mobility_matches_move_count() {
        let s = state();
        let expected = s.legal_moves_for(PlayerId::SECOND).len() as f64;
        assert_eq!(Mobility.evaluate(&s, PlayerId::SECOND), expected);
    }

    #[test]
    fn test_score_margin_is_antisymmetric() {
        let mut s = state();
        s.boards[PlayerId::FIRST].goods_tokens.extend([4, 3]);
        s.boards[PlayerId::SECOND].hand = GoodCounts::of(Good::Gold, 2);

        let eval = ScoreMargin::default();
        assert_eq!(eval.evaluate(&s, PlayerId::FIRST), 6.0);
        assert_eq!(eval.evaluate(&s, PlayerId::SECOND), -6.0);
    }

    #[test]
    fn test_closure_evaluator() {
        let s = state();
        let constant = |_: &GameState, _: PlayerId| 1.5;
        assert_eq!(constant.evaluate(&s, PlayerId::FIRST), 1.5);
    }
}
