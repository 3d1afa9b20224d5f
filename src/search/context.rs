//! Node bookkeeping shared by the depth-limited searches.

use std::time::Duration;

use tracing::warn;

use super::deadline::Deadline;
use super::eval::Evaluator;
use super::stats::SearchStats;
use crate::core::{GameState, Move, PlayerId};
use crate::rules::MoveSet;

/// Raised inside a search when the deadline is about to pass.
///
/// Propagated with `?` up to the agent, which catches it and falls back
/// to its best known move. Never escapes an agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SearchTimeout;

/// What a node turned out to be.
pub(crate) enum Expansion {
    Leaf(f64),
    Children(MoveSet),
}

/// Per-search state threaded through the recursion.
pub(crate) struct SearchContext<'a, V: ?Sized> {
    /// Player the search is choosing a move for.
    pub player: PlayerId,
    evaluator: &'a V,
    deadline: &'a Deadline,
    threshold: Duration,
    pub stats: &'a mut SearchStats,
    /// Set when any node was cut off by the depth limit rather than by
    /// the end of the game, i.e. a deeper search could see more.
    pub depth_limited: bool,
}

impl<'a, V: Evaluator + ?Sized> SearchContext<'a, V> {
    pub fn new(
        player: PlayerId,
        evaluator: &'a V,
        deadline: &'a Deadline,
        threshold: Duration,
        stats: &'a mut SearchStats,
    ) -> Self {
        Self {
            player,
            evaluator,
            deadline,
            threshold,
            stats,
            depth_limited: false,
        }
    }

    /// Count a node and abort if the deadline is within the threshold.
    pub fn checkpoint(&mut self) -> Result<(), SearchTimeout> {
        self.stats.nodes += 1;
        if self.deadline.remaining() < self.threshold {
            return Err(SearchTimeout);
        }
        Ok(())
    }

    /// Evaluate `state` if it is a leaf at `depth`, else enumerate its moves.
    pub fn expand(&mut self, state: &GameState, depth: u32) -> Result<Expansion, SearchTimeout> {
        self.checkpoint()?;

        if state.is_terminal() {
            return Ok(Expansion::Leaf(self.evaluate(state)));
        }
        if depth == 0 {
            self.depth_limited = true;
            return Ok(Expansion::Leaf(self.evaluate(state)));
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return Ok(Expansion::Leaf(self.evaluate(state)));
        }
        Ok(Expansion::Children(moves))
    }

    /// Whether the searching player is to move at `state`.
    pub fn maximizing(&self, state: &GameState) -> bool {
        state.active_player() == self.player
    }

    /// The state after `mv`, or `None` if the applicator refuses it.
    ///
    /// Enumerated moves are always applicable, so a refusal is logged and
    /// the branch skipped.
    pub fn child(&self, state: &GameState, mv: Move) -> Option<GameState> {
        match state.forecast(mv) {
            Ok(next) => Some(next),
            Err(err) => {
                warn!(%mv, %err, "enumerated move rejected during search");
                None
            }
        }
    }

    fn evaluate(&self, state: &GameState) -> f64 {
        self.evaluator.evaluate(state, self.player)
    }
}

/// Root moves with `first` moved to the front, for better pruning.
pub(crate) fn ordered_root(legal: &MoveSet, first: Option<Move>) -> Vec<Move> {
    let mut moves = Vec::with_capacity(legal.len());
    if let Some(mv) = first.filter(|mv| legal.contains(mv)) {
        moves.push(mv);
    }
    moves.extend(legal.iter().copied().filter(|&mv| Some(mv) != first));
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Good;
    use crate::core::GameRng;
    use crate::search::eval::ScoreMargin;

    #[test]
    fn test_expand_at_depth_zero_is_a_leaf() {
        let state = GameState::new_game("a", "b", &mut GameRng::new(1));
        let deadline = Deadline::unbounded();
        let mut stats = SearchStats::default();
        let eval = ScoreMargin::default();
        let mut ctx = SearchContext::new(PlayerId::FIRST, &eval, &deadline, Duration::ZERO, &mut stats);

        assert!(matches!(ctx.expand(&state, 0), Ok(Expansion::Leaf(_))));
        assert!(ctx.depth_limited);
        assert!(matches!(ctx.expand(&state, 1), Ok(Expansion::Children(_))));
        assert_eq!(ctx.stats.nodes, 2);
    }

    #[test]
    fn test_checkpoint_times_out() {
        let state = GameState::new_game("a", "b", &mut GameRng::new(1));
        let deadline = Deadline::after(Duration::from_millis(5));
        let mut stats = SearchStats::default();
        let eval = ScoreMargin::default();
        let mut ctx = SearchContext::new(PlayerId::FIRST, &eval, &deadline, Duration::from_secs(1), &mut stats);

        assert!(matches!(ctx.expand(&state, 3), Err(SearchTimeout)));
    }

    #[test]
    fn test_ordered_root_puts_first_in_front() {
        let legal: MoveSet = [Move::TakeCamels, Move::Take(Good::Gold), Move::Take(Good::Silver)]
            .into_iter()
            .collect();

        let ordered = ordered_root(&legal, Some(Move::Take(Good::Silver)));
        assert_eq!(ordered.len(), 3);
        assert_eq!(ordered[0], Move::Take(Good::Silver));

        let missing = ordered_root(&legal, Some(Move::Take(Good::Cloth)));
        assert_eq!(missing, legal.as_slice());
    }
}
