//! The agent contract and the simple, non-searching agents.

use tracing::trace;

use super::deadline::Deadline;
use crate::cards::Good;
use crate::core::{GameRng, GameState, Move};
use crate::rules::MoveSet;

// =============================================================================
// Agent Contract
// =============================================================================

/// A move-choosing player.
///
/// The driver hands every agent its own snapshot of the game, the legal
/// moves of the player to move and a deadline. The agent may mutate its
/// own state (RNG, statistics) but never the live game.
///
/// Returning `None`, a move outside `legal`, or replying after the
/// deadline loses the match.
pub trait Agent: Send {
    /// Display name, used in logs and match records.
    fn name(&self) -> &str;

    fn choose_move(&mut self, snapshot: &GameState, legal: &MoveSet, deadline: &Deadline) -> Option<Move>;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn choose_move(&mut self, snapshot: &GameState, legal: &MoveSet, deadline: &Deadline) -> Option<Move> {
        (**self).choose_move(snapshot, legal, deadline)
    }
}

// =============================================================================
// Random
// =============================================================================

/// Picks a legal move uniformly at random.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    name: String,
    rng: GameRng,
}

impl RandomAgent {
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, _snapshot: &GameState, legal: &MoveSet, _deadline: &Deadline) -> Option<Move> {
        legal.choose(&mut self.rng)
    }
}

// =============================================================================
// Greedy
// =============================================================================

/// Plays the move with the largest immediate visible-score gain.
///
/// Ties go to the first such move in `MoveSet` order. When no move gains
/// anything it falls back to a random legal move.
#[derive(Clone, Debug)]
pub struct GreedyAgent {
    name: String,
    rng: GameRng,
}

impl GreedyAgent {
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for GreedyAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, snapshot: &GameState, legal: &MoveSet, _deadline: &Deadline) -> Option<Move> {
        let me = snapshot.active_player();
        let base = snapshot.visible_score_for(me);

        let mut best: Option<(Move, i32)> = None;
        for &mv in legal {
            let Ok(next) = snapshot.forecast(mv) else {
                continue;
            };
            let gain = next.visible_score_for(me) - base;
            if gain > 0 && best.map_or(true, |(_, g)| gain > g) {
                best = Some((mv, gain));
            }
        }

        match best {
            Some((mv, gain)) => {
                trace!(agent = %self.name, %mv, gain, "greedy pick");
                Some(mv)
            }
            None => legal.choose(&mut self.rng),
        }
    }
}

// =============================================================================
// Heuristic Filter
// =============================================================================

/// Prefers moves that take or sell a favoured set of goods.
///
/// Chooses uniformly among the moves touching any favoured good, or among
/// all legal moves when none do.
#[derive(Clone, Debug)]
pub struct HeuristicFilterAgent {
    name: String,
    favoured: Vec<Good>,
    rng: GameRng,
}

impl HeuristicFilterAgent {
    pub fn new(name: impl Into<String>, favoured: impl IntoIterator<Item = Good>, seed: u64) -> Self {
        Self {
            name: name.into(),
            favoured: favoured.into_iter().collect(),
            rng: GameRng::new(seed),
        }
    }

    /// Favours Diamond, Gold and Silver.
    pub fn jewels(name: impl Into<String>, seed: u64) -> Self {
        Self::new(name, Good::JEWELS, seed)
    }

    #[must_use]
    pub fn favoured(&self) -> &[Good] {
        &self.favoured
    }
}

impl Agent for HeuristicFilterAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, _snapshot: &GameState, legal: &MoveSet, _deadline: &Deadline) -> Option<Move> {
        let preferred: Vec<Move> = legal
            .iter()
            .filter(|mv| self.favoured().iter().any(|&g| mv.acquires_or_sells(g)))
            .copied()
            .collect();

        if preferred.is_empty() {
            legal.choose(&mut self.rng)
        } else {
            self.rng.choose(&preferred).copied()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::GoodCounts;
    use crate::core::PlayerId;

    fn state() -> GameState {
        GameState::new_game("a", "b", &mut GameRng::new(21))
    }

    #[test]
    fn test_random_agent_picks_legal_moves() {
        let state = state();
        let legal = state.legal_moves();
        let mut agent = RandomAgent::new("random", 1);

        for _ in 0..20 {
            let mv = agent.choose_move(&state, &legal, &Deadline::unbounded()).unwrap();
            assert!(legal.contains(&mv));
        }
    }

    #[test]
    fn test_random_agent_is_seeded() {
        let state = state();
        let legal = state.legal_moves();
        let picks = |seed| {
            let mut agent = RandomAgent::new("random", seed);
            (0..10)
                .map(|_| agent.choose_move(&state, &legal, &Deadline::unbounded()))
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(5), picks(5));
    }

    #[test]
    fn test_empty_move_set_gives_none() {
        let state = state();
        let empty = MoveSet::default();
        let deadline = Deadline::unbounded();

        assert_eq!(RandomAgent::new("r", 1).choose_move(&state, &empty, &deadline), None);
        assert_eq!(GreedyAgent::new("g", 1).choose_move(&state, &empty, &deadline), None);
        assert_eq!(HeuristicFilterAgent::jewels("j", 1).choose_move(&state, &empty, &deadline), None);
    }

    #[test]
    fn test_greedy_takes_best_sale() {
        let mut state = state();
        state.boards[PlayerId::FIRST].hand = [Good::Cloth, Good::Cloth, Good::Cloth, Good::Diamond, Good::Diamond]
            .into_iter()
            .collect();

        let legal = state.legal_moves();
        let mv = GreedyAgent::new("greedy", 1).choose_move(&state, &legal, &Deadline::unbounded());

        // Three cloth earns 5 + 3 + 3 plus a bonus token, but bonus tokens are
        // hidden; two diamonds earn 7 + 7.
        assert_eq!(mv, Some(Move::Sell { good: Good::Diamond, count: 2 }));
    }

    #[test]
    fn test_greedy_falls_back_to_random() {
        let mut state = state();
        state.boards[PlayerId::FIRST].hand = GoodCounts::new();
        state.boards[PlayerId::FIRST].herd = 0;
        state.boards[PlayerId::SECOND].herd = 0;
        state.camel_token = None;

        let legal = state.legal_moves();
        let mv = GreedyAgent::new("greedy", 3).choose_move(&state, &legal, &Deadline::unbounded());
        assert!(mv.is_some_and(|m| legal.contains(&m)));
    }

    #[test]
    fn test_filter_prefers_favoured_goods() {
        let mut state = state();
        state.market = [Good::Diamond, Good::Leather, Good::Leather, Good::Spice, Good::Cloth]
            .into_iter()
            .collect();
        state.boards[PlayerId::FIRST].hand = GoodCounts::of(Good::Leather, 1);
        state.boards[PlayerId::FIRST].herd = 0;

        let legal = state.legal_moves();
        let mut agent = HeuristicFilterAgent::jewels("jewel", 8);
        assert_eq!(agent.favoured(), &Good::JEWELS);
        for _ in 0..20 {
            let mv = agent.choose_move(&state, &legal, &Deadline::unbounded()).unwrap();
            assert!(agent.favoured().iter().any(|&g| mv.acquires_or_sells(g)), "{mv}");
        }
    }

    #[test]
    fn test_filter_without_matches_uses_all_moves() {
        let mut state = state();
        state.market = GoodCounts::of(Good::Leather, 5);
        state.boards[PlayerId::FIRST].hand = GoodCounts::of(Good::Spice, 1);
        state.boards[PlayerId::FIRST].herd = 0;

        let legal = state.legal_moves();
        let mv = HeuristicFilterAgent::jewels("jewel", 2).choose_move(&state, &legal, &Deadline::unbounded());
        assert!(mv.is_some_and(|m| legal.contains(&m)));
    }
}
