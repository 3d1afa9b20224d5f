//! Legal-move enumeration.
//!
//! The enumerator is a pure function of the state. Exchanges dominate the
//! move count: every pair of equal-size sub-multisets of (hand + herd) and
//! market with no good type in common. Sub-multisets are generated as
//! combinations of counts, so equivalent offers are produced once, and the
//! whole set is de-duplicated and sorted before it is returned.

use rustc_hash::FxHashSet;

use crate::cards::{Good, GoodCounts};
use crate::core::{GameRng, GameState, Move, PlayerId, HAND_LIMIT};

/// Largest number of cards traded in one exchange.
pub const MAX_EXCHANGE: usize = 5;

/// The set of legal moves for one player at one moment.
///
/// Sorted and free of duplicates, so two enumerations of the same state
/// compare equal and seeded random choices are reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveSet {
    moves: Vec<Move>,
}

impl MoveSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.binary_search(mv).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// A uniformly random move, `None` if the set is empty.
    pub fn choose(&self, rng: &mut GameRng) -> Option<Move> {
        rng.choose(&self.moves).copied()
    }
}

impl FromIterator<Move> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let unique: FxHashSet<Move> = iter.into_iter().collect();
        let mut moves: Vec<Move> = unique.into_iter().collect();
        moves.sort_unstable();
        Self { moves }
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl GameState {
    /// Legal moves for the player to move.
    ///
    /// An empty set means the player cannot act; the match driver treats
    /// that as a forfeit, not an engine fault.
    #[must_use]
    pub fn legal_moves(&self) -> MoveSet {
        self.legal_moves_for(self.active_player)
    }

    /// Legal moves for `player`, as if it were their turn.
    #[must_use]
    pub fn legal_moves_for(&self, player: PlayerId) -> MoveSet {
        let board = &self.boards[player];
        let hand_size = board.hand_size();
        let mut moves = Vec::new();

        if self.market.contains(Good::Camel) {
            moves.push(Move::TakeCamels);
        }

        if hand_size < HAND_LIMIT {
            moves.extend(self.market.distinct().map(Move::Take));
        }

        self.push_exchanges(board.holdings(), hand_size, &mut moves);

        for (good, held) in board.hand.iter() {
            let remaining = self.tokens.remaining(good);
            moves.extend(
                (good.min_sale()..=held)
                    .filter(|&count| usize::from(count) <= remaining)
                    .map(|count| Move::Sell { good, count }),
            );
        }

        moves.into_iter().collect()
    }

    fn push_exchanges(&self, holdings: GoodCounts, hand_size: usize, out: &mut Vec<Move>) {
        let largest = MAX_EXCHANGE.min(holdings.total()).min(self.market.total());

        for size in 1..=largest {
            let offers = holdings.sub_multisets(size);
            let wants = self.market.sub_multisets(size);

            for give in &offers {
                let given_goods = give.without_camels().total();
                for take in &wants {
                    if give.common_good(take).is_some() {
                        continue;
                    }
                    let resulting_hand = hand_size - given_goods + take.without_camels().total();
                    if resulting_hand > HAND_LIMIT {
                        continue;
                    }
                    out.push(Move::Exchange { give: *give, take: *take });
                }
            }
        }
    }
}
