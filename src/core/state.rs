//! Game state: the deck, the market, both players' boards and the turn pointer.
//!
//! ## Ownership
//!
//! `GameState` owns every container it holds. Cloning it (`snapshot`)
//! yields a fully independent copy: the card multisets are `Copy`, token
//! lists are `SmallVec`s, and the deck and discard pile are persistent
//! `im::Vector`s whose structural sharing is copy-on-write. A search agent
//! can mutate a snapshot freely without the live game ever observing it.
//!
//! ## Mutation
//!
//! Rule-level mutation goes through `apply_move` (see `rules::engine`).
//! The fields are public so scenarios can be staged directly in tests
//! and tools, which is also why the applicator re-checks every
//! precondition instead of trusting the enumerator.

use std::sync::Arc;

use im::Vector;
use smallvec::SmallVec;
use tracing::debug;

use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Good, GoodCounts, TokenSupply};

/// Maximum number of goods in a hand.
pub const HAND_LIMIT: usize = 7;

/// Number of face-up cards the market is kept at.
pub const MARKET_SIZE: usize = 5;

/// Score bonus for holding the camel token.
pub const CAMEL_BONUS: i32 = 5;

/// Cards dealt to each player at setup.
pub const STARTING_HAND: usize = 5;

/// Camels placed in the market before the deck is dealt.
pub const STARTING_MARKET_CAMELS: u8 = 3;

/// One player's side of the table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerBoard {
    /// Goods in hand. Never holds camels.
    pub hand: GoodCounts,

    /// Camels in the herd.
    pub herd: u8,

    /// Face-up goods tokens, in the order earned.
    pub goods_tokens: SmallVec<[u8; 16]>,

    /// Face-down bonus tokens, in the order earned.
    pub bonus_tokens: SmallVec<[u8; 8]>,
}

impl PlayerBoard {
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.total()
    }

    /// Hand and herd together, camels included.
    #[must_use]
    pub fn holdings(&self) -> GoodCounts {
        let mut all = self.hand;
        all.set(Good::Camel, self.herd);
        all
    }

    /// Replace hand and herd from a combined multiset, routing every camel
    /// to the herd and every other good to the hand.
    pub fn set_holdings(&mut self, holdings: GoodCounts) {
        self.herd = holdings.get(Good::Camel);
        self.hand = holdings.without_camels();
    }

    /// Number of tokens of either kind.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.goods_tokens.len() + self.bonus_tokens.len()
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Face-down draw pile; the back is the top.
    pub deck: Vector<Good>,

    /// Face-up market.
    pub market: GoodCounts,

    /// Sold cards.
    pub discard: Vector<Good>,

    /// Goods and bonus ladders still on the table.
    pub tokens: TokenSupply,

    /// Per-player hand, herd and earned tokens.
    pub boards: PlayerMap<PlayerBoard>,

    /// Player identities, as given to `new_game`.
    pub names: PlayerMap<Arc<str>>,

    /// Player with strictly the larger herd, if any.
    pub camel_token: Option<PlayerId>,

    /// Player to move.
    pub active_player: PlayerId,

    /// Turn number (starts at 1, advances on every applied move).
    pub turn: u32,
}

impl GameState {
    /// Set up a new game.
    ///
    /// Shuffles the deck, places three camels plus two drawn cards in the
    /// market, deals five cards to each player (first player first), moves
    /// dealt camels into herds and shuffles the bonus ladders. The first
    /// player is to move.
    ///
    /// ```
    /// use rust_jaipur::core::{GameRng, GameState, MARKET_SIZE};
    ///
    /// let mut rng = GameRng::new(42);
    /// let state = GameState::new_game("Alice", "Bob", &mut rng);
    /// assert_eq!(state.market.total(), MARKET_SIZE);
    /// assert_eq!(&*state.names[state.active_player], "Alice");
    /// ```
    pub fn new_game(first: impl Into<Arc<str>>, second: impl Into<Arc<str>>, rng: &mut GameRng) -> Self {
        let setup_rng = rng.fork();

        let mut cards: Vec<Good> = Good::ALL
            .into_iter()
            .flat_map(|good| {
                let mut count = good.card_count();
                if good.is_camel() {
                    count -= STARTING_MARKET_CAMELS;
                }
                std::iter::repeat(good).take(usize::from(count))
            })
            .collect();
        setup_rng.for_context("deck").shuffle(&mut cards);

        let mut state = Self {
            deck: cards.into_iter().collect(),
            market: GoodCounts::of(Good::Camel, STARTING_MARKET_CAMELS),
            discard: Vector::new(),
            tokens: TokenSupply::shuffled(&mut setup_rng.for_context("bonus")),
            boards: PlayerMap::default(),
            names: PlayerMap::new(|_| Arc::from("")),
            camel_token: None,
            active_player: PlayerId::FIRST,
            turn: 1,
        };
        state.names[PlayerId::FIRST] = first.into();
        state.names[PlayerId::SECOND] = second.into();

        state.replenish_market();

        for player in PlayerId::all() {
            let dealt: GoodCounts = (0..STARTING_HAND).filter_map(|_| state.draw()).collect();
            state.boards[player].set_holdings(dealt);
        }

        state.update_camel_token();
        debug!(
            seed = setup_rng.seed(),
            deck = state.deck.len(),
            market = %state.market,
            "game set up"
        );
        state
    }

    /// An independent copy for speculative play.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.clone()
    }

    /// Player to move.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Player waiting for their turn.
    #[must_use]
    pub fn inactive_player(&self) -> PlayerId {
        self.active_player.opponent()
    }

    #[must_use]
    pub fn name(&self, player: PlayerId) -> &str {
        &self.names[player]
    }

    #[must_use]
    pub fn board(&self, player: PlayerId) -> &PlayerBoard {
        &self.boards[player]
    }

    /// Total cards on the table, wherever they are.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let boards: usize = self
            .boards
            .iter()
            .map(|(_, b)| b.hand_size() + usize::from(b.herd))
            .sum();
        self.deck.len() + self.market.total() + self.discard.len() + boards
    }

    /// Draw the top card of the deck, `None` once it is exhausted.
    pub fn draw(&mut self) -> Option<Good> {
        let card = self.deck.pop_back();
        if card.is_none() {
            debug!("deck exhausted, nothing drawn");
        }
        card
    }

    /// Top the market back up to `MARKET_SIZE`, leaving it short if the
    /// deck runs out.
    pub fn replenish_market(&mut self) {
        while self.market.total() < MARKET_SIZE {
            match self.draw() {
                Some(card) => self.market.add(card, 1),
                None => break,
            }
        }
    }

    /// Award the camel token to the player with strictly the larger herd.
    pub fn update_camel_token(&mut self) {
        let first = self.boards[PlayerId::FIRST].herd;
        let second = self.boards[PlayerId::SECOND].herd;
        self.camel_token = match first.cmp(&second) {
            std::cmp::Ordering::Greater => Some(PlayerId::FIRST),
            std::cmp::Ordering::Less => Some(PlayerId::SECOND),
            std::cmp::Ordering::Equal => None,
        };
    }
}
