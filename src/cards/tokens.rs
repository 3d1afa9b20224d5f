//! Goods-token and bonus-token ladders.
//!
//! Each trade good has a payout ladder consumed from its most valuable
//! end. Sales of three or more cards also draw from a shuffled bonus
//! ladder for the sale's size tier. An exhausted ladder simply pays
//! nothing more; that is a normal game condition, not an error.

use smallvec::SmallVec;
use tracing::debug;

use super::good::Good;
use crate::core::GameRng;

/// Payout ladder for one good, most valuable first.
pub type Ladder = SmallVec<[u8; 9]>;

/// Smallest sale size that earns a bonus token.
pub const MIN_BONUS_SALE: u8 = 3;

/// Largest bonus tier; bigger sales draw from this one.
pub const MAX_BONUS_TIER: u8 = 5;

/// Number of empty goods ladders that ends the game.
pub const DEPLETED_LADDERS_TO_END: usize = 3;

const GOODS_LADDERS: [&[u8]; 6] = [
    &[7, 7, 5, 5, 5],
    &[6, 6, 5, 5, 5],
    &[5, 5, 5, 5, 5],
    &[5, 3, 3, 2, 2, 1, 1],
    &[5, 3, 3, 2, 2, 1, 1],
    &[4, 3, 2, 1, 1, 1, 1, 1, 1],
];

const BONUS_LADDERS: [&[u8]; 3] = [
    &[1, 1, 2, 2, 2, 3, 3],
    &[4, 4, 5, 5, 6, 6],
    &[8, 8, 9, 10, 10],
];

/// The shared token supply on the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenSupply {
    goods: [Ladder; 6],
    bonus: [Ladder; 3],
}

impl Default for TokenSupply {
    /// Full, unshuffled supply.
    fn default() -> Self {
        Self {
            goods: GOODS_LADDERS.map(Ladder::from_slice),
            bonus: BONUS_LADDERS.map(Ladder::from_slice),
        }
    }
}

impl TokenSupply {
    /// Full supply with every bonus ladder shuffled.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut supply = Self::default();
        for ladder in &mut supply.bonus {
            rng.shuffle(ladder.as_mut_slice());
        }
        supply
    }

    /// Remaining tokens for a good, next payout first.
    ///
    /// Camels have no ladder and always report empty.
    #[must_use]
    pub fn goods_ladder(&self, good: Good) -> &[u8] {
        self.goods
            .get(good.index())
            .map_or(&[] as &[u8], |l| l.as_slice())
    }

    /// Mutable access for setting up scenarios.
    ///
    /// # Panics
    ///
    /// Panics if `good` is `Camel`.
    pub fn goods_ladder_mut(&mut self, good: Good) -> &mut Ladder {
        &mut self.goods[good.index()]
    }

    /// Remaining bonus tokens for the tier a sale of `count` draws from.
    ///
    /// Empty for sales too small to earn a bonus.
    #[must_use]
    pub fn bonus_ladder(&self, count: u8) -> &[u8] {
        Self::tier(count).map_or(&[] as &[u8], |t| self.bonus[t].as_slice())
    }

    /// Number of tokens left for `good`.
    #[must_use]
    pub fn remaining(&self, good: Good) -> usize {
        self.goods_ladder(good).len()
    }

    /// Number of trade goods whose ladder is empty.
    #[must_use]
    pub fn depleted_count(&self) -> usize {
        self.goods.iter().filter(|l| l.is_empty()).count()
    }

    /// Pop the next goods token for `good`, `None` once the ladder is empty.
    pub fn take_goods_token(&mut self, good: Good) -> Option<u8> {
        let ladder = self.goods.get_mut(good.index())?;
        if ladder.is_empty() {
            debug!(%good, "goods ladder exhausted, no token awarded");
            return None;
        }
        Some(ladder.remove(0))
    }

    /// Pop a bonus token for a sale of `count` cards.
    ///
    /// `None` if the sale is too small or the tier is exhausted.
    pub fn take_bonus_token(&mut self, count: u8) -> Option<u8> {
        let tier = Self::tier(count)?;
        let token = self.bonus[tier].pop();
        if token.is_none() {
            debug!(count, "bonus ladder exhausted, no bonus awarded");
        }
        token
    }

    fn tier(count: u8) -> Option<usize> {
        (count >= MIN_BONUS_SALE).then(|| usize::from(count.min(MAX_BONUS_TIER) - MIN_BONUS_SALE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goods_tokens_pop_most_valuable_first() {
        let mut supply = TokenSupply::default();

        assert_eq!(supply.take_goods_token(Good::Diamond), Some(7));
        assert_eq!(supply.take_goods_token(Good::Diamond), Some(7));
        assert_eq!(supply.take_goods_token(Good::Diamond), Some(5));
        assert_eq!(supply.remaining(Good::Diamond), 2);
    }

    #[test]
    fn test_exhausted_ladder_pays_nothing() {
        let mut supply = TokenSupply::default();
        supply.goods_ladder_mut(Good::Silver).clear();

        assert_eq!(supply.take_goods_token(Good::Silver), None);
        assert_eq!(supply.depleted_count(), 1);
    }

    #[test]
    fn test_camel_has_no_ladder() {
        let mut supply = TokenSupply::default();
        assert!(supply.goods_ladder(Good::Camel).is_empty());
        assert_eq!(supply.take_goods_token(Good::Camel), None);
    }

    #[test]
    fn test_bonus_tiers() {
        let mut supply = TokenSupply::default();

        assert!(supply.bonus_ladder(2).is_empty());
        assert_eq!(supply.take_bonus_token(2), None);
        assert_eq!(supply.take_bonus_token(3), Some(3));
        assert_eq!(supply.take_bonus_token(4), Some(6));
        // Six or more draws from the five-card tier
        assert_eq!(supply.take_bonus_token(6), Some(10));
        assert_eq!(supply.bonus_ladder(5).len(), 4);
    }

    #[test]
    fn test_shuffle_keeps_bonus_values() {
        let mut rng = GameRng::new(7);
        let supply = TokenSupply::shuffled(&mut rng);

        for count in MIN_BONUS_SALE..=MAX_BONUS_TIER {
            let mut shuffled = supply.bonus_ladder(count).to_vec();
            let mut original = TokenSupply::default().bonus_ladder(count).to_vec();
            shuffled.sort_unstable();
            original.sort_unstable();
            assert_eq!(shuffled, original);
        }
        assert_eq!(supply.goods_ladder(Good::Leather), GOODS_LADDERS[5]);
    }
}
