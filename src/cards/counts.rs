//! Multisets of cards.
//!
//! Hands, the market and exchange offers are all unordered, so they are
//! stored as one count per `Good`. Two multisets holding the same cards
//! compare equal regardless of how they were built, which is what makes
//! exchange de-duplication exact.

use serde::{Deserialize, Serialize};

use super::good::Good;

/// A multiset of cards: one counter per `Good`.
///
/// `Copy`, so every snapshot owns its own value.
///
/// ```
/// use rust_jaipur::cards::{Good, GoodCounts};
///
/// let hand: GoodCounts = [Good::Cloth, Good::Cloth, Good::Gold].into_iter().collect();
/// assert_eq!(hand.get(Good::Cloth), 2);
/// assert_eq!(hand.total(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GoodCounts([u8; 7]);

impl GoodCounts {
    /// An empty multiset.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; 7])
    }

    /// A multiset holding `count` copies of a single good.
    #[must_use]
    pub fn of(good: Good, count: u8) -> Self {
        let mut counts = Self::new();
        counts.0[good.index()] = count;
        counts
    }

    #[must_use]
    pub fn get(&self, good: Good) -> u8 {
        self.0[good.index()]
    }

    pub fn set(&mut self, good: Good, count: u8) {
        self.0[good.index()] = count;
    }

    pub fn add(&mut self, good: Good, count: u8) {
        self.0[good.index()] += count;
    }

    /// Remove `count` copies of `good`.
    ///
    /// Returns `false` and leaves the multiset untouched if fewer are held.
    pub fn remove(&mut self, good: Good, count: u8) -> bool {
        let slot = &mut self.0[good.index()];
        if *slot < count {
            return false;
        }
        *slot -= count;
        true
    }

    /// Total number of cards.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| usize::from(c)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    #[must_use]
    pub fn contains(&self, good: Good) -> bool {
        self.get(good) > 0
    }

    /// First good of `other` that this multiset holds fewer of, if any.
    #[must_use]
    pub fn shortfall(&self, other: &GoodCounts) -> Option<Good> {
        Good::ALL
            .into_iter()
            .find(|&g| other.get(g) > self.get(g))
    }

    /// True if every card of `other` is also in `self`.
    #[must_use]
    pub fn contains_all(&self, other: &GoodCounts) -> bool {
        self.shortfall(other).is_none()
    }

    /// First good type present in both multisets, if any.
    #[must_use]
    pub fn common_good(&self, other: &GoodCounts) -> Option<Good> {
        Good::ALL
            .into_iter()
            .find(|&g| self.contains(g) && other.contains(g))
    }

    /// Card-wise sum.
    #[must_use]
    pub fn plus(&self, other: &GoodCounts) -> GoodCounts {
        let mut out = *self;
        for good in Good::ALL {
            out.add(good, other.get(good));
        }
        out
    }

    /// Card-wise difference.
    ///
    /// # Errors
    ///
    /// Returns the first good `other` holds more of than `self`.
    pub fn minus(&self, other: &GoodCounts) -> Result<GoodCounts, Good> {
        let mut out = *self;
        for good in Good::ALL {
            if !out.remove(good, other.get(good)) {
                return Err(good);
            }
        }
        Ok(out)
    }

    /// The same multiset with all camels dropped.
    #[must_use]
    pub fn without_camels(&self) -> GoodCounts {
        let mut out = *self;
        out.set(Good::Camel, 0);
        out
    }

    /// Non-zero entries as `(good, count)` pairs, in `Good` order.
    pub fn iter(&self) -> impl Iterator<Item = (Good, u8)> + '_ {
        Good::ALL
            .into_iter()
            .map(|g| (g, self.get(g)))
            .filter(|&(_, c)| c > 0)
    }

    /// Distinct goods present.
    pub fn distinct(&self) -> impl Iterator<Item = Good> + '_ {
        self.iter().map(|(g, _)| g)
    }

    /// Every card, expanded one entry per copy.
    pub fn cards(&self) -> impl Iterator<Item = Good> + '_ {
        self.iter()
            .flat_map(|(g, c)| std::iter::repeat(g).take(usize::from(c)))
    }

    /// Every distinct sub-multiset with exactly `size` cards.
    ///
    /// These are combinations, not permutations: a hand of two Cloth and a
    /// Spice yields `{Cloth, Cloth}` and `{Cloth, Spice}` for size 2, once
    /// each.
    #[must_use]
    pub fn sub_multisets(&self, size: usize) -> Vec<GoodCounts> {
        let mut out = Vec::new();
        if size <= self.total() {
            let mut current = GoodCounts::new();
            self.collect_sub_multisets(0, size, &mut current, &mut out);
        }
        out
    }

    fn collect_sub_multisets(
        &self,
        slot: usize,
        remaining: usize,
        current: &mut GoodCounts,
        out: &mut Vec<GoodCounts>,
    ) {
        if remaining == 0 {
            out.push(*current);
            return;
        }
        if slot == self.0.len() {
            return;
        }

        let available = usize::from(self.0[slot]).min(remaining);
        for take in (0..=available).rev() {
            // `take` is bounded by a u8 count
            current.0[slot] = take as u8;
            self.collect_sub_multisets(slot + 1, remaining - take, current, out);
        }
        current.0[slot] = 0;
    }
}

impl FromIterator<Good> for GoodCounts {
    fn from_iter<I: IntoIterator<Item = Good>>(iter: I) -> Self {
        let mut counts = GoodCounts::new();
        for good in iter {
            counts.add(good, 1);
        }
        counts
    }
}

impl std::fmt::Display for GoodCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, good) in self.cards().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{good}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(goods: &[Good]) -> GoodCounts {
        goods.iter().copied().collect()
    }

    #[test]
    fn test_add_remove() {
        let mut hand = GoodCounts::new();
        hand.add(Good::Spice, 2);
        assert!(hand.remove(Good::Spice, 1));
        assert!(!hand.remove(Good::Spice, 2));
        assert_eq!(hand.get(Good::Spice), 1);
    }

    #[test]
    fn test_containment_and_overlap() {
        let market = counts(&[Good::Diamond, Good::Gold, Good::Gold, Good::Camel]);
        let take = counts(&[Good::Gold, Good::Gold]);
        let greedy = counts(&[Good::Gold, Good::Gold, Good::Gold]);

        assert!(market.contains_all(&take));
        assert_eq!(market.shortfall(&greedy), Some(Good::Gold));
        assert_eq!(market.common_good(&take), Some(Good::Gold));
        assert_eq!(take.common_good(&counts(&[Good::Cloth])), None);
    }

    #[test]
    fn test_plus_minus() {
        let a = counts(&[Good::Cloth, Good::Camel]);
        let b = counts(&[Good::Cloth]);

        assert_eq!(a.plus(&b).get(Good::Cloth), 2);
        assert_eq!(a.minus(&b), Ok(counts(&[Good::Camel])));
        assert_eq!(b.minus(&a), Err(Good::Camel));
        assert_eq!(a.without_camels(), b);
    }

    #[test]
    fn test_sub_multisets_are_combinations() {
        let hand = counts(&[Good::Cloth, Good::Cloth, Good::Spice]);

        let pairs = hand.sub_multisets(2);
        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(&counts(&[Good::Cloth, Good::Cloth])));
        assert!(pairs.contains(&counts(&[Good::Cloth, Good::Spice])));

        assert_eq!(hand.sub_multisets(3), vec![hand]);
        assert!(hand.sub_multisets(4).is_empty());
        assert_eq!(hand.sub_multisets(0), vec![GoodCounts::new()]);
    }

    #[test]
    fn test_sub_multisets_all_distinct_sizes() {
        let bag = counts(&[Good::Diamond, Good::Gold, Good::Silver, Good::Cloth, Good::Spice]);
        // C(5, 2) with all-distinct cards
        assert_eq!(bag.sub_multisets(2).len(), 10);
        for subset in bag.sub_multisets(3) {
            assert_eq!(subset.total(), 3);
            assert!(bag.contains_all(&subset));
        }
    }

    #[test]
    fn test_display() {
        let offer = counts(&[Good::Gold, Good::Cloth, Good::Gold]);
        assert_eq!(offer.to_string(), "[Gold, Gold, Cloth]");
    }
}
