//! The closed set of card types.

use serde::{Deserialize, Serialize};

/// A card type.
///
/// The discriminant doubles as the index into per-good arrays
/// (`GoodCounts`, goods-token ladders), so the order is fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Good {
    Diamond,
    Gold,
    Silver,
    Cloth,
    Spice,
    Leather,
    /// Never held in a hand; lives in a herd.
    Camel,
}

impl Good {
    /// Every card type, camel last.
    pub const ALL: [Good; 7] = [
        Good::Diamond,
        Good::Gold,
        Good::Silver,
        Good::Cloth,
        Good::Spice,
        Good::Leather,
        Good::Camel,
    ];

    /// The six sellable goods, each with its own token ladder.
    pub const TRADE_GOODS: [Good; 6] = [
        Good::Diamond,
        Good::Gold,
        Good::Silver,
        Good::Cloth,
        Good::Spice,
        Good::Leather,
    ];

    /// High-value goods that must be sold at least two at a time.
    pub const JEWELS: [Good; 3] = [Good::Diamond, Good::Gold, Good::Silver];

    /// Array index of this good.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn is_camel(self) -> bool {
        matches!(self, Good::Camel)
    }

    #[must_use]
    pub const fn is_jewel(self) -> bool {
        matches!(self, Good::Diamond | Good::Gold | Good::Silver)
    }

    /// Smallest number of cards that can be sold in one move.
    #[must_use]
    pub const fn min_sale(self) -> u8 {
        if self.is_jewel() {
            2
        } else {
            1
        }
    }

    /// How many cards of this type exist in the game.
    #[must_use]
    pub const fn card_count(self) -> u8 {
        match self {
            Good::Diamond | Good::Gold | Good::Silver => 6,
            Good::Cloth | Good::Spice => 8,
            Good::Leather => 10,
            Good::Camel => 11,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Good::Diamond => "Diamond",
            Good::Gold => "Gold",
            Good::Silver => "Silver",
            Good::Cloth => "Cloth",
            Good::Spice => "Spice",
            Good::Leather => "Leather",
            Good::Camel => "Camel",
        }
    }
}

impl std::fmt::Display for Good {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
