//! Rank table: names and point values.
//!
//! Every rank but the ace is worth a single value. Face cards count 10.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::card::Card;

/// Card rank, in deck order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in deck order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Ace => "ace",
            Rank::Two => "two",
            Rank::Three => "three",
            Rank::Four => "four",
            Rank::Five => "five",
            Rank::Six => "six",
            Rank::Seven => "seven",
            Rank::Eight => "eight",
            Rank::Nine => "nine",
            Rank::Ten => "ten",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
        }
    }

    /// Possible point values, lowest first.
    #[must_use]
    pub fn values(self) -> SmallVec<[i32; 2]> {
        match self {
            Rank::Ace => smallvec![1, 11],
            Rank::Jack | Rank::Queen | Rank::King => smallvec![10],
            pip => smallvec![pip as i32 + 1],
        }
    }

    /// Suitless card of this rank.
    #[must_use]
    pub fn card(self) -> Card {
        Card::from_rank(self)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
