//! Playing cards as seen by the score tree.
//!
//! A `Card` is a plain value: a name, one or two point values, and a suit
//! that is only known once the card has been drawn from a deck.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rank::Rank;
use crate::core::{GameError, Result};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Diamond,
    Spade,
    Club,
    Heart,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Diamond, Suit::Spade, Suit::Club, Suit::Heart];

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Diamond => "diamond",
            Suit::Spade => "spade",
            Suit::Club => "club",
            Suit::Heart => "heart",
        }
    }
}

impl FromStr for Suit {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| GameError::invalid(format!("invalid suit: {s:?}")))
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A card with one or two possible point values.
///
/// ```
/// use rust_blackjack::cards::{Card, Suit};
///
/// let ace = Card::new("ace", [1, 11]).unwrap().with_suit(Suit::Spade);
/// assert_eq!(ace.values(), &[1, 11]);
/// assert_eq!(ace.to_string(), "ace of spade");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CardFields")]
pub struct Card {
    name: String,
    values: SmallVec<[i32; 2]>,
    suit: Option<Suit>,
}

/// Serialized form of a `Card`, checked on the way in.
#[derive(Deserialize)]
struct CardFields {
    name: String,
    values: SmallVec<[i32; 2]>,
    suit: Option<Suit>,
}

impl TryFrom<CardFields> for Card {
    type Error = GameError;

    fn try_from(fields: CardFields) -> Result<Self> {
        let card = Card::new(fields.name, fields.values)?;
        Ok(Self {
            suit: fields.suit,
            ..card
        })
    }
}

impl Card {
    /// Create a suitless card.
    ///
    /// Fails unless `values` holds exactly one or two entries.
    pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = i32>) -> Result<Self> {
        let name = name.into();
        let values: SmallVec<[i32; 2]> = values.into_iter().collect();
        if values.is_empty() || values.len() > 2 {
            return Err(GameError::invalid(format!(
                "card {name:?} must have one or two values, got {}",
                values.len()
            )));
        }
        Ok(Self {
            name,
            values,
            suit: None,
        })
    }

    /// Suitless card of a standard rank.
    #[must_use]
    pub fn from_rank(rank: Rank) -> Self {
        Self {
            name: rank.name().to_string(),
            values: rank.values(),
            suit: None,
        }
    }

    /// Copy of this card with the given suit.
    #[must_use]
    pub fn with_suit(mut self, suit: Suit) -> Self {
        self.suit = Some(suit);
        self
    }

    /// Assign a suit by name.
    pub fn set_suit(&mut self, suit: &str) -> Result<()> {
        self.suit = Some(suit.parse()?);
        Ok(())
    }

    /// Card name (e.g. "king").
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Possible point values, in branching order.
    #[must_use]
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Suit, if the card has been drawn.
    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.suit {
            Some(suit) => write!(f, "{} of {}", self.name, suit),
            None => f.write_str(&self.name),
        }
    }
}
