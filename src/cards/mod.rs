//! Card system: cards, ranks, and the deck.
//!
//! ## Key Types
//!
//! - `Card`: name, one or two point values, suit once drawn
//! - `Suit`: diamond, spade, club, heart
//! - `Rank`: the thirteen standard ranks and their values
//! - `Deck`: 52 cards drawn at random without replacement

pub mod card;
pub mod deck;
pub mod rank;

pub use card::{Card, Suit};
pub use deck::Deck;
pub use rank::Rank;
