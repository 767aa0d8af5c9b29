//! A standard 52-card deck drawn without replacement.
//!
//! Card `i` has rank `i % 13` and suit `i / 13` (diamond, spade, club,
//! heart). Draws pick uniformly among the cards still in the deck using a
//! seeded `GameRng`, so a given seed always deals the same sequence.

use log::{debug, warn};

use super::card::{Card, Suit};
use super::rank::Rank;
use crate::core::{GameRng, DECK_SIZE};

/// Deck of cards not yet drawn.
///
/// ```
/// use rust_blackjack::cards::Deck;
///
/// let mut deck = Deck::new(42);
/// let card = deck.draw().unwrap();
/// assert!(card.suit().is_some());
/// assert_eq!(deck.remaining(), 51);
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    /// `true` while card `i` is still in the deck.
    in_deck: [bool; DECK_SIZE],
    rng: GameRng,
}

impl Deck {
    /// Full deck shuffled by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            in_deck: [true; DECK_SIZE],
            rng: GameRng::new(seed),
        }
    }

    /// The suited card at deck position `index`.
    ///
    /// Returns `None` if `index` is not below 52.
    #[must_use]
    pub fn card_at(index: usize) -> Option<Card> {
        if index >= DECK_SIZE {
            return None;
        }
        let rank = Rank::ALL[index % Rank::ALL.len()];
        let suit = Suit::ALL[index / Rank::ALL.len()];
        Some(Card::from_rank(rank).with_suit(suit))
    }

    /// Seed the draw order was generated from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.in_deck.iter().filter(|&&present| present).count()
    }

    /// Check if every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Draw a random card, or `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        let undrawn: Vec<usize> = (0..DECK_SIZE).filter(|&i| self.in_deck[i]).collect();
        let Some(&index) = self.rng.choose(&undrawn) else {
            warn!("deck exhausted");
            return None;
        };
        self.in_deck[index] = false;

        let card = Self::card_at(index)?;
        debug!("drew {} ({} left)", card, undrawn.len() - 1);
        Some(card)
    }
}
