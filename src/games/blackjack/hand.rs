//! A player's hand and the scores it can reach.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{GameError, Result, BLACKJACK};
use crate::heap::Prioritized;
use crate::tree::ScoreTree;

/// Cards received so far plus every total they can add up to.
///
/// The score tree's root (0) is the empty hand. Only the newest generation
/// of leaves is live; earlier leaves become interior nodes as cards arrive.
///
/// ```
/// use rust_blackjack::cards::Rank;
/// use rust_blackjack::games::blackjack::Hand;
///
/// let mut hand = Hand::new();
/// hand.add_card(Rank::Ace.card()).unwrap();
/// hand.add_card(Rank::King.card()).unwrap();
/// assert_eq!(hand.possible_scores(), &[11, 21]);
/// assert_eq!(hand.best_score(), 21);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "HandFields")]
pub struct Hand {
    cards: Vec<Card>,
    scores: ScoreTree,
    /// Leaf values of `scores`, in pre-order.
    possible_scores: Vec<i32>,
    has_non_bust: bool,
}

/// Serialized form of a `Hand`. Cached scores are ignored and recomputed.
#[derive(Deserialize)]
struct HandFields {
    cards: Vec<Card>,
    scores: ScoreTree,
}

impl TryFrom<HandFields> for Hand {
    type Error = GameError;

    /// Replays the cards and requires the stored tree to match.
    fn try_from(fields: HandFields) -> Result<Self> {
        let mut hand = Hand::new();
        for card in fields.cards {
            hand.add_card(card)?;
        }
        if !hand.scores.is_equivalent(&fields.scores) {
            return Err(GameError::invalid("Score tree does not match the cards in hand"));
        }
        Ok(hand)
    }
}

impl Hand {
    /// An empty hand.
    #[must_use]
    pub fn new() -> Self {
        let scores = ScoreTree::new(0);
        Self {
            cards: Vec::new(),
            possible_scores: scores.leaf_values(),
            scores,
            has_non_bust: true,
        }
    }

    /// Add a card and recompute the live scores.
    pub fn add_card(&mut self, card: Card) -> Result<()> {
        self.scores.add_branch(card.values())?;
        self.possible_scores = self.scores.leaf_values();
        self.has_non_bust = self.possible_scores.iter().any(|&s| s <= BLACKJACK);
        debug!("added {card}; possible scores {:?}", self.possible_scores);
        self.cards.push(card);
        Ok(())
    }

    /// Cards in the order received.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The last card received.
    #[must_use]
    pub fn most_recent_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// The tree of every score path.
    #[must_use]
    pub fn score_tree(&self) -> &ScoreTree {
        &self.scores
    }

    /// Every total the hand can currently count as; `[0]` when empty.
    #[must_use]
    pub fn possible_scores(&self) -> &[i32] {
        &self.possible_scores
    }

    /// One of the possible totals is exactly 21.
    #[must_use]
    pub fn has_blackjack(&self) -> bool {
        self.possible_scores.contains(&BLACKJACK)
    }

    /// Every possible total is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        !self.has_non_bust
    }

    /// Highest total not over 21, or the lowest total once bust.
    #[must_use]
    pub fn best_score(&self) -> i32 {
        let scores = self.possible_scores.iter().copied();
        let best = if self.is_bust() {
            scores.min()
        } else {
            scores.filter(|&s| s <= BLACKJACK).max()
        };
        // possible_scores always holds at least the root
        best.unwrap_or_default()
    }

    /// Ranking value: the best score, negated when bust.
    ///
    /// Any standing hand outranks any bust hand. Among bust hands the
    /// smallest overshoot ranks highest (22 gives -22, ahead of 30 at -30).
    #[must_use]
    pub fn priority(&self) -> i32 {
        let best = self.best_score();
        if self.is_bust() {
            -best
        } else {
            best
        }
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl Prioritized for Hand {
    type Priority = i32;

    fn priority(&self) -> i32 {
        Hand::priority(self)
    }
}
