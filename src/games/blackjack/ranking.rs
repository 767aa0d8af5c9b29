//! End-of-game standings.
//!
//! Every finished hand is loaded into a `MaxHeap` by reference and the heap
//! is drained once, best hand first.

use crate::core::PlayerId;
use crate::heap::{MaxHeap, Prioritized};

use super::hand::Hand;

/// A seat's entry in the standings, borrowing the live hand.
#[derive(Clone, Copy, Debug)]
pub struct Seat<'a> {
    /// Seat position.
    pub player: PlayerId,

    /// Player name.
    pub name: &'a str,

    /// The hand as it finished.
    pub hand: &'a Hand,
}

impl Prioritized for Seat<'_> {
    type Priority = i32;

    fn priority(&self) -> i32 {
        self.hand.priority()
    }
}

/// Order seats from best hand to worst.
///
/// Standing hands come first by score, then bust hands by smallest
/// overshoot. Seats with equal priority come out in no guaranteed order.
pub fn rank_hands<'a>(seats: impl IntoIterator<Item = Seat<'a>>) -> Vec<Seat<'a>> {
    MaxHeap::from_items(seats).into_sorted_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.add_card(rank.card()).unwrap();
        }
        hand
    }

    #[test]
    fn test_rank_mixed_hands() {
        let hands = [
            ("bob", hand_of(&[Rank::King, Rank::King, Rank::Five])),
            ("jane", hand_of(&[Rank::King, Rank::Five])),
            ("joe", hand_of(&[Rank::King, Rank::King])),
            ("katy", hand_of(&[Rank::King, Rank::King, Rank::Ace])),
        ];
        let seats = hands.iter().enumerate().map(|(i, (name, hand))| Seat {
            player: PlayerId::new(i as u8),
            name: *name,
            hand,
        });

        let names: Vec<_> = rank_hands(seats).iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["katy", "joe", "jane", "bob"]);
    }

    #[test]
    fn test_least_bust_ranks_above_worse_bust() {
        let small_bust = hand_of(&[Rank::King, Rank::Queen, Rank::Two]);
        let big_bust = hand_of(&[Rank::King, Rank::Queen, Rank::Jack]);
        let seats = [
            Seat {
                player: PlayerId::new(0),
                name: "big",
                hand: &big_bust,
            },
            Seat {
                player: PlayerId::new(1),
                name: "small",
                hand: &small_bust,
            },
        ];

        let ranked = rank_hands(seats);
        assert_eq!(ranked[0].player, PlayerId::new(1));
        assert_eq!(ranked[0].priority(), -22);
        assert_eq!(ranked[1].priority(), -30);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_hands(Vec::new()).is_empty());
    }
}
