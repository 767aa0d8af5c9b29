//! Multi-player 21.
//!
//! Players take turns in seat order, hitting until they stay or bust. A
//! hand's possible totals come from its score tree, so an ace is counted
//! both ways until the end. When the last seat finishes, hands are ranked
//! through a max-heap:
//!
//! - Standing hands rank by best score (highest first)
//! - Every standing hand beats every bust hand
//! - Bust hands rank by smallest overshoot

mod game;
mod hand;
mod ranking;

pub use game::{Game, Player};
pub use hand::Hand;
pub use ranking::{rank_hands, Seat};
