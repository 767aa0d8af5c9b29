//! Game implementations built on the score tree and heap.

pub mod blackjack;
