//! Core types: errors, seats, RNG, configuration.
//!
//! Everything here is independent of the score tree, heap and blackjack
//! rules, and is shared by all of them.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, BLACKJACK, DECK_SIZE, DEFAULT_HEAP_CAPACITY, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{GameError, Result};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
