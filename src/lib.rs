//! # rust-blackjack
//!
//! A multi-player game of 21 built around two small data structures.
//!
//! ## Design Principles
//!
//! 1. **Every total counts**: a hand keeps every score its cards can add up
//!    to in a binary `ScoreTree`, branching whenever a card (an ace) has two
//!    values. Nothing is collapsed early.
//!
//! 2. **Rank by priority**: finished hands are drained from a `MaxHeap`
//!    keyed by each hand's priority. The heap knows nothing about blackjack;
//!    anything implementing `Prioritized` can be queued.
//!
//! 3. **Errors, not panics**: bad arguments, empty collections and
//!    out-of-turn calls come back as `GameError` for the caller to handle.
//!
//! ## Modules
//!
//! - `core`: Errors, seats, RNG, configuration
//! - `tree`: Arena-based score tree
//! - `heap`: Array-backed max-heap and the `Prioritized` trait
//! - `cards`: Cards, ranks, suits and the deck
//! - `games`: The blackjack hand, ranking and turn state
//!
//! ## Example
//!
//! ```
//! use rust_blackjack::{Game, GameConfig, Rank};
//!
//! let mut game = Game::new(GameConfig::new(["katy", "joe"]))?;
//! game.hit_with(Rank::King.card())?;
//! game.hit_with(Rank::Ace.card())?;
//! game.stay()?;
//! game.hit_with(Rank::King.card())?;
//! game.hit_with(Rank::Queen.card())?;
//! game.stay()?;
//!
//! assert_eq!(game.ranked_names()?, vec!["katy", "joe"]);
//! # Ok::<(), rust_blackjack::GameError>(())
//! ```

pub mod cards;
pub mod core;
pub mod games;
pub mod heap;
pub mod tree;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameError, GameRng, PlayerId, PlayerMap, Result};

pub use crate::tree::{NodeId, Preorder, ScoreNode, ScoreTree};

pub use crate::heap::{MaxHeap, Prioritized};

pub use crate::cards::{Card, Deck, Rank, Suit};

pub use crate::games::blackjack::{rank_hands, Game, Hand, Player, Seat};
