//! Table configuration and rule constants.
//!
//! A game is configured once at startup with a `GameConfig`: who is seated,
//! whether every seat is dealt two cards before the first turn, and the deck
//! seed.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Score a hand may not exceed.
pub const BLACKJACK: i32 = 21;

/// Fewest players a table accepts.
pub const MIN_PLAYERS: usize = 1;

/// Most players a table accepts. Two cards each for 26 players empties a deck.
pub const MAX_PLAYERS: usize = 26;

/// Cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Starting capacity of a `MaxHeap` built with `MaxHeap::new`.
pub const DEFAULT_HEAP_CAPACITY: usize = 10;

/// Configuration for a single game.
///
/// ```
/// use rust_blackjack::core::GameConfig;
///
/// let config = GameConfig::new(["bob", "jane"]).pre_deal().with_seed(7);
/// assert_eq!(config.player_count(), 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player names in turn order.
    pub player_names: Vec<String>,

    /// Deal two cards to every seat before the first turn.
    #[serde(default)]
    pub pre_deal: bool,

    /// Deck seed.
    #[serde(default)]
    pub seed: u64,
}

impl GameConfig {
    /// Create a configuration for the given players.
    pub fn new<I, S>(player_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            player_names: player_names.into_iter().map(Into::into).collect(),
            pre_deal: false,
            seed: 0,
        }
    }

    /// Configuration with generated names "Player 1" .. "Player n".
    #[must_use]
    pub fn numbered(player_count: usize) -> Self {
        Self::new((1..=player_count).map(|i| format!("Player {i}")))
    }

    /// Deal two cards to every seat up front.
    #[must_use]
    pub fn pre_deal(mut self) -> Self {
        self.pre_deal = true;
        self
    }

    /// Set the deck seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Check the seat count against the table limits.
    pub fn validate(&self) -> Result<()> {
        let count = self.player_count();
        if count < MIN_PLAYERS {
            return Err(GameError::invalid("Cannot create a game with no players"));
        }
        if count > MAX_PLAYERS {
            return Err(GameError::invalid(format!(
                "Cannot have more than {MAX_PLAYERS} players, got {count}"
            )));
        }
        Ok(())
    }
}
