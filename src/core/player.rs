//! Player seats and per-seat storage.
//!
//! ## PlayerId
//!
//! Seat index at the table, in turn order. Seat 0 plays first.
//!
//! ## PlayerMap
//!
//! One entry per seat, backed by a `Vec` and indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier, 0-based in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Seat position (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Every seat at a table of `player_count` players, in turn order.
    ///
    /// ```
    /// use rust_blackjack::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `player_count` does not fit in a `u8`.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        assert!(
            player_count <= u8::MAX as usize,
            "Cannot seat {player_count} players (max {})",
            u8::MAX
        );
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat storage with O(1) access by `PlayerId`.
///
/// ```
/// use rust_blackjack::core::{PlayerId, PlayerMap};
///
/// let mut stakes = PlayerMap::from_vec(vec![5, 10]);
/// stakes[PlayerId::new(1)] += 5;
/// assert_eq!(stakes[PlayerId::new(1)], 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build from one value per seat, in seat order.
    ///
    /// # Panics
    ///
    /// Panics with more seats than a `PlayerId` can address. Games check
    /// the count earlier through `GameConfig::validate`.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(
            data.len() <= u8::MAX as usize,
            "Cannot seat {} players (max {})",
            data.len(),
            u8::MAX
        );
        Self { data }
    }

    /// Build by calling `factory` for every seat.
    ///
    /// # Panics
    ///
    /// Panics if `player_count` does not fit in a `u8`.
    pub fn new(player_count: usize, factory: impl FnMut(PlayerId) -> T) -> Self {
        Self::from_vec(PlayerId::all(player_count).map(factory).collect())
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Entry for a seat, or `None` if the seat does not exist.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Mutable entry for a seat, or `None` if the seat does not exist.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
