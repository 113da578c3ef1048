//! Player identification, player sets, and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat index at the table, 0-based.
//!
//! ## PlayerSet
//!
//! Bitmask over seats (alive players, rival players). Supports up to
//! 32 seats.
//!
//! ## PlayerMap
//!
//! Per-player data backed by a `Vec` for O(1) access by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Maximum number of seats a `PlayerSet` can represent.
pub const MAX_PLAYERS: usize = 32;

/// Seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats of a `player_count` table.
    ///
    /// ```
    /// use rust_daifugo::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(5).collect();
    /// assert_eq!(players.len(), 5);
    /// assert_eq!(players[4], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A set of seats stored as a bitmask.
///
/// ```
/// use rust_daifugo::core::{PlayerId, PlayerSet};
///
/// let alive = PlayerSet::full(5).without(PlayerId::new(2));
/// assert_eq!(alive.len(), 4);
/// assert!(!alive.contains(PlayerId::new(2)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerSet(pub u32);

impl PlayerSet {
    pub const EMPTY: PlayerSet = PlayerSet(0);

    /// Every seat of a `player_count` table.
    #[must_use]
    pub fn full(player_count: usize) -> Self {
        assert!(player_count <= MAX_PLAYERS, "At most 32 players supported");
        if player_count == MAX_PLAYERS {
            PlayerSet(u32::MAX)
        } else {
            PlayerSet((1u32 << player_count) - 1)
        }
    }

    #[must_use]
    pub fn from_players(players: impl IntoIterator<Item = PlayerId>) -> Self {
        players.into_iter().fold(PlayerSet::EMPTY, PlayerSet::with)
    }

    /// Mask bit of `player`; zero for seats past `MAX_PLAYERS`.
    #[inline]
    const fn bit(player: PlayerId) -> u32 {
        match 1u32.checked_shl(player.0 as u32) {
            Some(bit) => bit,
            None => 0,
        }
    }

    /// Seats past `MAX_PLAYERS` are never members.
    #[inline]
    #[must_use]
    pub const fn contains(self, player: PlayerId) -> bool {
        self.0 & Self::bit(player) != 0
    }

    /// Adding a seat past `MAX_PLAYERS` leaves the set unchanged.
    #[must_use]
    pub const fn with(self, player: PlayerId) -> Self {
        PlayerSet(self.0 | Self::bit(player))
    }

    #[must_use]
    pub const fn without(self, player: PlayerId) -> Self {
        PlayerSet(self.0 & !Self::bit(player))
    }

    pub fn insert(&mut self, player: PlayerId) {
        *self = self.with(player);
    }

    pub fn remove(&mut self, player: PlayerId) {
        *self = self.without(player);
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over member seats in ascending order.
    pub fn iter(self) -> impl Iterator<Item = PlayerId> {
        (0..MAX_PLAYERS as u8)
            .filter(move |&i| self.0 & (1u32 << i) != 0)
            .map(PlayerId)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_daifugo::core::{PlayerId, PlayerMap};
///
/// let mut classes: PlayerMap<u8> = PlayerMap::new(5, |p| p.0);
/// assert_eq!(classes[PlayerId::new(3)], 3);
///
/// classes[PlayerId::new(1)] = 4;
/// assert_eq!(classes[PlayerId::new(1)], 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= MAX_PLAYERS, "At most 32 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
