//! Core building blocks: seats, player sets, per-player storage, RNG.
//!
//! These types are shared by the field snapshot and the heuristics; they
//! carry no game rules of their own.

pub mod player;
pub mod rng;

pub use player::{PlayerId, PlayerMap, PlayerSet, MAX_PLAYERS};
pub use rng::{Dice, GameRng, GameRngState};
