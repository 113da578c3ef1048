//! # rust-daifugo
//!
//! Heuristic decision layer for a Daifugo (climbing card game) agent.
//!
//! The search engine enumerates legal plays and computes their flags; this
//! crate decides what to do with them.
//!
//! ## Design Principles
//!
//! 1. **Snapshots In, Decisions Out**: Every entry point is a pure function
//!    or an in-place filter over caller-supplied snapshots. Nothing is kept
//!    between decision points.
//!
//! 2. **N-Player First**: Field snapshots take `player_count` and an alive
//!    set; no API assumes a fixed table size.
//!
//! 3. **Configuration Over Constants**: Rule families and tuned thresholds
//!    live in `PruneConfig` and `SelectorConfig`.
//!
//! ## Modules
//!
//! - `core`: Players, per-player storage, RNG
//! - `cards`: Card identities and the `Cards` bitset
//! - `moves`: Move records and the candidate buffer
//! - `field`: Subjective field snapshot
//! - `heuristics`: Exchange filter, revolution preference, root pruning,
//!   mate selection
//! - `error`: Error type

pub mod core;
pub mod cards;
pub mod moves;
pub mod field;
pub mod heuristics;
pub mod error;

// Re-export commonly used types
pub use crate::core::{Dice, GameRng, GameRngState, PlayerId, PlayerMap, PlayerSet};

pub use crate::cards::{Card, Cards, Order, Rank, Suit};

pub use crate::moves::{CandidateBuffer, MoveFlags, MoveInfo, MoveKind, Play};

pub use crate::field::{Board, FieldInfo, FieldView};

pub use crate::heuristics::{
    filter_exchange_candidates, prune_root_candidates, revolution_preference, select_mate_move,
    HeuristicConfig, JokerRetention, MateSelector, PruneConfig, PruneReport, PruneRule,
    RevolutionPreference, RootPruner, SelectorConfig,
};

pub use crate::error::{HeuristicError, Result};
