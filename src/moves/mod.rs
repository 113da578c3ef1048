//! Move records and the candidate buffer.
//!
//! Move generation (outside this crate) fills a `CandidateBuffer` with
//! `MoveInfo` records once per decision point. The heuristics then prune
//! the buffer in place or pick a single `Play` from it.

pub mod buffer;
pub mod info;

pub use buffer::CandidateBuffer;
pub use info::{MoveFlags, MoveInfo, MoveKind, Play};
