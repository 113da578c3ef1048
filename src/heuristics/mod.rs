//! Decision heuristics used around the search.
//!
//! ## Key Types
//!
//! - `RootPruner`: drops root candidates before the search expands them
//! - `MateSelector`: picks one move among several proven mates
//! - `RevolutionPreference`: whether flipping the rank order helps
//! - `PruneConfig`, `SelectorConfig`: rule toggles and tuned thresholds
//!
//! `filter_exchange_candidates` narrows the pool for the pre-round card
//! exchange.

pub mod analysis;
pub mod config;
pub mod exchange;
pub mod mate;
pub mod prune;
pub mod revolution;

pub use config::{HeuristicConfig, JokerRetention, PruneConfig, PruneRule, SelectorConfig};
pub use exchange::{filter_exchange_candidates, NEVER_EXCHANGED};
pub use mate::{select_mate_move, MateSelector, TieBreak, TieBreakContext};
pub use prune::{prune_root_candidates, PruneReport, RootPruner};
pub use revolution::{revolution_preference, RevolutionPreference};
