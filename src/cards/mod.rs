//! Card-set primitives.
//!
//! ## Key Types
//!
//! - `Card`: a single card identity (52 natural cards plus the joker)
//! - `Rank`, `Suit`: card decomposition
//! - `Order`: the rank ordering in force (normal or reversed)
//! - `Cards`: bitset over card identities
//!
//! Order-dependent queries such as `Cards::strongest_rank` always take the
//! order as an argument; there is no global ordering state.

pub mod card;
pub mod set;

pub use card::{Card, Order, ParseCardError, Rank, Suit, NUM_RANKS, NUM_SUITS};
pub use set::{Cards, CardsIter};
