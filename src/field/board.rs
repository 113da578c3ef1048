//! Board state and derived per-turn field information.

use serde::{Deserialize, Serialize};

use crate::cards::Order;

/// What is on the table right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Rank order currently in force.
    pub order: Order,
    /// Nothing on the table: the acting player leads.
    pub empty: bool,
}

impl Board {
    /// A cleared table under `order`.
    #[must_use]
    pub const fn empty(order: Order) -> Self {
        Self { order, empty: true }
    }

    /// A table with a play to answer, under `order`.
    #[must_use]
    pub const fn contested(order: Order) -> Self {
        Self { order, empty: false }
    }

    #[inline]
    #[must_use]
    pub const fn temp_order(&self) -> Order {
        self.order
    }

    #[inline]
    #[must_use]
    pub const fn is_empty_field(&self) -> bool {
        self.empty
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(Order::Normal)
    }
}

/// Facts about the field derived by move generation for this turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    /// Passing now is itself a dominant choice.
    pub pass_dominant: bool,
    /// The temp order can no longer change before the field clears.
    pub temp_order_settled: bool,
    /// No other active player can answer this turn.
    pub unrivaled: bool,
}

impl FieldInfo {
    #[must_use]
    pub fn with_pass_dominant(mut self, value: bool) -> Self {
        self.pass_dominant = value;
        self
    }

    #[must_use]
    pub fn with_temp_order_settled(mut self, value: bool) -> Self {
        self.temp_order_settled = value;
        self
    }

    #[must_use]
    pub fn with_unrivaled(mut self, value: bool) -> Self {
        self.unrivaled = value;
        self
    }
}
