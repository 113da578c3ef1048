//! Revolution preference: does flipping the rank order help against the
//! rival players?

use serde::{Deserialize, Serialize};

use crate::field::FieldView;

/// Advice on triggering or keeping a revolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevolutionPreference {
    /// Keep the current order.
    Avoid,
    /// No rival is left, so the order does not matter strategically.
    Indifferent,
    /// Flip the order, or keep it flipped.
    Prefer,
}

impl RevolutionPreference {
    /// `-1`, `0` or `+1`.
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        match self {
            RevolutionPreference::Avoid => -1,
            RevolutionPreference::Indifferent => 0,
            RevolutionPreference::Prefer => 1,
        }
    }

    /// Whether a revolution is wanted; `None` when indifferent.
    #[must_use]
    pub const fn wants_revolution(self) -> Option<bool> {
        match self {
            RevolutionPreference::Avoid => Some(false),
            RevolutionPreference::Indifferent => None,
            RevolutionPreference::Prefer => Some(true),
        }
    }
}

/// Decide whether a revolution currently favours the acting player.
///
/// Compares the mean class of the alive rivals with the mean class of all
/// alive opponents (cross-multiplied, so no division). Rivals standing
/// better than average under the normal order means a revolution hurts
/// them; a reversed temp order inverts the advice. A tie counts as rivals
/// not standing better.
#[must_use]
pub fn revolution_preference(field: &FieldView) -> RevolutionPreference {
    let me = field.me();
    let mut all_sum = 0u32;
    let mut all_count = 0u32;
    let mut rival_sum = 0u32;
    let mut rival_count = 0u32;

    for player in field.alive().without(me).iter() {
        let class = u32::from(field.class_of(player));
        all_sum += class;
        all_count += 1;
        if field.rivals().contains(player) {
            rival_sum += class;
            rival_count += 1;
        }
    }

    if rival_count == 0 {
        return RevolutionPreference::Indifferent;
    }

    let rival_better = rival_sum * all_count < all_sum * rival_count;
    if rival_better ^ field.board().temp_order().is_reversed() {
        RevolutionPreference::Prefer
    } else {
        RevolutionPreference::Avoid
    }
}
