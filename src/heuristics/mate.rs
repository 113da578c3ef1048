//! Choosing one move among several proven mates.
//!
//! Every mate wins; the tie-breaks only decide which win looks best. They
//! form a lexicographic key: each comparator returns an `Ordering` for one
//! criterion and the first non-equal one decides. Candidates still tied
//! after the last comparator are sampled uniformly in one pass (reservoir
//! sampling), which is the only place the dice are rolled.

use std::cmp::Ordering;

use crate::cards::Cards;
use crate::core::Dice;
use crate::error::{HeuristicError, Result};
use crate::field::{FieldInfo, FieldView};
use crate::moves::{CandidateBuffer, MoveInfo, Play};

use super::config::SelectorConfig;
use super::revolution::revolution_preference;

/// Tie-break criteria in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TieBreak {
    RivalDefeat,
    TerminalMate,
    ForcedWin,
    UnrivaledEfficiency,
    Quantity,
    InevitableDominance,
    NotDominatingSelf,
}

impl TieBreak {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TieBreak::RivalDefeat => "rival_defeat",
            TieBreak::TerminalMate => "terminal_mate",
            TieBreak::ForcedWin => "forced_win",
            TieBreak::UnrivaledEfficiency => "unrivaled_efficiency",
            TieBreak::Quantity => "quantity",
            TieBreak::InevitableDominance => "inevitable_dominance",
            TieBreak::NotDominatingSelf => "not_dominating_self",
        }
    }
}

type Comparator = fn(&TieBreakContext, &MoveInfo, &MoveInfo) -> Ordering;

const TIE_BREAKS: [(TieBreak, Comparator); 7] = [
    (TieBreak::RivalDefeat, rival_defeat),
    (TieBreak::TerminalMate, terminal_mate),
    (TieBreak::ForcedWin, forced_win),
    (TieBreak::UnrivaledEfficiency, unrivaled_efficiency),
    (TieBreak::Quantity, quantity),
    (TieBreak::InevitableDominance, inevitable_dominance),
    (TieBreak::NotDominatingSelf, not_dominating_self),
];

/// Per-call facts the comparators read.
#[derive(Clone, Copy, Debug)]
pub struct TieBreakContext {
    hand: Cards,
    n_alive: usize,
    unrivaled: bool,
    /// `Some(want)` when the rival-defeat criterion is active.
    wants_revolution: Option<bool>,
}

impl TieBreakContext {
    /// Build the context for a set of mate candidates.
    #[must_use]
    pub fn new(
        config: SelectorConfig,
        mates: &[MoveInfo],
        field: &FieldView,
        info: &FieldInfo,
    ) -> Self {
        let hand = field.my_cards();
        let n_alive = field.n_alive();

        let wants_revolution = if config.defeat_rival && n_alive > 2 && hand.can_revolt() {
            revolution_preference(field)
                .wants_revolution()
                .filter(|_| {
                    mates.iter().any(|mv| {
                        mv.flags().flips_order || leaves_revolution(hand, mv)
                    })
                })
        } else {
            None
        };

        Self {
            hand,
            n_alive,
            unrivaled: info.unrivaled,
            wants_revolution,
        }
    }

    /// Compare two candidates; `Greater` means `a` is preferred.
    #[must_use]
    pub fn compare(&self, a: &MoveInfo, b: &MoveInfo) -> Option<(TieBreak, Ordering)> {
        TIE_BREAKS.iter().find_map(|&(rule, cmp)| match cmp(self, a, b) {
            Ordering::Equal => None,
            ordering => Some((rule, ordering)),
        })
    }
}

fn leaves_revolution(hand: Cards, mv: &MoveInfo) -> bool {
    (hand - mv.cards()).can_revolt()
}

fn prefer(a: bool, b: bool) -> Ordering {
    a.cmp(&b)
}

fn rival_defeat(ctx: &TieBreakContext, a: &MoveInfo, b: &MoveInfo) -> Ordering {
    let Some(want) = ctx.wants_revolution else {
        return Ordering::Equal;
    };
    prefer(a.flags().flips_order == want, b.flags().flips_order == want).then_with(|| {
        prefer(
            leaves_revolution(ctx.hand, a) == want,
            leaves_revolution(ctx.hand, b) == want,
        )
    })
}

fn terminal_mate(ctx: &TieBreakContext, a: &MoveInfo, b: &MoveInfo) -> Ordering {
    if ctx.n_alive != 2 {
        return Ordering::Equal;
    }
    prefer(a.flags().is_terminal_mate, b.flags().is_terminal_mate)
}

fn forced_win(_: &TieBreakContext, a: &MoveInfo, b: &MoveInfo) -> Ordering {
    prefer(a.flags().is_forced_win, b.flags().is_forced_win)
}

/// When nobody can answer, spend the turn on a play that does not make
/// the hand harder to empty; otherwise pass.
fn unrivaled_efficiency(ctx: &TieBreakContext, a: &MoveInfo, b: &MoveInfo) -> Ordering {
    if !ctx.unrivaled {
        return Ordering::Equal;
    }
    match (a.is_pass(), b.is_pass()) {
        (true, true) => Ordering::Equal,
        (false, false) => b.min_melds_delta().cmp(&a.min_melds_delta()),
        (false, true) => prefer(a.min_melds_delta() <= 0, a.min_melds_delta() > 0),
        (true, false) => prefer(b.min_melds_delta() > 0, b.min_melds_delta() <= 0),
    }
}

fn quantity(_: &TieBreakContext, a: &MoveInfo, b: &MoveInfo) -> Ordering {
    a.qty().cmp(&b.qty())
}

fn inevitable_dominance(_: &TieBreakContext, a: &MoveInfo, b: &MoveInfo) -> Ordering {
    prefer(a.flags().dominates_inevitably, b.flags().dominates_inevitably)
}

fn not_dominating_self(_: &TieBreakContext, a: &MoveInfo, b: &MoveInfo) -> Ordering {
    prefer(!a.flags().dominates_self, !b.flags().dominates_self)
}

/// Picks one mate among proven winning candidates.
#[derive(Clone, Copy, Debug, Default)]
pub struct MateSelector {
    config: SelectorConfig,
}

impl MateSelector {
    #[must_use]
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> SelectorConfig {
        self.config
    }

    /// Prune non-mates from `buffer` and return the preferred mate.
    ///
    /// With a single mate the dice are not touched.
    ///
    /// # Errors
    ///
    /// `EmptyCandidateSet` for an empty buffer, `NoMateCandidate` when no
    /// active candidate is mate-flagged. The buffer is left unchanged in
    /// both cases.
    pub fn select<D: Dice + ?Sized>(
        &self,
        buffer: &mut CandidateBuffer,
        field: &FieldView,
        info: &FieldInfo,
        dice: &mut D,
    ) -> Result<Play> {
        let candidates = buffer.active_len();
        if candidates == 0 {
            return Err(HeuristicError::EmptyCandidateSet);
        }
        if !buffer.active().iter().any(|mv| mv.flags().is_mate) {
            tracing::warn!(
                target: "rust_daifugo::mate",
                candidates,
                "mate selection called without a mate candidate"
            );
            return Err(HeuristicError::NoMateCandidate { candidates });
        }

        for index in (0..buffer.active_len()).rev() {
            if !buffer.get(index).flags().is_mate {
                buffer.prune(index);
            }
        }

        let mates = buffer.active();
        if mates.len() == 1 {
            return Ok(mates[0].play());
        }

        let ctx = TieBreakContext::new(self.config, mates, field, info);
        let mut best = 0;
        let mut ties = 2u32;

        for index in (1..mates.len()).rev() {
            match ctx.compare(&mates[index], &mates[best]) {
                Some((rule, Ordering::Greater)) => {
                    tracing::trace!(
                        target: "rust_daifugo::mate",
                        rule = rule.as_str(),
                        best = %mates[index],
                        over = %mates[best],
                        "challenger preferred"
                    );
                    best = index;
                    // Earlier ties lost to the new best; sample afresh among its equals.
                    ties = 2;
                }
                Some(_) => {}
                None => {
                    if dice.roll(ties) == 0 {
                        best = index;
                    }
                    ties += 1;
                }
            }
        }

        tracing::debug!(
            target: "rust_daifugo::mate",
            mates = mates.len(),
            chosen = %mates[best],
            "mate selected"
        );
        Ok(mates[best].play())
    }
}

/// Select a mate with the default configuration (rival defeat off).
///
/// # Errors
///
/// See `MateSelector::select`.
pub fn select_mate_move<D: Dice + ?Sized>(
    buffer: &mut CandidateBuffer,
    field: &FieldView,
    info: &FieldInfo,
    dice: &mut D,
) -> Result<Play> {
    MateSelector::default().select(buffer, field, info, dice)
}
