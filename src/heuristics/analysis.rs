//! Hand analysis shared by the pruning rules.
//!
//! These are coarse, rule-level estimates built on the card-set algebra;
//! exact dominance classification of individual moves comes from move
//! generation through `MoveFlags`.

use crate::cards::{Cards, Order, Suit, NUM_RANKS};
use crate::moves::MoveInfo;

/// Minimum length of a same-suit run that ties cards together.
pub const RUN_MIN_LEN: usize = 3;

/// Cards in `hand` that no opponent single can beat under `order`.
///
/// A natural card is safe when no opponent natural card is stronger and
/// the joker is not in an opponent's hand. The own joker is safe unless an
/// opponent holds S3.
#[must_use]
pub fn dominant_single_cards(hand: Cards, ops: Cards, order: Order) -> Cards {
    let natural = if ops.has_joker() {
        Cards::EMPTY
    } else {
        match ops.strongest_rank(order) {
            None => hand.natural(),
            Some(top) => hand
                .natural()
                .iter()
                .filter(|card| card.rank().strength(order) >= top.strength(order))
                .collect(),
        }
    };

    let joker = if hand.has_joker() && !ops.intersects(Cards::S3) {
        Cards::JOKER
    } else {
        Cards::EMPTY
    };

    natural | joker
}

/// Own cards guaranteed to win a trick later ("deferred-win" cards).
///
/// Unless the order is settled they must be dominant under both orders.
#[must_use]
pub fn deferred_win_cards(hand: Cards, ops: Cards, order: Order, order_settled: bool) -> Cards {
    let current = dominant_single_cards(hand, ops, order);
    if order_settled {
        current
    } else {
        current & dominant_single_cards(hand, ops, order.flipped())
    }
}

/// The hand can be emptied by one play: a group of one rank or a single
/// same-suit run, the joker joining either.
#[must_use]
pub fn is_single_meld(hand: Cards) -> bool {
    let natural = hand.natural();
    if hand.is_empty() {
        return false;
    }
    if natural.distinct_ranks() <= 1 {
        return true;
    }
    if hand.count() < RUN_MIN_LEN {
        return false;
    }

    let wild = usize::from(hand.has_joker());
    Suit::all().any(|suit| {
        let ranks = natural.suit_rank_mask(suit);
        if ranks.count_ones() as usize != natural.count() {
            return false;
        }
        // Ranks from lowest to highest held, gaps included.
        let span = (u16::BITS - ranks.leading_zeros() - ranks.trailing_zeros()) as usize;
        let gaps = span - natural.count();
        gaps <= wild && span + (wild - gaps) <= NUM_RANKS
    })
}

/// After the play, the remaining hand still guarantees a dominant
/// follow-up or can be emptied from the next empty field in one go.
#[must_use]
pub fn has_deferred_win_or_lead(rest: Cards, ops: Cards, order: Order, order_settled: bool) -> bool {
    if rest.is_empty() {
        return false;
    }
    !deferred_win_cards(rest, ops, order, order_settled).is_empty() || is_single_meld(rest)
}

/// Own cards of the strongest natural rank held under `order`.
#[must_use]
pub fn extremal_rank_cards(hand: Cards, order: Order) -> Cards {
    hand.strongest_rank(order)
        .map_or(Cards::EMPTY, |rank| hand & Cards::of_rank(rank))
}

/// The play uses every own card of its rank and none of the hand's runs,
/// so removing it cannot break up another combination.
#[must_use]
pub fn is_independent(mv: &MoveInfo, hand: Cards, run_cards: Cards) -> bool {
    mv.qty() == hand.count_rank(mv.rank()) && mv.cards().is_disjoint(run_cards)
}

/// The play spends a three while the hand keeps S3 against an
/// outstanding joker. Those interactions are left to the search.
#[must_use]
pub fn touches_s3_guard(mv: &MoveInfo, hand: Cards, remaining: Cards) -> bool {
    mv.cards().intersects(Cards::THREES)
        && hand.intersects(Cards::S3)
        && remaining.has_joker()
}
