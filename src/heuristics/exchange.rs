//! Pre-filter for the card exchange before a round.
//!
//! Cards that are never worth giving away are removed from the pool the
//! exchange search picks from.

use crate::cards::Cards;
use crate::error::{HeuristicError, Result};

/// Cards never offered in an exchange: 8s, 2s, the joker and D3.
pub const NEVER_EXCHANGED: Cards = Cards::EIGHTS
    .union(Cards::TWOS)
    .union(Cards::JOKER)
    .union(Cards::D3);

/// Reduce `hand` to the cards that may be offered when giving away
/// `quantity` cards.
///
/// S3 is kept back as well while the hand holds the joker. If the pool
/// ends up too small, the only legal situation is a single-card exchange
/// from a hand made of excluded cards, and S3 alone is returned.
///
/// ```
/// use rust_daifugo::cards::Cards;
/// use rust_daifugo::heuristics::filter_exchange_candidates;
///
/// let hand: Cards = "S3 D3 H8 C2 H5 D9".parse().unwrap();
/// let pool = filter_exchange_candidates(hand, 2).unwrap();
/// assert_eq!(pool, "S3 H5 D9".parse::<Cards>().unwrap());
/// ```
pub fn filter_exchange_candidates(hand: Cards, quantity: usize) -> Result<Cards> {
    let mut pool = hand - NEVER_EXCHANGED;
    if hand.has_joker() {
        pool -= Cards::S3;
    }

    let available = pool.count();
    if available >= quantity {
        return Ok(pool);
    }

    if quantity == 1 {
        tracing::debug!(
            target: "rust_daifugo::exchange",
            hand = %hand,
            "only excluded cards left, offering S3"
        );
        return Ok(Cards::S3);
    }

    tracing::warn!(
        target: "rust_daifugo::exchange",
        hand = %hand,
        quantity,
        available,
        "exchange pool shortfall"
    );
    Err(HeuristicError::ExchangeShortfall {
        requested: quantity,
        available,
    })
}
