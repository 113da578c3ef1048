//! Card identities: ranks, suits, single cards, and rank ordering.
//!
//! ## Layout
//!
//! Natural ranks are numbered by strength under the normal order:
//! `3 = 0, 4 = 1, ..., K = 10, A = 11, 2 = 12`. A card's bit index is
//! `rank * 4 + suit`, and the joker takes bit 52.
//!
//! ```
//! use rust_daifugo::cards::{Card, Order, Rank, Suit};
//!
//! let s3 = Card::new(Rank::THREE, Suit::SPADE);
//! assert_eq!(s3.to_string(), "S3");
//! assert!(Rank::TWO.is_stronger_than(Rank::ACE, Order::Normal));
//! assert!(Rank::THREE.is_stronger_than(Rank::FOUR, Order::Reversed));
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of natural ranks (3 through 2).
pub const NUM_RANKS: usize = 13;

/// Number of suits.
pub const NUM_SUITS: usize = 4;

/// Bit index of the joker.
pub const JOKER_INDEX: u8 = (NUM_RANKS * NUM_SUITS) as u8;

/// Rank ordering currently in force.
///
/// A revolution flips the permanent order; some rules flip it only until
/// the field is cleared. Either way the heuristics only care about the
/// temporary order passed to them explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    /// 3 is weakest, 2 is strongest.
    #[default]
    Normal,
    /// 2 is weakest, 3 is strongest.
    Reversed,
}

impl Order {
    /// The opposite order.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Order::Normal => Order::Reversed,
            Order::Reversed => Order::Normal,
        }
    }

    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Order::Reversed)
    }
}

/// A card rank.
///
/// Natural ranks are `0..13`. `Rank::JOKER` is the rank of a lone joker
/// single, which beats every natural rank under either order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    pub const THREE: Rank = Rank(0);
    pub const FOUR: Rank = Rank(1);
    pub const FIVE: Rank = Rank(2);
    pub const SIX: Rank = Rank(3);
    pub const SEVEN: Rank = Rank(4);
    pub const EIGHT: Rank = Rank(5);
    pub const NINE: Rank = Rank(6);
    pub const TEN: Rank = Rank(7);
    pub const JACK: Rank = Rank(8);
    pub const QUEEN: Rank = Rank(9);
    pub const KING: Rank = Rank(10);
    pub const ACE: Rank = Rank(11);
    pub const TWO: Rank = Rank(12);
    pub const JOKER: Rank = Rank(NUM_RANKS as u8);

    /// Get the raw rank index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_natural(self) -> bool {
        (self.0 as usize) < NUM_RANKS
    }

    /// Mirror the rank's strength (3 <-> 2, 4 <-> A, ...).
    ///
    /// The joker sentinel maps to itself.
    #[must_use]
    pub const fn flip(self) -> Rank {
        if self.is_natural() {
            Rank(NUM_RANKS as u8 - 1 - self.0)
        } else {
            self
        }
    }

    /// Strength of this rank under `order`, where larger is stronger.
    #[inline]
    #[must_use]
    pub const fn strength(self, order: Order) -> u8 {
        match order {
            Order::Normal => self.0,
            Order::Reversed => self.flip().0,
        }
    }

    /// True if this rank beats `other` under `order`.
    #[inline]
    #[must_use]
    pub const fn is_stronger_than(self, other: Rank, order: Order) -> bool {
        self.strength(order) > other.strength(order)
    }

    /// Iterate over all natural ranks from 3 to 2.
    pub fn all() -> impl Iterator<Item = Rank> {
        (0..NUM_RANKS as u8).map(Rank)
    }

    fn symbol(self) -> char {
        const SYMBOLS: [char; NUM_RANKS + 1] = [
            '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A', '2', '*',
        ];
        SYMBOLS[self.index().min(NUM_RANKS)]
    }

    fn from_symbol(c: char) -> Option<Rank> {
        let index = match c.to_ascii_uppercase() {
            '3' => 0,
            '4' => 1,
            '5' => 2,
            '6' => 3,
            '7' => 4,
            '8' => 5,
            '9' => 6,
            'T' => 7,
            'J' => 8,
            'Q' => 9,
            'K' => 10,
            'A' => 11,
            '2' => 12,
            _ => return None,
        };
        Some(Rank(index))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suit(pub u8);

impl Suit {
    pub const CLUB: Suit = Suit(0);
    pub const DIAMOND: Suit = Suit(1);
    pub const HEART: Suit = Suit(2);
    pub const SPADE: Suit = Suit(3);

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Bit of this suit inside a 4-bit suit pattern.
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u8 {
        1 << self.0
    }

    pub fn all() -> impl Iterator<Item = Suit> {
        (0..NUM_SUITS as u8).map(Suit)
    }

    fn symbol(self) -> char {
        ['C', 'D', 'H', 'S'][self.index()]
    }

    fn from_symbol(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::CLUB),
            'D' => Some(Suit::DIAMOND),
            'H' => Some(Suit::HEART),
            'S' => Some(Suit::SPADE),
            _ => None,
        }
    }
}

/// A single card identity (bit index into a `Cards` set).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card(pub u8);

impl Card {
    pub const JOKER: Card = Card(JOKER_INDEX);

    /// Create a natural card.
    #[inline]
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card(rank.0 * NUM_SUITS as u8 + suit.0)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_joker(self) -> bool {
        self.0 == JOKER_INDEX
    }

    /// Rank of the card; the joker reports `Rank::JOKER`.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> Rank {
        if self.is_joker() {
            Rank::JOKER
        } else {
            Rank(self.0 / NUM_SUITS as u8)
        }
    }

    /// Suit of a natural card, `None` for the joker.
    #[must_use]
    pub const fn suit(self) -> Option<Suit> {
        if self.is_joker() {
            None
        } else {
            Some(Suit(self.0 % NUM_SUITS as u8))
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.suit() {
            Some(suit) => write!(f, "{}{}", suit.symbol(), self.rank().symbol()),
            None => write!(f, "JK"),
        }
    }
}

/// Error returned when card notation cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid card notation: {0:?}")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parse `"S3"`, `"hT"`, `"D2"` or `"JK"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("JK") {
            return Ok(Card::JOKER);
        }

        let mut chars = token.chars();
        let (Some(suit), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError(s.to_string()));
        };

        match (Suit::from_symbol(suit), Rank::from_symbol(rank)) {
            (Some(suit), Some(rank)) => Ok(Card::new(rank, suit)),
            _ => Err(ParseCardError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_layout() {
        let d3 = Card::new(Rank::THREE, Suit::DIAMOND);
        assert_eq!(d3.index(), 1);
        assert_eq!(d3.rank(), Rank::THREE);
        assert_eq!(d3.suit(), Some(Suit::DIAMOND));

        let c2 = Card::new(Rank::TWO, Suit::CLUB);
        assert_eq!(c2.index(), 48);
        assert_eq!(Card::JOKER.index(), 52);
        assert_eq!(Card::JOKER.rank(), Rank::JOKER);
        assert!(Card::JOKER.suit().is_none());
    }

    #[test]
    fn test_rank_strength_under_order() {
        assert!(Rank::ACE.is_stronger_than(Rank::KING, Order::Normal));
        assert!(Rank::KING.is_stronger_than(Rank::ACE, Order::Reversed));
        assert!(!Rank::FIVE.is_stronger_than(Rank::FIVE, Order::Normal));
        assert_eq!(Rank::THREE.flip(), Rank::TWO);
        assert_eq!(Rank::JACK.flip(), Rank::SEVEN);
        assert_eq!(Rank::JOKER.flip(), Rank::JOKER);
    }

    #[test]
    fn test_parse_and_display() {
        for text in ["S3", "HT", "D2", "CA", "JK"] {
            let card: Card = text.parse().unwrap();
            assert_eq!(card.to_string(), text);
        }
        assert_eq!("sq".parse::<Card>().unwrap(), Card::new(Rank::QUEEN, Suit::SPADE));
        assert!("X3".parse::<Card>().is_err());
        assert!("S1".parse::<Card>().is_err());
        assert!("S33".parse::<Card>().is_err());
    }

    #[test]
    fn test_order_flip() {
        assert_eq!(Order::Normal.flipped(), Order::Reversed);
        assert!(Order::Normal.flipped().is_reversed());
        assert_eq!(Order::default(), Order::Normal);
    }
}
