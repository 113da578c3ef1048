//! Cards bitboard representation.
//!
//! A `Cards` value is a 53-bit set: 52 natural cards laid out rank-major
//! (`rank * 4 + suit`) plus the joker at bit 52. All operations are plain
//! set algebra, and cardinality is an exact popcount.

use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub, SubAssign};
use std::str::FromStr;

use super::card::{Card, Order, ParseCardError, Rank, Suit, JOKER_INDEX, NUM_RANKS, NUM_SUITS};

const NATURAL_MASK: u64 = (1u64 << (NUM_RANKS * NUM_SUITS)) - 1;
const JOKER_BIT: u64 = 1u64 << JOKER_INDEX;
const RANK_NIBBLE: u64 = 0xF;

/// A set of cards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cards {
    bits: u64,
}

impl Cards {
    pub const EMPTY: Cards = Cards { bits: 0 };
    pub const ALL: Cards = Cards { bits: NATURAL_MASK | JOKER_BIT };
    pub const JOKER: Cards = Cards { bits: JOKER_BIT };
    pub const THREES: Cards = Cards::of_rank(Rank::THREE);
    pub const EIGHTS: Cards = Cards::of_rank(Rank::EIGHT);
    pub const TWOS: Cards = Cards::of_rank(Rank::TWO);
    /// Diamond three: the low-rank safety card.
    pub const D3: Cards = Cards::of_card(Card::new(Rank::THREE, Suit::DIAMOND));
    /// Spade three: the only card that beats a lone joker.
    pub const S3: Cards = Cards::of_card(Card::new(Rank::THREE, Suit::SPADE));

    /// Create from raw bits. Bits above the joker are discarded.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Cards { bits: bits & (NATURAL_MASK | JOKER_BIT) }
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    #[inline]
    #[must_use]
    pub const fn of_card(card: Card) -> Self {
        Cards { bits: 1u64 << card.0 }
    }

    /// All four natural cards of `rank`. Empty for the joker sentinel.
    #[inline]
    #[must_use]
    pub const fn of_rank(rank: Rank) -> Self {
        if rank.is_natural() {
            Cards { bits: RANK_NIBBLE << (rank.0 as usize * NUM_SUITS) }
        } else {
            Cards::EMPTY
        }
    }

    /// All natural cards whose rank lies between `a` and `b` inclusive.
    ///
    /// The bounds may be given in either order.
    #[must_use]
    pub fn rank_range(a: Rank, b: Rank) -> Self {
        let lo = a.index().min(b.index()).min(NUM_RANKS - 1);
        let hi = a.index().max(b.index()).min(NUM_RANKS - 1);
        let upper = (1u64 << ((hi + 1) * NUM_SUITS)) - 1;
        let lower = (1u64 << (lo * NUM_SUITS)) - 1;
        Cards { bits: upper & !lower }
    }

    /// Natural cards of one suit, selected by a 13-bit rank mask.
    #[must_use]
    pub fn from_rank_mask(mask: u16, suit: Suit) -> Self {
        let mut bits = 0u64;
        for rank in Rank::all() {
            if mask & (1 << rank.0) != 0 {
                bits |= 1u64 << Card::new(rank, suit).0;
            }
        }
        Cards { bits }
    }

    /// Number of cards.
    #[inline]
    #[must_use]
    pub const fn count(self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, card: Card) -> bool {
        self.bits & (1u64 << card.0) != 0
    }

    /// True if every card of `other` is in `self`.
    #[inline]
    #[must_use]
    pub const fn contains_all(self, other: Cards) -> bool {
        self.bits & other.bits == other.bits
    }

    /// True if the two sets share at least one card.
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Cards) -> bool {
        self.bits & other.bits != 0
    }

    /// True if the two sets share no card.
    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Cards) -> bool {
        !self.intersects(other)
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Cards) -> Cards {
        Cards { bits: self.bits | other.bits }
    }

    #[inline]
    #[must_use]
    pub const fn intersect(self, other: Cards) -> Cards {
        Cards { bits: self.bits & other.bits }
    }

    /// Cards in `self` but not in `other`.
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Cards) -> Cards {
        Cards { bits: self.bits & !other.bits }
    }

    /// All deck cards not in `self`.
    #[inline]
    #[must_use]
    pub const fn complement(self) -> Cards {
        Cards { bits: Cards::ALL.bits & !self.bits }
    }

    #[inline]
    #[must_use]
    pub const fn has_joker(self) -> bool {
        self.bits & JOKER_BIT != 0
    }

    /// The set without the joker.
    #[inline]
    #[must_use]
    pub const fn natural(self) -> Cards {
        Cards { bits: self.bits & NATURAL_MASK }
    }

    /// Number of natural cards held at `rank`.
    #[inline]
    #[must_use]
    pub const fn count_rank(self, rank: Rank) -> usize {
        self.intersect(Cards::of_rank(rank)).count()
    }

    /// One bit per natural rank present in the set.
    #[must_use]
    pub fn rank_mask(self) -> u16 {
        let mut mask = 0u16;
        for rank in Rank::all() {
            if self.intersects(Cards::of_rank(rank)) {
                mask |= 1 << rank.0;
            }
        }
        mask
    }

    /// Number of distinct natural ranks present.
    #[must_use]
    pub fn distinct_ranks(self) -> usize {
        self.rank_mask().count_ones() as usize
    }

    /// One bit per rank held in `suit`.
    #[must_use]
    pub fn suit_rank_mask(self, suit: Suit) -> u16 {
        let mut mask = 0u16;
        for rank in Rank::all() {
            if self.contains(Card::new(rank, suit)) {
                mask |= 1 << rank.0;
            }
        }
        mask
    }

    /// Lowest natural rank by index.
    #[must_use]
    pub fn lowest_rank(self) -> Option<Rank> {
        let natural = self.natural();
        if natural.is_empty() {
            None
        } else {
            Some(Card(natural.bits.trailing_zeros() as u8).rank())
        }
    }

    /// Highest natural rank by index.
    #[must_use]
    pub fn highest_rank(self) -> Option<Rank> {
        let natural = self.natural();
        if natural.is_empty() {
            None
        } else {
            Some(Card((63 - natural.bits.leading_zeros()) as u8).rank())
        }
    }

    /// Strongest natural rank present under `order`.
    #[must_use]
    pub fn strongest_rank(self, order: Order) -> Option<Rank> {
        match order {
            Order::Normal => self.highest_rank(),
            Order::Reversed => self.lowest_rank(),
        }
    }

    /// Weakest natural rank present under `order`.
    #[must_use]
    pub fn weakest_rank(self, order: Order) -> Option<Rank> {
        self.strongest_rank(order.flipped())
    }

    /// Natural cards that belong to at least one same-suit run of
    /// `min_len` or more consecutive ranks. The joker is not used to
    /// bridge gaps.
    #[must_use]
    pub fn run_cards(self, min_len: usize) -> Cards {
        if min_len == 0 {
            return self.natural();
        }
        if min_len > NUM_RANKS {
            return Cards::EMPTY;
        }
        let mut result = Cards::EMPTY;
        for suit in Suit::all() {
            let ranks = self.suit_rank_mask(suit);
            let mut starts = ranks;
            for shift in 1..min_len {
                starts &= ranks >> shift;
            }
            let mut covered = 0u16;
            for shift in 0..min_len {
                covered |= starts << shift;
            }
            result |= Cards::from_rank_mask(covered & ranks, suit);
        }
        result
    }

    /// True if the set can form a revolution: four cards of one rank, or
    /// a same-suit run of five, with the joker filling at most one slot.
    #[must_use]
    pub fn can_revolt(self) -> bool {
        let wild = usize::from(self.has_joker());

        if Rank::all().any(|rank| self.count_rank(rank) + wild >= 4) {
            return true;
        }

        const RUN: usize = 5;
        Suit::all().any(|suit| {
            let ranks = self.suit_rank_mask(suit);
            (0..=NUM_RANKS - RUN).any(|start| {
                let held = ((ranks >> start) & 0x1F).count_ones() as usize;
                RUN - held <= wild
            })
        })
    }

    /// Iterate over the cards, natural cards first by index, joker last.
    pub fn iter(self) -> CardsIter {
        CardsIter { bits: self.bits }
    }
}

/// Iterator over the cards of a `Cards` set.
#[derive(Clone, Debug)]
pub struct CardsIter {
    bits: u64,
}

impl Iterator for CardsIter {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Card(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl IntoIterator for Cards {
    type Item = Card;
    type IntoIter = CardsIter;

    fn into_iter(self) -> CardsIter {
        self.iter()
    }
}

impl FromIterator<Card> for Cards {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Cards::EMPTY, |acc, card| acc | Cards::of_card(card))
    }
}

impl From<Card> for Cards {
    fn from(card: Card) -> Self {
        Cards::of_card(card)
    }
}

impl BitOr for Cards {
    type Output = Cards;
    fn bitor(self, rhs: Cards) -> Cards {
        self.union(rhs)
    }
}

impl BitOrAssign for Cards {
    fn bitor_assign(&mut self, rhs: Cards) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for Cards {
    type Output = Cards;
    fn bitand(self, rhs: Cards) -> Cards {
        self.intersect(rhs)
    }
}

impl BitAndAssign for Cards {
    fn bitand_assign(&mut self, rhs: Cards) {
        self.bits &= rhs.bits;
    }
}

impl Sub for Cards {
    type Output = Cards;
    fn sub(self, rhs: Cards) -> Cards {
        self.difference(rhs)
    }
}

impl SubAssign for Cards {
    fn sub_assign(&mut self, rhs: Cards) {
        self.bits &= !rhs.bits;
    }
}

impl Not for Cards {
    type Output = Cards;
    fn not(self) -> Cards {
        self.complement()
    }
}

impl std::fmt::Display for Cards {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, card) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "}}")
    }
}

impl std::fmt::Debug for Cards {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cards{self}")
    }
}

impl FromStr for Cards {
    type Err = ParseCardError;

    /// Parse whitespace separated card notation, e.g. `"S3 HT JK"`.
    /// Surrounding braces are accepted so `Display` output parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .trim_start_matches('{')
            .trim_end_matches('}')
            .split_whitespace()
            .map(str::parse::<Card>)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(text: &str) -> Cards {
        text.parse().unwrap()
    }

    #[test]
    fn test_distinguished_sets() {
        assert_eq!(Cards::THREES.count(), 4);
        assert_eq!(Cards::EIGHTS.count(), 4);
        assert_eq!(Cards::TWOS.count(), 4);
        assert_eq!(Cards::ALL.count(), 53);
        assert_eq!(Cards::D3, cards("D3"));
        assert_eq!(Cards::S3, cards("S3"));
        assert!(Cards::JOKER.has_joker());
        assert!(Cards::THREES.contains_all(Cards::D3 | Cards::S3));
    }

    #[test]
    fn test_set_algebra() {
        let a = cards("S3 H4 D5");
        let b = cards("H4 C9");
        assert_eq!((a | b).count(), 4);
        assert_eq!(a & b, cards("H4"));
        assert_eq!(a - b, cards("S3 D5"));
        assert!(a.intersects(b));
        assert!(a.is_disjoint(cards("C9 JK")));
        assert_eq!((!a).count(), 50);
    }

    #[test]
    fn test_rank_queries() {
        let hand = cards("S3 D3 H7 C7 S7 DK JK");
        assert_eq!(hand.count_rank(Rank::SEVEN), 3);
        assert_eq!(hand.distinct_ranks(), 3);
        assert_eq!(hand.lowest_rank(), Some(Rank::THREE));
        assert_eq!(hand.highest_rank(), Some(Rank::KING));
        assert_eq!(hand.strongest_rank(Order::Normal), Some(Rank::KING));
        assert_eq!(hand.strongest_rank(Order::Reversed), Some(Rank::THREE));
        assert_eq!(hand.weakest_rank(Order::Reversed), Some(Rank::KING));
        assert_eq!(Cards::JOKER.highest_rank(), None);
    }

    #[test]
    fn test_rank_range_inclusive_either_order() {
        let range = Cards::rank_range(Rank::NINE, Rank::FIVE);
        assert_eq!(range.count(), 20);
        assert!(range.contains(Card::new(Rank::FIVE, Suit::CLUB)));
        assert!(range.contains(Card::new(Rank::NINE, Suit::SPADE)));
        assert!(!range.contains(Card::new(Rank::TEN, Suit::SPADE)));
        assert!(!range.has_joker());
        assert_eq!(Cards::rank_range(Rank::THREE, Rank::TWO).count(), 52);
    }

    #[test]
    fn test_run_cards() {
        let hand = cards("S4 S5 S6 H9 HT C2 CA CK");
        let runs = hand.run_cards(3);
        assert_eq!(runs, cards("S4 S5 S6 CK CA C2"));
        assert!(cards("S4 S6 JK").run_cards(3).is_empty());
    }

    #[test]
    fn test_run_cards_longer_than_a_suit() {
        let hearts = Cards::from_rank_mask(0x1FFF, Suit::HEART);
        assert_eq!(hearts.run_cards(NUM_RANKS), hearts);
        assert!(hearts.run_cards(NUM_RANKS + 1).is_empty());
        assert!(Cards::ALL.run_cards(18).is_empty());
        assert!(Cards::ALL.run_cards(64).is_empty());
    }

    #[test]
    fn test_can_revolt() {
        assert!(cards("S9 H9 D9 C9").can_revolt());
        assert!(cards("S9 H9 D9 JK").can_revolt());
        assert!(!cards("S9 H9 D9 CT").can_revolt());
        assert!(cards("H4 H5 H6 H7 H8").can_revolt());
        assert!(cards("H4 H5 H7 H8 JK").can_revolt());
        assert!(!cards("H4 H5 H8 H9 JK").can_revolt());
        assert!(!Cards::EMPTY.can_revolt());
    }

    #[test]
    fn test_display_round_trip() {
        let hand = cards("S3 HT D2 JK");
        let text = hand.to_string();
        assert_eq!(text, "{S3 HT D2 JK}");
        assert_eq!(text.parse::<Cards>().unwrap(), hand);
        assert_eq!(hand.iter().count(), 4);
        assert!("S3 ZZ".parse::<Cards>().is_err());
    }
}
