//! Move records: a candidate play plus the classification flags computed
//! by move generation.
//!
//! The heuristics treat every flag as read-only except `deferred_win` and
//! `constrained`, which the root pruner attaches.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Cards, Order, Rank, Suit};

/// Structural type of a play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Pass,
    /// One card (natural or the lone joker).
    Single,
    /// Two or more cards of one rank.
    Group,
    /// Three or more consecutive ranks of one suit.
    Sequence,
}

/// The play itself: what goes on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Play {
    kind: MoveKind,
    cards: Cards,
    qty: u8,
    /// Group rank, or the lowest rank of a sequence. `Rank::JOKER` for a
    /// lone joker, meaningless for a pass.
    rank: Rank,
    /// Suit pattern as a 4-bit mask, including any suit the joker stands for.
    suits: u8,
}

impl Play {
    #[must_use]
    pub const fn pass() -> Self {
        Play {
            kind: MoveKind::Pass,
            cards: Cards::EMPTY,
            qty: 0,
            rank: Rank::THREE,
            suits: 0,
        }
    }

    /// A single card. The joker is played as the lone-joker single.
    #[must_use]
    pub fn single(card: Card) -> Self {
        Play {
            kind: MoveKind::Single,
            cards: Cards::of_card(card),
            qty: 1,
            rank: card.rank(),
            suits: card.suit().map_or(0, Suit::mask),
        }
    }

    /// A group of one rank. The rank comes from the natural cards; if the
    /// joker is included it stands for the lowest suit not already present.
    ///
    /// Use `Play::new` when move generation picked a different suit for
    /// the joker.
    #[must_use]
    pub fn group(cards: Cards) -> Self {
        let rank = cards.lowest_rank().unwrap_or(Rank::JOKER);
        let mut suits = cards
            .natural()
            .iter()
            .filter_map(Card::suit)
            .fold(0u8, |acc, suit| acc | suit.mask());
        if cards.has_joker() {
            if let Some(free) = Suit::all().find(|suit| suits & suit.mask() == 0) {
                suits |= free.mask();
            }
        }
        Play::new(MoveKind::Group, cards, rank, suits)
    }

    /// A same-suit run whose lowest rank is `low`. The joker, if present,
    /// fills whichever slot `low` and the card count imply.
    #[must_use]
    pub fn sequence(cards: Cards, low: Rank, suit: Suit) -> Self {
        Play::new(MoveKind::Sequence, cards, low, suit.mask())
    }

    /// Fully specified play.
    #[must_use]
    pub fn new(kind: MoveKind, cards: Cards, rank: Rank, suits: u8) -> Self {
        Play {
            kind,
            cards,
            qty: cards.count() as u8,
            rank,
            suits,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn cards(&self) -> Cards {
        self.cards
    }

    #[inline]
    #[must_use]
    pub const fn qty(&self) -> usize {
        self.qty as usize
    }

    #[inline]
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[inline]
    #[must_use]
    pub const fn suits(&self) -> u8 {
        self.suits
    }

    #[inline]
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self.kind, MoveKind::Pass)
    }

    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self.kind, MoveKind::Sequence)
    }
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            MoveKind::Pass => write!(f, "PASS"),
            _ => write!(f, "{:?}{}", self.kind, self.cards),
        }
    }
}

/// Classification flags computed once by move generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveFlags {
    /// The play triggers a revolution.
    pub flips_order: bool,
    /// The play triggers the rank-8 immediate discard.
    pub clears_field: bool,
    /// No opponent can answer the play.
    pub dominates_others: bool,
    /// No opponent can answer the play whatever the joker stands for.
    pub dominates_inevitably: bool,
    /// The acting player cannot follow the play themselves.
    pub dominates_self: bool,
    /// The play forces an eventual win.
    pub is_mate: bool,
    /// The play wins under the two-players-left terminal condition.
    pub is_terminal_mate: bool,
    /// The win holds whatever is drawn later.
    pub is_forced_win: bool,
    /// After the play, an opponent's lead on the next empty field
    /// dominates the acting player's followers.
    pub exposes_empty_field: bool,
    /// The play permanently dominates an empty field.
    pub holds_empty_field: bool,
}

/// A candidate move: the play, its flags, and engine-attached markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInfo {
    play: Play,
    flags: MoveFlags,
    /// Change in the minimal number of plays needed to empty the hand.
    min_melds_delta: i32,
    deferred_win: bool,
    constrained: bool,
}

impl MoveInfo {
    #[must_use]
    pub fn new(play: Play) -> Self {
        Self {
            play,
            flags: MoveFlags::default(),
            min_melds_delta: 0,
            deferred_win: false,
            constrained: false,
        }
    }

    #[must_use]
    pub fn pass() -> Self {
        Self::new(Play::pass())
    }

    #[must_use]
    pub fn with_flags(mut self, flags: MoveFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_min_melds_delta(mut self, delta: i32) -> Self {
        self.min_melds_delta = delta;
        self
    }

    #[must_use]
    pub fn mate(mut self) -> Self {
        self.flags.is_mate = true;
        self
    }

    #[must_use]
    pub fn terminal_mate(mut self) -> Self {
        self.flags.is_terminal_mate = true;
        self
    }

    #[must_use]
    pub fn forced_win(mut self) -> Self {
        self.flags.is_forced_win = true;
        self
    }

    #[must_use]
    pub fn dominating(mut self) -> Self {
        self.flags.dominates_others = true;
        self
    }

    /// Marks inevitable dominance, which implies plain dominance.
    #[must_use]
    pub fn inevitable(mut self) -> Self {
        self.flags.dominates_others = true;
        self.flags.dominates_inevitably = true;
        self
    }

    #[must_use]
    pub fn dominating_self(mut self) -> Self {
        self.flags.dominates_self = true;
        self
    }

    #[must_use]
    pub fn flipping_order(mut self) -> Self {
        self.flags.flips_order = true;
        self
    }

    #[must_use]
    pub fn clearing_field(mut self) -> Self {
        self.flags.clears_field = true;
        self
    }

    #[must_use]
    pub fn exposing_empty_field(mut self) -> Self {
        self.flags.exposes_empty_field = true;
        self
    }

    #[must_use]
    pub fn holding_empty_field(mut self) -> Self {
        self.flags.holds_empty_field = true;
        self
    }

    #[inline]
    #[must_use]
    pub const fn play(&self) -> Play {
        self.play
    }

    #[inline]
    #[must_use]
    pub const fn flags(&self) -> &MoveFlags {
        &self.flags
    }

    #[inline]
    #[must_use]
    pub const fn cards(&self) -> Cards {
        self.play.cards
    }

    #[inline]
    #[must_use]
    pub const fn qty(&self) -> usize {
        self.play.qty()
    }

    #[inline]
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.play.rank
    }

    #[inline]
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        self.play.is_pass()
    }

    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        self.play.is_sequence()
    }

    #[inline]
    #[must_use]
    pub const fn uses_joker(&self) -> bool {
        self.play.cards.has_joker()
    }

    #[inline]
    #[must_use]
    pub const fn min_melds_delta(&self) -> i32 {
        self.min_melds_delta
    }

    /// The play flips the order or clears the field.
    #[inline]
    #[must_use]
    pub const fn changes_persistent_state(&self) -> bool {
        self.flags.flips_order || self.flags.clears_field
    }

    /// Same structural type, quantity and suit pattern.
    #[must_use]
    pub fn same_shape(&self, other: &MoveInfo) -> bool {
        self.play.kind == other.play.kind
            && self.play.qty == other.play.qty
            && self.play.suits == other.play.suits
    }

    /// Temp order once this play is on the table.
    #[must_use]
    pub const fn order_after(&self, order: Order) -> Order {
        if self.flags.flips_order {
            order.flipped()
        } else {
            order
        }
    }

    /// The hand still holds a dominant follow-up or a favourable empty
    /// field after this play. Set by the root pruner.
    #[inline]
    #[must_use]
    pub const fn is_deferred_win(&self) -> bool {
        self.deferred_win
    }

    pub fn set_deferred_win(&mut self) {
        self.deferred_win = true;
    }

    /// Later plays must respect a constraint attached during pruning.
    #[inline]
    #[must_use]
    pub const fn is_constrained(&self) -> bool {
        self.constrained
    }

    pub fn set_constrained(&mut self) {
        self.constrained = true;
    }
}

impl std::fmt::Display for MoveInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.play)
    }
}
