//! Subjective per-player snapshot of the game at a decision point.
//!
//! The search driver builds a fresh `FieldView` every turn; the
//! heuristics only read it.
//!
//! ```
//! use rust_daifugo::cards::{Cards, Order};
//! use rust_daifugo::core::PlayerId;
//! use rust_daifugo::field::{Board, FieldView};
//!
//! let me = PlayerId::new(0);
//! let field = FieldView::new(5, me)
//!     .with_my_cards("S3 H7 D7 CK".parse::<Cards>().unwrap())
//!     .with_board(Board::empty(Order::Normal));
//!
//! assert_eq!(field.card_count(me), 4);
//! assert_eq!(field.n_alive(), 5);
//! ```

use serde::{Deserialize, Serialize};

use super::board::Board;
use crate::cards::Cards;
use crate::core::{PlayerId, PlayerMap, PlayerSet};

/// Read-only view of the field for the acting player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldView {
    me: PlayerId,
    alive: PlayerSet,
    rivals: PlayerSet,
    /// Finish class per seat; larger is a worse standing.
    classes: PlayerMap<u8>,
    card_counts: PlayerMap<u8>,
    my_cards: Cards,
    /// Union of every opponent's remaining cards, as far as known.
    ops_cards: Cards,
    board: Board,
}

impl FieldView {
    /// A table of `player_count` seats, everyone alive, no rivals, class
    /// equal to seat index, empty hands, empty field under normal order.
    #[must_use]
    pub fn new(player_count: usize, me: PlayerId) -> Self {
        assert!(
            me.index() < player_count,
            "acting player {me} outside a {player_count}-seat table"
        );
        Self {
            me,
            alive: PlayerSet::full(player_count),
            rivals: PlayerSet::EMPTY,
            classes: PlayerMap::new(player_count, |p| p.0),
            card_counts: PlayerMap::with_value(player_count, 0),
            my_cards: Cards::EMPTY,
            ops_cards: Cards::EMPTY,
            board: Board::default(),
        }
    }

    #[must_use]
    pub fn with_alive(mut self, alive: PlayerSet) -> Self {
        self.alive = alive;
        self
    }

    #[must_use]
    pub fn with_rivals(mut self, rivals: PlayerSet) -> Self {
        self.rivals = rivals;
        self
    }

    #[must_use]
    pub fn with_class(mut self, player: PlayerId, class: u8) -> Self {
        self.classes[player] = class;
        self
    }

    #[must_use]
    pub fn with_card_count(mut self, player: PlayerId, count: u8) -> Self {
        self.card_counts[player] = count;
        self
    }

    /// Set the acting player's hand, keeping their card count in sync.
    #[must_use]
    pub fn with_my_cards(mut self, cards: Cards) -> Self {
        self.my_cards = cards;
        self.card_counts[self.me] = cards.count() as u8;
        self
    }

    #[must_use]
    pub fn with_ops_cards(mut self, cards: Cards) -> Self {
        self.ops_cards = cards;
        self
    }

    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    #[inline]
    #[must_use]
    pub fn me(&self) -> PlayerId {
        self.me
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.classes.player_count()
    }

    #[must_use]
    pub fn alive(&self) -> PlayerSet {
        self.alive
    }

    #[must_use]
    pub fn rivals(&self) -> PlayerSet {
        self.rivals
    }

    #[must_use]
    pub fn is_alive(&self, player: PlayerId) -> bool {
        self.alive.contains(player)
    }

    /// Number of players still holding cards, the acting player included.
    #[must_use]
    pub fn n_alive(&self) -> usize {
        self.alive.len()
    }

    /// Every seat is still in the hand.
    #[must_use]
    pub fn all_alive(&self) -> bool {
        self.n_alive() == self.player_count()
    }

    #[must_use]
    pub fn class_of(&self, player: PlayerId) -> u8 {
        self.classes[player]
    }

    #[must_use]
    pub fn card_count(&self, player: PlayerId) -> usize {
        usize::from(self.card_counts[player])
    }

    #[inline]
    #[must_use]
    pub fn my_cards(&self) -> Cards {
        self.my_cards
    }

    #[inline]
    #[must_use]
    pub fn ops_cards(&self) -> Cards {
        self.ops_cards
    }

    /// Every card still in someone's hand.
    #[inline]
    #[must_use]
    pub fn remaining_cards(&self) -> Cards {
        self.my_cards | self.ops_cards
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }
}
