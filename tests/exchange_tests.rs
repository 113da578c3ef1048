//! Exchange pre-filter and revolution preference tests.

use rust_daifugo::cards::{Cards, Order};
use rust_daifugo::core::{PlayerId, PlayerSet};
use rust_daifugo::field::{Board, FieldView};
use rust_daifugo::heuristics::{
    filter_exchange_candidates, revolution_preference, RevolutionPreference, NEVER_EXCHANGED,
};
use rust_daifugo::HeuristicError;

fn cards(text: &str) -> Cards {
    text.parse().unwrap()
}

/// A joker and S3 plus five ordinary cards, giving three away.
#[test]
fn test_joker_hand_exchange_pool() {
    let hand = cards("JK S3 H4 C6 D9 SJ HK");
    let pool = filter_exchange_candidates(hand, 3).unwrap();

    assert_eq!(pool, cards("H4 C6 D9 SJ HK"));
    assert!(pool.count() >= 3);
    assert!(!pool.has_joker());
    assert!(pool.is_disjoint(Cards::S3 | Cards::D3 | Cards::EIGHTS | Cards::TWOS));
}

#[test]
fn test_pool_never_grows() {
    let hand = cards("S4 H5 D6 C7 S9 HT DJ");
    let pool = filter_exchange_candidates(hand, 2).unwrap();
    assert_eq!(pool, hand);
    assert!(hand.contains_all(pool));
}

#[test]
fn test_two_card_exchange_from_strong_hand_fails() {
    let hand = cards("JK S3 D3 H2 C2 S8 H8 D4");
    let err = filter_exchange_candidates(hand, 2).unwrap_err();
    assert_eq!(err, HeuristicError::ExchangeShortfall { requested: 2, available: 1 });

    let single = filter_exchange_candidates(cards("JK S3 D3 H2"), 1).unwrap();
    assert_eq!(single, Cards::S3);
}

#[test]
fn test_never_exchanged_set() {
    assert_eq!(NEVER_EXCHANGED.count(), 4 + 4 + 1 + 1);
    assert!(NEVER_EXCHANGED.has_joker());
    assert!(NEVER_EXCHANGED.contains_all(Cards::D3));
    assert!(!NEVER_EXCHANGED.intersects(Cards::S3));
}

/// Eight seats with custom classes: me at seat 0 in the best position.
fn eight_seat_table(rivals: &[u8], order: Order) -> FieldView {
    let classes = [0u8, 6, 2, 7, 1, 5, 3, 4];
    let mut field = FieldView::new(8, PlayerId::new(0))
        .with_rivals(PlayerSet::from_players(rivals.iter().map(|&i| PlayerId::new(i))))
        .with_board(Board::contested(order));
    for (seat, class) in classes.into_iter().enumerate() {
        field = field.with_class(PlayerId::new(seat as u8), class);
    }
    field
}

#[test]
fn test_revolution_preference_eight_players() {
    // Seat 4 holds class 1, well above the opponents' mean of 4.
    let field = eight_seat_table(&[4], Order::Normal);
    assert_eq!(revolution_preference(&field), RevolutionPreference::Prefer);

    // Seat 3 holds class 7.
    let field = eight_seat_table(&[3], Order::Normal);
    assert_eq!(revolution_preference(&field), RevolutionPreference::Avoid);

    let field = eight_seat_table(&[3], Order::Reversed);
    assert_eq!(revolution_preference(&field), RevolutionPreference::Prefer);
}

#[test]
fn test_revolution_preference_ignores_self() {
    // Marking myself as a rival changes nothing.
    let field = eight_seat_table(&[0], Order::Normal);
    assert_eq!(revolution_preference(&field), RevolutionPreference::Indifferent);

    let with_self = eight_seat_table(&[0, 4], Order::Normal);
    let without = eight_seat_table(&[4], Order::Normal);
    assert_eq!(revolution_preference(&with_self), revolution_preference(&without));
}
