//! Shared helpers for integration tests.

#![allow(dead_code)]

use big_two::{Card, Deck, Suit};

const RANKS: &str = "A23456789TJQK";

/// Parse a space-separated card list such as `"D3 C3 S2"`.
pub fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace().map(|c| c.parse().unwrap()).collect()
}

/// All thirteen cards of one suit, as text.
pub fn whole_suit(suit: Suit) -> String {
    RANKS
        .chars()
        .map(|rank| format!("{}{}", suit.symbol(), rank))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A deck that deals `hands[p]` to seat `p`.
///
/// Dealing is round-robin, so card `i` of seat `p` goes at `i * 4 + p`.
pub fn arranged_deck(hands: [&str; 4]) -> Deck {
    let hands: Vec<Vec<Card>> = hands.iter().map(|h| cards(h)).collect();
    for (seat, hand) in hands.iter().enumerate() {
        assert_eq!(hand.len(), 13, "seat {seat} needs 13 cards");
    }

    let mut order = Vec::with_capacity(Deck::SIZE);
    for i in 0..13 {
        for hand in &hands {
            order.push(hand[i]);
        }
    }
    Deck::from_cards(order).unwrap()
}

/// Seat 0 gets every diamond, seat 1 every club, and so on.
pub fn suited_deck() -> Deck {
    let suits: Vec<String> = Suit::ALL.into_iter().map(whole_suit).collect();
    arranged_deck([&suits[0], &suits[1], &suits[2], &suits[3]])
}
