//! Hand classification.
//!
//! `classify` is the single construction site for [`Hand`]. Returning
//! `None` is the normal answer for an illegal combination, not a fault.
//!
//! Five-card hands are tried in precedence order: straight flush, quad,
//! full house, flush, straight.

use rustc_hash::FxHashMap;

use super::category::HandCategory;
use super::hand::{grouped_top_card, Hand, HandCards};
use crate::cards::{Card, Rank};
use crate::core::player::PlayerId;

/// Classify `selection` as a hand owned by `owner`.
///
/// ```
/// use big_two::cards::Card;
/// use big_two::core::PlayerId;
/// use big_two::hands::{classify, HandCategory};
///
/// let cards: Vec<Card> = ["D9", "C9", "H9", "S4", "D4"]
///     .iter()
///     .map(|c| c.parse().unwrap())
///     .collect();
/// let hand = classify(PlayerId::new(0), &cards).unwrap();
/// assert_eq!(hand.category(), HandCategory::FullHouse);
/// ```
#[must_use]
pub fn classify(owner: PlayerId, selection: &[Card]) -> Option<Hand> {
    // Sizes 4 and 6+ have no category; bail before any scanning.
    if !matches!(selection.len(), 1 | 2 | 3 | 5) {
        return None;
    }

    let mut cards: HandCards = selection.iter().copied().collect();
    cards.sort_unstable();
    if cards.windows(2).any(|w| w[0] == w[1]) {
        return None;
    }

    let (category, top) = match cards.len() {
        1 => (HandCategory::Single, cards[0]),
        2 if all_same_rank(&cards) => (HandCategory::Pair, cards[1]),
        3 if all_same_rank(&cards) => (HandCategory::Triple, cards[2]),
        5 => classify_five(&cards)?,
        _ => return None,
    };

    Some(Hand::new(owner, category, cards, top))
}

/// Category alone, for callers that only need the tag.
#[must_use]
pub fn category_of(selection: &[Card]) -> Option<HandCategory> {
    classify(PlayerId::new(0), selection).map(|h| h.category())
}

/// `cards` must be sorted by game order.
fn classify_five(cards: &[Card]) -> Option<(HandCategory, Card)> {
    let highest = cards[cards.len() - 1];
    let flush = all_same_suit(cards);
    let run = is_run(cards);

    if flush && run {
        return Some((HandCategory::StraightFlush, highest));
    }

    let shape = rank_shape(cards);
    // Shapes come from the same tallies grouped_top_card uses, so the
    // lookups below cannot miss.
    match shape.as_slice() {
        [4, 1] => return grouped_top_card(cards, 4).ok().map(|top| (HandCategory::Quad, top)),
        [3, 2] => {
            return grouped_top_card(cards, 3)
                .ok()
                .map(|top| (HandCategory::FullHouse, top))
        }
        _ => {}
    }

    if flush {
        Some((HandCategory::Flush, highest))
    } else if run {
        Some((HandCategory::Straight, highest))
    } else {
        None
    }
}

fn all_same_rank(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].rank() == w[1].rank())
}

fn all_same_suit(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].suit() == w[1].suit())
}

/// Consecutive run over storage ranks, wrapping `K -> A` modulo 13.
///
/// `cards` must be sorted by game order. Each card's storage rank must be
/// the lowest card's storage rank plus its position, mod 13. Because the
/// sort is by game order while the step is by storage rank, `J Q K A 2`
/// and `T J Q K A` pass but `Q K A 2 3` and `A 2 3 4 5` do not.
fn is_run(cards: &[Card]) -> bool {
    let base = cards[0].rank().storage();
    cards
        .iter()
        .enumerate()
        .all(|(i, c)| c.rank().storage() == (base + i as u8) % Rank::COUNT)
}

/// Group sizes of equal ranks, largest first (`[3, 2]` for a full house).
fn rank_shape(cards: &[Card]) -> Vec<u8> {
    let mut tally: FxHashMap<Rank, u8> = FxHashMap::default();
    for card in cards {
        *tally.entry(card.rank()).or_insert(0) += 1;
    }
    let mut shape: Vec<u8> = tally.into_values().collect();
    shape.sort_unstable_by(|a, b| b.cmp(a));
    shape
}
