//! Classified hands.
//!
//! A `Hand` is the only way cards reach the table. Its fields are private
//! and the constructor is crate-only: `classify` is the one place that
//! builds hands, so every `Hand` value carries a category its cards
//! actually form.

use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

use super::category::HandCategory;
use crate::cards::{Card, Suit};
use crate::core::error::{EngineError, Result};
use crate::core::player::PlayerId;

/// Cards of a hand; never more than five.
pub type HandCards = SmallVec<[Card; 5]>;

/// A legal combination played (or about to be played) by one seat.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Hand {
    owner: PlayerId,
    category: HandCategory,
    /// Sorted ascending by game order.
    cards: HandCards,
    top: Card,
}

impl Hand {
    pub(crate) fn new(owner: PlayerId, category: HandCategory, cards: HandCards, top: Card) -> Self {
        debug_assert_eq!(cards.len(), category.card_count());
        Self {
            owner,
            category,
            cards,
            top,
        }
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Cards in ascending game order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Card used to rank this hand against another of the same category.
    ///
    /// For full houses and quads this is the highest-suited card of the
    /// triple/quad rank, never the pair or the kicker.
    #[must_use]
    pub fn top_card(&self) -> Card {
        self.top
    }

    /// Suit shared by every card, if there is one.
    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        let first = self.cards.first()?.suit();
        self.cards.iter().all(|c| c.suit() == first).then_some(first)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.category)?;
        for card in &self.cards {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}

/// Highest card of the rank that appears exactly `group_size` times.
///
/// Fails if no rank, or more than one rank, appears that many times: the
/// top card would be a guess.
pub fn grouped_top_card(cards: &[Card], group_size: usize) -> Result<Card> {
    let mut group_rank = None;
    for card in cards {
        let count = cards.iter().filter(|c| c.rank() == card.rank()).count();
        if count != group_size {
            continue;
        }
        match group_rank {
            None => group_rank = Some(card.rank()),
            Some(rank) if rank == card.rank() => {}
            Some(_) => return Err(EngineError::AmbiguousTopCard(group_size)),
        }
    }
    let rank = group_rank.ok_or(EngineError::AmbiguousTopCard(group_size))?;
    cards
        .iter()
        .copied()
        .filter(|c| c.rank() == rank)
        .max()
        .ok_or(EngineError::AmbiguousTopCard(group_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn test_grouped_top_card_ignores_higher_pair() {
        let full_house = cards("D4 C4 S4 H2 S2");
        assert_eq!(grouped_top_card(&full_house, 3).unwrap(), "S4".parse().unwrap());
    }

    #[test]
    fn test_grouped_top_card_ignores_kicker() {
        let quad = cards("D9 C9 H9 S9 S2");
        assert_eq!(grouped_top_card(&quad, 4).unwrap(), "S9".parse().unwrap());
    }

    #[test]
    fn test_grouped_top_card_without_group_is_a_fault() {
        let straight = cards("D3 C4 H5 S6 D7");
        assert_eq!(
            grouped_top_card(&straight, 3),
            Err(EngineError::AmbiguousTopCard(3))
        );
    }

    #[test]
    fn test_grouped_top_card_with_two_groups_is_a_fault() {
        let two_pairs = cards("D3 C3 H5 S5");
        assert_eq!(
            grouped_top_card(&two_pairs, 2),
            Err(EngineError::AmbiguousTopCard(2))
        );
    }

    #[test]
    fn test_display_matches_move_log_format() {
        let hand = Hand::new(
            PlayerId::new(1),
            HandCategory::Pair,
            cards("D5 S5").into_iter().collect(),
            "S5".parse().unwrap(),
        );
        assert_eq!(hand.to_string(), "{Pair} D5 S5");
        assert_eq!(hand.suit(), None);
    }
}
