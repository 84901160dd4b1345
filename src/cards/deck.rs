//! The 52-card deck and round-robin dealing.

use rustc_hash::FxHashSet;
use serde::Serialize;

use super::card::{Card, Rank, Suit};
use crate::core::error::{EngineError, Result};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;

/// Exactly the 52 distinct cards, in some order.
///
/// Only `build` and `from_cards` create decks, so the invariant holds for
/// every value of this type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub const SIZE: usize = 52;

    /// Fresh deck: suit-major, then storage rank (`DA D2 D3 ... SK`).
    #[must_use]
    pub fn build() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| {
                (0..Rank::COUNT)
                    .filter_map(Rank::from_storage)
                    .map(move |rank| Card::new(suit, rank))
            })
            .collect();
        Self { cards }
    }

    /// Fresh deck in a random order.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::build();
        deck.shuffle(rng);
        deck
    }

    /// Accept a pre-arranged order from outside, checking it is a full deck.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        if cards.len() != Self::SIZE {
            return Err(EngineError::DeckSize(cards.len()));
        }
        let mut seen = FxHashSet::default();
        for &card in &cards {
            if !seen.insert(card) {
                return Err(EngineError::DuplicateInDeck(card));
            }
        }
        Ok(Self { cards })
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
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
    pub fn card(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Deal card `i` to seat `i % player_count`, consuming the deck.
    ///
    /// Hands come back in deal order; callers sort them.
    #[must_use]
    pub fn deal(self, player_count: usize) -> PlayerMap<Vec<Card>> {
        let mut hands: PlayerMap<Vec<Card>> =
            PlayerMap::new(player_count, |_| Vec::with_capacity(Self::SIZE / player_count));
        for (i, card) in self.cards.into_iter().enumerate() {
            hands[PlayerId::new((i % player_count) as u8)].push(card);
        }
        hands
    }
}
