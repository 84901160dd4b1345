//! Playing cards and the Big Two ordering.
//!
//! Cards store their rank the way a standard deck is laid out
//! (`A, 2, 3, ..., K` as `0..=12`). Big Two ranks differ: `3` is the lowest
//! and `2` the highest, so `A` and `2` are promoted by 13 when comparing.
//! Ties on rank are broken by suit: Diamond < Club < Heart < Spade.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::core::error::EngineError;

/// Card suit, in ascending Big Two order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Diamond = 0,
    Club = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    /// All suits, lowest first.
    pub const ALL: [Suit; 4] = [Suit::Diamond, Suit::Club, Suit::Heart, Suit::Spade];

    /// Suit from its storage index `0..=3`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Suit::Diamond),
            1 => Some(Suit::Club),
            2 => Some(Suit::Heart),
            3 => Some(Suit::Spade),
            _ => None,
        }
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Diamond => 'D',
            Suit::Club => 'C',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        Suit::ALL.into_iter().find(|s| s.symbol() == c.to_ascii_uppercase())
    }
}

/// Storage rank: `0 = A, 1 = 2, 2 = 3, ..., 12 = K`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(0);
    pub const TWO: Rank = Rank(1);
    pub const THREE: Rank = Rank(2);
    pub const FOUR: Rank = Rank(3);
    pub const FIVE: Rank = Rank(4);
    pub const SIX: Rank = Rank(5);
    pub const SEVEN: Rank = Rank(6);
    pub const EIGHT: Rank = Rank(7);
    pub const NINE: Rank = Rank(8);
    pub const TEN: Rank = Rank(9);
    pub const JACK: Rank = Rank(10);
    pub const QUEEN: Rank = Rank(11);
    pub const KING: Rank = Rank(12);

    /// Number of distinct ranks.
    pub const COUNT: u8 = 13;

    const SYMBOLS: [char; 13] = ['A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K'];

    #[must_use]
    pub const fn from_storage(storage: u8) -> Option<Self> {
        if storage < Self::COUNT {
            Some(Rank(storage))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn storage(self) -> u8 {
        self.0
    }

    /// Comparison rank: `A` and `2` sit above `K`.
    #[must_use]
    pub const fn game_value(self) -> u8 {
        if self.0 < 2 {
            self.0 + Self::COUNT
        } else {
            self.0
        }
    }

    #[must_use]
    pub fn symbol(self) -> char {
        Self::SYMBOLS[self.0 as usize]
    }

    fn from_symbol(c: char) -> Option<Self> {
        let c = c.to_ascii_uppercase();
        Self::SYMBOLS
            .iter()
            .position(|&s| s == c)
            .map(|i| Rank(i as u8))
    }
}

impl TryFrom<u8> for Rank {
    type Error = EngineError;

    fn try_from(storage: u8) -> Result<Self, Self::Error> {
        Rank::from_storage(storage).ok_or_else(|| EngineError::InvalidCard(format!("rank {storage}")))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.game_value().cmp(&other.game_value())
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A single playing card. Ordered by Big Two game order.
///
/// ```
/// use big_two::cards::Card;
///
/// let three: Card = "D3".parse().unwrap();
/// let deuce: Card = "S2".parse().unwrap();
/// let ace: Card = "HA".parse().unwrap();
/// assert!(three < ace && ace < deuce);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Build from raw storage indices (`suit 0..=3`, `rank 0..=12`).
    pub fn from_indices(suit: u8, rank: u8) -> Result<Self, EngineError> {
        match (Suit::from_index(suit), Rank::from_storage(rank)) {
            (Some(suit), Some(rank)) => Ok(Self { suit, rank }),
            _ => Err(EngineError::InvalidCard(format!("suit {suit}, rank {rank}"))),
        }
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.symbol(), self.rank.symbol())
    }
}

impl FromStr for Card {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let parsed = match (chars.next(), chars.next(), chars.next()) {
            (Some(suit), Some(rank), None) => Suit::from_symbol(suit).zip(Rank::from_symbol(rank)),
            _ => None,
        };
        parsed
            .map(|(suit, rank)| Card::new(suit, rank))
            .ok_or_else(|| EngineError::InvalidCard(s.to_string()))
    }
}
