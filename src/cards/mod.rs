//! Cards and decks.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: card components; `Rank` keeps the storage encoding
//!   (`A = 0 ... K = 12`) and exposes the Big Two comparison value
//! - `Card`: immutable card value, totally ordered by game order
//! - `Deck`: exactly 52 unique cards, shuffled and dealt round-robin

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
