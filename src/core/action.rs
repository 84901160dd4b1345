//! Moves and the per-round move log.
//!
//! A move is either a pass or a play of already-resolved cards. Turning UI
//! indices into cards is the caller's job (`Table::select` helps).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::player::PlayerId;
use crate::cards::Card;
use crate::hands::Hand;

/// Cards a player puts forward. Inline up to five, the largest legal hand.
pub type Selection = SmallVec<[Card; 5]>;

/// A proposed move.
///
/// ```
/// use big_two::core::Move;
///
/// let open = Move::play(["D3".parse().unwrap()]);
/// assert!(!open.is_pass());
/// assert!(Move::Pass.is_pass());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Pass,
    Play(Selection),
}

impl Move {
    /// Play the given cards.
    pub fn play(cards: impl IntoIterator<Item = Card>) -> Self {
        Move::Play(cards.into_iter().collect())
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }
}

/// An accepted move, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub player: PlayerId,

    /// `None` for a pass.
    pub hand: Option<Hand>,

    /// Position within the round, starting at 0.
    pub sequence: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: PlayerId, hand: Option<Hand>, sequence: u32) -> Self {
        Self {
            player,
            hand,
            sequence,
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.hand {
            Some(hand) => write!(f, "{hand}"),
            None => f.write_str("{Pass}"),
        }
    }
}
