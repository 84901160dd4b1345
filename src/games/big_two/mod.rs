//! Big Two for four seats.
//!
//! - The deck is dealt round-robin, 13 cards each
//! - Whoever holds D3 opens, and the opening hand must contain it
//! - Each turn: beat the hand on the table with one of the same size, or pass
//! - When everyone else passes, the last player to play leads anything
//! - First seat to empty its hand wins the round

mod game;

pub use game::BigTwo;
