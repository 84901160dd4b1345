//! Table configuration.
//!
//! The bootstrap layer builds a `TableConfig` (or loads one from JSON) and
//! hands it to `Table::new`. Everything has a default, so tests usually
//! start from `TableConfig::default()` and override with `with_*`.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use crate::cards::{Card, Rank, Suit};

/// Seats at a Big Two table.
pub const PLAYER_COUNT: usize = 4;

/// Configuration for one table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Display names, one per seat.
    pub player_names: Vec<String>,

    /// Card that must appear in the first hand of every round.
    /// Its holder opens the round.
    pub opening_card: Card,

    /// Seed for `Table::deal_shuffled`. `None` draws from entropy.
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            player_names: (0..PLAYER_COUNT).map(|i| format!("Player {i}")).collect(),
            opening_card: Card::new(Suit::Diamond, Rank::THREE),
            shuffle_seed: None,
        }
    }
}

impl TableConfig {
    /// Replace the seat names.
    pub fn with_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Use a fixed shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    pub fn with_opening_card(mut self, card: Card) -> Self {
        self.opening_card = card;
        self
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        PLAYER_COUNT
    }

    /// Check the config describes a playable table.
    pub fn validate(&self) -> Result<()> {
        if self.player_names.len() != PLAYER_COUNT {
            return Err(EngineError::SeatCount {
                expected: PLAYER_COUNT,
                found: self.player_names.len(),
            });
        }
        Ok(())
    }
}
