//! Thread-safe handle to a `Table`.
//!
//! Every call takes the lock for its whole duration, so classify, validate
//! and commit happen as one step no matter how many transport threads hold a
//! clone.

use std::sync::{Arc, Mutex, MutexGuard};

use super::facade::{DealtRound, Table};
use crate::cards::Deck;
use crate::core::{EngineError, Move, PlayerId, PublicState, Result};
use crate::rules::{MoveOutcome, RoundResult};

/// Shared, mutex-serialised table. Clones point at the same table.
#[derive(Clone, Debug)]
pub struct SharedTable {
    inner: Arc<Mutex<Table>>,
}

impl SharedTable {
    #[must_use]
    pub fn new(table: Table) -> Self {
        Self {
            inner: Arc::new(Mutex::new(table)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Table>> {
        self.inner.lock().map_err(|_| EngineError::LockPoisoned)
    }

    /// Run `f` with exclusive access to the table.
    pub fn with<T>(&self, f: impl FnOnce(&mut Table) -> T) -> Result<T> {
        let mut table = self.lock()?;
        Ok(f(&mut table))
    }

    pub fn start_round(&self, deck: Deck) -> Result<DealtRound> {
        self.lock()?.start_round(deck)
    }

    pub fn deal_shuffled(&self) -> Result<DealtRound> {
        self.lock()?.deal_shuffled()
    }

    pub fn propose_move(&self, player_index: usize, mv: Move) -> Result<MoveOutcome> {
        self.lock()?.propose_move(player_index, mv)
    }

    pub fn view(&self) -> Result<PublicState> {
        Ok(self.lock()?.view())
    }

    pub fn active_player(&self) -> Result<PlayerId> {
        Ok(self.lock()?.active_player())
    }

    pub fn summary(&self) -> Result<Option<RoundResult>> {
        Ok(self.lock()?.summary())
    }
}

impl From<Table> for SharedTable {
    fn from(table: Table) -> Self {
        Self::new(table)
    }
}
