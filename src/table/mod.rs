//! The table façade adapters talk to.
//!
//! ## Key Types
//!
//! - `Table`: owns the round state; `&mut self` for every mutation
//! - `SharedTable`: `Arc<Mutex<Table>>` for multi-threaded adapters
//! - `DealtRound`: hands and opener from a fresh deal

mod facade;
mod shared;

pub use facade::{DealtRound, Table};
pub use shared::SharedTable;
