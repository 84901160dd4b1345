//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Dealing and the opening seat
//! - How moves are checked and committed
//! - End-of-round conditions
//!
//! `Table` drives a `RulesEngine` but never interprets hand rankings itself.

pub mod engine;

pub use engine::{MoveOutcome, RoundResult, RulesEngine};
