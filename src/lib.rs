//! # big-two
//!
//! Rules engine for four-player Big Two.
//!
//! ## Design Principles
//!
//! 1. **Closed Hand Set**: Eight categories, one classifier that builds
//!    `Hand` values, one exhaustive comparator.
//!
//! 2. **Rejections Are Values**: A move that breaks a rule comes back as
//!    `MoveOutcome::Rejected` and never touches state. `Err` is reserved for
//!    callers breaking the engine's contract.
//!
//! 3. **Engine Owns the Round**: Observers get snapshots; every mutation goes
//!    through `Table::propose_move`.
//!
//! ## Modules
//!
//! - `core`: Seats, state, moves, RNG, configuration, errors
//! - `cards`: Cards, game order, the deck
//! - `hands`: Classification and comparison
//! - `rules`: `RulesEngine` trait
//! - `games`: The Big Two turn engine
//! - `table`: `Table` and `SharedTable`, the adapter-facing façade
//!
//! ## Example
//!
//! ```
//! use big_two::{Deck, Move, Table, TableConfig};
//!
//! let mut table = Table::new(TableConfig::default()).unwrap();
//! let dealt = table.start_round(Deck::build()).unwrap();
//! let opener = dealt.opening_player.index();
//!
//! // The opener's lowest card is D3.
//! let open = table.select(opener, &[0]).unwrap();
//! let outcome = table.propose_move(opener, Move::Play(open)).unwrap();
//! assert!(outcome.is_accepted());
//! ```

pub mod cards;
pub mod core;
pub mod games;
pub mod hands;
pub mod rules;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    EngineError, GameRng, GameState, Move, MoveRecord, Phase, PlayerId, PlayerMap, PublicState,
    RejectReason, Result, Selection, TableConfig, PLAYER_COUNT,
};

pub use crate::cards::{Card, Deck, Rank, Suit};

pub use crate::hands::{classify, Hand, HandCategory};

pub use crate::rules::{MoveOutcome, RoundResult, RulesEngine};

pub use crate::games::BigTwo;

pub use crate::table::{DealtRound, SharedTable, Table};
