//! Core engine types: seats, state, moves, RNG, configuration, errors.
//!
//! Nothing in here knows how hands rank; that lives in `hands`. The turn
//! rules that tie these types together live in `games::big_two`.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, MoveRecord, Selection};
pub use config::{TableConfig, PLAYER_COUNT};
pub use error::{EngineError, RejectReason, Result};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{GameState, Phase, PublicState};
