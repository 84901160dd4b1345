//! Move rejections and structural faults.
//!
//! Every engine call ends in one of two disjoint ways:
//!
//! - [`RejectReason`]: the move broke a game rule. Expected, user-facing,
//!   and never changes state; the same player may retry.
//! - [`EngineError`]: the caller broke the engine's contract (bad deck,
//!   bad seat index, move after the round ended). The call is aborted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerId;
use crate::cards::Card;

/// Why a proposed move was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RejectReason {
    #[error("not your turn: {active} is to act")]
    NotYourTurn { active: PlayerId },
    #[error("can't pass: nothing on the table to answer")]
    PassOnEmptyTable,
    #[error("can't pass: you hold the lead")]
    PassOnOwnLead,
    #[error("no cards selected")]
    EmptySelection,
    #[error("{0} is not in your hand")]
    CardNotHeld(Card),
    #[error("{0} selected more than once")]
    DuplicateCard(Card),
    #[error("{count} cards do not form a valid hand")]
    InvalidCombination { count: usize },
    #[error("the opening hand must contain {0}")]
    MissingOpeningCard(Card),
    #[error("expected {expected} cards, got {found}")]
    WrongCardCount { expected: usize, found: usize },
    #[error("does not beat the hand on the table")]
    DoesNotBeat,
}

/// Caller contract violations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("malformed deck: expected 52 cards, found {0}")]
    DeckSize(usize),
    #[error("malformed deck: {0} appears more than once")]
    DuplicateInDeck(Card),
    #[error("player index {index} out of range for {player_count} players")]
    PlayerOutOfRange { index: usize, player_count: usize },
    #[error("card index {index} out of range for a hand of {len}")]
    CardIndexOutOfRange { index: usize, len: usize },
    #[error("invalid card {0:?}")]
    InvalidCard(String),
    #[error("expected {expected} seat names, found {found}")]
    SeatCount { expected: usize, found: usize },
    #[error("{0} was not dealt to any seat")]
    OpeningCardNotDealt(Card),
    #[error("no round has been dealt")]
    RoundNotStarted,
    #[error("the round is already over")]
    RoundOver,
    #[error("no unique group of {0} equal ranks to take a top card from")]
    AmbiguousTopCard(usize),
    #[error("table lock poisoned")]
    LockPoisoned,
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
