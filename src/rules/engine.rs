//! Rules engine trait for turn-based shedding games.
//!
//! Games implement `RulesEngine` to define their rules:
//! - How a deck is dealt and who opens
//! - Which moves are legal
//! - How moves modify state
//! - When the round ends

use serde::Serialize;

use crate::cards::{Card, Deck};
use crate::core::action::Move;
use crate::core::config::TableConfig;
use crate::core::error::{RejectReason, Result};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::state::GameState;
use crate::hands::Hand;

/// What happened to a proposed move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum MoveOutcome {
    /// The hand was committed to the pile.
    Played(Hand),
    /// The pass was accepted.
    Passed,
    /// The move broke a rule. Nothing changed; the same seat may retry.
    Rejected(RejectReason),
}

impl MoveOutcome {
    /// Check if the move changed the round.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }

    #[must_use]
    pub fn rejection(&self) -> Option<&RejectReason> {
        match self {
            MoveOutcome::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Result of a finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub winner: PlayerId,

    /// Cards left in every hand; zero for the winner.
    pub cards_left: PlayerMap<u32>,
}

impl RoundResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }

    /// End-of-round lines, winner first, then every other seat's count.
    #[must_use]
    pub fn lines(&self, names: &PlayerMap<String>) -> Vec<String> {
        let mut lines = vec![format!("{} wins the game.", names[self.winner])];
        lines.extend(
            self.cards_left
                .iter()
                .filter(|(p, _)| *p != self.winner)
                .map(|(p, n)| format!("{} has {} cards in hand.", names[p], n)),
        );
        lines
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `check_play`: pure, never touches state
/// - `apply_move`: rule violations come back as `MoveOutcome::Rejected`
///   with state untouched; `Err` is for caller contract violations
/// - `is_terminal`: return None while the round continues
pub trait RulesEngine {
    /// Get the table configuration.
    fn config(&self) -> &TableConfig;

    /// Deal `deck` into `state`, starting a new round.
    ///
    /// Returns the opening seat.
    fn deal(&self, state: &mut GameState, deck: Deck) -> Result<PlayerId>;

    /// Whether `player` may pass right now.
    fn can_pass(&self, state: &GameState, player: PlayerId) -> bool;

    /// Validate a play without committing it.
    fn check_play(
        &self,
        state: &GameState,
        player: PlayerId,
        selection: &[Card],
    ) -> std::result::Result<Hand, RejectReason>;

    /// Validate and commit a move.
    fn apply_move(&self, state: &mut GameState, player: PlayerId, mv: &Move) -> Result<MoveOutcome>;

    /// Check if the round is over.
    fn is_terminal(&self, state: &GameState) -> Option<RoundResult>;
}
