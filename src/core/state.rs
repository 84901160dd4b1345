//! Round state: public and private information.
//!
//! ## PublicState
//!
//! Observable information for every seat and any spectator:
//! - Phase, round number, active seat
//! - The table pile and the move log
//! - Card counts per seat
//!
//! ## GameState
//!
//! Complete round state:
//! - Public state
//! - Private hands, kept sorted by game order

use im::Vector;
use serde::Serialize;

use super::action::MoveRecord;
use super::player::{PlayerId, PlayerMap};
use crate::cards::Card;
use crate::hands::Hand;

/// Where a round is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// Nothing dealt yet.
    Idle,
    /// Cards dealt, opening hand not yet played.
    AwaitingOpen,
    /// At least one hand is on the table.
    AwaitingFollow,
    /// A seat has emptied its hand.
    RoundOver,
}

/// Public round state - observable by all seats.
///
/// Uses `im` persistent vectors so a snapshot is an O(1) clone.
#[derive(Clone, Debug, Serialize)]
pub struct PublicState {
    player_count: usize,

    // === Progression ===
    pub phase: Phase,

    /// Rounds dealt this session (starts at 0, first deal makes it 1).
    pub round_number: u32,

    /// Seat whose turn it is.
    pub active_player: PlayerId,

    /// Set once the round is over.
    pub winner: Option<PlayerId>,

    // === Seats ===
    pub player_names: PlayerMap<String>,

    /// Cards left per seat.
    pub hand_sizes: PlayerMap<u32>,

    // === Table ===
    /// Hands played this round, oldest first. The last one is to beat.
    pub pile: Vector<Hand>,

    /// Accepted plays and passes this round.
    pub history: Vector<MoveRecord>,
}

impl PublicState {
    #[must_use]
    pub fn new(player_names: PlayerMap<String>) -> Self {
        let player_count = player_names.player_count();
        Self {
            player_count,
            phase: Phase::Idle,
            round_number: 0,
            active_player: PlayerId::new(0),
            winner: None,
            player_names,
            hand_sizes: PlayerMap::with_default(player_count),
            pile: Vector::new(),
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// The hand to beat, if any.
    #[must_use]
    pub fn top_hand(&self) -> Option<&Hand> {
        self.pile.back()
    }

    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.phase == Phase::RoundOver
    }

    #[must_use]
    pub fn name(&self, player: PlayerId) -> &str {
        &self.player_names[player]
    }

    /// Append to the move log, numbering the entry.
    pub fn record(&mut self, player: PlayerId, hand: Option<Hand>) {
        let sequence = self.history.len() as u32;
        self.history.push_back(MoveRecord::new(player, hand, sequence));
    }
}

/// Complete round state including private hands.
#[derive(Clone, Debug)]
pub struct GameState {
    pub public: PublicState,

    hands: PlayerMap<Vec<Card>>,
}

impl GameState {
    #[must_use]
    pub fn new(player_names: PlayerMap<String>) -> Self {
        let player_count = player_names.player_count();
        Self {
            public: PublicState::new(player_names),
            hands: PlayerMap::with_default(player_count),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.public.player_count()
    }

    // === Hands ===

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.hands[player]
    }

    #[must_use]
    pub fn hands(&self) -> &PlayerMap<Vec<Card>> {
        &self.hands
    }

    /// Replace every hand with a fresh deal, sorting each.
    pub fn set_hands(&mut self, mut hands: PlayerMap<Vec<Card>>) {
        for player in PlayerId::all(hands.player_count()) {
            hands[player].sort_unstable();
            self.public.hand_sizes[player] = hands[player].len() as u32;
        }
        self.hands = hands;
    }

    #[must_use]
    pub fn holds(&self, player: PlayerId, card: Card) -> bool {
        self.hands[player].binary_search(&card).is_ok()
    }

    /// First seat (in seat order) with no cards left.
    #[must_use]
    pub fn first_empty_hand(&self) -> Option<PlayerId> {
        self.hands
            .iter()
            .find(|(_, cards)| cards.is_empty())
            .map(|(p, _)| p)
    }

    /// Remove cards from a hand.
    ///
    /// Returns false, leaving the hand untouched, if any card is missing.
    pub fn remove_cards(&mut self, player: PlayerId, cards: &[Card]) -> bool {
        if !cards.iter().all(|&c| self.holds(player, c)) {
            return false;
        }
        self.hands[player].retain(|c| !cards.contains(c));
        self.public.hand_sizes[player] = self.hands[player].len() as u32;
        true
    }

    // === Round lifecycle ===

    /// Clear the table for a new deal.
    pub fn reset_round(&mut self) {
        self.public.pile.clear();
        self.public.history.clear();
        self.public.winner = None;
        self.public.round_number += 1;
    }
}
