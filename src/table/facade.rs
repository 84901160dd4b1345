//! Engine-owned round state behind a small façade.
//!
//! `Table` is what a transport or UI adapter holds. It converts raw seat and
//! card indices into typed values, forwards moves to the rules and exposes
//! read-only observers. All mutation goes through `start_round` and
//! `propose_move`.

use im::Vector;
use serde::Serialize;

use crate::cards::{Card, Deck};
use crate::core::{
    EngineError, GameRng, GameState, Move, MoveRecord, Phase, PlayerId, PlayerMap, PublicState,
    Result, Selection, TableConfig,
};
use crate::games::BigTwo;
use crate::hands::Hand;
use crate::rules::{MoveOutcome, RoundResult, RulesEngine};

/// What a fresh deal produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DealtRound {
    /// Every seat's cards, sorted by game order.
    pub hands: PlayerMap<Vec<Card>>,
    pub opening_player: PlayerId,
}

/// One Big Two table.
#[derive(Clone, Debug)]
pub struct Table {
    rules: BigTwo,
    state: GameState,
    rng: GameRng,
}

impl Table {
    /// Create an idle table. Nothing is dealt until `start_round`.
    pub fn new(config: TableConfig) -> Result<Self> {
        let rules = BigTwo::new(config)?;
        let names = PlayerMap::from_vec(rules.config().player_names.clone());
        let rng = rules
            .config()
            .shuffle_seed
            .map_or_else(GameRng::from_entropy, GameRng::new);

        Ok(Self {
            rules,
            state: GameState::new(names),
            rng,
        })
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        self.rules.config()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.state.player_count()
    }

    // === Lifecycle ===

    /// Deal `deck` and start a new round, discarding whatever was on the table.
    pub fn start_round(&mut self, deck: Deck) -> Result<DealtRound> {
        let opening_player = self.rules.deal(&mut self.state, deck)?;
        Ok(DealtRound {
            hands: self.state.hands().clone(),
            opening_player,
        })
    }

    /// Shuffle a fresh deck with the table's RNG and deal it.
    pub fn deal_shuffled(&mut self) -> Result<DealtRound> {
        let deck = Deck::shuffled(&mut self.rng);
        self.start_round(deck)
    }

    /// Propose a move for the seat at `player_index`.
    ///
    /// Rule violations come back as `Ok(MoveOutcome::Rejected(_))` with the
    /// table unchanged.
    pub fn propose_move(&mut self, player_index: usize, mv: Move) -> Result<MoveOutcome> {
        let player = self.seat(player_index)?;
        self.rules.apply_move(&mut self.state, player, &mv)
    }

    // === Observers ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.public.phase
    }

    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.state.public.is_round_over()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.public.winner
    }

    /// The hand to beat, if any.
    #[must_use]
    pub fn current_top_hand(&self) -> Option<&Hand> {
        self.state.public.top_hand()
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.state.public.active_player
    }

    #[must_use]
    pub fn players_remaining_counts(&self) -> PlayerMap<u32> {
        self.state.public.hand_sizes.clone()
    }

    /// A seat's cards, sorted by game order.
    pub fn hand(&self, player_index: usize) -> Result<&[Card]> {
        let player = self.seat(player_index)?;
        Ok(self.state.hand(player))
    }

    /// Resolve positions in a seat's sorted hand into cards.
    pub fn select(&self, player_index: usize, indices: &[usize]) -> Result<Selection> {
        let hand = self.hand(player_index)?;
        indices
            .iter()
            .map(|&index| {
                hand.get(index)
                    .copied()
                    .ok_or(EngineError::CardIndexOutOfRange {
                        index,
                        len: hand.len(),
                    })
            })
            .collect()
    }

    /// Whether the seat at `player_index` may pass right now.
    pub fn can_pass(&self, player_index: usize) -> Result<bool> {
        let player = self.seat(player_index)?;
        Ok(self.rules.can_pass(&self.state, player))
    }

    /// Snapshot for observers. Cheap: the pile and log are shared.
    #[must_use]
    pub fn view(&self) -> PublicState {
        self.state.public.clone()
    }

    /// Accepted moves this round, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.state.public.history
    }

    /// Winner and card counts, once the round is over.
    #[must_use]
    pub fn summary(&self) -> Option<RoundResult> {
        self.rules.is_terminal(&self.state)
    }

    fn seat(&self, player_index: usize) -> Result<PlayerId> {
        PlayerId::checked(player_index, self.player_count())
    }
}
