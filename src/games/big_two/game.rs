//! Big Two turn engine.

use crate::cards::{Card, Deck};
use crate::core::{
    EngineError, GameState, Move, Phase, PlayerId, PlayerMap, RejectReason, Result, TableConfig,
};
use crate::hands::{classify, Hand};
use crate::rules::{MoveOutcome, RoundResult, RulesEngine};

/// The Big Two rules.
///
/// Stateless apart from its configuration: all round state lives in the
/// `GameState` passed in, so one `BigTwo` can drive any number of rounds.
#[derive(Clone, Debug, Default)]
pub struct BigTwo {
    config: TableConfig,
}

impl BigTwo {
    /// Create the rules for a validated configuration.
    pub fn new(config: TableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Card that must be in the opening hand.
    #[must_use]
    pub fn opening_card(&self) -> Card {
        self.config.opening_card
    }

    /// Check a pass by `player` against the current table.
    pub fn check_pass(&self, state: &GameState, player: PlayerId) -> std::result::Result<(), RejectReason> {
        check_turn(state, player)?;
        match state.public.top_hand() {
            None => Err(RejectReason::PassOnEmptyTable),
            Some(top) if top.owner() == player => Err(RejectReason::PassOnOwnLead),
            Some(_) => Ok(()),
        }
    }

    fn check_in_play(&self, state: &GameState, player: PlayerId) -> Result<()> {
        match state.public.phase {
            Phase::Idle => return Err(EngineError::RoundNotStarted),
            Phase::RoundOver => return Err(EngineError::RoundOver),
            Phase::AwaitingOpen | Phase::AwaitingFollow => {}
        }
        PlayerId::checked(player.index(), state.player_count())?;
        Ok(())
    }

    fn commit_play(&self, state: &mut GameState, player: PlayerId, hand: Hand) {
        let removed = state.remove_cards(player, hand.cards());
        debug_assert!(removed, "checked hand must come from the player's cards");

        log::debug!("{} plays {}", state.public.name(player), hand);
        state.public.pile.push_back(hand.clone());
        state.public.record(player, Some(hand));

        match state.first_empty_hand() {
            Some(winner) => {
                state.public.phase = Phase::RoundOver;
                state.public.winner = Some(winner);
                log::info!(
                    "round {} over: {} wins",
                    state.public.round_number,
                    state.public.name(winner)
                );
            }
            None => {
                state.public.phase = Phase::AwaitingFollow;
                state.public.active_player = player.next(state.player_count());
            }
        }
    }

    fn commit_pass(&self, state: &mut GameState, player: PlayerId) {
        log::debug!("{} passes", state.public.name(player));
        state.public.record(player, None);
        state.public.active_player = player.next(state.player_count());
    }
}

fn check_turn(state: &GameState, player: PlayerId) -> std::result::Result<(), RejectReason> {
    let active = state.public.active_player;
    if player == active {
        Ok(())
    } else {
        Err(RejectReason::NotYourTurn { active })
    }
}

/// Seat dealt `card`, found before any round state changes.
fn opening_seat(hands: &PlayerMap<Vec<Card>>, card: Card) -> Result<PlayerId> {
    hands
        .iter()
        .find(|(_, cards)| cards.contains(&card))
        .map(|(player, _)| player)
        .ok_or(EngineError::OpeningCardNotDealt(card))
}

/// First card that appears twice in `selection`.
fn first_duplicate(selection: &[Card]) -> Option<Card> {
    selection
        .iter()
        .enumerate()
        .find(|(i, card)| selection[..*i].contains(card))
        .map(|(_, &card)| card)
}

impl RulesEngine for BigTwo {
    fn config(&self) -> &TableConfig {
        &self.config
    }

    fn deal(&self, state: &mut GameState, deck: Deck) -> Result<PlayerId> {
        let hands = deck.deal(state.player_count());
        let opener = opening_seat(&hands, self.opening_card())?;

        state.reset_round();
        state.set_hands(hands);
        state.public.phase = Phase::AwaitingOpen;
        state.public.active_player = opener;

        log::info!(
            "round {} dealt, {} opens",
            state.public.round_number,
            state.public.name(opener)
        );
        Ok(opener)
    }

    fn can_pass(&self, state: &GameState, player: PlayerId) -> bool {
        self.check_in_play(state, player).is_ok() && self.check_pass(state, player).is_ok()
    }

    fn check_play(
        &self,
        state: &GameState,
        player: PlayerId,
        selection: &[Card],
    ) -> std::result::Result<Hand, RejectReason> {
        check_turn(state, player)?;
        if selection.is_empty() {
            return Err(RejectReason::EmptySelection);
        }
        if let Some(card) = first_duplicate(selection) {
            return Err(RejectReason::DuplicateCard(card));
        }
        if let Some(&card) = selection.iter().find(|&&c| !state.holds(player, c)) {
            return Err(RejectReason::CardNotHeld(card));
        }

        let hand = classify(player, selection).ok_or(RejectReason::InvalidCombination {
            count: selection.len(),
        })?;

        let Some(top) = state.public.top_hand() else {
            let opening = self.opening_card();
            return if hand.contains(opening) {
                Ok(hand)
            } else {
                Err(RejectReason::MissingOpeningCard(opening))
            };
        };

        // Nobody beat the last lead: anything goes.
        if top.owner() == player {
            return Ok(hand);
        }
        if hand.len() != top.len() {
            return Err(RejectReason::WrongCardCount {
                expected: top.len(),
                found: hand.len(),
            });
        }
        if !hand.beats(top) {
            return Err(RejectReason::DoesNotBeat);
        }
        Ok(hand)
    }

    fn apply_move(&self, state: &mut GameState, player: PlayerId, mv: &Move) -> Result<MoveOutcome> {
        self.check_in_play(state, player)?;

        let checked = match mv {
            Move::Pass => self.check_pass(state, player).map(|()| None),
            Move::Play(selection) => self.check_play(state, player, selection).map(Some),
        };

        let outcome = match checked {
            Ok(Some(hand)) => {
                self.commit_play(state, player, hand.clone());
                MoveOutcome::Played(hand)
            }
            Ok(None) => {
                self.commit_pass(state, player);
                MoveOutcome::Passed
            }
            Err(reason) => {
                log::debug!("{} rejected: {}", state.public.name(player), reason);
                MoveOutcome::Rejected(reason)
            }
        };
        Ok(outcome)
    }

    fn is_terminal(&self, state: &GameState) -> Option<RoundResult> {
        if !state.public.is_round_over() {
            return None;
        }
        state.public.winner.map(|winner| RoundResult {
            winner,
            cards_left: state.public.hand_sizes.clone(),
        })
    }
}
