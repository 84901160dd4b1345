//! Turn engine scenarios driven through the `Table` façade.
//!
//! Decks are pre-arranged so every hand is known in advance.

mod common;

use big_two::{
    Card, Deck, EngineError, Move, MoveOutcome, Phase, PlayerId, RejectReason, Table, TableConfig,
};
use common::{arranged_deck, cards, suited_deck};

fn table_with(deck: Deck) -> Table {
    let mut table = Table::new(TableConfig::default()).unwrap();
    table.start_round(deck).unwrap();
    table
}

fn play(table: &mut Table, seat: usize, s: &str) -> MoveOutcome {
    table.propose_move(seat, Move::play(cards(s))).unwrap()
}

fn pass(table: &mut Table, seat: usize) -> MoveOutcome {
    table.propose_move(seat, Move::Pass).unwrap()
}

/// Observable state as JSON, for before/after comparisons.
fn snapshot(table: &Table) -> serde_json::Value {
    serde_json::to_value(table.view()).unwrap()
}

/// Seat 0 plays D3, seat 1 answers with C3, everyone else passes.
#[test]
fn test_end_to_end_trick() {
    let mut table = table_with(suited_deck());
    let mut actives = vec![table.active_player().index()];
    let mut piles = vec![];

    let moves: [(usize, Option<&str>); 5] = [
        (0, Some("D3")),
        (1, Some("C3")),
        (2, None),
        (3, None),
        (0, None),
    ];
    for (seat, selection) in moves {
        let outcome = match selection {
            Some(s) => play(&mut table, seat, s),
            None => pass(&mut table, seat),
        };
        assert!(outcome.is_accepted(), "seat {seat}: {outcome:?}");
        actives.push(table.active_player().index());
        piles.push(table.view().pile.len());
    }

    assert_eq!(actives, vec![0, 1, 2, 3, 0, 1]);
    assert_eq!(piles, vec![1, 2, 2, 2, 2]);

    // Seat 1 now leads and may not pass.
    assert_eq!(table.can_pass(1), Ok(false));
    assert_eq!(table.current_top_hand().unwrap().owner(), PlayerId::new(1));

    let log: Vec<String> = table.history().iter().map(ToString::to_string).collect();
    assert_eq!(
        log,
        vec!["{Single} D3", "{Single} C3", "{Pass}", "{Pass}", "{Pass}"]
    );
}

/// Seat 0 sheds its whole hand in three leads.
#[test]
fn test_round_ends_on_last_card() {
    let mut table = table_with(arranged_deck([
        "D3 D4 D5 D6 D7 D8 D9 DT DJ DQ DK CK HK",
        "DA CA C2 C3 C4 C5 C6 C7 C8 C9 CT CJ CQ",
        "D2 HA H2 H3 H4 H5 H6 H7 H8 H9 HT HJ HQ",
        "SA S2 S3 S4 S5 S6 S7 S8 S9 ST SJ SQ SK",
    ]));

    let leads = ["D3 D4 D5 D6 D7", "D8 D9 DT DJ DQ"];
    for lead in leads {
        assert!(play(&mut table, 0, lead).is_accepted());
        for seat in 1..4 {
            assert_eq!(pass(&mut table, seat), MoveOutcome::Passed);
        }
    }
    assert!(!table.is_round_over());

    let last = play(&mut table, 0, "DK CK HK");
    assert!(last.is_accepted());
    assert!(table.is_round_over());
    assert_eq!(table.phase(), Phase::RoundOver);
    assert_eq!(table.winner(), Some(PlayerId::new(0)));

    let summary = table.summary().unwrap();
    assert_eq!(summary.cards_left.into_vec(), vec![0, 13, 13, 13]);

    let names = table.view().player_names;
    let lines = table.summary().unwrap().lines(&names);
    assert_eq!(lines[0], "Player 0 wins the game.");
    assert_eq!(lines[1], "Player 1 has 13 cards in hand.");

    // Further moves are faults and leave the pile alone.
    let pile = table.view().pile.len();
    assert_eq!(table.propose_move(1, Move::Pass), Err(EngineError::RoundOver));
    assert_eq!(
        table.propose_move(0, Move::play(cards("DK"))),
        Err(EngineError::RoundOver)
    );
    assert_eq!(table.view().pile.len(), pile);
}

#[test]
fn test_opening_rule() {
    let mut table = table_with(suited_deck());

    assert_eq!(
        play(&mut table, 0, "D4"),
        MoveOutcome::Rejected(RejectReason::MissingOpeningCard("D3".parse().unwrap()))
    );
    assert!(play(&mut table, 0, "D3 D4 D5 D6 D7").is_accepted());
    assert_eq!(
        table.current_top_hand().unwrap().to_string(),
        "{StraightFlush} D3 D4 D5 D6 D7"
    );
}

#[test]
fn test_pass_rule() {
    let mut table = table_with(suited_deck());

    assert_eq!(
        pass(&mut table, 0),
        MoveOutcome::Rejected(RejectReason::PassOnEmptyTable)
    );

    play(&mut table, 0, "D3");
    assert_eq!(table.can_pass(1), Ok(true));
    for seat in 1..4 {
        pass(&mut table, seat);
    }
    assert_eq!(
        pass(&mut table, 0),
        MoveOutcome::Rejected(RejectReason::PassOnOwnLead)
    );
}

#[test]
fn test_rejections_leave_table_untouched() {
    let mut table = table_with(suited_deck());
    play(&mut table, 0, "D3");
    let before = snapshot(&table);

    let attempts = [
        (0, Move::Pass),
        (2, Move::play(cards("H4"))),
        (1, Move::play(Vec::<Card>::new())),
        (1, Move::play(cards("C4 C4"))),
        (1, Move::play(cards("S2"))),
        (1, Move::play(cards("C4 C5"))),
        (1, Move::play(cards("C4 C5 C6 C7"))),
        (1, Move::play(cards("C4 C5 C6 C7 C8"))),
    ];
    for (seat, mv) in attempts {
        let outcome = table.propose_move(seat, mv).unwrap();
        assert!(!outcome.is_accepted(), "seat {seat}: {outcome:?}");
        assert_eq!(snapshot(&table), before);
    }
}

#[test]
fn test_rejection_reasons() {
    let mut table = table_with(suited_deck());
    play(&mut table, 0, "D3");

    let cases = [
        (2, "H4", RejectReason::NotYourTurn { active: PlayerId::new(1) }),
        (1, "C4 C4", RejectReason::DuplicateCard("C4".parse().unwrap())),
        (1, "S2", RejectReason::CardNotHeld("S2".parse().unwrap())),
        (1, "C4 C5", RejectReason::InvalidCombination { count: 2 }),
        (
            1,
            "C4 C5 C6 C7 C8",
            RejectReason::WrongCardCount { expected: 1, found: 5 },
        ),
    ];
    for (seat, selection, reason) in cases {
        assert_eq!(
            play(&mut table, seat, selection),
            MoveOutcome::Rejected(reason)
        );
    }

    assert!(play(&mut table, 1, "C3").is_accepted());
    assert!(play(&mut table, 2, "H3").is_accepted());
}

#[test]
fn test_does_not_beat() {
    let mut table = table_with(suited_deck());

    play(&mut table, 0, "D3");
    play(&mut table, 1, "C5");
    assert_eq!(
        play(&mut table, 2, "H4"),
        MoveOutcome::Rejected(RejectReason::DoesNotBeat)
    );
    assert!(play(&mut table, 2, "H5").is_accepted());
}

#[test]
fn test_structural_faults() {
    let mut idle = Table::new(TableConfig::default()).unwrap();
    assert_eq!(
        idle.propose_move(0, Move::Pass),
        Err(EngineError::RoundNotStarted)
    );

    let mut table = table_with(suited_deck());
    assert_eq!(
        table.propose_move(4, Move::Pass),
        Err(EngineError::PlayerOutOfRange { index: 4, player_count: 4 })
    );
    assert_eq!(
        table.select(0, &[0, 13]),
        Err(EngineError::CardIndexOutOfRange { index: 13, len: 13 })
    );

    let short: Vec<Card> = Deck::build().iter().take(51).collect();
    assert_eq!(Deck::from_cards(short), Err(EngineError::DeckSize(51)));
}

#[test]
fn test_new_round_resets_table() {
    let mut table = table_with(suited_deck());
    play(&mut table, 0, "D3");

    let dealt = table.start_round(suited_deck()).unwrap();
    assert_eq!(dealt.opening_player, PlayerId::new(0));
    assert!(table.current_top_hand().is_none());
    assert!(table.history().is_empty());
    assert_eq!(table.view().round_number, 2);
    assert_eq!(table.phase(), Phase::AwaitingOpen);
}
