//! Snapshot and restore tests.

mod common;

use common::{HIGH_CARD, PAIR, ROYAL, cards, in_progress, record};
use drawrs::{
    CARDS_PER_HAND, Card, DealMode, Deck, Game, GameOptions, GameState, OptionsError, Outcome,
    PlayerRecord, RestoreError, Seat, Snapshot, evaluate,
};
use serde_json::json;

/// Low cards that share nothing with `ROYAL`.
const LOW: [(&str, &str); 7] = [
    ("Spades", "2"),
    ("Spades", "3"),
    ("Diamonds", "5"),
    ("Diamonds", "6"),
    ("Clubs", "8"),
    ("Clubs", "9"),
    ("Diamonds", "Jack"),
];

/// A one-turn game dealt from a single split deck.
fn split(human: PlayerRecord, computer: PlayerRecord) -> Snapshot {
    let mut snapshot = in_progress(1, human, computer);
    snapshot.options = GameOptions::default()
        .with_deal(DealMode::Split)
        .with_max_turns(1);
    snapshot.max_turns = 1;
    snapshot
}

fn through_json(snapshot: &Snapshot) -> Snapshot {
    let text = serde_json::to_string(snapshot).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn not_started_round_trip() {
    let game = Game::new(GameOptions::default().with_max_turns(3), 17);
    let snapshot = game.snapshot();
    assert!(snapshot.players.is_empty());
    assert_eq!(snapshot.current_turn, None);
    assert_eq!(snapshot.winner, None);
    assert_eq!(snapshot.max_turns, 3);

    assert_eq!(Game::restore(through_json(&snapshot)).unwrap(), game);
}

#[test]
fn mid_game_round_trip() {
    let mut game = Game::new(GameOptions::default(), 31);
    game.start().unwrap();
    game.discard(Seat::Human, &[0, 3, 6]).unwrap();
    game.discard(Seat::Human, &[]).unwrap();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.current_turn, Some(3));
    assert_eq!(snapshot.players.len(), 2);

    let restored = Game::restore(through_json(&snapshot)).unwrap();
    assert_eq!(restored, game);
    assert_eq!(restored.snapshot(), snapshot);
}

#[test]
fn restored_game_plays_on_identically() {
    let mut game = Game::new(GameOptions::default(), 77);
    game.start().unwrap();
    game.discard(Seat::Human, &[1, 2]).unwrap();

    let mut restored = Game::restore(through_json(&game.snapshot())).unwrap();
    for _ in 0..4 {
        game.discard(Seat::Human, &[4, 5, 6]).unwrap();
        restored.discard(Seat::Human, &[4, 5, 6]).unwrap();
    }
    assert!(matches!(game.state(), GameState::Finished { .. }));
    assert_eq!(restored, game);
}

#[test]
fn restored_game_deals_the_next_game_identically() {
    let mut game = Game::new(GameOptions::default(), 5);
    game.start().unwrap();
    game.reset();

    let mut restored = Game::restore(through_json(&game.snapshot())).unwrap();
    game.start().unwrap();
    restored.start().unwrap();
    assert_eq!(restored, game);
}

#[test]
fn finished_round_trip() {
    let snapshot = in_progress(5, record(&ROYAL, &[]), record(&PAIR, &[]));
    let mut game = Game::restore(snapshot).unwrap();
    game.advance_turn().unwrap();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.current_turn, None);
    assert_eq!(snapshot.winner.as_deref(), Some("Human"));

    let restored = Game::restore(through_json(&snapshot)).unwrap();
    assert_eq!(
        restored.state(),
        GameState::Finished {
            outcome: Outcome::Winner(Seat::Human)
        }
    );
    assert_eq!(restored, game);
}

#[test]
fn json_shape() {
    let game = Game::restore(in_progress(3, record(&ROYAL, &[]), record(&HIGH_CARD, &[]))).unwrap();
    let value = serde_json::to_value(game.snapshot()).unwrap();

    let human = &value["players"]["Human"];
    assert_eq!(human["hand"][0], json!({"suit": "Hearts", "rank": "Ace"}));
    assert_eq!(human["hand"][4], json!({"suit": "Hearts", "rank": "10"}));
    assert_eq!(human["score"]["category"], "Royal Flush");
    assert_eq!(human["score"]["score"], 650);
    assert_eq!(human["previous_score"], json!(null));
    assert_eq!(human["last_change"], json!({"discarded": [], "drawn": []}));

    assert_eq!(value["players"]["Computer"]["score"]["category"], "High Card");
    assert_eq!(value["current_turn"], 3);
    assert_eq!(value["max_turns"], 5);
    assert_eq!(value["winner"], json!(null));
    assert_eq!(value["options"]["deal"], "Independent");
}

#[test]
fn restore_sorts_the_hand() {
    let game = Game::restore(in_progress(1, record(&PAIR, &[]), record(&HIGH_CARD, &[]))).unwrap();
    let hand = game.player(Seat::Human).unwrap().hand();
    assert_eq!(hand[0], cards(&[("Clubs", "King")])[0]);
    assert_eq!(hand[6], cards(&[("Clubs", "2")])[0]);
}

#[test]
fn invalid_card_text_is_rejected() {
    let game = Game::restore(in_progress(2, record(&ROYAL, &[]), record(&PAIR, &[]))).unwrap();
    let mut value = serde_json::to_value(game.snapshot()).unwrap();

    value["players"]["Human"]["hand"][0]["rank"] = json!("Eleven");
    let err = serde_json::from_value::<Snapshot>(value.clone()).unwrap_err();
    assert!(err.to_string().contains("invalid rank: Eleven"), "{err}");

    value["players"]["Human"]["hand"][0] = json!({"suit": "Stars", "rank": "Ace"});
    let err = serde_json::from_value::<Snapshot>(value).unwrap_err();
    assert!(err.to_string().contains("invalid suit: Stars"), "{err}");
}

#[test]
fn tampered_score_is_rejected() {
    let mut human = record(&HIGH_CARD, &[]);
    human.score = evaluate(&cards(&ROYAL));
    assert_eq!(
        Game::restore(in_progress(2, human, record(&PAIR, &[]))),
        Err(RestoreError::ScoreMismatch(Seat::Human))
    );

    let mut computer = record(&PAIR, &[]);
    let mut previous = evaluate(&cards(&HIGH_CARD));
    previous.score += 1;
    computer.previous_score = Some(previous);
    assert_eq!(
        Game::restore(in_progress(2, record(&ROYAL, &[]), computer)),
        Err(RestoreError::ScoreMismatch(Seat::Computer))
    );
}

#[test]
fn duplicate_cards_are_rejected() {
    let human = record(&ROYAL, &[("Spades", "9"), ("Hearts", "Ace")]);
    assert_eq!(
        Game::restore(in_progress(2, human, record(&PAIR, &[]))),
        Err(RestoreError::DuplicateCard(Seat::Human))
    );
}

#[test]
fn short_hand_is_rejected() {
    let human = record(&ROYAL[..6], &[]);
    assert_eq!(
        Game::restore(in_progress(2, human, record(&PAIR, &[]))),
        Err(RestoreError::HandSize {
            seat: Seat::Human,
            len: CARDS_PER_HAND - 1
        })
    );
}

#[test]
fn turn_must_be_within_the_limit() {
    for turn in [0, 6] {
        let snapshot = in_progress(turn, record(&ROYAL, &[]), record(&PAIR, &[]));
        assert_eq!(
            Game::restore(snapshot),
            Err(RestoreError::TurnOutOfRange { turn, max_turns: 5 })
        );
    }
}

#[test]
fn winner_must_be_known() {
    let mut snapshot = in_progress(1, record(&ROYAL, &[]), record(&PAIR, &[]));
    snapshot.current_turn = None;
    snapshot.winner = Some("Dealer".into());
    assert_eq!(
        Game::restore(snapshot),
        Err(RestoreError::UnknownWinner("Dealer".into()))
    );
}

#[test]
fn inconsistent_state_is_rejected() {
    let mut both = in_progress(4, record(&ROYAL, &[]), record(&PAIR, &[]));
    both.winner = Some("Draw".into());
    assert_eq!(Game::restore(both), Err(RestoreError::InconsistentState));

    let mut dealt_but_not_started = in_progress(1, record(&ROYAL, &[]), record(&PAIR, &[]));
    dealt_but_not_started.current_turn = None;
    assert_eq!(
        Game::restore(dealt_but_not_started),
        Err(RestoreError::InconsistentState)
    );

    let mut turn_limit = in_progress(1, record(&ROYAL, &[]), record(&PAIR, &[]));
    turn_limit.max_turns = 4;
    assert_eq!(Game::restore(turn_limit), Err(RestoreError::InconsistentState));
}

#[test]
fn players_must_be_known_and_present() {
    let mut extra = in_progress(1, record(&ROYAL, &[]), record(&PAIR, &[]));
    extra
        .players
        .insert("Dealer".into(), record(&HIGH_CARD, &[]));
    assert_eq!(
        Game::restore(extra),
        Err(RestoreError::UnknownPlayer("Dealer".into()))
    );

    let mut missing = in_progress(1, record(&ROYAL, &[]), record(&PAIR, &[]));
    missing.players.remove("Computer");
    assert_eq!(
        Game::restore(missing),
        Err(RestoreError::MissingPlayer(Seat::Computer))
    );
}

#[test]
fn invalid_options_are_rejected() {
    let mut snapshot = in_progress(1, record(&ROYAL, &[]), record(&PAIR, &[]));
    snapshot.options = snapshot.options.with_max_turns(0);
    snapshot.max_turns = 0;
    assert_eq!(
        Game::restore(snapshot),
        Err(RestoreError::Options(OptionsError::NoTurns))
    );
}

#[test]
fn winner_must_match_the_scores() {
    for (label, accepted) in [("Human", true), ("Computer", false), ("Draw", false)] {
        let mut snapshot = in_progress(1, record(&ROYAL, &[]), record(&HIGH_CARD, &[]));
        snapshot.current_turn = None;
        snapshot.winner = Some(label.into());

        let restored = Game::restore(snapshot);
        if accepted {
            let result = restored.unwrap().result().unwrap();
            assert_eq!(result.outcome, Outcome::Winner(Seat::Human));
        } else {
            assert_eq!(restored, Err(RestoreError::InconsistentState), "{label}");
        }
    }
}

#[test]
fn split_deck_cards_are_held_once_across_players() {
    assert!(Game::restore(split(record(&ROYAL, &[]), record(&LOW, &[]))).is_ok());

    assert_eq!(
        Game::restore(split(record(&ROYAL, &[]), record(&ROYAL, &[]))),
        Err(RestoreError::DuplicateCard(Seat::Computer))
    );

    // A card in the human's pile may not show up in the opponent's hand.
    assert_eq!(
        Game::restore(split(
            record(&ROYAL, &[("Spades", "2")]),
            record(&LOW, &[])
        )),
        Err(RestoreError::DuplicateCard(Seat::Computer))
    );

    // Independent decks may repeat cards between players.
    let mut independent = split(record(&ROYAL, &[]), record(&ROYAL, &[]));
    independent.options = independent.options.with_deal(DealMode::Independent);
    assert!(Game::restore(independent).is_ok());
}

#[test]
fn split_piles_hold_at_most_half_a_deck() {
    let dealt: Vec<Card> = cards(&ROYAL).into_iter().chain(cards(&LOW)).collect();
    let undealt: Vec<Card> = Deck::new()
        .cards()
        .iter()
        .copied()
        .filter(|card| !dealt.contains(card))
        .collect();

    let mut human = record(&ROYAL, &[]);
    human.draw_pile = undealt[..20].to_vec();
    assert_eq!(
        Game::restore(split(human.clone(), record(&LOW, &[]))),
        Err(RestoreError::TooManyCards {
            seat: Seat::Human,
            len: 27,
            reserve: 26
        })
    );

    human.draw_pile.truncate(19);
    assert!(Game::restore(split(human, record(&LOW, &[]))).is_ok());
}
