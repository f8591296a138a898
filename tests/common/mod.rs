//! Shared helpers for the integration tests.

use drawrs::{Card, CardChange, GameOptions, PlayerRecord, Snapshot, evaluate};

/// Builds cards from `(suit, rank)` labels.
pub fn cards(labels: &[(&str, &str)]) -> Vec<Card> {
    labels
        .iter()
        .map(|&(suit, rank)| Card::parse(suit, rank).unwrap())
        .collect()
}

/// A freshly dealt player record: scored hand, no exchange yet.
pub fn record(hand: &[(&str, &str)], draw_pile: &[(&str, &str)]) -> PlayerRecord {
    let hand = cards(hand);
    PlayerRecord {
        score: evaluate(&hand),
        hand,
        draw_pile: cards(draw_pile),
        previous_score: None,
        last_change: CardChange::default(),
    }
}

/// A game in progress at `turn` with the given players.
pub fn in_progress(turn: u8, human: PlayerRecord, computer: PlayerRecord) -> Snapshot {
    let options = GameOptions::default();
    Snapshot {
        players: [(String::from("Human"), human), (String::from("Computer"), computer)]
            .into_iter()
            .collect(),
        current_turn: Some(turn),
        max_turns: options.max_turns,
        winner: None,
        options,
        seed: 0,
        deals: 1,
    }
}

pub const ROYAL: [(&str, &str); 7] = [
    ("Hearts", "10"),
    ("Hearts", "Jack"),
    ("Hearts", "Queen"),
    ("Hearts", "King"),
    ("Hearts", "Ace"),
    ("Clubs", "2"),
    ("Clubs", "3"),
];

pub const HIGH_CARD: [(&str, &str); 7] = [
    ("Hearts", "2"),
    ("Diamonds", "4"),
    ("Clubs", "6"),
    ("Spades", "8"),
    ("Hearts", "10"),
    ("Diamonds", "Queen"),
    ("Clubs", "King"),
];

pub const PAIR: [(&str, &str); 7] = [
    ("Hearts", "7"),
    ("Diamonds", "7"),
    ("Clubs", "2"),
    ("Spades", "4"),
    ("Hearts", "9"),
    ("Diamonds", "Jack"),
    ("Clubs", "King"),
];
