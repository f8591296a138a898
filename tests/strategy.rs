//! Opponent heuristic tests.

mod common;

use common::{HIGH_CARD, PAIR, cards};
use drawrs::{Card, DECK_SIZE, Deck, Rank, Rule, Strategy, evaluate};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Sorts like a dealt hand: highest value first, then Spades, Hearts,
/// Diamonds, Clubs.
fn dealt(labels: &[(&str, &str)]) -> Vec<Card> {
    let mut hand = cards(labels);
    hand.sort_by_key(|card| core::cmp::Reverse((card.value(), card.suit)));
    hand
}

fn discarded(hand: &[Card], positions: &[usize]) -> Vec<Card> {
    positions.iter().map(|&index| hand[index]).collect()
}

#[test]
fn full_house_is_held() {
    let hand = dealt(&[
        ("Hearts", "Queen"),
        ("Diamonds", "Queen"),
        ("Clubs", "Queen"),
        ("Hearts", "2"),
        ("Diamonds", "2"),
        ("Clubs", "3"),
        ("Spades", "4"),
    ]);
    let decision = Strategy::default().decision(&hand);
    assert_eq!(decision.rule, Rule::Hold);
    assert!(decision.discards.is_empty());
}

#[test]
fn four_of_a_kind_keeps_the_quads_below_the_hold_threshold() {
    let hand = dealt(&[
        ("Hearts", "8"),
        ("Spades", "8"),
        ("Diamonds", "8"),
        ("Clubs", "8"),
        ("Hearts", "3"),
        ("Spades", "4"),
        ("Clubs", "5"),
    ]);

    // Four of a Kind is at or above the default threshold.
    assert!(Strategy::default().decide(&hand).is_empty());

    // Holding only from Straight Flush up, the three loose cards go.
    let decision = Strategy::new(9).decision(&hand);
    assert_eq!(decision.rule, Rule::FourOfAKind);
    assert_eq!(decision.discards, vec![4, 5, 6]);
    assert_eq!(
        discarded(&hand, &decision.discards),
        cards(&[("Clubs", "5"), ("Spades", "4"), ("Hearts", "3")])
    );
}

#[test]
fn flush_draw_keeps_the_majority_suit() {
    let hand = dealt(&[
        ("Hearts", "2"),
        ("Hearts", "5"),
        ("Hearts", "9"),
        ("Hearts", "King"),
        ("Clubs", "3"),
        ("Diamonds", "7"),
        ("Spades", "Jack"),
    ]);
    let decision = Strategy::default().decision(&hand);
    assert_eq!(decision.rule, Rule::FlushDraw);
    assert_eq!(decision.discards, vec![1, 3, 5]);
    assert!(
        discarded(&hand, &decision.discards)
            .iter()
            .all(|card| card.suit != drawrs::Suit::Hearts)
    );
}

#[test]
fn straight_draw_keeps_the_loose_run() {
    // Values 2 4 5 6 7 10 13: the run merges gaps of two, so the 2 stays.
    let hand = dealt(&[
        ("Clubs", "4"),
        ("Diamonds", "5"),
        ("Hearts", "6"),
        ("Spades", "7"),
        ("Clubs", "King"),
        ("Diamonds", "2"),
        ("Hearts", "10"),
    ]);
    let decision = Strategy::default().decision(&hand);
    assert_eq!(decision.rule, Rule::StraightDraw);
    assert_eq!(
        discarded(&hand, &decision.discards),
        cards(&[("Clubs", "King"), ("Hearts", "10")])
    );
}

#[test]
fn three_of_a_kind_keeps_the_set() {
    let hand = dealt(&[
        ("Hearts", "7"),
        ("Diamonds", "7"),
        ("Clubs", "7"),
        ("Spades", "2"),
        ("Hearts", "9"),
        ("Diamonds", "Jack"),
        ("Clubs", "King"),
    ]);
    let decision = Strategy::default().decision(&hand);
    assert_eq!(decision.rule, Rule::ThreeOfAKind);
    assert_eq!(decision.discards, vec![0, 1, 2, 6]);
}

#[test]
fn two_pair_keeps_both_pairs() {
    let hand = dealt(&[
        ("Hearts", "7"),
        ("Diamonds", "7"),
        ("Clubs", "9"),
        ("Spades", "9"),
        ("Hearts", "2"),
        ("Diamonds", "Jack"),
        ("Clubs", "King"),
    ]);
    let decision = Strategy::default().decision(&hand);
    assert_eq!(decision.rule, Rule::TwoPair);
    assert_eq!(decision.discards, vec![0, 1, 6]);
}

#[test]
fn pair_keeps_the_pair() {
    let hand = dealt(&PAIR);
    let decision = Strategy::default().decision(&hand);
    assert_eq!(decision.rule, Rule::Pair);
    assert_eq!(decision.discards, vec![0, 1, 2, 5, 6]);
    assert!(
        discarded(&hand, &decision.discards)
            .iter()
            .all(|card| card.rank != Rank::Seven)
    );
}

#[test]
fn nothing_keeps_the_highest_card() {
    let hand = dealt(&HIGH_CARD);
    let decision = Strategy::default().decision(&hand);
    assert_eq!(decision.rule, Rule::HighCard);
    assert_eq!(decision.discards, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(hand[0].rank, Rank::King);
}

#[test]
fn decisions_over_random_hands() {
    let strategy = Strategy::default();
    for seed in 0..500 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::shuffled(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);
        let hand: Vec<Card> = (0..7).map(|_| deck.draw().unwrap()).collect();

        let discards = strategy.decide(&hand);
        if evaluate(&hand).multiplier >= 7 {
            assert!(discards.is_empty(), "seed {seed} discarded a made hand");
        }
        assert!(discards.len() < hand.len());
        assert!(discards.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(discards.iter().all(|&index| index < hand.len()));
    }
}
