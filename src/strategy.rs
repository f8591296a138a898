//! The scripted opponent's discard heuristic.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Analysis;

/// The rule that produced a discard decision, in the order rules are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The hand already meets the hold threshold.
    Hold,
    /// Keep the four of a kind.
    FourOfAKind,
    /// Keep the majority suit.
    FlushDraw,
    /// Keep the longest loose run of values.
    StraightDraw,
    /// Keep the three of a kind.
    ThreeOfAKind,
    /// Keep both (or all) pairs.
    TwoPair,
    /// Keep the pair.
    Pair,
    /// Keep the highest card.
    HighCard,
}

/// A discard decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// The rule that matched.
    pub rule: Rule,
    /// Hand positions to discard, ascending.
    pub discards: Vec<usize>,
}

/// Deterministic rule-based opponent.
///
/// ```
/// use drawrs::{Card, Strategy};
///
/// let hand: Vec<Card> = [
///     ("Hearts", "Queen"),
///     ("Diamonds", "Queen"),
///     ("Clubs", "Queen"),
///     ("Hearts", "2"),
///     ("Diamonds", "2"),
///     ("Clubs", "3"),
///     ("Spades", "4"),
/// ]
/// .into_iter()
/// .map(|(suit, rank)| Card::parse(suit, rank).unwrap())
/// .collect();
///
/// // A full house is kept as is.
/// assert!(Strategy::default().decide(&hand).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategy {
    hold_multiplier: u32,
}

impl Default for Strategy {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD_MULTIPLIER)
    }
}

/// Hands scoring this multiplier or more (Full House and up) are kept.
pub const DEFAULT_HOLD_MULTIPLIER: u32 = 7;

/// Values closer than this join the same run when looking for straight draws.
const RUN_GAP: u8 = 2;

impl Strategy {
    /// Creates a strategy that keeps any hand whose category multiplier is at
    /// least `hold_multiplier`.
    #[must_use]
    pub const fn new(hold_multiplier: u32) -> Self {
        Self { hold_multiplier }
    }

    /// Returns the hold threshold.
    #[must_use]
    pub const fn hold_multiplier(&self) -> u32 {
        self.hold_multiplier
    }

    /// Returns the hand positions to discard.
    #[must_use]
    pub fn decide(&self, hand: &[Card]) -> Vec<usize> {
        self.decision(hand).discards
    }

    /// Returns the positions to discard together with the rule that chose
    /// them.
    #[must_use]
    pub fn decision(&self, hand: &[Card]) -> Decision {
        let analysis = Analysis::new(hand);
        let category = analysis.category();
        let potential = analysis.potential();

        let (rule, discards) = if category.multiplier() >= self.hold_multiplier {
            (Rule::Hold, Vec::new())
        } else if let Some(rank) = analysis.ranks_with_count(4).next() {
            (Rule::FourOfAKind, positions(hand, |card| card.rank != rank))
        } else if potential.flush {
            let suit = analysis.majority_suit();
            (Rule::FlushDraw, positions(hand, |card| card.suit != suit))
        } else if potential.straight {
            let values: Vec<u8> = analysis.distinct_values().collect();
            let run = loose_run(&values);
            (
                Rule::StraightDraw,
                positions(hand, |card| !run.contains(&card.value())),
            )
        } else if let Some(rank) = analysis.ranks_with_count(3).next() {
            (Rule::ThreeOfAKind, positions(hand, |card| card.rank != rank))
        } else if potential.pairs >= 2 {
            (
                Rule::TwoPair,
                positions(hand, |card| analysis.rank_count(card.rank) != 2),
            )
        } else if let Some(rank) = analysis.ranks_with_count(2).next() {
            (Rule::Pair, positions(hand, |card| card.rank != rank))
        } else {
            (Rule::HighCard, all_but_highest(hand))
        };

        Decision { rule, discards }
    }
}

fn positions(hand: &[Card], discard: impl Fn(&Card) -> bool) -> Vec<usize> {
    hand.iter()
        .enumerate()
        .filter(|&(_, card)| discard(card))
        .map(|(index, _)| index)
        .collect()
}

/// Keeps the first card holding the highest value.
fn all_but_highest(hand: &[Card]) -> Vec<usize> {
    let keep = hand
        .iter()
        .enumerate()
        .fold(None::<(usize, u8)>, |best, (index, card)| match best {
            Some((_, value)) if value >= card.value() => best,
            _ => Some((index, card.value())),
        })
        .map(|(index, _)| index);

    (0..hand.len()).filter(|&index| Some(index) != keep).collect()
}

/// Greedily groups ascending values into runs, joining a value to the
/// current run while it is at most [`RUN_GAP`] above the previous one, and
/// returns the first longest run.
fn loose_run(values: &[u8]) -> &[u8] {
    let mut best: &[u8] = &[];
    let mut start = 0;
    for end in 1..=values.len() {
        let breaks = end == values.len() || values[end] - values[end - 1] > RUN_GAP;
        if breaks {
            let run = &values[start..end];
            if run.len() > best.len() {
                best = run;
            }
            start = end;
        }
    }
    best
}
