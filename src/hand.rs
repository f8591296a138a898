//! Hand classification and scoring.
//!
//! A hand is classified by testing each [`Category`] from the strongest down
//! and taking the first match. Its score is the sum of the card values times
//! the category multiplier; two hands are compared by that score alone.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::card::{Card, Rank, Suit};
use crate::error::CategoryError;

/// Poker hand category, weakest first.
///
/// The discriminant is the score multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    /// No other category applies.
    HighCard = 1,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive values.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind plus a pair (or two three-of-a-kinds).
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// A flush and a straight in the same hand.
    StraightFlush,
    /// A flush with Ten through Ace present.
    RoyalFlush,
}

impl Category {
    /// All categories, strongest first.
    pub const ALL: [Self; 10] = [
        Self::RoyalFlush,
        Self::StraightFlush,
        Self::FourOfAKind,
        Self::FullHouse,
        Self::Flush,
        Self::Straight,
        Self::ThreeOfAKind,
        Self::TwoPair,
        Self::Pair,
        Self::HighCard,
    ];

    /// Returns the score multiplier (1 for High Card up to 10 for Royal Flush).
    #[must_use]
    pub const fn multiplier(self) -> u32 {
        self as u32
    }

    /// Returns the display label, e.g. `"Four of a Kind"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::Pair => "Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| CategoryError(s.into()))
    }
}

impl TryFrom<String> for Category {
    type Error = CategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().into()
    }
}

/// The evaluation of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandScore {
    /// Composite score: `base_value * multiplier`.
    pub score: u32,
    /// Best matching category.
    pub category: Category,
    /// Sum of the card values.
    pub base_value: u32,
    /// Multiplier of `category`.
    pub multiplier: u32,
}

impl HandScore {
    const fn new(category: Category, base_value: u32) -> Self {
        let multiplier = category.multiplier();
        Self {
            score: base_value.saturating_mul(multiplier),
            category,
            base_value,
            multiplier,
        }
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} x {} = {})",
            self.category, self.base_value, self.multiplier, self.score
        )
    }
}

/// Draw potential of a hand, used by the opponent to pick discards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Potential {
    /// Number of ranks held exactly twice.
    pub pairs: usize,
    /// Whether some rank is held exactly three times.
    pub three_of_a_kind: bool,
    /// Whether some suit is held at least four times.
    pub flush: bool,
    /// Whether four distinct values fit inside a span of five.
    pub straight: bool,
}

type Predicate = fn(&Analysis) -> bool;

/// Categories above High Card with their predicates, in priority order.
const RULES: [(Category, Predicate); 9] = [
    (Category::RoyalFlush, Analysis::is_royal_flush),
    (Category::StraightFlush, Analysis::is_straight_flush),
    (Category::FourOfAKind, Analysis::is_four_of_a_kind),
    (Category::FullHouse, Analysis::is_full_house),
    (Category::Flush, Analysis::is_flush),
    (Category::Straight, Analysis::is_straight),
    (Category::ThreeOfAKind, Analysis::is_three_of_a_kind),
    (Category::TwoPair, Analysis::is_two_pair),
    (Category::Pair, Analysis::is_pair),
];

const ROYAL_VALUES: [u8; 5] = [10, 11, 12, 13, 14];
const WHEEL_VALUES: [u8; 5] = [14, 2, 3, 4, 5];

/// Rank and suit counts of a hand, computed once.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Indexed by card value (2..=14).
    rank_counts: [u8; 15],
    /// Indexed by `Suit as usize`.
    suit_counts: [u8; 4],
    base_value: u32,
}

impl Analysis {
    /// Counts the ranks and suits of `cards`.
    ///
    /// A dealt hand has seven distinct cards. Other slices are accepted;
    /// counts and the base value saturate instead of overflowing.
    #[must_use]
    pub fn new(cards: &[Card]) -> Self {
        let mut rank_counts = [0u8; 15];
        let mut suit_counts = [0u8; 4];
        let mut base_value = 0u32;
        for card in cards {
            let rank = &mut rank_counts[card.value() as usize];
            *rank = rank.saturating_add(1);
            let suit = &mut suit_counts[card.suit as usize];
            *suit = suit.saturating_add(1);
            base_value = base_value.saturating_add(u32::from(card.value()));
        }
        Self {
            rank_counts,
            suit_counts,
            base_value,
        }
    }

    /// Returns the sum of the card values.
    #[must_use]
    pub const fn base_value(&self) -> u32 {
        self.base_value
    }

    /// Returns how many cards of `rank` are held.
    #[must_use]
    pub const fn rank_count(&self, rank: Rank) -> u8 {
        self.rank_counts[rank.value() as usize]
    }

    /// Returns how many cards of `suit` are held.
    #[must_use]
    pub const fn suit_count(&self, suit: Suit) -> u8 {
        self.suit_counts[suit as usize]
    }

    /// Returns the ranks held exactly `count` times, highest first.
    pub fn ranks_with_count(&self, count: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::ALL
            .into_iter()
            .rev()
            .filter(move |&rank| self.rank_count(rank) == count)
    }

    /// Returns the suit held most often. Ties go to the earlier suit in
    /// [`Suit::ALL`].
    #[must_use]
    pub fn majority_suit(&self) -> Suit {
        let mut best = Suit::ALL[0];
        for suit in Suit::ALL {
            if self.suit_count(suit) > self.suit_count(best) {
                best = suit;
            }
        }
        best
    }

    /// Returns the distinct values held, ascending.
    pub fn distinct_values(&self) -> impl Iterator<Item = u8> + '_ {
        (2..=14u8).filter(move |&value| self.rank_counts[value as usize] > 0)
    }

    fn has_value(&self, value: u8) -> bool {
        self.rank_counts[value as usize] > 0
    }

    fn ranks_counted(&self, count: u8) -> usize {
        self.rank_counts.iter().filter(|&&c| c == count).count()
    }

    fn has_suited_five(&self) -> bool {
        self.suit_counts.iter().any(|&count| count >= 5)
    }

    /// A suit is held five times and Ten through Ace are all present.
    ///
    /// The royal ranks need not share the flush suit.
    #[must_use]
    pub fn is_royal_flush(&self) -> bool {
        self.has_suited_five() && ROYAL_VALUES.iter().all(|&value| self.has_value(value))
    }

    /// A suit is held five times and the hand contains a straight.
    ///
    /// The straight need not share the flush suit.
    #[must_use]
    pub fn is_straight_flush(&self) -> bool {
        self.has_suited_five() && self.is_straight()
    }

    /// Some rank is held four times.
    #[must_use]
    pub fn is_four_of_a_kind(&self) -> bool {
        self.ranks_counted(4) > 0
    }

    /// Two three-of-a-kinds, or one three-of-a-kind plus a pair.
    #[must_use]
    pub fn is_full_house(&self) -> bool {
        let trips = self.ranks_counted(3);
        trips == 2 || (trips == 1 && self.ranks_counted(2) >= 1)
    }

    /// Some suit is held at least five times.
    #[must_use]
    pub fn is_flush(&self) -> bool {
        self.has_suited_five()
    }

    /// Five consecutive values, or A-2-3-4-5.
    #[must_use]
    pub fn is_straight(&self) -> bool {
        let run = (2..=10u8).any(|low| (low..low + 5).all(|value| self.has_value(value)));
        run || WHEEL_VALUES.iter().all(|&value| self.has_value(value))
    }

    /// Exactly one rank held three times and no pair.
    #[must_use]
    pub fn is_three_of_a_kind(&self) -> bool {
        self.ranks_counted(3) == 1 && self.ranks_counted(2) == 0
    }

    /// At least two ranks held exactly twice.
    #[must_use]
    pub fn is_two_pair(&self) -> bool {
        self.ranks_counted(2) >= 2
    }

    /// Some rank held exactly twice.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.ranks_counted(2) >= 1
    }

    /// Returns the first matching category in priority order.
    #[must_use]
    pub fn category(&self) -> Category {
        RULES
            .iter()
            .find(|(_, predicate)| predicate(self))
            .map_or(Category::HighCard, |&(category, _)| category)
    }

    /// Classifies and scores the hand.
    #[must_use]
    pub fn score(&self) -> HandScore {
        HandScore::new(self.category(), self.base_value)
    }

    /// Returns the draw potential of the hand.
    #[must_use]
    pub fn potential(&self) -> Potential {
        let mut window = [0u8; 4];
        let mut seen = 0;
        let mut straight = false;
        for value in self.distinct_values() {
            window.rotate_left(1);
            window[3] = value;
            seen += 1;
            if seen >= 4 && window[3] - window[0] <= 4 {
                straight = true;
                break;
            }
        }

        Potential {
            pairs: self.ranks_counted(2),
            three_of_a_kind: self.ranks_counted(3) > 0,
            flush: self.suit_counts.iter().any(|&count| count >= 4),
            straight,
        }
    }
}

/// Classifies and scores a hand.
///
/// # Example
///
/// ```
/// use drawrs::{Card, Category, evaluate};
///
/// let hand = [
///     Card::parse("Hearts", "10").unwrap(),
///     Card::parse("Hearts", "Jack").unwrap(),
///     Card::parse("Hearts", "Queen").unwrap(),
///     Card::parse("Hearts", "King").unwrap(),
///     Card::parse("Hearts", "Ace").unwrap(),
///     Card::parse("Clubs", "2").unwrap(),
///     Card::parse("Clubs", "3").unwrap(),
/// ];
/// let score = evaluate(&hand);
/// assert_eq!(score.category, Category::RoyalFlush);
/// assert_eq!(score.multiplier, 10);
/// assert_eq!(score.score, 65 * 10);
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandScore {
    Analysis::new(cards).score()
}
