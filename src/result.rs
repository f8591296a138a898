//! Final game results.

use core::fmt;

use crate::hand::HandScore;
use crate::player::Seat;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// One seat finished with the strictly higher score.
    Winner(Seat),
    /// Both scores were equal.
    Draw,
}

impl Outcome {
    /// Returns the label used in snapshots: the winning seat's name or `"Draw"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Winner(seat) => seat.name(),
            Self::Draw => "Draw",
        }
    }

    /// Parses a label produced by [`label`](Self::label).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        if label == "Draw" {
            Some(Self::Draw)
        } else {
            Seat::from_name(label).map(Self::Winner)
        }
    }

    /// Returns the winning seat, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Seat> {
        match self {
            Self::Winner(seat) => Some(seat),
            Self::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scores compared when the game was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// The outcome.
    pub outcome: Outcome,
    /// The human's final score.
    pub human: HandScore,
    /// The opponent's final score.
    pub computer: HandScore,
}

impl GameResult {
    /// Decides the outcome by comparing composite scores.
    #[must_use]
    pub fn decide(human: HandScore, computer: HandScore) -> Self {
        let outcome = match human.score.cmp(&computer.score) {
            core::cmp::Ordering::Greater => Outcome::Winner(Seat::Human),
            core::cmp::Ordering::Less => Outcome::Winner(Seat::Computer),
            core::cmp::Ordering::Equal => Outcome::Draw,
        };
        Self {
            outcome,
            human,
            computer,
        }
    }
}
