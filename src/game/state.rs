//! Game state types.

use crate::result::Outcome;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// No hands have been dealt.
    NotStarted,
    /// Hands are dealt and the human is to act.
    InProgress {
        /// Current turn, starting at 1.
        turn: u8,
    },
    /// The winner has been decided.
    Finished {
        /// How the game ended.
        outcome: Outcome,
    },
}

impl GameState {
    /// Returns the current turn while the game is in progress.
    #[must_use]
    pub const fn turn(self) -> Option<u8> {
        match self {
            Self::InProgress { turn } => Some(turn),
            _ => None,
        }
    }

    /// Returns the outcome once the game has finished.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Finished { outcome } => Some(outcome),
            _ => None,
        }
    }

    /// Returns whether the game is in progress.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress { .. })
    }
}
