//! Game configuration options.

use serde::{Deserialize, Serialize};

use crate::card::{CARDS_PER_HAND, DECK_SIZE};
use crate::error::OptionsError;
use crate::strategy::{DEFAULT_HOLD_MULTIPLIER, Strategy};

/// How the players' draw piles are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DealMode {
    /// Each player draws from their own shuffled 52-card deck.
    #[default]
    Independent,
    /// One shuffled deck is split in half, 26 cards per player.
    Split,
}

impl DealMode {
    /// Returns the number of cards in each player's draw pile at the start.
    #[must_use]
    pub const fn reserve(self) -> usize {
        match self {
            Self::Independent => DECK_SIZE,
            Self::Split => DECK_SIZE / 2,
        }
    }
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use drawrs::{DealMode, GameOptions};
///
/// let options = GameOptions::default()
///     .with_max_turns(3)
///     .with_max_discards(4)
///     .with_deal(DealMode::Independent);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameOptions {
    /// Number of turns before the winner is decided.
    pub max_turns: u8,
    /// Most positions the human may discard in one exchange.
    pub max_discards: usize,
    /// How draw piles are built.
    pub deal: DealMode,
    /// The opponent keeps any hand whose category multiplier reaches this.
    pub ai_hold_multiplier: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_turns: 5,
            max_discards: 5,
            deal: DealMode::Independent,
            ai_hold_multiplier: DEFAULT_HOLD_MULTIPLIER,
        }
    }
}

impl GameOptions {
    /// Sets the number of turns.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_turns(3);
    /// assert_eq!(options.max_turns, 3);
    /// ```
    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: u8) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Sets the discard limit per exchange.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_discards(3);
    /// assert_eq!(options.max_discards, 3);
    /// ```
    #[must_use]
    pub const fn with_max_discards(mut self, max_discards: usize) -> Self {
        self.max_discards = max_discards;
        self
    }

    /// Sets how draw piles are built.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::{DealMode, GameOptions};
    ///
    /// let options = GameOptions::default().with_deal(DealMode::Split);
    /// assert_eq!(options.deal, DealMode::Split);
    /// ```
    #[must_use]
    pub const fn with_deal(mut self, deal: DealMode) -> Self {
        self.deal = deal;
        self
    }

    /// Sets the multiplier at which the opponent stops discarding.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_ai_hold_multiplier(9);
    /// assert_eq!(options.ai_hold_multiplier, 9);
    /// ```
    #[must_use]
    pub const fn with_ai_hold_multiplier(mut self, multiplier: u32) -> Self {
        self.ai_hold_multiplier = multiplier;
        self
    }

    /// Returns the opponent strategy described by these options.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        Strategy::new(self.ai_hold_multiplier)
    }

    /// Returns the most cards one exchange can replace. The opponent may
    /// keep a single card, so this is never below `CARDS_PER_HAND - 1`.
    #[must_use]
    pub const fn discard_cap(&self) -> usize {
        let opponent = CARDS_PER_HAND - 1;
        if self.max_discards > opponent {
            self.max_discards
        } else {
            opponent
        }
    }

    /// Returns the worst-case number of cards one player draws in a game.
    #[must_use]
    pub const fn cards_needed(&self) -> usize {
        CARDS_PER_HAND + self.max_turns as usize * self.discard_cap()
    }

    /// Checks that a full game can be played with these options.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no turns, the discard limit exceeds the
    /// hand size, or a draw pile could run dry.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.max_turns == 0 {
            return Err(OptionsError::NoTurns);
        }
        if self.max_discards > CARDS_PER_HAND {
            return Err(OptionsError::DiscardLimit {
                max: self.max_discards,
                hand: CARDS_PER_HAND,
            });
        }
        let needed = self.cards_needed();
        let available = self.deal.reserve();
        if needed > available {
            return Err(OptionsError::InsufficientReserve { needed, available });
        }
        Ok(())
    }
}
