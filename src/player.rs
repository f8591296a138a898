//! Players, their hands and the discard/draw exchange.

use alloc::vec::Vec;
use core::cmp::Reverse;
use core::fmt;

use serde::{Deserialize, Serialize};
use tracing::{Level, event};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::{HandScore, evaluate};

/// A seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    /// The player driving the game through [`Game::discard`](crate::Game::discard).
    Human,
    /// The scripted opponent.
    Computer,
}

impl Seat {
    /// Both seats, in dealing order.
    pub const ALL: [Self; 2] = [Self::Human, Self::Computer];

    /// Returns the display name of the seat.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::Computer => "Computer",
        }
    }

    /// Looks a seat up by its display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|seat| seat.name() == name)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cards given up and received by the most recent exchange.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardChange {
    /// Cards removed from the hand, in removal order.
    pub discarded: Vec<Card>,
    /// Cards drawn as replacements, in draw order.
    pub drawn: Vec<Card>,
}

impl CardChange {
    /// Returns whether nothing was exchanged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.discarded.is_empty() && self.drawn.is_empty()
    }
}

/// Sorts by value, highest first; equal values order Spades, Hearts,
/// Diamonds, Clubs.
fn sort_hand(hand: &mut [Card]) {
    hand.sort_by_key(|card| Reverse((card.value(), card.suit)));
}

/// A player: a private draw pile and the hand drawn from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    seat: Seat,
    draw_pile: Deck,
    hand: Vec<Card>,
    score: HandScore,
    previous_score: Option<HandScore>,
    last_change: CardChange,
}

impl Player {
    /// Deals `count` cards from `draw_pile` into a new hand.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the pile holds fewer than `count` cards.
    pub fn deal(seat: Seat, mut draw_pile: Deck, count: usize) -> Result<Self, DeckError> {
        let mut hand = (0..count)
            .map(|_| draw_pile.draw())
            .collect::<Result<Vec<_>, _>>()?;
        sort_hand(&mut hand);
        let score = evaluate(&hand);

        Ok(Self {
            seat,
            draw_pile,
            hand,
            score,
            previous_score: None,
            last_change: CardChange::default(),
        })
    }

    /// Rebuilds a player from stored parts, re-sorting the hand.
    pub(crate) fn from_parts(
        seat: Seat,
        draw_pile: Deck,
        mut hand: Vec<Card>,
        score: HandScore,
        previous_score: Option<HandScore>,
        last_change: CardChange,
    ) -> Self {
        sort_hand(&mut hand);
        Self {
            seat,
            draw_pile,
            hand,
            score,
            previous_score,
            last_change,
        }
    }

    /// Discards the cards at `indices` and draws a replacement for each.
    ///
    /// Positions refer to the hand before the exchange. Out-of-range
    /// positions are skipped and repeated positions count once. If the draw
    /// pile runs out, the remaining discards are abandoned so the hand keeps
    /// its size. The score from before the exchange becomes
    /// [`previous_score`](Self::previous_score).
    pub fn exchange(&mut self, indices: &[usize]) -> &CardChange {
        self.previous_score = Some(self.score);
        self.last_change = CardChange::default();

        let mut positions: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&index| index < self.hand.len())
            .collect();
        positions.sort_unstable_by(|a, b| b.cmp(a));
        positions.dedup();

        for index in positions {
            let card = match self.draw_pile.draw() {
                Ok(card) => card,
                Err(DeckError::Empty) => {
                    event!(
                        Level::WARN,
                        seat = %self.seat,
                        exchanged = self.last_change.drawn.len(),
                        "draw pile exhausted, exchange stopped early"
                    );
                    break;
                }
            };
            let discarded = self.hand.remove(index);
            self.last_change.discarded.push(discarded);
            self.hand.push(card);
            self.last_change.drawn.push(card);
        }

        sort_hand(&mut self.hand);
        self.score = evaluate(&self.hand);

        event!(
            Level::DEBUG,
            seat = %self.seat,
            exchanged = self.last_change.drawn.len(),
            score = %self.score,
            "cards exchanged"
        );

        &self.last_change
    }

    /// Returns the player's seat.
    #[must_use]
    pub const fn seat(&self) -> Seat {
        self.seat
    }

    /// Returns the hand, highest card first.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the cards left to draw from.
    #[must_use]
    pub const fn draw_pile(&self) -> &Deck {
        &self.draw_pile
    }

    /// Returns the score of the current hand.
    #[must_use]
    pub const fn score(&self) -> HandScore {
        self.score
    }

    /// Returns the score before the most recent exchange, if any.
    #[must_use]
    pub const fn previous_score(&self) -> Option<HandScore> {
        self.previous_score
    }

    /// Returns the most recent exchange.
    #[must_use]
    pub const fn last_change(&self) -> &CardChange {
        &self.last_change
    }
}
