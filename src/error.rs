//! Error types for game operations.

use alloc::string::String;

use thiserror::Error;

use crate::player::Seat;

/// Errors that can occur when building a card from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit is not one of Spades, Hearts, Diamonds or Clubs.
    #[error("invalid suit: {0}")]
    InvalidSuit(String),
    /// Rank is not one of 2 to 10, Jack, Queen, King or Ace.
    #[error("invalid rank: {0}")]
    InvalidRank(String),
}

/// A category label that names no hand category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hand category: {0}")]
pub struct CategoryError(pub String);

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to draw.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors reported by [`GameOptions::validate`](crate::GameOptions::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The game must last at least one turn.
    #[error("the game needs at least one turn")]
    NoTurns,
    /// The discard limit exceeds the hand size.
    #[error("discard limit {max} exceeds the hand size {hand}")]
    DiscardLimit {
        /// Configured discard limit.
        max: usize,
        /// Cards per hand.
        hand: usize,
    },
    /// A player's draw pile cannot cover the deal plus every exchange.
    #[error("a game may need {needed} cards per player but only {available} are dealt")]
    InsufficientReserve {
        /// Worst-case cards drawn by one player.
        needed: usize,
        /// Cards in each player's draw pile.
        available: usize,
    },
}

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// A game is already in progress; nothing was changed.
    #[error("a game is already in progress")]
    AlreadyInProgress,
    /// The previous game has finished and must be reset first.
    #[error("the game has finished; reset it before starting again")]
    Finished,
    /// The options cannot support a full game.
    #[error("invalid options: {0}")]
    Options(#[from] OptionsError),
    /// A draw pile ran out during the initial deal.
    #[error("initial deal failed: {0}")]
    Deal(#[from] DeckError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// More discard positions than allowed in one exchange.
    #[error("too many discards: {count} (maximum {max})")]
    TooManyDiscards {
        /// Number of positions requested.
        count: usize,
        /// Configured maximum.
        max: usize,
    },
    /// The seat is played by the engine and cannot be driven by the caller.
    #[error("{0} is controlled by the engine")]
    ComputerControlled(Seat),
}

/// Errors that can occur when restoring a game from a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestoreError {
    /// The options stored in the snapshot are invalid.
    #[error("invalid options: {0}")]
    Options(#[from] OptionsError),
    /// A player name is neither `Human` nor `Computer`.
    #[error("unknown player: {0}")]
    UnknownPlayer(String),
    /// A started game is missing one of its players.
    #[error("missing player: {0}")]
    MissingPlayer(Seat),
    /// A hand does not hold the expected number of cards.
    #[error("{seat} holds {len} cards")]
    HandSize {
        /// Player whose hand is wrong.
        seat: Seat,
        /// Number of cards found.
        len: usize,
    },
    /// A card is held twice: within one player, or across both players
    /// when they share a split deck.
    #[error("{0} holds a card that is already dealt")]
    DuplicateCard(Seat),
    /// Hand and draw pile together hold more cards than the deal gives out.
    #[error("{seat} holds {len} cards but only {reserve} are dealt per player")]
    TooManyCards {
        /// Player holding too many cards.
        seat: Seat,
        /// Cards in hand and draw pile.
        len: usize,
        /// Cards dealt to each player.
        reserve: usize,
    },
    /// A recorded score does not match the hand it belongs to.
    #[error("recorded score of {0} does not match its hand")]
    ScoreMismatch(Seat),
    /// The turn counter lies outside `1..=max_turns`.
    #[error("turn {turn} is outside 1..={max_turns}")]
    TurnOutOfRange {
        /// Recorded turn.
        turn: u8,
        /// Recorded turn limit.
        max_turns: u8,
    },
    /// The winner label is not `Human`, `Computer` or `Draw`.
    #[error("unknown winner: {0}")]
    UnknownWinner(String),
    /// Turn, winner and players do not describe a reachable state.
    #[error("turn, winner and players are inconsistent")]
    InconsistentState,
}
