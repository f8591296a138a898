//! A seven-card draw poker engine with optional `no_std` support.
//!
//! A [`Game`] pits a human against a scripted opponent. Each player draws
//! from a private pile; on every turn the human may swap up to five cards,
//! then the opponent swaps according to its [`Strategy`]. After the last turn
//! the higher composite score wins, where a hand's score is the sum of its
//! card values times the multiplier of its [`Category`].
//!
//! # Example
//!
//! ```
//! use drawrs::{Game, GameOptions, GameState, Seat};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.start().unwrap();
//!
//! while game.state().is_in_progress() {
//!     // Keep the two highest cards, swap the rest.
//!     game.discard(Seat::Human, &[2, 3, 4, 5, 6]).unwrap();
//! }
//!
//! assert!(matches!(game.state(), GameState::Finished { .. }));
//! println!("{}", game.result().unwrap().outcome);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod snapshot;
pub mod strategy;

// Re-export main types
pub use card::{CARDS_PER_HAND, Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, CardError, CategoryError, DeckError, OptionsError, RestoreError, StartError,
};
pub use game::{Game, GameState};
pub use hand::{Analysis, Category, HandScore, Potential, evaluate};
pub use options::{DealMode, GameOptions};
pub use player::{CardChange, Player, Seat};
pub use result::{GameResult, Outcome};
pub use snapshot::{PlayerRecord, Snapshot};
pub use strategy::{Decision, Rule, Strategy};
