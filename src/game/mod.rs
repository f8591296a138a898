//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::options::GameOptions;
use crate::player::{Player, Seat};
use crate::result::GameResult;

mod actions;
mod deal;
mod showdown;
pub mod state;

pub use state::GameState;

/// A seven-card draw poker game between a human and the scripted opponent.
///
/// The game is a plain value: every operation takes `&mut self`, nothing is
/// shared, and [`snapshot`](Self::snapshot) / [`restore`](Self::restore)
/// move it in and out of storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    options: GameOptions,
    state: GameState,
    /// Empty before the first deal; Human then Computer afterwards.
    players: Vec<Player>,
    seed: u64,
    /// Number of games dealt so far, used as the RNG stream.
    deals: u64,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::NotStarted);
    /// ```
    #[must_use]
    pub const fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            state: GameState::NotStarted,
            players: Vec::new(),
            seed,
            deals: 0,
        }
    }

    pub(crate) const fn from_parts(
        options: GameOptions,
        state: GameState,
        players: Vec<Player>,
        seed: u64,
        deals: u64,
    ) -> Self {
        Self {
            options,
            state,
            players,
            seed,
            deals,
        }
    }

    /// Returns a generator for the next deal. Each deal of a game uses its
    /// own stream of the seeded generator.
    fn deal_rng(&self) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        rng.set_stream(self.deals);
        rng
    }

    /// Returns the options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns how many games have been dealt with this seed.
    #[must_use]
    pub const fn deals(&self) -> u64 {
        self.deals
    }

    /// Returns the players: empty before the first deal, otherwise Human
    /// then Computer.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player in `seat`, if hands have been dealt.
    #[must_use]
    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.iter().find(|player| player.seat() == seat)
    }

    fn player_mut(&mut self, seat: Seat) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.seat() == seat)
    }

    /// Returns the final result once the game has finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        let outcome = self.state.outcome()?;
        Some(GameResult {
            outcome,
            human: self.player(Seat::Human)?.score(),
            computer: self.player(Seat::Computer)?.score(),
        })
    }

    /// Returns to [`GameState::NotStarted`] and clears both players.
    ///
    /// The seed and deal counter are kept, so the next game gets a fresh but
    /// reproducible shuffle.
    pub fn reset(&mut self) {
        self.players.clear();
        self.state = GameState::NotStarted;
    }
}
