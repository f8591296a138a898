use alloc::vec::Vec;

use tracing::{Level, event};

use crate::card::CARDS_PER_HAND;
use crate::deck::Deck;
use crate::error::StartError;
use crate::options::DealMode;
use crate::player::{Player, Seat};

use super::{Game, GameState};

impl Game {
    /// Builds the draw piles, deals both hands and starts turn 1.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::AlreadyInProgress`] if a game is running and
    /// [`StartError::Finished`] if the last game has not been reset; neither
    /// changes the game. Returns [`StartError::Options`] if the options
    /// cannot support a full game.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::{Game, GameOptions, GameState, Seat, StartError};
    ///
    /// let mut game = Game::new(GameOptions::default(), 7);
    /// assert_eq!(game.start(), Ok(GameState::InProgress { turn: 1 }));
    /// assert_eq!(game.player(Seat::Human).unwrap().hand().len(), 7);
    ///
    /// assert_eq!(game.start(), Err(StartError::AlreadyInProgress));
    /// ```
    pub fn start(&mut self) -> Result<GameState, StartError> {
        match self.state {
            GameState::NotStarted => {}
            GameState::InProgress { turn } => {
                event!(Level::TRACE, turn, "start ignored, game in progress");
                return Err(StartError::AlreadyInProgress);
            }
            GameState::Finished { .. } => return Err(StartError::Finished),
        }
        self.options.validate()?;

        let mut rng = self.deal_rng();
        let piles = match self.options.deal {
            DealMode::Independent => [Deck::shuffled(&mut rng), Deck::shuffled(&mut rng)],
            DealMode::Split => {
                let (first, second) = Deck::shuffled(&mut rng).split();
                [first, second]
            }
        };

        let players = Seat::ALL
            .into_iter()
            .zip(piles)
            .map(|(seat, pile)| Player::deal(seat, pile, CARDS_PER_HAND))
            .collect::<Result<Vec<_>, _>>()?;

        self.players = players;
        self.deals += 1;
        self.state = GameState::InProgress { turn: 1 };

        event!(
            Level::DEBUG,
            deal = self.deals,
            mode = ?self.options.deal,
            human = %self.players[0].score(),
            computer = %self.players[1].score(),
            "game started"
        );

        Ok(self.state)
    }
}
