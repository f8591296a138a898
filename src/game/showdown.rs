use tracing::{Level, event};

use crate::error::ActionError;
use crate::player::Seat;
use crate::result::GameResult;

use super::{Game, GameState};

impl Game {
    /// Compares the two scores and finishes the game.
    ///
    /// The higher composite score wins; equal scores are a draw. This is
    /// called by [`advance_turn`](Self::advance_turn) after the last turn and
    /// can also be called directly to end a game early.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if the game is not in progress.
    pub fn determine_winner(&mut self) -> Result<GameResult, ActionError> {
        self.ensure_in_progress()?;
        let human = self
            .player(Seat::Human)
            .ok_or(ActionError::InvalidState)?
            .score();
        let computer = self
            .player(Seat::Computer)
            .ok_or(ActionError::InvalidState)?
            .score();

        let result = GameResult::decide(human, computer);
        self.state = GameState::Finished {
            outcome: result.outcome,
        };

        event!(
            Level::INFO,
            outcome = %result.outcome,
            human = human.score,
            computer = computer.score,
            "game finished"
        );

        Ok(result)
    }
}
