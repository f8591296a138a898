use tracing::{Level, event};

use crate::error::ActionError;
use crate::player::Seat;

use super::{Game, GameState};

impl Game {
    pub(super) fn ensure_in_progress(&self) -> Result<u8, ActionError> {
        match self.state {
            GameState::InProgress { turn } => Ok(turn),
            state => {
                event!(Level::TRACE, ?state, "action rejected");
                Err(ActionError::InvalidState)
            }
        }
    }

    /// Discards the cards at `indices` from the human's hand, draws
    /// replacements, then advances the turn.
    ///
    /// An empty `indices` skips the exchange and only advances the turn.
    /// Out-of-range positions are skipped; repeated positions count once.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress, `seat` is the
    /// opponent, or more than `max_discards` positions are given. The game
    /// is unchanged in every error case.
    ///
    /// # Example
    ///
    /// ```
    /// use drawrs::{ActionError, Game, GameOptions, GameState, Seat};
    ///
    /// let mut game = Game::new(GameOptions::default(), 3);
    /// assert_eq!(game.discard(Seat::Human, &[0]), Err(ActionError::InvalidState));
    ///
    /// game.start().unwrap();
    /// assert_eq!(game.discard(Seat::Human, &[0, 1]), Ok(GameState::InProgress { turn: 2 }));
    /// assert_eq!(game.player(Seat::Human).unwrap().last_change().drawn.len(), 2);
    /// ```
    pub fn discard(&mut self, seat: Seat, indices: &[usize]) -> Result<GameState, ActionError> {
        self.ensure_in_progress()?;
        if seat != Seat::Human {
            return Err(ActionError::ComputerControlled(seat));
        }
        let max = self.options.max_discards;
        if indices.len() > max {
            return Err(ActionError::TooManyDiscards {
                count: indices.len(),
                max,
            });
        }

        if !indices.is_empty() {
            let player = self.player_mut(seat).ok_or(ActionError::InvalidState)?;
            player.exchange(indices);
        }

        self.advance_turn()
    }

    /// Moves to the next turn and lets the opponent exchange, or decides the
    /// winner after the last turn.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if the game is not in progress.
    pub fn advance_turn(&mut self) -> Result<GameState, ActionError> {
        let turn = self.ensure_in_progress()?;
        if turn < self.options.max_turns {
            self.state = GameState::InProgress { turn: turn + 1 };
            self.play_computer_turn();
        } else {
            self.determine_winner()?;
        }
        Ok(self.state)
    }

    fn play_computer_turn(&mut self) {
        let strategy = self.options.strategy();
        let Some(computer) = self.player_mut(Seat::Computer) else {
            return;
        };

        let decision = strategy.decision(computer.hand());
        event!(
            Level::DEBUG,
            rule = ?decision.rule,
            discards = ?decision.discards,
            "opponent decided"
        );
        if !decision.discards.is_empty() {
            computer.exchange(&decision.discards);
        }
    }
}
