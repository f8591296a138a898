//! Plain, serializable game records.
//!
//! A [`Snapshot`] holds everything needed to rebuild a [`Game`]: both hands
//! and draw piles, scores, the last exchange, the turn, the winner and the
//! seed. [`Game::restore`] is the exact inverse of [`Game::snapshot`].
//!
//! ```
//! use drawrs::{Game, GameOptions, Seat};
//!
//! let mut game = Game::new(GameOptions::default(), 11);
//! game.start().unwrap();
//! game.discard(Seat::Human, &[5, 6]).unwrap();
//!
//! let restored = Game::restore(game.snapshot()).unwrap();
//! assert_eq!(restored, game);
//! ```

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::card::{CARDS_PER_HAND, Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::RestoreError;
use crate::game::{Game, GameState};
use crate::hand::{HandScore, evaluate};
use crate::options::{DealMode, GameOptions};
use crate::player::{CardChange, Player, Seat};
use crate::result::{GameResult, Outcome};

/// A stored game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Players keyed by seat name (`"Human"`, `"Computer"`). Empty before the
    /// first deal.
    pub players: BTreeMap<String, PlayerRecord>,
    /// Current turn while the game is in progress.
    pub current_turn: Option<u8>,
    /// Turn limit.
    pub max_turns: u8,
    /// `"Human"`, `"Computer"` or `"Draw"` once the game has finished.
    pub winner: Option<String>,
    /// Options the game was created with.
    pub options: GameOptions,
    /// RNG seed.
    pub seed: u64,
    /// Games dealt with this seed.
    pub deals: u64,
}

/// A stored player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Hand, highest card first.
    pub hand: Vec<Card>,
    /// Remaining draw pile; the last card is drawn next.
    pub draw_pile: Vec<Card>,
    /// Score of the hand.
    pub score: HandScore,
    /// Score before the last exchange.
    pub previous_score: Option<HandScore>,
    /// The last exchange.
    pub last_change: CardChange,
}

impl From<&Player> for PlayerRecord {
    fn from(player: &Player) -> Self {
        Self {
            hand: player.hand().to_vec(),
            draw_pile: player.draw_pile().cards().to_vec(),
            score: player.score(),
            previous_score: player.previous_score(),
            last_change: player.last_change().clone(),
        }
    }
}

const fn card_index(card: &Card) -> usize {
    card.suit as usize * 13 + (card.value() as usize - 2)
}

fn is_consistent(score: &HandScore) -> bool {
    score.multiplier == score.category.multiplier()
        && score.base_value.checked_mul(score.multiplier) == Some(score.score)
}

/// Cards already seen while restoring, indexed by [`card_index`].
type Seen = [bool; DECK_SIZE];

fn restore_player(
    seat: Seat,
    record: PlayerRecord,
    reserve: usize,
    seen: &mut Seen,
) -> Result<Player, RestoreError> {
    if record.hand.len() != CARDS_PER_HAND {
        return Err(RestoreError::HandSize {
            seat,
            len: record.hand.len(),
        });
    }

    let len = record.hand.len() + record.draw_pile.len();
    if len > reserve {
        return Err(RestoreError::TooManyCards { seat, len, reserve });
    }

    for card in record.hand.iter().chain(&record.draw_pile) {
        let slot = &mut seen[card_index(card)];
        if *slot {
            return Err(RestoreError::DuplicateCard(seat));
        }
        *slot = true;
    }

    if evaluate(&record.hand) != record.score
        || record.previous_score.is_some_and(|score| !is_consistent(&score))
    {
        return Err(RestoreError::ScoreMismatch(seat));
    }

    Ok(Player::from_parts(
        seat,
        Deck::from_cards(record.draw_pile),
        record.hand,
        record.score,
        record.previous_score,
        record.last_change,
    ))
}

impl Game {
    /// Captures the game as a plain record.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let state = self.state();
        Snapshot {
            players: self
                .players()
                .iter()
                .map(|player| (String::from(player.seat().name()), PlayerRecord::from(player)))
                .collect(),
            current_turn: state.turn(),
            max_turns: self.options().max_turns,
            winner: state.outcome().map(|outcome| outcome.label().into()),
            options: *self.options(),
            seed: self.seed(),
            deals: self.deals(),
        }
    }

    /// Rebuilds a game from a record produced by [`snapshot`](Self::snapshot).
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not describe a reachable game:
    /// invalid options, unknown or missing players, wrong hand size, more
    /// cards than the deal gives out, a card held twice (across both players
    /// for a split deck), a score that does not match its hand, a turn
    /// outside the turn limit, or a winner that is unknown or disagrees with
    /// the scores.
    pub fn restore(snapshot: Snapshot) -> Result<Self, RestoreError> {
        let Snapshot {
            mut players,
            current_turn,
            max_turns,
            winner,
            options,
            seed,
            deals,
        } = snapshot;

        options.validate()?;
        if max_turns != options.max_turns {
            return Err(RestoreError::InconsistentState);
        }

        let state = match (current_turn, winner) {
            (None, None) => GameState::NotStarted,
            (Some(turn), None) => {
                if turn == 0 || turn > max_turns {
                    return Err(RestoreError::TurnOutOfRange { turn, max_turns });
                }
                GameState::InProgress { turn }
            }
            (None, Some(label)) => GameState::Finished {
                outcome: Outcome::from_label(&label).ok_or(RestoreError::UnknownWinner(label))?,
            },
            (Some(_), Some(_)) => return Err(RestoreError::InconsistentState),
        };

        if let Some(name) = players.keys().find(|name| Seat::from_name(name).is_none()) {
            return Err(RestoreError::UnknownPlayer(name.clone()));
        }

        let players = if state == GameState::NotStarted {
            if !players.is_empty() {
                return Err(RestoreError::InconsistentState);
            }
            Vec::new()
        } else {
            let reserve = options.deal.reserve();
            let mut seen: Seen = [false; DECK_SIZE];
            Seat::ALL
                .into_iter()
                .map(|seat| {
                    let record = players
                        .remove(seat.name())
                        .ok_or(RestoreError::MissingPlayer(seat))?;
                    // Split piles come from one deck; independent piles
                    // each hold a full deck of their own.
                    if options.deal != DealMode::Split {
                        seen = [false; DECK_SIZE];
                    }
                    restore_player(seat, record, reserve, &mut seen)
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        if let GameState::Finished { outcome } = state {
            let score = |seat: Seat| {
                players
                    .iter()
                    .find(|player| player.seat() == seat)
                    .map(Player::score)
            };
            if let (Some(human), Some(computer)) = (score(Seat::Human), score(Seat::Computer)) {
                if GameResult::decide(human, computer).outcome != outcome {
                    return Err(RestoreError::InconsistentState);
                }
            }
        }

        Ok(Self::from_parts(options, state, players, seed, deals))
    }
}
