use drawrs::{Card, Game, GameOptions, GameResult, GameState, HandScore, Outcome, Player, Seat};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    /// Rebuilds a game from a value produced by [`save`](Self::save).
    pub fn load(saved: JsValue) -> Result<WasmGame, JsValue> {
        let snapshot = serde_wasm_bindgen::from_value(saved).map_err(js_err)?;
        let game = Game::restore(snapshot).map_err(js_err)?;
        Ok(Self { game })
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(*self.game.options(), seed as u64);
    }

    /// Clears the table for another game with the same seed.
    pub fn new_game(&mut self) {
        self.game.reset();
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        self.game.start().map(|_| ()).map_err(js_err)
    }

    pub fn discard(&mut self, positions: Vec<u32>) -> Result<(), JsValue> {
        let positions: Vec<usize> = positions.into_iter().map(|index| index as usize).collect();
        self.game
            .discard(Seat::Human, &positions)
            .map(|_| ())
            .map_err(js_err)
    }

    pub fn stand_pat(&mut self) -> Result<(), JsValue> {
        self.game.advance_turn().map(|_| ()).map_err(js_err)
    }

    pub fn result(&self) -> Result<JsValue, JsValue> {
        match self.game.result() {
            Some(result) => to_js_value(&JsResult::from(result)),
            None => Ok(JsValue::NULL),
        }
    }

    /// Full engine record, suitable for session storage.
    pub fn save(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.game.snapshot())
    }

    /// Table view for rendering. Hides the opponent's cards until the end.
    pub fn view(&self) -> Result<JsValue, JsValue> {
        let state = self.game.state();
        let finished = matches!(state, GameState::Finished { .. });

        let view = View {
            state: state_to_str(state),
            turn: state.turn(),
            max_turns: self.game.options().max_turns,
            max_discards: self.game.options().max_discards as u32,
            human: self.game.player(Seat::Human).map(|player| JsPlayer::new(player, true)),
            computer: self
                .game
                .player(Seat::Computer)
                .map(|player| JsPlayer::new(player, finished)),
            winner: state.outcome().map(Outcome::label),
        };

        to_js_value(&view)
    }
}

#[derive(Serialize)]
struct View {
    state: &'static str,
    turn: Option<u8>,
    max_turns: u8,
    max_discards: u32,
    human: Option<JsPlayer>,
    computer: Option<JsPlayer>,
    winner: Option<&'static str>,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    value: u8,
}

#[derive(Serialize)]
struct JsScore {
    category: &'static str,
    multiplier: u32,
    base_value: u32,
    score: u32,
}

impl From<HandScore> for JsScore {
    fn from(score: HandScore) -> Self {
        Self {
            category: score.category.label(),
            multiplier: score.multiplier,
            base_value: score.base_value,
            score: score.score,
        }
    }
}

#[derive(Serialize)]
struct JsPlayer {
    hand: Option<Vec<JsCard>>,
    score: Option<JsScore>,
    cards_remaining: u32,
    discarded: u32,
}

impl JsPlayer {
    fn new(player: &Player, revealed: bool) -> Self {
        Self {
            hand: revealed.then(|| player.hand().iter().copied().map(card_to_js).collect()),
            score: revealed.then(|| JsScore::from(player.score())),
            cards_remaining: player.draw_pile().len() as u32,
            discarded: player.last_change().discarded.len() as u32,
        }
    }
}

#[derive(Serialize)]
struct JsResult {
    outcome: &'static str,
    human: JsScore,
    computer: JsScore,
}

impl From<GameResult> for JsResult {
    fn from(result: GameResult) -> Self {
        Self {
            outcome: result.outcome.label(),
            human: result.human.into(),
            computer: result.computer.into(),
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: card.suit.name(),
        rank: card.rank.name(),
        value: card.value(),
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::NotStarted => "NotStarted",
        GameState::InProgress { .. } => "InProgress",
        GameState::Finished { .. } => "Finished",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
