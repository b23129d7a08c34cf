use rolloff::{
    DieRoll, DieRoller, RollOff, RollOffOptions, RollOffResult, RollOffState, SeededRoller,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmRollOff {
    roller: SeededRoller,
    options: RollOffOptions,
}

#[wasm_bindgen]
impl WasmRollOff {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64) -> Self {
        Self {
            roller: SeededRoller::new(seed as i64),
            options: RollOffOptions::default(),
        }
    }

    pub fn reseed(&self, seed: f64) {
        self.roller.set_seed(seed as i64);
    }

    pub fn seed(&self) -> f64 {
        self.roller.seed() as f64
    }

    pub fn set_max_rounds(&mut self, max_rounds: Option<u32>) {
        self.options = self.options.with_max_rounds(max_rounds);
    }

    pub fn roll_die(&self, sides: u32) -> Result<u32, JsValue> {
        self.roller.roll_die(sides).map_err(js_err)
    }

    pub fn roll_pair(&self) -> Result<JsValue, JsValue> {
        let roll = self.roller.roll_pair(self.options.die_sides).map_err(js_err)?;
        to_js_value(&JsRoll::from(roll))
    }

    /// Runs a roll-off. `eliminated` lists the seats that are out of the game.
    pub fn roll_off(&self, players: u32, eliminated: Vec<u32>) -> Result<JsValue, JsValue> {
        let oracle = |seat: usize| eliminated.iter().any(|&out| out as usize == seat);
        let mut rolloff = RollOff::new(players as usize, self.options).map_err(js_err)?;

        let mut rounds = Vec::new();
        loop {
            let state = rolloff.step(&self.roller, &oracle).map_err(js_err)?;
            rounds.push(JsRound {
                round: rolloff.rounds(),
                max: rolloff.current_max().unwrap_or(0),
                state: state_to_str(state),
            });
            if state != RollOffState::Rolling {
                break;
            }
        }

        let result = rolloff
            .finish()
            .ok_or_else(|| JsValue::from_str("roll-off did not finish"))?;
        to_js_value(&JsRollOff::new(&result, rounds))
    }

    pub fn decode(&self, data: &str) -> Result<JsValue, JsValue> {
        let result = RollOffResult::decode(data).map_err(js_err)?;
        to_js_value(&JsRollOff::new(&result, Vec::new()))
    }
}

#[derive(Serialize)]
struct JsRoll {
    first: u32,
    second: u32,
    sum: u32,
}

impl From<DieRoll> for JsRoll {
    fn from(roll: DieRoll) -> Self {
        Self {
            first: roll.first(),
            second: roll.second(),
            sum: roll.sum(),
        }
    }
}

#[derive(Serialize)]
struct JsRound {
    round: u32,
    max: u32,
    state: &'static str,
}

#[derive(Serialize)]
struct JsRollOff {
    winner: u32,
    rounds: u32,
    histories: Vec<Vec<JsRoll>>,
    rounds_log: Vec<JsRound>,
    wire: String,
}

impl JsRollOff {
    fn new(result: &RollOffResult, rounds_log: Vec<JsRound>) -> Self {
        Self {
            winner: result.winner() as u32,
            rounds: result.rounds(),
            histories: result
                .rolls()
                .iter()
                .map(|history| history.iter().copied().map(JsRoll::from).collect())
                .collect(),
            rounds_log,
            wire: result.encode(),
        }
    }
}

fn state_to_str(state: RollOffState) -> &'static str {
    match state {
        RollOffState::Rolling => "Rolling",
        RollOffState::Done { .. } => "Done",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
