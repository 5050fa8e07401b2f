//! The key-driven state machine.
//!
//! [`apply`] is a pure function: it consumes one [`EngineState`] and returns
//! the next. Failures never escape; they become the `"Error"` display, from
//! which only [`KeyEvent::ClearAll`] recovers.

use super::error::CalcError;
use super::evaluation::{evaluate, percent_of};
use super::key::{KeyEvent, Operator};
use super::state::{EngineState, Pending};

/// Digit keys are ignored once the display holds this many digits.
pub const MAX_DIGITS: usize = 15;

/// The outcome of one key press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The state after the key was applied.
    pub state: EngineState,
    /// Why the key moved the engine into the error state, if it did.
    pub error: Option<CalcError>,
}

impl Transition {
    fn to(state: EngineState) -> Self {
        Self { state, error: None }
    }

    fn failed(error: CalcError) -> Self {
        Self {
            state: EngineState::error(),
            error: Some(error),
        }
    }
}

/// Apply a key to a state, producing the next state.
pub fn apply(state: EngineState, key: KeyEvent) -> EngineState {
    transition(state, key).state
}

/// Like [`apply`], but also reports the error that caused a move to the
/// error state.
pub fn transition(state: EngineState, key: KeyEvent) -> Transition {
    match key {
        KeyEvent::ClearAll => Transition::to(EngineState::new()),
        _ if state.is_error() => Transition::to(state),
        KeyEvent::Digit(digit) => Transition::to(enter_digit(state, digit)),
        KeyEvent::Decimal => Transition::to(enter_decimal(state)),
        KeyEvent::ToggleSign => Transition::to(toggle_sign(state)),
        KeyEvent::Percent => Transition::to(percent(state)),
        KeyEvent::Operator(op) => press_operator(state, op),
        KeyEvent::Equals => press_equals(state),
    }
}

impl EngineState {
    /// Consume this state and return the one that follows `key`.
    pub fn apply(self, key: KeyEvent) -> Self {
        apply(self, key)
    }
}

fn enter_digit(mut state: EngineState, digit: u8) -> EngineState {
    let Some(ch) = char::from_digit(u32::from(digit), 10) else {
        return state;
    };

    if state.fresh_entry {
        state.display = ch.to_string();
        state.fresh_entry = false;
    } else if state.display == "0" {
        state.display = ch.to_string();
    } else if digit_count(&state.display) < MAX_DIGITS {
        state.display.push(ch);
    }

    state
}

fn enter_decimal(mut state: EngineState) -> EngineState {
    if state.fresh_entry {
        state.display = "0.".to_string();
        state.fresh_entry = false;
    } else if !state.display.contains(['.', 'e']) {
        // An exponent-form result cannot take a decimal point.
        state.display.push('.');
    }

    state
}

fn toggle_sign(mut state: EngineState) -> EngineState {
    if state.display == "0" {
        return state;
    }

    state.display = match state.display.strip_prefix('-') {
        Some(magnitude) => magnitude.to_string(),
        None => format!("-{}", state.display),
    };

    state
}

fn percent(mut state: EngineState) -> EngineState {
    if let Ok(value) = percent_of(&state.display) {
        state.display = value;
    }

    state
}

fn press_operator(mut state: EngineState, op: Operator) -> Transition {
    let left = match state.pending.take() {
        // A right-hand operand has been entered: evaluate the chain so far.
        Some(pending) if !state.fresh_entry => {
            match evaluate(&pending.left, pending.operator, &state.display) {
                Ok(result) => {
                    state.display = result.clone();
                    result
                }
                Err(err) => return Transition::failed(err),
            }
        }
        _ => state.display.clone(),
    };

    state.pending = Some(Pending { operator: op, left });
    state.fresh_entry = true;
    Transition::to(state)
}

fn press_equals(state: EngineState) -> Transition {
    let Some(pending) = state.pending.as_ref() else {
        return Transition::to(state);
    };
    if state.fresh_entry {
        return Transition::to(state);
    }

    match evaluate(&pending.left, pending.operator, &state.display) {
        Ok(result) => Transition::to(EngineState {
            display: result,
            pending: None,
            fresh_entry: true,
        }),
        Err(err) => Transition::failed(err),
    }
}

fn digit_count(display: &str) -> usize {
    display.chars().filter(char::is_ascii_digit).count()
}
