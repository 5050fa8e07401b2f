//! An interactive calculator session.
//!
//! Owns the single engine state and replaces it on every key press.

use crate::calculator::{EngineState, KeyEvent, Transition, transition};
use tracing::{debug, warn};

/// A running calculator.
#[derive(Clone, Debug, Default)]
pub struct Session {
    state: EngineState,
}

impl Session {
    /// Start a session in the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current engine state.
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Get the current display text.
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Apply one key and return the resulting display text.
    pub fn press(&mut self, key: KeyEvent) -> &str {
        let Transition { state, error } = transition(std::mem::take(&mut self.state), key);

        if let Some(err) = error {
            warn!(%key, error = %err, "calculation failed");
        }
        debug!(
            %key,
            display = state.display(),
            operator = ?state.operator(),
            left = ?state.left_operand(),
            fresh_entry = state.fresh_entry(),
            "key applied"
        );

        self.state = state;
        self.state.display()
    }

    /// Apply a sequence of keys in order and return the final display text.
    pub fn press_all<I>(&mut self, keys: I) -> &str
    where
        I: IntoIterator<Item = KeyEvent>,
    {
        for key in keys {
            self.press(key);
        }
        self.state.display()
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        self.press(KeyEvent::ClearAll);
    }
}
