//! Calculator engine driven by discrete key presses.
//!
//! This module provides:
//! - The key events a keypad can send
//! - The engine state and the pure transition function over it
//! - Operand evaluation and result formatting

mod engine;
mod error;
mod evaluation;
mod key;
mod state;

pub use engine::{MAX_DIGITS, Transition, apply, transition};
pub use error::{CalcError, Result};
pub use evaluation::{SIGNIFICANT_DIGITS, evaluate, format_number, percent_of};
pub use key::{KeyEvent, KeyKind, KeyParseError, Operator};
pub use state::{ERROR_DISPLAY, EngineState, Pending};
