//! keycalc - a four-function calculator driven by key presses.
//!
//! The core is [`calculator::apply`], a pure transition from one
//! [`EngineState`] to the next. Everything else in the crate either feeds
//! it keys or reads its display.
//!
//! ```
//! use keycalc::{EngineState, KeyEvent, Operator};
//!
//! let state = [
//!     KeyEvent::Digit(7),
//!     KeyEvent::Operator(Operator::Add),
//!     KeyEvent::Digit(3),
//!     KeyEvent::Equals,
//! ]
//! .into_iter()
//! .fold(EngineState::new(), EngineState::apply);
//!
//! assert_eq!(state.display(), "10");
//! ```

pub mod calculator;
pub mod config;
pub mod keypad;
pub mod logging;
pub mod session;
pub mod ui;

pub use calculator::{CalcError, EngineState, KeyEvent, KeyKind, Operator, apply};
pub use config::Config;
pub use keypad::parse_key_line;
pub use session::Session;
