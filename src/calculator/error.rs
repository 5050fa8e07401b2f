//! Error types for calculator evaluation.

use thiserror::Error;

/// Reasons an evaluation can fail.
///
/// None of these escape the engine: each one moves it to the `"Error"` display.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Operand is not a number: {0:?}")]
    Parse(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result is not a finite number")]
    NonFinite,
}

impl CalcError {
    /// Create a parse error for the given operand text.
    pub fn parse(operand: impl Into<String>) -> Self {
        Self::Parse(operand.into())
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
