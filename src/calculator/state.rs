//! The calculator engine's state value.

use super::key::Operator;
use serde::Serialize;

/// Text shown once a calculation has failed.
pub const ERROR_DISPLAY: &str = "Error";

/// An operator waiting for its right-hand operand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Pending {
    /// The operator to apply.
    pub operator: Operator,
    /// Decimal text of the left-hand operand.
    pub left: String,
}

/// Everything the calculator knows between two key presses.
///
/// The operator and its left operand live together in [`Pending`], so a
/// left operand without an operator cannot be represented.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EngineState {
    pub(crate) display: String,
    pub(crate) pending: Option<Pending>,
    pub(crate) fresh_entry: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineState {
    /// The state on power-up and after clear-all.
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            fresh_entry: true,
        }
    }

    pub(crate) fn error() -> Self {
        Self {
            display: ERROR_DISPLAY.to_string(),
            pending: None,
            fresh_entry: true,
        }
    }

    /// The text currently shown.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The pending operation, if any.
    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    /// The pending operator, if any.
    pub fn operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    /// The captured left operand, if an operation is pending.
    pub fn left_operand(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.left.as_str())
    }

    /// Whether the next digit starts a new number.
    pub fn fresh_entry(&self) -> bool {
        self.fresh_entry
    }

    /// Whether a failed calculation is being shown.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }
}
