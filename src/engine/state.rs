//! State of the calculator engine.

use crate::mvi::UiState;

use super::operation::Operation;

/// Mode derived from the pending-operation fields.
///
/// There is no error mode: a failing transition resets straight to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    PendingOperation,
}

/// Everything the calculator screen needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    /// Operand as typed, e.g. `"0."` or `"-12"`.
    pub display: String,
    /// Trailer shown above the display while an operation is pending (`"12 +"`).
    pub expression: String,
    /// First operand (or running result) of the pending operation.
    pub accumulator: Option<f64>,
    pub pending_operation: Option<Operation>,
    /// Next digit starts a new operand instead of extending `display`.
    pub awaiting_new_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            expression: String::new(),
            accumulator: None,
            pending_operation: None,
            awaiting_new_operand: false,
        }
    }
}

impl UiState for CalculatorState {}

impl CalculatorState {
    pub fn mode(&self) -> Mode {
        match (self.accumulator, self.pending_operation) {
            (Some(_), Some(_)) => Mode::PendingOperation,
            _ => Mode::Idle,
        }
    }

    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }
}
