//! Intents for the calculator engine.

use crate::mvi::Intent;

use super::operation::{Constant, Operation, ScientificFn};

/// One key press on the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcIntent {
    /// Digit 0-9. Values above 9 are ignored.
    Digit(u8),
    DecimalPoint,
    ToggleSign,
    Percent,
    Operation(Operation),
    Equals,
    Clear,

    // Scientific layout only.
    Scientific(ScientificFn),
    Constant(Constant),
    Backspace,
}

impl Intent for CalcIntent {}
