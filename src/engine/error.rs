//! Arithmetic failures of the calculator engine.
//!
//! None of these ever leave the engine as an `Err`: the reducer turns each
//! one into an error [`Notification`](super::Notification) and decides
//! whether the state is reset or kept.

use thiserror::Error;

/// Result type for engine arithmetic.
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors that can occur while evaluating an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division with a zero divisor.
    #[error("Cannot divide by zero")]
    DivideByZero,

    /// The computed value is NaN or infinite.
    #[error("Result is not a valid number")]
    InvalidResult,

    /// Equals produced a magnitude the display cannot hold.
    #[error("Result too large")]
    ResultTooLarge,
}
