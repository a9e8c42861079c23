//! Calculator engine: a single-operand accumulator with one pending
//! binary operation.
//!
//! The engine is a pure reducer. Each [`CalcIntent`] replaces the whole
//! [`CalculatorState`] and may emit one [`Notification`]; nothing in here
//! touches the terminal, the clock or the logger.

mod error;
mod intent;
mod notification;
mod number;
mod operation;
mod reducer;
mod state;

pub use error::{CalcError, CalcResult};
pub use intent::CalcIntent;
pub use notification::{Notification, Severity};
pub use number::{format_number, parse_operand, MAX_MAGNITUDE};
pub use operation::{Constant, Operation, ScientificFn};
pub use reducer::CalculatorReducer;
pub use state::{CalculatorState, Mode};
