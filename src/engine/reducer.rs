//! Reducer for the calculator engine.

use crate::mvi::Reducer;

use super::error::CalcError;
use super::intent::CalcIntent;
use super::notification::Notification;
use super::number::{ensure_finite, ensure_within_range, format_number, parse_operand};
use super::operation::{Constant, Operation, ScientificFn};
use super::state::CalculatorState;

type Transition = (CalculatorState, Option<Notification>);

/// Reducer for calculator state transitions.
///
/// Arithmetic failures never escape: they become an error notification.
/// Binary operations, equals and percent reset to the initial state on
/// failure; scientific functions keep the current display so the operand
/// can be corrected.
pub struct CalculatorReducer;

impl Reducer for CalculatorReducer {
    type State = CalculatorState;
    type Intent = CalcIntent;
    type Effect = Notification;

    fn reduce(state: Self::State, intent: Self::Intent) -> Transition {
        match intent {
            CalcIntent::Digit(digit) => (enter_digit(state, digit), None),
            CalcIntent::DecimalPoint => (enter_decimal_point(state), None),
            CalcIntent::ToggleSign => toggle_sign(state),
            CalcIntent::Percent => percent(state),
            CalcIntent::Operation(op) => choose_operation(state, op),
            CalcIntent::Equals => equals(state),
            CalcIntent::Clear => (CalculatorState::default(), None),
            CalcIntent::Scientific(function) => apply_function(state, function),
            CalcIntent::Constant(constant) => (insert_constant(state, constant), None),
            CalcIntent::Backspace => (backspace(state), None),
        }
    }
}

fn reset_with(err: CalcError) -> Transition {
    (CalculatorState::default(), Some(err.into()))
}

fn enter_digit(state: CalculatorState, digit: u8) -> CalculatorState {
    let Some(ch) = char::from_digit(u32::from(digit), 10) else {
        return state;
    };

    if state.awaiting_new_operand {
        return CalculatorState {
            display: ch.to_string(),
            awaiting_new_operand: false,
            ..state
        };
    }

    let display = if state.display == "0" {
        ch.to_string()
    } else {
        format!("{}{ch}", state.display)
    };
    // A digit that would push the operand past f64 range is dropped.
    if !parse_operand(&display).is_finite() {
        return state;
    }
    CalculatorState { display, ..state }
}

fn enter_decimal_point(state: CalculatorState) -> CalculatorState {
    if state.awaiting_new_operand {
        return CalculatorState {
            display: "0.".to_string(),
            awaiting_new_operand: false,
            ..state
        };
    }
    if state.display.contains('.') {
        return state;
    }

    let mut display = state.display;
    display.push('.');
    CalculatorState { display, ..state }
}

fn toggle_sign(state: CalculatorState) -> Transition {
    match ensure_finite(-parse_operand(&state.display)) {
        Ok(value) => (
            CalculatorState {
                display: format_number(value),
                ..state
            },
            None,
        ),
        Err(err) => reset_with(err),
    }
}

fn percent(state: CalculatorState) -> Transition {
    match ensure_finite(parse_operand(&state.display) / 100.0) {
        Ok(value) => (
            CalculatorState {
                display: format_number(value),
                ..state
            },
            None,
        ),
        Err(err) => reset_with(err),
    }
}

fn choose_operation(state: CalculatorState, op: Operation) -> Transition {
    let current = match ensure_finite(parse_operand(&state.display)) {
        Ok(current) => current,
        Err(err) => return reset_with(err),
    };

    // Pressing an operator on a zero operand does nothing, even mid-chain.
    if current == 0.0 {
        return (state, None);
    }

    let (accumulator, expression) = match (state.accumulator, state.pending_operation) {
        (Some(accumulator), Some(pending)) => match pending.apply(accumulator, current) {
            Ok(result) => (result, format!("{} {}", format_number(result), op.symbol())),
            Err(err) => return reset_with(err),
        },
        _ => (current, format!("{} {}", state.display, op.symbol())),
    };

    (
        CalculatorState {
            display: format_number(current),
            expression,
            accumulator: Some(accumulator),
            pending_operation: Some(op),
            awaiting_new_operand: true,
        },
        None,
    )
}

fn equals(state: CalculatorState) -> Transition {
    let (Some(accumulator), Some(pending)) = (state.accumulator, state.pending_operation) else {
        return (state, None);
    };

    let current = parse_operand(&state.display);
    match pending
        .apply(accumulator, current)
        .and_then(ensure_within_range)
    {
        Ok(result) => (
            CalculatorState {
                display: format_number(result),
                awaiting_new_operand: true,
                ..CalculatorState::default()
            },
            None,
        ),
        Err(err) => reset_with(err),
    }
}

fn apply_function(state: CalculatorState, function: ScientificFn) -> Transition {
    match function.apply(parse_operand(&state.display)) {
        Ok(result) => (
            CalculatorState {
                display: format_number(result),
                awaiting_new_operand: true,
                ..state
            },
            None,
        ),
        Err(err) => (state, Some(err.into())),
    }
}

fn insert_constant(state: CalculatorState, constant: Constant) -> CalculatorState {
    CalculatorState {
        display: format_number(constant.value()),
        awaiting_new_operand: true,
        ..state
    }
}

fn backspace(state: CalculatorState) -> CalculatorState {
    let mut display = state.display;
    if display.chars().count() > 1 {
        display.pop();
    } else {
        display = "0".to_string();
    }
    if display == "-" || display == "-0" {
        display = "0".to_string();
    }
    CalculatorState { display, ..state }
}
