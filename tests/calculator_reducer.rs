//! Key sequences through the calculator reducer, as a user would press them.

use pocketcalc::engine::{
    CalcIntent, CalculatorReducer, CalculatorState, Mode, Notification, Operation, ScientificFn,
    Severity,
};
use pocketcalc::mvi::Reducer;

fn press_all(intents: &[CalcIntent]) -> (CalculatorState, Vec<Notification>) {
    let mut state = CalculatorState::default();
    let mut notifications = Vec::new();
    for intent in intents {
        let (next, notification) = CalculatorReducer::reduce(state, *intent);
        state = next;
        notifications.extend(notification);
    }
    (state, notifications)
}

fn digits(text: &str) -> Vec<CalcIntent> {
    text.bytes().map(|b| CalcIntent::Digit(b - b'0')).collect()
}

#[test]
fn test_simple_addition() {
    let mut intents = vec![CalcIntent::Clear];
    intents.extend(digits("12"));
    intents.push(CalcIntent::Operation(Operation::Add));
    intents.extend(digits("3"));
    intents.push(CalcIntent::Equals);

    let (state, notifications) = press_all(&intents);
    assert_eq!(state.display, "15");
    assert_eq!(state.expression, "");
    assert!(state.awaiting_new_operand);
    assert_eq!(state.mode(), Mode::Idle);
    assert!(notifications.is_empty());
}

#[test]
fn test_divide_by_zero_resets_with_error() {
    let (state, notifications) = press_all(&[
        CalcIntent::Clear,
        CalcIntent::Digit(5),
        CalcIntent::Operation(Operation::Divide),
        CalcIntent::Digit(0),
        CalcIntent::Equals,
    ]);

    assert!(state.is_initial());
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].severity, Severity::Error);
    assert_eq!(notifications[0].message, "Cannot divide by zero");
}

#[test]
fn test_chained_operations() {
    let mut intents = vec![CalcIntent::Clear];
    intents.extend(digits("2"));
    intents.push(CalcIntent::Operation(Operation::Add));
    intents.extend(digits("3"));
    intents.push(CalcIntent::Operation(Operation::Add));

    let (state, _) = press_all(&intents);
    assert_eq!(state.expression, "5 +");
    assert_eq!(state.mode(), Mode::PendingOperation);

    intents.extend(digits("4"));
    intents.push(CalcIntent::Equals);
    let (state, notifications) = press_all(&intents);
    assert_eq!(state.display, "9");
    assert!(notifications.is_empty());
}

#[test]
fn test_result_too_large() {
    let mut intents = vec![CalcIntent::Clear];
    intents.extend(digits("999999999"));
    intents.push(CalcIntent::Operation(Operation::Multiply));
    intents.extend(digits("99999999"));
    intents.push(CalcIntent::Equals);

    let (state, notifications) = press_all(&intents);
    assert!(state.is_initial());
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].message, "Result too large");
}

#[test]
fn test_sign_toggle_then_percent() {
    let (state, notifications) = press_all(&[
        CalcIntent::Clear,
        CalcIntent::Digit(5),
        CalcIntent::Digit(0),
        CalcIntent::ToggleSign,
        CalcIntent::Percent,
    ]);
    assert_eq!(state.display, "-0.5");
    assert!(notifications.is_empty());
}

#[test]
fn test_sqrt_of_negative_keeps_display() {
    let (state, notifications) = press_all(&[
        CalcIntent::Digit(1),
        CalcIntent::ToggleSign,
        CalcIntent::Scientific(ScientificFn::Sqrt),
    ]);
    assert_eq!(state.display, "-1");
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].message, "Result is not a valid number");
}

#[test]
fn test_second_decimal_point_is_ignored() {
    let (once, _) = press_all(&[CalcIntent::Digit(3), CalcIntent::DecimalPoint]);
    let (twice, _) = press_all(&[
        CalcIntent::Digit(3),
        CalcIntent::DecimalPoint,
        CalcIntent::DecimalPoint,
    ]);
    assert_eq!(once, twice);
    assert_eq!(twice.display, "3.");
}

#[test]
fn test_clear_always_returns_to_initial() {
    let mut intents = digits("42");
    intents.push(CalcIntent::Operation(Operation::Subtract));
    intents.extend(digits("7"));
    intents.push(CalcIntent::Clear);

    let (state, _) = press_all(&intents);
    assert_eq!(state, CalculatorState::default());
}

#[test]
fn test_operator_on_zero_mid_chain_does_nothing() {
    let mut intents = digits("5");
    intents.push(CalcIntent::Operation(Operation::Add));
    intents.extend(digits("0"));
    let (before, _) = press_all(&intents);

    intents.push(CalcIntent::Operation(Operation::Add));
    let (after, notifications) = press_all(&intents);
    assert_eq!(before, after);
    assert!(notifications.is_empty());
}

#[test]
fn test_new_digit_after_result_starts_fresh() {
    let mut intents = digits("6");
    intents.push(CalcIntent::Operation(Operation::Multiply));
    intents.extend(digits("7"));
    intents.push(CalcIntent::Equals);
    intents.extend(digits("1"));

    let (state, _) = press_all(&intents);
    assert_eq!(state.display, "1");
    assert!(!state.awaiting_new_operand);
}

#[test]
fn test_equals_without_pending_is_noop() {
    let (before, _) = press_all(&digits("8"));
    let (after, notifications) = press_all(&[CalcIntent::Digit(8), CalcIntent::Equals]);
    assert_eq!(before, after);
    assert!(notifications.is_empty());
}
