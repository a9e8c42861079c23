//! Property-based tests for the calculator engine and keypad geometry.

use proptest::prelude::*;
use pocketcalc::config::KeypadLayout;
use pocketcalc::engine::{
    format_number, parse_operand, CalcIntent, CalculatorReducer, CalculatorState, Constant,
    Operation, ScientificFn, MAX_MAGNITUDE,
};
use pocketcalc::mvi::Reducer;
use pocketcalc::ui::keypad::Keypad;
use ratatui::layout::Rect;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

fn scientific_strategy() -> impl Strategy<Value = ScientificFn> {
    prop_oneof![
        Just(ScientificFn::Sin),
        Just(ScientificFn::Cos),
        Just(ScientificFn::Tan),
        Just(ScientificFn::Log10),
        Just(ScientificFn::Ln),
        Just(ScientificFn::Sqrt),
        Just(ScientificFn::Square),
        Just(ScientificFn::Cube),
    ]
}

fn intent_strategy() -> impl Strategy<Value = CalcIntent> {
    prop_oneof![
        4 => digit_strategy().prop_map(CalcIntent::Digit),
        1 => Just(CalcIntent::DecimalPoint),
        1 => Just(CalcIntent::ToggleSign),
        1 => Just(CalcIntent::Percent),
        2 => operation_strategy().prop_map(CalcIntent::Operation),
        1 => Just(CalcIntent::Equals),
        1 => Just(CalcIntent::Clear),
        1 => scientific_strategy().prop_map(CalcIntent::Scientific),
        1 => prop_oneof![Just(Constant::Pi), Just(Constant::E)].prop_map(CalcIntent::Constant),
        1 => Just(CalcIntent::Backspace),
    ]
}

fn run(intents: &[CalcIntent]) -> CalculatorState {
    intents.iter().fold(CalculatorState::default(), |state, intent| {
        CalculatorReducer::reduce(state, *intent).0
    })
}

// ===== Engine properties =====

proptest! {
    /// Clear returns to the initial state from anywhere.
    #[test]
    fn prop_clear_resets(intents in prop::collection::vec(intent_strategy(), 0..40)) {
        let state = run(&intents);
        let (cleared, notification) = CalculatorReducer::reduce(state, CalcIntent::Clear);
        prop_assert_eq!(cleared, CalculatorState::default());
        prop_assert!(notification.is_none());
    }

    /// The display always reads back as a number with at most one decimal point.
    #[test]
    fn prop_display_stays_numeric(intents in prop::collection::vec(intent_strategy(), 0..40)) {
        let state = run(&intents);
        let value = state.display.parse::<f64>();
        prop_assert!(value.is_ok_and(f64::is_finite), "display {:?}", state.display);
        prop_assert!(state.display.matches('.').count() <= 1);
        prop_assert!(!state.display.contains('e'));
    }

    /// Accumulator, pending operation and expression are set together.
    #[test]
    fn prop_pending_fields_agree(intents in prop::collection::vec(intent_strategy(), 0..40)) {
        let state = run(&intents);
        prop_assert_eq!(state.accumulator.is_some(), state.pending_operation.is_some());
        prop_assert_eq!(state.expression.is_empty(), state.pending_operation.is_none());
    }

    /// Typed digits concatenate, with leading zeros collapsed.
    #[test]
    fn prop_digits_concatenate(digits in prop::collection::vec(digit_strategy(), 1..12)) {
        let intents: Vec<CalcIntent> = digits.iter().copied().map(CalcIntent::Digit).collect();
        let typed: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        let trimmed = typed.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(run(&intents).display, expected);
    }

    /// A second decimal point never changes the state.
    #[test]
    fn prop_decimal_point_idempotent(intents in prop::collection::vec(intent_strategy(), 0..30)) {
        let once = CalculatorReducer::reduce(run(&intents), CalcIntent::DecimalPoint).0;
        let twice = CalculatorReducer::reduce(once.clone(), CalcIntent::DecimalPoint).0;
        prop_assert_eq!(once, twice);
    }
}

// ===== Display round-trip =====

/// Finite values within the equals range, from huge down to subnormal-adjacent.
fn display_value_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        -MAX_MAGNITUDE..=MAX_MAGNITUDE,
        -1.0f64..1.0,
        1e-300f64..1e-290,
        -1e-290f64..-1e-300,
        (1u32..10_000).prop_map(|cents| f64::from(cents) / 100.0),
    ]
}

fn operand_strategy() -> impl Strategy<Value = String> {
    "[1-9][0-9]{0,8}(\\.[0-9]{1,6})?"
}

fn type_operand(text: &str) -> Vec<CalcIntent> {
    text.chars()
        .map(|ch| match ch {
            '.' => CalcIntent::DecimalPoint,
            digit => CalcIntent::Digit(digit as u8 - b'0'),
        })
        .collect()
}

proptest! {
    /// Formatting then parsing gives back the same f64, bit for bit.
    #[test]
    fn prop_format_round_trips(value in display_value_strategy()) {
        let text = format_number(value);
        let parsed = parse_operand(&text);
        if value == 0.0 {
            prop_assert_eq!(text, "0");
        } else {
            prop_assert_eq!(parsed.to_bits(), value.to_bits(), "{} -> {:?}", value, text);
        }
    }

    /// Whatever equals shows reads back as exactly the value it rendered.
    #[test]
    fn prop_equals_result_round_trips(
        lhs in operand_strategy(),
        op in operation_strategy(),
        rhs in operand_strategy(),
    ) {
        let mut intents = type_operand(&lhs);
        intents.push(CalcIntent::Operation(op));
        intents.extend(type_operand(&rhs));
        intents.push(CalcIntent::Equals);

        let state = run(&intents);
        let value = parse_operand(&state.display);
        prop_assert!(value.is_finite());
        prop_assert!(value.abs() <= MAX_MAGNITUDE);
        prop_assert_eq!(format_number(value), state.display);
    }
}

// ===== Keypad geometry =====

proptest! {
    /// Every cell inside the keypad area belongs to exactly one button.
    #[test]
    fn prop_every_cell_hits_a_button(
        scientific in any::<bool>(),
        width in 6u16..120,
        height in 5u16..60,
        x in 0u16..120,
        y in 0u16..60,
    ) {
        let layout = if scientific { KeypadLayout::Scientific } else { KeypadLayout::Basic };
        let keypad = Keypad::for_layout(layout);
        let area = Rect::new(0, 0, width, height);
        let hit = keypad.button_at(area, x, y);
        prop_assert_eq!(hit.is_some(), x < width && y < height);

        let containing = keypad
            .buttons_in(area)
            .into_iter()
            .filter(|(cell, _)| {
                x >= cell.x && x < cell.x + cell.width && y >= cell.y && y < cell.y + cell.height
            })
            .count();
        prop_assert!(containing <= 1);
    }
}
