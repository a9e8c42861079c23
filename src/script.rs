//! Headless key scripts: `pocketcalc eval 12 + 3 =`.
//!
//! A script is read left to right. Whitespace is skipped, runs of ASCII
//! letters form a word (`sqrt`, `pi`, `c`) and any other character is a
//! single key. Positions in errors are byte offsets into the script.

use serde::Serialize;
use thiserror::Error;

use crate::engine::{
    CalcIntent, CalculatorReducer, CalculatorState, Constant, Notification, Operation,
    ScientificFn,
};
use crate::mvi::Reducer;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("Unknown key '{key}' at position {position}")]
    UnknownKey { key: String, position: usize },
}

/// Final state of a script run plus every notification it raised.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptOutcome {
    pub display: String,
    pub expression: String,
    pub notifications: Vec<Notification>,
}

pub fn parse_keys(script: &str) -> Result<Vec<CalcIntent>, ScriptError> {
    let mut intents = Vec::new();
    let mut chars = script.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        if ch.is_whitespace() {
            continue;
        }

        if ch.is_ascii_alphabetic() {
            let mut word = String::from(ch);
            while let Some(&(_, next)) = chars.peek() {
                if !next.is_ascii_alphabetic() {
                    break;
                }
                word.push(next);
                chars.next();
            }
            match word_intent(&word) {
                Some(intent) => intents.push(intent),
                None => return Err(ScriptError::UnknownKey { key: word, position }),
            }
            continue;
        }

        match char_intent(ch) {
            Some(intent) => intents.push(intent),
            None => {
                return Err(ScriptError::UnknownKey {
                    key: ch.to_string(),
                    position,
                })
            }
        }
    }

    Ok(intents)
}

fn word_intent(word: &str) -> Option<CalcIntent> {
    let intent = match word.to_ascii_lowercase().as_str() {
        "c" | "clear" => CalcIntent::Clear,
        "neg" => CalcIntent::ToggleSign,
        "sin" => CalcIntent::Scientific(ScientificFn::Sin),
        "cos" => CalcIntent::Scientific(ScientificFn::Cos),
        "tan" => CalcIntent::Scientific(ScientificFn::Tan),
        "log" => CalcIntent::Scientific(ScientificFn::Log10),
        "ln" => CalcIntent::Scientific(ScientificFn::Ln),
        "sqrt" => CalcIntent::Scientific(ScientificFn::Sqrt),
        "sq" | "square" => CalcIntent::Scientific(ScientificFn::Square),
        "cube" => CalcIntent::Scientific(ScientificFn::Cube),
        "pi" => CalcIntent::Constant(Constant::Pi),
        "e" => CalcIntent::Constant(Constant::E),
        "bs" | "back" => CalcIntent::Backspace,
        _ => return None,
    };
    Some(intent)
}

fn char_intent(ch: char) -> Option<CalcIntent> {
    let intent = match ch {
        '0'..='9' => CalcIntent::Digit(ch as u8 - b'0'),
        '.' => CalcIntent::DecimalPoint,
        '+' => CalcIntent::Operation(Operation::Add),
        '-' => CalcIntent::Operation(Operation::Subtract),
        '*' | '×' => CalcIntent::Operation(Operation::Multiply),
        '/' | '÷' => CalcIntent::Operation(Operation::Divide),
        '=' => CalcIntent::Equals,
        '%' => CalcIntent::Percent,
        '±' => CalcIntent::ToggleSign,
        'π' => CalcIntent::Constant(Constant::Pi),
        '√' => CalcIntent::Scientific(ScientificFn::Sqrt),
        _ => return None,
    };
    Some(intent)
}

/// Feed intents through a fresh calculator.
pub fn run(intents: impl IntoIterator<Item = CalcIntent>) -> ScriptOutcome {
    let mut state = CalculatorState::default();
    let mut notifications = Vec::new();

    for intent in intents {
        tracing::debug!(?intent, "script key");
        let (next, notification) = CalculatorReducer::reduce(state, intent);
        state = next;
        if let Some(notification) = notification {
            tracing::debug!(message = %notification.message, "calculation failed");
            notifications.push(notification);
        }
    }

    ScriptOutcome {
        display: state.display,
        expression: state.expression,
        notifications,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_digits_and_operators() {
        let intents = parse_keys("12+3=").unwrap();
        assert_eq!(
            intents,
            vec![
                CalcIntent::Digit(1),
                CalcIntent::Digit(2),
                CalcIntent::Operation(Operation::Add),
                CalcIntent::Digit(3),
                CalcIntent::Equals,
            ]
        );
    }

    #[test]
    fn words_are_case_insensitive() {
        assert_eq!(
            parse_keys("9 SQRT").unwrap(),
            vec![
                CalcIntent::Digit(9),
                CalcIntent::Scientific(ScientificFn::Sqrt)
            ]
        );
    }

    #[test]
    fn digits_split_words() {
        assert_eq!(
            parse_keys("2e3").unwrap(),
            vec![
                CalcIntent::Digit(2),
                CalcIntent::Constant(Constant::E),
                CalcIntent::Digit(3),
            ]
        );
    }

    #[test]
    fn unknown_word_reports_position() {
        let err = parse_keys("1 + foo").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownKey {
                key: "foo".to_string(),
                position: 4
            }
        );
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        assert!(matches!(
            parse_keys("(1)"),
            Err(ScriptError::UnknownKey { position: 0, .. })
        ));
    }

    #[test]
    fn run_collects_notifications() {
        let outcome = run(parse_keys("5/0=").unwrap());
        assert_eq!(outcome.display, "0");
        assert!(outcome.expression.is_empty());
        assert_eq!(outcome.notifications.len(), 1);
        assert_eq!(outcome.notifications[0].message, "Cannot divide by zero");
    }

    #[test]
    fn run_keeps_pending_expression() {
        let outcome = run(parse_keys("12+").unwrap());
        assert_eq!(outcome.display, "12");
        assert_eq!(outcome.expression, "12 +");
    }
}
