use crate::config::KeypadLayout;
use crate::engine::{CalcIntent, Constant, Operation, ScientificFn};
use crate::ui::app::App;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Instant;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    if key.code == KeyCode::Tab {
        app.toggle_layout(Instant::now());
        return;
    }

    if let Some(intent) = intent_for_key(app.layout(), key) {
        app.dispatch(intent);
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.on_click(mouse.column, mouse.row);
    }
}

/// Keyboard binding for a calculator key.
///
/// Scientific bindings only apply while the scientific keypad is shown.
pub fn intent_for_key(layout: KeypadLayout, key: KeyEvent) -> Option<CalcIntent> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    let basic = match key.code {
        KeyCode::Char(ch @ '0'..='9') => Some(CalcIntent::Digit(ch as u8 - b'0')),
        KeyCode::Char('.') | KeyCode::Char(',') => Some(CalcIntent::DecimalPoint),
        KeyCode::Char('+') => Some(CalcIntent::Operation(Operation::Add)),
        KeyCode::Char('-') => Some(CalcIntent::Operation(Operation::Subtract)),
        KeyCode::Char('*') | KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(CalcIntent::Operation(Operation::Multiply))
        }
        KeyCode::Char('/') => Some(CalcIntent::Operation(Operation::Divide)),
        KeyCode::Char('=') | KeyCode::Enter => Some(CalcIntent::Equals),
        KeyCode::Char('%') => Some(CalcIntent::Percent),
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Delete => Some(CalcIntent::Clear),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(CalcIntent::ToggleSign),
        _ => None,
    };
    if basic.is_some() || layout == KeypadLayout::Basic {
        return basic;
    }

    let function = match key.code {
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            's' => ScientificFn::Sin,
            'o' => ScientificFn::Cos,
            't' => ScientificFn::Tan,
            'g' => ScientificFn::Log10,
            'l' => ScientificFn::Ln,
            'r' => ScientificFn::Sqrt,
            'w' => ScientificFn::Square,
            'u' => ScientificFn::Cube,
            'p' => return Some(CalcIntent::Constant(Constant::Pi)),
            'e' => return Some(CalcIntent::Constant(Constant::E)),
            _ => return None,
        },
        KeyCode::Backspace => return Some(CalcIntent::Backspace),
        _ => return None,
    };
    Some(CalcIntent::Scientific(function))
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
