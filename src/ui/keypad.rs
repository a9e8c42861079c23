//! Keypad layouts and their geometry.
//!
//! The same button table drives rendering and mouse hit-testing, so a
//! click always lands on the button that was drawn there.

use ratatui::layout::Rect;

use crate::config::KeypadLayout;
use crate::engine::{CalcIntent, Constant, Operation, ScientificFn};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ButtonKind {
    Digit,
    Operator,
    Function,
    Scientific,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub intent: CalcIntent,
    pub kind: ButtonKind,
    /// Number of grid columns this button covers.
    pub span: u16,
}

impl Button {
    const fn new(label: &'static str, intent: CalcIntent, kind: ButtonKind) -> Self {
        Self {
            label,
            intent,
            kind,
            span: 1,
        }
    }

    const fn digit(label: &'static str, digit: u8) -> Self {
        Self::new(label, CalcIntent::Digit(digit), ButtonKind::Digit)
    }

    const fn operator(op: Operation) -> Self {
        Self::new(op.symbol(), CalcIntent::Operation(op), ButtonKind::Operator)
    }

    const fn scientific(function: ScientificFn) -> Self {
        Self::new(
            function.label(),
            CalcIntent::Scientific(function),
            ButtonKind::Scientific,
        )
    }

    const fn constant(constant: Constant) -> Self {
        Self::new(
            constant.label(),
            CalcIntent::Constant(constant),
            ButtonKind::Scientific,
        )
    }

    const fn wide(self, span: u16) -> Self {
        Self { span, ..self }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    rows: Vec<Vec<Button>>,
}

impl Keypad {
    pub fn for_layout(layout: KeypadLayout) -> Self {
        let clear = Button::new("C", CalcIntent::Clear, ButtonKind::Function);
        let sign = Button::new("±", CalcIntent::ToggleSign, ButtonKind::Function);
        let percent = Button::new("%", CalcIntent::Percent, ButtonKind::Function);
        let point = Button::new(".", CalcIntent::DecimalPoint, ButtonKind::Digit);
        let equals = Button::new("=", CalcIntent::Equals, ButtonKind::Operator);

        let mut rows = vec![
            vec![clear, sign, percent, Button::operator(Operation::Divide)],
            vec![
                Button::digit("7", 7),
                Button::digit("8", 8),
                Button::digit("9", 9),
                Button::operator(Operation::Multiply),
            ],
            vec![
                Button::digit("4", 4),
                Button::digit("5", 5),
                Button::digit("6", 6),
                Button::operator(Operation::Subtract),
            ],
            vec![
                Button::digit("1", 1),
                Button::digit("2", 2),
                Button::digit("3", 3),
                Button::operator(Operation::Add),
            ],
        ];

        match layout {
            KeypadLayout::Basic => {
                rows.push(vec![Button::digit("0", 0).wide(2), point, equals]);
            }
            KeypadLayout::Scientific => {
                let backspace = Button::new("⌫", CalcIntent::Backspace, ButtonKind::Function);
                rows.push(vec![Button::digit("0", 0), backspace, point, equals]);

                let block = [
                    [
                        Button::scientific(ScientificFn::Sin),
                        Button::scientific(ScientificFn::Cos),
                    ],
                    [
                        Button::scientific(ScientificFn::Tan),
                        Button::scientific(ScientificFn::Sqrt),
                    ],
                    [
                        Button::scientific(ScientificFn::Log10),
                        Button::scientific(ScientificFn::Ln),
                    ],
                    [
                        Button::scientific(ScientificFn::Square),
                        Button::scientific(ScientificFn::Cube),
                    ],
                    [Button::constant(Constant::Pi), Button::constant(Constant::E)],
                ];
                for (row, prefix) in rows.iter_mut().zip(block) {
                    let mut combined = prefix.to_vec();
                    combined.append(row);
                    *row = combined;
                }
            }
        }

        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    /// Width of the grid in columns.
    pub fn columns(&self) -> u16 {
        self.rows
            .iter()
            .map(|row| row.iter().map(|b| b.span).sum::<u16>())
            .max()
            .unwrap_or(0)
    }

    /// Every button with the cell it occupies inside `area`.
    ///
    /// Cells tile the area exactly; rounding slack goes to later rows and
    /// columns.
    pub fn buttons_in(&self, area: Rect) -> Vec<(Rect, Button)> {
        let row_count = self.rows.len() as u32;
        let columns = u32::from(self.columns());
        if row_count == 0 || columns == 0 {
            return Vec::new();
        }

        let edge = |origin: u16, extent: u16, index: u32, count: u32| -> u16 {
            origin + (u32::from(extent) * index / count) as u16
        };

        let mut cells = Vec::new();
        for (row_idx, row) in self.rows.iter().enumerate() {
            let row_idx = row_idx as u32;
            let top = edge(area.y, area.height, row_idx, row_count);
            let bottom = edge(area.y, area.height, row_idx + 1, row_count);

            let mut column = 0u32;
            for button in row {
                let left = edge(area.x, area.width, column, columns);
                column += u32::from(button.span);
                let right = edge(area.x, area.width, column, columns);
                cells.push((
                    Rect::new(left, top, right - left, bottom - top),
                    *button,
                ));
            }
        }
        cells
    }

    pub fn button_at(&self, area: Rect, x: u16, y: u16) -> Option<Button> {
        self.buttons_in(area)
            .into_iter()
            .find(|(cell, _)| {
                x >= cell.x
                    && x < cell.x + cell.width
                    && y >= cell.y
                    && y < cell.y + cell.height
            })
            .map(|(_, button)| button)
    }
}
