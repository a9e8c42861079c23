use crate::config::KeypadLayout;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const BASIC_HINTS: &[&str] = &["C: Clear", "N: ±", "Tab: Scientific", "Esc: Quit"];
const SCIENTIFIC_HINTS: &[&str] = &[
    "C: Clear",
    "N: ±",
    "S/O/T: sin/cos/tan",
    "G/L: log/ln",
    "R: √",
    "W/U: x²/x³",
    "P/E: π/e",
    "⌫: Back",
    "Tab: Basic",
    "Esc: Quit",
];

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints that fit in `width` columns, dropping whole hints from the
    /// end rather than cutting one in half.
    pub fn hints(layout: KeypadLayout, width: usize) -> String {
        let all = match layout {
            KeypadLayout::Basic => BASIC_HINTS,
            KeypadLayout::Scientific => SCIENTIFIC_HINTS,
        };
        let mut text = String::new();
        for hint in all {
            let candidate = if text.is_empty() {
                format!(" {hint}")
            } else {
                format!("{text} │ {hint}")
            };
            if candidate.chars().count() > width {
                break;
            }
            text = candidate;
        }
        text
    }

    pub fn widget(&self, area: Rect, layout: KeypadLayout) -> Paragraph<'static> {
        // minus borders
        let content_width = usize::from(area.width.saturating_sub(2));
        let version = format!("v{VERSION} ");
        let version_width = version.chars().count();

        let hints = Self::hints(layout, content_width.saturating_sub(version_width));
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let mut spans = vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
        ];
        if content_width >= version_width {
            spans.push(Span::styled(version, text_style));
        }

        Paragraph::new(Line::from(spans)).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
