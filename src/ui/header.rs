use crate::config::KeypadLayout;
use crate::engine::Mode;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, OPERATOR_ORANGE};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, layout: KeypadLayout, mode: Mode) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mode_text = match mode {
            Mode::Idle => "Ready",
            Mode::PendingOperation => "Pending",
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "pocketcalc",
                Style::default()
                    .fg(OPERATOR_ORANGE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(layout.display_name(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(mode_text, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
