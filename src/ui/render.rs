use crate::engine::Severity;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::keypad::{Button, ButtonKind};
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    DIGIT_KEY, EXPRESSION_TEXT, FUNCTION_KEY, FUNCTION_KEY_TEXT, GLOBAL_BORDER, KEY_TEXT,
    OPERATOR_ORANGE, SCIENTIFIC_KEY, TOAST_ERROR, TOAST_INFO, VALUE_TEXT,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area);

    let header = Header::new();
    frame.render_widget(
        header.widget(app.layout(), app.calculator().mode()),
        regions.header,
    );

    draw_display(frame, app, regions.display);

    frame.render_widget(Clear, regions.keypad);
    for (cell, button) in app.keypad().buttons_in(regions.keypad) {
        draw_button(frame, cell, &button);
    }

    let footer = Footer::new();
    frame.render_widget(footer.widget(regions.footer, app.layout()), regions.footer);

    if let (Some(notification), Some(rect)) = (app.toast().notification(), app.toast_area(area)) {
        let background = match notification.severity {
            Severity::Info => TOAST_INFO,
            Severity::Error => TOAST_ERROR,
        };
        let style = Style::default()
            .bg(background)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(notification.message.clone())
                .style(style)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(style)),
            rect,
        );
    }
}

/// Expression line above the value, both right-aligned.
fn draw_display(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.calculator();
    let lines = vec![
        Line::styled(
            state.expression.clone(),
            Style::default().fg(EXPRESSION_TEXT),
        ),
        Line::styled(
            state.display.clone(),
            Style::default().fg(VALUE_TEXT).add_modifier(Modifier::BOLD),
        ),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Right).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}

fn draw_button(frame: &mut Frame<'_>, cell: Rect, button: &Button) {
    if cell.width == 0 || cell.height == 0 {
        return;
    }
    let (bg, fg) = match button.kind {
        ButtonKind::Digit => (DIGIT_KEY, KEY_TEXT),
        ButtonKind::Operator => (OPERATOR_ORANGE, KEY_TEXT),
        ButtonKind::Function => (FUNCTION_KEY, FUNCTION_KEY_TEXT),
        ButtonKind::Scientific => (SCIENTIFIC_KEY, KEY_TEXT),
    };
    let style = Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD);

    // Center the label vertically inside the bordered cell.
    let inner_height = cell.height.saturating_sub(2);
    let mut lines = vec![Line::from(""); usize::from(inner_height.saturating_sub(1) / 2)];
    lines.push(Line::from(button.label));

    frame.render_widget(
        Paragraph::new(lines)
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER).bg(bg)),
            ),
        cell,
    );
}
