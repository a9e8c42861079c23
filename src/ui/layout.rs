use ratatui::layout::Rect;

/// Screen regions, top to bottom.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Regions {
    pub header: Rect,
    pub display: Rect,
    pub keypad: Rect,
    pub footer: Rect,
}

const HEADER_HEIGHT: u16 = 3;
const DISPLAY_HEIGHT: u16 = 4;
const FOOTER_HEIGHT: u16 = 3;

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(HEADER_HEIGHT);
    let remaining = area.height.saturating_sub(header_height);
    let footer_height = FOOTER_HEIGHT.min(remaining);
    let remaining = remaining.saturating_sub(footer_height);
    let display_height = DISPLAY_HEIGHT.min(remaining);
    let keypad_height = remaining.saturating_sub(display_height);

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let display = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: display_height,
    };
    let keypad = Rect {
        x: area.x,
        y: display.y + display_height,
        width: area.width,
        height: keypad_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    Regions {
        header,
        display,
        keypad,
        footer,
    }
}

pub fn keypad_rect(area: Rect) -> Rect {
    layout_regions(area).keypad
}

/// Three-row banner for a toast, horizontally centered near the top of `area`.
pub fn toast_rect(area: Rect, content_width: u16) -> Rect {
    let width = content_width.saturating_add(4).min(area.width);
    let height = 3.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + 1.min(area.height - height),
        width,
        height,
    }
}
