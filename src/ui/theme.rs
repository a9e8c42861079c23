use ratatui::style::Color;

pub const OPERATOR_ORANGE: Color = Color::Rgb(0xff, 0x95, 0x00);
pub const DIGIT_KEY: Color = Color::Rgb(0x33, 0x33, 0x33);
pub const FUNCTION_KEY: Color = Color::Rgb(0xa5, 0xa5, 0xa5);
pub const SCIENTIFIC_KEY: Color = Color::Rgb(0x21, 0x21, 0x21);
pub const KEY_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const FUNCTION_KEY_TEXT: Color = Color::Rgb(0x00, 0x00, 0x00);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const EXPRESSION_TEXT: Color = Color::Rgb(0x99, 0x99, 0x99);
pub const VALUE_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const TOAST_INFO: Color = Color::Rgb(0x34, 0xc7, 0x59);
pub const TOAST_ERROR: Color = Color::Rgb(0xff, 0x3b, 0x30);
