//! Conversions between the display string and `f64`.
//!
//! `format_number` produces the shortest decimal string that parses back to
//! the same `f64`, without exponent notation, so the display can be fed to
//! `parse_operand` again without drift.

use super::error::{CalcError, CalcResult};

/// Largest magnitude an equals result may have.
pub const MAX_MAGNITUDE: f64 = 1e16;

/// Numeric value of a display string.
///
/// Accepts the forms the engine produces (`"0."`, `"-12.5"`, `"3."`).
/// Anything unparsable reads as zero.
pub fn parse_operand(display: &str) -> f64 {
    display.parse::<f64>().unwrap_or(0.0)
}

/// Render a value the way the display shows it.
///
/// Negative zero renders as `"0"`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

pub fn ensure_finite(value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::InvalidResult)
    }
}

pub fn ensure_within_range(value: f64) -> CalcResult<f64> {
    if value.abs() > MAX_MAGNITUDE {
        Err(CalcError::ResultTooLarge)
    } else {
        Ok(value)
    }
}
