//! Display rounding for converted values

/// Default number of decimal places shown for a result
pub const DEFAULT_PRECISION: usize = 2;

/// Format a value rounded to `places` decimals.
///
/// Only used for presentation; stored records keep full precision.
/// Negative zero after rounding prints without the sign.
pub fn format_display(value: f64, places: usize) -> String {
    let text = format!("{:.*}", places, value);
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        return text[1..].to_string();
    }
    text
}
