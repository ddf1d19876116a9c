//! Presentation rounding for level metrics. The metrics themselves stay exact.

use crate::consts::BYTES_PER_KB;

/// Bytes as kilobytes with two decimals, e.g. `"12.35"`.
pub fn format_kb(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / BYTES_PER_KB)
}

/// Compression ratio with two decimals; `"inf"` for an empty level.
pub fn format_ratio(ratio: f64) -> String {
    if ratio.is_infinite() {
        "inf".to_string()
    } else {
        format!("{ratio:.2}")
    }
}

/// Percentage with one decimal, without the `%` sign.
pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.1}")
}

pub fn format_kb_value(kb: f64) -> String {
    format!("{kb:.2}")
}

/// Pick `singular` for a count of exactly one, `plural` otherwise.
pub fn pluralize<'a>(count: u32, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}
