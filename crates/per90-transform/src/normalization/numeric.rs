//! Lenient numeric parsing for text columns.
//!
//! Exported player tables sometimes format minutes with thousands
//! separators ("1,234"), which makes the CSV reader type the column as text.

/// Parse a string value to a finite `f64`.
///
/// Handles common numeric formats:
/// - Standard numbers: "123", "-45.67"
/// - Thousands separators: "1,234"
/// - Whitespace: "  123  "
/// - Scientific notation: "1.23e5"
///
/// Returns None for empty, unparseable or non-finite values ("nan", "inf").
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return None;
    }

    let cleaned = trimmed
        .replace(',', "")
        .replace(' ', "")
        .replace('\u{a0}', ""); // Non-breaking space

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
