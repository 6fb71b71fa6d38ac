//! Free-text numeric input parsing.

/// Parses free-form value text into a finite number.
///
/// Thousands-separator commas and surrounding whitespace are stripped first.
/// Empty, malformed, and non-finite text (`"inf"`, `"NaN"`) all map to `0.0`
/// rather than an error: the engine always has a numeric value to show
/// results for, so a converter page never blocks on bad input.
pub fn parse_value(text: &str) -> f64 {
    let cleaned = text.trim().replace(',', "");
    if cleaned.is_empty() {
        return 0.0;
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}
