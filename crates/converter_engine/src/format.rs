//! Result display formatting: normal, compact, and scientific modes.

use serde::{Deserialize, Serialize};

/// Marker rendered for `NaN`/infinite results in every mode.
pub const NO_VALUE: &str = "—";

/// Upper bound on fractional digits.
pub const MAX_PRECISION: u8 = 12;

/// Compact mode caps fractional digits lower than the other modes.
const MAX_COMPACT_PRECISION: u8 = 6;

/// Normal mode escapes to exponential notation at and beyond this magnitude.
const SCIENTIFIC_UPPER: f64 = 1e12;
/// Normal mode escapes to exponential notation below this magnitude
/// (non-zero values only).
const SCIENTIFIC_LOWER: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Display mode for a formatted result.
pub enum FormatMode {
    /// Fixed-point with trailing zeros stripped, escaping to exponential
    /// notation on overflow/underflow.
    #[default]
    Normal,
    /// Magnitude-suffixed (K/M/B/T) display for dense grids.
    Compact,
    /// Always exponential notation.
    Scientific,
}

impl FormatMode {
    /// Query-parameter spelling of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Compact => "compact",
            Self::Scientific => "scientific",
        }
    }

    /// Parses the query-parameter spelling; unknown text is `None`.
    pub fn from_param(text: &str) -> Option<Self> {
        match text {
            "normal" => Some(Self::Normal),
            "compact" => Some(Self::Compact),
            "scientific" => Some(Self::Scientific),
            _ => None,
        }
    }
}

/// Formats a conversion result under the given mode and precision.
///
/// Precision is clamped to `[0, 12]`. Non-finite input renders as
/// [`NO_VALUE`] regardless of mode. Output re-parses through
/// [`crate::parse_value`] to the same value at equal-or-greater precision,
/// modulo the deliberate trailing-zero stripping.
pub fn format_value(n: f64, mode: FormatMode, precision: u8) -> String {
    if !n.is_finite() {
        return NO_VALUE.to_string();
    }
    let digits = precision.min(MAX_PRECISION) as usize;
    match mode {
        FormatMode::Scientific => exponential(n, digits),
        FormatMode::Normal if escapes_fixed_point(n) => exponential(n, digits),
        FormatMode::Normal => fixed_trimmed(n, digits),
        FormatMode::Compact => compact(n, precision.min(MAX_COMPACT_PRECISION) as usize),
    }
}

/// Whether normal mode must fall back to exponential notation.
fn escapes_fixed_point(n: f64) -> bool {
    let magnitude = n.abs();
    magnitude >= SCIENTIFIC_UPPER || (n != 0.0 && magnitude < SCIENTIFIC_LOWER)
}

fn exponential(n: f64, digits: usize) -> String {
    let text = format!("{n:.digits$e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
            format!("{mantissa}e{exponent}")
        }
        None => text,
    }
}

fn fixed_trimmed(n: f64, digits: usize) -> String {
    let mut text = format!("{n:.digits$}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

fn compact(n: f64, digits: usize) -> String {
    let magnitude = n.abs();
    let (scaled, suffix) = if magnitude >= 1e12 {
        (n / 1e12, "T")
    } else if magnitude >= 1e9 {
        (n / 1e9, "B")
    } else if magnitude >= 1e6 {
        (n / 1e6, "M")
    } else if magnitude >= 1e3 {
        (n / 1e3, "K")
    } else {
        (n, "")
    };
    format!("{}{}", fixed_trimmed(scaled, digits), suffix)
}
