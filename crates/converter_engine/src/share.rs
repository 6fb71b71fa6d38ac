//! Shareable page state encoded in the URL query string.

use serde::{Deserialize, Serialize};

use crate::format::{FormatMode, MAX_PRECISION};
use crate::registry::Registry;

/// Query parameter carrying the raw value text.
pub const PARAM_VALUE: &str = "v";
/// Query parameter carrying the source unit key.
pub const PARAM_FROM: &str = "from";
/// Query parameter carrying the target unit key.
pub const PARAM_TO: &str = "to";
/// Query parameter carrying the format mode.
pub const PARAM_FORMAT: &str = "fmt";
/// Query parameter carrying the precision.
pub const PARAM_PRECISION: &str = "p";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// The subset of page state worth bookmarking or sending to someone else.
pub struct SharedState {
    /// Raw value text (omitted from URLs when blank).
    pub value_text: String,
    /// Source unit key.
    pub from_key: String,
    /// Target unit key.
    pub to_key: String,
    /// Display mode.
    pub format: FormatMode,
    /// Fractional digits, in `[0, 12]`.
    pub precision: u8,
}

/// Encodes shared state as a query string (no leading `?`).
///
/// The value parameter is omitted entirely when the text is blank: "no
/// input yet" and "explicit 0" both decode to numeric zero downstream, and
/// omission keeps shared URLs clean.
pub fn encode_query(state: &SharedState) -> String {
    let mut parts = Vec::with_capacity(5);
    if !state.value_text.trim().is_empty() {
        parts.push(format!(
            "{PARAM_VALUE}={}",
            urlencoding::encode(&state.value_text)
        ));
    }
    parts.push(format!(
        "{PARAM_FROM}={}",
        urlencoding::encode(&state.from_key)
    ));
    parts.push(format!("{PARAM_TO}={}", urlencoding::encode(&state.to_key)));
    parts.push(format!("{PARAM_FORMAT}={}", state.format.as_str()));
    parts.push(format!("{PARAM_PRECISION}={}", state.precision));
    parts.join("&")
}

/// Decodes a query string over the page defaults, best-effort and per-field.
///
/// Any parameter that is missing, names an unknown unit, or fails validation
/// (format mode outside the enum, precision outside `[0, 12]`) is ignored
/// and the corresponding field keeps its default. Decoding never fails as a
/// whole because one field is malformed. A leading `?` is tolerated.
pub fn decode_query(query: &str, registry: &Registry, defaults: &SharedState) -> SharedState {
    let mut state = defaults.clone();
    for pair in query.trim_start_matches('?').split('&') {
        let Some((name, raw)) = pair.split_once('=') else {
            continue;
        };
        let Ok(value) = urlencoding::decode(raw) else {
            continue;
        };
        match name {
            PARAM_VALUE => state.value_text = value.into_owned(),
            PARAM_FROM if registry.contains(&value) => state.from_key = value.into_owned(),
            PARAM_TO if registry.contains(&value) => state.to_key = value.into_owned(),
            PARAM_FORMAT => {
                if let Some(mode) = FormatMode::from_param(&value) {
                    state.format = mode;
                }
            }
            PARAM_PRECISION => {
                if let Ok(precision) = value.parse::<u8>() {
                    if precision <= MAX_PRECISION {
                        state.precision = precision;
                    }
                }
            }
            _ => {}
        }
    }
    state
}
