//! Clipboard and CSV exports of the full results grid.

use crate::convert::convert_all;
use crate::registry::Registry;

/// Builds the "Copy All" clipboard text: one `"<display name>: <value>"`
/// line per non-source unit, unformatted at full precision.
pub fn copy_all_text(value: f64, from_key: &str, registry: &Registry) -> String {
    convert_all(value, from_key, registry)
        .iter()
        .map(|(unit, result)| format!("{}: {}", unit.display_name, result))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds a two-column CSV (`Unit,Value`) of the results grid, one row per
/// non-source unit, with RFC 4180 double-quote escaping.
pub fn csv_export(value: f64, from_key: &str, registry: &Registry) -> String {
    let mut out = String::from("Unit,Value\n");
    for (unit, result) in convert_all(value, from_key, registry) {
        out.push_str(&csv_field(unit.display_name));
        out.push(',');
        out.push_str(&csv_field(&result.to_string()));
        out.push('\n');
    }
    out
}

fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
