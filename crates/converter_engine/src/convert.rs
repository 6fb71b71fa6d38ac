//! Linear conversion through each registry's base unit.

use crate::registry::{Registry, Unit};

/// Converts `value` between two units of one registry.
///
/// The conversion always bridges through the base unit
/// (`base = value * factor(from)`, `result = base / factor(to)`), never
/// unit-to-unit directly: pairwise conversion stays O(1) without an O(n²)
/// factor table and rounding behavior stays uniform.
///
/// Unknown keys on either side return `f64::NAN`, the engine's "no value"
/// sentinel; the formatter renders it as an em-dash, never as zero or a
/// crash. Converting a known unit to itself returns the input unchanged.
pub fn convert(value: f64, from_key: &str, to_key: &str, registry: &Registry) -> f64 {
    let (Some(from), Some(to)) = (registry.lookup(from_key), registry.lookup(to_key)) else {
        return f64::NAN;
    };
    if from.key == to.key {
        return value;
    }
    let base = value * from.factor_to_base;
    base / to.factor_to_base
}

/// Converts `value` from `from_key` into every other unit of the registry,
/// in declaration order, for the results grid.
///
/// The source unit is excluded: a unit is never "converted to itself" in the
/// grid. When `from_key` is unknown every entry carries the `NaN` sentinel.
pub fn convert_all<'r>(
    value: f64,
    from_key: &str,
    registry: &'r Registry,
) -> Vec<(&'r Unit, f64)> {
    registry
        .units
        .iter()
        .filter(|unit| unit.key != from_key)
        .map(|unit| (unit, convert(value, from_key, unit.key, registry)))
        .collect()
}
