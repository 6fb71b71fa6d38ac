//! Unit tables: one registry of linearly related units per physical quantity.

#[derive(Debug, Clone, Copy, PartialEq)]
/// One unit within a registry.
pub struct Unit {
    /// Stable key used in URLs and storage (unique within a registry).
    pub key: &'static str,
    /// Human-readable name shown in pickers and exports.
    pub display_name: &'static str,
    /// Linear factor to the registry's base unit. Always positive; exactly
    /// one unit per registry carries 1.0 and is the implicit base.
    ///
    /// These factors are dimensionally verified constants. They are the
    /// executable definition of the unit system: changing one silently
    /// changes every downstream conversion.
    pub factor_to_base: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Ordered unit table for one physical quantity.
///
/// Registries are `const` data with process lifetime. Units are never shared
/// across quantities; there is no cross-quantity conversion.
pub struct Registry {
    /// Quantity slug, also the storage namespace and page identifier.
    pub quantity: &'static str,
    /// Units in display order. The base unit conventionally comes first.
    pub units: &'static [Unit],
}

impl Registry {
    /// Looks up a unit by key. Unknown keys are `None`; callers must guard
    /// rather than default.
    pub fn lookup(&self, key: &str) -> Option<&'static Unit> {
        self.units.iter().find(|unit| unit.key == key)
    }

    /// Returns whether `key` names a unit in this registry.
    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Returns the base unit (factor 1.0).
    pub fn base_unit(&self) -> Option<&'static Unit> {
        self.units.iter().find(|unit| unit.factor_to_base == 1.0)
    }

    /// Number of units in the table.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the table is empty. Declared registries never are.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::quantities::ALL_REGISTRIES;

    #[test]
    fn lookup_finds_declared_units_and_rejects_unknown_keys() {
        let registry = crate::quantities::FLOW;
        let unit = registry.lookup("m3/s").expect("base unit present");
        assert_eq!(unit.factor_to_base, 1.0);
        assert!(registry.lookup("furlongs/fortnight").is_none());
        assert!(registry.contains("l/min"));
        assert!(!registry.contains(""));
    }

    #[test]
    fn every_registry_is_well_formed() {
        for registry in ALL_REGISTRIES {
            assert!(!registry.is_empty(), "{} has no units", registry.quantity);

            let mut keys = HashSet::new();
            let mut base_count = 0;
            for unit in registry.units {
                assert!(
                    keys.insert(unit.key),
                    "{} declares duplicate key {}",
                    registry.quantity,
                    unit.key
                );
                assert!(
                    unit.factor_to_base > 0.0,
                    "{}::{} has non-positive factor",
                    registry.quantity,
                    unit.key
                );
                if unit.factor_to_base == 1.0 {
                    base_count += 1;
                }
            }
            assert_eq!(
                base_count, 1,
                "{} must have exactly one base unit",
                registry.quantity
            );
            assert_eq!(
                registry.base_unit().map(|u| u.factor_to_base),
                Some(1.0),
                "{} base lookup",
                registry.quantity
            );
        }
    }

    #[test]
    fn registry_quantities_are_unique() {
        let mut slugs = HashSet::new();
        for registry in ALL_REGISTRIES {
            assert!(slugs.insert(registry.quantity));
        }
    }
}
