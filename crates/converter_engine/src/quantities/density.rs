//! Density. Base unit: kilograms per cubic meter.

use crate::page::PageConfig;
use crate::registry::{Registry, Unit};

/// Density units. The pound and cubic-foot/gallon definitions are exact, so
/// the imperial factors are written as their defining ratios.
pub const DENSITY: Registry = Registry {
    quantity: "density",
    units: &[
        Unit {
            key: "kg/m3",
            display_name: "Kilograms per cubic meter",
            factor_to_base: 1.0,
        },
        Unit {
            key: "g/cm3",
            display_name: "Grams per cubic centimeter",
            factor_to_base: 1000.0,
        },
        Unit {
            key: "g/ml",
            display_name: "Grams per milliliter",
            factor_to_base: 1000.0,
        },
        Unit {
            key: "kg/l",
            display_name: "Kilograms per liter",
            factor_to_base: 1000.0,
        },
        Unit {
            key: "lb/ft3",
            display_name: "Pounds per cubic foot",
            factor_to_base: 0.45359237 / 0.028316846592,
        },
        Unit {
            key: "lb/gal",
            display_name: "Pounds per US gallon",
            factor_to_base: 0.45359237 / 0.003785411784,
        },
    ],
};

/// The density converter page.
pub const DENSITY_PAGE: PageConfig = PageConfig {
    registry: &DENSITY,
    default_from: "g/cm3",
    default_to: "kg/m3",
    namespace: "density",
};
