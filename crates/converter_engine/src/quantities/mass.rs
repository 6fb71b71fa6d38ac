//! Mass. Base unit: kilograms.

use crate::page::PageConfig;
use crate::registry::{Registry, Unit};

/// Mass units.
pub const MASS: Registry = Registry {
    quantity: "mass",
    units: &[
        Unit {
            key: "kg",
            display_name: "Kilograms",
            factor_to_base: 1.0,
        },
        Unit {
            key: "mg",
            display_name: "Milligrams",
            factor_to_base: 1.0e-6,
        },
        Unit {
            key: "g",
            display_name: "Grams",
            factor_to_base: 0.001,
        },
        Unit {
            key: "t",
            display_name: "Tonnes",
            factor_to_base: 1000.0,
        },
        Unit {
            key: "oz",
            display_name: "Ounces",
            factor_to_base: 0.028_349_523_125,
        },
        Unit {
            key: "lb",
            display_name: "Pounds",
            factor_to_base: 0.453_592_37,
        },
        Unit {
            key: "st",
            display_name: "Stone",
            factor_to_base: 6.350_293_18,
        },
    ],
};

/// The mass converter page.
pub const MASS_PAGE: PageConfig = PageConfig {
    registry: &MASS,
    default_from: "lb",
    default_to: "kg",
    namespace: "mass",
};
