//! Energy. Base unit: joules.

use crate::page::PageConfig;
use crate::registry::{Registry, Unit};

/// Energy units.
pub const ENERGY: Registry = Registry {
    quantity: "energy",
    units: &[
        Unit {
            key: "j",
            display_name: "Joules",
            factor_to_base: 1.0,
        },
        Unit {
            key: "kj",
            display_name: "Kilojoules",
            factor_to_base: 1000.0,
        },
        Unit {
            key: "mj",
            display_name: "Megajoules",
            factor_to_base: 1.0e6,
        },
        Unit {
            key: "wh",
            display_name: "Watt-hours",
            factor_to_base: 3600.0,
        },
        Unit {
            key: "kwh",
            display_name: "Kilowatt-hours",
            factor_to_base: 3.6e6,
        },
        Unit {
            key: "cal",
            display_name: "Calories",
            factor_to_base: 4.184,
        },
        Unit {
            key: "kcal",
            display_name: "Kilocalories",
            factor_to_base: 4184.0,
        },
        Unit {
            key: "btu",
            display_name: "British thermal units",
            factor_to_base: 1055.055_852_62,
        },
        Unit {
            key: "ftlb",
            display_name: "Foot-pounds",
            factor_to_base: 1.355_817_948_331_400_4,
        },
    ],
};

/// The energy converter page.
pub const ENERGY_PAGE: PageConfig = PageConfig {
    registry: &ENERGY,
    default_from: "kwh",
    default_to: "j",
    namespace: "energy",
};
