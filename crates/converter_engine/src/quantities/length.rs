//! Length. Base unit: meters.

use crate::page::PageConfig;
use crate::registry::{Registry, Unit};

/// Length units.
pub const LENGTH: Registry = Registry {
    quantity: "length",
    units: &[
        Unit {
            key: "m",
            display_name: "Meters",
            factor_to_base: 1.0,
        },
        Unit {
            key: "mm",
            display_name: "Millimeters",
            factor_to_base: 0.001,
        },
        Unit {
            key: "cm",
            display_name: "Centimeters",
            factor_to_base: 0.01,
        },
        Unit {
            key: "km",
            display_name: "Kilometers",
            factor_to_base: 1000.0,
        },
        Unit {
            key: "in",
            display_name: "Inches",
            factor_to_base: 0.0254,
        },
        Unit {
            key: "ft",
            display_name: "Feet",
            factor_to_base: 0.3048,
        },
        Unit {
            key: "yd",
            display_name: "Yards",
            factor_to_base: 0.9144,
        },
        Unit {
            key: "mi",
            display_name: "Miles",
            factor_to_base: 1609.344,
        },
    ],
};

/// The length converter page.
pub const LENGTH_PAGE: PageConfig = PageConfig {
    registry: &LENGTH,
    default_from: "ft",
    default_to: "m",
    namespace: "length",
};
