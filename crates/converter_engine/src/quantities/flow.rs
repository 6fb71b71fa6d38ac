//! Volumetric flow rate. Base unit: cubic meters per second.

use crate::page::PageConfig;
use crate::registry::{Registry, Unit};

/// Flow-rate units. 1 ft³ = 0.3048³ m³ = 0.028316846592 m³ exactly;
/// 1 US gallon = 3.785411784 L exactly.
pub const FLOW: Registry = Registry {
    quantity: "flow",
    units: &[
        Unit {
            key: "m3/s",
            display_name: "Cubic meters per second",
            factor_to_base: 1.0,
        },
        Unit {
            key: "m3/h",
            display_name: "Cubic meters per hour",
            factor_to_base: 1.0 / 3600.0,
        },
        Unit {
            key: "l/s",
            display_name: "Liters per second",
            factor_to_base: 0.001,
        },
        Unit {
            key: "l/min",
            display_name: "Liters per minute",
            factor_to_base: 0.001 / 60.0,
        },
        Unit {
            key: "l/h",
            display_name: "Liters per hour",
            factor_to_base: 0.001 / 3600.0,
        },
        Unit {
            key: "ft3/s",
            display_name: "Cubic feet per second",
            factor_to_base: 0.028316846592,
        },
        Unit {
            key: "ft3/min",
            display_name: "Cubic feet per minute",
            factor_to_base: 0.028316846592 / 60.0,
        },
        Unit {
            key: "gal/min",
            display_name: "US gallons per minute",
            factor_to_base: 0.003785411784 / 60.0,
        },
    ],
};

/// The flow converter page.
pub const FLOW_PAGE: PageConfig = PageConfig {
    registry: &FLOW,
    default_from: "l/min",
    default_to: "m3/s",
    namespace: "flow",
};
