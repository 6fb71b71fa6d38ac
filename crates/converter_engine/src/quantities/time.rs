//! Time. Base unit: seconds.

use crate::page::PageConfig;
use crate::registry::{Registry, Unit};

/// Civil-average days per year (the Gregorian mean, not any specific
/// calendar year). The month and year entries below derive from these
/// constants; an instantiation preferring a different calendar convention
/// changes them here, not in the engine.
pub const AVERAGE_DAYS_PER_YEAR: f64 = 365.2425;

/// Civil-average days per month: one twelfth of the average year.
pub const AVERAGE_DAYS_PER_MONTH: f64 = AVERAGE_DAYS_PER_YEAR / 12.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Time units.
pub const TIME: Registry = Registry {
    quantity: "time",
    units: &[
        Unit {
            key: "s",
            display_name: "Seconds",
            factor_to_base: 1.0,
        },
        Unit {
            key: "ms",
            display_name: "Milliseconds",
            factor_to_base: 0.001,
        },
        Unit {
            key: "min",
            display_name: "Minutes",
            factor_to_base: 60.0,
        },
        Unit {
            key: "h",
            display_name: "Hours",
            factor_to_base: 3600.0,
        },
        Unit {
            key: "d",
            display_name: "Days",
            factor_to_base: SECONDS_PER_DAY,
        },
        Unit {
            key: "wk",
            display_name: "Weeks",
            factor_to_base: 7.0 * SECONDS_PER_DAY,
        },
        Unit {
            key: "mo",
            display_name: "Months (average)",
            factor_to_base: AVERAGE_DAYS_PER_MONTH * SECONDS_PER_DAY,
        },
        Unit {
            key: "yr",
            display_name: "Years (average)",
            factor_to_base: AVERAGE_DAYS_PER_YEAR * SECONDS_PER_DAY,
        },
    ],
};

/// The time converter page.
pub const TIME_PAGE: PageConfig = PageConfig {
    registry: &TIME,
    default_from: "min",
    default_to: "s",
    namespace: "time",
};
