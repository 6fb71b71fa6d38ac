//! Unit tables and page configurations, one module per physical quantity.
//!
//! Every `factor_to_base` here is a dimensionally verified constant. The
//! tables are the executable definition of each unit system; preserve them
//! exactly, since any drift silently changes every downstream conversion.

mod density;
mod energy;
mod flow;
mod length;
mod mass;
mod time;

use crate::page::PageConfig;
use crate::registry::Registry;

pub use density::{DENSITY, DENSITY_PAGE};
pub use energy::{ENERGY, ENERGY_PAGE};
pub use flow::{FLOW, FLOW_PAGE};
pub use length::{LENGTH, LENGTH_PAGE};
pub use mass::{MASS, MASS_PAGE};
pub use time::{AVERAGE_DAYS_PER_MONTH, AVERAGE_DAYS_PER_YEAR, TIME, TIME_PAGE};

/// All declared registries, for well-formedness checks and site indexes.
pub const ALL_REGISTRIES: &[&Registry] = &[&FLOW, &DENSITY, &TIME, &ENERGY, &LENGTH, &MASS];

/// All page configurations, in site navigation order.
pub const ALL_PAGES: &[PageConfig] = &[
    FLOW_PAGE,
    DENSITY_PAGE,
    TIME_PAGE,
    ENERGY_PAGE,
    LENGTH_PAGE,
    MASS_PAGE,
];

/// Resolves a page configuration by quantity slug (the router's page key).
pub fn page_for_slug(slug: &str) -> Option<&'static PageConfig> {
    ALL_PAGES.iter().find(|page| page.namespace == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_default_exists_in_its_registry() {
        for page in ALL_PAGES {
            assert!(
                page.registry.contains(page.default_from),
                "{} default_from {}",
                page.namespace,
                page.default_from
            );
            assert!(
                page.registry.contains(page.default_to),
                "{} default_to {}",
                page.namespace,
                page.default_to
            );
            assert_ne!(page.default_from, page.default_to, "{}", page.namespace);
            assert_eq!(page.namespace, page.registry.quantity);
        }
    }

    #[test]
    fn slug_lookup_resolves_every_page() {
        for page in ALL_PAGES {
            let found = page_for_slug(page.namespace).expect("slug resolves");
            assert_eq!(found.registry.quantity, page.registry.quantity);
        }
        assert!(page_for_slug("nope").is_none());
    }

    #[test]
    fn spot_check_verified_factors() {
        // 1 ft³/s = 0.028316846592 m³/s exactly (0.3048³).
        let ft3s = FLOW.lookup("ft3/s").expect("ft3/s");
        assert_eq!(ft3s.factor_to_base, 0.028316846592);

        // 1 lb = 0.45359237 kg exactly (international avoirdupois pound).
        let lb = MASS.lookup("lb").expect("lb");
        assert_eq!(lb.factor_to_base, 0.45359237);

        // 1 kWh = 3.6e6 J exactly.
        let kwh = ENERGY.lookup("kwh").expect("kwh");
        assert_eq!(kwh.factor_to_base, 3.6e6);

        // Civil-average year, not calendar-exact.
        let yr = TIME.lookup("yr").expect("yr");
        assert_eq!(yr.factor_to_base, 365.2425 * 86_400.0);
    }
}
