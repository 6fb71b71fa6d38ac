//! Per-page orchestration: one reducer over the engine's components.
//!
//! Each converter page on the site used to fork this entire pipeline with a
//! different unit table pasted in. Here a page is a [`PageConfig`] value;
//! [`ConverterPage`] wires parsing, conversion, formatting, persistence, and
//! URL re-serialization together, so the host UI only dispatches actions and
//! applies the returned effects.

use platform_store::KvStore;

use crate::convert::convert_all;
use crate::export;
use crate::format::{format_value, FormatMode, MAX_PRECISION};
use crate::parse::parse_value;
use crate::registry::{Registry, Unit};
use crate::share::{decode_query, encode_query, SharedState};
use crate::state::{HistoryEntry, StateStore};

#[derive(Debug, Clone, Copy, PartialEq)]
/// Compile-time configuration instantiating the engine for one quantity.
pub struct PageConfig {
    /// Unit table for the page's quantity.
    pub registry: &'static Registry,
    /// Source unit preselected on first visit.
    pub default_from: &'static str,
    /// Target unit preselected on first visit.
    pub default_to: &'static str,
    /// Storage namespace for favorites/history keys.
    pub namespace: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
/// State transitions a page can apply.
pub enum PageAction {
    /// Replace the raw value text.
    SetValueText(String),
    /// Select a new source unit (unknown keys are ignored).
    SelectFrom(String),
    /// Select a new target unit (unknown keys are ignored).
    SelectTo(String),
    /// Swap the source and target units.
    SwapUnits,
    /// Change the display mode.
    SetFormat(FormatMode),
    /// Change the display precision (clamped to `[0, 12]`).
    SetPrecision(u8),
    /// Toggle a unit in the favorites set.
    ToggleFavorite(String),
    /// Clear the history log.
    ClearHistory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side effects for the host layer to execute after a state change.
pub enum PageEffect {
    /// Replace the current URL query with the re-encoded shareable state.
    /// Replacement, not push: sharing must not pollute navigation history.
    ReplaceUrl(String),
}

#[derive(Debug, Clone, PartialEq)]
/// One row of the results grid.
pub struct ResultRow {
    /// The target unit.
    pub unit: &'static Unit,
    /// Raw converted value (`NaN` when the source key is unknown).
    pub value: f64,
    /// Display text under the page's current mode and precision.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
/// Units split for the picker: favorites surface first.
pub struct UnitGroups {
    /// Favorite units in toggle (insertion) order.
    pub favorites: Vec<&'static Unit>,
    /// Remaining units in registry order.
    pub others: Vec<&'static Unit>,
}

/// A live converter page: current shareable state plus persisted
/// favorites/history.
pub struct ConverterPage<S: KvStore> {
    config: PageConfig,
    state: StateStore<S>,
    shared: SharedState,
}

impl<S: KvStore> ConverterPage<S> {
    /// Creates a page with its configured defaults, loading persisted
    /// favorites/history from the store.
    pub fn new(config: PageConfig, store: S) -> Self {
        let shared = SharedState {
            value_text: String::new(),
            from_key: config.default_from.to_string(),
            to_key: config.default_to.to_string(),
            format: FormatMode::default(),
            precision: 6,
        };
        Self {
            state: StateStore::new(store, config.namespace),
            config,
            shared,
        }
    }

    /// Applies URL-decoded state over the page defaults. Invalid fields in
    /// the query keep their defaults; see [`decode_query`].
    pub fn hydrate_from_query(&mut self, query: &str) {
        self.shared = decode_query(query, self.config.registry, &self.shared);
    }

    /// Applies one action and returns the effects for the host to execute.
    ///
    /// `timestamp_ms` stamps any history entry the action records; pass
    /// `platform_store::unix_time_ms_now()` from the host. Every state
    /// change re-serializes the shareable state into a [`PageEffect`], so
    /// the URL always reflects the page.
    pub fn apply(&mut self, action: PageAction, timestamp_ms: i64) -> Vec<PageEffect> {
        match action {
            PageAction::SetValueText(text) => {
                self.shared.value_text = text;
                self.record_current(timestamp_ms);
            }
            PageAction::SelectFrom(key) => {
                if self.config.registry.contains(&key) {
                    self.shared.from_key = key;
                    self.record_current(timestamp_ms);
                }
            }
            PageAction::SelectTo(key) => {
                if self.config.registry.contains(&key) {
                    self.shared.to_key = key;
                    self.record_current(timestamp_ms);
                }
            }
            PageAction::SwapUnits => {
                std::mem::swap(&mut self.shared.from_key, &mut self.shared.to_key);
                self.record_current(timestamp_ms);
            }
            PageAction::SetFormat(mode) => self.shared.format = mode,
            PageAction::SetPrecision(precision) => {
                self.shared.precision = precision.min(MAX_PRECISION);
            }
            PageAction::ToggleFavorite(key) => {
                if self.config.registry.contains(&key) {
                    self.state.toggle_favorite(&key);
                }
            }
            PageAction::ClearHistory => self.state.clear_history(),
        }
        vec![PageEffect::ReplaceUrl(self.share_query())]
    }

    /// Records the current conversion into history. Blank input is not a
    /// conversion worth remembering; head-dedup absorbs re-renders.
    fn record_current(&mut self, timestamp_ms: i64) {
        if self.shared.value_text.trim().is_empty() {
            return;
        }
        self.state.record_history(HistoryEntry {
            value_text: self.shared.value_text.clone(),
            from_key: self.shared.from_key.clone(),
            to_key: self.shared.to_key.clone(),
            timestamp: timestamp_ms,
        });
    }

    /// Parsed numeric value of the current input text.
    pub fn value(&self) -> f64 {
        parse_value(&self.shared.value_text)
    }

    /// The full results grid under the current mode and precision.
    pub fn results(&self) -> Vec<ResultRow> {
        convert_all(self.value(), &self.shared.from_key, self.config.registry)
            .into_iter()
            .map(|(unit, value)| ResultRow {
                unit,
                value,
                text: format_value(value, self.shared.format, self.shared.precision),
            })
            .collect()
    }

    /// The highlighted primary result (source → target), formatted.
    pub fn primary_result(&self) -> String {
        let value = crate::convert::convert(
            self.value(),
            &self.shared.from_key,
            &self.shared.to_key,
            self.config.registry,
        );
        format_value(value, self.shared.format, self.shared.precision)
    }

    /// Units grouped for the picker: "★ Favorites" first, then all units
    /// not currently favorited, in registry order.
    pub fn unit_groups(&self) -> UnitGroups {
        let favorites: Vec<&'static Unit> = self
            .state
            .favorites()
            .iter()
            .filter_map(|key| self.config.registry.lookup(key))
            .collect();
        let others = self
            .config
            .registry
            .units
            .iter()
            .filter(|unit| !self.state.is_favorite(unit.key))
            .collect();
        UnitGroups { favorites, others }
    }

    /// Newline-separated "Copy All" listing for the clipboard.
    pub fn copy_all_text(&self) -> String {
        export::copy_all_text(self.value(), &self.shared.from_key, self.config.registry)
    }

    /// Two-column CSV of the results grid.
    pub fn csv_export(&self) -> String {
        export::csv_export(self.value(), &self.shared.from_key, self.config.registry)
    }

    /// Current shareable state encoded as a query string.
    pub fn share_query(&self) -> String {
        encode_query(&self.shared)
    }

    /// Current shareable state.
    pub fn shared(&self) -> &SharedState {
        &self.shared
    }

    /// Persisted favorites, in toggle order.
    pub fn favorites(&self) -> &[String] {
        self.state.favorites()
    }

    /// Persisted history, newest first.
    pub fn history(&self) -> &[HistoryEntry] {
        self.state.history()
    }

    /// The page's static configuration.
    pub fn config(&self) -> &PageConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use platform_store::MemoryKvStore;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::quantities;

    fn flow_page() -> ConverterPage<MemoryKvStore> {
        ConverterPage::new(quantities::FLOW_PAGE, MemoryKvStore::default())
    }

    #[test]
    fn new_page_uses_configured_defaults() {
        let page = flow_page();
        assert_eq!(page.shared().from_key, "l/min");
        assert_eq!(page.shared().to_key, "m3/s");
        assert_eq!(page.shared().format, FormatMode::Normal);
        assert_eq!(page.value(), 0.0);
    }

    #[test]
    fn every_action_re_encodes_the_url() {
        let mut page = flow_page();
        let effects = page.apply(PageAction::SetValueText("10".to_string()), 1);
        assert_eq!(
            effects,
            vec![PageEffect::ReplaceUrl(page.share_query())]
        );
        let effects = page.apply(PageAction::SetPrecision(3), 2);
        assert_eq!(effects.len(), 1);
        let PageEffect::ReplaceUrl(query) = &effects[0];
        assert!(query.contains("p=3"));
        assert!(query.contains("v=10"));
    }

    #[test]
    fn selecting_an_unknown_unit_is_ignored() {
        let mut page = flow_page();
        page.apply(PageAction::SelectFrom("bogus".to_string()), 1);
        assert_eq!(page.shared().from_key, "l/min");
        page.apply(PageAction::SelectTo("ft3/s".to_string()), 2);
        assert_eq!(page.shared().to_key, "ft3/s");
    }

    #[test]
    fn swap_exchanges_source_and_target() {
        let mut page = flow_page();
        page.apply(PageAction::SwapUnits, 1);
        assert_eq!(page.shared().from_key, "m3/s");
        assert_eq!(page.shared().to_key, "l/min");
    }

    #[test]
    fn precision_is_clamped_by_the_reducer() {
        let mut page = flow_page();
        page.apply(PageAction::SetPrecision(200), 1);
        assert_eq!(page.shared().precision, MAX_PRECISION);
    }

    #[test]
    fn blank_input_records_no_history() {
        let mut page = flow_page();
        page.apply(PageAction::SwapUnits, 1);
        page.apply(PageAction::SetValueText("   ".to_string()), 2);
        assert!(page.history().is_empty());

        page.apply(PageAction::SetValueText("10".to_string()), 3);
        assert_eq!(page.history().len(), 1);
    }

    #[test]
    fn repeated_identical_state_records_once() {
        let mut page = flow_page();
        page.apply(PageAction::SetValueText("10".to_string()), 1);
        page.apply(PageAction::SetValueText("10".to_string()), 2);
        assert_eq!(page.history().len(), 1);
    }

    #[test]
    fn results_cover_every_other_unit() {
        let mut page = flow_page();
        page.apply(PageAction::SetValueText("10".to_string()), 1);
        let rows = page.results();
        assert_eq!(rows.len(), quantities::FLOW.len() - 1);
        assert!(rows.iter().all(|row| row.unit.key != "l/min"));
        assert!(rows.iter().all(|row| row.text != crate::format::NO_VALUE));
    }

    #[test]
    fn primary_result_formats_under_mode_and_precision() {
        let mut page = flow_page();
        page.apply(PageAction::SetValueText("10".to_string()), 1);
        page.apply(PageAction::SetFormat(FormatMode::Scientific), 2);
        page.apply(PageAction::SetPrecision(4), 3);
        assert_eq!(page.primary_result(), "1.6667e-4");
    }

    #[test]
    fn unit_groups_surface_favorites_first_without_duplication() {
        let mut page = flow_page();
        page.apply(PageAction::ToggleFavorite("ft3/s".to_string()), 1);
        page.apply(PageAction::ToggleFavorite("l/s".to_string()), 2);
        page.apply(PageAction::ToggleFavorite("bogus".to_string()), 3);

        let groups = page.unit_groups();
        let favorite_keys: Vec<&str> = groups.favorites.iter().map(|u| u.key).collect();
        assert_eq!(favorite_keys, ["ft3/s", "l/s"]);
        assert!(groups.others.iter().all(|u| u.key != "ft3/s"));
        assert_eq!(
            groups.favorites.len() + groups.others.len(),
            quantities::FLOW.len()
        );
    }

    #[test]
    fn hydrate_applies_valid_fields_over_defaults() {
        let mut page = flow_page();
        page.hydrate_from_query("?v=10&from=badkey&to=l/s&fmt=bogus&p=99");
        assert_eq!(page.shared().value_text, "10");
        assert_eq!(page.shared().from_key, "l/min");
        assert_eq!(page.shared().to_key, "l/s");
        assert_eq!(page.shared().format, FormatMode::Normal);
        assert_eq!(page.shared().precision, 6);
    }

    #[test]
    fn favorites_and_history_survive_page_reloads() {
        let store = MemoryKvStore::default();
        {
            let mut page = ConverterPage::new(quantities::FLOW_PAGE, store.clone());
            page.apply(PageAction::ToggleFavorite("l/s".to_string()), 1);
            page.apply(PageAction::SetValueText("5".to_string()), 2);
        }
        let page = ConverterPage::new(quantities::FLOW_PAGE, store);
        assert_eq!(page.favorites(), ["l/s".to_string()]);
        assert_eq!(page.history().len(), 1);
    }
}
