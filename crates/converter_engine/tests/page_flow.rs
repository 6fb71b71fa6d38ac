//! End-to-end page session flows across hydration, conversion, persistence,
//! and export.

use converter_engine::{
    decode_query, quantities, ConverterPage, FormatMode, PageAction, PageEffect,
};
use platform_store::MemoryKvStore;

fn new_flow_page(store: MemoryKvStore) -> ConverterPage<MemoryKvStore> {
    ConverterPage::new(quantities::FLOW_PAGE, store)
}

#[test]
fn shared_link_session_round_trips_through_the_url() {
    let mut page = new_flow_page(MemoryKvStore::default());
    page.hydrate_from_query("v=10&from=l%2Fmin&to=m3%2Fs&fmt=scientific&p=4");

    assert_eq!(page.primary_result(), "1.6667e-4");

    // The re-encoded query must hydrate a second page into the same state.
    let query = page.share_query();
    let mut revisit = new_flow_page(MemoryKvStore::default());
    revisit.hydrate_from_query(&query);
    assert_eq!(revisit.shared(), page.shared());
    assert_eq!(revisit.primary_result(), page.primary_result());
}

#[test]
fn editing_session_keeps_url_history_and_results_consistent() {
    let mut page = new_flow_page(MemoryKvStore::default());

    let effects = page.apply(PageAction::SetValueText("1,500".to_string()), 1);
    let PageEffect::ReplaceUrl(query) = &effects[0];
    // Commas are a display affordance; the canonical URL carries the raw text.
    assert!(query.contains("v=1%2C500"));
    assert_eq!(page.value(), 1500.0);

    page.apply(PageAction::SelectTo("l/s".to_string()), 2);
    page.apply(PageAction::SetFormat(FormatMode::Normal), 3);
    page.apply(PageAction::SetPrecision(2), 4);
    assert_eq!(page.primary_result(), "25");

    // Two state changes with a value present, so two history entries,
    // newest first.
    assert_eq!(page.history().len(), 2);
    assert_eq!(page.history()[0].to_key, "l/s");
    assert_eq!(page.history()[1].to_key, "m3/s");
}

#[test]
fn history_is_capped_and_clearable() {
    let mut page = new_flow_page(MemoryKvStore::default());
    for i in 1..=15 {
        page.apply(PageAction::SetValueText(i.to_string()), i);
    }
    assert_eq!(page.history().len(), 10);
    assert_eq!(page.history()[0].value_text, "15");
    assert_eq!(page.history()[9].value_text, "6");

    page.apply(PageAction::ClearHistory, 16);
    assert!(page.history().is_empty());
}

#[test]
fn favorites_are_capped_at_eight_dropping_the_oldest() {
    let mut page = new_flow_page(MemoryKvStore::default());
    // The flow table has exactly eight units; favorite them all, then
    // re-toggle the first off and on so it becomes the newest.
    let keys: Vec<String> = quantities::FLOW
        .units
        .iter()
        .map(|u| u.key.to_string())
        .collect();
    for key in &keys {
        page.apply(PageAction::ToggleFavorite(key.clone()), 1);
    }
    assert_eq!(page.favorites().len(), 8);

    page.apply(PageAction::ToggleFavorite(keys[0].clone()), 2);
    page.apply(PageAction::ToggleFavorite(keys[0].clone()), 3);
    assert_eq!(page.favorites().len(), 8);
    assert_eq!(page.favorites().last(), Some(&keys[0]));
}

#[test]
fn session_state_survives_a_reload_with_the_same_store() {
    let store = MemoryKvStore::default();
    {
        let mut page = new_flow_page(store.clone());
        page.apply(PageAction::ToggleFavorite("gal/min".to_string()), 1);
        page.apply(PageAction::SetValueText("42".to_string()), 2);
    }

    let page = new_flow_page(store);
    assert_eq!(page.favorites(), ["gal/min".to_string()]);
    assert_eq!(page.history()[0].value_text, "42");
    // Shareable state is URL-carried, never persisted.
    assert_eq!(page.shared().value_text, "");
    assert_eq!(page.shared().from_key, "l/min");
}

#[test]
fn pages_with_different_namespaces_do_not_share_persistence() {
    let store = MemoryKvStore::default();
    let mut flow = ConverterPage::new(quantities::FLOW_PAGE, store.clone());
    flow.apply(PageAction::ToggleFavorite("l/s".to_string()), 1);

    let mass = ConverterPage::new(quantities::MASS_PAGE, store);
    assert!(mass.favorites().is_empty());
}

#[test]
fn exports_cover_the_grid_and_escape_csv_fields() {
    let mut page = new_flow_page(MemoryKvStore::default());
    page.apply(PageAction::SetValueText("10".to_string()), 1);

    let copy = page.copy_all_text();
    assert_eq!(copy.lines().count(), quantities::FLOW.len() - 1);
    assert!(copy.lines().all(|line| line.contains(": ")));

    let csv = page.csv_export();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Unit,Value"));
    assert_eq!(lines.count(), quantities::FLOW.len() - 1);
}

#[test]
fn garbage_queries_leave_every_page_usable() {
    for config in quantities::ALL_PAGES {
        let mut page = ConverterPage::new(*config, MemoryKvStore::default());
        page.hydrate_from_query("?&&=&v=%GG&from=..&to&fmt=&p=-1&junk");
        assert_eq!(page.shared().from_key, config.default_from);
        assert_eq!(page.shared().to_key, config.default_to);

        // Decoding its own re-encoded state is lossless for every page.
        let round = decode_query(&page.share_query(), config.registry, page.shared());
        assert_eq!(&round, page.shared());
    }
}
