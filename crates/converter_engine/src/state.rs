//! Per-page favorites and conversion history, persisted fire-and-forget.

use platform_store::{load_typed_with, save_typed_with, KvStore};
use serde::{Deserialize, Serialize};

/// Favorites are a bounded recency-biased set, not a priority system.
pub const MAX_FAVORITES: usize = 8;

/// History keeps only the most recent conversions.
pub const MAX_HISTORY_ENTRIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One recorded conversion request.
pub struct HistoryEntry {
    /// Raw value text as the user typed it.
    pub value_text: String,
    /// Source unit key.
    pub from_key: String,
    /// Target unit key.
    pub to_key: String,
    /// Unix milliseconds at recording time.
    pub timestamp: i64,
}

impl HistoryEntry {
    fn same_request(&self, other: &HistoryEntry) -> bool {
        self.value_text == other.value_text
            && self.from_key == other.from_key
            && self.to_key == other.to_key
    }
}

/// Favorites and history for one quantity page, backed by an injected
/// [`KvStore`] that may be unavailable.
///
/// Every read and write is wrapped so storage failures degrade to in-memory
/// state without surfacing an error: a converter page keeps working in
/// private/sandboxed browsing, it just forgets on reload. Each mutation
/// immediately serializes the full structure back to storage; there is no
/// flush or transaction boundary.
pub struct StateStore<S: KvStore> {
    store: S,
    favorites_key: String,
    history_key: String,
    favorites: Vec<String>,
    history: Vec<HistoryEntry>,
}

impl<S: KvStore> StateStore<S> {
    /// Creates the store for a page namespace, loading any persisted
    /// favorites/history. Absent or corrupt persisted data loads as empty.
    pub fn new(store: S, namespace: &str) -> Self {
        let favorites_key = format!("{namespace}:favorites");
        let history_key = format!("{namespace}:history");

        let mut favorites: Vec<String> =
            load_typed_with(&store, &favorites_key).unwrap_or_default();
        favorites.truncate(MAX_FAVORITES);

        let mut history: Vec<HistoryEntry> =
            load_typed_with(&store, &history_key).unwrap_or_default();
        history.truncate(MAX_HISTORY_ENTRIES);

        Self {
            store,
            favorites_key,
            history_key,
            favorites,
            history,
        }
    }

    /// Favorite unit keys in insertion order.
    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    /// Whether a unit key is currently a favorite.
    pub fn is_favorite(&self, key: &str) -> bool {
        self.favorites.iter().any(|k| k == key)
    }

    /// Toggles a unit key in the favorites set.
    ///
    /// Adding beyond [`MAX_FAVORITES`] silently drops the oldest entries.
    pub fn toggle_favorite(&mut self, key: &str) {
        if let Some(position) = self.favorites.iter().position(|k| k == key) {
            self.favorites.remove(position);
        } else {
            self.favorites.push(key.to_string());
            while self.favorites.len() > MAX_FAVORITES {
                self.favorites.remove(0);
            }
        }
        self.persist_favorites();
    }

    /// Recorded conversions, newest first, at most [`MAX_HISTORY_ENTRIES`].
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Records a conversion request at the head of the log.
    ///
    /// An entry matching the current head on value/from/to is skipped, so
    /// re-renders of an unchanged state do not fill the log. Only the head
    /// is compared; an older duplicate deeper in the log is kept.
    pub fn record_history(&mut self, entry: HistoryEntry) {
        if let Some(head) = self.history.first() {
            if head.same_request(&entry) {
                return;
            }
        }
        self.history.insert(0, entry);
        self.history.truncate(MAX_HISTORY_ENTRIES);
        self.persist_history();
    }

    /// Clears the history log.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.persist_history();
    }

    fn persist_favorites(&self) {
        if let Err(err) = save_typed_with(&self.store, &self.favorites_key, &self.favorites) {
            log::warn!("favorites persist failed for {}: {err}", self.favorites_key);
        }
    }

    fn persist_history(&self) {
        if let Err(err) = save_typed_with(&self.store, &self.history_key, &self.history) {
            log::warn!("history persist failed for {}: {err}", self.history_key);
        }
    }
}
