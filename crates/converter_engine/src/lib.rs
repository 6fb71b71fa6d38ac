//! Unit conversion engine shared by every converter page.
//!
//! The multi-page converter site repeats the same machinery on each page:
//! free-text value parsing, table-driven linear conversion through a base
//! unit, multi-format numeric display, favorites/history persistence, and
//! shareable URL state. This crate collapses that into one generic engine;
//! each page is a thin [`page::PageConfig`] value over a const unit table in
//! [`quantities`].
//!
//! The engine is deliberately total: malformed input parses to zero, unknown
//! unit keys propagate as a `NaN` sentinel rendered as an em-dash, and
//! storage failures degrade to in-memory state. A converter page never
//! blocks on bad input.

pub mod convert;
pub mod export;
pub mod format;
pub mod keys;
pub mod page;
pub mod parse;
pub mod quantities;
pub mod registry;
pub mod share;
pub mod state;

pub use convert::{convert, convert_all};
pub use export::{copy_all_text, csv_export};
pub use format::{format_value, FormatMode, MAX_PRECISION, NO_VALUE};
pub use keys::{keyboard_action, ShortcutAction};
pub use page::{ConverterPage, PageAction, PageConfig, PageEffect, ResultRow, UnitGroups};
pub use parse::parse_value;
pub use registry::{Registry, Unit};
pub use share::{decode_query, encode_query, SharedState};
pub use state::{HistoryEntry, StateStore, MAX_FAVORITES, MAX_HISTORY_ENTRIES};
