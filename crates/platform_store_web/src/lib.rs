//! Browser (`wasm32`) implementations of [`platform_store`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for the converter
//! pages: `localStorage` persistence, URL query read/replace, clipboard
//! writes, and CSV file downloads. Every entry point compiles on native
//! targets too, where it degrades to a harmless no-op so that engine code
//! and tests never need a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod clipboard;
pub mod download;
pub mod share_url;
pub mod storage;

pub use clipboard::copy_text;
pub use download::download_csv;
pub use share_url::{current_query, replace_query};
pub use storage::WebKvStore;
