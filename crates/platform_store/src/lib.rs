//! Synchronous key/value storage contracts shared by the converter engine and
//! its browser adapters.
//!
//! This crate is the persistence boundary for the engine: a small [`KvStore`]
//! port over string keys and raw JSON values, in-memory and no-op
//! implementations for tests and unsupported targets, typed helpers for
//! serde-backed values, and a unix-millisecond clock helper. Concrete browser
//! adapters live in `platform_store_web`.
//!
//! # Example
//!
//! ```rust
//! use platform_store::{load_typed_with, save_typed_with, KvStore, MemoryKvStore};
//!
//! let store = MemoryKvStore::default();
//! save_typed_with(&store, "counter", &3_u32).expect("serialize");
//! assert_eq!(load_typed_with::<_, u32>(&store, "counter"), Some(3));
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod kv;
pub mod time;

pub use kv::{load_typed_with, save_typed_with, KvStore, MemoryKvStore, NoopKvStore, StoreError};
pub use time::unix_time_ms_now;
