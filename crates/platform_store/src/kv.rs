//! Key/value storage contracts and baseline adapters.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors surfaced by [`KvStore`] writes.
///
/// Reads are `Option`-shaped instead: a missing, unavailable, or corrupt
/// value all degrade to `None` so callers fall back to defaults.
pub enum StoreError {
    /// The backing storage facility is unavailable (private browsing,
    /// sandboxed frame, quota-disabled storage).
    #[error("storage unavailable")]
    Unavailable,
    /// The backing storage rejected the write.
    #[error("storage write failed: {0}")]
    Write(String),
    /// The value could not be serialized to JSON.
    #[error("value serialization failed: {0}")]
    Serialize(String),
}

/// Host service for persisted values (JSON stored as text per key).
///
/// Implementations must never panic: an unusable backend reads as empty and
/// reports writes through [`StoreError`].
pub trait KvStore {
    /// Loads the raw JSON string for a key, `None` when absent or unreadable.
    fn load_raw(&self, key: &str) -> Option<String>;

    /// Saves a raw JSON string under a key.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend is unavailable or rejects
    /// the write.
    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), StoreError>;

    /// Deletes a key.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend is unavailable or rejects
    /// the delete.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op store for unsupported targets and baseline tests.
pub struct NoopKvStore;

impl KvStore for NoopKvStore {
    fn load_raw(&self, _key: &str) -> Option<String> {
        None
    }

    fn save_raw(&self, _key: &str, _raw_json: &str) -> Result<(), StoreError> {
        Ok(())
    }

    fn delete(&self, _key: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store keyed by string, shared by clone.
pub struct MemoryKvStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl KvStore for MemoryKvStore {
    fn load_raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), StoreError> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw_json.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads and deserializes a typed value through a [`KvStore`] implementation.
///
/// Absent keys, unreadable backends, and corrupt JSON all return `None`.
pub fn load_typed_with<S: KvStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Option<T> {
    let raw = store.load_raw(key)?;
    serde_json::from_str(&raw).ok()
}

/// Serializes and saves a typed value through a [`KvStore`] implementation.
///
/// # Errors
///
/// Returns a [`StoreError`] when serialization or the store write fails.
pub fn save_typed_with<S: KvStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(|e| StoreError::Serialize(e.to_string()))?;
    store.save_raw(key, &raw)
}
