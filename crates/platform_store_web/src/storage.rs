//! `localStorage`-backed key/value store implementation.
//!
//! This adapter is intentionally small and synchronous at the browser API
//! boundary. On non-`wasm32` targets it reads as empty and accepts writes
//! silently, which keeps engine construction target-agnostic.

use platform_store::{KvStore, StoreError};

#[derive(Debug, Clone, Copy, Default)]
/// Browser key/value store backed by `window.localStorage`.
pub struct WebKvStore;

impl KvStore for WebKvStore {
    fn load_raw(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(key).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), StoreError> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(StoreError::Unavailable)?;
            storage
                .set_item(key, raw_json)
                .map_err(|e| StoreError::Write(format!("localStorage set_item failed: {e:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw_json);
            Ok(())
        }
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(StoreError::Unavailable)?;
            storage
                .remove_item(key)
                .map_err(|e| StoreError::Write(format!("localStorage remove_item failed: {e:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }
}
