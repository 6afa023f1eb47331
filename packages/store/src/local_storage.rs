//! # Browser `localStorage` store
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used by the **web platform**.
//! Values live in `window.localStorage` under a `yummly.` prefix, so a page reload
//! restores the signed-in user without another login.
//!
//! ## Error handling
//!
//! `localStorage` can be missing (privacy modes, sandboxed iframes) or full.
//! Those cases surface as [`StoreError::Unavailable`]; callers decide whether to
//! degrade to "no session".

use web_sys::Storage;

use crate::kv::{KeyValueStore, StoreError};

const KEY_PREFIX: &str = "yummly.";

/// `window.localStorage`-backed KeyValueStore.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(&format!("{KEY_PREFIX}{key}"))
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(&format!("{KEY_PREFIX}{key}"), value)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage()?
            .remove_item(&format!("{KEY_PREFIX}{key}"))
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}
