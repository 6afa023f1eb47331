//! # Key-value persistence for client state
//!
//! Everything the Yummly client keeps between page loads is a handful of string
//! values keyed by name (today only the serialised current user). [`KeyValueStore`]
//! is the seam that lets the same [`crate::Session`] logic run against different
//! backends:
//!
//! | Backend | Platform | Module |
//! |---------|----------|--------|
//! | [`crate::MemoryStore`] | any (tests, fallback) | `memory` |
//! | [`crate::FileStore`] | desktop / native | `file_store` |
//! | [`crate::LocalStorageStore`] | browser (`web` feature) | `local_storage` |
//!
//! The trait is synchronous because every backend is: `localStorage` is a
//! blocking browser API and the native store touches small files.

use thiserror::Error;

/// Failure while reading or writing persisted client state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// String key-value storage used for durable client state.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Lets callers pick a backend at runtime and share it (`Rc<dyn KeyValueStore>`).
impl<S: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
