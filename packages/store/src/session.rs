//! Durable half of the signed-in session.
//!
//! [`Session`] serialises one value (the current user) as JSON into a
//! [`KeyValueStore`]. It is generic over the stored type so this crate does not
//! depend on the API models.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::kv::{KeyValueStore, StoreError};

/// Key the current user is stored under.
pub const USER_KEY: &str = "user";

/// Write-through persistence for the current user.
#[derive(Clone, Debug)]
pub struct Session<S> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted user.
    ///
    /// A value that no longer deserialises is removed and treated as signed out.
    pub fn restore<T: DeserializeOwned>(&self) -> Option<T> {
        let raw = match self.store.get(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read stored session: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Discarding unreadable stored session: {}", e);
                if let Err(e) = self.store.remove(USER_KEY) {
                    tracing::warn!("Failed to clear stored session: {}", e);
                }
                None
            }
        }
    }

    /// Persist `user`, or clear the stored session when `None`.
    pub fn persist<T: Serialize>(&self, user: Option<&T>) -> Result<(), StoreError> {
        match user {
            Some(user) => {
                let raw = serde_json::to_string(user)?;
                self.store.set(USER_KEY, &raw)
            }
            None => self.store.remove(USER_KEY),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::MemoryStore;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct StoredUser {
        id: i64,
        name: String,
    }

    #[test]
    fn test_persist_then_restore() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());

        assert_eq!(session.restore::<StoredUser>(), None);

        let user = StoredUser { id: 3, name: "Ada".to_string() };
        session.persist(Some(&user)).unwrap();

        // A fresh session over the same store sees the user (page reload).
        let reloaded = Session::new(store);
        assert_eq!(reloaded.restore::<StoredUser>(), Some(user));
    }

    #[test]
    fn test_persist_none_clears() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());

        let user = StoredUser { id: 3, name: "Ada".to_string() };
        session.persist(Some(&user)).unwrap();
        session.persist::<StoredUser>(None).unwrap();

        assert_eq!(session.restore::<StoredUser>(), None);
        assert_eq!(store.get(USER_KEY).unwrap(), None);
    }

    #[test]
    fn test_corrupt_value_is_discarded() {
        let store = MemoryStore::new();
        store.set(USER_KEY, "not json").unwrap();

        let session = Session::new(store.clone());
        assert_eq!(session.restore::<StoredUser>(), None);
        assert_eq!(store.get(USER_KEY).unwrap(), None);
    }
}
