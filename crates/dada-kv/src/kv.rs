//! Key-value store wrapper with automatic serialization.

use crate::{KvBackend, KvError};
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe store over a [`KvBackend`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug)]
pub struct Store<B> {
    backend: B,
}

impl<B: KvBackend> Store<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let users: Option<Vec<User>> = store.get("users")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, KvError> {
        match self.backend.get(key)? {
            Some(raw) => {
                let value: T = serde_json::from_str(&raw)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the store.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// store.set("currentUser", &user)?;
    /// ```
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), KvError> {
        let raw = serde_json::to_string(value)?;
        tracing::trace!(key, bytes = raw.len(), "kv set");
        self.backend.set(key, raw)
    }

    /// Delete a value. Returns whether it existed.
    pub fn delete(&mut self, key: &str) -> Result<bool, KvError> {
        self.backend.delete(key)
    }

    /// Check if a key exists in the store.
    pub fn exists(&self, key: &str) -> Result<bool, KvError> {
        self.backend.exists(key)
    }

    /// Get all keys in the store.
    pub fn keys(&self) -> Result<Vec<String>, KvError> {
        self.backend.keys()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_inner(self) -> B {
        self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBackend;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: String,
        count: u32,
    }

    #[test]
    fn test_typed_roundtrip() {
        let mut store = Store::new(MemoryBackend::new());
        let entries = vec![
            Entry { id: "a".into(), count: 1 },
            Entry { id: "b".into(), count: 2 },
        ];
        store.set("entries", &entries).unwrap();

        let loaded: Vec<Entry> = store.get("entries").unwrap().unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_missing_key() {
        let store = Store::new(MemoryBackend::new());
        let value: Option<Entry> = store.get("nope").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_type_mismatch_is_error() {
        let mut store = Store::new(MemoryBackend::new());
        store.set("entry", "just a string").unwrap();
        let result: Result<Option<Entry>, _> = store.get("entry");
        assert!(matches!(result, Err(KvError::SerializeError(_))));
    }
}
