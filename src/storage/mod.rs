//! Durable key-value storage for persisted preferences.

pub mod file;
pub mod persisted;

use std::collections::HashMap;

use crate::types::{LibraryError, LibraryResult, DARK_MODE_KEY, FAVORITES_KEY, RECENTLY_COPIED_KEY};

pub use file::FileStore;
pub use persisted::PersistedState;

/// A string key-value store that survives between sessions.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> LibraryResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> LibraryResult<()> {
        (**self).set(key, value)
    }
}

/// The three keys the library persists under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub favorites: String,
    pub recently_copied: String,
    pub dark_mode: String,
}

impl StorageKeys {
    /// Keys prefixed with `namespace:` so several library instances can
    /// share one store.
    pub fn namespaced(namespace: &str) -> Self {
        Self {
            favorites: format!("{namespace}:{FAVORITES_KEY}"),
            recently_copied: format!("{namespace}:{RECENTLY_COPIED_KEY}"),
            dark_mode: format!("{namespace}:{DARK_MODE_KEY}"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            favorites: FAVORITES_KEY.to_string(),
            recently_copied: RECENTLY_COPIED_KEY.to_string(),
            dark_mode: DARK_MODE_KEY.to_string(),
        }
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given pairs.
    pub fn with_values<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            read_only: false,
        }
    }

    /// When set, every write is rejected and the stored values stay as they are.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> LibraryResult<()> {
        if self.read_only {
            return Err(LibraryError::Storage(format!(
                "store is read-only, cannot write {key}"
            )));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
