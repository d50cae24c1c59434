//! Encoding of the persisted fields and the load/save rules around them.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{KeyValueStore, StorageKeys};
use crate::types::MAX_RECENTLY_COPIED;

/// The fields that outlive a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedState {
    pub favorites: Vec<String>,
    pub recently_copied: Vec<String>,
    pub dark_mode: bool,
}

impl PersistedState {
    /// Read all persisted fields. Each field that is absent or does not
    /// decode as its expected shape falls back to its default on its own.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, keys: &StorageKeys) -> Self {
        let mut favorites: Vec<String> = read_field(store, &keys.favorites).unwrap_or_default();
        dedup_in_order(&mut favorites);

        let mut recently_copied: Vec<String> =
            read_field(store, &keys.recently_copied).unwrap_or_default();
        dedup_in_order(&mut recently_copied);
        recently_copied.truncate(MAX_RECENTLY_COPIED);

        let dark_mode = read_field(store, &keys.dark_mode).unwrap_or(false);

        Self {
            favorites,
            recently_copied,
            dark_mode,
        }
    }
}

/// Decode the JSON value stored under `key`.
fn read_field<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("Discarding malformed value under {key}: {e}");
            None
        }
    }
}

/// Encode `value` as JSON and store it under `key`. Failures are logged
/// and otherwise ignored; the stored value stays stale until the next
/// successful write.
pub fn write_field<S, T>(store: &mut S, key: &str, value: &T)
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let encoded = match serde_json::to_string(value) {
        Ok(encoded) => encoded,
        Err(e) => {
            log::warn!("Could not encode value for {key}: {e}");
            return;
        }
    };
    if let Err(e) = store.set(key, &encoded) {
        log::warn!("Could not persist {key}: {e}");
    }
}

/// Drop repeated ids, keeping the first occurrence.
fn dedup_in_order(ids: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.retain(|id| seen.insert(id.clone()));
}
