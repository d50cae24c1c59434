//! A key-value store backed by a single JSON document on disk.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::KeyValueStore;
use crate::types::LibraryResult;

/// On-disk layout of the store file.
#[derive(Debug, Serialize, Deserialize)]
struct StoreDocument {
    /// When the document was last written.
    updated_at: DateTime<Utc>,
    /// Stored values by key.
    #[serde(default)]
    values: BTreeMap<String, String>,
}

/// File-backed store. Values are cached in memory; every `set` rewrites
/// the whole document.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
    updated_at: Option<DateTime<Utc>>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file opens as an empty store. A file that is not a valid
    /// store document also opens as empty, and is overwritten by the next
    /// write. Other IO errors are returned.
    pub fn open(path: impl AsRef<Path>) -> LibraryResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mut store = Self {
            path,
            values: BTreeMap::new(),
            updated_at: None,
        };

        let raw = match std::fs::read_to_string(&store.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No store at {}, starting empty", store.path.display());
                return Ok(store);
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<StoreDocument>(&raw) {
            Ok(doc) => {
                store.values = doc.values;
                store.updated_at = Some(doc.updated_at);
            }
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable store {}: {}",
                    store.path.display(),
                    e
                );
            }
        }
        Ok(store)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// When the document on disk was last written, if it has been.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Write the current values to disk via a temporary sibling file.
    fn flush(&mut self) -> LibraryResult<()> {
        let now = Utc::now();
        let doc = StoreDocument {
            updated_at: now,
            values: self.values.clone(),
        };
        let json = serde_json::to_string_pretty(&doc)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;

        self.updated_at = Some(now);
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> LibraryResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
