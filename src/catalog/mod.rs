//! The fixed collection of catalog entries supplied at startup.

use std::collections::HashMap;
use std::path::Path;

use crate::types::{Category, Entry, LibraryError, LibraryResult};

/// Bundled default catalog.
const BUILTIN_CATALOG: &str = include_str!("../../data/expressions.json");

/// An immutable, validated collection of entries with id lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Entry>,
    /// id -> position in `entries`.
    positions: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting invalid entries and duplicate ids.
    pub fn new(entries: Vec<Entry>) -> LibraryResult<Self> {
        let mut positions = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            entry.validate()?;
            if positions.insert(entry.id.clone(), pos).is_some() {
                return Err(LibraryError::DuplicateEntryId(entry.id.clone()));
            }
        }
        Ok(Self { entries, positions })
    }

    /// An empty catalog.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> LibraryResult<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Parse a JSON array of entries.
    pub fn from_json_str(json: &str) -> LibraryResult<Self> {
        let entries: Vec<Entry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Read and parse a JSON catalog file.
    pub fn from_json_file(path: &Path) -> LibraryResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        log::debug!(
            "Loaded {} entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.positions.get(id).map(|&pos| &self.entries[pos])
    }

    /// Look up an entry by id, failing if it is absent.
    pub fn require(&self, id: &str) -> LibraryResult<&Entry> {
        self.get(id)
            .ok_or_else(|| LibraryError::EntryNotFound(id.to_string()))
    }

    /// Whether an entry with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Number of entries in each category, in display order. Categories
    /// with no entries are included with a count of zero.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&category| {
                let count = self
                    .entries
                    .iter()
                    .filter(|e| e.category == category)
                    .count();
                (category, count)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
