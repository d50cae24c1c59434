//! Bounded, most-recent-first history of copied entry ids.

use crate::types::MAX_RECENTLY_COPIED;

/// Ids of recently copied entries, newest first, without repeats and
/// never longer than [`MAX_RECENTLY_COPIED`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentlyCopied {
    ids: Vec<String>,
}

impl RecentlyCopied {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a persisted list, newest first. Later repeats are
    /// dropped and the list is cut to the limit.
    pub fn from_ids(ids: impl IntoIterator<Item = String>) -> Self {
        let mut history = Vec::new();
        for id in ids {
            if history.len() == MAX_RECENTLY_COPIED {
                break;
            }
            if !history.contains(&id) {
                history.push(id);
            }
        }
        Self { ids: history }
    }

    /// Move `id` to the front, removing any earlier occurrence, then drop
    /// whatever falls past the limit.
    pub fn record(&mut self, id: &str) {
        self.ids.retain(|existing| existing != id);
        self.ids.insert(0, id.to_string());
        self.ids.truncate(MAX_RECENTLY_COPIED);
    }

    /// Ids, newest first.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
