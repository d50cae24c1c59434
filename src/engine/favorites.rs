//! Favorite ids: set membership with a stable insertion order.

use std::collections::HashSet;

/// The user's favorite entry ids.
///
/// Membership is what matters; insertion order is kept only so the
/// persisted list reloads identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    order: Vec<String>,
    members: HashSet<String>,
}

impl Favorites {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a persisted list. Repeated ids are collapsed.
    pub fn from_ids(ids: impl IntoIterator<Item = String>) -> Self {
        let mut favorites = Self::new();
        for id in ids {
            favorites.insert(id);
        }
        favorites
    }

    /// Whether `id` is a favorite.
    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    /// Add `id` if absent, remove it if present. Returns whether `id` is a
    /// favorite afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.members.remove(id) {
            self.order.retain(|existing| existing != id);
            false
        } else {
            self.insert(id.to_string());
            true
        }
    }

    /// Keep only the ids for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.order.retain(|id| keep(id));
        self.members = self.order.iter().cloned().collect();
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn insert(&mut self, id: String) {
        if self.members.insert(id.clone()) {
            self.order.push(id);
        }
    }
}
