//! The derived, filtered view over the catalog.

use super::favorites::Favorites;
use crate::types::{CategoryFilter, Entry};

/// Inputs to the derived view besides the entries themselves.
#[derive(Debug, Clone, Copy)]
pub struct FilterParams<'a> {
    /// Search text; empty disables the search step.
    pub search_query: &'a str,
    /// Category restriction.
    pub category: CategoryFilter,
    /// Restrict to favorites.
    pub favorites_only: bool,
    /// Current favorite ids.
    pub favorites: &'a Favorites,
}

/// Apply favorites, search, and category filters to `entries`.
///
/// The result is always a subsequence of `entries` in its original order.
/// The search step lower-cases the query and keeps entries whose name,
/// description, any tag, or category name contains it; the category step
/// then keeps entries of the selected category.
pub fn filter_entries<'e>(entries: &'e [Entry], params: &FilterParams<'_>) -> Vec<&'e Entry> {
    let needle = if params.search_query.is_empty() {
        None
    } else {
        Some(params.search_query.to_lowercase())
    };

    entries
        .iter()
        .filter(|entry| !params.favorites_only || params.favorites.contains(&entry.id))
        .filter(|entry| match &needle {
            Some(needle) => entry.matches_query(needle),
            None => true,
        })
        .filter(|entry| params.category.admits(entry.category))
        .collect()
}
