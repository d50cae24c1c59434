//! The library state engine.

use crate::catalog::Catalog;
use crate::clipboard::Clipboard;
use crate::storage::persisted::write_field;
use crate::storage::{KeyValueStore, PersistedState, StorageKeys};
use crate::types::{CategoryFilter, Entry, LibraryResult};

use super::favorites::Favorites;
use super::filter::{filter_entries, FilterParams};
use super::history::RecentlyCopied;
use super::report::{CopyFailureReport, FailureSink, LogSink};
use super::view::{EmptyState, LibrarySnapshot, ResultsSummary, Theme};

/// Construction options for [`ExpressionLibrary`].
#[derive(Debug, Clone, Default)]
pub struct LibraryOptions {
    /// Keys the persisted fields live under.
    pub keys: StorageKeys,
    /// Ignore favorite ids that are not in the catalog, both when loading
    /// and when toggling.
    pub strict_favorites: bool,
}

/// Owns the catalog plus all user state, derives the filtered view, and
/// writes favorites, copy history and the dark mode preference through to
/// storage whenever they change.
pub struct ExpressionLibrary<S: KeyValueStore, C: Clipboard> {
    catalog: Catalog,
    favorites: Favorites,
    recently_copied: RecentlyCopied,
    search_query: String,
    selected_category: CategoryFilter,
    dark_mode: bool,
    show_favorites: bool,
    store: S,
    clipboard: C,
    sink: Box<dyn FailureSink>,
    options: LibraryOptions,
    revision: u64,
}

impl<S: KeyValueStore, C: Clipboard> ExpressionLibrary<S, C> {
    /// Create a library with default storage keys.
    pub fn new(catalog: Catalog, store: S, clipboard: C) -> Self {
        Self::with_options(catalog, store, clipboard, LibraryOptions::default())
    }

    /// Create a library, restoring persisted fields from `store`. Values
    /// that are absent or unreadable start at their defaults.
    pub fn with_options(catalog: Catalog, store: S, clipboard: C, options: LibraryOptions) -> Self {
        let persisted = PersistedState::load(&store, &options.keys);

        let mut favorites = Favorites::from_ids(persisted.favorites);
        if options.strict_favorites {
            favorites.retain(|id| catalog.contains(id));
        }

        log::debug!(
            "Library initialised: {} entries, {} favorites, {} recent, dark_mode={}",
            catalog.len(),
            favorites.len(),
            persisted.recently_copied.len(),
            persisted.dark_mode
        );

        Self {
            catalog,
            favorites,
            recently_copied: RecentlyCopied::from_ids(persisted.recently_copied),
            search_query: String::new(),
            selected_category: CategoryFilter::All,
            dark_mode: persisted.dark_mode,
            show_favorites: false,
            store,
            clipboard,
            sink: Box::new(LogSink),
            options,
            revision: 0,
        }
    }

    /// Replace the sink that receives copy-failure reports.
    pub fn with_sink(mut self, sink: Box<dyn FailureSink>) -> Self {
        self.sink = sink;
        self
    }

    // ==================== Derived views ====================

    /// Entries passing the favorites, search and category filters, in
    /// catalog order. Computed fresh from the current state on every call.
    pub fn filtered_expressions(&self) -> Vec<&Entry> {
        filter_entries(
            self.catalog.entries(),
            &FilterParams {
                search_query: &self.search_query,
                category: self.selected_category,
                favorites_only: self.show_favorites,
                favorites: &self.favorites,
            },
        )
    }

    /// Recently copied entries, newest first, skipping ids that are no
    /// longer in the catalog.
    pub fn recent_expressions(&self, limit: usize) -> Vec<&Entry> {
        self.recently_copied
            .ids()
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .take(limit)
            .collect()
    }

    /// The results line for the current view.
    pub fn results_summary(&self) -> ResultsSummary {
        if self.show_favorites {
            ResultsSummary::Favorites {
                count: self.filtered_expressions().len(),
            }
        } else if !self.search_query.is_empty() || self.selected_category != CategoryFilter::All {
            ResultsSummary::Found {
                count: self.filtered_expressions().len(),
            }
        } else {
            ResultsSummary::Available {
                total: self.catalog.len(),
            }
        }
    }

    /// The empty-state message to show, or None when the view has entries.
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.filtered_expressions().is_empty() {
            return None;
        }
        Some(if self.show_favorites {
            EmptyState::NoFavorites
        } else if !self.search_query.is_empty() {
            EmptyState::NoMatches
        } else {
            EmptyState::NoEntries
        })
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }

    /// Everything a consumer reads, in one value.
    pub fn snapshot(&self) -> LibrarySnapshot<'_> {
        LibrarySnapshot {
            revision: self.revision,
            theme: self.theme(),
            is_dark_mode: self.dark_mode,
            show_favorites: self.show_favorites,
            search_query: &self.search_query,
            selected_category: self.selected_category,
            favorites: self.favorites.ids(),
            recently_copied: self.recently_copied.ids(),
            total_entries: self.catalog.len(),
            summary: self.results_summary().to_string(),
            filtered_expressions: self.filtered_expressions(),
        }
    }

    // ==================== Operations ====================

    /// Add `id` to the favorites, or remove it if it is already there.
    ///
    /// Any id is accepted unless strict favorites are enabled, in which
    /// case ids missing from the catalog are ignored.
    pub fn toggle_favorite(&mut self, id: &str) {
        if self.options.strict_favorites && !self.catalog.contains(id) {
            log::debug!("Ignoring favorite toggle for unknown entry {id}");
            return;
        }
        let now_favorite = self.favorites.toggle(id);
        log::debug!("Favorite {id}: {now_favorite}");
        self.bump();
        write_field(&mut self.store, &self.options.keys.favorites, self.favorites.ids());
    }

    /// Put `entry.code` on the clipboard and record the copy.
    ///
    /// Returns false if the clipboard rejected the write; the failure goes
    /// to the sink and the history is left untouched.
    pub fn copy_expression(&mut self, entry: &Entry) -> bool {
        if let Err(e) = self.clipboard.write(&entry.code) {
            self.sink.copy_failed(&CopyFailureReport::new(entry, &e));
            return false;
        }

        self.recently_copied.record(&entry.id);
        self.bump();
        write_field(
            &mut self.store,
            &self.options.keys.recently_copied,
            self.recently_copied.ids(),
        );
        true
    }

    /// Copy the catalog entry with the given id.
    pub fn copy_by_id(&mut self, id: &str) -> LibraryResult<bool> {
        let entry = self.catalog.require(id)?.clone();
        Ok(self.copy_expression(&entry))
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.search_query {
            self.search_query = query;
            self.bump();
        }
    }

    pub fn set_selected_category(&mut self, category: impl Into<CategoryFilter>) {
        let category = category.into();
        if category != self.selected_category {
            self.selected_category = category;
            self.bump();
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.bump();
        write_field(&mut self.store, &self.options.keys.dark_mode, &self.dark_mode);
    }

    pub fn toggle_show_favorites(&mut self) {
        self.show_favorites = !self.show_favorites;
        self.bump();
    }

    // ==================== Accessors ====================

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// All catalog entries, unfiltered.
    pub fn entries(&self) -> &[Entry] {
        self.catalog.entries()
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Recently copied ids, newest first.
    pub fn recently_copied(&self) -> &[String] {
        self.recently_copied.ids()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_category(&self) -> CategoryFilter {
        self.selected_category
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn show_favorites(&self) -> bool {
        self.show_favorites
    }

    /// Counter bumped on every state change; consumers re-render when it moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn storage(&self) -> &S {
        &self.store
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }

    /// Tear down the library, handing back its storage.
    pub fn into_storage(self) -> S {
        self.store
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
