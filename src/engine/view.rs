//! Presentation-facing values derived from library state.

use serde::Serialize;

use crate::types::{CategoryFilter, Entry};

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The results line shown above the entry list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultsSummary {
    /// Favorites view is on.
    Favorites { count: usize },
    /// A search or category filter is active.
    Found { count: usize },
    /// Nothing is filtering; `total` is the catalog size.
    Available { total: usize },
}

impl std::fmt::Display for ResultsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Favorites { count } => write!(
                f,
                "Showing {} favorite expression{}",
                count,
                plural(count)
            ),
            Self::Found { count } => write!(f, "Found {} expression{}", count, plural(count)),
            Self::Available { total } => {
                write!(f, "{total} professional expressions available")
            }
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Which message to show when the filtered view is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    /// Favorites view with nothing in it.
    NoFavorites,
    /// A search matched nothing.
    NoMatches,
    /// Nothing to show and no search running.
    NoEntries,
}

impl EmptyState {
    pub fn title(&self) -> &'static str {
        match self {
            Self::NoFavorites => "No Favorites Yet",
            Self::NoMatches => "No Results Found",
            Self::NoEntries => "Welcome to the Expression Library",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::NoFavorites => "Start favoriting expressions to build your personal collection.",
            Self::NoMatches => "Try adjusting your search terms or browse different categories.",
            Self::NoEntries => "Browse categories or use the search to find an expression.",
        }
    }
}

/// Everything a consumer reads from the library, in one serializable value.
#[derive(Debug, Serialize)]
pub struct LibrarySnapshot<'a> {
    pub revision: u64,
    pub theme: Theme,
    pub is_dark_mode: bool,
    pub show_favorites: bool,
    pub search_query: &'a str,
    pub selected_category: CategoryFilter,
    pub favorites: &'a [String],
    pub recently_copied: &'a [String],
    pub total_entries: usize,
    pub summary: String,
    pub filtered_expressions: Vec<&'a Entry>,
}
