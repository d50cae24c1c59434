//! All data types for the expression library.

pub mod entry;
pub mod error;

pub use entry::{Category, CategoryFilter, Difficulty, Entry, EntryBuilder};
pub use error::{LibraryError, LibraryResult};

/// Maximum number of ids kept in the recently-copied history.
pub const MAX_RECENTLY_COPIED: usize = 10;

/// How many recently copied expressions the recent panel shows.
pub const RECENT_PANEL_LIMIT: usize = 5;

/// Storage key holding the favorite ids.
pub const FAVORITES_KEY: &str = "ae-expression-favorites";

/// Storage key holding the recently-copied ids.
pub const RECENTLY_COPIED_KEY: &str = "ae-expression-recent";

/// Storage key holding the dark mode preference.
pub const DARK_MODE_KEY: &str = "ae-expression-dark-mode";
