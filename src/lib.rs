//! Expression library — state and filtering engine for a catalog of code
//! expressions.
//!
//! Holds an immutable catalog of entries alongside favorites, a bounded
//! copy history and a dark mode preference, derives the filtered view the
//! UI renders, and persists preferences through an injected key-value store.

pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod engine;
pub mod storage;
pub mod types;

// Re-export commonly used types at the crate root
pub use catalog::Catalog;
pub use clipboard::{Clipboard, ClipboardError, CommandClipboard, MemoryClipboard, StdoutClipboard};
pub use config::LibraryConfig;
pub use engine::{
    filter_entries, CopyFailureReport, EmptyState, ExpressionLibrary, FailureSink, Favorites,
    FilterParams, LibraryOptions, LibrarySnapshot, LogSink, RecentlyCopied, ResultsSummary, Theme,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore, PersistedState, StorageKeys};
pub use types::{
    Category, CategoryFilter, Difficulty, Entry, EntryBuilder, LibraryError, LibraryResult,
    MAX_RECENTLY_COPIED, RECENT_PANEL_LIMIT,
};
