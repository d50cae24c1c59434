//! Error types for the expression library.

use thiserror::Error;

/// All errors that can surface from the expression library.
///
/// The state engine itself never returns these: its operations recover
/// locally. They come from loading catalogs and configuration, and from
/// opening or writing storage backends.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Category name is not part of the fixed enumeration.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Difficulty name is not part of the fixed enumeration.
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// Two catalog entries share the same id.
    #[error("Duplicate entry id in catalog: {0}")]
    DuplicateEntryId(String),

    /// No catalog entry has the given id.
    #[error("Entry {0} not found")]
    EntryNotFound(String),

    /// Catalog entry failed validation.
    #[error("Invalid entry {id}: {reason}")]
    InvalidEntry { id: String, reason: String },

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage backend rejected a read or write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode/decode error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for expression library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;
