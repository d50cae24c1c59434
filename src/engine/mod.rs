//! The library state engine and the values derived from it.

pub mod favorites;
pub mod filter;
pub mod history;
pub mod library;
pub mod report;
pub mod view;

pub use favorites::Favorites;
pub use filter::{filter_entries, FilterParams};
pub use history::RecentlyCopied;
pub use library::{ExpressionLibrary, LibraryOptions};
pub use report::{CopyFailureReport, FailureSink, LogSink};
pub use view::{EmptyState, LibrarySnapshot, ResultsSummary, Theme};
