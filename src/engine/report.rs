//! Reporting of copy failures to an observability sink.

use serde::Serialize;

use crate::clipboard::ClipboardError;
use crate::types::Entry;

/// What went wrong when an entry could not be copied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyFailureReport {
    pub entry_id: String,
    pub entry_name: String,
    /// Rendered clipboard error.
    pub detail: String,
}

impl CopyFailureReport {
    pub fn new(entry: &Entry, error: &ClipboardError) -> Self {
        Self {
            entry_id: entry.id.clone(),
            entry_name: entry.name.clone(),
            detail: error.to_string(),
        }
    }
}

/// Receives copy-failure reports. Implementations must not fail.
pub trait FailureSink {
    fn copy_failed(&self, report: &CopyFailureReport);
}

/// Sends failure reports to the `log` facade at error level.
#[derive(Debug, Default)]
pub struct LogSink;

impl FailureSink for LogSink {
    fn copy_failed(&self, report: &CopyFailureReport) {
        log::error!(
            "Failed to copy expression {} ({}): {}",
            report.entry_id,
            report.entry_name,
            report.detail
        );
    }
}
