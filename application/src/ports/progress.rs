//! Progress notification port
//!
//! Defines the interface for reporting progress while a question is
//! being answered.

use assistant_domain::QueryInfo;

/// Callback for progress updates during question answering
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait AskProgressNotifier: Send + Sync {
    /// Called once the question has been classified
    fn on_classified(&self, info: &QueryInfo);

    /// Called right before the query is sent to the endpoint
    fn on_query_start(&self, endpoint: &str);

    /// Called when the endpoint answered (or failed)
    fn on_query_complete(&self, rows: Option<usize>);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl AskProgressNotifier for NoProgress {
    fn on_classified(&self, _info: &QueryInfo) {}
    fn on_query_start(&self, _endpoint: &str) {}
    fn on_query_complete(&self, _rows: Option<usize>) {}
}
