//! Progress notification port
//!
//! Defines the interface for reporting progress while a batch is scored.

/// Callback for progress updates during batch scoring
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain lines, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called once before the first submission is scored
    fn on_batch_start(&self, total_submissions: usize);

    /// Called after each submission, successful or not
    fn on_submission_scored(&self, submission_id: &str, success: bool);

    /// Called once after the last submission
    fn on_batch_complete(&self, scored: usize, failed: usize);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_batch_start(&self, _total_submissions: usize) {}
    fn on_submission_scored(&self, _submission_id: &str, _success: bool) {}
    fn on_batch_complete(&self, _scored: usize, _failed: usize) {}
}
