//! Progress reporting for batch scoring

use colored::Colorize;
use grader_application::ProgressNotifier;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress during batch scoring with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn batch_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_batch_start(&self, total_submissions: usize) {
        let pb = ProgressBar::new(total_submissions as u64);
        pb.set_style(Self::batch_style());
        pb.set_prefix("Scoring");
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_submission_scored(&self, submission_id: &str, success: bool) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            let status = if success {
                format!("{} {}", "v".green(), submission_id)
            } else {
                format!("{} {}", "x".red(), submission_id)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_batch_complete(&self, scored: usize, failed: usize) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            let message = if failed == 0 {
                format!("{} scored", scored).green().to_string()
            } else {
                format!("{} scored, {} failed", scored, failed)
                    .yellow()
                    .to_string()
            };
            pb.finish_with_message(message);
        }
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Writes to stderr so that stdout stays clean for `--output json`.
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_batch_start(&self, total_submissions: usize) {
        eprintln!(
            "{} {} ({} submissions)",
            "->".cyan(),
            "Scoring".bold(),
            total_submissions
        );
    }

    fn on_submission_scored(&self, submission_id: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), submission_id);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), submission_id);
        }
    }

    fn on_batch_complete(&self, _scored: usize, _failed: usize) {
        eprintln!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_tracks_bar_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_batch_start(2);
        reporter.on_submission_scored("alice", true);
        reporter.on_submission_scored("bob", false);

        {
            let bar = reporter.bar.lock().unwrap();
            assert_eq!(bar.as_ref().unwrap().position(), 2);
        }

        reporter.on_batch_complete(1, 1);
        assert!(reporter.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_events_without_start_are_ignored() {
        let reporter = ProgressReporter::default();
        reporter.on_submission_scored("alice", true);
        reporter.on_batch_complete(1, 0);
        assert!(reporter.bar.lock().unwrap().is_none());
    }
}
