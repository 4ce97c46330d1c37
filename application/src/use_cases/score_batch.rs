//! Score Batch use case
//!
//! Scores many submissions in order. Submissions are independent: one failure
//! is recorded and the batch moves on, unless fail-fast is configured.

use super::score_submission::{ScoreSubmissionError, ScoreSubmissionUseCase};
use crate::config::GradingConfig;
use crate::ports::assessment_logger::AssessmentLogger;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::rubric_source::RubricSource;
use grader_domain::{RubricAssessmentResult, SubmissionClassification};
use std::sync::Arc;
use tracing::info;

/// A submission that could not be scored
#[derive(Debug)]
pub struct SubmissionFailure {
    pub submission_id: String,
    pub error: ScoreSubmissionError,
}

/// Everything a batch produced
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Successful assessments, in input order
    pub assessments: Vec<RubricAssessmentResult>,
    /// Failed submissions, in input order
    pub failures: Vec<SubmissionFailure>,
    /// Submissions never attempted because the batch stopped early
    pub skipped: usize,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.skipped == 0
    }
}

/// Use case for scoring a batch of submissions
pub struct ScoreBatchUseCase<S: RubricSource + 'static> {
    scorer: ScoreSubmissionUseCase<S>,
    fail_fast: bool,
}

impl<S: RubricSource + 'static> ScoreBatchUseCase<S> {
    pub fn new(source: Arc<S>, config: &GradingConfig) -> Self {
        Self {
            scorer: ScoreSubmissionUseCase::new(source)
                .with_default_rubric(config.default_rubric.clone()),
            fail_fast: config.fail_fast,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn AssessmentLogger>) -> Self {
        self.scorer = self.scorer.with_logger(logger);
        self
    }

    pub fn execute(&self, submissions: &[SubmissionClassification]) -> BatchOutcome {
        self.execute_with_progress(submissions, &NoProgress)
    }

    pub fn execute_with_progress(
        &self,
        submissions: &[SubmissionClassification],
        progress: &dyn ProgressNotifier,
    ) -> BatchOutcome {
        info!("Scoring {} submission(s)", submissions.len());
        progress.on_batch_start(submissions.len());

        let mut outcome = BatchOutcome::default();
        for (index, submission) in submissions.iter().enumerate() {
            match self.scorer.execute(submission) {
                Ok(assessment) => {
                    progress.on_submission_scored(&submission.submission_id, true);
                    outcome.assessments.push(assessment);
                }
                Err(error) => {
                    progress.on_submission_scored(&submission.submission_id, false);
                    outcome.failures.push(SubmissionFailure {
                        submission_id: submission.submission_id.clone(),
                        error,
                    });
                    if self.fail_fast {
                        outcome.skipped = submissions.len() - index - 1;
                        info!("Stopping batch after first failure ({} skipped)", outcome.skipped);
                        break;
                    }
                }
            }
        }

        progress.on_batch_complete(outcome.assessments.len(), outcome.failures.len());
        info!(
            "Batch complete: {} scored, {} failed",
            outcome.assessments.len(),
            outcome.failures.len()
        );
        outcome
    }
}
