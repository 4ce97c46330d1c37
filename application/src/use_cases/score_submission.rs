//! Score Submission use case
//!
//! Turns one submission's classifier output into a final assessment:
//! resolve the rubric, score every classification record with its criterion's
//! strategy, aggregate, and record the outcome.

use crate::ports::assessment_logger::{AssessmentEvent, AssessmentLogger, NoAssessmentLogger};
use crate::ports::rubric_source::{RubricSource, RubricSourceError};
use grader_domain::{
    Rubric, RubricAssessmentResult, ScoringError, SubmissionClassification, aggregate,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while scoring a submission
#[derive(Error, Debug)]
pub enum ScoreSubmissionError {
    #[error("submission '{0}' does not name a rubric and no default rubric is configured")]
    NoRubric(String),

    #[error(transparent)]
    Rubric(#[from] RubricSourceError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

impl ScoreSubmissionError {
    /// Criterion the failure points at, if any
    pub fn criterion_id(&self) -> Option<&str> {
        match self {
            ScoreSubmissionError::Scoring(e) => e.criterion_id(),
            _ => None,
        }
    }
}

/// Use case for scoring a single submission
pub struct ScoreSubmissionUseCase<S: RubricSource + 'static> {
    source: Arc<S>,
    logger: Arc<dyn AssessmentLogger>,
    default_rubric: Option<String>,
}

impl<S: RubricSource + 'static> ScoreSubmissionUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            logger: Arc::new(NoAssessmentLogger),
            default_rubric: None,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn AssessmentLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Rubric used when a submission does not name one
    pub fn with_default_rubric(mut self, rubric_id: Option<String>) -> Self {
        self.default_rubric = rubric_id;
        self
    }

    /// Score one submission.
    ///
    /// Every outcome, success or failure, is also sent to the assessment
    /// logger. Errors are returned as-is and never retried.
    pub fn execute(
        &self,
        submission: &SubmissionClassification,
    ) -> Result<RubricAssessmentResult, ScoreSubmissionError> {
        let outcome = self
            .resolve_rubric(submission)
            .and_then(|rubric| Self::score(&rubric, submission));

        match &outcome {
            Ok(assessment) => {
                info!(
                    "Scored submission '{}' against '{}': {}/{} ({}%, {})",
                    submission.submission_id,
                    assessment.rubric_id(),
                    assessment.total_points_earned(),
                    assessment.total_points_possible(),
                    assessment.percentage(),
                    assessment.overall_band()
                );
                self.logger.log(AssessmentEvent::new(
                    "assessment_completed",
                    serde_json::json!({
                        "submission_id": submission.submission_id,
                        "assessment": serde_json::to_value(assessment).unwrap_or_default(),
                    }),
                ));
            }
            Err(e) => {
                warn!("Submission '{}' failed: {}", submission.submission_id, e);
                self.logger.log(AssessmentEvent::new(
                    "assessment_failed",
                    serde_json::json!({
                        "submission_id": submission.submission_id,
                        "rubric_id": submission.rubric_id.as_deref().or(self.default_rubric.as_deref()),
                        "criterion_id": e.criterion_id(),
                        "error": e.to_string(),
                    }),
                ));
            }
        }

        outcome
    }

    fn resolve_rubric(
        &self,
        submission: &SubmissionClassification,
    ) -> Result<Arc<Rubric>, ScoreSubmissionError> {
        let rubric_id = submission
            .rubric_id
            .as_deref()
            .or(self.default_rubric.as_deref())
            .ok_or_else(|| ScoreSubmissionError::NoRubric(submission.submission_id.clone()))?;

        debug!(
            "Resolving rubric '{}' for submission '{}'",
            rubric_id, submission.submission_id
        );
        Ok(self.source.load(rubric_id)?)
    }

    fn score(
        rubric: &Rubric,
        submission: &SubmissionClassification,
    ) -> Result<RubricAssessmentResult, ScoreSubmissionError> {
        let conversion = rubric.error_conversion();
        let mut results = Vec::with_capacity(submission.classifications.len());

        for record in &submission.classifications {
            let criterion = rubric.criterion(&record.criterion_id).ok_or_else(|| {
                ScoringError::UnknownCriterion {
                    rubric_id: rubric.id().to_string(),
                    criterion_id: record.criterion_id.clone(),
                }
            })?;
            let result = criterion.score(record, conversion)?;
            debug!(
                "  {} = {}/{} ({})",
                criterion.id,
                result.points(),
                result.max_points(),
                result.classification()
            );
            results.push(result);
        }

        let assessment = aggregate(rubric, results)?;
        if submission.submission_id.is_empty() {
            Ok(assessment)
        } else {
            Ok(assessment.with_correlation_id(submission.submission_id.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{RecordingLogger, StaticRubricSource, essay_rubric};
    use grader_domain::ClassificationRecord;

    fn use_case() -> ScoreSubmissionUseCase<StaticRubricSource> {
        ScoreSubmissionUseCase::new(Arc::new(StaticRubricSource::with(essay_rubric())))
    }

    fn worked_example() -> SubmissionClassification {
        SubmissionClassification::new(
            "alice-hw3",
            vec![
                ClassificationRecord::error_counts("spelling", 1, 3)
                    .with_feedback("Watch 'recieve'."),
                ClassificationRecord::level("design", "Good"),
            ],
        )
        .for_rubric("essay")
    }

    #[test]
    fn test_scores_worked_example() {
        let assessment = use_case().execute(&worked_example()).unwrap();

        assert_eq!(assessment.total_points_earned(), 20);
        assert_eq!(assessment.total_points_possible(), 30);
        assert_eq!(assessment.percentage().to_string(), "66.67");
        assert_eq!(assessment.overall_band().name, "Satisfactory");
        assert_eq!(assessment.correlation_id(), Some("alice-hw3"));
        assert_eq!(
            assessment.criterion("spelling").unwrap().feedback(),
            "Watch 'recieve'."
        );
    }

    #[test]
    fn test_remainder_minor_errors_dropped() {
        let submission = SubmissionClassification::new(
            "bob-hw3",
            vec![
                ClassificationRecord::error_counts("spelling", 0, 2),
                ClassificationRecord::level("design", "Good"),
            ],
        )
        .for_rubric("essay");

        let assessment = use_case().execute(&submission).unwrap();
        assert_eq!(assessment.criterion("spelling").unwrap().points(), 10);
    }

    #[test]
    fn test_default_rubric_used_when_unnamed() {
        let mut submission = worked_example();
        submission.rubric_id = None;

        let err = use_case().execute(&submission).unwrap_err();
        assert!(matches!(err, ScoreSubmissionError::NoRubric(id) if id == "alice-hw3"));

        let assessment = use_case()
            .with_default_rubric(Some("essay".to_string()))
            .execute(&submission)
            .unwrap();
        assert_eq!(assessment.rubric_id(), "essay");
    }

    #[test]
    fn test_unknown_rubric() {
        let submission = worked_example().for_rubric("lab-report");
        let err = use_case().execute(&submission).unwrap_err();
        assert!(matches!(
            err,
            ScoreSubmissionError::Rubric(RubricSourceError::NotFound(id)) if id == "lab-report"
        ));
    }

    #[test]
    fn test_record_for_unknown_criterion() {
        let mut submission = worked_example();
        submission
            .classifications
            .push(ClassificationRecord::level("originality", "High"));

        let err = use_case().execute(&submission).unwrap_err();
        assert_eq!(err.criterion_id(), Some("originality"));
        assert!(matches!(
            err,
            ScoreSubmissionError::Scoring(ScoringError::UnknownCriterion { .. })
        ));
    }

    #[test]
    fn test_missing_record_is_incomplete() {
        let mut submission = worked_example();
        submission.classifications.remove(0);

        let err = use_case().execute(&submission).unwrap_err();
        assert!(matches!(
            err,
            ScoreSubmissionError::Scoring(ScoringError::IncompleteAssessment { ref missing, .. })
                if missing == &vec!["spelling".to_string()]
        ));
    }

    #[test]
    fn test_unknown_level_propagates() {
        let mut submission = worked_example();
        submission.classifications[1] = ClassificationRecord::level("design", "Superb");

        let err = use_case().execute(&submission).unwrap_err();
        assert_eq!(
            err.to_string(),
            "criterion 'design': unknown performance level 'Superb'"
        );
    }

    #[test]
    fn test_outcomes_are_logged() {
        let logger = Arc::new(RecordingLogger::default());
        let use_case = use_case().with_logger(logger.clone());

        use_case.execute(&worked_example()).unwrap();
        let mut broken = worked_example();
        broken.classifications[0] = ClassificationRecord::error_counts("spelling", -2, 0);
        let _ = use_case.execute(&broken);

        let events = logger.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, "assessment_completed");
        assert_eq!(events[0].1["assessment"]["total_points_earned"], 20);
        assert_eq!(events[1].0, "assessment_failed");
        assert_eq!(events[1].1["criterion_id"], "spelling");
        assert_eq!(events[1].1["rubric_id"], "essay");
    }

    #[test]
    fn test_empty_submission_id_leaves_no_correlation() {
        let mut submission = worked_example();
        submission.submission_id.clear();

        let assessment = use_case().execute(&submission).unwrap();
        assert!(assessment.correlation_id().is_none());
    }
}
