//! Application layer for rubric-grader
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GradingConfig;
pub use ports::{
    assessment_logger::{AssessmentEvent, AssessmentLogger, NoAssessmentLogger},
    progress::{NoProgress, ProgressNotifier},
    rubric_source::{RubricSource, RubricSourceError},
};
pub use use_cases::score_batch::{BatchOutcome, ScoreBatchUseCase, SubmissionFailure};
pub use use_cases::score_submission::{ScoreSubmissionError, ScoreSubmissionUseCase};
