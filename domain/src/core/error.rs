//! Domain error types
//!
//! Two families of errors live here:
//!
//! - [`RubricError`]: a rubric definition is structurally invalid. Raised once,
//!   when the [`Rubric`](crate::rubric::Rubric) is constructed.
//! - [`ScoringError`]: a classification or result set cannot be scored against
//!   an otherwise valid rubric. Raised per submission.
//!
//! Neither family is transient. Callers should surface them verbatim together
//! with the identifiers they carry.

use crate::rubric::ScoringStrategy;
use thiserror::Error;

/// Errors raised while scoring a submission against a rubric
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("criterion '{criterion_id}': unknown performance level '{level}'")]
    UnknownLevel { criterion_id: String, level: String },

    #[error(
        "criterion '{criterion_id}': invalid error count (major={major}, minor={minor}); counts must be non-negative"
    )]
    InvalidErrorCount {
        criterion_id: String,
        major: i64,
        minor: i64,
    },

    #[error("criterion '{criterion_id}': unknown error kind '{kind}'")]
    UnknownErrorKind { criterion_id: String, kind: String },

    #[error(
        "criterion '{criterion_id}': got a {found} classification, criterion is scored by {expected}"
    )]
    StrategyMismatch {
        criterion_id: String,
        expected: ScoringStrategy,
        found: &'static str,
    },

    #[error("rubric '{rubric_id}': no result for criteria {}", .missing.join(", "))]
    IncompleteAssessment {
        rubric_id: String,
        missing: Vec<String>,
    },

    #[error("rubric '{rubric_id}': result references unknown criterion '{criterion_id}'")]
    UnknownCriterion {
        rubric_id: String,
        criterion_id: String,
    },

    #[error("rubric '{rubric_id}': more than one result for criterion '{criterion_id}'")]
    DuplicateResult {
        rubric_id: String,
        criterion_id: String,
    },

    #[error("no overall band configured{}", rubric_suffix(.rubric_id))]
    NoBandConfigured { rubric_id: Option<String> },
}

impl ScoringError {
    /// Criterion identifier this error points at, if any
    pub fn criterion_id(&self) -> Option<&str> {
        match self {
            ScoringError::UnknownLevel { criterion_id, .. }
            | ScoringError::InvalidErrorCount { criterion_id, .. }
            | ScoringError::UnknownErrorKind { criterion_id, .. }
            | ScoringError::StrategyMismatch { criterion_id, .. }
            | ScoringError::UnknownCriterion { criterion_id, .. }
            | ScoringError::DuplicateResult { criterion_id, .. } => Some(criterion_id),
            ScoringError::IncompleteAssessment { .. } | ScoringError::NoBandConfigured { .. } => {
                None
            }
        }
    }
}

fn rubric_suffix(rubric_id: &Option<String>) -> String {
    match rubric_id {
        Some(id) => format!(" for rubric '{}'", id),
        None => String::new(),
    }
}

/// Errors raised while constructing a [`Rubric`](crate::rubric::Rubric)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RubricError {
    #[error("rubric identifier cannot be empty")]
    EmptyRubricId,

    #[error("rubric '{rubric_id}': criterion identifier cannot be empty")]
    EmptyCriterionId { rubric_id: String },

    #[error("rubric '{rubric_id}': duplicate criterion '{criterion_id}'")]
    DuplicateCriterion {
        rubric_id: String,
        criterion_id: String,
    },

    #[error("criterion '{criterion_id}': level_band criterion has no performance levels")]
    NoLevels { criterion_id: String },

    #[error("criterion '{criterion_id}': duplicate level name '{level}'")]
    DuplicateLevelName { criterion_id: String, level: String },

    #[error("criterion '{criterion_id}': levels '{previous}' and '{level}' share {points} points")]
    DuplicateLevelPoints {
        criterion_id: String,
        previous: String,
        level: String,
        points: u32,
    },

    #[error(
        "criterion '{criterion_id}': level '{level}' is listed after '{previous}' but is worth more points"
    )]
    LevelsOutOfOrder {
        criterion_id: String,
        previous: String,
        level: String,
    },

    #[error(
        "criterion '{criterion_id}': level '{level}' is worth {points} points, above the maximum of {max_points}"
    )]
    LevelExceedsMax {
        criterion_id: String,
        level: String,
        points: u32,
        max_points: u32,
    },

    #[error("criterion '{criterion_id}': floor {floor} is above the maximum of {max_points}")]
    FloorExceedsMax {
        criterion_id: String,
        floor: u32,
        max_points: u32,
    },

    #[error("rubric '{rubric_id}': duplicate band '{band}'")]
    DuplicateBand { rubric_id: String, band: String },

    #[error(
        "rubric '{rubric_id}': band '{band}' threshold must be strictly below the band listed before it"
    )]
    BandsOutOfOrder { rubric_id: String, band: String },

    #[error("rubric '{rubric_id}': lowest band '{band}' must have a threshold of 0")]
    LowestBandNotZero { rubric_id: String, band: String },
}
