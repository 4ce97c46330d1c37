//! Domain layer for rubric-grader
//!
//! This crate contains the rubric model and the scoring engine. It has no
//! dependencies on infrastructure or presentation concerns, performs no I/O,
//! and holds no shared mutable state.
//!
//! # Core Concepts
//!
//! ## Classification vs. computation
//!
//! An external classifier (usually an LLM) judges each criterion of a
//! submission: it selects a performance level, or counts major and minor
//! errors. It never adds up points. This crate turns those judgments into
//! exact, reproducible scores:
//!
//! - **Rubric**: validated, read-only criteria plus band thresholds
//! - **Criterion scorers**: level-band and error-count strategies
//! - **Aggregator**: totals, percentage and overall band for one submission

pub mod config;
pub mod core;
pub mod rubric;
pub mod scoring;

// Re-export commonly used types
pub use config::OutputFormat;
pub use crate::core::error::{RubricError, ScoringError};
pub use rubric::{
    Criterion, CriterionRules, ErrorConversionRules, ErrorCountScoringRules, ErrorSeverity,
    LevelBandRules, OverallBand, PerformanceLevel, Rubric, RubricDefinition, ScoringStrategy,
};
pub use scoring::{
    Classification, ClassificationParseError, ClassificationRecord, CriterionResult,
    CriterionScorer, Percentage, RubricAssessmentResult, SubmissionClassification, aggregate,
    compute_percentage, parse_classification_response, score_error_count, score_level_band,
    select_overall_band,
};
