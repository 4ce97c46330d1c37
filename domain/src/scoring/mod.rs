//! Scoring engine
//!
//! Deterministic point computation from classifier judgments. The classifier
//! picks a level or counts errors; everything numeric happens here.
//!
//! ```text
//! ClassificationRecord ──▶ Criterion::score ──▶ CriterionResult ─┐
//!   (one per criterion)     (level band /                         │
//!                            error count)                         ▼
//!                                           aggregate ──▶ RubricAssessmentResult
//!                                   (totals, percentage, overall band)
//! ```
//!
//! Every function here is pure and synchronous. A shared [`Rubric`](crate::rubric::Rubric)
//! can be scored from any number of threads at once.

pub mod aggregate;
pub mod classification;
pub mod parsing;
pub mod percentage;
pub mod result;
pub mod scorer;

pub use aggregate::aggregate;
pub use classification::{Classification, ClassificationRecord, SubmissionClassification};
pub use parsing::{ClassificationParseError, parse_classification_response};
pub use percentage::{Percentage, compute_percentage, select_overall_band};
pub use result::{CriterionResult, RubricAssessmentResult};
pub use scorer::{CriterionScorer, ScoringContext, score_error_count, score_level_band};
