//! Rubric model
//!
//! Immutable description of how a submission is graded:
//!
//! - [`Rubric`]: ordered criteria, the minor-to-major conversion ratio, and
//!   the overall band table. Validated at construction.
//! - [`Criterion`]: one gradable dimension, scored by a [`ScoringStrategy`].
//! - [`LevelBandRules`] / [`PerformanceLevel`]: named tiers with fixed points.
//! - [`ErrorCountScoringRules`] / [`ErrorConversionRules`]: deduction per
//!   error unit, with minor errors folded into major-equivalents.
//! - [`OverallBand`]: qualitative tier chosen from the final percentage.

pub mod band;
pub mod criterion;
pub mod entities;
pub mod error_rules;
pub mod level;

pub use band::OverallBand;
pub use criterion::{Criterion, CriterionRules, ScoringStrategy};
pub use entities::{Rubric, RubricDefinition};
pub use error_rules::{ErrorConversionRules, ErrorCountScoringRules, ErrorSeverity};
pub use level::{LevelBandRules, PerformanceLevel};
