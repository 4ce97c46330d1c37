//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ScoringError`]: per-submission scoring failures
//! - [`error::RubricError`]: rubric construction failures

pub mod error;
