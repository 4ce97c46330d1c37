//! Rubric source port
//!
//! Rubrics are built once from configuration and shared read-only across every
//! scoring call. Adapters decide where the definitions come from.

use grader_domain::{Rubric, RubricError};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while resolving a rubric
#[derive(Error, Debug)]
pub enum RubricSourceError {
    #[error("rubric '{0}' not found")]
    NotFound(String),

    #[error("rubric '{rubric_id}' could not be read: {message}")]
    Unreadable { rubric_id: String, message: String },

    #[error("rubric '{rubric_id}' is not valid JSON: {message}")]
    Malformed { rubric_id: String, message: String },

    #[error("rubric '{rubric_id}' is invalid: {source}")]
    Invalid {
        rubric_id: String,
        #[source]
        source: RubricError,
    },
}

/// Port for looking up rubrics by identifier
///
/// Implementations must hand out the same shared instance for repeated
/// lookups of one identifier, so a rubric is validated only once.
pub trait RubricSource: Send + Sync {
    /// Resolve a rubric by identifier
    fn load(&self, rubric_id: &str) -> Result<Arc<Rubric>, RubricSourceError>;

    /// Identifiers this source can resolve, sorted
    fn available(&self) -> Vec<String> {
        Vec::new()
    }

    /// Resolve every available rubric, reporting each outcome in order
    fn load_all(&self) -> Vec<(String, Result<Arc<Rubric>, RubricSourceError>)> {
        self.available()
            .into_iter()
            .map(|id| {
                let result = self.load(&id);
                (id, result)
            })
            .collect()
    }
}
