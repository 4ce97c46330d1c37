//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod score_batch;
pub mod score_submission;

#[cfg(test)]
pub(crate) mod test_support;
