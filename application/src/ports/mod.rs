//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod assessment_logger;
pub mod progress;
pub mod rubric_source;
