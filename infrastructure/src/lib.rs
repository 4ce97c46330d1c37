//! Infrastructure layer for rubric-grader
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod rubric;
pub mod submission;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGradingConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileRubricsConfig,
};
pub use logging::JsonlAssessmentLogger;
pub use rubric::{InMemoryRubricSource, JsonRubricRepository, load_rubric_file};
pub use submission::{SubmissionLoadError, SubmissionLoader};
