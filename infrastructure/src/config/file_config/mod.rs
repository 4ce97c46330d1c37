//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod grading;
mod logging;
mod output;
mod rubrics;

pub use grading::FileGradingConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use rubrics::FileRubricsConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("grading.default_rubric cannot be empty")]
    EmptyDefaultRubric,

    #[error(
        "grading.default_rubric '{0}' looks like a file path; it should be a rubric id resolved under rubrics.dir"
    )]
    DefaultRubricIsPath(String),

    #[error("{0} cannot be an empty path")]
    EmptyPath(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Scoring behavior
    pub grading: FileGradingConfig,
    /// Where rubric definitions live
    pub rubrics: FileRubricsConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Audit log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if let Some(rubric) = &self.grading.default_rubric {
            if rubric.trim().is_empty() {
                issues.push(ConfigValidationError::EmptyDefaultRubric);
            } else if rubric.contains('/') || rubric.contains('\\') || rubric.ends_with(".json") {
                issues.push(ConfigValidationError::DefaultRubricIsPath(rubric.clone()));
            }
        }

        if self.rubrics.dir.as_os_str().is_empty() {
            issues.push(ConfigValidationError::EmptyPath("rubrics.dir"));
        }

        if self
            .logging
            .assessment_log
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            issues.push(ConfigValidationError::EmptyPath("logging.assessment_log"));
        }

        issues
    }
}
