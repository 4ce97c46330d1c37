//! Grading configuration from TOML (`[grading]` section)

use grader_application::GradingConfig;
use serde::{Deserialize, Serialize};

/// Raw grading configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGradingConfig {
    /// Rubric id used when a submission does not name one
    pub default_rubric: Option<String>,
    /// Stop a batch at the first failed submission
    pub fail_fast: bool,
}

impl FileGradingConfig {
    /// Convert to the application-layer config
    pub fn to_grading_config(&self) -> GradingConfig {
        GradingConfig {
            default_rubric: self.default_rubric.clone(),
            fail_fast: self.fail_fast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_grading_config() {
        let file = FileGradingConfig {
            default_rubric: Some("essay".to_string()),
            fail_fast: true,
        };
        let config = file.to_grading_config();
        assert_eq!(config.default_rubric.as_deref(), Some("essay"));
        assert!(config.fail_fast);
    }
}
