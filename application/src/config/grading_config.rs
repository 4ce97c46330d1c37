//! Grading behavior configuration

use serde::{Deserialize, Serialize};

/// Controls how the scoring use cases behave
///
/// # Example
///
/// ```
/// use grader_application::GradingConfig;
///
/// let config = GradingConfig::default()
///     .with_default_rubric("essay")
///     .with_fail_fast(true);
/// assert_eq!(config.default_rubric.as_deref(), Some("essay"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
    /// Rubric used when a submission does not name one
    pub default_rubric: Option<String>,
    /// Stop a batch at the first submission that fails to score
    pub fail_fast: bool,
}

impl GradingConfig {
    pub fn with_default_rubric(mut self, rubric_id: impl Into<String>) -> Self {
        self.default_rubric = Some(rubric_id.into());
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}
