//! Performance levels for level-band criteria

use serde::{Deserialize, Serialize};

/// A named performance tier worth a fixed number of points
///
/// # Example
///
/// ```
/// use grader_domain::rubric::PerformanceLevel;
///
/// let good = PerformanceLevel::new("Good", 14).with_description("Minor layout issues");
/// assert_eq!(good.points, 14);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceLevel {
    /// Level name as the classifier reports it (matched exactly)
    pub name: String,
    /// Points awarded when this level is selected
    pub points: u32,
    /// What work at this level looks like
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl PerformanceLevel {
    pub fn new(name: impl Into<String>, points: u32) -> Self {
        Self {
            name: name.into(),
            points,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Rule payload for a `level_band` criterion
///
/// Levels are kept in the order they were configured, highest points first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelBandRules {
    pub levels: Vec<PerformanceLevel>,
}

impl LevelBandRules {
    pub fn new(levels: Vec<PerformanceLevel>) -> Self {
        Self { levels }
    }

    /// Exact-match lookup by level name
    pub fn level(&self, name: &str) -> Option<&PerformanceLevel> {
        self.levels.iter().find(|l| l.name == name)
    }
}
