//! Rubric location from TOML (`[rubrics]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw rubric configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRubricsConfig {
    /// Directory holding `<rubric_id>.json` files
    pub dir: PathBuf,
}

impl Default for FileRubricsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("rubrics"),
        }
    }
}
