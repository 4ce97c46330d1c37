//! Output format value object

use serde::{Deserialize, Serialize};

/// How assessment results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Per-criterion breakdown, totals, band and feedback (default)
    #[default]
    Full,
    /// One line per submission
    Summary,
    /// JSON output
    Json,
}
