//! Overall qualitative bands
//!
//! A band table maps the final percentage to a named tier. Each band owns an
//! inclusive lower bound; the table is listed from the highest tier down and the
//! lowest tier starts at 0.

use crate::core::error::RubricError;
use crate::scoring::Percentage;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named tier selected from the final percentage
///
/// # Example
///
/// ```
/// use grader_domain::rubric::OverallBand;
/// use grader_domain::scoring::Percentage;
///
/// let band = OverallBand::new("Proficient", Percentage::from_f64(70.0));
/// assert!(band.admits(Percentage::from_f64(70.0)));
/// assert!(!band.admits(Percentage::from_f64(69.99)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallBand {
    pub name: String,
    /// Inclusive lower bound
    pub threshold: Percentage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OverallBand {
    pub fn new(name: impl Into<String>, threshold: Percentage) -> Self {
        Self {
            name: name.into(),
            threshold,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether `percentage` reaches this band's lower bound
    pub fn admits(&self, percentage: Percentage) -> bool {
        percentage >= self.threshold
    }
}

impl std::fmt::Display for OverallBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Check a band table: unique names, strictly decreasing thresholds, lowest at 0.
///
/// An empty table passes; scoring against it fails later with
/// [`ScoringError::NoBandConfigured`](crate::ScoringError::NoBandConfigured).
pub(crate) fn validate_bands(rubric_id: &str, bands: &[OverallBand]) -> Result<(), RubricError> {
    let mut seen = HashSet::new();
    for band in bands {
        if !seen.insert(band.name.as_str()) {
            return Err(RubricError::DuplicateBand {
                rubric_id: rubric_id.to_string(),
                band: band.name.clone(),
            });
        }
    }

    for pair in bands.windows(2) {
        if pair[1].threshold >= pair[0].threshold {
            return Err(RubricError::BandsOutOfOrder {
                rubric_id: rubric_id.to_string(),
                band: pair[1].name.clone(),
            });
        }
    }

    if let Some(lowest) = bands.last()
        && lowest.threshold != Percentage::ZERO
    {
        return Err(RubricError::LowestBandNotZero {
            rubric_id: rubric_id.to_string(),
            band: lowest.name.clone(),
        });
    }

    Ok(())
}
