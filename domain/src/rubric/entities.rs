//! The rubric aggregate

use super::band::{OverallBand, validate_bands};
use super::criterion::Criterion;
use super::error_rules::ErrorConversionRules;
use crate::core::error::RubricError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Unvalidated rubric data, as read from configuration
///
/// Turn it into a [`Rubric`] with [`Rubric::new`]; nothing scores against a
/// definition directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricDefinition {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub criteria: Vec<Criterion>,
    #[serde(default)]
    pub error_conversion: ErrorConversionRules,
    #[serde(default)]
    pub bands: Vec<OverallBand>,
}

/// A validated, read-only grading rubric
///
/// Constructed once and shared (typically behind an `Arc`) across every
/// scoring call. Deserializing a `Rubric` runs the same validation as
/// [`Rubric::new`].
///
/// # Example
///
/// ```
/// use grader_domain::rubric::{
///     Criterion, ErrorCountScoringRules, LevelBandRules, OverallBand, PerformanceLevel,
///     Rubric, RubricDefinition,
/// };
/// use grader_domain::scoring::Percentage;
///
/// let rubric = Rubric::new(RubricDefinition {
///     id: "essay".to_string(),
///     title: None,
///     criteria: vec![
///         Criterion::error_count("spelling", "Spelling", 10, ErrorCountScoringRules::new(2)),
///         Criterion::level_band(
///             "design",
///             "Design",
///             20,
///             LevelBandRules::new(vec![
///                 PerformanceLevel::new("Good", 14),
///                 PerformanceLevel::new("Poor", 2),
///             ]),
///         ),
///     ],
///     error_conversion: Default::default(),
///     bands: vec![OverallBand::new("Pass", Percentage::from_f64(50.0)), OverallBand::new("Fail", Percentage::ZERO)],
/// })
/// .unwrap();
///
/// assert_eq!(rubric.total_points_possible(), 30);
/// assert!(rubric.criterion("design").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RubricDefinition")]
pub struct Rubric {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    criteria: Vec<Criterion>,
    error_conversion: ErrorConversionRules,
    bands: Vec<OverallBand>,
}

impl Rubric {
    /// Validate a definition and build the rubric
    pub fn new(definition: RubricDefinition) -> Result<Self, RubricError> {
        let RubricDefinition {
            id,
            title,
            criteria,
            error_conversion,
            bands,
        } = definition;

        if id.trim().is_empty() {
            return Err(RubricError::EmptyRubricId);
        }

        let mut seen = HashSet::new();
        for criterion in &criteria {
            if criterion.id.trim().is_empty() {
                return Err(RubricError::EmptyCriterionId { rubric_id: id });
            }
            if !seen.insert(criterion.id.as_str()) {
                return Err(RubricError::DuplicateCriterion {
                    rubric_id: id.clone(),
                    criterion_id: criterion.id.clone(),
                });
            }
            criterion.validate()?;
        }

        validate_bands(&id, &bands)?;

        Ok(Self {
            id,
            title,
            criteria,
            error_conversion,
            bands,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Criteria in configured order
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn criterion(&self, id: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.id == id)
    }

    pub fn error_conversion(&self) -> &ErrorConversionRules {
        &self.error_conversion
    }

    /// Bands from highest threshold to lowest
    pub fn bands(&self) -> &[OverallBand] {
        &self.bands
    }

    /// Sum of every criterion's maximum
    pub fn total_points_possible(&self) -> u64 {
        self.criteria.iter().map(|c| u64::from(c.max_points)).sum()
    }
}

impl TryFrom<RubricDefinition> for Rubric {
    type Error = RubricError;

    fn try_from(definition: RubricDefinition) -> Result<Self, Self::Error> {
        Self::new(definition)
    }
}

impl From<Rubric> for RubricDefinition {
    fn from(rubric: Rubric) -> Self {
        Self {
            id: rubric.id,
            title: rubric.title,
            criteria: rubric.criteria,
            error_conversion: rubric.error_conversion,
            bands: rubric.bands,
        }
    }
}
