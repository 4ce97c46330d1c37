//! Scoring outputs

use super::classification::Classification;
use super::percentage::Percentage;
use crate::rubric::OverallBand;
use serde::Serialize;

/// Points awarded for one criterion of one submission
///
/// Only produced by the criterion scorers, so `points` always lies in the
/// criterion's `[floor, max_points]` range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionResult {
    criterion_id: String,
    points: u32,
    max_points: u32,
    classification: Classification,
    #[serde(skip_serializing_if = "String::is_empty")]
    feedback: String,
}

impl CriterionResult {
    pub(crate) fn new(
        criterion_id: impl Into<String>,
        points: u32,
        max_points: u32,
        classification: Classification,
        feedback: String,
    ) -> Self {
        Self {
            criterion_id: criterion_id.into(),
            points,
            max_points,
            classification,
            feedback,
        }
    }

    pub fn criterion_id(&self) -> &str {
        &self.criterion_id
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn max_points(&self) -> u32 {
        self.max_points
    }

    /// The judgment that produced these points
    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}

/// The final assessment of one submission against one rubric
///
/// Built only by [`aggregate`](super::aggregate). The single permitted change
/// afterwards is appending human-authored feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RubricAssessmentResult {
    rubric_id: String,
    criteria: Vec<CriterionResult>,
    total_points_earned: u64,
    total_points_possible: u64,
    percentage: Percentage,
    overall_band: OverallBand,
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    instructor_feedback: Vec<String>,
}

impl RubricAssessmentResult {
    pub(crate) fn new(
        rubric_id: impl Into<String>,
        criteria: Vec<CriterionResult>,
        total_points_possible: u64,
        percentage: Percentage,
        overall_band: OverallBand,
    ) -> Self {
        let total_points_earned = criteria.iter().map(|r| u64::from(r.points)).sum();
        Self {
            rubric_id: rubric_id.into(),
            criteria,
            total_points_earned,
            total_points_possible,
            percentage,
            overall_band,
            correlation_id: None,
            instructor_feedback: Vec::new(),
        }
    }

    /// Attach a tracing identifier (e.g. the submission id)
    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }

    /// Append instructor-written feedback. Scores are unaffected.
    pub fn append_instructor_feedback(&mut self, feedback: impl Into<String>) {
        self.instructor_feedback.push(feedback.into());
    }

    pub fn rubric_id(&self) -> &str {
        &self.rubric_id
    }

    /// Per-criterion results in rubric order
    pub fn criteria(&self) -> &[CriterionResult] {
        &self.criteria
    }

    pub fn criterion(&self, criterion_id: &str) -> Option<&CriterionResult> {
        self.criteria.iter().find(|r| r.criterion_id == criterion_id)
    }

    pub fn total_points_earned(&self) -> u64 {
        self.total_points_earned
    }

    pub fn total_points_possible(&self) -> u64 {
        self.total_points_possible
    }

    pub fn percentage(&self) -> Percentage {
        self.percentage
    }

    pub fn overall_band(&self) -> &OverallBand {
        &self.overall_band
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn instructor_feedback(&self) -> &[String] {
        &self.instructor_feedback
    }
}
