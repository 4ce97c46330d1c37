//! Classification records
//!
//! The classifier (an LLM behind a structured-output schema) only judges; it
//! never computes points. These types carry its judgments into the scorers.

use serde::{Deserialize, Deserializer, Serialize, de};

/// A qualitative judgment for one criterion
///
/// Deserialized by shape, so classifier output stays flat:
///
/// - `{"level": "Good"}`
/// - `{"major_errors": 1, "minor_errors": 3}` (either count may be omitted)
/// - `{"errors": ["misspelled_term", "typo"]}`
///
/// A record must carry exactly one of these shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Classification {
    /// Selected performance level (level-band criteria)
    Level { level: String },
    /// Raw error counts (error-count criteria)
    ErrorCounts { major_errors: i64, minor_errors: i64 },
    /// Error kinds, resolved to severities via the criterion's table
    ItemizedErrors { errors: Vec<String> },
}

/// Every field any classification shape may use
#[derive(Deserialize)]
struct RawClassification {
    level: Option<String>,
    major_errors: Option<i64>,
    minor_errors: Option<i64>,
    errors: Option<Vec<String>>,
}

impl TryFrom<RawClassification> for Classification {
    type Error = String;

    fn try_from(raw: RawClassification) -> Result<Self, Self::Error> {
        let has_counts = raw.major_errors.is_some() || raw.minor_errors.is_some();
        let present: Vec<&str> = [
            ("level", raw.level.is_some()),
            ("error_counts", has_counts),
            ("itemized_errors", raw.errors.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect();

        if present.len() > 1 {
            return Err(format!(
                "record mixes classification shapes: {}",
                present.join(", ")
            ));
        }

        match (raw.level, raw.errors) {
            (Some(level), _) => Ok(Classification::Level { level }),
            (_, Some(errors)) => Ok(Classification::ItemizedErrors { errors }),
            _ if has_counts => Ok(Classification::ErrorCounts {
                major_errors: raw.major_errors.unwrap_or(0),
                minor_errors: raw.minor_errors.unwrap_or(0),
            }),
            _ => Err(
                "record carries no classification (expected level, major_errors/minor_errors or errors)"
                    .to_string(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for Classification {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawClassification::deserialize(deserializer)?;
        Classification::try_from(raw).map_err(de::Error::custom)
    }
}

impl Classification {
    pub fn level(name: impl Into<String>) -> Self {
        Classification::Level { level: name.into() }
    }

    pub fn error_counts(major_errors: i64, minor_errors: i64) -> Self {
        Classification::ErrorCounts {
            major_errors,
            minor_errors,
        }
    }

    pub fn itemized<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Classification::ItemizedErrors {
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    /// Short name of the classification shape, used in mismatch errors
    pub fn kind(&self) -> &'static str {
        match self {
            Classification::Level { .. } => "level",
            Classification::ErrorCounts { .. } => "error_counts",
            Classification::ItemizedErrors { .. } => "itemized_errors",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Level { level } => write!(f, "{}", level),
            Classification::ErrorCounts {
                major_errors,
                minor_errors,
            } => write!(f, "{} major / {} minor", major_errors, minor_errors),
            Classification::ItemizedErrors { errors } => {
                write!(f, "{} itemized error(s)", errors.len())
            }
        }
    }
}

/// The classifier's output for one criterion of one submission
///
/// # Example
///
/// ```
/// use grader_domain::scoring::ClassificationRecord;
///
/// let record = ClassificationRecord::level("design", "Good")
///     .with_feedback("Clear structure, weak conclusion.");
/// assert_eq!(record.criterion_id, "design");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    pub criterion_id: String,
    #[serde(flatten)]
    pub classification: Classification,
    /// Free-text feedback, passed through to the result untouched
    #[serde(default)]
    pub feedback: String,
}

impl ClassificationRecord {
    pub fn new(criterion_id: impl Into<String>, classification: Classification) -> Self {
        Self {
            criterion_id: criterion_id.into(),
            classification,
            feedback: String::new(),
        }
    }

    pub fn level(criterion_id: impl Into<String>, level: impl Into<String>) -> Self {
        Self::new(criterion_id, Classification::level(level))
    }

    pub fn error_counts(criterion_id: impl Into<String>, major: i64, minor: i64) -> Self {
        Self::new(criterion_id, Classification::error_counts(major, minor))
    }

    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = feedback.into();
        self
    }
}

/// Every classification produced for one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionClassification {
    /// Identifier of the graded submission, reused as the correlation id
    #[serde(default)]
    pub submission_id: String,
    /// Rubric the classifier worked against, when it says so
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rubric_id: Option<String>,
    pub classifications: Vec<ClassificationRecord>,
}

impl SubmissionClassification {
    pub fn new(submission_id: impl Into<String>, classifications: Vec<ClassificationRecord>) -> Self {
        Self {
            submission_id: submission_id.into(),
            rubric_id: None,
            classifications,
        }
    }

    pub fn for_rubric(mut self, rubric_id: impl Into<String>) -> Self {
        self.rubric_id = Some(rubric_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_level_record() {
        let record: ClassificationRecord = serde_json::from_str(
            r#"{"criterion_id": "design", "level": "Good", "feedback": "Solid"}"#,
        )
        .unwrap();
        assert_eq!(record.classification, Classification::level("Good"));
        assert_eq!(record.feedback, "Solid");
    }

    #[test]
    fn test_deserialize_error_counts_record() {
        let record: ClassificationRecord = serde_json::from_str(
            r#"{"criterion_id": "spelling", "major_errors": 1, "minor_errors": 3}"#,
        )
        .unwrap();
        assert_eq!(record.classification, Classification::error_counts(1, 3));
        assert!(record.feedback.is_empty());
    }

    #[test]
    fn test_negative_counts_survive_parsing() {
        let record: ClassificationRecord = serde_json::from_str(
            r#"{"criterion_id": "spelling", "major_errors": -1}"#,
        )
        .unwrap();
        assert_eq!(record.classification, Classification::error_counts(-1, 0));
    }

    #[test]
    fn test_minor_errors_only() {
        let record: ClassificationRecord = serde_json::from_str(
            r#"{"criterion_id": "spelling", "minor_errors": 4}"#,
        )
        .unwrap();
        assert_eq!(record.classification, Classification::error_counts(0, 4));
    }

    #[test]
    fn test_mixed_counts_and_itemized_rejected() {
        let err = serde_json::from_str::<ClassificationRecord>(
            r#"{"criterion_id": "spelling", "major_errors": 0, "errors": ["typo", "typo", "typo"]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("mixes classification shapes: error_counts, itemized_errors"));
    }

    #[test]
    fn test_mixed_level_and_counts_rejected() {
        let err = serde_json::from_str::<ClassificationRecord>(
            r#"{"criterion_id": "design", "level": "Good", "minor_errors": 2}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("level, error_counts"));
    }

    #[test]
    fn test_deserialize_itemized_record() {
        let record: ClassificationRecord = serde_json::from_str(
            r#"{"criterion_id": "spelling", "errors": ["typo", "typo", "misspelled_term"]}"#,
        )
        .unwrap();
        assert_eq!(
            record.classification,
            Classification::itemized(["typo", "typo", "misspelled_term"])
        );
    }

    #[test]
    fn test_record_without_classification_rejected() {
        let result: Result<ClassificationRecord, _> =
            serde_json::from_str(r#"{"criterion_id": "design", "feedback": "?"}"#);
        assert!(result.unwrap_err().to_string().contains("no classification"));
    }

    #[test]
    fn test_serialize_is_flat() {
        let record = ClassificationRecord::level("design", "Fair").with_feedback("ok");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["criterion_id"], "design");
        assert_eq!(json["level"], "Fair");
        assert_eq!(json["feedback"], "ok");
    }

    #[test]
    fn test_submission_defaults() {
        let submission: SubmissionClassification = serde_json::from_str(
            r#"{"classifications": [{"criterion_id": "design", "level": "Good"}]}"#,
        )
        .unwrap();
        assert!(submission.submission_id.is_empty());
        assert!(submission.rubric_id.is_none());
        assert_eq!(submission.classifications.len(), 1);
    }

    #[test]
    fn test_kind_and_display() {
        assert_eq!(Classification::level("Good").kind(), "level");
        assert_eq!(Classification::error_counts(1, 2).to_string(), "1 major / 2 minor");
        assert_eq!(
            Classification::itemized(["typo"]).kind(),
            "itemized_errors"
        );
    }
}
