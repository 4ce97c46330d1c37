//! Criteria and their scoring strategies

use super::error_rules::ErrorCountScoringRules;
use super::level::LevelBandRules;
use crate::core::error::RubricError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Strategy tag for a criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    /// Pick one named performance level with fixed points
    LevelBand,
    /// Deduct points per normalized error unit
    ErrorCount,
}

impl ScoringStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringStrategy::LevelBand => "level_band",
            ScoringStrategy::ErrorCount => "error_count",
        }
    }
}

impl std::fmt::Display for ScoringStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Strategy-specific rule payload
///
/// Serialized inline with the criterion, tagged by `strategy`:
///
/// ```json
/// {"id": "design", "label": "Design", "max_points": 20,
///  "strategy": "level_band", "levels": [{"name": "Excellent", "points": 20}]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum CriterionRules {
    LevelBand(LevelBandRules),
    ErrorCount(ErrorCountScoringRules),
}

impl CriterionRules {
    pub fn strategy(&self) -> ScoringStrategy {
        match self {
            CriterionRules::LevelBand(_) => ScoringStrategy::LevelBand,
            CriterionRules::ErrorCount(_) => ScoringStrategy::ErrorCount,
        }
    }
}

/// One gradable dimension of a rubric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: String,
    pub label: String,
    pub max_points: u32,
    #[serde(flatten)]
    pub rules: CriterionRules,
}

impl Criterion {
    pub fn level_band(
        id: impl Into<String>,
        label: impl Into<String>,
        max_points: u32,
        rules: LevelBandRules,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            max_points,
            rules: CriterionRules::LevelBand(rules),
        }
    }

    pub fn error_count(
        id: impl Into<String>,
        label: impl Into<String>,
        max_points: u32,
        rules: ErrorCountScoringRules,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            max_points,
            rules: CriterionRules::ErrorCount(rules),
        }
    }

    pub fn strategy(&self) -> ScoringStrategy {
        self.rules.strategy()
    }

    pub(crate) fn validate(&self) -> Result<(), RubricError> {
        match &self.rules {
            CriterionRules::LevelBand(rules) => self.validate_levels(rules),
            CriterionRules::ErrorCount(rules) => {
                if rules.floor > self.max_points {
                    return Err(RubricError::FloorExceedsMax {
                        criterion_id: self.id.clone(),
                        floor: rules.floor,
                        max_points: self.max_points,
                    });
                }
                Ok(())
            }
        }
    }

    fn validate_levels(&self, rules: &LevelBandRules) -> Result<(), RubricError> {
        if rules.levels.is_empty() {
            return Err(RubricError::NoLevels {
                criterion_id: self.id.clone(),
            });
        }

        let mut names = HashSet::new();
        for level in &rules.levels {
            if !names.insert(level.name.as_str()) {
                return Err(RubricError::DuplicateLevelName {
                    criterion_id: self.id.clone(),
                    level: level.name.clone(),
                });
            }
            if level.points > self.max_points {
                return Err(RubricError::LevelExceedsMax {
                    criterion_id: self.id.clone(),
                    level: level.name.clone(),
                    points: level.points,
                    max_points: self.max_points,
                });
            }
        }

        for pair in rules.levels.windows(2) {
            let (previous, level) = (&pair[0], &pair[1]);
            if level.points == previous.points {
                return Err(RubricError::DuplicateLevelPoints {
                    criterion_id: self.id.clone(),
                    previous: previous.name.clone(),
                    level: level.name.clone(),
                    points: level.points,
                });
            }
            if level.points > previous.points {
                return Err(RubricError::LevelsOutOfOrder {
                    criterion_id: self.id.clone(),
                    previous: previous.name.clone(),
                    level: level.name.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rubric::PerformanceLevel;

    fn design(levels: &[(&str, u32)]) -> Criterion {
        Criterion::level_band(
            "design",
            "Design",
            20,
            LevelBandRules::new(
                levels
                    .iter()
                    .map(|(name, points)| PerformanceLevel::new(*name, *points))
                    .collect(),
            ),
        )
    }

    // ==================== Validation ====================

    #[test]
    fn test_descending_levels_accepted() {
        let criterion = design(&[("Excellent", 20), ("Good", 14), ("Fair", 8), ("Poor", 2)]);
        assert!(criterion.validate().is_ok());
    }

    #[test]
    fn test_non_contiguous_points_accepted() {
        let criterion = design(&[("Top", 20), ("Bottom", 0)]);
        assert!(criterion.validate().is_ok());
    }

    #[test]
    fn test_empty_levels_rejected() {
        assert_eq!(
            design(&[]).validate(),
            Err(RubricError::NoLevels {
                criterion_id: "design".to_string()
            })
        );
    }

    #[test]
    fn test_ascending_levels_rejected() {
        let criterion = design(&[("Poor", 2), ("Excellent", 20)]);
        assert!(matches!(
            criterion.validate(),
            Err(RubricError::LevelsOutOfOrder { level, .. }) if level == "Excellent"
        ));
    }

    #[test]
    fn test_shared_points_rejected() {
        let criterion = design(&[("Good", 14), ("Also good", 14)]);
        assert!(matches!(
            criterion.validate(),
            Err(RubricError::DuplicateLevelPoints { points: 14, .. })
        ));
    }

    #[test]
    fn test_duplicate_level_name_rejected() {
        let criterion = design(&[("Good", 14), ("Good", 8)]);
        assert!(matches!(
            criterion.validate(),
            Err(RubricError::DuplicateLevelName { .. })
        ));
    }

    #[test]
    fn test_level_above_max_rejected() {
        let criterion = design(&[("Heroic", 25), ("Good", 14)]);
        assert!(matches!(
            criterion.validate(),
            Err(RubricError::LevelExceedsMax { points: 25, max_points: 20, .. })
        ));
    }

    #[test]
    fn test_floor_above_max_rejected() {
        let criterion = Criterion::error_count(
            "spelling",
            "Spelling",
            10,
            ErrorCountScoringRules::new(2).with_floor(11),
        );
        assert!(matches!(
            criterion.validate(),
            Err(RubricError::FloorExceedsMax { floor: 11, .. })
        ));
    }

    // ==================== Serialization ====================

    #[test]
    fn test_deserialize_level_band() {
        let criterion: Criterion = serde_json::from_str(
            r#"{
                "id": "design",
                "label": "Design",
                "max_points": 20,
                "strategy": "level_band",
                "levels": [
                    {"name": "Excellent", "points": 20, "description": "Polished"},
                    {"name": "Poor", "points": 2}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(criterion.strategy(), ScoringStrategy::LevelBand);
        let CriterionRules::LevelBand(rules) = &criterion.rules else {
            panic!("expected level band rules");
        };
        assert_eq!(rules.levels.len(), 2);
        assert_eq!(rules.levels[0].description, "Polished");
    }

    #[test]
    fn test_deserialize_error_count() {
        let criterion: Criterion = serde_json::from_str(
            r#"{
                "id": "spelling",
                "label": "Spelling",
                "max_points": 10,
                "strategy": "error_count",
                "deduction_per_unit": 2
            }"#,
        )
        .unwrap();

        assert_eq!(criterion.strategy(), ScoringStrategy::ErrorCount);
        assert_eq!(
            criterion.rules,
            CriterionRules::ErrorCount(ErrorCountScoringRules::new(2))
        );
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let result: Result<Criterion, _> = serde_json::from_str(
            r#"{"id": "x", "label": "X", "max_points": 5, "strategy": "vibes"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(ScoringStrategy::LevelBand.to_string(), "level_band");
        assert_eq!(ScoringStrategy::ErrorCount.to_string(), "error_count");
    }
}
