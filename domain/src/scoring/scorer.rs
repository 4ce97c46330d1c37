//! Criterion scorers
//!
//! Each rule payload knows how to turn a [`Classification`] into points via
//! [`CriterionScorer`]. [`Criterion::score`] dispatches to the right one and
//! wraps the points in a [`CriterionResult`], so callers never branch on the
//! strategy themselves.

use super::classification::{Classification, ClassificationRecord};
use super::result::CriterionResult;
use crate::core::error::ScoringError;
use crate::rubric::{
    Criterion, CriterionRules, ErrorConversionRules, ErrorCountScoringRules, ErrorSeverity,
    LevelBandRules, ScoringStrategy,
};

/// What a scorer needs to know about the criterion it is scoring
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub criterion_id: &'a str,
    pub max_points: u32,
    pub conversion: &'a ErrorConversionRules,
}

/// Scoring capability, implemented once per strategy
pub trait CriterionScorer {
    fn strategy(&self) -> ScoringStrategy;

    /// Points earned for `classification`. Pure; no I/O.
    fn award(
        &self,
        context: &ScoringContext<'_>,
        classification: &Classification,
    ) -> Result<u32, ScoringError>;

    fn mismatch(&self, context: &ScoringContext<'_>, classification: &Classification) -> ScoringError {
        ScoringError::StrategyMismatch {
            criterion_id: context.criterion_id.to_string(),
            expected: self.strategy(),
            found: classification.kind(),
        }
    }
}

impl CriterionScorer for LevelBandRules {
    fn strategy(&self) -> ScoringStrategy {
        ScoringStrategy::LevelBand
    }

    fn award(
        &self,
        context: &ScoringContext<'_>,
        classification: &Classification,
    ) -> Result<u32, ScoringError> {
        let Classification::Level { level } = classification else {
            return Err(self.mismatch(context, classification));
        };

        self.level(level)
            .map(|l| l.points.min(context.max_points))
            .ok_or_else(|| ScoringError::UnknownLevel {
                criterion_id: context.criterion_id.to_string(),
                level: level.clone(),
            })
    }
}

impl CriterionScorer for ErrorCountScoringRules {
    fn strategy(&self) -> ScoringStrategy {
        ScoringStrategy::ErrorCount
    }

    fn award(
        &self,
        context: &ScoringContext<'_>,
        classification: &Classification,
    ) -> Result<u32, ScoringError> {
        let (major, minor) = match classification {
            Classification::ErrorCounts {
                major_errors,
                minor_errors,
            } => checked_counts(context, *major_errors, *minor_errors)?,
            Classification::ItemizedErrors { errors } => self.tally(context, errors)?,
            Classification::Level { .. } => return Err(self.mismatch(context, classification)),
        };

        let units = self.deduction_units(major, minor, context.conversion);
        Ok(self.points_after(context.max_points, units))
    }
}

impl ErrorCountScoringRules {
    /// Count itemized error kinds by severity
    fn tally(&self, context: &ScoringContext<'_>, errors: &[String]) -> Result<(u64, u64), ScoringError> {
        let mut major = 0u64;
        let mut minor = 0u64;
        for kind in errors {
            match self.severity_of(kind) {
                Some(ErrorSeverity::Major) => major += 1,
                Some(ErrorSeverity::Minor) => minor += 1,
                None => {
                    return Err(ScoringError::UnknownErrorKind {
                        criterion_id: context.criterion_id.to_string(),
                        kind: kind.clone(),
                    });
                }
            }
        }
        Ok((major, minor))
    }
}

fn checked_counts(
    context: &ScoringContext<'_>,
    major: i64,
    minor: i64,
) -> Result<(u64, u64), ScoringError> {
    match (u64::try_from(major), u64::try_from(minor)) {
        (Ok(major), Ok(minor)) => Ok((major, minor)),
        _ => Err(ScoringError::InvalidErrorCount {
            criterion_id: context.criterion_id.to_string(),
            major,
            minor,
        }),
    }
}

impl Criterion {
    fn scorer(&self) -> &dyn CriterionScorer {
        match &self.rules {
            CriterionRules::LevelBand(rules) => rules,
            CriterionRules::ErrorCount(rules) => rules,
        }
    }

    /// Score one classification record against this criterion.
    ///
    /// The record's feedback is copied to the result unchanged.
    pub fn score(
        &self,
        record: &ClassificationRecord,
        conversion: &ErrorConversionRules,
    ) -> Result<CriterionResult, ScoringError> {
        let context = ScoringContext {
            criterion_id: &self.id,
            max_points: self.max_points,
            conversion,
        };
        let points = self.scorer().award(&context, &record.classification)?;

        Ok(CriterionResult::new(
            self.id.clone(),
            points,
            self.max_points,
            record.classification.clone(),
            record.feedback.clone(),
        ))
    }
}

/// Score a `level_band` criterion from the selected level name.
///
/// Fails with [`ScoringError::UnknownLevel`] when `level` is not configured,
/// and never falls back to zero or a nearby level.
pub fn score_level_band(criterion: &Criterion, level: &str) -> Result<CriterionResult, ScoringError> {
    let record = ClassificationRecord::level(criterion.id.clone(), level);
    criterion.score(&record, &ErrorConversionRules::default())
}

/// Score an `error_count` criterion from raw major/minor counts.
///
/// Minor errors convert to major-equivalents by integer division; the
/// remainder is dropped. Points never fall below the floor.
pub fn score_error_count(
    criterion: &Criterion,
    conversion: &ErrorConversionRules,
    major: i64,
    minor: i64,
) -> Result<CriterionResult, ScoringError> {
    let record = ClassificationRecord::error_counts(criterion.id.clone(), major, minor);
    criterion.score(&record, conversion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rubric::PerformanceLevel;

    fn spelling() -> Criterion {
        Criterion::error_count(
            "spelling",
            "Spelling",
            10,
            ErrorCountScoringRules::new(2)
                .with_error_kind("misspelled_term", ErrorSeverity::Major)
                .with_error_kind("typo", ErrorSeverity::Minor),
        )
    }

    fn design() -> Criterion {
        Criterion::level_band(
            "design",
            "Design",
            20,
            LevelBandRules::new(vec![
                PerformanceLevel::new("Excellent", 20),
                PerformanceLevel::new("Good", 14),
                PerformanceLevel::new("Fair", 8),
                PerformanceLevel::new("Poor", 2),
            ]),
        )
    }

    fn ratio(n: u32) -> ErrorConversionRules {
        ErrorConversionRules::new(n).unwrap()
    }

    // ==================== Level band ====================

    #[test]
    fn test_level_band_exact_points() {
        let result = score_level_band(&design(), "Good").unwrap();
        assert_eq!(result.points(), 14);
        assert_eq!(result.max_points(), 20);
        assert_eq!(result.criterion_id(), "design");
        assert_eq!(result.classification(), &Classification::level("Good"));
    }

    #[test]
    fn test_level_band_is_deterministic() {
        let criterion = design();
        for _ in 0..3 {
            assert_eq!(score_level_band(&criterion, "Fair").unwrap().points(), 8);
        }
    }

    #[test]
    fn test_unknown_level_fails() {
        let err = score_level_band(&design(), "Outstanding").unwrap_err();
        assert_eq!(
            err,
            ScoringError::UnknownLevel {
                criterion_id: "design".to_string(),
                level: "Outstanding".to_string(),
            }
        );
    }

    #[test]
    fn test_level_match_is_case_sensitive() {
        assert!(matches!(
            score_level_band(&design(), "good"),
            Err(ScoringError::UnknownLevel { .. })
        ));
    }

    // ==================== Error count ====================

    #[test]
    fn test_error_count_mixed() {
        // 1 major + 3 minor at ratio 3 = 2 units, 10 - 2*2 = 6
        let result = score_error_count(&spelling(), &ratio(3), 1, 3).unwrap();
        assert_eq!(result.points(), 6);
    }

    #[test]
    fn test_error_count_remainder_dropped() {
        let result = score_error_count(&spelling(), &ratio(3), 0, 2).unwrap();
        assert_eq!(result.points(), 10);
    }

    #[test]
    fn test_error_count_floor() {
        let criterion = Criterion::error_count(
            "spelling",
            "Spelling",
            10,
            ErrorCountScoringRules::new(4).with_floor(3),
        );
        assert_eq!(score_error_count(&criterion, &ratio(1), 1, 0).unwrap().points(), 6);
        assert_eq!(score_error_count(&criterion, &ratio(1), 2, 0).unwrap().points(), 3);
        assert_eq!(score_error_count(&criterion, &ratio(1), 50, 50).unwrap().points(), 3);
    }

    #[test]
    fn test_error_count_never_negative() {
        let result = score_error_count(&spelling(), &ratio(1), 100, 0).unwrap();
        assert_eq!(result.points(), 0);
    }

    #[test]
    fn test_error_count_monotonic() {
        let criterion = spelling();
        let conversion = ratio(3);
        for major in 0..8 {
            for minor in 0..12 {
                let here = score_error_count(&criterion, &conversion, major, minor)
                    .unwrap()
                    .points();
                let more_major = score_error_count(&criterion, &conversion, major + 1, minor)
                    .unwrap()
                    .points();
                let more_minor = score_error_count(&criterion, &conversion, major, minor + 1)
                    .unwrap()
                    .points();
                assert!(more_major <= here);
                assert!(more_minor <= here);
                assert!(here <= 10);
            }
        }
    }

    #[test]
    fn test_negative_counts_fail() {
        let err = score_error_count(&spelling(), &ratio(3), -1, 0).unwrap_err();
        assert_eq!(
            err,
            ScoringError::InvalidErrorCount {
                criterion_id: "spelling".to_string(),
                major: -1,
                minor: 0,
            }
        );
        assert!(matches!(
            score_error_count(&spelling(), &ratio(3), 0, -4),
            Err(ScoringError::InvalidErrorCount { minor: -4, .. })
        ));
    }

    #[test]
    fn test_itemized_errors_use_severity_table() {
        let record = ClassificationRecord::new(
            "spelling",
            Classification::itemized(["misspelled_term", "typo", "typo", "typo"]),
        );
        // 1 major + 3 minor at ratio 3 = 2 units
        let result = spelling().score(&record, &ratio(3)).unwrap();
        assert_eq!(result.points(), 6);
    }

    #[test]
    fn test_itemized_unknown_kind_fails() {
        let record = ClassificationRecord::new("spelling", Classification::itemized(["grammar"]));
        assert_eq!(
            spelling().score(&record, &ratio(3)),
            Err(ScoringError::UnknownErrorKind {
                criterion_id: "spelling".to_string(),
                kind: "grammar".to_string(),
            })
        );
    }

    // ==================== Dispatch ====================

    #[test]
    fn test_feedback_passes_through() {
        let record = ClassificationRecord::level("design", "Excellent")
            .with_feedback("  Strong visual hierarchy.\n");
        let result = design().score(&record, &ratio(1)).unwrap();
        assert_eq!(result.feedback(), "  Strong visual hierarchy.\n");
    }

    #[test]
    fn test_strategy_mismatch() {
        let record = ClassificationRecord::level("spelling", "Good");
        assert_eq!(
            spelling().score(&record, &ratio(1)),
            Err(ScoringError::StrategyMismatch {
                criterion_id: "spelling".to_string(),
                expected: ScoringStrategy::ErrorCount,
                found: "level",
            })
        );

        let record = ClassificationRecord::error_counts("design", 1, 0);
        assert!(matches!(
            design().score(&record, &ratio(1)),
            Err(ScoringError::StrategyMismatch {
                expected: ScoringStrategy::LevelBand,
                ..
            })
        ));
    }
}
