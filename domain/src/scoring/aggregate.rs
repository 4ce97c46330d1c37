//! Aggregation of per-criterion results into one assessment

use super::percentage::{compute_percentage, select_overall_band};
use super::result::{CriterionResult, RubricAssessmentResult};
use crate::core::error::ScoringError;
use crate::rubric::Rubric;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Combine one result per criterion into a [`RubricAssessmentResult`].
///
/// Checks, in order:
///
/// 1. every result names a criterion of `rubric` ([`ScoringError::UnknownCriterion`]),
///    at most once ([`ScoringError::DuplicateResult`]);
/// 2. every criterion has a result ([`ScoringError::IncompleteAssessment`],
///    listing all missing criteria in rubric order);
/// 3. the rubric has a band table ([`ScoringError::NoBandConfigured`]).
///
/// Missing criteria are never scored as zero. The output lists results in
/// rubric order regardless of input order.
pub fn aggregate<I>(rubric: &Rubric, results: I) -> Result<RubricAssessmentResult, ScoringError>
where
    I: IntoIterator<Item = CriterionResult>,
{
    let mut by_criterion: HashMap<String, CriterionResult> = HashMap::new();

    for result in results {
        if rubric.criterion(result.criterion_id()).is_none() {
            return Err(ScoringError::UnknownCriterion {
                rubric_id: rubric.id().to_string(),
                criterion_id: result.criterion_id().to_string(),
            });
        }
        match by_criterion.entry(result.criterion_id().to_string()) {
            Entry::Occupied(entry) => {
                return Err(ScoringError::DuplicateResult {
                    rubric_id: rubric.id().to_string(),
                    criterion_id: entry.key().clone(),
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(result);
            }
        }
    }

    let missing: Vec<String> = rubric
        .criteria()
        .iter()
        .filter(|c| !by_criterion.contains_key(&c.id))
        .map(|c| c.id.clone())
        .collect();
    if !missing.is_empty() {
        return Err(ScoringError::IncompleteAssessment {
            rubric_id: rubric.id().to_string(),
            missing,
        });
    }

    if rubric.bands().is_empty() {
        return Err(ScoringError::NoBandConfigured {
            rubric_id: Some(rubric.id().to_string()),
        });
    }

    let ordered: Vec<CriterionResult> = rubric
        .criteria()
        .iter()
        .filter_map(|c| by_criterion.remove(&c.id))
        .collect();

    let earned: u64 = ordered.iter().map(|r| u64::from(r.points())).sum();
    let possible = rubric.total_points_possible();
    let percentage = compute_percentage(earned, possible);
    let band = select_overall_band(percentage, rubric.bands())?.clone();

    Ok(RubricAssessmentResult::new(
        rubric.id(),
        ordered,
        possible,
        percentage,
        band,
    ))
}
