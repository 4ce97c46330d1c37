//! Preloaded rubric source

use grader_application::{RubricSource, RubricSourceError};
use grader_domain::Rubric;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

/// Rubric source over rubrics already in memory
///
/// Used when rubrics are given as individual files on the command line.
#[derive(Debug, Default)]
pub struct InMemoryRubricSource {
    rubrics: BTreeMap<String, Arc<Rubric>>,
}

impl InMemoryRubricSource {
    pub fn new(rubrics: impl IntoIterator<Item = Rubric>) -> Self {
        Self {
            rubrics: rubrics
                .into_iter()
                .map(|r| (r.id().to_string(), Arc::new(r)))
                .collect(),
        }
    }

    /// Add a rubric unless its id is already taken
    ///
    /// Returns `false` and keeps the existing rubric on a clash.
    pub fn insert(&mut self, rubric: Rubric) -> bool {
        match self.rubrics.entry(rubric.id().to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(rubric));
                true
            }
        }
    }

    /// The only rubric held, if exactly one is
    pub fn sole_rubric_id(&self) -> Option<&str> {
        match self.rubrics.len() {
            1 => self.rubrics.keys().next().map(String::as_str),
            _ => None,
        }
    }
}

impl RubricSource for InMemoryRubricSource {
    fn load(&self, rubric_id: &str) -> Result<Arc<Rubric>, RubricSourceError> {
        self.rubrics
            .get(rubric_id)
            .cloned()
            .ok_or_else(|| RubricSourceError::NotFound(rubric_id.to_string()))
    }

    fn available(&self) -> Vec<String> {
        self.rubrics.keys().cloned().collect()
    }
}
