//! Fakes shared by the use case tests

use crate::ports::assessment_logger::{AssessmentEvent, AssessmentLogger};
use crate::ports::progress::ProgressNotifier;
use crate::ports::rubric_source::{RubricSource, RubricSourceError};
use grader_domain::{
    Criterion, ErrorConversionRules, ErrorCountScoringRules, LevelBandRules, OverallBand,
    Percentage, PerformanceLevel, Rubric, RubricDefinition,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// The essay rubric used throughout the scoring examples
pub fn essay_rubric() -> Rubric {
    Rubric::new(RubricDefinition {
        id: "essay".to_string(),
        title: Some("Short essay".to_string()),
        criteria: vec![
            Criterion::error_count("spelling", "Spelling", 10, ErrorCountScoringRules::new(2)),
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
            ),
        ],
        error_conversion: ErrorConversionRules::new(3).unwrap(),
        bands: vec![
            OverallBand::new("Excellent", Percentage::from_f64(90.0)),
            OverallBand::new("Good", Percentage::from_f64(75.0)),
            OverallBand::new("Satisfactory", Percentage::from_f64(60.0)),
            OverallBand::new("Needs Improvement", Percentage::ZERO),
        ],
    })
    .unwrap()
}

#[derive(Default)]
pub struct StaticRubricSource {
    rubrics: HashMap<String, Arc<Rubric>>,
}

impl StaticRubricSource {
    pub fn with(rubric: Rubric) -> Self {
        let mut rubrics = HashMap::new();
        rubrics.insert(rubric.id().to_string(), Arc::new(rubric));
        Self { rubrics }
    }
}

impl RubricSource for StaticRubricSource {
    fn load(&self, rubric_id: &str) -> Result<Arc<Rubric>, RubricSourceError> {
        self.rubrics
            .get(rubric_id)
            .cloned()
            .ok_or_else(|| RubricSourceError::NotFound(rubric_id.to_string()))
    }
}

#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<(&'static str, Value)>>,
}

impl RecordingLogger {
    pub fn events(&self) -> Vec<(&'static str, Value)> {
        self.events.lock().unwrap().clone()
    }
}

impl AssessmentLogger for RecordingLogger {
    fn log(&self, event: AssessmentEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}

#[derive(Default)]
pub struct RecordingProgress {
    calls: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProgressNotifier for RecordingProgress {
    fn on_batch_start(&self, total_submissions: usize) {
        self.calls
            .lock()
            .unwrap()
            .push(format!("start {}", total_submissions));
    }

    fn on_submission_scored(&self, submission_id: &str, success: bool) {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{} {}", submission_id, if success { "ok" } else { "failed" }));
    }

    fn on_batch_complete(&self, scored: usize, failed: usize) {
        self.calls
            .lock()
            .unwrap()
            .push(format!("done {}/{}", scored, failed));
    }
}
