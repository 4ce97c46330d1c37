//! Output formatter trait

use grader_domain::{OutputFormat, RubricAssessmentResult};

/// Trait for formatting assessment results
pub trait OutputFormatter {
    /// Format one assessment with its full breakdown
    fn format(&self, result: &RubricAssessmentResult) -> String;

    /// Format a batch of assessments as JSON
    fn format_json(&self, results: &[RubricAssessmentResult]) -> String;

    /// Format one assessment as a single line
    fn format_summary(&self, result: &RubricAssessmentResult) -> String;

    /// Render a batch in the requested format
    fn render(&self, format: OutputFormat, results: &[RubricAssessmentResult]) -> String {
        match format {
            OutputFormat::Full => results
                .iter()
                .map(|r| self.format(r))
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Summary => results
                .iter()
                .map(|r| self.format_summary(r))
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Json => self.format_json(results),
        }
    }
}
