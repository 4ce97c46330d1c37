//! Console output formatter for assessment results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use grader_domain::{CriterionResult, RubricAssessmentResult};

/// Formats assessment results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete assessment
    pub fn format(result: &RubricAssessmentResult) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header(&format!(
            "Assessment: {}",
            Self::subject(result)
        )));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Rubric:".cyan().bold(),
            result.rubric_id()
        ));

        // Criteria
        output.push_str(&Self::section_header("Criteria"));
        let width = result
            .criteria()
            .iter()
            .map(|c| c.criterion_id().len())
            .max()
            .unwrap_or(0);
        for criterion in result.criteria() {
            output.push_str(&Self::criterion_line(criterion, width));
            if !criterion.feedback().trim().is_empty() {
                output.push_str(&Self::indent(criterion.feedback().trim_end(), "      "));
                output.push('\n');
            }
        }

        // Totals
        output.push_str(&Self::section_header("Result"));
        output.push_str(&format!(
            "{} {}/{} ({}%)\n",
            "Total:".cyan().bold(),
            result.total_points_earned(),
            result.total_points_possible(),
            result.percentage()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Band:".cyan().bold(),
            result.overall_band().name.green().bold()
        ));
        if let Some(description) = &result.overall_band().description {
            output.push_str(&format!("       {}\n", description.dimmed()));
        }

        // Instructor feedback (if any)
        if !result.instructor_feedback().is_empty() {
            output.push_str(&format!("\n{}\n", "Instructor Feedback:".yellow().bold()));
            for note in result.instructor_feedback() {
                output.push_str(&format!("  * {}\n", note));
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format a batch as a pretty JSON array
    pub fn format_json(results: &[RubricAssessmentResult]) -> String {
        serde_json::to_string_pretty(results).unwrap_or_else(|_| "[]".to_string())
    }

    /// Format one assessment as a single line
    pub fn format_summary(result: &RubricAssessmentResult) -> String {
        format!(
            "{}  {}  {}/{}  {}%  {}",
            Self::subject(result).bold(),
            result.rubric_id().dimmed(),
            result.total_points_earned(),
            result.total_points_possible(),
            result.percentage(),
            result.overall_band().name.green()
        )
    }

    /// Format a submission that could not be scored
    pub fn format_failure(submission_id: &str, error: &dyn std::fmt::Display) -> String {
        format!("{} {}: {}", "x".red().bold(), submission_id.bold(), error)
    }

    /// Format the closing tally of a batch
    pub fn format_batch_summary(scored: usize, failed: usize, skipped: usize) -> String {
        let mut line = format!("{} scored", scored.to_string().green().bold());
        if failed > 0 {
            line.push_str(&format!(", {} failed", failed.to_string().red().bold()));
        }
        if skipped > 0 {
            line.push_str(&format!(", {} skipped", skipped.to_string().yellow()));
        }
        line
    }

    fn subject(result: &RubricAssessmentResult) -> &str {
        result.correlation_id().unwrap_or(result.rubric_id())
    }

    fn criterion_line(criterion: &CriterionResult, width: usize) -> String {
        let score = format!("{:>3}/{:<3}", criterion.points(), criterion.max_points());
        let score = if criterion.points() == criterion.max_points() {
            score.green()
        } else if criterion.points() == 0 {
            score.red()
        } else {
            score.yellow()
        };
        format!(
            "  {:<width$}  {}  {}\n",
            criterion.criterion_id(),
            score,
            criterion.classification().to_string().dimmed(),
            width = width
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &RubricAssessmentResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, results: &[RubricAssessmentResult]) -> String {
        Self::format_json(results)
    }

    fn format_summary(&self, result: &RubricAssessmentResult) -> String {
        Self::format_summary(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grader_domain::{
        ClassificationRecord, Criterion, ErrorConversionRules, ErrorCountScoringRules,
        LevelBandRules, OutputFormat, OverallBand, Percentage, PerformanceLevel, Rubric,
        RubricDefinition, aggregate,
    };

    fn assessment() -> RubricAssessmentResult {
        let rubric = Rubric::new(RubricDefinition {
            id: "essay".to_string(),
            title: None,
            criteria: vec![
                Criterion::error_count("spelling", "Spelling", 10, ErrorCountScoringRules::new(2)),
                Criterion::level_band(
                    "design",
                    "Design",
                    20,
                    LevelBandRules::new(vec![
                        PerformanceLevel::new("Excellent", 20),
                        PerformanceLevel::new("Good", 14),
                    ]),
                ),
            ],
            error_conversion: ErrorConversionRules::new(3).unwrap(),
            bands: vec![
                OverallBand::new("Satisfactory", Percentage::from_f64(60.0)),
                OverallBand::new("Needs Improvement", Percentage::ZERO),
            ],
        })
        .unwrap();

        let conversion = rubric.error_conversion();
        let results = vec![
            rubric
                .criterion("spelling")
                .unwrap()
                .score(&ClassificationRecord::error_counts("spelling", 1, 3), conversion)
                .unwrap(),
            rubric
                .criterion("design")
                .unwrap()
                .score(
                    &ClassificationRecord::level("design", "Good")
                        .with_feedback("Clear layout.\nWeak conclusion."),
                    conversion,
                )
                .unwrap(),
        ];
        aggregate(&rubric, results)
            .unwrap()
            .with_correlation_id("alice-hw3")
    }

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_full_format() {
        plain();
        let output = ConsoleFormatter::format(&assessment());

        assert!(output.contains("Assessment: alice-hw3"));
        assert!(output.contains("Rubric: essay"));
        assert!(output.contains("  spelling    6/10   1 major / 3 minor"));
        assert!(output.contains("  design     14/20   Good"));
        assert!(output.contains("      Clear layout.\n      Weak conclusion."));
        assert!(output.contains("Total: 20/30 (66.67%)"));
        assert!(output.contains("Band: Satisfactory"));
        assert!(!output.contains("Instructor Feedback"));
    }

    #[test]
    fn test_instructor_feedback_shown() {
        plain();
        let mut result = assessment();
        result.append_instructor_feedback("See me about citations.");

        let output = ConsoleFormatter::format(&result);
        assert!(output.contains("Instructor Feedback:"));
        assert!(output.contains("  * See me about citations."));
    }

    #[test]
    fn test_summary_line() {
        plain();
        assert_eq!(
            ConsoleFormatter::format_summary(&assessment()),
            "alice-hw3  essay  20/30  66.67%  Satisfactory"
        );
    }

    #[test]
    fn test_json_is_array() {
        let output = ConsoleFormatter::format_json(&[assessment()]);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["correlation_id"], "alice-hw3");
        assert_eq!(value[0]["percentage"], 66.67);
    }

    #[test]
    fn test_render_summary_joins_lines() {
        plain();
        let results = vec![assessment(), assessment()];
        let output = ConsoleFormatter.render(OutputFormat::Summary, &results);
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_failure_and_batch_lines() {
        plain();
        assert_eq!(
            ConsoleFormatter::format_failure("bob-hw3", &"rubric 'lab' not found"),
            "x bob-hw3: rubric 'lab' not found"
        );
        assert_eq!(ConsoleFormatter::format_batch_summary(3, 0, 0), "3 scored");
        assert_eq!(
            ConsoleFormatter::format_batch_summary(1, 1, 2),
            "1 scored, 1 failed, 2 skipped"
        );
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
