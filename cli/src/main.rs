//! CLI entrypoint for rubric-grader
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use grader_application::{
    AssessmentLogger, GradingConfig, NoAssessmentLogger, NoProgress, ProgressNotifier,
    RubricSource, ScoreBatchUseCase,
};
use grader_domain::{OutputFormat, SubmissionClassification};
use grader_infrastructure::{
    ConfigLoader, FileConfig, InMemoryRubricSource, JsonRubricRepository, JsonlAssessmentLogger,
    SubmissionLoader, load_rubric_file,
};
use grader_presentation::{Cli, ConsoleFormatter, OutputFormatter, ProgressReporter, SimpleProgress};
use std::collections::HashMap;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("config error: {}", issue);
        }
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting rubric-grader");

    // CLI flags take precedence over configuration files
    let mut grading = config.grading.to_grading_config();
    if let Some(rubric_id) = &cli.default_rubric {
        grading.default_rubric = Some(rubric_id.clone());
    }
    grading.fail_fast |= cli.fail_fast;

    // === Dependency Injection ===
    if cli.rubric.is_empty() {
        let dir = cli.rubric_dir.clone().unwrap_or_else(|| config.rubrics.dir.clone());
        info!("Using rubric directory {}", dir.display());
        run(Arc::new(JsonRubricRepository::new(dir)), grading, &cli, &config)
    } else {
        let source = load_rubric_files(&cli.rubric)?;
        if grading.default_rubric.is_none() {
            grading.default_rubric = source.sole_rubric_id().map(str::to_string);
        }
        run(Arc::new(source), grading, &cli, &config)
    }
}

fn run<S: RubricSource + 'static>(
    source: Arc<S>,
    grading: GradingConfig,
    cli: &Cli,
    config: &FileConfig,
) -> Result<()> {
    if cli.check {
        return check_rubrics(source.as_ref());
    }

    if cli.submissions.is_empty() {
        bail!("At least one submission file is required (or use --check).");
    }

    // Load classification files; unreadable ones count as failures
    let loader = SubmissionLoader::new();
    let mut submissions: Vec<SubmissionClassification> = Vec::new();
    let mut load_failures = 0usize;
    for result in loader.load_all(&cli.submissions) {
        match result {
            Ok(submission) => submissions.push(submission),
            Err(e) => {
                let name = e.path().display().to_string();
                eprintln!("{}", ConsoleFormatter::format_failure(&name, &e));
                load_failures += 1;
            }
        }
    }
    if load_failures > 0 && grading.fail_fast {
        bail!("{} submission file(s) could not be loaded", load_failures);
    }

    let log_path = cli
        .assessment_log
        .as_ref()
        .or(config.logging.assessment_log.as_ref());
    let logger = assessment_logger(log_path)?;
    let use_case = ScoreBatchUseCase::new(source, &grading).with_logger(logger);

    let progress: Box<dyn ProgressNotifier> = if cli.quiet || !config.output.show_progress {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let outcome = use_case.execute_with_progress(&submissions, progress.as_ref());

    // Output results
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    if !outcome.assessments.is_empty() || format == OutputFormat::Json {
        println!("{}", ConsoleFormatter.render(format, &outcome.assessments));
    }

    for failure in &outcome.failures {
        eprintln!(
            "{}",
            ConsoleFormatter::format_failure(&failure.submission_id, &failure.error)
        );
    }

    let failed = outcome.failures.len() + load_failures;
    if !cli.quiet {
        eprintln!(
            "{}",
            ConsoleFormatter::format_batch_summary(
                outcome.assessments.len(),
                failed,
                outcome.skipped
            )
        );
    }

    if failed > 0 {
        bail!("{} submission(s) could not be scored", failed);
    }

    Ok(())
}

/// Load rubric files given on the command line; ids must be unique
fn load_rubric_files(paths: &[PathBuf]) -> Result<InMemoryRubricSource> {
    let mut source = InMemoryRubricSource::default();
    let mut origins: HashMap<String, &PathBuf> = HashMap::new();

    for path in paths {
        let rubric = load_rubric_file(path)
            .with_context(|| format!("Failed to load rubric {}", path.display()))?;
        let rubric_id = rubric.id().to_string();
        if !source.insert(rubric) {
            let first = origins.get(&rubric_id).map_or_else(String::new, |p| p.display().to_string());
            bail!(
                "Rubric id '{}' is declared by both {} and {}",
                rubric_id,
                first,
                path.display()
            );
        }
        info!("Loaded rubric '{}' from {}", rubric_id, path.display());
        origins.insert(rubric_id, path);
    }

    Ok(source)
}

/// Load and validate every rubric the source knows about
fn check_rubrics<S: RubricSource>(source: &S) -> Result<()> {
    let results = source.load_all();
    if results.is_empty() {
        bail!("No rubrics found");
    }

    let mut invalid = 0usize;
    for (id, result) in &results {
        match result {
            Ok(rubric) => println!(
                "ok    {}{} ({} criteria, {} points, {} bands)",
                id,
                rubric
                    .title()
                    .map(|title| format!(" \"{}\"", title))
                    .unwrap_or_default(),
                rubric.criteria().len(),
                rubric.total_points_possible(),
                rubric.bands().len()
            ),
            Err(e) => {
                println!("error {}", e);
                invalid += 1;
            }
        }
    }

    if invalid > 0 {
        bail!("{} of {} rubric(s) are invalid", invalid, results.len());
    }
    Ok(())
}

fn assessment_logger(path: Option<&PathBuf>) -> Result<Arc<dyn AssessmentLogger>> {
    let Some(path) = path else {
        return Ok(Arc::new(NoAssessmentLogger));
    };

    match JsonlAssessmentLogger::new(path) {
        Some(logger) => {
            info!("Logging assessments to {}", logger.path().display());
            Ok(Arc::new(logger))
        }
        None => bail!("Could not open assessment log {}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_rubric(dir: &TempDir, file: &str, id: &str) -> PathBuf {
        let path = dir.path().join(file);
        fs::write(&path, format!(r#"{{"id": "{}", "criteria": []}}"#, id)).unwrap();
        path
    }

    #[test]
    fn test_load_rubric_files_distinct_ids() {
        let dir = TempDir::new().unwrap();
        let paths = vec![
            write_rubric(&dir, "quiz.json", "quiz"),
            write_rubric(&dir, "lab.json", "lab"),
        ];

        let source = load_rubric_files(&paths).unwrap();
        assert_eq!(source.available(), vec!["lab", "quiz"]);
    }

    #[test]
    fn test_load_rubric_files_rejects_duplicate_id() {
        let dir = TempDir::new().unwrap();
        let first = write_rubric(&dir, "quiz.json", "quiz");
        let second = write_rubric(&dir, "quiz-copy.json", "quiz");

        let err = load_rubric_files(&[first.clone(), second.clone()]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Rubric id 'quiz' is declared by both"));
        assert!(message.contains(&first.display().to_string()));
        assert!(message.contains(&second.display().to_string()));
    }

    #[test]
    fn test_check_rubrics_reports_invalid() {
        let dir = TempDir::new().unwrap();
        write_rubric(&dir, "quiz.json", "quiz");
        fs::write(dir.path().join("broken.json"), "{").unwrap();

        let err = check_rubrics(&JsonRubricRepository::new(dir.path())).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 rubric(s) are invalid");
    }
}
