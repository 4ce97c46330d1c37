//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for assessment results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Per-criterion breakdown with totals, band and feedback
    Full,
    /// One line per submission
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for grader_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => grader_domain::OutputFormat::Full,
            OutputFormat::Summary => grader_domain::OutputFormat::Summary,
            OutputFormat::Json => grader_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for rubric-grader
#[derive(Parser, Debug)]
#[command(name = "rubric-grader")]
#[command(author, version, about = "Deterministic rubric scoring for classified submissions")]
#[command(long_about = r#"
rubric-grader turns classifier output into exact, reproducible grades.

A classifier (usually an LLM) judges each criterion of a submission: it picks a
performance level or counts major and minor errors. rubric-grader applies the
rubric's point rules, totals the points, and assigns the overall band.

Rubrics are JSON files, looked up as <rubric-dir>/<rubric_id>.json, or given
directly with --rubric. Submission files hold the classifier's JSON, either bare
or inside a fenced ```json block of the raw response.

Configuration files are loaded from (in priority order):
1. GRADER_* environment variables   e.g. GRADER_GRADING__FAIL_FAST=true
2. --config <path>                   Explicit config file
3. ./grader.toml                     Project-level config
4. ~/.config/rubric-grader/config.toml   Global config

Example:
  rubric-grader --rubric rubrics/essay.json submissions/*.json
  rubric-grader --rubric-dir rubrics --default-rubric essay -o summary alice.json
  rubric-grader --rubric-dir rubrics --check
"#)]
pub struct Cli {
    /// Classification files to score (not required with --check)
    #[arg(value_name = "SUBMISSION")]
    pub submissions: Vec<PathBuf>,

    /// Rubric file to score against (can be specified multiple times)
    #[arg(short, long, value_name = "FILE")]
    pub rubric: Vec<PathBuf>,

    /// Directory of <rubric_id>.json files
    #[arg(long, value_name = "DIR")]
    pub rubric_dir: Option<PathBuf>,

    /// Rubric used for submissions that do not name one
    #[arg(short, long, value_name = "ID")]
    pub default_rubric: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Stop at the first submission that fails to score
    #[arg(long)]
    pub fail_fast: bool,

    /// Validate the rubric(s) and exit
    #[arg(long)]
    pub check: bool,

    /// Append every assessment to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub assessment_log: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
