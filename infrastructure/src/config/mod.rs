//! Configuration file loading for rubric-grader
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `GRADER_`-prefixed environment variables (`GRADER_GRADING__FAIL_FAST=true`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./grader.toml` or `./.grader.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/rubric-grader/config.toml`
//! 5. Fallback: `~/.config/rubric-grader/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGradingConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FileRubricsConfig,
};
pub use loader::ConfigLoader;
