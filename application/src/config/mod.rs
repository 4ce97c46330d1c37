//! Application-level configuration.
//!
//! - [`GradingConfig`]: default rubric and batch failure policy

pub mod grading_config;

pub use grading_config::GradingConfig;
