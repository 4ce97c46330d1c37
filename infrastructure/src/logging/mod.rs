//! Logging infrastructure: structured assessment logging.
//!
//! Provides [`JsonlAssessmentLogger`], a JSONL file writer that implements
//! the [`AssessmentLogger`](grader_application::AssessmentLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlAssessmentLogger;
