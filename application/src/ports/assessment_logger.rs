//! Port for structured assessment logging.
//!
//! Defines the [`AssessmentLogger`] trait for recording scoring outcomes
//! (completed assessments and failures) to a machine-readable audit log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures every score that was
//! issued, with the classification that produced it.

use serde_json::Value;

/// A structured assessment event for logging.
pub struct AssessmentEvent {
    /// Event type identifier (e.g., "assessment_completed", "assessment_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AssessmentEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging assessment events.
///
/// `log` is synchronous and non-fallible; a failing audit log must never
/// change a score or abort a batch.
pub trait AssessmentLogger: Send + Sync {
    fn log(&self, event: AssessmentEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoAssessmentLogger;

impl AssessmentLogger for NoAssessmentLogger {
    fn log(&self, _event: AssessmentEvent) {}
}
