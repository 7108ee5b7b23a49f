//! Port for structured comparison logging.
//!
//! Defines the [`ComparisonLogger`] trait for recording dispatch events
//! (prompts sent, per-provider replies) to a structured transcript.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the
//! comparison transcript in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured comparison event for logging.
pub struct ComparisonEvent {
    /// Event type identifier (e.g., "prompt_dispatched", "provider_reply").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ComparisonEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Sink for comparison transcript events
///
/// Implementations must not fail loudly: a transcript that cannot be
/// written degrades to a warning, never to a failed dispatch.
pub trait ComparisonLogger: Send + Sync {
    fn log(&self, event: ComparisonEvent);
}

/// Logger that discards all events
pub struct NoopComparisonLogger;

impl ComparisonLogger for NoopComparisonLogger {
    fn log(&self, _event: ComparisonEvent) {}
}
