//! Port for structured verification event logging.
//!
//! Defines the [`VerificationLogger`] trait for recording pipeline events
//! (dropped claims, degraded verdicts, batch summaries) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port is the machine-readable
//! record of what the fan-out dropped and why.

use serde_json::Value;

/// A structured verification event.
///
/// Each event has a type string and a JSON payload with event-specific
/// fields. Adapters add the timestamp.
pub struct VerificationEvent {
    /// Event type identifier: "claim_dropped", "claim_degraded", or "batch_settled".
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl VerificationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging verification events.
///
/// `log` is synchronous and infallible so logging never disturbs the
/// pipeline; adapters swallow their own write errors.
pub trait VerificationLogger: Send + Sync {
    /// Record an event.
    fn log(&self, event: VerificationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoVerificationLogger;

impl VerificationLogger for NoVerificationLogger {
    fn log(&self, _event: VerificationEvent) {}
}
