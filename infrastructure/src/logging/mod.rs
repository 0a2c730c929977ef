//! Logging infrastructure: structured verification event logging.
//!
//! Provides [`JsonlVerificationLogger`], a JSONL file writer that implements
//! the [`VerificationLogger`](truthguard_application::VerificationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlVerificationLogger;
