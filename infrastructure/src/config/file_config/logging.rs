//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Structured event log settings
///
/// ```toml
/// [logging]
/// verification_log = "truthguard-verification.jsonl"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file for dropped-claim and batch events (unset = disabled)
    pub verification_log: Option<PathBuf>,
}
