//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain/application types
//! at the edges.

mod logging;
mod oracle;
mod pipeline;

pub use logging::FileLoggingConfig;
pub use oracle::FileOracleConfig;
pub use pipeline::FilePipelineConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("{field}: model name cannot be empty")]
    EmptyModelName { field: String },

    #[error("oracle.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("oracle.base_url must be an http(s) URL, got '{0}'")]
    InvalidBaseUrl(String),

    #[error("oracle.temperature {0} is outside 0.0..=2.0")]
    TemperatureOutOfRange(f32),

    #[error("pipeline.max_concurrency = 0 disables the cap; omit it instead")]
    ZeroConcurrency,

    #[error("pipeline.allowed_source_domains contains an empty entry")]
    EmptySourceDomain,
}

/// How serious a configuration issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The configuration cannot work
    Error,
    /// The configuration works but probably not as intended
    Warning,
}

/// A detected configuration issue
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub error: ConfigValidationError,
}

impl ConfigIssue {
    pub fn error(error: ConfigValidationError) -> Self {
        Self {
            severity: Severity::Error,
            error,
        }
    }

    pub fn warning(error: ConfigValidationError) -> Self {
        Self {
            severity: Severity::Warning,
            error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Oracle endpoint and model selection
    pub oracle: FileOracleConfig,
    /// Fan-out and source policy
    pub pipeline: FilePipelineConfig,
    /// Structured event logging
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.oracle.validate();
        issues.extend(self.pipeline.validate());
        issues
    }

    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(ConfigIssue::is_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use truthguard_domain::Model;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[oracle]
model = "gpt-4.1-mini"
vision_model = "gpt-4o"
base_url = "http://localhost:11434/v1"
timeout_seconds = 30

[pipeline]
max_concurrency = 4
allowed_source_domains = ["nasa.gov", "who.int"]

[logging]
verification_log = "logs/verification.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.oracle.parse_model(), Model::Gpt41Mini);
        assert_eq!(config.oracle.parse_vision_model(), Model::Gpt4o);
        assert_eq!(config.oracle.base_url, "http://localhost:11434/v1");
        assert_eq!(config.oracle.timeout_seconds, Some(30));
        assert_eq!(config.pipeline.max_concurrency, Some(4));
        assert_eq!(config.pipeline.allowed_source_domains.len(), 2);
        assert_eq!(
            config.logging.verification_log,
            Some(PathBuf::from("logs/verification.jsonl"))
        );
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[pipeline]
max_concurrency = 2
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.pipeline.max_concurrency, Some(2));
        // Defaults should apply
        assert_eq!(config.oracle, FileOracleConfig::default());
        assert!(config.logging.verification_log.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_across_sections() {
        let toml_str = r#"
[oracle]
timeout_seconds = 0

[pipeline]
max_concurrency = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();

        assert_eq!(issues.len(), 2);
        assert!(FileConfig::has_errors(&issues));
        assert_eq!(issues[0].error, ConfigValidationError::InvalidTimeout);
        assert_eq!(issues[1].severity, Severity::Warning);
    }
}
