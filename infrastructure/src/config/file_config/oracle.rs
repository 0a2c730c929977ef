//! Oracle configuration from TOML (`[oracle]` section)

use super::{ConfigIssue, ConfigValidationError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use truthguard_domain::Model;
use url::Url;

/// OpenAI-compatible oracle settings
///
/// # Example
///
/// ```toml
/// [oracle]
/// model = "gpt-4o-mini"
/// vision_model = "gpt-4o"          # defaults to `model`
/// base_url = "https://api.openai.com/v1"
/// api_key_env = "OPENAI_API_KEY"
/// timeout_seconds = 60             # unset = no timeout
/// temperature = 0.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOracleConfig {
    /// Model for claim extraction, assessment, and article summaries
    pub model: String,
    /// Model for text extraction from images
    pub vision_model: Option<String>,
    /// Base URL of the chat completions API (Azure, proxies, local servers)
    pub base_url: String,
    /// Environment variable name for the API key
    pub api_key_env: String,
    /// Direct API key (not recommended, use env var instead)
    pub api_key: Option<String>,
    /// Per-request timeout
    pub timeout_seconds: Option<u64>,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for FileOracleConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            vision_model: None,
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            timeout_seconds: None,
            temperature: 0.0,
        }
    }
}

impl FileOracleConfig {
    pub fn parse_model(&self) -> Model {
        let Ok(model) = self.model.trim().parse::<Model>();
        model
    }

    /// Vision model, falling back to the reasoning model
    pub fn parse_vision_model(&self) -> Model {
        match self.vision_model.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => {
                let Ok(model) = name.parse::<Model>();
                model
            }
            _ => self.parse_model(),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds
            .filter(|s| *s > 0)
            .map(Duration::from_secs)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::error(ConfigValidationError::EmptyModelName {
                field: "oracle.model".to_string(),
            }));
        }
        if let Some(vision) = &self.vision_model
            && vision.trim().is_empty()
        {
            issues.push(ConfigIssue::warning(ConfigValidationError::EmptyModelName {
                field: "oracle.vision_model".to_string(),
            }));
        }
        if self.timeout_seconds == Some(0) {
            issues.push(ConfigIssue::error(ConfigValidationError::InvalidTimeout));
        }
        let base_url_ok = Url::parse(&self.base_url)
            .map(|u| matches!(u.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !base_url_ok {
            issues.push(ConfigIssue::error(ConfigValidationError::InvalidBaseUrl(
                self.base_url.clone(),
            )));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            issues.push(ConfigIssue::warning(
                ConfigValidationError::TemperatureOutOfRange(self.temperature),
            ));
        }

        issues
    }
}
