//! Pipeline configuration from TOML (`[pipeline]` section)

use super::{ConfigIssue, ConfigValidationError};
use serde::{Deserialize, Serialize};
use truthguard_application::PipelineParams;
use truthguard_domain::SourcePolicy;

/// Fan-out and verdict policy settings
///
/// # Example
///
/// ```toml
/// [pipeline]
/// max_concurrency = 8                      # unset = unbounded
/// allowed_source_domains = ["nasa.gov"]    # non-empty = allow-list policy
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePipelineConfig {
    /// Upper bound on simultaneous claim assessments
    pub max_concurrency: Option<usize>,
    /// Domains a verdict's source may cite
    pub allowed_source_domains: Vec<String>,
}

impl FilePipelineConfig {
    /// Convert to application-layer pipeline parameters
    pub fn to_pipeline_params(&self) -> PipelineParams {
        let params = PipelineParams::default().with_source_policy(
            SourcePolicy::from_allowed_domains(self.allowed_source_domains.clone()),
        );
        match self.max_concurrency {
            Some(max) => params.with_max_concurrency(max),
            None => params,
        }
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.max_concurrency == Some(0) {
            issues.push(ConfigIssue::warning(ConfigValidationError::ZeroConcurrency));
        }
        if self.allowed_source_domains.iter().any(|d| d.trim().is_empty()) {
            issues.push(ConfigIssue::warning(ConfigValidationError::EmptySourceDomain));
        }
        issues
    }
}
