//! Claim assessment use case
//!
//! Asks the [`ReasoningOracle`] for a verdict on one claim.

use crate::ports::reasoning_oracle::{OracleError, OracleRequest, OracleTask, ReasoningOracle};
use std::sync::Arc;
use tracing::{debug, warn};
use truthguard_domain::core::string::truncate;
use truthguard_domain::{Assessment, Claim, FactCheckPrompt, OutputSchema, SourcePolicy, Verdict};

/// Assesses a single claim.
///
/// Two failure modes are kept apart:
/// - the oracle answered but unhelpfully (null, `{}`, wrong shape): recovered
///   locally as [`Verdict::degraded`]
/// - the oracle could not be reached: returned as `Err` for the caller to handle
#[derive(Clone)]
pub struct ClaimAssessor {
    oracle: Arc<dyn ReasoningOracle>,
    source_policy: SourcePolicy,
}

impl ClaimAssessor {
    pub fn new(oracle: Arc<dyn ReasoningOracle>) -> Self {
        Self {
            oracle,
            source_policy: SourcePolicy::default(),
        }
    }

    pub fn with_source_policy(mut self, policy: SourcePolicy) -> Self {
        self.source_policy = policy;
        self
    }

    pub async fn assess(&self, claim: &Claim) -> Result<Verdict, OracleError> {
        let request = OracleRequest::new(
            OracleTask::AssessClaim,
            FactCheckPrompt::assessment_system(),
            FactCheckPrompt::assessment(claim.text()),
            OutputSchema::assessment(),
        );

        let output = self.oracle.complete(request).await?;

        let assessment = output
            .and_then(|value| match serde_json::from_value::<Assessment>(value) {
                Ok(assessment) => Some(assessment),
                Err(e) => {
                    debug!("Assessment output did not match schema: {}", e);
                    None
                }
            })
            .filter(|assessment| !assessment.is_empty());

        match assessment {
            Some(assessment) => Ok(assessment.into_verdict(claim, &self.source_policy)),
            None => {
                warn!(
                    "No usable assessment for claim '{}'; using degraded verdict",
                    truncate(claim.text(), 80)
                );
                Ok(Verdict::degraded(claim))
            }
        }
    }
}
