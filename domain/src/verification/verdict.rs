//! Verdict and Assessment value objects.
//!
//! An [`Assessment`] is what the reasoning oracle returns for one claim (the
//! verdict minus the claim text). A [`Verdict`] re-attaches the claim and is
//! what the pipeline hands back to callers.

use super::claim::Claim;
use super::source_policy::SourcePolicy;
use serde::{Deserialize, Serialize};

/// Source sentinel for a degraded verdict
pub const DEGRADED_SOURCE: &str = "AI assessment failed or inconclusive.";

/// Reason sentinel for a degraded verdict
pub const DEGRADED_REASON: &str =
    "The AI could not provide a conclusive fact-check for this claim.";

/// The assessed outcome for one claim
///
/// Serialized with camelCase keys; absent optional fields are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// The claim as extracted (always present)
    pub claim: String,
    /// `Some(true)` / `Some(false)`, or `None` when genuinely uncertain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_true: Option<bool>,
    /// Confidence in [0, 1]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
    /// Description of the reasoning basis (not a fabricated citation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Short justification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Verdict {
    /// Synthesize the placeholder verdict used when the oracle answered
    /// but produced nothing usable.
    pub fn degraded(claim: &Claim) -> Self {
        Self {
            claim: claim.text().to_string(),
            is_true: None,
            confidence_score: Some(0.0),
            source: Some(DEGRADED_SOURCE.to_string()),
            reason: Some(DEGRADED_REASON.to_string()),
        }
    }

    /// Whether this verdict is the degraded placeholder
    pub fn is_degraded(&self) -> bool {
        self.is_true.is_none()
            && self.confidence_score == Some(0.0)
            && self.source.as_deref() == Some(DEGRADED_SOURCE)
    }
}

/// Structured oracle output for a single claim
///
/// Every field is optional: omission of `isTrue` is an intentional
/// "uncertain", not a missing value to be defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_true: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Assessment {
    /// An assessment that carries no information at all
    pub fn is_empty(&self) -> bool {
        self.is_true.is_none()
            && self.confidence_score.is_none()
            && non_blank(self.source.as_deref()).is_none()
            && non_blank(self.reason.as_deref()).is_none()
    }

    /// Attach the claim, clamping confidence into [0, 1], dropping blank
    /// strings, and applying the source policy.
    pub fn into_verdict(self, claim: &Claim, policy: &SourcePolicy) -> Verdict {
        let confidence_score = self
            .confidence_score
            .filter(|c| c.is_finite())
            .map(|c| c.clamp(0.0, 1.0));
        let source = non_blank(self.source.as_deref()).map(|s| policy.apply(s.to_string()));
        let reason = non_blank(self.reason.as_deref()).map(str::to_string);

        Verdict {
            claim: claim.text().to_string(),
            is_true: self.is_true,
            confidence_score,
            source,
            reason,
        }
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
