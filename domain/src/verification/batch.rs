//! Verification batch results.
//!
//! A [`VerificationBatch`] is the full outcome of fanning out assessments:
//! the verdicts that completed (in claim order) plus an explicit record of
//! every claim whose assessment call failed at the transport level.
//! [`FactCheckResults`] is the minimal `{ results }` view derived from it.

use super::verdict::Verdict;
use serde::{Deserialize, Serialize};

/// A claim whose assessment call itself failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimFailure {
    /// Position of the claim in the dispatched sequence
    pub index: usize,
    /// The claim text
    pub claim: String,
    /// Failure description
    pub reason: String,
}

impl ClaimFailure {
    pub fn new(index: usize, claim: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            index,
            claim: claim.into(),
            reason: reason.into(),
        }
    }
}

/// Outcome of verifying a sequence of claims
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationBatch {
    /// Verdicts for completed claims, in original claim order
    pub verdicts: Vec<Verdict>,
    /// Claims dropped because their assessment call failed, in claim order
    #[serde(default)]
    pub failures: Vec<ClaimFailure>,
    /// Number of claims dispatched
    pub dispatched: usize,
}

impl VerificationBatch {
    /// A batch for zero claims
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(verdicts: Vec<Verdict>, failures: Vec<ClaimFailure>) -> Self {
        let dispatched = verdicts.len() + failures.len();
        Self {
            verdicts,
            failures,
            dispatched,
        }
    }

    /// Verdicts in claim order (the minimal result view)
    pub fn results(&self) -> &[Verdict] {
        &self.verdicts
    }

    /// Consume the batch, keeping only the verdicts
    pub fn into_results(self) -> Vec<Verdict> {
        self.verdicts
    }

    /// No claims were dispatched at all
    pub fn is_empty(&self) -> bool {
        self.dispatched == 0
    }

    /// Some, but not all, claims failed
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty() && !self.verdicts.is_empty()
    }

    /// Claims were dispatched and every one failed
    pub fn all_failed(&self) -> bool {
        self.dispatched > 0 && self.verdicts.is_empty()
    }

    /// Number of degraded (placeholder) verdicts
    pub fn degraded_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.is_degraded()).count()
    }
}

/// Result shape of the image and text pipelines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactCheckResults {
    pub results: Vec<Verdict>,
}

impl FactCheckResults {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl From<VerificationBatch> for FactCheckResults {
    fn from(batch: VerificationBatch) -> Self {
        Self {
            results: batch.into_results(),
        }
    }
}
