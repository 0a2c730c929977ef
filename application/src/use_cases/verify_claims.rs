//! Verification fan-out use case
//!
//! Dispatches one assessment per claim concurrently, waits for every one to
//! settle, and aggregates the survivors in claim order.

use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::verification_logger::{
    NoVerificationLogger, VerificationEvent, VerificationLogger,
};
use crate::use_cases::assess_claim::ClaimAssessor;
use futures::future::join_all;
use serde_json::json;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};
use truthguard_domain::{Claim, ClaimFailure, Stage, VerificationBatch};

/// Settle-all orchestration over [`ClaimAssessor`].
///
/// A transport failure on one claim never cancels the others: it is logged,
/// recorded as a [`ClaimFailure`], and left out of the verdicts. The batch
/// itself never fails.
pub struct VerificationOrchestrator {
    assessor: ClaimAssessor,
    max_concurrency: Option<NonZeroUsize>,
    logger: Arc<dyn VerificationLogger>,
}

impl VerificationOrchestrator {
    pub fn new(assessor: ClaimAssessor) -> Self {
        Self {
            assessor,
            max_concurrency: None,
            logger: Arc::new(NoVerificationLogger),
        }
    }

    pub fn with_max_concurrency(mut self, max: Option<NonZeroUsize>) -> Self {
        self.max_concurrency = max;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn VerificationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub async fn verify_all(&self, claims: &[Claim]) -> VerificationBatch {
        self.verify_all_with_progress(claims, &NoProgress).await
    }

    pub async fn verify_all_with_progress(
        &self,
        claims: &[Claim],
        progress: &dyn ProgressNotifier,
    ) -> VerificationBatch {
        if claims.is_empty() {
            debug!("No claims to verify");
            return VerificationBatch::empty();
        }

        info!(
            "Verifying {} claims (max in flight: {})",
            claims.len(),
            self.max_concurrency
                .map_or_else(|| "unbounded".to_string(), |n| n.to_string())
        );
        progress.on_stage_start(Stage::Verify, claims.len());

        let semaphore = self.max_concurrency.map(|n| Semaphore::new(n.get()));

        let futures: Vec<_> = claims
            .iter()
            .enumerate()
            .map(|(index, claim)| {
                let semaphore = semaphore.as_ref();
                async move {
                    let _permit = match semaphore {
                        Some(s) => s.acquire().await.ok(),
                        None => None,
                    };
                    let result = self.assessor.assess(claim).await;
                    progress.on_claim_complete(index, claim, result.is_ok());
                    result
                }
            })
            .collect();

        let outcomes = join_all(futures).await;

        let mut verdicts = Vec::with_capacity(claims.len());
        let mut failures = Vec::new();
        for (index, (outcome, claim)) in outcomes.into_iter().zip(claims.iter()).enumerate() {
            match outcome {
                Ok(verdict) => {
                    if verdict.is_degraded() {
                        self.logger.log(VerificationEvent::new(
                            "claim_degraded",
                            json!({ "index": index, "claim": claim.text() }),
                        ));
                    }
                    verdicts.push(verdict);
                }
                Err(e) => {
                    warn!("Dropping claim {} '{}': {}", index, claim, e);
                    self.logger.log(VerificationEvent::new(
                        "claim_dropped",
                        json!({
                            "index": index,
                            "claim": claim.text(),
                            "reason": e.to_string(),
                        }),
                    ));
                    failures.push(ClaimFailure::new(index, claim.text(), e.to_string()));
                }
            }
        }

        let batch = VerificationBatch::new(verdicts, failures);
        info!(
            "Verification settled: {} verdicts ({} degraded), {} dropped",
            batch.verdicts.len(),
            batch.degraded_count(),
            batch.failures.len()
        );
        self.logger.log(VerificationEvent::new(
            "batch_settled",
            json!({
                "dispatched": batch.dispatched,
                "verdicts": batch.verdicts.len(),
                "degraded": batch.degraded_count(),
                "failures": batch.failures.len(),
            }),
        ));
        progress.on_stage_complete(Stage::Verify);

        batch
    }
}
