//! Domain layer for truthguard
//!
//! This crate contains the core fact-checking vocabulary: claims, verdicts,
//! verification batches, and the prompts/schemas that define the contract
//! with the external reasoning oracle. It has no I/O and no async runtime.
//!
//! # Core Concepts
//!
//! ## Claim
//!
//! A single assertable statement extracted from source text. Claims in one
//! batch are independent; their only ordering is extraction order.
//!
//! ## Verdict
//!
//! The assessed outcome for one claim: tri-state truth value, confidence,
//! reasoning basis, and justification. When the oracle answers but gives
//! nothing usable, a *degraded* verdict stands in so the claim is never lost.
//!
//! ## Verification batch
//!
//! The result of fanning out assessments over a set of claims. Verdicts keep
//! claim order; transport failures are recorded separately as
//! [`ClaimFailure`]s rather than failing the batch.

pub mod core;
pub mod input;
pub mod parsing;
pub mod prompt;
pub mod verification;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model};
pub use input::{NormalizedText, TextSource, image::ImagePayload};
pub use parsing::parse_json_object;
pub use prompt::{FactCheckPrompt, OutputSchema};
pub use verification::{
    batch::{ClaimFailure, FactCheckResults, VerificationBatch},
    claim::Claim,
    report::{ArticleReport, ParsedArticleReport, RejectedFactCheck},
    source_policy::SourcePolicy,
    stage::Stage,
    verdict::{Assessment, Verdict},
};
