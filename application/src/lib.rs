//! Application layer for truthguard
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::PipelineParams;
pub use ports::{
    progress::{NoProgress, ProgressNotifier},
    reasoning_oracle::{OracleError, OracleRequest, OracleTask, ReasoningOracle},
    verification_logger::{NoVerificationLogger, VerificationEvent, VerificationLogger},
    vision_oracle::VisionOracle,
};
pub use use_cases::{
    assess_claim::ClaimAssessor,
    extract_claims::ClaimExtractor,
    fact_check::{FactCheckPipeline, PipelineError},
    normalize_text::TextNormalizer,
    verify_claims::VerificationOrchestrator,
};
