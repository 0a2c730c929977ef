//! Fact-check vocabulary: claims, verdicts, and their aggregations.
//!
//! - [`claim::Claim`] — one extracted assertion
//! - [`verdict::Verdict`] / [`verdict::Assessment`] — assessed outcome for a claim
//! - [`batch::VerificationBatch`] — fan-out result with explicit failures
//! - [`report::ArticleReport`] — the all-in-one URL summarization result
//! - [`source_policy::SourcePolicy`] — what a verdict's `source` may contain
//! - [`stage::Stage`] — pipeline stages for progress and logs

pub mod batch;
pub mod claim;
pub mod report;
pub mod source_policy;
pub mod stage;
pub mod verdict;
