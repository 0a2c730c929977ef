//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod assess_claim;
pub mod extract_claims;
pub mod fact_check;
pub mod normalize_text;
pub mod verify_claims;
