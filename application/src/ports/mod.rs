//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod progress;
pub mod reasoning_oracle;
pub mod verification_logger;
pub mod vision_oracle;
