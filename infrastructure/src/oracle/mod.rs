//! Oracle adapters
//!
//! [`OpenAiCompatibleOracle`] implements both the reasoning and vision
//! ports over a chat completions API.

mod openai_compatible;
mod types;

pub use openai_compatible::OpenAiCompatibleOracle;
