//! Prompt templates and output schemas for the oracle calls.
//!
//! - [`template::FactCheckPrompt`] — system and user prompts per task
//! - [`schema::OutputSchema`] — JSON Schema for each expected output shape

pub mod schema;
pub mod template;

pub use schema::OutputSchema;
pub use template::FactCheckPrompt;
