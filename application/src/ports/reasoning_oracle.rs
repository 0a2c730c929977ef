//! Reasoning oracle port
//!
//! Defines the interface for the external language-model capability that
//! extracts claims, assesses them, and summarizes articles.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while reaching an oracle
///
/// These are transport-level failures: the oracle could not be reached or
/// its response could not be read. An oracle that answered but produced
/// nothing usable is not an error (see [`ReasoningOracle::complete`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Oracle not configured: {0}")]
    NotConfigured(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Which pipeline task an oracle request serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OracleTask {
    ExtractClaims,
    AssessClaim,
    SummarizeArticle,
}

impl OracleTask {
    pub fn as_str(&self) -> &str {
        match self {
            OracleTask::ExtractClaims => "extract_claims",
            OracleTask::AssessClaim => "assess_claim",
            OracleTask::SummarizeArticle => "summarize_article",
        }
    }
}

impl std::fmt::Display for OracleTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A natural-language instruction plus the expected output shape
#[derive(Debug, Clone)]
pub struct OracleRequest {
    pub task: OracleTask,
    pub system_prompt: String,
    pub prompt: String,
    /// JSON Schema the structured result should conform to
    pub schema: Value,
}

impl OracleRequest {
    pub fn new(
        task: OracleTask,
        system_prompt: impl Into<String>,
        prompt: impl Into<String>,
        schema: Value,
    ) -> Self {
        Self {
            task,
            system_prompt: system_prompt.into(),
            prompt: prompt.into(),
            schema,
        }
    }
}

/// External reasoning capability
///
/// Implementations (adapters) live in the infrastructure layer; tests
/// substitute deterministic stubs.
#[async_trait]
pub trait ReasoningOracle: Send + Sync {
    /// Run one request.
    ///
    /// - `Ok(Some(value))`: a structured result (not yet validated against the schema)
    /// - `Ok(None)`: the oracle answered but gave nothing usable (empty, refusal,
    ///   unparsable). Policy refusals land here too.
    /// - `Err(_)`: the call itself failed
    async fn complete(&self, request: OracleRequest) -> Result<Option<Value>, OracleError>;
}
