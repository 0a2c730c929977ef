//! Pipeline stages

use serde::{Deserialize, Serialize};

/// Stage of a fact-check pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Input normalization (identity for text, extraction for images)
    Normalize,
    /// Claim decomposition
    Extract,
    /// Per-claim assessment fan-out
    Verify,
    /// Combined summarize-and-check call for article URLs
    Summarize,
}

impl Stage {
    pub fn as_str(&self) -> &str {
        match self {
            Stage::Normalize => "normalize",
            Stage::Extract => "extract",
            Stage::Verify => "verify",
            Stage::Summarize => "summarize",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Stage::Normalize => "Text Normalization",
            Stage::Extract => "Claim Extraction",
            Stage::Verify => "Claim Verification",
            Stage::Summarize => "Article Summary",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
