//! Claim value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A single assertable statement extracted from source text (Value Object)
///
/// Always non-empty after trimming. The text is otherwise kept exactly as
/// the oracle returned it. Claims are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Claim {
    text: String,
}

impl Claim {
    /// Create a new claim
    ///
    /// # Panics
    /// Panics if the text is empty or only whitespace
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        let text = text.trim().to_string();
        assert!(!text.is_empty(), "Claim cannot be empty");
        Self { text }
    }

    /// Try to create a claim, rejecting empty or whitespace-only text
    pub fn try_new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text: String = text.into();
        let text = text.trim().to_string();
        if text.is_empty() {
            Err(DomainError::EmptyClaim)
        } else {
            Ok(Self { text })
        }
    }

    /// Get the claim text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Claim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl TryFrom<String> for Claim {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Claim> for String {
    fn from(claim: Claim) -> Self {
        claim.text
    }
}

impl AsRef<str> for Claim {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
