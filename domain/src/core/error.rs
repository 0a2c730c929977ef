//! Domain error types

use thiserror::Error;

/// Domain-level validation errors
///
/// These describe inputs that can never be processed, independent of
/// whether any oracle is reachable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Input text is empty")]
    EmptyText,

    #[error("Claim cannot be empty")]
    EmptyClaim,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid image payload: {0}")]
    InvalidImagePayload(String),
}

impl DomainError {
    /// Check if this error was caused by empty input
    pub fn is_empty_input(&self) -> bool {
        matches!(self, DomainError::EmptyText | DomainError::EmptyClaim)
    }
}
