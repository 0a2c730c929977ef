//! Vision oracle port
//!
//! Defines the interface for extracting text from an image.

use super::reasoning_oracle::OracleError;
use async_trait::async_trait;
use truthguard_domain::ImagePayload;

/// External OCR / vision capability
#[async_trait]
pub trait VisionOracle: Send + Sync {
    /// Extract all readable text from the image. May return an empty string.
    async fn extract_text(&self, image: &ImagePayload) -> Result<String, OracleError>;
}
