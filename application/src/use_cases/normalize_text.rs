//! Text normalization use case
//!
//! Turns a [`TextSource`] into plain text: identity for text, extraction
//! through the [`VisionOracle`] for images.

use crate::ports::reasoning_oracle::OracleError;
use crate::ports::vision_oracle::VisionOracle;
use std::sync::Arc;
use tracing::{debug, info};
use truthguard_domain::{NormalizedText, TextSource};

/// Normalizes raw input into text for claim extraction.
///
/// No retries at this layer: a vision transport failure is returned to the
/// caller as-is.
#[derive(Clone)]
pub struct TextNormalizer {
    vision: Arc<dyn VisionOracle>,
}

impl TextNormalizer {
    pub fn new(vision: Arc<dyn VisionOracle>) -> Self {
        Self { vision }
    }

    pub async fn normalize(&self, source: &TextSource) -> Result<NormalizedText, OracleError> {
        match source {
            TextSource::Text(text) => Ok(NormalizedText::Text(text.clone())),
            TextSource::Image(image) => {
                debug!("Extracting text from {}", image);
                let extracted = self.vision.extract_text(image).await?;
                let normalized = NormalizedText::from_extracted(extracted);
                match &normalized {
                    NormalizedText::Text(text) => {
                        info!("Extracted {} characters of text from image", text.chars().count())
                    }
                    NormalizedText::NoText => info!("No text found in image"),
                }
                Ok(normalized)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedVision;
    use truthguard_domain::ImagePayload;

    fn image() -> TextSource {
        TextSource::image(ImagePayload::parse("data:image/png;base64,iVBORw0KGgo=").unwrap())
    }

    #[tokio::test]
    async fn test_text_is_identity_without_vision_call() {
        let vision = Arc::new(ScriptedVision::text("unused"));
        let normalizer = TextNormalizer::new(vision.clone());

        let normalized = normalizer
            .normalize(&TextSource::text("The sky is blue."))
            .await
            .unwrap();

        assert_eq!(normalized, NormalizedText::Text("The sky is blue.".to_string()));
        assert_eq!(vision.calls(), 0);
    }

    #[tokio::test]
    async fn test_image_text_is_extracted() {
        let vision = Arc::new(ScriptedVision::text("Drink 8 glasses of water a day."));
        let normalizer = TextNormalizer::new(vision.clone());

        let normalized = normalizer.normalize(&image()).await.unwrap();

        assert_eq!(normalized.as_text(), Some("Drink 8 glasses of water a day."));
        assert_eq!(vision.calls(), 1);
    }

    #[tokio::test]
    async fn test_blank_image_text_is_no_text() {
        let normalizer = TextNormalizer::new(Arc::new(ScriptedVision::text("  \n ")));
        let normalized = normalizer.normalize(&image()).await.unwrap();
        assert_eq!(normalized, NormalizedText::NoText);
    }

    #[tokio::test]
    async fn test_vision_failure_propagates() {
        let normalizer = TextNormalizer::new(Arc::new(ScriptedVision::failing(
            OracleError::Timeout,
        )));
        let err = normalizer.normalize(&image()).await.unwrap_err();
        assert_eq!(err, OracleError::Timeout);
    }
}
