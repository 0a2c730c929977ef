//! Pipeline inputs and their normalized text form.
//!
//! - [`TextSource`] — what a caller hands the pipeline (text or an image)
//! - [`NormalizedText`] — plain text ready for claim extraction, or an
//!   explicit "no text" marker when an image contained none

pub mod image;

use self::image::ImagePayload;
use serde::{Deserialize, Serialize};

/// Raw input to be normalized into text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TextSource {
    /// Plain text; normalization is the identity
    Text(String),
    /// Encoded image; normalization runs text extraction
    Image(ImagePayload),
}

impl TextSource {
    pub fn text(text: impl Into<String>) -> Self {
        TextSource::Text(text.into())
    }

    pub fn image(payload: ImagePayload) -> Self {
        TextSource::Image(payload)
    }

    pub fn is_image(&self) -> bool {
        matches!(self, TextSource::Image(_))
    }
}

/// Result of normalizing a [`TextSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedText {
    /// Text to extract claims from
    Text(String),
    /// Extraction produced nothing; downstream stages are skipped
    NoText,
}

impl NormalizedText {
    /// Wrap text returned by an extraction capability.
    ///
    /// Empty or whitespace-only text becomes [`NormalizedText::NoText`].
    pub fn from_extracted(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            NormalizedText::NoText
        } else {
            NormalizedText::Text(text)
        }
    }

    /// The text, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            NormalizedText::Text(t) => Some(t),
            NormalizedText::NoText => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, NormalizedText::NoText)
    }
}
