//! Image payload value object (mime-typed, base64 data URI).

use crate::core::error::DomainError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// An encoded image in the form `data:<mimetype>;base64,<encoded_data>`
///
/// Only `image/*` MIME types are accepted, and the body must decode as
/// standard base64. The original data URI is kept so adapters can forward
/// it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImagePayload {
    data_uri: String,
    mime_type: String,
}

impl ImagePayload {
    /// Parse and validate a data URI
    pub fn parse(data_uri: impl Into<String>) -> Result<Self, DomainError> {
        let data_uri = data_uri.into();
        let trimmed = data_uri.trim();

        let rest = trimmed
            .strip_prefix("data:")
            .ok_or_else(|| invalid("expected a 'data:' URI"))?;
        let (header, body) = rest
            .split_once(',')
            .ok_or_else(|| invalid("missing ',' between header and data"))?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| invalid("only base64-encoded payloads are supported"))?;

        if !mime_type.starts_with("image/") || mime_type.len() == "image/".len() {
            return Err(invalid(&format!("unsupported MIME type '{}'", mime_type)));
        }
        if body.is_empty() {
            return Err(invalid("image data is empty"));
        }
        STANDARD
            .decode(body)
            .map_err(|e| invalid(&format!("data is not valid base64: {}", e)))?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            data_uri: trimmed.to_string(),
        })
    }

    /// The full data URI
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }

    /// The declared MIME type (e.g. `image/png`)
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Size of the encoded body in bytes
    pub fn encoded_len(&self) -> usize {
        self.data_uri
            .split_once(',')
            .map(|(_, body)| body.len())
            .unwrap_or(0)
    }
}

fn invalid(reason: &str) -> DomainError {
    DomainError::InvalidImagePayload(reason.to_string())
}

impl TryFrom<String> for ImagePayload {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ImagePayload> for String {
    fn from(payload: ImagePayload) -> Self {
        payload.data_uri
    }
}

impl std::fmt::Display for ImagePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} image ({} bytes encoded)", self.mime_type, self.encoded_len())
    }
}
