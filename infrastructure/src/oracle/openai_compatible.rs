//! OpenAI-compatible chat completions adapter
//!
//! Implements both [`ReasoningOracle`] and [`VisionOracle`] over
//! `POST {base_url}/chat/completions`. Works with OpenAI, Azure OpenAI,
//! and local servers that speak the same protocol.

use super::types::{ChatRequest, ChatResponseRaw, Message, ResponseFormat};
use crate::config::FileOracleConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info, warn};
use truthguard_application::ports::reasoning_oracle::{
    OracleError, OracleRequest, ReasoningOracle,
};
use truthguard_application::ports::vision_oracle::VisionOracle;
use truthguard_domain::{FactCheckPrompt, ImagePayload, Model, parse_json_object};

/// Reasoning and vision oracle backed by a chat completions API
#[derive(Clone)]
pub struct OpenAiCompatibleOracle {
    http_client: Client,
    api_key: String,
    base_url: String,
    model: Model,
    vision_model: Model,
    temperature: f32,
}

impl OpenAiCompatibleOracle {
    /// Create an oracle with default models and no request timeout
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: Model::default(),
            vision_model: Model::default(),
            temperature: 0.0,
        }
    }

    /// Build from the `[oracle]` config section, reading the API key from
    /// the configured environment variable.
    pub fn from_config(config: &FileOracleConfig) -> Result<Self, OracleError> {
        let api_key = resolve_api_key(config, |name| std::env::var(name).ok())?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| OracleError::NotConfigured(format!("HTTP client: {}", e)))?;

        let oracle = Self {
            http_client,
            ..Self::new(api_key, config.base_url.clone())
        }
        .with_model(config.parse_model())
        .with_vision_model(config.parse_vision_model())
        .with_temperature(config.temperature);

        info!(
            model = %oracle.model,
            vision_model = %oracle.vision_model,
            base_url = %oracle.base_url,
            "Oracle configured"
        );
        Ok(oracle)
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_vision_model(mut self, model: Model) -> Self {
        self.vision_model = model;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn structured_request(&self, request: &OracleRequest) -> ChatRequest {
        ChatRequest {
            model: self.model.to_string(),
            messages: vec![
                Message::system(request.system_prompt.clone()),
                Message::user(request.prompt.clone()),
            ],
            temperature: Some(self.temperature),
            response_format: Some(ResponseFormat::json_schema(
                request.task.as_str(),
                request.schema.clone(),
            )),
        }
    }

    fn vision_request(&self, image: &ImagePayload) -> ChatRequest {
        ChatRequest {
            model: self.vision_model.to_string(),
            messages: vec![
                Message::system(FactCheckPrompt::text_extraction_system()),
                Message::user_with_image(FactCheckPrompt::text_extraction(), image.data_uri()),
            ],
            temperature: Some(self.temperature),
            response_format: None,
        }
    }

    async fn send(&self, body: &ChatRequest) -> Result<ChatResponseRaw, OracleError> {
        let start = Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Oracle request failed");
                transport_error(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Oracle API error");
            return Err(OracleError::RequestFailed(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let raw: ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| OracleError::InvalidResponse(e.to_string()))?;

        debug!(
            model = %body.model,
            duration_ms = start.elapsed().as_millis(),
            "Chat completion"
        );
        Ok(raw)
    }
}

#[async_trait]
impl ReasoningOracle for OpenAiCompatibleOracle {
    async fn complete(&self, request: OracleRequest) -> Result<Option<Value>, OracleError> {
        debug!(task = %request.task, "Sending oracle request");
        let raw = self.send(&self.structured_request(&request)).await?;
        let answer = structured_answer(raw);
        if answer.is_none() {
            debug!(task = %request.task, "Oracle returned no usable JSON");
        }
        Ok(answer)
    }
}

#[async_trait]
impl VisionOracle for OpenAiCompatibleOracle {
    async fn extract_text(&self, image: &ImagePayload) -> Result<String, OracleError> {
        debug!(
            mime_type = image.mime_type(),
            bytes = image.encoded_len(),
            "Sending vision request"
        );
        let raw = self.send(&self.vision_request(image)).await?;
        Ok(raw.into_answer().unwrap_or_default())
    }
}

/// First JSON object in the answer, if any
fn structured_answer(raw: ChatResponseRaw) -> Option<Value> {
    raw.into_answer().and_then(|content| parse_json_object(&content))
}

fn resolve_api_key(
    config: &FileOracleConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, OracleError> {
    config
        .api_key
        .clone()
        .or_else(|| lookup(&config.api_key_env))
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            OracleError::NotConfigured(format!(
                "API key not found; set {} or oracle.api_key",
                config.api_key_env
            ))
        })
}

fn transport_error(e: reqwest::Error) -> OracleError {
    if e.is_timeout() {
        OracleError::Timeout
    } else if e.is_connect() {
        OracleError::Connection(e.to_string())
    } else {
        OracleError::RequestFailed(e.to_string())
    }
}
