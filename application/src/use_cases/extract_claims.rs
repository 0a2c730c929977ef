//! Claim extraction use case
//!
//! Decomposes normalized text into an ordered list of independently
//! checkable claims via the [`ReasoningOracle`].

use crate::ports::reasoning_oracle::{OracleError, OracleRequest, OracleTask, ReasoningOracle};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};
use truthguard_domain::core::string::truncate;
use truthguard_domain::{Claim, FactCheckPrompt, OutputSchema};

/// Extracts claims from text.
///
/// The oracle's output is validated here rather than trusted: blank
/// entries and non-string entries are dropped, and an unusable answer is
/// an empty list. Extraction order is preserved; no deduplication.
#[derive(Clone)]
pub struct ClaimExtractor {
    oracle: Arc<dyn ReasoningOracle>,
}

impl ClaimExtractor {
    pub fn new(oracle: Arc<dyn ReasoningOracle>) -> Self {
        Self { oracle }
    }

    /// Extract claims from `text`.
    ///
    /// Blank text returns an empty list without calling the oracle.
    /// Transport failures propagate.
    pub async fn extract(&self, text: &str) -> Result<Vec<Claim>, OracleError> {
        if text.trim().is_empty() {
            debug!("Skipping claim extraction for blank text");
            return Ok(Vec::new());
        }

        debug!("Extracting claims from: {}", truncate(text, 120));

        let request = OracleRequest::new(
            OracleTask::ExtractClaims,
            FactCheckPrompt::claim_extraction_system(),
            FactCheckPrompt::claim_extraction(text),
            OutputSchema::claims(),
        );

        let Some(output) = self.oracle.complete(request).await? else {
            warn!("Claim extraction returned no usable output; treating as no claims");
            return Ok(Vec::new());
        };

        let claims = parse_claims(&output);
        info!("Extracted {} claims", claims.len());
        Ok(claims)
    }
}

/// Read `{ "claims": [...] }`, keeping non-blank strings in order.
fn parse_claims(output: &Value) -> Vec<Claim> {
    let Some(entries) = output.get("claims").and_then(Value::as_array) else {
        warn!("Claim extraction output has no 'claims' array");
        return Vec::new();
    };

    let claims: Vec<Claim> = entries
        .iter()
        .filter_map(Value::as_str)
        .filter_map(|s| Claim::try_new(s).ok())
        .collect();

    if claims.len() < entries.len() {
        debug!(
            "Dropped {} blank or malformed claim entries",
            entries.len() - claims.len()
        );
    }
    claims
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Reply, ScriptedOracle, transport_error};
    use serde_json::json;

    #[tokio::test]
    async fn test_extracts_claims_in_order() {
        let oracle = Arc::new(
            ScriptedOracle::new().on_claims(&["The sky is blue.", "The moon is made of cheese."]),
        );
        let extractor = ClaimExtractor::new(oracle.clone());

        let claims = extractor
            .extract("The sky is blue. The moon is made of cheese.")
            .await
            .unwrap();

        assert_eq!(
            claims,
            vec![
                Claim::new("The sky is blue."),
                Claim::new("The moon is made of cheese.")
            ]
        );
        let request = oracle.last_request(OracleTask::ExtractClaims).unwrap();
        assert!(request.prompt.contains("The moon is made of cheese."));
    }

    #[tokio::test]
    async fn test_blank_text_makes_no_oracle_call() {
        let oracle = Arc::new(ScriptedOracle::new().on_claims(&["never returned"]));
        let extractor = ClaimExtractor::new(oracle.clone());

        assert!(extractor.extract("").await.unwrap().is_empty());
        assert!(extractor.extract("  \n\t").await.unwrap().is_empty());
        assert_eq!(oracle.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_filters_blank_and_non_string_claims() {
        let oracle = Arc::new(ScriptedOracle::new().on_task(
            OracleTask::ExtractClaims,
            Reply::Value(json!({
                "claims": ["  ", "Paris is in France.", 42, "", "Rust is memory safe."]
            })),
        ));
        let extractor = ClaimExtractor::new(oracle);

        let claims = extractor.extract("Some text").await.unwrap();

        assert_eq!(
            claims,
            vec![Claim::new("Paris is in France."), Claim::new("Rust is memory safe.")]
        );
    }

    #[tokio::test]
    async fn test_duplicates_are_kept() {
        let oracle = Arc::new(ScriptedOracle::new().on_claims(&["A.", "A."]));
        let claims = ClaimExtractor::new(oracle).extract("A. A.").await.unwrap();
        assert_eq!(claims.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_list_is_not_an_error() {
        let oracle = Arc::new(ScriptedOracle::new().on_claims(&[]));
        let claims = ClaimExtractor::new(oracle).extract("Hello!").await.unwrap();
        assert!(claims.is_empty());
    }

    #[tokio::test]
    async fn test_no_usable_output_is_empty() {
        let oracle =
            Arc::new(ScriptedOracle::new().on_task(OracleTask::ExtractClaims, Reply::Nothing));
        let claims = ClaimExtractor::new(oracle.clone()).extract("Text").await.unwrap();
        assert!(claims.is_empty());

        let oracle = Arc::new(
            ScriptedOracle::new()
                .on_task(OracleTask::ExtractClaims, Reply::Value(json!({ "items": ["x"] }))),
        );
        let claims = ClaimExtractor::new(oracle).extract("Text").await.unwrap();
        assert!(claims.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let oracle =
            Arc::new(ScriptedOracle::new().on_task(OracleTask::ExtractClaims, transport_error()));
        let result = ClaimExtractor::new(oracle).extract("Text").await;
        assert!(matches!(result, Err(OracleError::Connection(_))));
    }
}
