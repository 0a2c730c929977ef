//! Fact-check pipeline use case
//!
//! Composes [`TextNormalizer`] → [`ClaimExtractor`] → [`VerificationOrchestrator`]
//! into the three entry points: URL summary, image, and text.

use crate::config::PipelineParams;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::reasoning_oracle::{OracleError, OracleRequest, OracleTask, ReasoningOracle};
use crate::ports::verification_logger::VerificationLogger;
use crate::ports::vision_oracle::VisionOracle;
use crate::use_cases::assess_claim::ClaimAssessor;
use crate::use_cases::extract_claims::ClaimExtractor;
use crate::use_cases::normalize_text::TextNormalizer;
use crate::use_cases::verify_claims::VerificationOrchestrator;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use truthguard_domain::{
    ArticleReport, DomainError, FactCheckPrompt, FactCheckResults, ImagePayload, NormalizedText,
    OutputSchema, SourcePolicy, Stage, TextSource, VerificationBatch,
};
use url::Url;

/// Errors that fail a request outright
///
/// Only failures before the fan-out appear here. Per-claim failures during
/// verification are absorbed into [`VerificationBatch::failures`].
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] DomainError),

    #[error("Text extraction failed: {0}")]
    Normalization(#[source] OracleError),

    #[error("Claim extraction failed: {0}")]
    Extraction(#[source] OracleError),

    #[error("Article summarization failed: {0}")]
    Summarization(#[source] OracleError),
}

impl PipelineError {
    /// The stage that failed
    pub fn stage(&self) -> Option<Stage> {
        match self {
            PipelineError::InvalidInput(_) => None,
            PipelineError::Normalization(_) => Some(Stage::Normalize),
            PipelineError::Extraction(_) => Some(Stage::Extract),
            PipelineError::Summarization(_) => Some(Stage::Summarize),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PipelineError::InvalidInput(_))
    }
}

/// The fact-check pipeline facade
///
/// Each entry point is a linear pipeline that short-circuits on no text or
/// no claims. There is no retry and no resumability.
pub struct FactCheckPipeline {
    oracle: Arc<dyn ReasoningOracle>,
    normalizer: TextNormalizer,
    extractor: ClaimExtractor,
    orchestrator: VerificationOrchestrator,
    source_policy: SourcePolicy,
}

impl FactCheckPipeline {
    pub fn new(
        oracle: Arc<dyn ReasoningOracle>,
        vision: Arc<dyn VisionOracle>,
        params: PipelineParams,
    ) -> Self {
        let assessor =
            ClaimAssessor::new(oracle.clone()).with_source_policy(params.source_policy.clone());
        Self {
            normalizer: TextNormalizer::new(vision),
            extractor: ClaimExtractor::new(oracle.clone()),
            orchestrator: VerificationOrchestrator::new(assessor)
                .with_max_concurrency(params.max_concurrency),
            source_policy: params.source_policy,
            oracle,
        }
    }

    /// Route dropped-claim and batch events to `logger`
    pub fn with_verification_logger(mut self, logger: Arc<dyn VerificationLogger>) -> Self {
        self.orchestrator = self.orchestrator.with_logger(logger);
        self
    }

    // ==================== URL ====================

    /// Summarize and fact-check an article in one oracle call
    pub async fn from_url(&self, url: &str) -> Result<ArticleReport, PipelineError> {
        self.from_url_with_progress(url, &NoProgress).await
    }

    pub async fn from_url_with_progress(
        &self,
        url: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<ArticleReport, PipelineError> {
        let url = validate_url(url)?;
        info!("Summarizing article {}", url);
        progress.on_stage_start(Stage::Summarize, 1);

        let request = OracleRequest::new(
            OracleTask::SummarizeArticle,
            FactCheckPrompt::article_system(),
            FactCheckPrompt::article(url.as_str()),
            OutputSchema::article_report(),
        );
        let output = self
            .oracle
            .complete(request)
            .await
            .map_err(PipelineError::Summarization)?;

        let report = match output.map(ArticleReport::from_oracle_output) {
            Some(Ok(parsed)) => {
                for rejected in &parsed.rejected {
                    warn!(
                        "Dropping fact-check {} from article report: {}",
                        rejected.index, rejected.reason
                    );
                }
                self.apply_source_policy(parsed.report.sanitized())
            }
            Some(Err(e)) => {
                warn!("Article report did not match schema ({}); returning empty report", e);
                ArticleReport::empty()
            }
            None => {
                warn!("No usable article report; returning empty report");
                ArticleReport::empty()
            }
        };

        progress.on_stage_complete(Stage::Summarize);
        info!(
            "Article report: {} key claims, {} fact-checks",
            report.key_claims.len(),
            report.fact_checks.len()
        );
        Ok(report)
    }

    // ==================== Image ====================

    /// Extract text from a data-URI image, then fact-check it
    pub async fn from_image(&self, data_uri: &str) -> Result<FactCheckResults, PipelineError> {
        self.from_image_with_progress(data_uri, &NoProgress).await
    }

    pub async fn from_image_with_progress(
        &self,
        data_uri: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<FactCheckResults, PipelineError> {
        Ok(self.check_image_with_progress(data_uri, progress).await?.into())
    }

    /// Like [`Self::from_image`], keeping the full batch
    pub async fn check_image(&self, data_uri: &str) -> Result<VerificationBatch, PipelineError> {
        self.check_image_with_progress(data_uri, &NoProgress).await
    }

    pub async fn check_image_with_progress(
        &self,
        data_uri: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<VerificationBatch, PipelineError> {
        let image = ImagePayload::parse(data_uri)?;
        self.check_source_with_progress(&TextSource::Image(image), progress)
            .await
    }

    // ==================== Text ====================

    /// Fact-check plain text
    pub async fn from_text(&self, text: &str) -> Result<FactCheckResults, PipelineError> {
        self.from_text_with_progress(text, &NoProgress).await
    }

    pub async fn from_text_with_progress(
        &self,
        text: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<FactCheckResults, PipelineError> {
        Ok(self.check_text_with_progress(text, progress).await?.into())
    }

    /// Like [`Self::from_text`], keeping the full batch
    pub async fn check_text(&self, text: &str) -> Result<VerificationBatch, PipelineError> {
        self.check_text_with_progress(text, &NoProgress).await
    }

    pub async fn check_text_with_progress(
        &self,
        text: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<VerificationBatch, PipelineError> {
        if text.trim().is_empty() {
            return Err(DomainError::EmptyText.into());
        }
        self.check_source_with_progress(&TextSource::text(text), progress)
            .await
    }

    // ==================== Decomposed pipeline ====================

    /// Run normalize → extract → verify and keep the full batch, failures included
    pub async fn check_source(
        &self,
        source: &TextSource,
    ) -> Result<VerificationBatch, PipelineError> {
        self.check_source_with_progress(source, &NoProgress).await
    }

    pub async fn check_source_with_progress(
        &self,
        source: &TextSource,
        progress: &dyn ProgressNotifier,
    ) -> Result<VerificationBatch, PipelineError> {
        let normalized = if source.is_image() {
            progress.on_stage_start(Stage::Normalize, 1);
            let normalized = self
                .normalizer
                .normalize(source)
                .await
                .map_err(PipelineError::Normalization)?;
            progress.on_stage_complete(Stage::Normalize);
            normalized
        } else {
            self.normalizer
                .normalize(source)
                .await
                .map_err(PipelineError::Normalization)?
        };

        let NormalizedText::Text(text) = normalized else {
            debug!("No text to fact-check");
            return Ok(VerificationBatch::empty());
        };

        progress.on_stage_start(Stage::Extract, 1);
        let claims = self
            .extractor
            .extract(&text)
            .await
            .map_err(PipelineError::Extraction)?;
        progress.on_stage_complete(Stage::Extract);

        if claims.is_empty() {
            info!("No claims extracted; nothing to verify");
            return Ok(VerificationBatch::empty());
        }

        Ok(self
            .orchestrator
            .verify_all_with_progress(&claims, progress)
            .await)
    }

    fn apply_source_policy(&self, mut report: ArticleReport) -> ArticleReport {
        for verdict in &mut report.fact_checks {
            verdict.source = verdict.source.take().map(|s| self.source_policy.apply(s));
        }
        report
    }
}

/// Accept only absolute http(s) URLs
fn validate_url(raw: &str) -> Result<Url, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidUrl("URL is empty".to_string()));
    }
    let url = Url::parse(trimmed).map_err(|e| DomainError::InvalidUrl(format!("{trimmed}: {e}")))?;
    if matches!(url.scheme(), "http" | "https") && url.host_str().is_some() {
        Ok(url)
    } else {
        Err(DomainError::InvalidUrl(format!(
            "{trimmed}: expected an http(s) URL"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        RecordingLogger, RecordingProgress, Reply, ScriptedOracle, ScriptedVision, assessment,
        transport_error,
    };
    use serde_json::json;
    use truthguard_domain::verification::source_policy::OMITTED_CITATION_SOURCE;

    const PNG: &str = "data:image/png;base64,iVBORw0KGgo=";

    fn pipeline(oracle: Arc<ScriptedOracle>, vision: Arc<ScriptedVision>) -> FactCheckPipeline {
        FactCheckPipeline::new(oracle, vision, PipelineParams::default())
    }

    fn no_vision() -> Arc<ScriptedVision> {
        Arc::new(ScriptedVision::text(""))
    }

    #[tokio::test]
    async fn test_text_pipeline_two_claims() {
        let oracle = Arc::new(
            ScriptedOracle::new()
                .on_claims(&["The sky is blue.", "The moon is made of cheese."])
                .on_claim("The sky is blue.", assessment(true, 0.99))
                .on_claim("The moon is made of cheese.", assessment(false, 0.95)),
        );

        let output = pipeline(oracle.clone(), no_vision())
            .from_text("The sky is blue. The moon is made of cheese.")
            .await
            .unwrap();

        assert_eq!(output.results.len(), 2);
        assert_eq!(output.results[0].claim, "The sky is blue.");
        assert_eq!(output.results[0].is_true, Some(true));
        assert_eq!(output.results[1].claim, "The moon is made of cheese.");
        assert_eq!(output.results[1].is_true, Some(false));
        assert_eq!(oracle.calls(OracleTask::ExtractClaims), 1);
        assert_eq!(oracle.calls(OracleTask::AssessClaim), 2);
    }

    #[tokio::test]
    async fn test_image_without_text_makes_no_reasoning_calls() {
        let oracle = Arc::new(ScriptedOracle::new().on_claims(&["should not be used"]));
        let vision = Arc::new(ScriptedVision::text("   "));

        let output = pipeline(oracle.clone(), vision.clone())
            .from_image(PNG)
            .await
            .unwrap();

        assert!(output.results.is_empty());
        assert_eq!(vision.calls(), 1);
        assert_eq!(oracle.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_middle_claim_transport_failure_is_dropped() {
        let oracle = Arc::new(
            ScriptedOracle::new()
                .on_claims(&["First claim.", "Second claim.", "Third claim."])
                .on_claim("First claim.", assessment(true, 0.9))
                .on_claim("Second claim.", transport_error())
                .on_claim("Third claim.", assessment(false, 0.8)),
        );
        let logger = Arc::new(RecordingLogger::default());

        let output = pipeline(oracle, no_vision())
            .with_verification_logger(logger.clone())
            .from_text("First. Second. Third.")
            .await
            .unwrap();

        let claims: Vec<_> = output.results.iter().map(|v| v.claim.as_str()).collect();
        assert_eq!(claims, vec!["First claim.", "Third claim."]);
        assert_eq!(logger.events_of("claim_dropped").len(), 1);
    }

    #[tokio::test]
    async fn test_check_source_exposes_failures() {
        let oracle = Arc::new(
            ScriptedOracle::new()
                .on_claims(&["Only claim."])
                .on_claim("Only claim.", transport_error()),
        );

        let batch = pipeline(oracle, no_vision())
            .check_source(&TextSource::text("Only claim."))
            .await
            .unwrap();

        assert!(batch.verdicts.is_empty());
        assert!(batch.all_failed());
        assert_eq!(batch.failures[0].claim, "Only claim.");
    }

    #[tokio::test]
    async fn test_check_text_keeps_dispatch_count() {
        let oracle = Arc::new(
            ScriptedOracle::new()
                .on_claims(&["Kept.", "Lost."])
                .on_claim("Kept.", assessment(true, 0.6))
                .on_claim("Lost.", transport_error()),
        );

        let batch = pipeline(oracle, no_vision())
            .check_text("Kept. Lost.")
            .await
            .unwrap();

        assert_eq!(batch.dispatched, 2);
        assert!(batch.is_partial());
        assert_eq!(batch.failures[0].index, 1);
    }

    #[tokio::test]
    async fn test_image_pipeline_runs_all_stages() {
        let oracle = Arc::new(
            ScriptedOracle::new()
                .on_claims(&["Drinking 8 glasses of water a day is required."])
                .on_claim(
                    "Drinking 8 glasses of water a day is required.",
                    assessment(false, 0.7),
                ),
        );
        let vision = Arc::new(ScriptedVision::text(
            "Drinking 8 glasses of water a day is required.",
        ));
        let progress = RecordingProgress::default();

        let output = pipeline(oracle, vision)
            .from_image_with_progress(PNG, &progress)
            .await
            .unwrap();

        assert_eq!(output.results.len(), 1);
        let stages: Vec<_> = progress.stages.lock().unwrap().iter().map(|s| s.0).collect();
        assert_eq!(stages, vec![Stage::Normalize, Stage::Extract, Stage::Verify]);
    }

    #[tokio::test]
    async fn test_no_claims_yields_empty_results() {
        let oracle = Arc::new(ScriptedOracle::new().on_claims(&[]));

        let output = pipeline(oracle.clone(), no_vision())
            .from_text("Hello, how are you?")
            .await
            .unwrap();

        assert!(output.results.is_empty());
        assert_eq!(oracle.calls(OracleTask::AssessClaim), 0);
    }

    #[tokio::test]
    async fn test_pre_fanout_failures_are_surfaced() {
        let oracle =
            Arc::new(ScriptedOracle::new().on_task(OracleTask::ExtractClaims, transport_error()));
        let err = pipeline(oracle, no_vision())
            .from_text("Something.")
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::Extraction(_)));
        assert_eq!(err.stage(), Some(Stage::Extract));

        let vision = Arc::new(ScriptedVision::failing(OracleError::Timeout));
        let err = pipeline(Arc::new(ScriptedOracle::new()), vision)
            .from_image(PNG)
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::Normalization(OracleError::Timeout)));
    }

    #[tokio::test]
    async fn test_invalid_inputs_rejected_before_oracle() {
        let oracle = Arc::new(ScriptedOracle::new());
        let p = pipeline(oracle.clone(), no_vision());

        assert!(p.from_text("   ").await.unwrap_err().is_invalid_input());
        assert!(p.from_image("not a data uri").await.unwrap_err().is_invalid_input());
        assert!(p.from_url("").await.unwrap_err().is_invalid_input());
        assert!(p.from_url("ftp://example.com/a").await.unwrap_err().is_invalid_input());
        assert!(p.from_url("example.com/article").await.unwrap_err().is_invalid_input());
        assert!(p.check_text("\n\t").await.unwrap_err().is_invalid_input());
        assert!(p.check_image("data:text/plain;base64,aGk=").await.unwrap_err().is_invalid_input());
        assert_eq!(oracle.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_url_report() {
        let oracle = Arc::new(ScriptedOracle::new().on_task(
            OracleTask::SummarizeArticle,
            Reply::Value(json!({
                "summary": "  The article discusses lunar geology.  ",
                "keyClaims": ["The moon has no atmosphere.", " "],
                "factChecks": [
                    {
                        "claim": "The moon has no atmosphere.",
                        "isTrue": false,
                        "confidenceScore": 1.7,
                        "source": "NASA"
                    },
                    { "claim": "", "isTrue": true }
                ]
            })),
        ));

        let report = pipeline(oracle.clone(), no_vision())
            .from_url("https://example.com/moon")
            .await
            .unwrap();

        assert_eq!(report.summary, "The article discusses lunar geology.");
        assert_eq!(report.key_claims, vec!["The moon has no atmosphere."]);
        assert_eq!(report.fact_checks.len(), 1);
        assert_eq!(report.fact_checks[0].confidence_score, Some(1.0));
        assert_eq!(oracle.total_calls(), 1);
        let request = oracle.last_request(OracleTask::SummarizeArticle).unwrap();
        assert!(request.prompt.contains("https://example.com/moon"));
    }

    #[tokio::test]
    async fn test_url_malformed_fact_check_keeps_summary() {
        let oracle = Arc::new(ScriptedOracle::new().on_task(
            OracleTask::SummarizeArticle,
            Reply::Value(json!({
                "summary": "Real summary",
                "keyClaims": ["A"],
                "factChecks": [
                    { "claim": "A", "isTrue": true },
                    { "isTrue": false, "confidenceScore": 0.5 }
                ]
            })),
        ));

        let report = pipeline(oracle, no_vision())
            .from_url("https://example.com/a")
            .await
            .unwrap();

        assert_eq!(report.summary, "Real summary");
        assert_eq!(report.key_claims, vec!["A"]);
        assert_eq!(report.fact_checks.len(), 1);
        assert_eq!(report.fact_checks[0].claim, "A");
        assert_eq!(report.fact_checks[0].is_true, Some(true));
    }

    #[tokio::test]
    async fn test_url_unusable_output_returns_empty_report() {
        for reply in [Reply::Nothing, Reply::Value(json!({ "summary": 12 }))] {
            let oracle =
                Arc::new(ScriptedOracle::new().on_task(OracleTask::SummarizeArticle, reply));
            let report = pipeline(oracle, no_vision())
                .from_url("https://example.com/a")
                .await
                .unwrap();
            assert!(report.is_empty());
        }
    }

    #[tokio::test]
    async fn test_url_transport_failure_is_surfaced() {
        let oracle = Arc::new(
            ScriptedOracle::new().on_task(OracleTask::SummarizeArticle, transport_error()),
        );
        let err = pipeline(oracle, no_vision())
            .from_url("https://example.com/a")
            .await
            .unwrap_err();
        assert_eq!(err.stage(), Some(Stage::Summarize));
    }

    #[tokio::test]
    async fn test_url_report_applies_source_policy() {
        let oracle = Arc::new(ScriptedOracle::new().on_task(
            OracleTask::SummarizeArticle,
            Reply::Value(json!({
                "summary": "S",
                "keyClaims": ["K"],
                "factChecks": [{ "claim": "K", "source": "https://invented.example/x" }]
            })),
        ));
        let params = PipelineParams::default()
            .with_source_policy(SourcePolicy::from_allowed_domains(vec!["nasa.gov".to_string()]));
        let p = FactCheckPipeline::new(oracle, no_vision(), params);

        let report = p.from_url("http://example.com/k").await.unwrap();

        assert_eq!(
            report.fact_checks[0].source.as_deref(),
            Some(OMITTED_CITATION_SOURCE)
        );
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://example.com/path?q=1").is_ok());
        assert!(validate_url("  http://example.com  ").is_ok());
        assert!(validate_url("mailto:someone@example.com").is_err());
        assert!(validate_url("https://").is_err());
    }
}
