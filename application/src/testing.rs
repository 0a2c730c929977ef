//! Deterministic oracle stubs shared by the use case tests.

use crate::ports::progress::ProgressNotifier;
use crate::ports::reasoning_oracle::{OracleError, OracleRequest, OracleTask, ReasoningOracle};
use crate::ports::verification_logger::{VerificationEvent, VerificationLogger};
use crate::ports::vision_oracle::VisionOracle;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use truthguard_domain::{Claim, ImagePayload, Stage};

/// A scripted oracle response
#[derive(Clone)]
pub enum Reply {
    Value(Value),
    Nothing,
    Fail(OracleError),
}

impl Reply {
    fn into_result(self) -> Result<Option<Value>, OracleError> {
        match self {
            Reply::Value(v) => Ok(Some(v)),
            Reply::Nothing => Ok(None),
            Reply::Fail(e) => Err(e),
        }
    }
}

/// Reasoning oracle scripted per task and per claim text.
///
/// Assessment requests are routed by the quoted claim in the prompt;
/// anything unscripted gets the task default, or `Ok(None)`.
#[derive(Default)]
pub struct ScriptedOracle {
    task_replies: HashMap<OracleTask, Reply>,
    claim_replies: Vec<(String, Reply, Duration)>,
    requests: Mutex<Vec<OracleRequest>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_task(mut self, task: OracleTask, reply: Reply) -> Self {
        self.task_replies.insert(task, reply);
        self
    }

    pub fn on_claims(self, claims: &[&str]) -> Self {
        let claims: Vec<Value> = claims.iter().map(|c| Value::from(*c)).collect();
        self.on_task(
            OracleTask::ExtractClaims,
            Reply::Value(serde_json::json!({ "claims": claims })),
        )
    }

    pub fn on_claim(self, claim: &str, reply: Reply) -> Self {
        self.on_claim_after(claim, reply, Duration::ZERO)
    }

    /// Reply to an assessment after `delay`, to force out-of-order completion.
    pub fn on_claim_after(mut self, claim: &str, reply: Reply, delay: Duration) -> Self {
        self.claim_replies.push((format!("\"{}\"", claim), reply, delay));
        self
    }

    pub fn calls(&self, task: OracleTask) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.task == task)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self, task: OracleTask) -> Option<OracleRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|r| r.task == task)
            .cloned()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReasoningOracle for ScriptedOracle {
    async fn complete(&self, request: OracleRequest) -> Result<Option<Value>, OracleError> {
        let scripted = if request.task == OracleTask::AssessClaim {
            self.claim_replies
                .iter()
                .find(|(needle, _, _)| request.prompt.contains(needle.as_str()))
                .map(|(_, reply, delay)| (reply.clone(), *delay))
        } else {
            None
        };
        let (reply, delay) = scripted.unwrap_or_else(|| {
            let reply = self
                .task_replies
                .get(&request.task)
                .cloned()
                .unwrap_or(Reply::Nothing);
            (reply, Duration::ZERO)
        });

        self.requests.lock().unwrap().push(request);

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        // Always yield so concurrently dispatched calls overlap
        tokio::time::sleep(delay.max(Duration::from_millis(1))).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        reply.into_result()
    }
}

/// Vision oracle returning a fixed result
pub struct ScriptedVision {
    reply: Result<String, OracleError>,
    calls: AtomicUsize,
}

impl ScriptedVision {
    pub fn text(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: OracleError) -> Self {
        Self {
            reply: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VisionOracle for ScriptedVision {
    async fn extract_text(&self, _image: &ImagePayload) -> Result<String, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}

/// Logger that keeps every event in memory
#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<(String, Value)>>,
}

impl RecordingLogger {
    pub fn events_of(&self, event_type: &str) -> Vec<Value> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| t == event_type)
            .map(|(_, p)| p.clone())
            .collect()
    }
}

impl VerificationLogger for RecordingLogger {
    fn log(&self, event: VerificationEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type.to_string(), event.payload));
    }
}

/// Progress notifier that records what it was told
#[derive(Default)]
pub struct RecordingProgress {
    pub stages: Mutex<Vec<(Stage, usize)>>,
    pub settled: Mutex<Vec<(usize, String, bool)>>,
}

impl ProgressNotifier for RecordingProgress {
    fn on_stage_start(&self, stage: Stage, total_tasks: usize) {
        self.stages.lock().unwrap().push((stage, total_tasks));
    }

    fn on_claim_complete(&self, index: usize, claim: &Claim, success: bool) {
        self.settled
            .lock()
            .unwrap()
            .push((index, claim.text().to_string(), success));
    }

    fn on_stage_complete(&self, _stage: Stage) {}
}

pub fn assessment(is_true: bool, confidence: f64) -> Reply {
    Reply::Value(serde_json::json!({
        "isTrue": is_true,
        "confidenceScore": confidence,
        "source": "General knowledge",
        "reason": "Stubbed assessment",
    }))
}

pub fn transport_error() -> Reply {
    Reply::Fail(OracleError::Connection("connection reset by peer".to_string()))
}
