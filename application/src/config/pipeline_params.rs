//! Pipeline parameters: fan-out control and verdict policy.
//!
//! [`PipelineParams`] groups the static parameters that control how the
//! verification fan-out runs and how verdicts are post-processed. These are
//! application-layer concerns, not domain rules.

use std::num::NonZeroUsize;
use truthguard_domain::SourcePolicy;

/// Pipeline control parameters.
///
/// | Field | Default | Effect |
/// |-------|---------|--------|
/// | `max_concurrency` | `None` | `None` dispatches every claim at once; `Some(n)` keeps at most `n` assessments in flight |
/// | `source_policy` | `PassThrough` | What a verdict's `source` may contain |
#[derive(Debug, Clone, Default)]
pub struct PipelineParams {
    /// Upper bound on simultaneous assessment calls.
    pub max_concurrency: Option<NonZeroUsize>,
    /// Source handling for assessed verdicts.
    pub source_policy: SourcePolicy,
}

impl PipelineParams {
    // ==================== Builder Methods ====================

    /// Cap in-flight assessments. `0` removes the cap.
    pub fn with_max_concurrency(mut self, max: usize) -> Self {
        self.max_concurrency = NonZeroUsize::new(max);
        self
    }

    pub fn unbounded(mut self) -> Self {
        self.max_concurrency = None;
        self
    }

    pub fn with_source_policy(mut self, policy: SourcePolicy) -> Self {
        self.source_policy = policy;
        self
    }
}
