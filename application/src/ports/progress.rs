//! Progress notification port
//!
//! Defines the interface for reporting progress during a fact-check run.

use truthguard_domain::{Claim, Stage};

/// Callback for progress updates during a pipeline run
///
/// Implementations live in the outer layers and can display progress
/// however they like (stderr spinner, web socket, metrics).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage starts; `total_tasks` is the number of oracle
    /// calls the stage will make
    fn on_stage_start(&self, stage: Stage, total_tasks: usize);

    /// Called when one claim's assessment settles
    fn on_claim_complete(&self, _index: usize, _claim: &Claim, _success: bool) {}

    /// Called when a stage completes
    fn on_stage_complete(&self, stage: Stage);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: Stage, _total_tasks: usize) {}
    fn on_stage_complete(&self, _stage: Stage) {}
}
