//! Progress reporting for fact-check runs
//!
//! Both reporters write to stderr so stdout stays clean for results.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;
use truthguard_application::ports::progress::ProgressNotifier;
use truthguard_domain::core::string::truncate;
use truthguard_domain::{Claim, Stage};

/// Reports progress with an indicatif bar per stage
pub struct ProgressReporter {
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            stage_bar: Mutex::new(None),
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn stage_number(stage: Stage) -> usize {
        match stage {
            Stage::Normalize => 1,
            Stage::Extract => 2,
            Stage::Verify => 3,
            Stage::Summarize => 1,
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: Stage, total_tasks: usize) {
        let pb = ProgressBar::with_draw_target(
            Some(total_tasks as u64),
            ProgressDrawTarget::stderr(),
        );
        pb.set_style(Self::stage_style());
        pb.set_prefix(format!(
            "Stage {}: {}",
            Self::stage_number(stage),
            stage.display_name()
        ));
        pb.set_message("Starting...");
        pb.enable_steady_tick(std::time::Duration::from_millis(120));

        if let Ok(mut slot) = self.stage_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_claim_complete(&self, _index: usize, claim: &Claim, success: bool) {
        if let Ok(slot) = self.stage_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            let claim = truncate(claim.text(), 50);
            let status = if success {
                format!("{} {}", "v".green(), claim)
            } else {
                format!("{} {}", "x".red(), claim)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_stage_complete(&self, stage: Stage) {
        if let Ok(mut slot) = self.stage_bar.lock()
            && let Some(pb) = slot.take()
        {
            if stage != Stage::Verify {
                pb.set_position(pb.length().unwrap_or(1));
            }
            pb.finish_with_message(format!("{}", "done".green()));
        }
    }
}

/// Simple line-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: Stage, total_tasks: usize) {
        eprintln!(
            "{} {} ({} tasks)",
            "->".cyan(),
            stage.display_name().bold(),
            total_tasks
        );
    }

    fn on_claim_complete(&self, _index: usize, claim: &Claim, success: bool) {
        let claim = truncate(claim.text(), 70);
        if success {
            eprintln!("  {} {}", "v".green(), claim);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), claim);
        }
    }

    fn on_stage_complete(&self, _stage: Stage) {}
}
