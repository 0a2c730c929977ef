//! Console output formatter for fact-check results

use colored::Colorize;
use serde::Serialize;
use truthguard_domain::{ArticleReport, ClaimFailure, FactCheckResults, VerificationBatch, Verdict};

/// Formats fact-check results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format verdicts for text or image input
    pub fn format_results(results: &FactCheckResults) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Fact-Check Results"));
        output.push('\n');

        if results.is_empty() {
            output.push_str(&format!("\n{}\n", "No checkable claims found.".dimmed()));
        }
        for (i, verdict) in results.results.iter().enumerate() {
            output.push_str(&Self::verdict(i + 1, verdict));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format verdicts plus the claims that could not be verified
    pub fn format_batch(batch: &VerificationBatch) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Fact-Check Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {} dispatched, {} verified ({} inconclusive), {} failed\n",
            "Claims:".cyan().bold(),
            batch.dispatched,
            batch.verdicts.len(),
            batch.degraded_count(),
            batch.failures.len()
        ));

        for (i, verdict) in batch.verdicts.iter().enumerate() {
            output.push_str(&Self::verdict(i + 1, verdict));
        }

        if !batch.failures.is_empty() {
            output.push_str(&Self::section_header("Could not verify"));
            for failure in &batch.failures {
                output.push_str(&Self::failure(failure));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format an article summary with its fact-checks
    pub fn format_report(report: &ArticleReport) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Article Fact-Check"));
        output.push('\n');

        if report.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                "The article could not be summarized.".dimmed()
            ));
            output.push_str(&Self::footer());
            return output;
        }

        output.push_str(&Self::section_header("Summary"));
        output.push_str(&format!("{}\n", report.summary));

        if !report.key_claims.is_empty() {
            output.push_str(&format!("\n{}\n", "Key Claims:".cyan().bold()));
            for claim in &report.key_claims {
                output.push_str(&format!("  * {}\n", claim));
            }
        }

        if !report.fact_checks.is_empty() {
            output.push_str(&Self::section_header("Fact-Checks"));
            for (i, verdict) in report.fact_checks.iter().enumerate() {
                output.push_str(&Self::verdict(i + 1, verdict));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format any result as pretty JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn verdict(number: usize, verdict: &Verdict) -> String {
        let label = match verdict.is_true {
            Some(true) => "TRUE".green().bold(),
            Some(false) => "FALSE".red().bold(),
            None => "UNCERTAIN".yellow().bold(),
        };
        let confidence = verdict
            .confidence_score
            .map(|c| format!(" ({:.0}% confidence)", c * 100.0))
            .unwrap_or_default();

        let mut out = format!("\n{}. {}{}\n", number, label, confidence.dimmed());
        out.push_str(&format!("   {}\n", verdict.claim));
        if let Some(reason) = &verdict.reason {
            out.push_str(&format!("   {} {}\n", "Reason:".cyan(), reason));
        }
        if let Some(source) = &verdict.source {
            out.push_str(&format!("   {} {}\n", "Source:".cyan(), source));
        }
        out
    }

    fn failure(failure: &ClaimFailure) -> String {
        format!(
            "  {} {}\n    {}\n",
            "x".red(),
            failure.claim,
            failure.reason.dimmed()
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
