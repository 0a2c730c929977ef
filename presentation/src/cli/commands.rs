//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for fact-check results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable verdicts
    Text,
    /// JSON on stdout
    Json,
}

/// CLI arguments for truthguard
#[derive(Parser, Debug)]
#[command(name = "truthguard")]
#[command(author, version, about = "Extract factual claims and fact-check them with an LLM")]
#[command(long_about = r#"
truthguard pulls factual claims out of text, an image, or an article URL and
asks an LLM to assess each one independently.

Text and image inputs run in stages:
1. Normalize: images are transcribed to text
2. Extract: the text is split into self-contained claims
3. Verify: every claim is assessed concurrently; one failure never aborts the rest

Article URLs are summarized and fact-checked in a single request.

Configuration files are loaded from (in priority order):
1. TRUTHGUARD_<SECTION>__<KEY>   Environment variables
2. --config <path>               Explicit config file
3. ./truthguard.toml             Project-level config
4. ~/.config/truthguard/config.toml   Global config

Example:
  truthguard text "The Eiffel Tower is in Berlin. Water boils at 100C at sea level."
  truthguard image screenshot.png
  truthguard url https://example.com/article --output json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Include claims that could not be verified (text and image only)
    #[arg(long, global = true)]
    pub show_failures: bool,

    /// Maximum simultaneous claim assessments (overrides config; 0 = unbounded)
    #[arg(long, value_name = "N", global = true)]
    pub max_concurrency: Option<usize>,

    /// Append dropped-claim and batch events to this JSONL file
    #[arg(long, value_name = "PATH", global = true)]
    pub verification_log: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Also write logs to a daily-rotated file in this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Input to fact-check
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Summarize and fact-check an article
    Url {
        /// Absolute http(s) URL
        url: String,
    },
    /// Transcribe an image and fact-check its text
    Image {
        /// Image file path or `data:image/...;base64,...` URI
        image: String,
    },
    /// Fact-check plain text
    Text {
        /// Text to check; read from stdin when omitted or `-`
        text: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_text_with_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "truthguard",
            "text",
            "The sky is blue.",
            "-o",
            "json",
            "--max-concurrency",
            "4",
            "-vv",
        ]);
        assert_eq!(
            cli.command,
            Some(Command::Text {
                text: Some("The sky is blue.".to_string())
            })
        );
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.max_concurrency, Some(4));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["truthguard", "url", "https://example.com"]);
        assert_eq!(cli.output, OutputFormat::Text);
        assert!(!cli.show_failures);
        assert!(cli.max_concurrency.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_text_may_come_from_stdin() {
        let cli = Cli::parse_from(["truthguard", "text"]);
        assert_eq!(cli.command, Some(Command::Text { text: None }));
    }
}
