//! CLI entrypoint for truthguard
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::io::{IsTerminal, Read};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use truthguard_application::{FactCheckPipeline, NoProgress, ProgressNotifier};
use truthguard_domain::{FactCheckResults, VerificationBatch};
use truthguard_infrastructure::{
    ConfigLoader, FileConfig, JsonlVerificationLogger, OpenAiCompatibleOracle,
};
use truthguard_presentation::{
    Cli, Command, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress,
    image_argument_to_data_uri,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so the file writer flushes on exit
    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref())?;

    if cli.show_config {
        println!("Configuration sources (in priority order):");
        for line in ConfigLoader::describe_sources() {
            println!("  {}", line);
        }
        return Ok(());
    }

    let Some(command) = cli.command.clone() else {
        bail!("Nothing to check. Use `truthguard text|image|url ...` (see --help).");
    };

    let config = load_config(&cli)?;

    info!("Starting truthguard");

    // === Dependency Injection ===
    let oracle = Arc::new(
        OpenAiCompatibleOracle::from_config(&config.oracle)
            .context("Failed to configure the oracle")?,
    );

    let mut params = config.pipeline.to_pipeline_params();
    if let Some(max) = cli.max_concurrency {
        params = params.with_max_concurrency(max);
    }

    let mut pipeline = FactCheckPipeline::new(oracle.clone(), oracle, params);

    let log_path = cli
        .verification_log
        .clone()
        .or_else(|| config.logging.verification_log.clone());
    if let Some(path) = log_path {
        match JsonlVerificationLogger::new(&path) {
            Some(logger) => {
                info!("Verification events: {}", logger.path().display());
                pipeline = pipeline.with_verification_logger(Arc::new(logger));
            }
            None => warn!("Continuing without verification log"),
        }
    }

    let reporter: Box<dyn ProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };
    let progress = reporter.as_ref();

    let output = match command {
        Command::Url { url } => {
            let report = pipeline.from_url_with_progress(&url, progress).await?;
            match cli.output {
                OutputFormat::Json => ConsoleFormatter::format_json(&report),
                OutputFormat::Text => ConsoleFormatter::format_report(&report),
            }
        }
        Command::Image { image } => {
            let data_uri = image_argument_to_data_uri(&image)
                .with_context(|| format!("Failed to read image '{}'", image))?;
            let batch = pipeline
                .check_image_with_progress(&data_uri, progress)
                .await?;
            render_batch(&cli, batch)
        }
        Command::Text { text } => {
            let text = read_text(text)?;
            let batch = pipeline.check_text_with_progress(&text, progress).await?;
            render_batch(&cli, batch)
        }
    };

    println!("{}", output);

    Ok(())
}

/// Install stderr logging, plus a daily-rotated file when `log_dir` is set
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "truthguard.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            error!("Config: {}", issue);
        } else {
            warn!("Config: {}", issue);
        }
    }
    if FileConfig::has_errors(&issues) {
        bail!("Invalid configuration; fix the errors above or run with --no-config");
    }

    Ok(config)
}

fn read_text(arg: Option<String>) -> Result<String> {
    match arg.as_deref() {
        None | Some("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read text from stdin")?;
            Ok(text)
        }
        Some(text) => Ok(text.to_string()),
    }
}

fn render_batch(cli: &Cli, batch: VerificationBatch) -> String {
    if batch.is_partial() && !cli.show_failures && !cli.quiet {
        eprintln!(
            "{} of {} claims could not be verified (use --show-failures to list them)",
            batch.failures.len(),
            batch.dispatched
        );
    }

    match (cli.output, cli.show_failures) {
        (OutputFormat::Json, true) => ConsoleFormatter::format_json(&batch),
        (OutputFormat::Json, false) => {
            ConsoleFormatter::format_json(&FactCheckResults::from(batch))
        }
        (OutputFormat::Text, true) => ConsoleFormatter::format_batch(&batch),
        (OutputFormat::Text, false) => {
            ConsoleFormatter::format_results(&FactCheckResults::from(batch))
        }
    }
}
