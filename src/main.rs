//! Course-Harvest main entry point
//!
//! Command-line driver: selects source adapters, runs them through the
//! polite fetch layer, and writes the deduplicated, normalized snapshot.

use anyhow::Context;
use clap::Parser;
use course_harvest::config::{self, Config};
use course_harvest::pipeline::{self, SourceOutcome};
use course_harvest::{output, PoliteClient, SourceRegistry};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Course-Harvest: a polite course-listing collector
///
/// Collects course listings from registered sources while respecting
/// robots.txt and self-imposed rate limits, reconciles them into one
/// canonical schema, and writes a single JSON snapshot.
#[derive(Parser, Debug)]
#[command(name = "course-harvest")]
#[command(version = "1.0.0")]
#[command(about = "A polite course-listing collector", long_about = None)]
struct Cli {
    /// Optional TOML settings file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Source adapter names to run (defaults to all registered sources)
    #[arg(long, value_name = "NAME", num_args = 0..)]
    sources: Vec<String>,

    /// Output JSON file path
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Minimum per-request delay in seconds
    #[arg(long, value_name = "SECONDS")]
    min_delay: Option<f64>,

    /// Maximum per-request delay in seconds
    #[arg(long, value_name = "SECONDS")]
    max_delay: Option<f64>,

    /// Total number of attempts per request
    #[arg(long, value_name = "COUNT")]
    retries: Option<u32>,

    /// Exponential backoff base in seconds
    #[arg(long, value_name = "SECONDS")]
    backoff: Option<f64>,

    /// Crawler user-agent header
    #[arg(long, value_name = "STRING")]
    user_agent: Option<String>,

    /// List registered source adapters and exit
    #[arg(long)]
    list_sources: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let registry = SourceRegistry::builtin();

    if cli.list_sources {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let config = resolve_config(&cli)?;

    tracing::info!(
        "Politeness: delay {:.1}-{:.1}s, {} attempts, backoff base {:.1}s",
        config.polite.min_delay_secs,
        config.polite.max_delay_secs,
        config.polite.retries,
        config.polite.backoff_base_secs
    );

    let adapters = registry.select(&cli.sources)?;
    tracing::info!(
        "Running {} of {} registered sources",
        adapters.len(),
        registry.names().len()
    );

    let client =
        PoliteClient::new(config.polite.clone()).context("failed to build HTTP client")?;

    let harvest = pipeline::collect_sources(&client, &adapters).await;
    let total_raw = harvest.records.len();
    let canonical = pipeline::finalize(harvest.records);

    output::write_records(&config.output.path, &canonical)?;

    for report in &harvest.reports {
        match &report.outcome {
            SourceOutcome::Collected(count) => {
                println!("{}: {} records", report.source, count);
            }
            SourceOutcome::SkippedByRobots => {
                println!("{}: skipped (robots.txt disallows)", report.source);
            }
            SourceOutcome::Failed(reason) => {
                println!("{}: FAILED ({})", report.source, reason);
            }
        }
    }
    println!(
        "Wrote {} normalized records ({} raw, {} duplicates removed) to {}",
        canonical.len(),
        total_raw,
        total_raw - canonical.len(),
        config.output.path.display()
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("course_harvest=info,warn"),
            1 => EnvFilter::new("course_harvest=debug,info"),
            2 => EnvFilter::new("course_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the optional config file and applies CLI overrides on top
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let (config, hash) = config::load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Loaded configuration from {} (hash: {})", path.display(), hash);
            config
        }
        None => Config::default(),
    };

    if let Some(user_agent) = &cli.user_agent {
        config.polite.user_agent = user_agent.clone();
    }
    if let Some(min_delay) = cli.min_delay {
        config.polite.min_delay_secs = min_delay;
    }
    if let Some(max_delay) = cli.max_delay {
        config.polite.max_delay_secs = max_delay;
    }
    if let Some(retries) = cli.retries {
        config.polite.retries = retries;
    }
    if let Some(backoff) = cli.backoff {
        config.polite.backoff_base_secs = backoff;
    }
    if let Some(output) = &cli.output {
        config.output.path = output.clone();
    }

    // Overrides can invalidate a previously valid file, so validate last.
    config::validate(&config)?;

    Ok(config)
}
