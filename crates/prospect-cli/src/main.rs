//! Prospect research CLI.
//!
//! The `prospect` command researches the configured companies and prints a
//! summary table followed by the recommended outreach order.

use anyhow::{Context, Result};
use clap::Parser;
use prospect::{
    PriorityListing, ReportRenderer, ResearchConfig, ResearchOrchestrator, ResearchReport,
    ResultSink, SummaryTable,
};
use prospect_store::{JsonFileSink, NoopSink};
use std::path::{Path, PathBuf};
use tracing::{Level, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Parser)]
#[command(name = "prospect")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Corporate prospect research from SEC and nonprofit filings", long_about = None)]
struct Cli {
    /// Research configuration file (JSON); built-in defaults when omitted
    #[arg(short, long, env = "PROSPECT_CONFIG")]
    config: Option<PathBuf>,

    /// Directory for per-company profiles and the combined report
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

/// Installs the global subscriber writing to stderr, leaving stdout for the
/// report. `RUST_LOG` takes precedence over `level`.
fn init_tracing(json: bool, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
            .ok();
    }
}

fn load_config(path: Option<&Path>) -> Result<ResearchConfig> {
    match path {
        Some(path) => ResearchConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(ResearchConfig::default()),
    }
}

/// Stores every completed profile, then the whole report.
async fn persist(sink: &dyn ResultSink, report: &ResearchReport) -> Result<()> {
    for profile in report.successes() {
        sink.store_profile(profile)
            .await
            .with_context(|| format!("Failed to store profile for {}", profile.symbol()))?;
    }
    sink.store_report(report)
        .await
        .context("Failed to store combined report")
}

fn render(report: &ResearchReport) -> Result<String> {
    let profiles: Vec<_> = report.successes().collect();
    let priority = report.priority();

    let table = SummaryTable
        .render(&profiles, &priority)
        .context("Failed to build summary table")?;
    let listing = PriorityListing
        .render(&profiles, &priority)
        .context("Failed to build priority listing")?;

    let mut out = format!("PROSPECT SUMMARY\n{table}\n\n{listing}");
    let failures: Vec<_> = report.failures().collect();
    if !failures.is_empty() {
        out.push_str("\nNOT RESEARCHED\n");
        for failure in failures {
            out.push_str(&format!("   {}: {}\n", failure.symbol, failure.error_message));
        }
    }
    Ok(out)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    init_tracing(cli.json, level);

    let config = load_config(cli.config.as_deref())?;
    let orchestrator =
        ResearchOrchestrator::from_config(&config).context("Failed to set up research clients")?;

    let report = orchestrator.run().await;

    match &cli.output {
        Some(dir) => {
            persist(&JsonFileSink::new(dir), &report).await?;
            info!(dir = %dir.display(), "Saved research output");
        }
        None => persist(&NoopSink, &report).await?,
    }

    println!("{}", render(&report)?);
    Ok(())
}
