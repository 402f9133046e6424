#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::Parser;
use sensorclaw::config::Config;
use sensorclaw::sensor::SimulatedReadings;
use sensorclaw::{endpoints, poll};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

/// `sensorclaw` - poll a sensor fleet once, under a hard deadline.
#[derive(Parser, Debug)]
#[command(name = "sensorclaw")]
#[command(author = "theonlyhennygod")]
#[command(version = "0.1.0")]
#[command(about = "One-shot concurrent sensor fleet poller.", long_about = None)]
struct Cli {
    /// Endpoints file, one URL per line (overrides the configured path)
    #[arg(short, long)]
    endpoints: Option<PathBuf>,

    /// Overall session timeout in seconds (overrides the configured value)
    #[arg(short, long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging - respects RUST_LOG env var, defaults to INFO
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut config = Config::load_or_init()?;
    config.apply_env_overrides();
    if let Some(path) = cli.endpoints {
        config.endpoints_file = path;
    }
    if let Some(secs) = cli.timeout_secs {
        config.timeout_secs = secs;
    }

    let endpoints = endpoints::load_endpoints(&config.endpoints_file)?;
    info!(
        "polling {} endpoint(s), timeout {}s",
        endpoints.len(),
        config.timeout_secs
    );

    // Ctrl-C is the external cancellation source for the CLI session.
    let cancel = CancellationToken::new();
    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("ctrl-c received, cancelling session");
            ctrl_c_cancel.cancel();
        }
    });

    let report = poll::poll_sensors(
        endpoints,
        Arc::new(SimulatedReadings),
        config.session_timeout(),
        &cancel,
        &config.http,
        &mut io::stdout(),
    )
    .await?;

    debug!("{} reading(s) collected", report.readings);
    Ok(())
}
