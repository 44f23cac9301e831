//! burrow-cli entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse configuration**: flags and environment variables via [`config::CliConfig`].
//! 2. **Wire observability**: configure `tracing-subscriber` with a text or
//!    JSON layer and, optionally, an OpenTelemetry OTLP exporter. All spans
//!    and events emitted by the `burrow` client flow through it.
//! 3. **Construct infrastructure**: build a [`burrow::BurrowClient`] from the
//!    configured base address. An invalid address fails here, before any
//!    request is made.
//! 4. **Run one command**: dispatch the subcommand through the
//!    [`monitor::LagMonitor`] trait and print the result to stdout as JSON.
//!
//! A failed command exits with status 1 and the error chain on stderr.

mod commands;
mod config;
mod telemetry;

use std::process::ExitCode;

use anyhow::{Context, Result};
use burrow::BurrowClient;
use clap::Parser;
use tracing::debug;

use crate::config::CliConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let config = CliConfig::parse();

    let telemetry = match telemetry::init(&config) {
        Ok(telemetry) => telemetry,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = run(&config).await;
    telemetry.shutdown();

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &CliConfig) -> Result<()> {
    let client = BurrowClient::new(&config.base_url).context("invalid Burrow configuration")?;
    debug!(base_url = %client.base_url(), "querying Burrow");

    let output = commands::execute(&config.command, &client).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
