// SPDX-License-Identifier: Apache-2.0

//! artifact-overview - GitHub Actions artifact usage across an organization.
//!
//! Lists the artifacts of every repository in an organization, prints them
//! grouped by repository with their total size, and saves the grouping to a
//! JSON file.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;

use std::process::ExitCode;

use anyhow::{Context, Result};
use artifact_overview_core::config;
use clap::Parser;
use tracing::debug;

use crate::cli::{Cli, OutputContext};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let output_ctx = OutputContext::from_cli(cli.output, cli.quiet, cli.verbose);

    let config = config::load_config().context("Failed to load configuration")?;
    debug!(?config, "Configuration loaded successfully");

    commands::run(cli, output_ctx, &config).await
}
