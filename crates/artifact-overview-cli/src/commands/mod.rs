// SPDX-License-Identifier: Apache-2.0

//! Command handler for the artifact overview.

use anyhow::{Context, Result};
use artifact_overview_core::{
    AppConfig, GitHubClient, ReportOptions, build_report, write_overview,
};
use secrecy::SecretString;
use tracing::{debug, info};

use crate::cli::{Cli, OutputContext};
use crate::output::{self, common};

/// Builds the overview, prints it, then writes the JSON file.
///
/// The file is only written after the whole organization was scanned and the
/// report rendered; any failure before that leaves existing files untouched.
pub async fn run(cli: Cli, ctx: OutputContext, config: &AppConfig) -> Result<()> {
    let Cli {
        organization,
        token,
        ignore_expired,
        output_file,
        ..
    } = cli;
    let token = SecretString::from(token);

    let client = GitHubClient::from_config(&token, &config.github)
        .context("Failed to create GitHub client")?;
    debug!(?client, "GitHub client ready");

    let options = ReportOptions::new(ignore_expired);
    let report = build_report(&client, &organization, options, |event| {
        common::show_scan_event(&ctx, event);
    })
    .await?;

    output::render(&report, &ctx)?;

    let path = output_file.as_deref().unwrap_or(&config.report.output_file);
    write_overview(&report.overview, path)?;
    info!(path = %path.display(), "Overview saved");
    common::show_saved(&ctx, path);

    Ok(())
}
