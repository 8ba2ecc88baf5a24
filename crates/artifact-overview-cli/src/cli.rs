// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for artifact-overview.
//!
//! Uses clap's derive API. The tool has a single operation, so the
//! organization and token are positional arguments of the top-level command.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output format for CLI results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// YAML output for programmatic consumption
    Yaml,
    /// Markdown output for issues and wikis
    Markdown,
}

/// Global output configuration passed to commands.
#[derive(Clone, Debug)]
pub struct OutputContext {
    /// Output format (text, json, yaml, markdown)
    pub format: OutputFormat,
    /// Suppress progress lines
    pub quiet: bool,
    /// Show run statistics after the report
    pub verbose: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, quiet: bool, verbose: bool) -> Self {
        Self {
            format,
            quiet,
            verbose,
        }
    }

    /// Returns true if per-repository progress lines should be printed.
    ///
    /// Progress is interleaved with the report on stdout, so it is only shown
    /// for the text format.
    pub fn shows_progress(&self) -> bool {
        !self.quiet && self.is_text()
    }

    /// Returns true for the human-readable text format.
    pub fn is_text(&self) -> bool {
        matches!(self.format, OutputFormat::Text)
    }
}

/// artifact-overview - GitHub Actions artifact usage across an organization.
///
/// Lists the artifacts of every repository in the organization, prints them
/// grouped by repository with their total size, and saves the grouping as
/// JSON (artifacts_overview.json by default).
#[derive(Parser)]
#[command(name = "artifact-overview")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// GitHub organization name
    pub organization: String,

    /// GitHub personal access token
    pub token: String,

    /// Ignore expired artifacts
    #[arg(long)]
    pub ignore_expired: bool,

    /// Output format (text, json, yaml, markdown)
    #[arg(long, short = 'o', default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Write the JSON overview to this path instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Suppress progress lines
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Show run statistics after the report
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
