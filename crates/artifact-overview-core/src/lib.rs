// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Artifact Overview Core
//!
//! Core library for the `artifact-overview` CLI: lists the GitHub Actions
//! artifacts of every repository in an organization, groups them by
//! repository and totals their size.
//!
//! This crate provides reusable components for:
//! - GitHub API access with `Link` pagination
//! - Expiration filtering and decimal size formatting
//! - Building and persisting the repository-grouped overview
//! - Configuration management
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use artifact_overview_core::{GitHubClient, ReportOptions, build_report, load_config, write_overview};
//! use secrecy::SecretString;
//!
//! # async fn example() -> artifact_overview_core::Result<()> {
//! let config = load_config()?;
//! let token = SecretString::from("ghp_example".to_string());
//! let client = GitHubClient::from_config(&token, &config.github)?;
//!
//! let report = build_report(&client, "octo-org", ReportOptions::new(true), |_| {}).await?;
//! write_overview(&report.overview, &config.report.output_file)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading and paths
//! - [`error`] - Error types
//! - [`github`] - GitHub REST client and pagination
//! - [`models`] - Repository and artifact records
//! - [`report`] - Overview construction and output
//! - [`source`] - Listing abstraction used by the report builder
//! - [`utils`] - Size formatting and expiration checks

// ============================================================================
// Error Handling
// ============================================================================

pub use error::OverviewError;

/// Convenience Result type for artifact-overview operations.
///
/// This is equivalent to `std::result::Result<T, OverviewError>`.
pub type Result<T> = std::result::Result<T, OverviewError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    AppConfig, DEFAULT_OUTPUT_FILE, GitHubConfig, ReportConfig, config_dir, config_file_path,
    load_config,
};

// ============================================================================
// GitHub Integration
// ============================================================================

pub use github::{GitHubClient, PageChunk, collect_pages, create_client};
pub use source::ArtifactSource;

// ============================================================================
// Reporting
// ============================================================================

pub use models::{ArtifactRecord, RepositorySummary};
pub use report::{
    ArtifactReport, Overview, ReportOptions, RepositoryArtifacts, ScanEvent, build_report,
    overview_json, write_overview,
};

// ============================================================================
// Utilities
// ============================================================================

pub use utils::{format_size, is_expired, is_expired_at, parse_timestamp};

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod report;
pub mod source;
pub mod utils;
