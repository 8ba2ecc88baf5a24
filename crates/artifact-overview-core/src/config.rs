// SPDX-License-Identifier: Apache-2.0

//! Configuration management for artifact-overview.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `ARTIFACT_OVERVIEW_`)
//! 2. Config file: `~/.config/artifact-overview/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Point at a GitHub Enterprise Server instance
//! ARTIFACT_OVERVIEW_GITHUB__API_URL=https://ghe.example.com/api/v3 artifact-overview my-org "$TOKEN"
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::OverviewError;

/// Default file the overview is written to, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "artifacts_overview.json";

/// Largest page size the GitHub REST API accepts.
pub const MAX_PER_PAGE: u8 = 100;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub API settings.
    pub github: GitHubConfig,
    /// Report output settings.
    pub report: ReportConfig,
}

/// GitHub API settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// REST API base URL.
    pub api_url: String,
    /// Items requested per page when listing repositories and artifacts.
    pub per_page: u8,
    /// API request timeout in seconds.
    pub api_timeout_seconds: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            per_page: MAX_PER_PAGE,
            api_timeout_seconds: 30,
        }
    }
}

impl GitHubConfig {
    /// Page size clamped to the range the API accepts.
    #[must_use]
    pub fn effective_per_page(&self) -> u8 {
        self.per_page.clamp(1, MAX_PER_PAGE)
    }
}

/// Report output settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Path of the JSON overview file.
    pub output_file: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

/// Returns the artifact-overview configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/artifact-overview`. Returns `None`
/// when neither is available.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return Some(PathBuf::from(xdg_config).join("artifact-overview"));
    }
    dirs::home_dir().map(|home| home.join(".config").join("artifact-overview"))
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `ARTIFACT_OVERVIEW_` and double
/// underscore for nested keys (e.g., `ARTIFACT_OVERVIEW_GITHUB__PER_PAGE`).
///
/// # Errors
///
/// Returns `OverviewError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, OverviewError> {
    let mut builder = Config::builder();

    // Load from config file (optional - may not exist)
    if let Some(config_path) = config_file_path() {
        let file = File::with_name(config_path.to_string_lossy().as_ref()).required(false);
        builder = builder.add_source(file);
    }

    // Override with environment variables
    let config = builder
        .add_source(
            Environment::with_prefix("ARTIFACT_OVERVIEW")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(config_str: &str) -> AppConfig {
        Config::builder()
            .add_source(config::File::from_str(config_str, config::FileFormat::Toml))
            .build()
            .expect("should build config")
            .try_deserialize()
            .expect("should deserialize")
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.github.per_page, 100);
        assert_eq!(config.github.api_timeout_seconds, 30);
        assert_eq!(
            config.report.output_file,
            PathBuf::from("artifacts_overview.json")
        );
    }

    #[test]
    fn test_config_file_path() {
        if let Some(path) = config_file_path() {
            assert!(path.ends_with("artifact-overview/config.toml"));
        }
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = parse(
            r#"
[github]
api_url = "https://ghe.example.com/api/v3"
"#,
        );

        assert_eq!(config.github.api_url, "https://ghe.example.com/api/v3");
        assert_eq!(config.github.per_page, 100);
        assert_eq!(
            config.report.output_file,
            PathBuf::from(DEFAULT_OUTPUT_FILE)
        );
    }

    #[test]
    fn test_report_output_file_override() {
        let config = parse(
            r#"
[report]
output_file = "reports/overview.json"
"#,
        );

        assert_eq!(
            config.report.output_file,
            PathBuf::from("reports/overview.json")
        );
    }

    #[test]
    fn test_effective_per_page_is_clamped() {
        let mut github = GitHubConfig::default();

        github.per_page = 0;
        assert_eq!(github.effective_per_page(), 1);

        github.per_page = 250;
        assert_eq!(github.effective_per_page(), 100);

        github.per_page = 30;
        assert_eq!(github.effective_per_page(), 30);
    }

    #[test]
    fn test_invalid_type_is_config_error() {
        let result = Config::builder()
            .add_source(config::File::from_str(
                "[github]\nper_page = \"many\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .and_then(|c| c.try_deserialize::<AppConfig>());

        let err: OverviewError = result.expect_err("should reject string page size").into();
        assert!(matches!(err, OverviewError::Config { .. }));
    }
}
