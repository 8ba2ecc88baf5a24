// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `OverviewError` and appends a hint for each
//! error kind. Anything else is shown with its full context chain.

use std::fmt::Write;

use anyhow::Error;
use artifact_overview_core::error::OverviewError;

/// Formats an error for CLI display with helpful hints.
///
/// # Arguments
///
/// * `error` - The error to format
///
/// # Returns
///
/// A formatted error message with hints
pub fn format_error(error: &Error) -> String {
    let Some(overview_err) = error.downcast_ref::<OverviewError>() else {
        return format!("{error:#}");
    };

    let mut msg = overview_err.to_string();
    match overview_err {
        OverviewError::GitHub { .. } => {
            msg.push_str(
                "\n\nTip: Check the organization name and that your token can read its repositories and Actions artifacts.",
            );
        }
        OverviewError::Timestamp { source, .. } => {
            let _ = write!(
                msg,
                ": {source}\n\nTip: Expiration timestamps must look like 2024-01-31T12:00:00Z. Run without --ignore-expired to skip the check."
            );
        }
        OverviewError::MissingExpiration { .. } => {
            msg.push_str(
                "\n\nTip: GitHub returned no expiration for this artifact. Run without --ignore-expired to include it as-is.",
            );
        }
        OverviewError::Config { .. } => {
            let location = artifact_overview_core::config_file_path().map_or_else(
                || "ARTIFACT_OVERVIEW_* environment variables".to_string(),
                |p| p.display().to_string(),
            );
            let _ = write!(msg, "\n\nTip: Check your config file at {location}");
        }
        OverviewError::Write { path, source } => {
            let _ = write!(
                msg,
                ": {source}\n\nTip: Check that the directory of {} exists and is writable, or pass --output-file.",
                path.display()
            );
        }
        OverviewError::Serialize(source) => {
            let _ = write!(msg, ": {source}");
        }
    }
    msg
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_format_github_error() {
        let error = anyhow::Error::new(OverviewError::GitHub {
            message: "Not Found (404 Not Found)".to_string(),
        });
        let formatted = format_error(&error);

        assert!(formatted.starts_with("GitHub API error: Not Found"));
        assert!(formatted.contains("Tip: Check the organization name"));
    }

    #[test]
    fn test_format_github_error_through_context() {
        let error = anyhow::Error::new(OverviewError::GitHub {
            message: "Bad credentials (401 Unauthorized)".to_string(),
        })
        .context("Failed to list repositories");
        let formatted = format_error(&error);

        assert!(formatted.contains("Bad credentials"));
        assert!(formatted.contains("Tip:"));
    }

    #[test]
    fn test_format_timestamp_error() {
        let source = chrono::NaiveDateTime::parse_from_str("soon", "%Y-%m-%dT%H:%M:%SZ")
            .unwrap_err();
        let error = anyhow::Error::new(OverviewError::Timestamp {
            value: "soon".to_string(),
            source,
        });
        let formatted = format_error(&error);

        assert!(formatted.contains("Invalid timestamp 'soon'"));
        assert!(formatted.contains("--ignore-expired"));
    }

    #[test]
    fn test_format_missing_expiration_error() {
        let error = anyhow::Error::new(OverviewError::MissingExpiration {
            artifact: "coverage".to_string(),
        });
        let formatted = format_error(&error);

        assert!(formatted.starts_with("Artifact 'coverage' has no expiration timestamp"));
        assert!(formatted.contains("--ignore-expired"));
    }

    #[test]
    fn test_format_write_error() {
        let error = anyhow::Error::new(OverviewError::Write {
            path: PathBuf::from("/readonly/artifacts_overview.json"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        });
        let formatted = format_error(&error);

        assert!(formatted.contains("/readonly/artifacts_overview.json"));
        assert!(formatted.contains("--output-file"));
    }

    #[test]
    fn test_format_config_error() {
        let error = anyhow::Error::new(OverviewError::Config {
            message: "invalid type: string \"many\", expected u8".to_string(),
        });
        let formatted = format_error(&error);

        assert!(formatted.starts_with("Configuration error"));
        assert!(formatted.contains("Tip: Check your config file"));
    }

    #[test]
    fn test_format_other_error_keeps_chain() {
        let error = anyhow::anyhow!("connection reset").context("Failed to render report");
        let formatted = format_error(&error);

        assert_eq!(formatted, "Failed to render report: connection reset");
    }
}
