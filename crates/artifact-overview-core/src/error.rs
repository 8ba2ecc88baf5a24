// SPDX-License-Identifier: Apache-2.0

//! Error types for artifact-overview.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building an artifact overview.
#[derive(Error, Debug)]
pub enum OverviewError {
    /// GitHub API error from octocrab, including non-success statuses and
    /// response bodies that do not match the expected shape.
    #[error("GitHub API error: {message}")]
    GitHub {
        /// Error message.
        message: String,
    },

    /// An expiration timestamp did not match `YYYY-MM-DDTHH:MM:SSZ`.
    #[error("Invalid timestamp '{value}'")]
    Timestamp {
        /// The offending timestamp text.
        value: String,
        /// Underlying chrono parse error.
        #[source]
        source: chrono::ParseError,
    },

    /// Expired artifacts were requested to be skipped but an artifact carries
    /// no expiration timestamp.
    #[error("Artifact '{artifact}' has no expiration timestamp")]
    MissingExpiration {
        /// Artifact name.
        artifact: String,
    },

    /// Configuration file or environment override error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// The overview could not be serialized to JSON.
    #[error("Failed to serialize overview")]
    Serialize(#[from] serde_json::Error),

    /// The overview file could not be written.
    #[error("Failed to write overview file: {}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl From<octocrab::Error> for OverviewError {
    fn from(err: octocrab::Error) -> Self {
        // Display for octocrab::Error::GitHub is terse; the source carries the API message.
        let message = match &err {
            octocrab::Error::GitHub { source, .. } => {
                format!("{} ({})", source.message, source.status_code)
            }
            other => other.to_string(),
        };
        OverviewError::GitHub { message }
    }
}

impl From<config::ConfigError> for OverviewError {
    fn from(err: config::ConfigError) -> Self {
        OverviewError::Config {
            message: err.to_string(),
        }
    }
}
