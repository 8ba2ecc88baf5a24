// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the artifact-overview CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging on stderr.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//!
//! The `-v` flag controls user-facing verbose output (handled separately by `OutputContext`).
//! For debug-level tracing, use the `RUST_LOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Per-page pagination logs
//! RUST_LOG=artifact_overview=debug artifact-overview octo-org "$TOKEN"
//!
//! # Include HTTP client internals
//! RUST_LOG=artifact_overview=debug,octocrab=debug artifact-overview octo-org "$TOKEN"
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter: warnings from this tool, errors from the HTTP stack.
///
/// `artifact_overview` also matches the `artifact_overview_core` target.
const DEFAULT_FILTER: &str = "artifact_overview=warn,octocrab=error,hyper=error";

/// Initialize the logging subsystem.
///
/// Logs go to stderr so that stdout carries only the report.
pub fn init_logging() {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
