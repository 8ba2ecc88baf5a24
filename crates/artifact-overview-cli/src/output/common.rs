// SPDX-License-Identifier: Apache-2.0

//! Progress and status lines printed around the report.

use std::io::Write;
use std::path::Path;

use artifact_overview_core::ScanEvent;
use tracing::debug;

use super::OutputContext;

/// Writes the progress line for a scan event.
///
/// # Errors
/// Returns error if write operation fails.
pub fn write_scan_event<W: Write + ?Sized>(
    w: &mut W,
    event: ScanEvent<'_>,
) -> std::io::Result<()> {
    match event {
        ScanEvent::FetchingRepositories { org } => {
            writeln!(w, "Fetching repositories for organization: {org}")
        }
        ScanEvent::FetchingArtifacts { repo } => {
            writeln!(w, "Fetching artifacts for repository: {repo}")
        }
        ScanEvent::SkippedExpired { artifact, .. } => {
            writeln!(w, "  Skipping expired artifact: {artifact}")
        }
    }
}

/// Display progress for a scan event when progress is enabled.
pub fn show_scan_event(ctx: &OutputContext, event: ScanEvent<'_>) {
    if ctx.shows_progress() {
        emit_scan_event(&mut std::io::stdout(), event);
    }
}

/// Writes the progress line, logging instead of failing when the writer errors.
///
/// Returns whether the line was written.
fn emit_scan_event<W: Write + ?Sized>(w: &mut W, event: ScanEvent<'_>) -> bool {
    match write_scan_event(w, event) {
        Ok(()) => true,
        Err(e) => {
            debug!(error = %e, ?event, "Failed to write progress line");
            false
        }
    }
}

/// Display where the overview file was written (text format only).
pub fn show_saved(ctx: &OutputContext, path: &Path) {
    if ctx.is_text() {
        println!("\nOverview saved to {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(event: ScanEvent<'_>) -> String {
        let mut buf = Vec::new();
        write_scan_event(&mut buf, event).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_fetching_repositories_line() {
        assert_eq!(
            line(ScanEvent::FetchingRepositories { org: "octo-org" }),
            "Fetching repositories for organization: octo-org\n"
        );
    }

    #[test]
    fn test_fetching_artifacts_line() {
        assert_eq!(
            line(ScanEvent::FetchingArtifacts { repo: "octo-docs" }),
            "Fetching artifacts for repository: octo-docs\n"
        );
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_emit_scan_event_reports_write_failure() {
        let event = ScanEvent::FetchingArtifacts { repo: "octo-docs" };

        assert!(!emit_scan_event(&mut ClosedPipe, event));
        assert!(emit_scan_event(&mut Vec::new(), event));
    }

    #[test]
    fn test_skipped_expired_line_is_indented() {
        assert_eq!(
            line(ScanEvent::SkippedExpired {
                repo: "octo-docs",
                artifact: "coverage",
            }),
            "  Skipping expired artifact: coverage\n"
        );
    }
}
