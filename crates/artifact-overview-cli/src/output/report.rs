// SPDX-License-Identifier: Apache-2.0

use console::style;
use std::io::{self, Write};

use artifact_overview_core::{ArtifactReport, format_size};

use crate::cli::OutputContext;

use super::Renderable;

/// Absent timestamps print as `None`.
fn timestamp(value: Option<&str>) -> &str {
    value.unwrap_or("None")
}

impl Renderable for ArtifactReport {
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        writeln!(w)?;
        writeln!(w, "{}", style("=== Artifacts Overview ===").bold())?;

        for repo in self.overview.repositories() {
            writeln!(w)?;
            writeln!(w, "Repository: {}", style(&repo.name).cyan())?;
            for artifact in &repo.artifacts {
                writeln!(
                    w,
                    "  - Artifact: {}, Size: {}",
                    artifact.name,
                    format_size(artifact.size_in_bytes)
                )?;
                writeln!(
                    w,
                    "    Created: {}, Expires: {}",
                    timestamp(artifact.created_at.as_deref()),
                    timestamp(artifact.expires_at.as_deref())
                )?;
                writeln!(w, "    Workflow Run ID: {}", artifact.workflow_run_id)?;
            }
        }

        writeln!(w)?;
        writeln!(
            w,
            "Total size of all artifacts: {}",
            style(format_size(self.total_size())).bold()
        )?;

        if ctx.verbose {
            let stats = format!(
                "Scanned {} repositories: {} with artifacts, {} artifacts kept, {} expired skipped",
                self.repositories_scanned,
                self.overview.len(),
                self.overview.artifact_count(),
                self.artifacts_skipped
            );
            writeln!(w, "{}", style(stats).dim())?;
        }
        Ok(())
    }

    fn render_markdown(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w, "## Artifacts Overview: {}\n", self.organization)?;

        for repo in self.overview.repositories() {
            writeln!(w, "### {}\n", repo.name)?;
            writeln!(w, "| Artifact | Size | Created | Expires | Workflow Run ID |")?;
            writeln!(w, "|---|---|---|---|---|")?;
            for artifact in &repo.artifacts {
                writeln!(
                    w,
                    "| {} | {} | {} | {} | {} |",
                    artifact.name.replace('|', "\\|"),
                    format_size(artifact.size_in_bytes),
                    timestamp(artifact.created_at.as_deref()),
                    timestamp(artifact.expires_at.as_deref()),
                    artifact.workflow_run_id
                )?;
            }
            writeln!(w)?;
        }

        writeln!(
            w,
            "**Total size of all artifacts:** {}",
            format_size(self.total_size())
        )?;
        Ok(())
    }
}
