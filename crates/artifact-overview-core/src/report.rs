// SPDX-License-Identifier: Apache-2.0

//! Artifact overview construction.
//!
//! [`build_report`] walks every repository of an organization in listing
//! order, drops expired artifacts when asked to, and folds the rest into an
//! [`Overview`] grouped by repository. [`write_overview`] persists the
//! overview as an indented JSON object.

use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use serde_json::ser::{Formatter, PrettyFormatter};
use tracing::{debug, info, instrument};

use crate::Result;
use crate::error::OverviewError;
use crate::models::ArtifactRecord;
use crate::source::ArtifactSource;
use crate::utils::is_expired_at;

/// Indentation used for the overview file.
const JSON_INDENT: &[u8] = b"    ";

/// Retained artifacts of one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryArtifacts {
    /// Repository name.
    pub name: String,
    /// Artifacts in listing order.
    pub artifacts: Vec<ArtifactRecord>,
}

impl RepositoryArtifacts {
    /// Sum of artifact sizes in bytes.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.artifacts.iter().map(|a| a.size_in_bytes).sum()
    }
}

/// Repository name to retained artifacts, in insertion order.
///
/// Serializes as a JSON object whose keys keep the order repositories were
/// listed in. Repositories without retained artifacts are never present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overview {
    repositories: Vec<RepositoryArtifacts>,
}

impl Overview {
    /// Creates an empty overview.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a repository bucket. Empty buckets are ignored.
    pub fn insert(&mut self, name: impl Into<String>, artifacts: Vec<ArtifactRecord>) {
        if artifacts.is_empty() {
            return;
        }
        self.repositories.push(RepositoryArtifacts {
            name: name.into(),
            artifacts,
        });
    }

    /// Repositories in insertion order.
    pub fn repositories(&self) -> impl Iterator<Item = &RepositoryArtifacts> {
        self.repositories.iter()
    }

    /// Looks up a repository bucket by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RepositoryArtifacts> {
        self.repositories.iter().find(|r| r.name == name)
    }

    /// Number of repositories with at least one retained artifact.
    #[must_use]
    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    /// True when no repository retained an artifact.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    /// Number of retained artifacts across all repositories.
    #[must_use]
    pub fn artifact_count(&self) -> usize {
        self.repositories.iter().map(|r| r.artifacts.len()).sum()
    }

    /// Sum of `size_in_bytes` over every retained artifact.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.repositories.iter().map(RepositoryArtifacts::total_size).sum()
    }
}

impl Serialize for Overview {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.repositories.len()))?;
        for repo in &self.repositories {
            map.serialize_entry(&repo.name, &repo.artifacts)?;
        }
        map.end()
    }
}

/// Options controlling which artifacts are retained.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Skip artifacts whose expiration is before `now`.
    pub ignore_expired: bool,
    /// Reference instant for the expiration check.
    pub now: DateTime<Utc>,
}

impl ReportOptions {
    /// Options evaluated against the current time.
    #[must_use]
    pub fn new(ignore_expired: bool) -> Self {
        Self {
            ignore_expired,
            now: Utc::now(),
        }
    }
}

/// Progress notifications emitted while the report is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent<'a> {
    /// About to list the organization's repositories.
    FetchingRepositories {
        /// Organization name.
        org: &'a str,
    },
    /// About to list a repository's artifacts.
    FetchingArtifacts {
        /// Repository name.
        repo: &'a str,
    },
    /// An expired artifact was dropped.
    SkippedExpired {
        /// Repository name.
        repo: &'a str,
        /// Artifact name.
        artifact: &'a str,
    },
}

/// Result of one overview run.
///
/// Serializes with a `total_size_in_bytes` field computed from the overview.
#[derive(Debug, Clone)]
pub struct ArtifactReport {
    /// Organization that was scanned.
    pub organization: String,
    /// Retained artifacts grouped by repository.
    pub overview: Overview,
    /// Number of repositories listed, including those without artifacts.
    pub repositories_scanned: usize,
    /// Number of expired artifacts that were dropped.
    pub artifacts_skipped: usize,
}

impl ArtifactReport {
    /// Sum of retained artifact sizes in bytes.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.overview.total_size()
    }
}

impl Serialize for ArtifactReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ArtifactReport", 5)?;
        state.serialize_field("organization", &self.organization)?;
        state.serialize_field("overview", &self.overview)?;
        state.serialize_field("repositories_scanned", &self.repositories_scanned)?;
        state.serialize_field("artifacts_skipped", &self.artifacts_skipped)?;
        state.serialize_field("total_size_in_bytes", &self.total_size())?;
        state.end()
    }
}

/// Builds the artifact overview for `org`.
///
/// Repositories and artifacts are processed strictly in the order the source
/// returns them, one request at a time. The first failure (listing error or
/// malformed or missing expiration timestamp while skipping expired
/// artifacts) aborts the run.
#[instrument(skip(source, on_event), fields(ignore_expired = options.ignore_expired))]
pub async fn build_report<S, F>(
    source: &S,
    org: &str,
    options: ReportOptions,
    mut on_event: F,
) -> Result<ArtifactReport>
where
    S: ArtifactSource + ?Sized,
    F: FnMut(ScanEvent<'_>),
{
    on_event(ScanEvent::FetchingRepositories { org });
    let repos = source.list_repositories(org).await?;

    let mut overview = Overview::new();
    let mut artifacts_skipped = 0usize;

    for repo in &repos {
        on_event(ScanEvent::FetchingArtifacts { repo: &repo.name });
        let artifacts = source.list_artifacts(org, &repo.name).await?;

        let mut retained = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            if options.ignore_expired && artifact_expired(&artifact, options.now)? {
                on_event(ScanEvent::SkippedExpired {
                    repo: &repo.name,
                    artifact: &artifact.name,
                });
                artifacts_skipped += 1;
                continue;
            }
            retained.push(artifact);
        }

        debug!(repo = %repo.name, retained = retained.len(), "Processed repository");
        overview.insert(repo.name.clone(), retained);
    }

    info!(
        repositories = repos.len(),
        with_artifacts = overview.len(),
        artifacts = overview.artifact_count(),
        skipped = artifacts_skipped,
        total_size_in_bytes = overview.total_size(),
        "Artifact overview built"
    );

    Ok(ArtifactReport {
        organization: org.to_string(),
        overview,
        repositories_scanned: repos.len(),
        artifacts_skipped,
    })
}

fn artifact_expired(artifact: &ArtifactRecord, now: DateTime<Utc>) -> Result<bool> {
    let expires_at = artifact.expires_at.as_deref().ok_or_else(|| {
        OverviewError::MissingExpiration {
            artifact: artifact.name.clone(),
        }
    })?;
    is_expired_at(expires_at, now)
}

/// Pretty formatter that writes every non-ASCII character (and DEL) as a
/// lowercase `\uXXXX` escape, using surrogate pairs outside the BMP.
struct AsciiPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> AsciiPrettyFormatter<'a> {
    fn with_indent(indent: &'a [u8]) -> Self {
        Self {
            inner: PrettyFormatter::with_indent(indent),
        }
    }
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c < '\x7f' {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}

/// Serializes the overview as JSON indented with four spaces.
///
/// Non-ASCII text in names and timestamps is written as `\uXXXX` escapes so
/// the file is plain ASCII.
pub fn overview_json(overview: &Overview) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = AsciiPrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    overview.serialize(&mut serializer)?;
    Ok(buf)
}

/// Writes the overview to `path`, replacing any existing file.
///
/// The document is serialized fully before the file is touched.
#[instrument(skip(overview), fields(path = %path.display()))]
pub fn write_overview(overview: &Overview, path: &Path) -> Result<()> {
    let contents = overview_json(overview)?;

    std::fs::write(path, contents).map_err(|source| OverviewError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Overview written");
    Ok(())
}
