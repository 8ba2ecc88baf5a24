// SPDX-License-Identifier: Apache-2.0

//! Records fetched from the GitHub REST API.
//!
//! Only the fields the overview needs are deserialized; everything else in the
//! API response is ignored. Timestamps are kept as the exact strings GitHub
//! returned so the written overview reproduces them verbatim; GitHub may send
//! `null` for either of them, which is carried through as `None`.

use serde::{Deserialize, Serialize};

/// A repository in the organization listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositorySummary {
    /// Repository name, without the owner prefix.
    pub name: String,
}

/// Reference to the workflow run that produced an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WorkflowRunRef {
    /// Workflow run identifier.
    pub id: u64,
}

/// Artifact resource as returned by `GET /repos/{owner}/{repo}/actions/artifacts`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteArtifact {
    /// Artifact name.
    pub name: String,
    /// Size in bytes.
    pub size_in_bytes: u64,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Expiration timestamp.
    pub expires_at: Option<String>,
    /// Producing workflow run.
    pub workflow_run: WorkflowRunRef,
}

/// An artifact as it appears in the overview.
///
/// Field order matches the order of keys in the written JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    /// Artifact name.
    pub name: String,
    /// Size in bytes.
    pub size_in_bytes: u64,
    /// Creation timestamp, verbatim from the API. Written as `null` when absent.
    pub created_at: Option<String>,
    /// Expiration timestamp, verbatim from the API. Written as `null` when absent.
    pub expires_at: Option<String>,
    /// Workflow run that produced the artifact.
    pub workflow_run_id: u64,
}

impl From<RemoteArtifact> for ArtifactRecord {
    fn from(remote: RemoteArtifact) -> Self {
        Self {
            name: remote.name,
            size_in_bytes: remote.size_in_bytes,
            created_at: remote.created_at,
            expires_at: remote.expires_at,
            workflow_run_id: remote.workflow_run.id,
        }
    }
}
