// SPDX-License-Identifier: Apache-2.0

//! Artifact source abstraction.
//!
//! The report builder only needs two listings: the repositories of an
//! organization and the artifacts of one repository. [`ArtifactSource`]
//! captures that contract so the builder can run against GitHub
//! ([`crate::github::GitHubClient`]) or against fixed data in tests.

use async_trait::async_trait;

use crate::Result;
use crate::models::{ArtifactRecord, RepositorySummary};

/// Provides repository and artifact listings for an organization.
///
/// Implementations must return complete listings (every page) in the order
/// the backing service returns them, and fail on the first error.
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    /// Lists every repository of the organization.
    async fn list_repositories(&self, org: &str) -> Result<Vec<RepositorySummary>>;

    /// Lists every artifact of `owner/repo`.
    async fn list_artifacts(&self, owner: &str, repo: &str) -> Result<Vec<ArtifactRecord>>;
}
