// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! Provides an authenticated REST client that lists organization repositories
//! and repository artifacts, following `Link` pagination to the last page.

use std::time::Duration;

use async_trait::async_trait;
use octocrab::{Octocrab, Page};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use crate::Result;
use crate::config::GitHubConfig;
use crate::models::{ArtifactRecord, RemoteArtifact, RepositorySummary};
use crate::source::ArtifactSource;

pub mod pagination;

pub use pagination::{PageChunk, collect_pages};

/// Characters escaped when an owner or repository name is placed in a route.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Route of the first page of an organization's repositories.
#[must_use]
pub fn repositories_route(org: &str, per_page: u8) -> String {
    format!(
        "/orgs/{}/repos?per_page={per_page}",
        utf8_percent_encode(org, PATH_SEGMENT)
    )
}

/// Route of the first page of a repository's artifacts.
#[must_use]
pub fn artifacts_route(owner: &str, repo: &str, per_page: u8) -> String {
    format!(
        "/repos/{}/{}/actions/artifacts?per_page={per_page}",
        utf8_percent_encode(owner, PATH_SEGMENT),
        utf8_percent_encode(repo, PATH_SEGMENT)
    )
}

/// Creates an authenticated Octocrab client for the configured API host.
///
/// The token is sent verbatim as a bearer credential.
///
/// # Errors
///
/// Returns an error if the base URL is invalid or the client cannot be built.
#[instrument(skip(token, config), fields(api_url = %config.api_url))]
pub fn create_client(token: &SecretString, config: &GitHubConfig) -> Result<Octocrab> {
    let timeout = Duration::from_secs(config.api_timeout_seconds);

    let client = Octocrab::builder()
        .base_uri(config.api_url.as_str())?
        .personal_token(token.expose_secret().to_string())
        .set_connect_timeout(Some(timeout))
        .set_read_timeout(Some(timeout))
        .build()?;

    debug!("Created authenticated GitHub client");
    Ok(client)
}

/// Fetches one page at `cursor` and extracts the next-page cursor.
async fn fetch_page<T: DeserializeOwned>(
    client: &Octocrab,
    cursor: String,
) -> Result<PageChunk<T>> {
    let page: Page<T> = client.get(cursor, None::<&()>).await?;
    let next = page.next.as_ref().map(ToString::to_string);
    Ok(PageChunk {
        items: page.items,
        next,
    })
}

/// GitHub-backed [`ArtifactSource`].
pub struct GitHubClient {
    client: Octocrab,
    per_page: u8,
}

impl GitHubClient {
    /// Wraps an existing Octocrab client.
    #[must_use]
    pub fn new(client: Octocrab, per_page: u8) -> Self {
        Self { client, per_page }
    }

    /// Builds a client from a token and GitHub settings.
    pub fn from_config(token: &SecretString, config: &GitHubConfig) -> Result<Self> {
        let client = create_client(token, config)?;
        Ok(Self::new(client, config.effective_per_page()))
    }
}

#[async_trait]
impl ArtifactSource for GitHubClient {
    #[instrument(skip(self))]
    async fn list_repositories(&self, org: &str) -> Result<Vec<RepositorySummary>> {
        let client = &self.client;
        let repos = collect_pages(repositories_route(org, self.per_page), |cursor| {
            fetch_page::<RepositorySummary>(client, cursor)
        })
        .await?;

        info!(count = repos.len(), "Listed organization repositories");
        Ok(repos)
    }

    #[instrument(skip(self))]
    async fn list_artifacts(&self, owner: &str, repo: &str) -> Result<Vec<ArtifactRecord>> {
        let client = &self.client;
        let artifacts = collect_pages(artifacts_route(owner, repo, self.per_page), |cursor| {
            fetch_page::<RemoteArtifact>(client, cursor)
        })
        .await?;

        debug!(count = artifacts.len(), "Listed repository artifacts");
        Ok(artifacts.into_iter().map(ArtifactRecord::from).collect())
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("per_page", &self.per_page)
            .finish_non_exhaustive()
    }
}
