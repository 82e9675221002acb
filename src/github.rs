use crate::config::ClientConfig;
use crate::error::{RepoViewerError, Result};
use crate::types::{sort_by_stars, Repository};
use chrono::Utc;
use reqwest::header::{ACCEPT, CACHE_CONTROL, PRAGMA};
use reqwest::{Client, StatusCode};
use std::future::Future;
use tracing::{debug, info, warn};
use url::Url;

/// Source of a user's repositories, most-starred first.
///
/// `GitHubClient` talks to the REST API; tests plug in scripted fakes.
pub trait RepositoryFetcher {
    fn fetch(&self, username: &str) -> impl Future<Output = Result<Vec<Repository>>> + Send;
}

pub struct GitHubClient {
    client: Client,
    api_base_url: String,
}

impl GitHubClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(GitHubClient {
            client,
            api_base_url: config.api_base_url,
        })
    }

    /// Builds the repository listing URL with a `_t` timestamp so that no
    /// intermediary can answer from cache.
    pub fn repos_url(&self, username: &str) -> Result<Url> {
        if username.is_empty()
            || username == "."
            || username == ".."
            || username
                .chars()
                .any(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace() || c.is_control())
        {
            return Err(RepoViewerError::InvalidRequest(format!(
                "Invalid username: {:?}",
                username
            )));
        }

        let mut url = Url::parse(&self.api_base_url).map_err(|e| {
            RepoViewerError::InvalidRequest(format!("{}: {}", self.api_base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                RepoViewerError::InvalidRequest(format!("Cannot be a base URL: {}", self.api_base_url))
            })?
            .pop_if_empty()
            .extend(["users", username, "repos"]);

        let now = Utc::now();
        url.query_pairs_mut().append_pair(
            "_t",
            &format!("{}.{:06}", now.timestamp(), now.timestamp_subsec_micros()),
        );

        Ok(url)
    }

    pub async fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        let url = self.repos_url(username)?;
        debug!(%url, username, "Fetching fresh repository list");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github.v3+json")
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| {
                warn!(username, error = %e, "Request failed");
                RepoViewerError::TransportFailure(e)
            })?;

        let status = response.status();
        debug!(%status, username, "Response received");

        if status == StatusCode::NOT_FOUND {
            warn!(username, "GitHub user not found");
            return Err(RepoViewerError::NotFound(username.to_string()));
        }

        let body = response.bytes().await?;
        let mut repos: Vec<Repository> = serde_json::from_slice(&body).map_err(|e| {
            warn!(username, %status, error = %e, "Response body is not a repository list");
            RepoViewerError::DecodeFailure(e)
        })?;

        sort_by_stars(&mut repos);
        info!(username, count = repos.len(), "Fetched repositories");

        Ok(repos)
    }
}

impl RepositoryFetcher for GitHubClient {
    async fn fetch(&self, username: &str) -> Result<Vec<Repository>> {
        self.fetch_repositories(username).await
    }
}
