use std::time::Duration;
use url::Url;

use crate::error::{RepoViewerError, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Settings for the HTTP-backed fetch client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: format!("github-repo-viewer/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Checks the settings before a client is built from them.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api_base_url).map_err(|e| {
            RepoViewerError::Config(format!("Invalid API base URL '{}': {}", self.api_base_url, e))
        })?;

        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(RepoViewerError::Config(format!(
                "API base URL must be an http(s) URL: {}",
                self.api_base_url
            )));
        }

        if self.timeout.is_zero() {
            return Err(RepoViewerError::Config("Timeout must be greater than zero".to_string()));
        }

        Ok(())
    }
}
