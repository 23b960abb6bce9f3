use crate::FetchError;
use repopulse_types::{Credentials, RemoteStats};
use repopulse_types::ids::GITHUB_ACCEPT;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use std::time::Duration;

/// Source of repository statistics for the repository named in the credentials.
pub trait StatsSource {
    /// `Ok(None)` means the API answered with an empty object: there is nothing to report.
    fn fetch(&self, credentials: &Credentials) -> Result<Option<RemoteStats>, FetchError>;
}

/// Blocking client for the GitHub REST API (or a compatible endpoint).
pub struct GithubClient {
    http: Client,
    api_base: String,
}

impl GithubClient {
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(concat!("repopulse/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self::from_client(http, api_base))
    }

    /// Wrap a preconfigured client (proxy, TLS or timeout settings chosen by the caller).
    pub fn from_client(http: Client, api_base: &str) -> Self {
        Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    fn repo_url(&self, repository: &str) -> String {
        format!("{}/repos/{}", self.api_base, repository)
    }
}

impl StatsSource for GithubClient {
    fn fetch(&self, credentials: &Credentials) -> Result<Option<RemoteStats>, FetchError> {
        let url = self.repo_url(&credentials.repository);
        tracing::debug!(%url, "fetching repository stats");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&credentials.token)
            .header(ACCEPT, GITHUB_ACCEPT)
            .send()
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().map_err(|source| FetchError::Transport {
            url: url.clone(),
            source,
        })?;
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let stats = RemoteStats::from_json(&value).ok_or_else(|| FetchError::Decode {
            url,
            reason: "expected a JSON object".to_string(),
        })?;
        // Unrecognised keys still count as data; only `{}` does not.
        if value.as_object().is_some_and(|obj| obj.is_empty()) {
            return Ok(None);
        }
        Ok(Some(stats))
    }
}
