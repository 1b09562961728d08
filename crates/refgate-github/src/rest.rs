//! GitHub REST API client.
//!
//! Implements [`StatusClient`] over the v3 REST endpoints:
//! - `GET /repos/{owner}/{repo}/commits/{ref}/status`
//! - `GET /repos/{owner}/{repo}/commits/{ref}/check-runs`

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::{CheckRunList, CombinedStatus, ListOptions};
use crate::client::{GithubResult, StatusClient};
use crate::error::GithubError;

const DEFAULT_API_URL: &str = "https://api.github.com";
const API_VERSION: &str = "2022-11-28";

/// GitHub API configuration
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// API base URL (override for GitHub Enterprise or test servers)
    pub api_url: String,
    /// Authentication token (optional for public repositories)
    pub token: Option<String>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        GithubConfig {
            api_url: std::env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            token: std::env::var("GITHUB_TOKEN").ok(),
        }
    }
}

impl GithubConfig {
    /// Create a new config from environment variables
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create config for a specific API endpoint
    pub fn new(api_url: &str) -> Self {
        GithubConfig {
            api_url: api_url.to_string(),
            token: None,
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }
}

/// REST implementation of [`StatusClient`]
pub struct RestClient {
    config: GithubConfig,
    http_client: reqwest::Client,
}

impl RestClient {
    /// Create a new REST client
    pub fn new(config: GithubConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("refgate/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        RestClient {
            config,
            http_client,
        }
    }

    /// Create a client from environment variables
    pub fn from_env() -> Self {
        Self::new(GithubConfig::from_env())
    }

    fn status_url(&self, owner: &str, repo: &str, git_ref: &str) -> String {
        format!(
            "{}/repos/{}/{}/commits/{}/status",
            self.config.api_url.trim_end_matches('/'),
            owner,
            repo,
            git_ref
        )
    }

    fn check_runs_url(&self, owner: &str, repo: &str, git_ref: &str) -> String {
        format!(
            "{}/repos/{}/{}/commits/{}/check-runs",
            self.config.api_url.trim_end_matches('/'),
            owner,
            repo,
            git_ref
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        opts: &ListOptions,
    ) -> GithubResult<T> {
        debug!(url, "fetching from GitHub API");

        let mut request = self
            .http_client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION);

        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }
        if let Some(page) = opts.page {
            request = request.query(&[("page", page)]);
        }
        if let Some(per_page) = opts.per_page {
            request = request.query(&[("per_page", per_page)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GithubError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl StatusClient for RestClient {
    async fn combined_status(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
        opts: &ListOptions,
    ) -> GithubResult<CombinedStatus> {
        let url = self.status_url(owner, repo, git_ref);
        self.get_json(&url, opts).await
    }

    async fn check_runs(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
        opts: &ListOptions,
    ) -> GithubResult<CheckRunList> {
        let url = self.check_runs_url(owner, repo, git_ref);
        self.get_json(&url, opts).await
    }
}
