//! In-memory fakes for the status client (testing only)
//!
//! Provides `StaticStatusClient` and `FailingStatusClient` that satisfy the
//! [`StatusClient`] contract without any network dependency.

use async_trait::async_trait;

use crate::api::{CheckRunList, CombinedStatus, ListOptions};
use crate::client::{GithubResult, StatusClient};
use crate::error::GithubError;

/// Client that answers every request with fixed responses.
#[derive(Debug, Default)]
pub struct StaticStatusClient {
    combined: CombinedStatus,
    runs: CheckRunList,
}

impl StaticStatusClient {
    /// Answer with the given combined status and check-run list.
    pub fn new(combined: CombinedStatus, runs: CheckRunList) -> Self {
        StaticStatusClient { combined, runs }
    }

    /// Answer with no statuses and no check runs.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StatusClient for StaticStatusClient {
    async fn combined_status(
        &self,
        _owner: &str,
        _repo: &str,
        _git_ref: &str,
        _opts: &ListOptions,
    ) -> GithubResult<CombinedStatus> {
        Ok(self.combined.clone())
    }

    async fn check_runs(
        &self,
        _owner: &str,
        _repo: &str,
        _git_ref: &str,
        _opts: &ListOptions,
    ) -> GithubResult<CheckRunList> {
        Ok(self.runs.clone())
    }
}

/// Client whose every call fails with a configured transport error.
#[derive(Debug)]
pub struct FailingStatusClient {
    message: String,
}

impl FailingStatusClient {
    pub fn new(message: &str) -> Self {
        FailingStatusClient {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl StatusClient for FailingStatusClient {
    async fn combined_status(
        &self,
        _owner: &str,
        _repo: &str,
        _git_ref: &str,
        _opts: &ListOptions,
    ) -> GithubResult<CombinedStatus> {
        Err(GithubError::Http(self.message.clone()))
    }

    async fn check_runs(
        &self,
        _owner: &str,
        _repo: &str,
        _git_ref: &str,
        _opts: &ListOptions,
    ) -> GithubResult<CheckRunList> {
        Err(GithubError::Http(self.message.clone()))
    }
}
