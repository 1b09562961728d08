//! Client capability trait for reading CI signal sources.
//!
//! Consumers depend on [`StatusClient`] only — never on a concrete
//! transport. The production implementation lives in `rest`; in-memory
//! doubles live in `fakes`.

use async_trait::async_trait;

use crate::api::{CheckRunList, CombinedStatus, ListOptions};
use crate::error::GithubError;

/// Result type for GitHub client operations
pub type GithubResult<T> = std::result::Result<T, GithubError>;

/// Read access to the two CI signal sources for a ref.
///
/// Guarantees:
/// - Both calls are plain reads with no side effects upstream.
/// - Dropping the returned future cancels any in-flight request.
#[async_trait]
pub trait StatusClient: Send + Sync {
    /// Fetch the combined (legacy) status for a ref.
    async fn combined_status(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
        opts: &ListOptions,
    ) -> GithubResult<CombinedStatus>;

    /// List the check runs for a ref.
    async fn check_runs(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
        opts: &ListOptions,
    ) -> GithubResult<CheckRunList>;
}
