//! Status validator: aggregates CI signal sources and decides readiness.
//!
//! A [`StatusValidator`] is constructed once per (owner, repo, ref) and
//! reused across polls; every [`Validator::validate`] call produces a
//! fresh, independently owned [`Validation`] snapshot.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use refgate_github::api::ListOptions;
use refgate_github::StatusClient;
use serde::Serialize;
use tracing::debug;

use crate::error::ValidateError;
use crate::multierror::MultiError;
use crate::status::{collect_job_statuses, JobState, JobStatus};

/// A named check that can decide whether a ref is ready.
#[async_trait]
pub trait Validator: Send + Sync {
    /// Name under which this validator's own job reports.
    fn name(&self) -> &str;

    /// Take one status snapshot of the ref.
    ///
    /// "Not yet green" is a normal outcome (`succeeded == false`), never
    /// an error; errors mean the status could not be determined at all.
    async fn validate(&self) -> Result<Validation, ValidateError>;
}

/// Result of one validation pass; immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct Validation {
    /// Names of the jobs in the requirement set, upstream order preserved.
    /// The validator's own job is never listed here.
    pub total_jobs: Vec<String>,

    /// Names from `total_jobs` that have reached success, same order.
    pub complete_jobs: Vec<String>,

    /// Whether every fetched job (including the self job) succeeded.
    pub succeeded: bool,

    /// When this snapshot was taken.
    pub checked_at: DateTime<Utc>,
}

impl Validation {
    /// Jobs still missing from `complete_jobs`, order preserved.
    ///
    /// Duplicate names are matched occurrence by occurrence, so a name
    /// reported twice with one success still shows up once here.
    pub fn pending_jobs(&self) -> Vec<&str> {
        let mut remaining: Vec<&str> = self.complete_jobs.iter().map(String::as_str).collect();
        self.total_jobs
            .iter()
            .map(String::as_str)
            .filter(|job| match remaining.iter().position(|c| c == job) {
                Some(idx) => {
                    remaining.remove(idx);
                    false
                }
                None => true,
            })
            .collect()
    }
}

/// Configuration for a [`StatusValidator`].
#[derive(Debug, Clone, Default)]
pub struct ValidatorConfig {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Commit SHA, branch, or tag whose status is evaluated.
    pub git_ref: String,
    /// Job name under which the validator itself reports.
    pub self_job_name: String,
}

impl ValidatorConfig {
    /// Check every field at once, collecting all violations.
    fn validate(&self) -> Result<(), MultiError> {
        let mut errs = MultiError::new();

        if self.repo.is_empty() {
            errs.push("repository name is empty");
        }
        if self.owner.is_empty() {
            errs.push("repository owner is empty");
        }
        if self.git_ref.is_empty() {
            errs.push("repository ref is empty");
        }
        if self.self_job_name.is_empty() {
            errs.push("self job name is empty");
        }

        errs.into_result()
    }
}

/// Validator over the two GitHub CI signal sources.
pub struct StatusValidator {
    config: ValidatorConfig,
    client: Arc<dyn StatusClient>,
}

impl std::fmt::Debug for StatusValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusValidator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl StatusValidator {
    /// Build a validator, reporting every configuration violation at once.
    ///
    /// # Errors
    ///
    /// `ValidateError::Config` listing all empty fields; no usable
    /// instance is returned when any field is invalid.
    pub fn new(
        client: Arc<dyn StatusClient>,
        config: ValidatorConfig,
    ) -> Result<Self, ValidateError> {
        config.validate()?;
        Ok(StatusValidator { config, client })
    }

    /// Fetch and normalize both signal sources, combined statuses first.
    async fn fetch_job_statuses(&self) -> Result<Vec<JobStatus>, ValidateError> {
        let opts = ListOptions::default();

        let combined = self
            .client
            .combined_status(
                &self.config.owner,
                &self.config.repo,
                &self.config.git_ref,
                &opts,
            )
            .await?;

        let runs = self
            .client
            .check_runs(
                &self.config.owner,
                &self.config.repo,
                &self.config.git_ref,
                &opts,
            )
            .await?;

        collect_job_statuses(&combined, &runs)
    }
}

#[async_trait]
impl Validator for StatusValidator {
    fn name(&self) -> &str {
        &self.config.self_job_name
    }

    async fn validate(&self) -> Result<Validation, ValidateError> {
        let statuses = self.fetch_job_statuses().await?;

        let mut total_jobs = Vec::with_capacity(statuses.len());
        let mut complete_jobs = Vec::with_capacity(statuses.len());
        let mut success_count = 0usize;

        for status in &statuses {
            // The gate's own invocation implies its own success; it must
            // never block on itself.
            if status.job == self.config.self_job_name {
                success_count += 1;
                continue;
            }

            total_jobs.push(status.job.clone());
            if status.state == JobState::Success {
                complete_jobs.push(status.job.clone());
                success_count += 1;
            }
        }

        let succeeded = success_count == statuses.len();
        debug!(
            git_ref = %self.config.git_ref,
            total = total_jobs.len(),
            complete = complete_jobs.len(),
            succeeded,
            "evaluated ref status"
        );

        Ok(Validation {
            total_jobs,
            complete_jobs,
            succeeded,
            checked_at: Utc::now(),
        })
    }
}
