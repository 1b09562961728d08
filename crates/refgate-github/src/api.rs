//! Wire model for the commit-status and check-run endpoints.
//!
//! Every upstream field is optional. The REST API does not guarantee their
//! presence, and downstream validation needs to see exactly which fields
//! were absent — so nothing is defaulted or rejected at this layer.

use serde::{Deserialize, Serialize};

/// Pagination options forwarded to list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListOptions {
    /// Page number of the results to fetch (1-based).
    pub page: Option<u32>,
    /// Number of results per page.
    pub per_page: Option<u32>,
}

/// Combined status for a ref, as returned by
/// `GET /repos/{owner}/{repo}/commits/{ref}/status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombinedStatus {
    /// Rolled-up state reported by GitHub (unused by the gate, which
    /// aggregates the individual contexts itself).
    #[serde(default)]
    pub state: Option<String>,

    /// Total number of status contexts.
    #[serde(default)]
    pub total_count: Option<u64>,

    /// Individual status contexts.
    #[serde(default)]
    pub statuses: Vec<CommitStatus>,
}

/// One legacy status context on a commit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitStatus {
    /// Context name identifying the job.
    #[serde(default)]
    pub context: Option<String>,

    /// State string: `success`, `error`, `failure`, or `pending`.
    #[serde(default)]
    pub state: Option<String>,

    /// Short description supplied by the reporter.
    #[serde(default)]
    pub description: Option<String>,

    /// Link to the reporter's details page.
    #[serde(default)]
    pub target_url: Option<String>,
}

impl CommitStatus {
    /// Convenience constructor for a fully-populated context.
    pub fn new(context: &str, state: &str) -> Self {
        CommitStatus {
            context: Some(context.to_string()),
            state: Some(state.to_string()),
            ..Default::default()
        }
    }
}

/// Check runs for a ref, as returned by
/// `GET /repos/{owner}/{repo}/commits/{ref}/check-runs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckRunList {
    /// Total number of check runs.
    #[serde(default)]
    pub total_count: Option<u64>,

    /// Individual check runs.
    #[serde(default)]
    pub check_runs: Vec<CheckRun>,
}

/// One check run on a commit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckRun {
    /// Check run name identifying the job.
    #[serde(default)]
    pub name: Option<String>,

    /// Lifecycle status: `queued`, `in_progress`, or `completed`.
    #[serde(default)]
    pub status: Option<String>,

    /// Conclusion, present once the run is completed: `success`, `failure`,
    /// `neutral`, `cancelled`, `timed_out`, `action_required`, `skipped`, ...
    #[serde(default)]
    pub conclusion: Option<String>,

    /// Link to the run's details page.
    #[serde(default)]
    pub details_url: Option<String>,
}

impl CheckRun {
    /// Convenience constructor for a completed run with a conclusion.
    pub fn completed(name: &str, conclusion: &str) -> Self {
        CheckRun {
            name: Some(name.to_string()),
            status: Some("completed".to_string()),
            conclusion: Some(conclusion.to_string()),
            ..Default::default()
        }
    }

    /// Convenience constructor for a run that has not completed yet.
    pub fn started(name: &str, status: &str) -> Self {
        CheckRun {
            name: Some(name.to_string()),
            status: Some(status.to_string()),
            ..Default::default()
        }
    }
}
