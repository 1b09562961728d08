//! Normalized job-status model across both CI signal sources.
//!
//! The combined-status API reports a state string per context; the
//! check-run API reports a lifecycle status plus, once completed, a
//! conclusion. Both are flattened here into one closed [`JobState`] per
//! job, with unknown signals mapped conservatively.

use std::fmt;

use refgate_github::api::{CheckRunList, CombinedStatus};
use serde::{Deserialize, Serialize};

use crate::error::ValidateError;

/// Check-run lifecycle status that marks a run as finished.
const CHECK_RUN_COMPLETED_STATUS: &str = "completed";

/// Check-run conclusions counted as success.
const CHECK_RUN_SUCCESS_CONCLUSIONS: &[&str] = &["neutral", "success"];

/// State of one CI job, normalized across both signal sources.
///
/// There is no unknown variant: unrecognized signals map to `Error`
/// (conclusions, state strings) or `Pending` (unfinished runs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Success,
    Error,
    Pending,
}

impl JobState {
    /// Map a combined-status state string onto the closed state set.
    ///
    /// Only `success` and `pending` are meaningful to the gate; every
    /// other state (`failure`, `error`, unrecognized) blocks success.
    fn from_commit_state(state: &str) -> Self {
        match state {
            "success" => JobState::Success,
            "pending" => JobState::Pending,
            _ => JobState::Error,
        }
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobState::Success => write!(f, "success"),
            JobState::Error => write!(f, "error"),
            JobState::Pending => write!(f, "pending"),
        }
    }
}

/// One CI job on one ref.
///
/// Job names come verbatim from upstream and are not deduplicated: a name
/// reported by both signal sources yields two independent records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStatus {
    /// Job or check name.
    pub job: String,
    /// Normalized state.
    pub state: JobState,
}

/// Flatten both signal sources into one ordered job list.
///
/// Combined-status entries come first, then check runs, each in upstream
/// order. An entry missing a required field aborts the whole collection
/// with a tagged error carrying the observed values; no partial list is
/// ever returned.
pub(crate) fn collect_job_statuses(
    combined: &CombinedStatus,
    runs: &CheckRunList,
) -> Result<Vec<JobStatus>, ValidateError> {
    let mut jobs = Vec::with_capacity(combined.statuses.len() + runs.check_runs.len());

    for entry in &combined.statuses {
        match (&entry.context, &entry.state) {
            (Some(context), Some(state)) => jobs.push(JobStatus {
                job: context.clone(),
                state: JobState::from_commit_state(state),
            }),
            _ => {
                return Err(ValidateError::InvalidCombinedStatus {
                    context: entry.context.clone(),
                    state: entry.state.clone(),
                })
            }
        }
    }

    for run in &runs.check_runs {
        match (&run.name, &run.status) {
            (Some(name), Some(status)) => {
                let state = if status != CHECK_RUN_COMPLETED_STATUS {
                    JobState::Pending
                } else {
                    match run.conclusion.as_deref() {
                        Some(c) if CHECK_RUN_SUCCESS_CONCLUSIONS.contains(&c) => JobState::Success,
                        _ => JobState::Error,
                    }
                };
                jobs.push(JobStatus {
                    job: name.clone(),
                    state,
                });
            }
            _ => {
                return Err(ValidateError::InvalidCheckRun {
                    name: run.name.clone(),
                    status: run.status.clone(),
                })
            }
        }
    }

    Ok(jobs)
}
