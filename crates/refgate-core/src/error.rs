//! Error types for the validation engine

use refgate_github::GithubError;
use thiserror::Error;

use crate::multierror::MultiError;

/// Errors that can occur while constructing or running a validator
#[derive(Error, Debug)]
pub enum ValidateError {
    /// One or more required configuration fields were missing
    #[error("invalid validator configuration: {0}")]
    Config(#[from] MultiError),

    /// A combined-status entry was missing its context or state
    #[error("github combined status response is invalid (context: {context:?}, state: {state:?})")]
    InvalidCombinedStatus {
        context: Option<String>,
        state: Option<String>,
    },

    /// A check-run entry was missing its name or status
    #[error("github check run response is invalid (name: {name:?}, status: {status:?})")]
    InvalidCheckRun {
        name: Option<String>,
        status: Option<String>,
    },

    /// The underlying API call failed; propagated unchanged
    #[error(transparent)]
    Github(#[from] GithubError),
}
