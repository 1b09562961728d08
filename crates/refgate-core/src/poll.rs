//! Polling loop that waits for a ref to go green.
//!
//! The loop performs no retries of its own: a validation error is
//! terminal, and "not yet green" just waits one interval. The overall
//! deadline also bounds in-flight fetches, so a hung request cannot
//! outlive the timeout.

use std::time::Duration;

use thiserror::Error;
use tracing::info;

use crate::error::ValidateError;
use crate::validator::{Validation, Validator};

/// Pacing for the polling loop.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between validation attempts.
    pub interval: Duration,
    /// Overall deadline for the whole loop.
    pub timeout: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        PollConfig {
            interval: Duration::from_secs(10),
            timeout: Duration::from_secs(600),
        }
    }
}

/// Errors that can end the polling loop
#[derive(Error, Debug)]
pub enum PollError {
    /// The deadline expired before every required job succeeded
    #[error("required jobs did not all succeed within {timeout:?}")]
    Timeout {
        timeout: Duration,
        /// Last snapshot taken before the deadline, if any.
        last: Option<Validation>,
    },

    /// A validation attempt failed; propagated unchanged
    #[error(transparent)]
    Validate(#[from] ValidateError),
}

/// Poll until every required job on the ref has succeeded.
///
/// Returns the green snapshot on success. Validation errors abort the
/// loop immediately; deadline expiry yields [`PollError::Timeout`]
/// carrying the last snapshot for reporting.
pub async fn poll_until_green(
    validator: &dyn Validator,
    config: &PollConfig,
) -> Result<Validation, PollError> {
    let deadline = tokio::time::Instant::now() + config.timeout;
    let mut last: Option<Validation> = None;

    loop {
        let result = match tokio::time::timeout_at(deadline, validator.validate()).await {
            Ok(outcome) => outcome?,
            Err(_) => {
                return Err(PollError::Timeout {
                    timeout: config.timeout,
                    last,
                })
            }
        };

        if result.succeeded {
            info!(
                validator = validator.name(),
                jobs = result.total_jobs.len(),
                "all required jobs succeeded"
            );
            return Ok(result);
        }

        info!(
            validator = validator.name(),
            complete = result.complete_jobs.len(),
            total = result.total_jobs.len(),
            pending = ?result.pending_jobs(),
            "required jobs still incomplete"
        );
        last = Some(result);

        if tokio::time::timeout_at(deadline, tokio::time::sleep(config.interval))
            .await
            .is_err()
        {
            return Err(PollError::Timeout {
                timeout: config.timeout,
                last,
            });
        }
    }
}
