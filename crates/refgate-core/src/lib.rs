//! refgate core - CI status aggregation and gating
//!
//! Collects the two CI signal sources for a git ref (legacy status
//! contexts and modern check runs), normalizes them into a single
//! job-status model, and decides whether every required job has
//! succeeded. The gate's own job is excluded from the requirement set
//! so it can never block on itself.

pub mod error;
pub mod multierror;
pub mod poll;
pub mod status;
pub mod telemetry;
pub mod validator;

// Re-export key types
pub use error::ValidateError;
pub use multierror::MultiError;
pub use poll::{poll_until_green, PollConfig, PollError};
pub use status::{JobState, JobStatus};
pub use telemetry::init_tracing;
pub use validator::{StatusValidator, Validation, Validator, ValidatorConfig};

/// refgate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
