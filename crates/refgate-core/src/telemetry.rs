//! Tracing setup shared by refgate binaries.
//!
//! `RUST_LOG` always takes precedence over the flags. Calling
//! [`init_tracing`] more than once is a no-op — the global subscriber
//! can only be installed once per process.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// * `json` — emit newline-delimited JSON log lines instead of the
///   human-readable format.
/// * `verbose` — default to `debug` level when `RUST_LOG` is not set
///   (otherwise `info`).
pub fn init_tracing(json: bool, verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().with_target(false).json())
            .try_init()
            .ok();
    } else {
        registry
            .with(fmt::layer().with_target(false))
            .try_init()
            .ok();
    }
}
