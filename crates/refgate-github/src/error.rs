//! Error types for the GitHub client layer

use thiserror::Error;

/// Errors that can occur when talking to the GitHub API
#[derive(Error, Debug)]
pub enum GithubError {
    /// The API answered with a non-success status code
    #[error("GitHub API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (connection, TLS, decode, timeout)
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for GithubError {
    fn from(err: reqwest::Error) -> Self {
        GithubError::Http(err.to_string())
    }
}
