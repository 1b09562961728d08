//! GitHub capability layer for refgate
//!
//! Exposes the two read operations the gate depends on:
//! - the combined status for a ref (legacy status contexts)
//! - the check runs for a ref (GitHub Actions and other check suites)
//!
//! The [`StatusClient`] trait is the seam consumers program against;
//! [`RestClient`] is the production implementation over the GitHub v3
//! REST API, and the `fakes` module provides in-memory doubles for tests.

pub mod api;
pub mod client;
pub mod error;
pub mod fakes;
pub mod rest;

pub use api::{CheckRun, CheckRunList, CombinedStatus, CommitStatus, ListOptions};
pub use client::{GithubResult, StatusClient};
pub use error::GithubError;
pub use rest::{GithubConfig, RestClient};
