//! Contract tests for the StatusClient trait.
//!
//! Verified against the in-memory fakes; any conforming implementation
//! must behave the same way.

use refgate_github::api::{CheckRun, CheckRunList, CombinedStatus, CommitStatus, ListOptions};
use refgate_github::fakes::{FailingStatusClient, StaticStatusClient};
use refgate_github::{GithubError, StatusClient};

fn sample_combined() -> CombinedStatus {
    CombinedStatus {
        statuses: vec![
            CommitStatus::new("ci/lint", "success"),
            CommitStatus::new("ci/test", "pending"),
        ],
        ..Default::default()
    }
}

fn sample_runs() -> CheckRunList {
    CheckRunList {
        check_runs: vec![CheckRun::completed("build", "success")],
        ..Default::default()
    }
}

#[tokio::test]
async fn static_client_returns_configured_combined_status() {
    let client = StaticStatusClient::new(sample_combined(), sample_runs());
    let combined = client
        .combined_status("octocat", "hello-world", "main", &ListOptions::default())
        .await
        .unwrap();

    assert_eq!(combined.statuses.len(), 2);
    assert_eq!(combined.statuses[0].context.as_deref(), Some("ci/lint"));
}

#[tokio::test]
async fn static_client_returns_configured_check_runs() {
    let client = StaticStatusClient::new(sample_combined(), sample_runs());
    let runs = client
        .check_runs("octocat", "hello-world", "main", &ListOptions::default())
        .await
        .unwrap();

    assert_eq!(runs.check_runs.len(), 1);
    assert_eq!(runs.check_runs[0].name.as_deref(), Some("build"));
}

#[tokio::test]
async fn static_client_is_stable_across_calls() {
    let client = StaticStatusClient::new(sample_combined(), sample_runs());

    let first = client
        .combined_status("o", "r", "ref", &ListOptions::default())
        .await
        .unwrap();
    let second = client
        .combined_status("o", "r", "ref", &ListOptions::default())
        .await
        .unwrap();

    assert_eq!(first.statuses.len(), second.statuses.len());
}

#[tokio::test]
async fn empty_client_returns_empty_lists() {
    let client = StaticStatusClient::empty();

    let combined = client
        .combined_status("o", "r", "ref", &ListOptions::default())
        .await
        .unwrap();
    let runs = client
        .check_runs("o", "r", "ref", &ListOptions::default())
        .await
        .unwrap();

    assert!(combined.statuses.is_empty());
    assert!(runs.check_runs.is_empty());
}

#[tokio::test]
async fn failing_client_errors_on_both_reads() {
    let client = FailingStatusClient::new("connection refused");

    let combined_err = client
        .combined_status("o", "r", "ref", &ListOptions::default())
        .await
        .unwrap_err();
    let runs_err = client
        .check_runs("o", "r", "ref", &ListOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(combined_err, GithubError::Http(_)));
    assert!(matches!(runs_err, GithubError::Http(_)));
    assert!(combined_err.to_string().contains("connection refused"));
}
