//! End-to-end validation flow against the in-memory fakes.

use std::sync::Arc;

use refgate_core::{PollConfig, StatusValidator, ValidateError, Validator, ValidatorConfig};
use refgate_github::api::{CheckRun, CheckRunList, CombinedStatus, CommitStatus};
use refgate_github::fakes::StaticStatusClient;

fn gatekeeper_config() -> ValidatorConfig {
    ValidatorConfig {
        owner: "octocat".to_string(),
        repo: "hello-world".to_string(),
        git_ref: "abc123".to_string(),
        self_job_name: "gatekeeper".to_string(),
    }
}

fn validator(combined: CombinedStatus, runs: CheckRunList) -> StatusValidator {
    StatusValidator::new(
        Arc::new(StaticStatusClient::new(combined, runs)),
        gatekeeper_config(),
    )
    .unwrap()
}

#[tokio::test]
async fn green_ref_passes_with_jobs_from_both_sources() {
    let combined = CombinedStatus {
        statuses: vec![CommitStatus::new("lint", "success")],
        ..Default::default()
    };
    let runs = CheckRunList {
        check_runs: vec![CheckRun::completed("test", "success")],
        ..Default::default()
    };

    let result = validator(combined, runs).validate().await.unwrap();

    assert!(result.succeeded);
    assert_eq!(result.total_jobs, vec!["lint", "test"]);
    assert_eq!(result.complete_jobs, vec!["lint", "test"]);
}

#[tokio::test]
async fn pending_context_keeps_gate_closed_without_error() {
    let combined = CombinedStatus {
        statuses: vec![CommitStatus::new("lint", "pending")],
        ..Default::default()
    };

    let result = validator(combined, CheckRunList::default())
        .validate()
        .await
        .unwrap();

    assert!(!result.succeeded);
    assert_eq!(result.total_jobs, vec!["lint"]);
    assert!(result.complete_jobs.is_empty());
}

#[tokio::test]
async fn in_progress_check_run_normalizes_to_pending() {
    let runs = CheckRunList {
        check_runs: vec![CheckRun::started("build", "in_progress")],
        ..Default::default()
    };

    let result = validator(CombinedStatus::default(), runs)
        .validate()
        .await
        .unwrap();

    assert!(!result.succeeded);
    assert_eq!(result.pending_jobs(), vec!["build"]);
}

#[tokio::test]
async fn missing_context_yields_tagged_error_and_no_result() {
    let combined = CombinedStatus {
        statuses: vec![CommitStatus {
            state: Some("success".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    };

    let err = validator(combined, CheckRunList::default())
        .validate()
        .await
        .unwrap_err();

    match err {
        ValidateError::InvalidCombinedStatus { context, state } => {
            assert!(context.is_none());
            assert_eq!(state.as_deref(), Some("success"));
        }
        other => panic!("expected InvalidCombinedStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn poll_loop_returns_green_snapshot_through_the_trait_seam() {
    let combined = CombinedStatus {
        statuses: vec![
            CommitStatus::new("gatekeeper", "pending"),
            CommitStatus::new("lint", "success"),
        ],
        ..Default::default()
    };
    let validator = validator(combined, CheckRunList::default());

    let result = refgate_core::poll_until_green(&validator, &PollConfig::default())
        .await
        .unwrap();

    assert!(result.succeeded);
    assert_eq!(result.total_jobs, vec!["lint"]);
}
