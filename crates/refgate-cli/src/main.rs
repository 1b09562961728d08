//! refgate - CI status gate for GitHub refs
//!
//! The `refgate` command polls the commit-status and check-run APIs for
//! a ref and exits 0 once every required job has succeeded. Designed to
//! run as a job itself: its own job name is excluded from the
//! requirement set so it never blocks on its own pending state.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use refgate_core::{
    init_tracing, poll_until_green, PollConfig, PollError, StatusValidator, Validation, Validator,
    ValidatorConfig,
};
use refgate_github::{GithubConfig, RestClient};
use tracing::info;

#[derive(Parser)]
#[command(name = "refgate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Hold a merge gate until every CI job on a ref is green", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines and snapshots
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wait until every required CI job for a ref has succeeded
    Validate {
        /// Repository owner (user or organization)
        #[arg(short, long)]
        owner: String,

        /// Repository name
        #[arg(short, long)]
        repo: String,

        /// Commit SHA, branch, or tag to inspect
        #[arg(long = "ref")]
        git_ref: String,

        /// Job name under which this gate itself reports
        #[arg(long, default_value = "refgate")]
        self_job: String,

        /// GitHub API token
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// GitHub API base URL
        #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
        api_url: String,

        /// Seconds between validation attempts
        #[arg(long, default_value = "10")]
        interval: u64,

        /// Overall deadline in seconds
        #[arg(long, default_value = "600")]
        timeout: u64,

        /// Check once and exit instead of polling
        #[arg(long)]
        once: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.json, cli.verbose);

    match cli.command {
        Commands::Validate {
            owner,
            repo,
            git_ref,
            self_job,
            token,
            api_url,
            interval,
            timeout,
            once,
        } => {
            cmd_validate(
                &owner, &repo, &git_ref, &self_job, token, &api_url, interval, timeout, once,
                cli.json,
            )
            .await
        }
    }
}

#[allow(clippy::too_many_arguments)]
async fn cmd_validate(
    owner: &str,
    repo: &str,
    git_ref: &str,
    self_job: &str,
    token: Option<String>,
    api_url: &str,
    interval: u64,
    timeout: u64,
    once: bool,
    json: bool,
) -> Result<()> {
    let mut github_config = GithubConfig::new(api_url);
    if let Some(token) = &token {
        github_config = github_config.with_token(token);
    }
    let client = Arc::new(RestClient::new(github_config));

    let validator = StatusValidator::new(
        client,
        ValidatorConfig {
            owner: owner.to_string(),
            repo: repo.to_string(),
            git_ref: git_ref.to_string(),
            self_job_name: self_job.to_string(),
        },
    )
    .context("invalid gate configuration")?;

    info!(owner, repo, git_ref, "starting status gate");

    if once {
        let result = validator.validate().await?;
        print_snapshot(&result, json)?;
        if !result.succeeded {
            anyhow::bail!(
                "{} of {} required jobs are green",
                result.complete_jobs.len(),
                result.total_jobs.len()
            );
        }
        return Ok(());
    }

    let poll_config = PollConfig {
        interval: Duration::from_secs(interval),
        timeout: Duration::from_secs(timeout),
    };

    match poll_until_green(&validator, &poll_config).await {
        Ok(result) => {
            print_snapshot(&result, json)?;
            println!("All required jobs succeeded.");
            Ok(())
        }
        Err(PollError::Timeout { timeout, last }) => {
            if let Some(snapshot) = &last {
                print_snapshot(snapshot, json)?;
            }
            anyhow::bail!("timed out after {:?} waiting for required jobs", timeout)
        }
        Err(err) => Err(err.into()),
    }
}

/// Render one validation snapshot to stdout.
fn print_snapshot(result: &Validation, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!(
        "Required jobs: {} ({} green)",
        result.total_jobs.len(),
        result.complete_jobs.len()
    );
    for job in &result.total_jobs {
        let mark = if result.complete_jobs.contains(job) {
            "✓"
        } else {
            "·"
        };
        println!("  {} {}", mark, job);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_validate_args_parse_with_defaults() {
        let cli = Cli::try_parse_from([
            "refgate", "validate", "--owner", "octocat", "--repo", "hello-world", "--ref",
            "abc123",
        ])
        .unwrap();

        match cli.command {
            Commands::Validate {
                owner,
                repo,
                git_ref,
                self_job,
                interval,
                timeout,
                once,
                ..
            } => {
                assert_eq!(owner, "octocat");
                assert_eq!(repo, "hello-world");
                assert_eq!(git_ref, "abc123");
                assert_eq!(self_job, "refgate");
                assert_eq!(interval, 10);
                assert_eq!(timeout, 600);
                assert!(!once);
            }
        }
    }

    #[test]
    fn test_validate_requires_repository_coordinates() {
        let result = Cli::try_parse_from(["refgate", "validate", "--owner", "octocat"]);
        assert!(result.is_err());
    }
}
