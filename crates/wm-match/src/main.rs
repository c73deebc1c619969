use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;
use wm_common::WeekDay;
use wm_common::api::assign_request::AssignTaskRequest;
use wm_common::api::recommendation::Recommendation;
use wm_common::logging::{init_tracing_subscriber, install_tracing_panic_hook};
use wm_common::matching::find_best_worker_for;
use wm_common::seed::{SeedError, default_snapshot, load_snapshot};
use wm_common::store::{InMemoryWorkerStore, StoreError, WorkerStore};

#[derive(Debug, Parser)]
#[command(name = "wm-match", about = "Recommend the best worker for a task")]
struct Cli {
    /// Task type to staff, e.g. "Review"
    #[arg(long)]
    task_type: String,

    /// Hours the task needs
    #[arg(long)]
    hours: u32,

    /// Last weekday (Monday..Friday) the work may happen on
    #[arg(long)]
    deadline: String,

    /// Starting weekday; defaults to today's local weekday
    #[arg(long)]
    today: Option<String>,

    /// JSON snapshot of task types and workers; defaults to the built-in seed
    #[arg(long, env = "WM_SEED_PATH")]
    workers: Option<PathBuf>,

    /// Print the recommendation as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Seed(#[from] SeedError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Match(#[from] wm_common::matching::MatchError),
    #[error("failed to render recommendation: {0}")]
    Render(#[from] serde_json::Error),
}

fn load_workers(path: Option<&PathBuf>) -> Result<InMemoryWorkerStore, CliError> {
    let snapshot = match path {
        Some(path) => load_snapshot(path)?,
        None => default_snapshot(),
    };
    Ok(InMemoryWorkerStore::from_snapshot(snapshot)?)
}

fn recommend(cli: &Cli) -> Result<Recommendation, CliError> {
    let request = AssignTaskRequest {
        task_type: cli.task_type.clone(),
        required_hours: cli.hours,
        deadline_day: cli.deadline.clone(),
        today_day: cli.today.clone(),
    };
    let task = request.resolve(WeekDay::today_local)?;
    let workers = load_workers(cli.workers.as_ref())?.snapshot();

    let outcome = find_best_worker_for(&workers, &task);
    Ok(Recommendation::from_outcome(&outcome, &task))
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let recommendation = recommend(cli)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
    } else {
        println!("{}", recommendation.message);
    }
    Ok(())
}

/// Help and version requests exit 0; any other usage error counts as invalid input.
fn usage_exit_code(err: &clap::Error) -> ExitCode {
    if err.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn main() -> ExitCode {
    dotenv().ok();
    init_tracing_subscriber(env!("CARGO_PKG_NAME"));
    install_tracing_panic_hook(env!("CARGO_PKG_NAME"));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return usage_exit_code(&err);
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "wm-match failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["wm-match"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn recommends_from_builtin_seed() {
        let cli = cli(&[
            "--task-type", "Marketing", "--hours", "20", "--deadline", "Thursday", "--today", "Monday",
        ]);

        let recommendation = recommend(&cli).unwrap();
        // Bob: 4 x 6h = 24
        assert_eq!(recommendation.worker_name.as_deref(), Some("Bob"));
        assert_eq!(recommendation.total_availability, Some(24));
    }

    #[test]
    fn reports_no_match_without_failing() {
        let cli = cli(&[
            "--task-type", "Design", "--hours", "100", "--deadline", "Friday", "--today", "Monday",
        ]);

        let recommendation = recommend(&cli).unwrap();
        assert!(!recommendation.matched);
    }

    #[test]
    fn weekend_today_is_an_error() {
        let cli = cli(&[
            "--task-type", "Design", "--hours", "1", "--deadline", "Friday", "--today", "Sunday",
        ]);

        assert!(matches!(recommend(&cli), Err(CliError::Match(_))));
    }

    #[test]
    fn malformed_hours_exit_with_failure() {
        for hours in ["-1", "abc"] {
            let err = Cli::try_parse_from([
                "wm-match", "--task-type", "Review", "--hours", hours, "--deadline", "Friday",
                "--today", "Monday",
            ])
            .unwrap_err();

            assert_eq!(usage_exit_code(&err), ExitCode::FAILURE);
        }
    }

    #[test]
    fn help_exits_successfully() {
        let err = Cli::try_parse_from(["wm-match", "--help"]).unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert_eq!(usage_exit_code(&err), ExitCode::SUCCESS);
    }

    #[test]
    fn unreadable_snapshot_is_an_error() {
        let cli = cli(&[
            "--task-type", "Design", "--hours", "1", "--deadline", "Friday", "--today", "Monday",
            "--workers", "/nonexistent/workers.json",
        ]);

        assert!(matches!(recommend(&cli), Err(CliError::Seed(_))));
    }
}
