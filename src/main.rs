use bandit_testbed::config::AppConfig;
use bandit_testbed::errors::AppError;
use bandit_testbed::{run_experiment, run_sweep, ExperimentResult, SweepPoint};

use serde::Serialize;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Report {
    experiment: ExperimentResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    sweep: Option<Vec<SweepPoint>>,
}

fn run(config: &AppConfig) -> Result<(), AppError> {
    let experiment = run_experiment(&config.experiment)?;
    let sweep = config
        .sweep
        .as_ref()
        .map(|sweep| run_sweep(&config.experiment, sweep))
        .transpose()?;

    let report = serde_json::to_string_pretty(&Report { experiment, sweep })?;
    println!("{report}");

    Ok(())
}

fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", AppError::from(err));
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Experiment failed");
            ExitCode::FAILURE
        }
    }
}
