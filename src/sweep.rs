use crate::config::{ExperimentConfig, SweepConfig};
use crate::errors::ExperimentError;
use crate::experiment::{run_experiment, ExperimentResult};

use serde::Serialize;
use tracing::info;

#[derive(Clone, Debug, Serialize)]
pub struct SweepPoint {
    pub q_1: f64,
    pub epsilon: f64,
    pub c: f64,
    pub result: ExperimentResult,
}

/// Runs one experiment per index of the sweep lists, pairing `q_1[i]`,
/// `epsilon[i]` and `c[i]`. Sizes and seed come from `base`; a seeded base
/// gives each point its own seed offset by the index.
pub fn run_sweep(
    base: &ExperimentConfig,
    sweep: &SweepConfig,
) -> Result<Vec<SweepPoint>, ExperimentError> {
    let len = sweep.q_1.len();
    if len == 0 || sweep.epsilon.len() != len || sweep.c.len() != len {
        return Err(ExperimentError::InvalidConfig(format!(
            "sweep lists must be non-empty and of equal length, got q_1={}, epsilon={}, c={}",
            sweep.q_1.len(),
            sweep.epsilon.len(),
            sweep.c.len()
        )));
    }

    info!(points = len, "Starting sweep");

    sweep
        .q_1
        .iter()
        .zip(&sweep.epsilon)
        .zip(&sweep.c)
        .enumerate()
        .map(|(i, ((&q_1, &epsilon), &c))| {
            let config = ExperimentConfig {
                q_1,
                epsilon,
                c,
                seed: base.seed.map(|seed| seed.wrapping_add(i as u64)),
                ..base.clone()
            };
            run_experiment(&config).map(|result| SweepPoint {
                q_1,
                epsilon,
                c,
                result,
            })
        })
        .collect()
}
