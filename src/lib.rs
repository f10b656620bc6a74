pub mod config;
pub mod environment;
pub mod errors;
pub mod experiment;
pub mod policies;
pub mod rng;
pub mod sweep;

pub use experiment::{run_experiment, Experiment, ExperimentResult, PolicyCurves};
pub use sweep::{run_sweep, SweepPoint};
