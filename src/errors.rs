use crate::policies::errors::PolicyError;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EnvironmentError {
    #[error("Action {action} out of range for {num_actions} actions")]
    InvalidAction { action: usize, num_actions: usize },
    #[error("Environment has not been reset for a run")]
    NotSeeded,
    #[error("Invalid environment configuration: {0}")]
    InvalidConfig(String),
    #[error("Cannot build reward distribution: {0}")]
    Distribution(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum ExperimentError {
    #[error("Invalid experiment configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Environment(#[from] EnvironmentError),
    #[error(transparent)]
    Policy(#[from] PolicyError),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot read config: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Experiment(#[from] ExperimentError),
    #[error("Failed to serialize report to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
