use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PolicyError {
    #[error("Action {action} out of range for {num_actions} actions")]
    InvalidAction { action: usize, num_actions: usize },
    #[error("Policy has not been reset for a run")]
    NotInitialized,
    #[error("Invalid policy configuration: {0}")]
    InvalidConfig(String),
}
