pub mod epsilon_greedy;
pub mod errors;
pub mod estimator;
pub mod greedy;
mod policy;
pub mod ucb;

pub use estimator::{argmax, ValueEstimator};
pub use policy::{Policy, PolicyKind, PolicyType};
