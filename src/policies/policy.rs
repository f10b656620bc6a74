use super::epsilon_greedy::EpsilonGreedy;
use super::errors::PolicyError;
use super::estimator::ValueEstimator;
use super::greedy::Greedy;
use super::ucb::Ucb;

use crate::rng::MaybeSeededRng;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag keying a policy's results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Greedy,
    #[serde(rename = "epsilon")]
    EpsilonGreedy,
    Ucb,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 3] = [
        PolicyKind::Greedy,
        PolicyKind::EpsilonGreedy,
        PolicyKind::Ucb,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Greedy => "greedy",
            PolicyKind::EpsilonGreedy => "epsilon",
            PolicyKind::Ucb => "ucb",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hyperparameters of a policy, enough to build a fresh instance per run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PolicyType {
    Greedy { q_1: f64 },
    EpsilonGreedy { epsilon: f64 },
    Ucb { c: f64 },
}

impl PolicyType {
    pub fn kind(&self) -> PolicyKind {
        match self {
            PolicyType::Greedy { .. } => PolicyKind::Greedy,
            PolicyType::EpsilonGreedy { .. } => PolicyKind::EpsilonGreedy,
            PolicyType::Ucb { .. } => PolicyKind::Ucb,
        }
    }

    pub fn build(self, rng: MaybeSeededRng) -> Result<Policy, PolicyError> {
        match self {
            PolicyType::Greedy { q_1 } => Greedy::new(q_1).map(Policy::Greedy),
            PolicyType::EpsilonGreedy { epsilon } => {
                EpsilonGreedy::new(epsilon, rng).map(Policy::EpsilonGreedy)
            }
            PolicyType::Ucb { c } => Ucb::new(c).map(Policy::Ucb),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Policy {
    Greedy(Greedy),
    EpsilonGreedy(EpsilonGreedy),
    Ucb(Ucb),
}

impl Policy {
    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::Greedy(_) => PolicyKind::Greedy,
            Policy::EpsilonGreedy(_) => PolicyKind::EpsilonGreedy,
            Policy::Ucb(_) => PolicyKind::Ucb,
        }
    }

    pub fn reset(&mut self, num_actions: usize) -> Result<(), PolicyError> {
        match self {
            Policy::Greedy(p) => p.reset(num_actions),
            Policy::EpsilonGreedy(p) => p.reset(num_actions),
            Policy::Ucb(p) => p.reset(num_actions),
        }
    }

    pub fn estimator(&self) -> Result<&ValueEstimator, PolicyError> {
        match self {
            Policy::Greedy(p) => p.estimator(),
            Policy::EpsilonGreedy(p) => p.estimator(),
            Policy::Ucb(p) => p.estimator(),
        }
    }

    pub fn select_action(&mut self, time_step: usize) -> Result<usize, PolicyError> {
        match self {
            Policy::Greedy(p) => p.select_action(time_step),
            Policy::EpsilonGreedy(p) => p.select_action(time_step),
            Policy::Ucb(p) => p.select_action(time_step),
        }
    }

    pub fn update(&mut self, action: usize, reward: f64) -> Result<(), PolicyError> {
        match self {
            Policy::Greedy(p) => p.update(action, reward),
            Policy::EpsilonGreedy(p) => p.update(action, reward),
            Policy::Ucb(p) => p.update(action, reward),
        }
    }
}
