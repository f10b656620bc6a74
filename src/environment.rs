use crate::errors::EnvironmentError;
use crate::policies::argmax;
use crate::rng::MaybeSeededRng;

use rand_distr::{Distribution, Normal};

const TRUE_VALUE_MEAN: f64 = 0.0;
const TRUE_VALUE_STD: f64 = 3.0;
const REWARD_STD: f64 = 1.0;

/// Stationary Gaussian bandit. Each run draws the true action values from
/// N(0, 3) and every reward from N(true_value, 1).
#[derive(Debug)]
pub struct RewardEnvironment {
    true_values: Option<Vec<f64>>,
    rng: MaybeSeededRng,
}

impl RewardEnvironment {
    pub fn new(rng: MaybeSeededRng) -> Self {
        Self {
            true_values: None,
            rng,
        }
    }

    pub fn reset(&mut self, num_actions: usize) -> Result<&[f64], EnvironmentError> {
        if num_actions == 0 {
            return Err(EnvironmentError::InvalidConfig(
                "num_actions must be positive".to_string(),
            ));
        }

        let normal = Normal::new(TRUE_VALUE_MEAN, TRUE_VALUE_STD)
            .map_err(|e| EnvironmentError::Distribution(e.to_string()))?;
        let rng = self.rng.get_rng();
        let true_values = self
            .true_values
            .insert((0..num_actions).map(|_| normal.sample(rng)).collect());

        Ok(true_values.as_slice())
    }

    pub fn true_values(&self) -> Result<&[f64], EnvironmentError> {
        self.true_values
            .as_deref()
            .ok_or(EnvironmentError::NotSeeded)
    }

    pub fn num_actions(&self) -> Option<usize> {
        self.true_values.as_ref().map(Vec::len)
    }

    pub fn sample_reward(&mut self, action: usize) -> Result<f64, EnvironmentError> {
        let true_values = self
            .true_values
            .as_ref()
            .ok_or(EnvironmentError::NotSeeded)?;
        let mean = *true_values
            .get(action)
            .ok_or(EnvironmentError::InvalidAction {
                action,
                num_actions: true_values.len(),
            })?;

        let normal = Normal::new(mean, REWARD_STD)
            .map_err(|e| EnvironmentError::Distribution(e.to_string()))?;

        Ok(normal.sample(self.rng.get_rng()))
    }

    /// Action with the highest true value, lowest index on ties.
    pub fn optimal_action(&self) -> Result<usize, EnvironmentError> {
        argmax(self.true_values()?).ok_or(EnvironmentError::NotSeeded)
    }
}
