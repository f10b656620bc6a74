use super::errors::PolicyError;
use super::estimator::ValueEstimator;

use crate::rng::MaybeSeededRng;

use rand::Rng;

#[derive(Clone, Debug)]
pub struct EpsilonGreedy {
    epsilon: f64,
    estimator: Option<ValueEstimator>,
    rng: MaybeSeededRng,
}

impl EpsilonGreedy {
    pub fn new(epsilon: f64, rng: MaybeSeededRng) -> Result<Self, PolicyError> {
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(PolicyError::InvalidConfig(format!(
                "epsilon must be in [0, 1], got {epsilon}"
            )));
        }

        Ok(Self {
            epsilon,
            estimator: None,
            rng,
        })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn reset(&mut self, num_actions: usize) -> Result<(), PolicyError> {
        self.estimator = Some(ValueEstimator::new(num_actions, 0.0)?);
        Ok(())
    }

    pub fn estimator(&self) -> Result<&ValueEstimator, PolicyError> {
        self.estimator.as_ref().ok_or(PolicyError::NotInitialized)
    }

    pub fn select_action(&mut self, _time_step: usize) -> Result<usize, PolicyError> {
        let estimator = self
            .estimator
            .as_ref()
            .ok_or(PolicyError::NotInitialized)?;
        let num_actions = estimator.num_actions();

        let rng = self.rng.get_rng();
        if rng.random::<f64>() < self.epsilon {
            Ok(rng.random_range(0..num_actions))
        } else {
            estimator
                .greedy_action()
                .ok_or(PolicyError::NotInitialized)
        }
    }

    pub fn update(&mut self, action: usize, reward: f64) -> Result<(), PolicyError> {
        self.estimator
            .as_mut()
            .ok_or(PolicyError::NotInitialized)?
            .update(action, reward)
    }
}
