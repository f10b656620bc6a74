use super::errors::PolicyError;
use super::estimator::{argmax, ValueEstimator};

/// Upper-confidence-bound selection. Untried actions have infinite priority
/// and are taken left to right before any bonus is computed.
#[derive(Clone, Debug)]
pub struct Ucb {
    c: f64,
    estimator: Option<ValueEstimator>,
}

impl Ucb {
    pub fn new(c: f64) -> Result<Self, PolicyError> {
        if !c.is_finite() || c < 0.0 {
            return Err(PolicyError::InvalidConfig(format!(
                "c must be finite and non-negative, got {c}"
            )));
        }

        Ok(Self { c, estimator: None })
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn reset(&mut self, num_actions: usize) -> Result<(), PolicyError> {
        self.estimator = Some(ValueEstimator::new(num_actions, 0.0)?);
        Ok(())
    }

    pub fn estimator(&self) -> Result<&ValueEstimator, PolicyError> {
        self.estimator.as_ref().ok_or(PolicyError::NotInitialized)
    }

    fn upper_bounds(&self, estimator: &ValueEstimator, time_step: usize) -> Vec<f64> {
        // ln(0) would turn every bonus into NaN
        let log_t = (time_step.max(1) as f64).ln();

        estimator
            .values()
            .iter()
            .zip(estimator.counts())
            .map(|(&value, &count)| {
                if count == 0 {
                    f64::INFINITY
                } else {
                    value + self.c * (log_t / count as f64).sqrt()
                }
            })
            .collect()
    }

    pub fn select_action(&mut self, time_step: usize) -> Result<usize, PolicyError> {
        let estimator = self.estimator()?;
        argmax(&self.upper_bounds(estimator, time_step)).ok_or(PolicyError::NotInitialized)
    }

    pub fn update(&mut self, action: usize, reward: f64) -> Result<(), PolicyError> {
        self.estimator
            .as_mut()
            .ok_or(PolicyError::NotInitialized)?
            .update(action, reward)
    }
}
