use super::errors::PolicyError;

/// Sample-average action-value estimates with per-action selection counts.
#[derive(Clone, Debug)]
pub struct ValueEstimator {
    values: Vec<f64>,
    counts: Vec<u64>,
}

impl ValueEstimator {
    pub fn new(num_actions: usize, initial_value: f64) -> Result<Self, PolicyError> {
        if num_actions == 0 {
            return Err(PolicyError::InvalidConfig(
                "num_actions must be positive".to_string(),
            ));
        }

        Ok(Self {
            values: vec![initial_value; num_actions],
            counts: vec![0; num_actions],
        })
    }

    pub fn num_actions(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn total_count(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn update(&mut self, action: usize, reward: f64) -> Result<(), PolicyError> {
        let num_actions = self.num_actions();
        let (value, count) = self
            .values
            .get_mut(action)
            .zip(self.counts.get_mut(action))
            .ok_or(PolicyError::InvalidAction {
                action,
                num_actions,
            })?;

        *count += 1;
        *value += (reward - *value) / (*count as f64);

        Ok(())
    }

    pub fn greedy_action(&self) -> Option<usize> {
        argmax(&self.values)
    }
}

/// Index of the first maximal value. NaN entries are never selected.
pub fn argmax(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_nan())
        .fold(None, |best: Option<(usize, f64)>, (i, &v)| match best {
            Some((_, best_value)) if v <= best_value => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}
