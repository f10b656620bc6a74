use super::errors::PolicyError;
use super::estimator::ValueEstimator;

/// Pure exploitation. Exploration comes only from optimistic initial
/// estimates `q_1`.
#[derive(Clone, Debug)]
pub struct Greedy {
    q_1: f64,
    estimator: Option<ValueEstimator>,
}

impl Greedy {
    pub fn new(q_1: f64) -> Result<Self, PolicyError> {
        if !q_1.is_finite() {
            return Err(PolicyError::InvalidConfig(format!(
                "q_1 must be finite, got {q_1}"
            )));
        }

        Ok(Self {
            q_1,
            estimator: None,
        })
    }

    pub fn q_1(&self) -> f64 {
        self.q_1
    }

    pub fn reset(&mut self, num_actions: usize) -> Result<(), PolicyError> {
        self.estimator = Some(ValueEstimator::new(num_actions, self.q_1)?);
        Ok(())
    }

    pub fn estimator(&self) -> Result<&ValueEstimator, PolicyError> {
        self.estimator.as_ref().ok_or(PolicyError::NotInitialized)
    }

    pub fn select_action(&mut self, _time_step: usize) -> Result<usize, PolicyError> {
        self.estimator()?
            .greedy_action()
            .ok_or(PolicyError::NotInitialized)
    }

    pub fn update(&mut self, action: usize, reward: f64) -> Result<(), PolicyError> {
        self.estimator
            .as_mut()
            .ok_or(PolicyError::NotInitialized)?
            .update(action, reward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_before_reset() {
        let mut policy = Greedy::new(5.0).unwrap();
        assert_eq!(policy.select_action(0), Err(PolicyError::NotInitialized));
        assert_eq!(policy.update(0, 1.0), Err(PolicyError::NotInitialized));
    }

    #[test]
    fn invalid_q_1() {
        assert!(Greedy::new(f64::NAN).is_err());
        assert!(Greedy::new(f64::INFINITY).is_err());
    }

    #[test]
    fn optimistic_initialization() {
        let mut policy = Greedy::new(5.0).unwrap();
        policy.reset(3).unwrap();
        assert_eq!(policy.estimator().unwrap().values(), &[5.0, 5.0, 5.0]);
        // all equal, lowest index wins
        assert_eq!(policy.select_action(0), Ok(0));
    }

    #[test]
    fn draw_best() {
        let mut policy = Greedy::new(0.0).unwrap();
        policy.reset(3).unwrap();
        policy.update(2, 1.0).unwrap();
        assert_eq!(policy.select_action(1), Ok(2));
    }

    #[test]
    fn optimism_drives_exploration() {
        let mut policy = Greedy::new(5.0).unwrap();
        policy.reset(4).unwrap();

        // rewards below q_1 push each tried action under the untried ones
        let visited: Vec<usize> = (0..4)
            .map(|t| {
                let action = policy.select_action(t).unwrap();
                policy.update(action, 1.0).unwrap();
                action
            })
            .collect();
        assert_eq!(visited, vec![0, 1, 2, 3]);
    }

    #[test]
    fn reset_discards_estimates() {
        let mut policy = Greedy::new(5.0).unwrap();
        policy.reset(2).unwrap();
        policy.update(0, -1.0).unwrap();
        policy.reset(2).unwrap();
        assert_eq!(policy.estimator().unwrap().counts(), &[0, 0]);
        assert_eq!(policy.estimator().unwrap().values(), &[5.0, 5.0]);
    }
}
