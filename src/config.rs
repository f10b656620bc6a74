use crate::errors::ExperimentError;
use crate::policies::PolicyType;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub num_runs: usize,
    pub num_actions: usize,
    pub num_timesteps: usize,
    /// Optimistic initial estimate of the greedy policy.
    pub q_1: f64,
    pub epsilon: f64,
    /// Exploration weight of the UCB bonus.
    pub c: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            num_actions: 10,
            num_timesteps: 1000,
            q_1: 5.0,
            epsilon: 0.1,
            c: 2.0,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    pub fn validate(&self) -> Result<(), ExperimentError> {
        let positive = [
            ("num_runs", self.num_runs),
            ("num_actions", self.num_actions),
            ("num_timesteps", self.num_timesteps),
        ];
        if let Some((name, _)) = positive.iter().find(|(_, value)| *value == 0) {
            return Err(ExperimentError::InvalidConfig(format!(
                "{name} must be positive"
            )));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(ExperimentError::InvalidConfig(format!(
                "epsilon must be in [0, 1], got {}",
                self.epsilon
            )));
        }
        if !self.q_1.is_finite() {
            return Err(ExperimentError::InvalidConfig(format!(
                "q_1 must be finite, got {}",
                self.q_1
            )));
        }
        if !self.c.is_finite() || self.c < 0.0 {
            return Err(ExperimentError::InvalidConfig(format!(
                "c must be finite and non-negative, got {}",
                self.c
            )));
        }

        Ok(())
    }

    /// Policies compared by the experiment, in result order.
    pub fn policy_types(&self) -> [PolicyType; 3] {
        [
            PolicyType::Greedy { q_1: self.q_1 },
            PolicyType::EpsilonGreedy {
                epsilon: self.epsilon,
            },
            PolicyType::Ucb { c: self.c },
        ]
    }
}

/// Hyperparameter triples `(q_1[i], epsilon[i], c[i])`, one experiment each.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub q_1: Vec<f64>,
    pub epsilon: Vec<f64>,
    pub c: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub log_level: String,
    pub experiment: ExperimentConfig,
    pub sweep: Option<SweepConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = ExperimentConfig::default();

        let builder = Config::builder()
            .set_default("log_level", "info")?
            .set_default("experiment.num_runs", defaults.num_runs as i64)?
            .set_default("experiment.num_actions", defaults.num_actions as i64)?
            .set_default("experiment.num_timesteps", defaults.num_timesteps as i64)?
            .set_default("experiment.q_1", defaults.q_1)?
            .set_default("experiment.epsilon", defaults.epsilon)?
            .set_default("experiment.c", defaults.c)?
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        builder.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(ExperimentConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_empty_sizes() {
        let cases = [
            ExperimentConfig {
                num_runs: 0,
                ..Default::default()
            },
            ExperimentConfig {
                num_actions: 0,
                ..Default::default()
            },
            ExperimentConfig {
                num_timesteps: 0,
                ..Default::default()
            },
        ];

        cases.iter().for_each(|config| {
            assert!(matches!(
                config.validate(),
                Err(ExperimentError::InvalidConfig(_))
            ))
        });
    }

    #[test]
    fn rejects_bad_hyperparameters() {
        let cases = [
            ExperimentConfig {
                epsilon: 1.01,
                ..Default::default()
            },
            ExperimentConfig {
                epsilon: -0.5,
                ..Default::default()
            },
            ExperimentConfig {
                q_1: f64::NAN,
                ..Default::default()
            },
            ExperimentConfig {
                c: -1.0,
                ..Default::default()
            },
        ];

        cases
            .iter()
            .for_each(|config| assert!(config.validate().is_err()));
    }

    #[test]
    fn deserialize() {
        let json = r#"{
            "num_runs": 3,
            "num_actions": 4,
            "num_timesteps": 5,
            "q_1": 1.0,
            "epsilon": 0.25,
            "c": 0.5
        }"#;
        let config: ExperimentConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.num_actions, 4);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn policy_types() {
        let config = ExperimentConfig::default();
        let kinds: Vec<_> = config.policy_types().iter().map(|p| p.kind()).collect();
        assert_eq!(kinds, crate::policies::PolicyKind::ALL.to_vec());
    }
}
