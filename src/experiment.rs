use crate::config::ExperimentConfig;
use crate::environment::RewardEnvironment;
use crate::errors::ExperimentError;
use crate::policies::PolicyKind;
use crate::rng::MaybeSeededRng;

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, info_span};
use uuid::Uuid;

/// Per-time-step totals of one policy, summed over runs.
#[derive(Clone, Debug, PartialEq)]
pub struct RewardAccumulator {
    rewards: Vec<f64>,
    optimal_actions: Vec<f64>,
    runs: usize,
}

impl RewardAccumulator {
    pub fn new(num_timesteps: usize) -> Self {
        Self {
            rewards: vec![0.0; num_timesteps],
            optimal_actions: vec![0.0; num_timesteps],
            runs: 0,
        }
    }

    pub fn num_timesteps(&self) -> usize {
        self.rewards.len()
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn record(
        &mut self,
        time_step: usize,
        reward: f64,
        optimal: bool,
    ) -> Result<(), ExperimentError> {
        let num_timesteps = self.num_timesteps();
        let (total, hits) = self
            .rewards
            .get_mut(time_step)
            .zip(self.optimal_actions.get_mut(time_step))
            .ok_or_else(|| {
                ExperimentError::InvalidConfig(format!(
                    "time step {time_step} out of range for {num_timesteps} time steps"
                ))
            })?;

        *total += reward;
        if optimal {
            *hits += 1.0;
        }

        Ok(())
    }

    pub fn end_run(&mut self) {
        self.runs += 1;
    }

    /// Elementwise sum with another accumulator of the same length.
    pub fn merge(&mut self, other: &RewardAccumulator) -> Result<(), ExperimentError> {
        if other.num_timesteps() != self.num_timesteps() {
            return Err(ExperimentError::InvalidConfig(format!(
                "cannot merge {} time steps into {}",
                other.num_timesteps(),
                self.num_timesteps()
            )));
        }

        self.rewards
            .iter_mut()
            .zip(&other.rewards)
            .for_each(|(total, reward)| *total += reward);
        self.optimal_actions
            .iter_mut()
            .zip(&other.optimal_actions)
            .for_each(|(total, hits)| *total += hits);
        self.runs += other.runs;

        Ok(())
    }

    pub fn finalize(self) -> Result<PolicyCurves, ExperimentError> {
        if self.runs == 0 {
            return Err(ExperimentError::InvalidConfig(
                "no run was recorded".to_string(),
            ));
        }

        let runs = self.runs as f64;
        Ok(PolicyCurves {
            average_rewards: self.rewards.into_iter().map(|r| r / runs).collect(),
            optimal_action_rate: self.optimal_actions.into_iter().map(|o| o / runs).collect(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PolicyCurves {
    pub average_rewards: Vec<f64>,
    /// Fraction of runs that picked the run's best action at each step.
    pub optimal_action_rate: Vec<f64>,
}

impl PolicyCurves {
    pub fn mean_reward(&self) -> f64 {
        if self.average_rewards.is_empty() {
            return 0.0;
        }
        self.average_rewards.iter().sum::<f64>() / self.average_rewards.len() as f64
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ExperimentResult {
    pub id: Uuid,
    pub config: ExperimentConfig,
    pub curves: BTreeMap<PolicyKind, PolicyCurves>,
}

impl ExperimentResult {
    pub fn average_rewards(&self, kind: PolicyKind) -> Option<&[f64]> {
        self.curves
            .get(&kind)
            .map(|curves| curves.average_rewards.as_slice())
    }
}

pub struct Experiment {
    id: Uuid,
    config: ExperimentConfig,
    rng: MaybeSeededRng,
}

impl Experiment {
    pub fn new(config: ExperimentConfig) -> Result<Self, ExperimentError> {
        config.validate()?;
        let rng = MaybeSeededRng::new(config.seed);

        Ok(Self {
            id: Uuid::new_v4(),
            config,
            rng,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    fn run_once(
        &mut self,
        accumulators: &mut BTreeMap<PolicyKind, RewardAccumulator>,
    ) -> Result<(), ExperimentError> {
        let num_actions = self.config.num_actions;
        let num_timesteps = self.config.num_timesteps;

        let mut environment = RewardEnvironment::new(MaybeSeededRng::derive(self.rng.get_rng()));
        environment.reset(num_actions)?;
        let optimal_action = environment.optimal_action()?;

        for policy_type in self.config.policy_types() {
            let mut policy = policy_type.build(MaybeSeededRng::derive(self.rng.get_rng()))?;
            policy.reset(num_actions)?;

            let accumulator = accumulators
                .entry(policy.kind())
                .or_insert_with(|| RewardAccumulator::new(num_timesteps));

            for time_step in 0..num_timesteps {
                let action = policy.select_action(time_step)?;
                let reward = environment.sample_reward(action)?;
                policy.update(action, reward)?;
                accumulator.record(time_step, reward, action == optimal_action)?;
            }
            accumulator.end_run();
        }

        Ok(())
    }

    pub fn run(mut self) -> Result<ExperimentResult, ExperimentError> {
        let span = info_span!("experiment", id = %self.id);
        let _guard = span.enter();

        info!(
            num_runs = self.config.num_runs,
            num_actions = self.config.num_actions,
            num_timesteps = self.config.num_timesteps,
            seed = ?self.rng.seed(),
            "Starting experiment"
        );

        let mut accumulators = BTreeMap::new();
        for run in 0..self.config.num_runs {
            self.run_once(&mut accumulators)?;
            debug!(run, "Finished run");
        }

        let curves = accumulators
            .into_iter()
            .map(|(kind, accumulator)| accumulator.finalize().map(|curves| (kind, curves)))
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        curves.iter().for_each(|(kind, curves)| {
            info!(
                policy = %kind,
                mean_reward = curves.mean_reward(),
                "Finished policy"
            );
        });

        Ok(ExperimentResult {
            id: self.id,
            config: self.config,
            curves,
        })
    }
}

pub fn run_experiment(config: &ExperimentConfig) -> Result<ExperimentResult, ExperimentError> {
    Experiment::new(config.clone())?.run()
}
