//! # Rollout Loop
//!
//! Drives the registered `Formicarium-v0` environment with actions sampled
//! from its action space, resetting whenever an episode ends, and logs the
//! reward breakdown as it goes.

use anyhow::{Context, Result};
use physics::{AntConfig, AntSim, World};
use rl::{register_formicarium, Env, FormicariumConfig, Registry, ResetOptions, FORMICARIUM_ID};
use std::path::PathBuf;

/// What to run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub seed: u64,
    pub steps: usize,
    /// Overrides the config file's `skip_frames`.
    pub skip_frames: Option<usize>,
    pub config: Option<PathBuf>,
    pub ant_config: Option<PathBuf>,
    /// Log progress every this many steps; 0 disables progress logs.
    pub log_every: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            seed: 42,
            steps: 1000,
            skip_frames: None,
            config: None,
            ant_config: None,
            log_every: 50,
        }
    }
}

/// Totals over a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub steps: usize,
    pub terminated: usize,
    pub truncated: usize,
    pub total_reward: f32,
}

impl RunSummary {
    #[must_use]
    pub const fn episodes_finished(&self) -> usize {
        self.terminated + self.truncated
    }
}

fn load_configs(options: &RunOptions) -> Result<(FormicariumConfig, AntConfig)> {
    let mut config = match &options.config {
        Some(path) => FormicariumConfig::from_path(path)
            .with_context(|| format!("loading environment config {}", path.display()))?,
        None => FormicariumConfig::default(),
    };
    if let Some(skip_frames) = options.skip_frames {
        config.skip_frames = skip_frames;
    }
    config.validate()?;

    let ant = match &options.ant_config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading ant config {}", path.display()))?;
            serde_json::from_str::<AntConfig>(&json)
                .with_context(|| format!("parsing ant config {}", path.display()))?
        }
        None => AntConfig::default(),
    };
    Ok((config, ant))
}

/// Run a random-policy rollout.
///
/// # Errors
///
/// Returns any error from loading configuration, building the simulator or
/// stepping the environment.
pub fn run(options: &RunOptions) -> Result<RunSummary> {
    let (config, ant) = load_configs(options)?;

    let mut registry = Registry::new();
    register_formicarium(&mut registry, config, move || {
        let mut sim = AntSim::new(ant.clone());
        sim.build()?;
        Ok(sim)
    })?;
    let mut env = registry.make(FORMICARIUM_ID)?;
    tracing::info!(
        id = FORMICARIUM_ID,
        max_episode_steps = ?env.max_episode_steps(),
        action_len = env.action_space().len(),
        obs_len = env.observation_space().len(),
        "environment ready"
    );

    let mut rng = fastrand::Rng::with_seed(options.seed);
    let mut summary = RunSummary::default();
    let mut episode_return = 0.0_f32;

    env.reset(Some(options.seed), ResetOptions::default())?;
    for i in 0..options.steps {
        let action = env.action_space().sample(&mut rng);
        let step = env.step(&action)?;
        summary.steps += 1;
        summary.total_reward += step.reward;
        episode_return += step.reward;

        if options.log_every > 0 && (i + 1) % options.log_every == 0 {
            tracing::info!(
                step = i + 1,
                x = step.obs.pos.x,
                term = step.info.term,
                vel = step.info.vel,
                cost = step.info.cost,
                "progress"
            );
        }

        if step.done() {
            tracing::info!(
                terminated = step.terminated,
                truncated = step.truncated,
                episode_return,
                "episode finished"
            );
            if step.terminated {
                summary.terminated += 1;
            } else {
                summary.truncated += 1;
            }
            episode_return = 0.0;
            env.reset(None, ResetOptions::default())?;
        }
    }
    env.close()?;

    tracing::info!(
        steps = summary.steps,
        episodes = summary.episodes_finished(),
        total_reward = summary.total_reward,
        "rollout finished"
    );
    Ok(summary)
}
