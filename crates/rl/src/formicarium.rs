//! # Formicarium
//!
//! An ant learning to walk along a procedurally generated track.
//!
//! [`Formicarium`] wraps any [`Simulation`] behind the [`Env`] interface.
//! Each episode gets fresh terrain, a sum of Perlin octaves from the
//! [`terrain`] crate. Each step applies the action as the ant's leg forces,
//! advances the world by `skip_frames` sub-steps and scores the result:
//!
//! - `vel`: forward velocity of the ant,
//! - `term`: a bonus once the ant passes the goal line,
//! - `cost`: a penalty proportional to the Euclidean norm of the action,
//!
//! with `reward = vel + term - cost`. Reaching the goal terminates the
//! episode; falling below the floor (the ant left the track or the
//! simulator glitched) truncates it.

use crate::config::{ConfigError, FormicariumConfig};
use crate::env::{Env, ResetInfo, Step};
use crate::registry::{EnvSpec, Registry, RegistryError};
use crate::space::BoxSpace;
use physics::{CameraFrame, SimError, Simulation, Vec3};
use serde::{Deserialize, Serialize};
use terrain::{HeightMap, TerrainError};

/// Registry id of the standard task.
pub const FORMICARIUM_ID: &str = "Formicarium-v0";

/// Episode step cap attached to [`FORMICARIUM_ID`].
pub const MAX_EPISODE_STEPS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// All sensor readings, concatenated in the agent's declared order.
    pub pose: Vec<f32>,
    pub pos: Vec3,
}

/// Reward breakdown of a step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StepInfo {
    pub term: f32,
    pub vel: f32,
    pub cost: f32,
}

#[derive(Debug, Clone, Default)]
pub struct ResetOptions {
    /// Use this terrain instead of generating one. Its shape must match
    /// the configured terrain resolution.
    pub terrain: Option<HeightMap>,
}

pub struct Formicarium<S: Simulation> {
    sim: S,
    config: FormicariumConfig,
    rng: fastrand::Rng,
    action_space: BoxSpace,
    observation_space: BoxSpace,
}

impl<S: Simulation> Formicarium<S> {
    /// Wrap a simulator. The simulator's world must already be built.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`FormicariumConfig::validate`].
    pub fn new(sim: S, config: FormicariumConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let action_space = BoxSpace::unbounded(&[sim.action_shape().force]);
        let obs_len = sim.sensor_observation_shape().iter().map(|s| s.len).sum();
        let observation_space = BoxSpace::unbounded(&[obs_len]);
        tracing::debug!(
            action_len = action_space.len(),
            obs_len,
            skip_frames = config.skip_frames,
            "created formicarium"
        );
        Ok(Self {
            sim,
            config,
            rng: fastrand::Rng::new(),
            action_space,
            observation_space,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &FormicariumConfig {
        &self.config
    }

    #[must_use]
    pub const fn skip_frames(&self) -> usize {
        self.config.skip_frames
    }

    #[must_use]
    pub const fn sim(&self) -> &S {
        &self.sim
    }

    pub fn sim_mut(&mut self) -> &mut S {
        &mut self.sim
    }

    #[must_use]
    pub fn into_inner(self) -> S {
        self.sim
    }

    fn create_terrain(&mut self) -> Result<HeightMap, SimError> {
        Ok(terrain::generate(&mut self.rng, &self.config.terrain)?)
    }

    fn observation(&self) -> Observation {
        let pose = self
            .sim
            .sensor_observation()
            .into_iter()
            .flat_map(|reading| reading.values)
            .collect();
        Observation {
            pose,
            pos: self.sim.pos(),
        }
    }

    fn reward(&self, action: &[f32], terminated: bool) -> (f32, StepInfo) {
        let vel = self.sim.x_vel();
        let term = if terminated { self.config.terminal_bonus } else { 0.0 };
        let cost = self.config.cost_weight * action.iter().map(|a| a * a).sum::<f32>().sqrt();
        (vel + term - cost, StepInfo { term, vel, cost })
    }
}

impl<S: Simulation> Env for Formicarium<S> {
    type Obs = Observation;
    type Act = [f32];
    type Info = StepInfo;
    type Frame = CameraFrame;
    type Options = ResetOptions;
    type Error = SimError;

    fn reset(
        &mut self,
        seed: Option<u64>,
        options: ResetOptions,
    ) -> Result<(Observation, ResetInfo), SimError> {
        if let Some(seed) = seed {
            self.rng.seed(seed);
        }
        tracing::debug!(?seed, custom_terrain = options.terrain.is_some(), "resetting formicarium");
        let terrain = match options.terrain {
            Some(terrain) => {
                let expected = self.config.terrain.resolution();
                if terrain.shape() != expected {
                    return Err(TerrainError::ShapeMismatch {
                        expected,
                        got: terrain.shape(),
                    }
                    .into());
                }
                terrain
            }
            None => self.create_terrain()?,
        };
        self.sim.set_terrain(terrain);
        self.sim.reset()?;
        Ok((self.observation(), ResetInfo::new()))
    }

    fn step(&mut self, action: &[f32]) -> Result<Step<Observation, StepInfo>, SimError> {
        self.sim.set_force(action)?;
        self.sim.step(self.config.skip_frames)?;

        let truncated = self.sim.z() < self.config.fall_z;
        let terminated = self.sim.x() > self.config.goal_x;
        let (reward, info) = self.reward(action, terminated);
        tracing::trace!(reward, terminated, truncated, x = self.sim.x(), "formicarium step");

        Ok(Step {
            obs: self.observation(),
            reward,
            terminated,
            truncated,
            info,
        })
    }

    fn render(&self) -> CameraFrame {
        self.sim.camera_observation()
    }

    fn action_space(&self) -> &BoxSpace {
        &self.action_space
    }

    fn observation_space(&self) -> &BoxSpace {
        &self.observation_space
    }
}

/// Register the standard task under [`FORMICARIUM_ID`].
///
/// `make_sim` must return a simulator whose world is already built.
///
/// # Errors
///
/// Returns [`RegistryError::Duplicate`] if the id is already taken.
pub fn register_formicarium<S, F>(
    registry: &mut Registry<Formicarium<S>>,
    config: FormicariumConfig,
    make_sim: F,
) -> Result<(), RegistryError>
where
    S: Simulation + 'static,
    F: Fn() -> Result<S, SimError> + 'static,
{
    registry.register(EnvSpec::new(
        FORMICARIUM_ID,
        Some(MAX_EPISODE_STEPS),
        move || {
            let sim = make_sim().map_err(RegistryError::construction)?;
            Formicarium::new(sim, config.clone()).map_err(RegistryError::construction)
        },
    ))
}
