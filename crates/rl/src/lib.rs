#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Formicarium RL
//!
//! Episodic reinforcement-learning environments over the Formicarium
//! simulator contract.
//!
//! -   [`Env`] is the reset/step/render interface, with [`BoxSpace`] action
//!     and observation spaces.
//! -   [`Formicarium`] is the ant-locomotion task.
//! -   [`Registry`] builds environments by id and wraps them in a
//!     [`TimeLimit`], which is what enforces an episode step cap.
//!
//! ```rust,ignore
//! use physics::{AntSim, World};
//! use rl::{register_formicarium, Env, FormicariumConfig, Registry, FORMICARIUM_ID};
//!
//! let mut registry = Registry::new();
//! register_formicarium(&mut registry, FormicariumConfig::default(), || {
//!     let mut sim = AntSim::default();
//!     sim.build()?;
//!     Ok(sim)
//! })?;
//! let mut env = registry.make(FORMICARIUM_ID)?;
//! let (obs, _) = env.reset(Some(42), Default::default())?;
//! ```

pub mod config;
pub mod env;
pub mod formicarium;
pub mod registry;
pub mod space;
pub mod wrappers;

pub use config::{ConfigError, FormicariumConfig};
pub use env::{Env, ResetInfo, Step};
pub use formicarium::{
    register_formicarium, Formicarium, Observation, ResetOptions, StepInfo, FORMICARIUM_ID,
    MAX_EPISODE_STEPS,
};
pub use registry::{EnvSpec, Registry, RegistryError};
pub use space::BoxSpace;
pub use wrappers::TimeLimit;
