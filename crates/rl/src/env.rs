//! The episodic environment interface.

use crate::space::BoxSpace;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Auxiliary data returned by [`Env::reset`].
pub type ResetInfo = BTreeMap<String, f32>;

/// Outcome of a single [`Env::step`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step<O, I> {
    pub obs: O,
    pub reward: f32,
    /// The episode reached its goal.
    pub terminated: bool,
    /// The episode was cut short by a failure or a time limit.
    pub truncated: bool,
    pub info: I,
}

impl<O, I> Step<O, I> {
    /// Whether the caller must reset before stepping again.
    #[must_use]
    pub const fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the core
/// interface an environment must provide. [`reset`] starts an episode and
/// [`step`] advances it by one action, returning the new observation, a
/// reward signal and the termination/truncation flags.
///
/// Environments do not police the episode lifecycle: stepping after a
/// terminal step without resetting is the caller's mistake.
///
/// [`reset`]: Env::reset
/// [`step`]: Env::step
pub trait Env {
    type Obs;
    type Act: ?Sized;
    type Info;
    type Frame;
    type Options: Default;
    type Error: std::error::Error;

    /// Start a new episode.
    ///
    /// A `seed` makes the episode's randomness reproducible; without one the
    /// environment continues from its current RNG state.
    ///
    /// # Errors
    ///
    /// Propagates failures of the underlying simulator.
    fn reset(
        &mut self,
        seed: Option<u64>,
        options: Self::Options,
    ) -> Result<(Self::Obs, ResetInfo), Self::Error>;

    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Propagates failures of the underlying simulator.
    fn step(&mut self, action: &Self::Act) -> Result<Step<Self::Obs, Self::Info>, Self::Error>;

    fn render(&self) -> Self::Frame;

    /// Release resources. Most environments have nothing to do here.
    ///
    /// # Errors
    ///
    /// Propagates teardown failures.
    fn close(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn action_space(&self) -> &BoxSpace;

    fn observation_space(&self) -> &BoxSpace;
}
