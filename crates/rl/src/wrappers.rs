//! Environment wrappers.

use crate::env::{Env, ResetInfo, Step};
use crate::space::BoxSpace;

/// Truncates episodes after a fixed number of steps.
///
/// The wrapped environment decides termination on its own terms; this
/// wrapper only adds `truncated = true` on the step that reaches the cap.
pub struct TimeLimit<E> {
    env: E,
    max_episode_steps: Option<usize>,
    elapsed: usize,
    needs_reset: bool,
}

impl<E> TimeLimit<E> {
    #[must_use]
    pub const fn new(env: E, max_episode_steps: Option<usize>) -> Self {
        Self {
            env,
            max_episode_steps,
            elapsed: 0,
            needs_reset: true,
        }
    }

    #[must_use]
    pub const fn max_episode_steps(&self) -> Option<usize> {
        self.max_episode_steps
    }

    /// Steps taken since the last reset.
    #[must_use]
    pub const fn elapsed_steps(&self) -> usize {
        self.elapsed
    }

    #[must_use]
    pub const fn inner(&self) -> &E {
        &self.env
    }

    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.env
    }

    #[must_use]
    pub fn into_inner(self) -> E {
        self.env
    }
}

impl<E: Env> Env for TimeLimit<E> {
    type Obs = E::Obs;
    type Act = E::Act;
    type Info = E::Info;
    type Frame = E::Frame;
    type Options = E::Options;
    type Error = E::Error;

    fn reset(
        &mut self,
        seed: Option<u64>,
        options: Self::Options,
    ) -> Result<(Self::Obs, ResetInfo), Self::Error> {
        self.elapsed = 0;
        self.needs_reset = false;
        self.env.reset(seed, options)
    }

    fn step(&mut self, action: &Self::Act) -> Result<Step<Self::Obs, Self::Info>, Self::Error> {
        if self.needs_reset {
            tracing::warn!(elapsed = self.elapsed, "stepping an episode that has ended; call reset first");
        }
        let mut step = self.env.step(action)?;
        self.elapsed += 1;
        if self.max_episode_steps.is_some_and(|cap| self.elapsed >= cap) {
            step.truncated = true;
        }
        if step.done() {
            self.needs_reset = true;
        }
        Ok(step)
    }

    fn render(&self) -> Self::Frame {
        self.env.render()
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        self.env.close()
    }

    fn action_space(&self) -> &BoxSpace {
        self.env.action_space()
    }

    fn observation_space(&self) -> &BoxSpace {
        self.env.observation_space()
    }
}
