//! Construct environments by name.

use crate::wrappers::TimeLimit;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("no environment registered under id {0:?}")]
    UnknownId(String),
    #[error("environment id {0:?} is already registered")]
    Duplicate(String),
    #[error("environment construction failed: {0}")]
    Construction(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RegistryError {
    #[must_use]
    pub fn construction(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Construction(Box::new(err))
    }
}

type EntryPoint<E> = Box<dyn Fn() -> Result<E, RegistryError>>;

/// How to build one registered environment.
pub struct EnvSpec<E> {
    pub id: String,
    /// Step cap enforced by the [`TimeLimit`] wrapper on [`Registry::make`].
    pub max_episode_steps: Option<usize>,
    entry_point: EntryPoint<E>,
}

impl<E> EnvSpec<E> {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        max_episode_steps: Option<usize>,
        entry_point: impl Fn() -> Result<E, RegistryError> + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            max_episode_steps,
            entry_point: Box::new(entry_point),
        }
    }
}

/// Named environment constructors.
pub struct Registry<E> {
    specs: HashMap<String, EnvSpec<E>>,
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self { specs: HashMap::new() }
    }
}

impl<E> Registry<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if `spec.id` is already taken.
    pub fn register(&mut self, spec: EnvSpec<E>) -> Result<(), RegistryError> {
        if self.specs.contains_key(&spec.id) {
            return Err(RegistryError::Duplicate(spec.id));
        }
        tracing::debug!(id = %spec.id, max_episode_steps = ?spec.max_episode_steps, "registered environment");
        self.specs.insert(spec.id.clone(), spec);
        Ok(())
    }

    #[must_use]
    pub fn spec(&self, id: &str) -> Option<&EnvSpec<E>> {
        self.specs.get(id)
    }

    /// Build the environment registered under `id`, wrapped in its time limit.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownId`] for an unregistered id, or
    /// whatever the entry point fails with.
    pub fn make(&self, id: &str) -> Result<TimeLimit<E>, RegistryError> {
        let spec = self
            .specs
            .get(id)
            .ok_or_else(|| RegistryError::UnknownId(id.to_string()))?;
        let env = (spec.entry_point)()?;
        Ok(TimeLimit::new(env, spec.max_episode_steps))
    }
}
