//! # Simulator Contract
//!
//! The capabilities an environment needs from a locomotion simulator, split
//! the same way the simulator itself is: a [`World`] that advances time, an
//! [`Agent`] body that is read and actuated, and a [`HeightField`] holding
//! the terrain. Anything implementing all three is a [`Simulation`] and can
//! be driven by the Formicarium environment.

use crate::error::SimError;
use crate::types::{ActionShape, CameraFrame, SensorReading, SensorSpec, Vec3};
use terrain::HeightMap;

/// Owner of simulated time.
pub trait World {
    /// One-time construction of the world.
    ///
    /// Must be called by the owning application before the first
    /// [`reset`](World::reset). Calling it again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if the world cannot be built.
    fn build(&mut self) -> Result<(), SimError>;

    /// Return the world to its start configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NotBuilt`] if [`build`](World::build) was never called.
    fn reset(&mut self) -> Result<(), SimError>;

    /// Advance the world by `substeps` integration ticks.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NotBuilt`] if [`build`](World::build) was never called.
    fn step(&mut self, substeps: usize) -> Result<(), SimError>;
}

/// The actuated body.
pub trait Agent {
    fn pos(&self) -> Vec3;

    /// Forward position along the track.
    fn x(&self) -> f32 {
        self.pos().x
    }

    /// Height.
    fn z(&self) -> f32 {
        self.pos().z
    }

    /// Forward velocity.
    fn x_vel(&self) -> f32;

    /// Set the actuator forces applied during subsequent world steps.
    ///
    /// # Errors
    ///
    /// Implementations may reject a force vector whose length differs from
    /// [`action_shape`](Agent::action_shape).
    fn set_force(&mut self, force: &[f32]) -> Result<(), SimError>;

    /// Current readings, in the same order as
    /// [`sensor_observation_shape`](Agent::sensor_observation_shape).
    fn sensor_observation(&self) -> Vec<SensorReading>;

    /// Declared sensors. The order is fixed for the lifetime of the agent.
    fn sensor_observation_shape(&self) -> Vec<SensorSpec>;

    fn camera_observation(&self) -> CameraFrame;

    fn action_shape(&self) -> ActionShape;
}

/// Terrain storage.
pub trait HeightField {
    fn set_terrain(&mut self, terrain: HeightMap);
    fn terrain(&self) -> &HeightMap;
}

/// A complete simulator: world, agent and terrain in one object.
pub trait Simulation: World + Agent + HeightField {}

impl<T: World + Agent + HeightField> Simulation for T {}
