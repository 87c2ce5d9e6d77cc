#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Formicarium Physics
//!
//! The simulator side of the Formicarium environment.
//!
//! This crate defines what an environment may ask of a locomotion simulator
//! and ships a small reference implementation of it.
//!
//! ## Key Components
//!
//! -   **Contract:** The [`World`], [`Agent`] and [`HeightField`] traits in
//!     the [`world`] module. A type implementing all three is a
//!     [`Simulation`].
//! -   **Reference simulator:** [`AntSim`] in the [`simulation`] module, a
//!     point-mass ant pushed over the terrain by planar leg forces and
//!     configured through [`AntConfig`].
//! -   **Errors:** [`SimError`], returned by every fallible simulator call.
//!
//! ## Usage
//!
//! The world is built once by its owner, then reset and stepped:
//!
//! ```rust,ignore
//! use physics::{AntSim, World};
//!
//! let mut sim = AntSim::default();
//! sim.build()?;
//! sim.reset()?;
//! sim.step(5)?;
//! ```

pub mod ant;
pub mod camera;
pub mod error;
pub mod integrator;
pub mod simulation;
pub mod types;
pub mod world;

pub use ant::{AntConfig, ArenaScale};
pub use error::SimError;
pub use integrator::BodyState;
pub use simulation::AntSim;
pub use types::{ActionShape, CameraFrame, SensorReading, SensorSpec, Vec3};
pub use world::{Agent, HeightField, Simulation, World};
