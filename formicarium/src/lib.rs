//! # Formicarium
//!
//! An episodic reinforcement-learning environment in which a simulated ant
//! learns to walk along procedurally generated terrain.
//!
//! ## Project Architecture
//!
//! -   **`formicarium`:** The crate you are currently viewing. It owns the
//!     command-line entry point and the rollout loop in [`app`].
//! -   **[`terrain`]:** Perlin noise and the octave-sum height-map generator.
//! -   **[`physics`]:** The simulator contract (`World`, `Agent`,
//!     `HeightField`) and the reference point-mass ant.
//! -   **[`rl`]:** The `Env` interface, the Formicarium task, the registry
//!     and the time-limit wrapper.
//!
//! ## Getting Started
//!
//! ```text
//! RUST_LOG=info cargo run -p formicarium -- --seed 42 --steps 1000
//! ```

pub mod app;

pub use physics;
pub use rl;
pub use terrain;
