//! Ant body configuration for the reference simulator.

use crate::types::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Physical extent of the terrain footprint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaScale {
    /// Track length in meters, spanned by the height-map columns.
    pub length: f32,
    /// Track width in meters, spanned by the height-map rows.
    pub width: f32,
    /// Multiplier from height-map value to meters.
    pub height_scale: f32,
}

impl Default for ArenaScale {
    fn default() -> Self {
        Self {
            length: 50.0,
            width: 2.5,
            height_scale: 0.5,
        }
    }
}

/// Configuration for the point-mass ant
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AntConfig {
    /// Number of legs, one actuator each
    pub legs: usize,
    /// Body mass in kg
    pub mass: f32,
    /// Vertical gravity in m/s²
    pub gravity: f32,
    /// Integration tick in seconds
    pub dt: f32,
    /// Per-tick planar velocity retention while touching the ground
    pub ground_damping: f32,
    /// Start position; `z` is a clearance above the terrain surface
    pub start: Vec3,
    pub arena: ArenaScale,
    /// Camera image side in pixels
    pub camera_resolution: usize,
    /// Side of the square terrain patch the camera sees, in meters
    pub camera_extent: f32,
}

impl Default for AntConfig {
    fn default() -> Self {
        Self {
            legs: 8,
            mass: 1.0,
            gravity: -9.81,
            dt: 0.01,
            ground_damping: 0.98,
            start: Vec3::new(2.0, 1.25, 0.1),
            arena: ArenaScale::default(),
            camera_resolution: 32,
            camera_extent: 4.0,
        }
    }
}

impl AntConfig {
    /// Planar unit direction each leg pushes the body in.
    ///
    /// Legs are spread evenly around the body starting from straight ahead.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn leg_directions(&self) -> Vec<[f32; 2]> {
        (0..self.legs)
            .map(|i| {
                let angle = TAU * i as f32 / self.legs as f32;
                [angle.cos(), angle.sin()]
            })
            .collect()
    }

    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if self.legs == 0 {
            return Err("ant needs at least one leg");
        }
        if self.mass <= 0.0 {
            return Err("mass must be positive");
        }
        if self.dt <= 0.0 {
            return Err("dt must be positive");
        }
        if self.arena.length <= 0.0 || self.arena.width <= 0.0 {
            return Err("arena must have a positive footprint");
        }
        if self.camera_resolution < 2 {
            return Err("camera needs at least 2x2 pixels");
        }
        Ok(())
    }
}
