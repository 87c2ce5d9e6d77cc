//! # Reference Ant Simulator
//!
//! [`AntSim`] is a small kinematic implementation of the simulator contract
//! in [`crate::world`]: a point-mass ant sliding over the height-field,
//! pushed by planar leg forces. It exists so environments can be exercised
//! end to end without the full articulated simulator.

use crate::ant::AntConfig;
use crate::camera::render_top_down;
use crate::error::SimError;
use crate::integrator::{integrate_ant, leg_force, BodyState};
use crate::types::{ActionShape, CameraFrame, SensorReading, SensorSpec, Vec3};
use crate::world::{Agent, HeightField, World};
use terrain::HeightMap;

const LEGS_SENSOR: &str = "legs";
const VELOCITY_SENSOR: &str = "velocity";
const CLEARANCE_SENSOR: &str = "clearance";

/// Point-mass ant over a height-field
pub struct AntSim {
    pub config: AntConfig,
    pub body: BodyState,
    terrain: HeightMap,
    force: Vec<f32>,
    leg_directions: Vec<[f32; 2]>,
    built: bool,
    substeps: usize,
}

impl AntSim {
    /// Create an unbuilt simulator; call [`World::build`] before use.
    #[must_use]
    pub fn new(config: AntConfig) -> Self {
        let legs = config.legs;
        Self {
            leg_directions: config.leg_directions(),
            config,
            body: BodyState::default(),
            terrain: HeightMap::default(),
            force: vec![0.0; legs],
            built: false,
            substeps: 0,
        }
    }

    /// Integration ticks since the last world reset.
    #[must_use]
    pub const fn substeps(&self) -> usize {
        self.substeps
    }

    #[must_use]
    pub const fn is_built(&self) -> bool {
        self.built
    }

    /// Terrain height in meters at a planar position, or `None` outside the
    /// footprint.
    #[must_use]
    pub fn ground_height(&self, x: f32, y: f32) -> Option<f32> {
        let arena = &self.config.arena;
        if !(0.0..=arena.length).contains(&x) || !(0.0..=arena.width).contains(&y) {
            return None;
        }
        Some(self.terrain.sample_bilinear(x / arena.length, y / arena.width) * arena.height_scale)
    }

    fn surface_height(&self, x: f32, y: f32) -> f32 {
        let arena = &self.config.arena;
        self.terrain.sample_bilinear(x / arena.length, y / arena.width) * arena.height_scale
    }

    fn ensure_built(&self) -> Result<(), SimError> {
        if self.built {
            Ok(())
        } else {
            Err(SimError::NotBuilt)
        }
    }
}

impl Default for AntSim {
    fn default() -> Self {
        Self::new(AntConfig::default())
    }
}

impl World for AntSim {
    fn build(&mut self) -> Result<(), SimError> {
        if self.built {
            tracing::debug!("world already built, ignoring repeated build");
            return Ok(());
        }
        self.config.validate().map_err(SimError::InvalidConfig)?;
        self.leg_directions = self.config.leg_directions();
        self.force = vec![0.0; self.config.legs];
        self.built = true;
        tracing::info!(legs = self.config.legs, dt = self.config.dt, "ant world built");
        Ok(())
    }

    fn reset(&mut self) -> Result<(), SimError> {
        self.ensure_built()?;
        let start = self.config.start;
        let ground = self.surface_height(start.x, start.y);
        self.body = BodyState {
            pos: Vec3::new(start.x, start.y, ground + start.z),
            vel: Vec3::ZERO,
            grounded: false,
        };
        self.force.iter_mut().for_each(|f| *f = 0.0);
        self.substeps = 0;
        Ok(())
    }

    fn step(&mut self, substeps: usize) -> Result<(), SimError> {
        self.ensure_built()?;
        let planar = leg_force(&self.leg_directions, &self.force);
        for _ in 0..substeps {
            let mut body = self.body;
            integrate_ant(&mut body, &self.config, planar, |x, y| self.ground_height(x, y));
            self.body = body;
        }
        self.substeps += substeps;
        tracing::trace!(substeps, x = self.body.pos.x, z = self.body.pos.z, "world stepped");
        Ok(())
    }
}

impl Agent for AntSim {
    fn pos(&self) -> Vec3 {
        self.body.pos
    }

    fn x_vel(&self) -> f32 {
        self.body.vel.x
    }

    fn set_force(&mut self, force: &[f32]) -> Result<(), SimError> {
        if force.len() != self.config.legs {
            return Err(SimError::ForceLength {
                expected: self.config.legs,
                got: force.len(),
            });
        }
        self.force.copy_from_slice(force);
        Ok(())
    }

    fn sensor_observation(&self) -> Vec<SensorReading> {
        let pos = self.body.pos;
        let clearance = pos.z - self.surface_height(pos.x, pos.y);
        vec![
            SensorReading::new(LEGS_SENSOR, self.force.clone()),
            SensorReading::new(VELOCITY_SENSOR, self.body.vel.to_array().to_vec()),
            SensorReading::new(CLEARANCE_SENSOR, vec![clearance]),
        ]
    }

    fn sensor_observation_shape(&self) -> Vec<SensorSpec> {
        vec![
            SensorSpec::new(LEGS_SENSOR, self.config.legs),
            SensorSpec::new(VELOCITY_SENSOR, 3),
            SensorSpec::new(CLEARANCE_SENSOR, 1),
        ]
    }

    fn camera_observation(&self) -> CameraFrame {
        render_top_down(&self.terrain, &self.config, self.body.pos)
    }

    fn action_shape(&self) -> ActionShape {
        ActionShape {
            force: self.config.legs,
        }
    }
}

impl HeightField for AntSim {
    fn set_terrain(&mut self, terrain: HeightMap) {
        self.terrain = terrain;
    }

    fn terrain(&self) -> &HeightMap {
        &self.terrain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built() -> AntSim {
        let mut sim = AntSim::default();
        sim.build().unwrap();
        sim.reset().unwrap();
        sim
    }

    #[test]
    fn unbuilt_world_refuses_to_run() {
        let mut sim = AntSim::default();
        assert_eq!(World::reset(&mut sim), Err(SimError::NotBuilt));
        assert_eq!(World::step(&mut sim, 1), Err(SimError::NotBuilt));
    }

    #[test]
    fn unbuilt_camera_with_invalid_config_does_not_panic() {
        let config = AntConfig { camera_resolution: 0, ..AntConfig::default() };
        let mut sim = AntSim::new(config);
        assert!(sim.camera_observation().pixels.is_empty());
        assert_eq!(sim.build(), Err(SimError::InvalidConfig("camera needs at least 2x2 pixels")));
    }

    #[test]
    fn build_is_idempotent() {
        let mut sim = built();
        sim.body.pos.x = 7.0;
        sim.build().unwrap();
        assert!(sim.is_built());
        assert_eq!(sim.pos().x, 7.0);
    }

    #[test]
    fn step_counts_substeps() {
        let mut sim = built();
        World::step(&mut sim, 5).unwrap();
        World::step(&mut sim, 2).unwrap();
        assert_eq!(sim.substeps(), 7);
        World::reset(&mut sim).unwrap();
        assert_eq!(sim.substeps(), 0);
    }

    #[test]
    fn forward_leg_moves_ant_forward() {
        let mut sim = built();
        let mut force = vec![0.0; 8];
        force[0] = 20.0;
        sim.set_force(&force).unwrap();
        World::step(&mut sim, 50).unwrap();
        assert!(sim.x() > sim.config.start.x);
        assert!(sim.x_vel() > 0.0);
    }

    #[test]
    fn wrong_force_length_is_rejected() {
        let mut sim = built();
        assert_eq!(
            sim.set_force(&[1.0, 2.0]),
            Err(SimError::ForceLength { expected: 8, got: 2 })
        );
    }

    #[test]
    fn ant_falls_off_the_footprint() {
        let mut sim = built();
        sim.body.pos.y = -1.0;
        World::step(&mut sim, 200).unwrap();
        assert!(sim.z() < -10.0);
    }

    #[test]
    fn readings_follow_declared_shape() {
        let sim = built();
        let shape = sim.sensor_observation_shape();
        let readings = sim.sensor_observation();
        assert_eq!(shape.len(), readings.len());
        for (spec, reading) in shape.iter().zip(&readings) {
            assert_eq!(spec.name, reading.name);
            assert_eq!(spec.len, reading.values.len());
        }
    }
}
