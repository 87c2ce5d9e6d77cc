#![allow(dead_code)]

use physics::{
    ActionShape, Agent, CameraFrame, HeightField, SensorReading, SensorSpec, SimError, Vec3, World,
};
use terrain::HeightMap;

/// Simulator whose state is set directly by the test.
///
/// Each world sub-step moves the ant by `drift`, so the post-step state is
/// exactly known.
pub struct ScriptedAnt {
    pub pos: Vec3,
    pub x_vel: f32,
    pub drift: Vec3,
    pub start: Vec3,
    pub force: Vec<f32>,
    pub world_steps: usize,
    pub step_calls: usize,
    pub resets: usize,
    pub built: bool,
    pub terrain: HeightMap,
}

impl ScriptedAnt {
    pub const ACTION_LEN: usize = 4;
    pub const OBS_LEN: usize = 4 + 3 + 2;

    pub fn new() -> Self {
        Self {
            pos: Vec3::ZERO,
            x_vel: 0.0,
            drift: Vec3::ZERO,
            start: Vec3::new(1.0, 1.0, 0.0),
            force: vec![0.0; Self::ACTION_LEN],
            world_steps: 0,
            step_calls: 0,
            resets: 0,
            built: true,
            terrain: HeightMap::default(),
        }
    }

    /// Fixture that stays at `pos` when stepped.
    pub fn at(pos: Vec3) -> Self {
        Self { start: pos, pos, ..Self::new() }
    }
}

impl World for ScriptedAnt {
    fn build(&mut self) -> Result<(), SimError> {
        self.built = true;
        Ok(())
    }

    fn reset(&mut self) -> Result<(), SimError> {
        if !self.built {
            return Err(SimError::NotBuilt);
        }
        self.pos = self.start;
        self.resets += 1;
        Ok(())
    }

    fn step(&mut self, substeps: usize) -> Result<(), SimError> {
        if !self.built {
            return Err(SimError::NotBuilt);
        }
        for _ in 0..substeps {
            self.pos += self.drift;
        }
        self.world_steps += substeps;
        self.step_calls += 1;
        Ok(())
    }
}

impl Agent for ScriptedAnt {
    fn pos(&self) -> Vec3 {
        self.pos
    }

    fn x_vel(&self) -> f32 {
        self.x_vel
    }

    fn set_force(&mut self, force: &[f32]) -> Result<(), SimError> {
        if force.len() != Self::ACTION_LEN {
            return Err(SimError::ForceLength { expected: Self::ACTION_LEN, got: force.len() });
        }
        self.force = force.to_vec();
        Ok(())
    }

    fn sensor_observation(&self) -> Vec<SensorReading> {
        vec![
            SensorReading::new("joints", vec![0.0, 1.0, 2.0, 3.0]),
            SensorReading::new("gyro", vec![10.0, 11.0, 12.0]),
            SensorReading::new("touch", vec![20.0, 21.0]),
        ]
    }

    fn sensor_observation_shape(&self) -> Vec<SensorSpec> {
        vec![
            SensorSpec::new("joints", 4),
            SensorSpec::new("gyro", 3),
            SensorSpec::new("touch", 2),
        ]
    }

    fn camera_observation(&self) -> CameraFrame {
        let mut frame = CameraFrame::blank(2, 2);
        frame.pixels[0] = 255;
        frame
    }

    fn action_shape(&self) -> ActionShape {
        ActionShape { force: Self::ACTION_LEN }
    }
}

impl HeightField for ScriptedAnt {
    fn set_terrain(&mut self, terrain: HeightMap) {
        self.terrain = terrain;
    }

    fn terrain(&self) -> &HeightMap {
        &self.terrain
    }
}
