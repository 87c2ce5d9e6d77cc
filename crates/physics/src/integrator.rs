//! # Ant Integration
//!
//! Semi-implicit Euler integration of the point-mass ant, plus the terrain
//! contact that keeps it on the height-field surface.

use crate::ant::AntConfig;
use crate::types::Vec3;

/// Kinematic state of the ant body.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BodyState {
    pub pos: Vec3,
    pub vel: Vec3,
    pub grounded: bool,
}

/// Net planar force from per-leg forces.
#[must_use]
pub fn leg_force(directions: &[[f32; 2]], forces: &[f32]) -> Vec3 {
    directions
        .iter()
        .zip(forces)
        .fold(Vec3::ZERO, |acc, (dir, f)| acc + Vec3::new(dir[0] * f, dir[1] * f, 0.0))
}

/// Advance `body` by one tick.
///
/// `ground` maps a planar position to the terrain height there, or `None`
/// when the position lies outside the terrain footprint. Legs only push
/// while the body is grounded.
pub fn integrate_ant(
    body: &mut BodyState,
    config: &AntConfig,
    planar_force: Vec3,
    ground: impl Fn(f32, f32) -> Option<f32>,
) {
    let dt = config.dt;

    let mut acceleration = Vec3::new(0.0, 0.0, config.gravity);
    if body.grounded {
        acceleration += planar_force / config.mass;
    }

    body.vel += acceleration * dt;
    body.pos += body.vel * dt;

    body.grounded = false;
    if let Some(height) = ground(body.pos.x, body.pos.y) {
        if body.pos.z <= height {
            body.pos.z = height;
            body.vel.z = body.vel.z.max(0.0);
            body.vel.x *= config.ground_damping;
            body.vel.y *= config.ground_damping;
            body.grounded = true;
        }
    }
}
