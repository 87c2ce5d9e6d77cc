//! # Perlin Noise
//!
//! Classic 2D gradient noise over a square lattice of random unit vectors.
//! The lattice has `frequency` cells along each axis of the output, so a
//! frequency of 1 yields a single smooth bump and a frequency of 9 yields
//! nine hills along the arena.

use crate::{HeightMap, TerrainError};
use std::f32::consts::{SQRT_2, TAU};

/// Quintic smoothstep used to blend lattice contributions.
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn dot(g: [f32; 2], dx: f32, dy: f32) -> f32 {
    g[0] * dx + g[1] * dy
}

/// Lattice coordinate of output index `i` out of `n` samples.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lattice_coord(i: usize, n: usize, frequency: usize) -> (usize, f32) {
    let t = i as f32 * frequency as f32 / n as f32;
    let cell = (t.floor() as usize).min(frequency - 1);
    (cell, t - cell as f32)
}

/// Sample a `resolution`-shaped patch of Perlin noise.
///
/// Values fall in roughly `[-1, 1]`. The gradient lattice is drawn from
/// `rng`, so the result is reproducible for a given RNG state.
///
/// # Errors
///
/// Returns [`TerrainError::ZeroFrequency`] for `frequency == 0` and
/// [`TerrainError::EmptyResolution`] for an empty resolution.
pub fn perlin(
    rng: &mut fastrand::Rng,
    resolution: (usize, usize),
    frequency: usize,
) -> Result<HeightMap, TerrainError> {
    if frequency == 0 {
        return Err(TerrainError::ZeroFrequency);
    }
    let (rows, cols) = resolution;
    let mut map = HeightMap::zeros(rows, cols)?;

    let lattice = frequency + 1;
    let gradients: Vec<[f32; 2]> = (0..lattice * lattice)
        .map(|_| {
            let angle = rng.f32() * TAU;
            [angle.cos(), angle.sin()]
        })
        .collect();
    let grad = |gy: usize, gx: usize| gradients[gy * lattice + gx];

    for r in 0..rows {
        let (gy, fy) = lattice_coord(r, rows, frequency);
        let sy = fade(fy);
        for c in 0..cols {
            let (gx, fx) = lattice_coord(c, cols, frequency);
            let sx = fade(fx);

            let n00 = dot(grad(gy, gx), fx, fy);
            let n10 = dot(grad(gy, gx + 1), fx - 1.0, fy);
            let n01 = dot(grad(gy + 1, gx), fx, fy - 1.0);
            let n11 = dot(grad(gy + 1, gx + 1), fx - 1.0, fy - 1.0);

            let value = lerp(lerp(n00, n10, sx), lerp(n01, n11, sx), sy);
            map.set(r, c, value * SQRT_2);
        }
    }
    Ok(map)
}
