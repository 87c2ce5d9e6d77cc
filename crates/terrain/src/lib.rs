#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::cast_precision_loss)]
//! # Formicarium Terrain
//!
//! Procedural height-maps for the Formicarium arena.
//!
//! Terrain is a sum of Perlin noise octaves. Each octave `f` contributes
//! `perlin(resolution, f) / f`, so low frequencies shape the large hills and
//! high frequencies add small bumps on top of them. All randomness is drawn
//! from a caller-owned [`fastrand::Rng`], which makes generation
//! deterministic for a given seed.
//!
//! ```rust,ignore
//! use terrain::{generate, TerrainConfig};
//!
//! let mut rng = fastrand::Rng::with_seed(42);
//! let map = generate(&mut rng, &TerrainConfig::default())?;
//! assert_eq!(map.shape(), (50, 1000));
//! ```

pub mod heightmap;
pub mod perlin;

pub use heightmap::HeightMap;
pub use perlin::perlin;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TerrainError {
    #[error("terrain resolution must be non-empty, got {rows}x{cols}")]
    EmptyResolution { rows: usize, cols: usize },
    #[error("noise frequency must be at least 1")]
    ZeroFrequency,
    #[error("height-map shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
    #[error("height-map data has {got} values, expected {expected}")]
    LengthMismatch { expected: usize, got: usize },
}

/// Resolution and octave count of generated terrain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub rows: usize,
    pub cols: usize,
    /// Highest noise frequency; octaves run `1..=octaves`.
    pub octaves: usize,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 1000,
            octaves: 9,
        }
    }
}

impl TerrainConfig {
    #[must_use]
    pub const fn resolution(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// # Errors
    ///
    /// Returns [`TerrainError::EmptyResolution`] if either dimension is zero.
    pub const fn validate(&self) -> Result<(), TerrainError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(TerrainError::EmptyResolution {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

/// Generate a fresh height-map by summing `1/f`-weighted Perlin octaves.
///
/// # Errors
///
/// Returns [`TerrainError::EmptyResolution`] if either dimension is zero.
pub fn generate(rng: &mut fastrand::Rng, config: &TerrainConfig) -> Result<HeightMap, TerrainError> {
    let (rows, cols) = config.resolution();
    let mut heights = HeightMap::zeros(rows, cols)?;
    for frequency in 1..=config.octaves {
        let octave = perlin(rng, config.resolution(), frequency)?;
        heights.add_scaled(&octave, 1.0 / frequency as f32)?;
    }
    tracing::debug!(
        rows,
        cols,
        octaves = config.octaves,
        min = heights.min(),
        max = heights.max(),
        "generated terrain"
    );
    Ok(heights)
}
