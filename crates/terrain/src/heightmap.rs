//! Row-major grid of terrain elevations.

use crate::TerrainError;
use serde::{Deserialize, Serialize};

/// A `rows × cols` grid of heights stored row-major.
///
/// Rows run across the arena (the ant's y axis) and columns run along it
/// (the x axis), so the default 50 × 1000 map is long and narrow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeightMap {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl HeightMap {
    /// Flat map of the given resolution.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::EmptyResolution`] if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, TerrainError> {
        if rows == 0 || cols == 0 {
            return Err(TerrainError::EmptyResolution { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        })
    }

    /// Wrap existing row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::LengthMismatch`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self, TerrainError> {
        if rows == 0 || cols == 0 {
            return Err(TerrainError::EmptyResolution { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(TerrainError::LengthMismatch {
                expected: rows * cols,
                got: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * self.cols + col] = value;
    }

    /// `self += weight * other`, element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::ShapeMismatch`] if the shapes differ.
    pub fn add_scaled(&mut self, other: &Self, weight: f32) -> Result<(), TerrainError> {
        if self.shape() != other.shape() {
            return Err(TerrainError::ShapeMismatch {
                expected: self.shape(),
                got: other.shape(),
            });
        }
        for (h, o) in self.data.iter_mut().zip(&other.data) {
            *h += weight * o;
        }
        Ok(())
    }

    #[must_use]
    pub fn min(&self) -> f32 {
        self.data.iter().copied().fold(f32::INFINITY, f32::min)
    }

    #[must_use]
    pub fn max(&self) -> f32 {
        self.data.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Bilinearly interpolated height at fractional position `(u, v)`.
    ///
    /// `u` spans the columns and `v` the rows, both over `[0, 1]`; values
    /// outside that range are clamped to the border.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample_bilinear(&self, u: f32, v: f32) -> f32 {
        let x = u.clamp(0.0, 1.0) * (self.cols - 1) as f32;
        let y = v.clamp(0.0, 1.0) * (self.rows - 1) as f32;
        let c0 = x.floor() as usize;
        let r0 = y.floor() as usize;
        let c1 = (c0 + 1).min(self.cols - 1);
        let r1 = (r0 + 1).min(self.rows - 1);
        let tx = x - c0 as f32;
        let ty = y - r0 as f32;

        let at = |r: usize, c: usize| self.data[r * self.cols + c];
        let top = at(r0, c0) + (at(r0, c1) - at(r0, c0)) * tx;
        let bottom = at(r1, c0) + (at(r1, c1) - at(r1, c0)) * tx;
        top + (bottom - top) * ty
    }
}

impl Default for HeightMap {
    /// A single flat cell.
    fn default() -> Self {
        Self {
            rows: 1,
            cols: 1,
            data: vec![0.0],
        }
    }
}
