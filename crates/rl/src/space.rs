//! Box-shaped action and observation spaces.

use std::f32::consts::TAU;

/// An n-dimensional box `[low, high]`, where either bound may be infinite.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSpace {
    shape: Vec<usize>,
    low: Vec<f32>,
    high: Vec<f32>,
}

impl BoxSpace {
    /// Box with the same bounds in every dimension.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    #[must_use]
    pub fn new(low: f32, high: f32, shape: &[usize]) -> Self {
        assert!(low <= high, "box space low bound {low} exceeds high bound {high}");
        let n = shape.iter().product();
        Self {
            shape: shape.to_vec(),
            low: vec![low; n],
            high: vec![high; n],
        }
    }

    /// Box spanning all reals.
    #[must_use]
    pub fn unbounded(shape: &[usize]) -> Self {
        Self::new(f32::NEG_INFINITY, f32::INFINITY, shape)
    }

    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of scalar entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.low.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.low.is_empty()
    }

    #[must_use]
    pub fn low(&self) -> &[f32] {
        &self.low
    }

    #[must_use]
    pub fn high(&self) -> &[f32] {
        &self.high
    }

    #[must_use]
    pub fn contains(&self, x: &[f32]) -> bool {
        x.len() == self.len()
            && x
                .iter()
                .zip(self.low.iter().zip(&self.high))
                .all(|(v, (lo, hi))| (*lo..=*hi).contains(v))
    }

    /// Draw a random element.
    ///
    /// Bounded dimensions are sampled uniformly, half-bounded ones from a
    /// shifted exponential and unbounded ones from a standard normal.
    #[must_use]
    pub fn sample(&self, rng: &mut fastrand::Rng) -> Vec<f32> {
        self.low
            .iter()
            .zip(&self.high)
            .map(|(&lo, &hi)| match (lo.is_finite(), hi.is_finite()) {
                (true, true) => lo + rng.f32() * (hi - lo),
                (true, false) => lo + exponential(rng),
                (false, true) => hi - exponential(rng),
                (false, false) => standard_normal(rng),
            })
            .collect()
    }
}

fn exponential(rng: &mut fastrand::Rng) -> f32 {
    -(1.0 - rng.f32()).ln()
}

/// Box-Muller transform.
fn standard_normal(rng: &mut fastrand::Rng) -> f32 {
    let u1 = 1.0 - rng.f32();
    let u2 = rng.f32();
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}
