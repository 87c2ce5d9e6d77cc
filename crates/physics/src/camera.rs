//! Top-down terrain camera for the reference ant.

use crate::ant::AntConfig;
use crate::types::{CameraFrame, Vec3};
use terrain::HeightMap;

const ANT_COLOR: [u8; 3] = [220, 40, 40];

/// Render the square terrain patch centred on `ant` as a grayscale image,
/// brighter meaning higher. Ground outside the footprint is black and the
/// ant itself is the red centre pixel. Resolutions below 2 give an empty
/// frame.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn render_top_down(terrain: &HeightMap, config: &AntConfig, ant: Vec3) -> CameraFrame {
    let n = config.camera_resolution;
    if n < 2 {
        return CameraFrame::blank(0, 0);
    }
    let arena = &config.arena;
    let mut frame = CameraFrame::blank(n, n);

    let (lo, hi) = (terrain.min(), terrain.max());
    let span = if hi > lo { hi - lo } else { 1.0 };

    for row in 0..n {
        for col in 0..n {
            let x = ant.x + (col as f32 / (n - 1) as f32 - 0.5) * config.camera_extent;
            let y = ant.y + (row as f32 / (n - 1) as f32 - 0.5) * config.camera_extent;
            if !(0.0..=arena.length).contains(&x) || !(0.0..=arena.width).contains(&y) {
                continue;
            }
            let h = terrain.sample_bilinear(x / arena.length, y / arena.width);
            let shade = (((h - lo) / span) * 255.0).round().clamp(0.0, 255.0) as u8;
            let i = (row * n + col) * 3;
            frame.pixels[i..i + 3].copy_from_slice(&[shade; 3]);
        }
    }

    let centre = (n / 2 * n + n / 2) * 3;
    frame.pixels[centre..centre + 3].copy_from_slice(&ANT_COLOR);
    frame
}
