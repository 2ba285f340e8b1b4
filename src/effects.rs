/*
 * Effects Module
 *
 * Water distortion driven by a displacement map. The map is an image whose
 * red channel pushes sprites horizontally and whose green channel pushes them
 * vertically. Mid grey leaves a sprite where it is. The map repeats in both
 * directions so any screen position can be sampled.
 *
 * Only fish are distorted: each one is drawn at an offset sampled at its
 * position. The background and the wave overlay are drawn undistorted, and
 * simulated positions never change.
 */

use nannou::image::{self, RgbaImage};
use nannou::prelude::*;
use std::path::Path;

use crate::assets::AssetError;

// Strength of the distortion in pixels at full red/green
pub const DEFAULT_DISPLACEMENT_SCALE: f32 = 50.0;

pub struct DisplacementMap {
    pixels: RgbaImage,
}

impl DisplacementMap {
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn open(path: &Path) -> Result<Self, AssetError> {
        let pixels = image::open(path)
            .map_err(|source| AssetError::Image {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();
        Ok(Self::new(pixels))
    }

    pub fn size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    // Offset for a sprite at `point` (screen space), repeating the map
    pub fn offset_at(&self, point: Vec2, scale: f32) -> Vec2 {
        let (w, h) = self.pixels.dimensions();
        if w == 0 || h == 0 {
            return Vec2::ZERO;
        }

        let x = (point.x.floor() as i64).rem_euclid(w as i64) as u32;
        let y = (point.y.floor() as i64).rem_euclid(h as i64) as u32;
        let [r, g, _, _] = self.pixels.get_pixel(x, y).0;

        vec2(
            (r as f32 / 255.0 - 0.5) * scale,
            (g as f32 / 255.0 - 0.5) * scale,
        )
    }
}
