/*
 * Scene Module
 *
 * Small pieces of per-frame state for the two demos:
 * - frame clock conversion into a frame-rate relative delta time
 * - background cover scaling
 * - the scrolling tiled wave overlay
 * - the spinning sprite
 */

use nannou::prelude::*;
use std::time::Duration;

// Frame rate the delta time is relative to
pub const TARGET_FPS: f32 = 60.0;

// Longest frame the clock will report, anything slower is treated as this
pub const MAX_FRAME_TIME: Duration = Duration::from_millis(100);

// Convert the time since the last frame into a frame-rate relative delta.
// 60 FPS gives 1.0, 30 FPS gives 2.0 and 120 FPS gives 0.5.
pub fn delta_time(since_last: Duration) -> f32 {
    since_last.min(MAX_FRAME_TIME).as_secs_f32() * TARGET_FPS
}

// Scale that makes a texture cover the whole screen without distortion
pub fn cover_scale(screen_w: f32, screen_h: f32, tex_w: f32, tex_h: f32) -> f32 {
    if tex_w <= 0.0 || tex_h <= 0.0 {
        return 1.0;
    }
    f32::max(screen_w / tex_w, screen_h / tex_h)
}

// Wave overlay repeated across the screen and scrolled diagonally
#[derive(Debug, Clone, PartialEq)]
pub struct TilingOverlay {
    pub tile_position: Vec2,
    pub tile_scale: f32,
    pub scroll_speed: f32,
}

impl Default for TilingOverlay {
    fn default() -> Self {
        Self {
            tile_position: Vec2::ZERO,
            tile_scale: 0.5,
            scroll_speed: 1.0,
        }
    }
}

impl TilingOverlay {
    pub fn advance(&mut self, delta_time: f32) {
        let offset = delta_time * self.scroll_speed;
        self.tile_position.x += offset;
        self.tile_position.y += offset;
    }

    // Normalised texture area covering the screen at the current offset.
    // The x/y of the result is the centre, in texture units where one tile is 1.0,
    // with +y pointing down the texture. The offset is folded into a single tile.
    pub fn texture_area(&self, screen_w: f32, screen_h: f32, tex_w: f32, tex_h: f32) -> Rect {
        let tile_w = tex_w * self.tile_scale;
        let tile_h = tex_h * self.tile_scale;
        if tile_w <= 0.0 || tile_h <= 0.0 {
            return Rect::from_x_y_w_h(0.5, 0.5, 1.0, 1.0);
        }

        let left = (-self.tile_position.x / tile_w).rem_euclid(1.0);
        let top = (-self.tile_position.y / tile_h).rem_euclid(1.0);
        let w = screen_w / tile_w;
        let h = screen_h / tile_h;

        Rect::from_x_y_w_h(left + w / 2.0, top + h / 2.0, w, h)
    }
}

// A sprite turning at a constant rate around its centre
#[derive(Debug, Clone, PartialEq)]
pub struct SpinningSprite {
    pub rotation: f32,
    pub spin_rate: f32,
}

impl Default for SpinningSprite {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            spin_rate: 0.1,
        }
    }
}

impl SpinningSprite {
    pub fn advance(&mut self, delta_time: f32) {
        self.rotation += delta_time * self.spin_rate;
    }
}
