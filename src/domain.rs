/*
 * Domain Module
 *
 * This module defines the rectangle the fish swim in. The visible viewport
 * is extended by a padding margin on every side so a fish can swim fully
 * off screen before it reappears on the opposite edge.
 */

use nannou::prelude::*;

use crate::STAGE_PADDING;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
}

impl Domain {
    pub fn new(width: f32, height: f32, padding: f32) -> Self {
        Self { width, height, padding }
    }

    // Viewport sized domain using the default stage padding
    pub fn from_viewport(width: f32, height: f32) -> Self {
        Self::new(width, height, STAGE_PADDING)
    }

    // Full horizontal period of the wrap, padding included on both sides
    pub fn bound_width(&self) -> f32 {
        self.width + self.padding * 2.0
    }

    pub fn bound_height(&self) -> f32 {
        self.height + self.padding * 2.0
    }

    // Wrap a position around the padded edges, each axis on its own.
    // Only one period is added or removed per call.
    pub fn wrap(&self, position: &mut Vec2) {
        if position.x < -self.padding {
            position.x += self.bound_width();
        }
        if position.x > self.width + self.padding {
            position.x -= self.bound_width();
        }

        if position.y < -self.padding {
            position.y += self.bound_height();
        }
        if position.y > self.height + self.padding {
            position.y -= self.bound_height();
        }
    }
}
