/*
 * Fish Module
 *
 * This module defines the Fish struct and its motion model.
 * Each fish swims on its own without looking at the others:
 * 1. Turn: the heading drifts by the fish's constant turn rate
 * 2. Swim: move forward along the heading at constant speed
 * 3. Wrap: reappear on the opposite side after leaving the padded pond
 *
 * Positions are in screen space, origin top-left with +y pointing down.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::domain::Domain;
use crate::TURN_COEFFICIENT;

// Ranges sampled once when a fish is created
pub const SPEED_RANGE: std::ops::Range<f32> = 2.0..4.0;
pub const TURN_RATE_RANGE: std::ops::Range<f32> = -0.8..0.2;
pub const SCALE_RANGE: std::ops::Range<f32> = 0.2..0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct Fish {
    pub position: Vec2,
    pub heading: f32,
    speed: f32,
    turn_rate: f32,
    pub scale: f32,
    pub variant: usize,
}

impl Fish {
    pub fn new(position: Vec2, heading: f32, speed: f32, turn_rate: f32) -> Self {
        Self {
            position,
            heading,
            speed,
            turn_rate,
            scale: 1.0,
            variant: 0,
        }
    }

    // Spawn a fish somewhere inside the visible part of the domain
    pub fn random<R: Rng>(rng: &mut R, domain: &Domain, variant: usize) -> Self {
        let heading = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(SPEED_RANGE);
        let turn_rate = rng.gen_range(TURN_RATE_RANGE);
        let scale = rng.gen_range(SCALE_RANGE);

        // gen_range panics on an empty range, so a collapsed viewport spawns on its edge
        let x = if domain.width > 0.0 { rng.gen_range(0.0..domain.width) } else { 0.0 };
        let y = if domain.height > 0.0 { rng.gen_range(0.0..domain.height) } else { 0.0 };

        Self {
            position: vec2(x, y),
            heading,
            speed,
            turn_rate,
            scale,
            variant,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn turn_rate(&self) -> f32 {
        self.turn_rate
    }

    // Sprite rotation that lines the artwork up with the travel direction
    pub fn visual_rotation(&self) -> f32 {
        -self.heading - PI / 2.0
    }

    // Unit vector of travel: sine drives x, cosine drives y
    pub fn direction(&self) -> Vec2 {
        vec2(self.heading.sin(), self.heading.cos())
    }

    // Advance the fish by one frame
    pub fn step(&mut self, domain: &Domain) {
        self.heading += self.turn_rate * TURN_COEFFICIENT;
        self.position += self.direction() * self.speed;
        domain.wrap(&mut self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn step_moves_along_heading() {
        let domain = Domain::new(800.0, 600.0, 100.0);
        let mut fish = Fish::new(vec2(400.0, 300.0), PI / 2.0, 2.0, 0.0);
        fish.step(&domain);
        assert!((fish.position.x - 402.0).abs() < EPSILON);
        assert!((fish.position.y - 300.0).abs() < EPSILON);
    }

    #[test]
    fn step_turns_before_moving() {
        let domain = Domain::new(800.0, 600.0, 100.0);
        let mut fish = Fish::new(vec2(400.0, 300.0), 0.0, 3.0, 0.5);
        fish.step(&domain);

        let heading = 0.5 * TURN_COEFFICIENT;
        assert!((fish.heading - heading).abs() < EPSILON);
        assert!((fish.position.x - (400.0 + heading.sin() * 3.0)).abs() < EPSILON);
        assert!((fish.position.y - (300.0 + heading.cos() * 3.0)).abs() < EPSILON);
    }

    #[test]
    fn visual_rotation_follows_heading() {
        let domain = Domain::new(800.0, 600.0, 100.0);
        let mut fish = Fish::new(vec2(0.0, 0.0), 1.25, 2.0, -0.3);
        fish.step(&domain);
        assert!((fish.visual_rotation() - (-fish.heading - PI / 2.0)).abs() < EPSILON);
    }

    #[test]
    fn random_fish_respects_ranges() {
        let mut rng = SmallRng::seed_from_u64(7);
        let domain = Domain::new(800.0, 600.0, 100.0);

        for i in 0..500 {
            let fish = Fish::random(&mut rng, &domain, i % 5);
            assert!((0.0..TAU).contains(&fish.heading));
            assert!(SPEED_RANGE.contains(&fish.speed()));
            assert!(TURN_RATE_RANGE.contains(&fish.turn_rate()));
            assert!(SCALE_RANGE.contains(&fish.scale));
            assert!((0.0..800.0).contains(&fish.position.x));
            assert!((0.0..600.0).contains(&fish.position.y));
            assert_eq!(fish.variant, i % 5);
        }
    }

    #[test]
    fn random_fish_in_collapsed_viewport() {
        let mut rng = SmallRng::seed_from_u64(1);
        let domain = Domain::new(0.0, 0.0, 100.0);
        let fish = Fish::random(&mut rng, &domain, 0);
        assert_eq!(fish.position, Vec2::ZERO);
    }
}
