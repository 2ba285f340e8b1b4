/*
 * Pond Parameters Module
 *
 * This module defines the PondParams struct that contains all the
 * adjustable parameters for the demos. These parameters can be
 * modified through the UI. It also provides methods for parameter change
 * detection so the app knows when the school has to be respawned.
 */

use crate::effects::DEFAULT_DISPLACEMENT_SCALE;

// Parameters for the demos that can be adjusted via UI
#[derive(Debug, Clone, PartialEq)]
pub struct PondParams {
    pub fish_count: usize,
    pub overlay_tile_scale: f32,
    pub overlay_scroll_speed: f32,
    pub displacement_scale: f32,
    pub spin_rate: f32,
    pub show_overlay: bool,
    pub enable_displacement: bool,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Debug, Clone, PartialEq)]
struct ParamSnapshot {
    fish_count: usize,
    overlay_tile_scale: f32,
    overlay_scroll_speed: f32,
    displacement_scale: f32,
    spin_rate: f32,
    show_overlay: bool,
    enable_displacement: bool,
    show_debug: bool,
    pause_simulation: bool,
}

// What changed since the last snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamChanges {
    pub fish_count_changed: bool,
    pub any_changed: bool,
}

impl Default for PondParams {
    fn default() -> Self {
        Self {
            fish_count: 20,
            overlay_tile_scale: 0.5,
            overlay_scroll_speed: 1.0,
            displacement_scale: DEFAULT_DISPLACEMENT_SCALE,
            spin_rate: 0.1,
            show_overlay: true,
            enable_displacement: true,
            show_debug: false,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl PondParams {
    fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            fish_count: self.fish_count,
            overlay_tile_scale: self.overlay_tile_scale,
            overlay_scroll_speed: self.overlay_scroll_speed,
            displacement_scale: self.displacement_scale,
            spin_rate: self.spin_rate,
            show_overlay: self.show_overlay,
            enable_displacement: self.enable_displacement,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        }
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.snapshot());
    }

    // Compare against the last snapshot, nothing has changed without one
    pub fn detect_changes(&self) -> ParamChanges {
        let Some(prev) = &self.previous_values else {
            return ParamChanges::default();
        };

        ParamChanges {
            fish_count_changed: self.fish_count != prev.fish_count,
            any_changed: self.snapshot() != *prev,
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_fish_count_range() -> std::ops::RangeInclusive<usize> {
        1..=500
    }

    pub fn get_tile_scale_range() -> std::ops::RangeInclusive<f32> {
        0.1..=2.0
    }

    pub fn get_scroll_speed_range() -> std::ops::RangeInclusive<f32> {
        0.0..=5.0
    }

    pub fn get_displacement_scale_range() -> std::ops::RangeInclusive<f32> {
        0.0..=150.0
    }

    pub fn get_spin_rate_range() -> std::ops::RangeInclusive<f32> {
        -0.5..=0.5
    }
}
