/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for adjusting the demo parameters.
 * Parameter change detection is handled by the PondParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::config::Demo;
use crate::debug::DebugInfo;
use crate::params::{ParamChanges, PondParams};

// What the user asked for this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiActions {
    pub respawn: bool,
    pub changes: ParamChanges,
}

// Update the UI and report respawn requests and parameter changes
pub fn update_ui(egui: &mut Egui, params: &mut PondParams, debug_info: &DebugInfo, demo: Demo) -> UiActions {
    let mut respawn = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            match demo {
                Demo::Spin => {
                    ui.add(egui::Slider::new(&mut params.spin_rate, PondParams::get_spin_rate_range()).text("Spin Rate"));
                }
                Demo::Pond => {
                    ui.collapsing("Fish", |ui| {
                        ui.add(egui::Slider::new(&mut params.fish_count, PondParams::get_fish_count_range()).text("Number of Fish"));

                        if ui.button("Respawn Fish").clicked() {
                            respawn = true;
                        }
                    });

                    ui.collapsing("Water", |ui| {
                        ui.checkbox(&mut params.show_overlay, "Show Waves");
                        ui.add(egui::Slider::new(&mut params.overlay_tile_scale, PondParams::get_tile_scale_range()).text("Wave Tile Scale"));
                        ui.add(egui::Slider::new(&mut params.overlay_scroll_speed, PondParams::get_scroll_speed_range()).text("Wave Speed"));

                        ui.separator();

                        ui.checkbox(&mut params.enable_displacement, "Water Distortion");
                        ui.add(egui::Slider::new(&mut params.displacement_scale, PondParams::get_displacement_scale_range()).text("Distortion Strength"));
                    });
                }
            }

            ui.separator();
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time_ms()));

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause");
        });

    UiActions {
        respawn,
        changes: params.detect_changes(),
    }
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    fish_len: usize,
) {
    // Create a background panel in the top-right corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let debug_texts = debug_info.panel_lines(fish_len);
    let panel_height = line_height * debug_texts.len() as f32 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.right() - panel_width + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge of the panel
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
