/*
 * Renderer Module
 *
 * This module draws whichever demo is running. The simulation works in
 * screen space (origin top-left, +y down, clockwise rotation), nannou draws
 * in a centred y-up space, so positions are flipped and rotations negated
 * on the way out.
 *
 * Draw order for the pond: background, fish, wave overlay, debug panel.
 */

use nannou::prelude::*;
use nannou::wgpu;

use crate::app::{Model, PondScene, Scene};
use crate::effects::DisplacementMap;
use crate::fish::Fish;
use crate::scene::{cover_scale, SpinningSprite};
use crate::ui;
use crate::FISH_SIZE;

// One tint per fish artwork variant, used when the textures are missing
const FISH_COLORS: [(u8, u8, u8); crate::FISH_VARIANTS] = [
    (242, 142, 43),
    (237, 201, 72),
    (225, 87, 89),
    (176, 122, 161),
    (240, 240, 240),
];

// Convert a screen space position into nannou's coordinate space
pub fn screen_to_world(position: Vec2, window_rect: Rect) -> Point2 {
    pt2(window_rect.left() + position.x, window_rect.top() - position.y)
}

// Where a fish is drawn, including the water distortion when enabled
pub fn draw_position(fish: &Fish, displacement: Option<(&DisplacementMap, f32)>) -> Vec2 {
    match displacement {
        Some((map, scale)) => fish.position + map.offset_at(fish.position, scale),
        None => fish.position,
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();
    draw.background().color(rgb(24u8, 74u8, 92u8));

    let window_rect = app.window_rect();

    match &model.scene {
        Scene::Spin(spinner) => draw_spinner(&draw, model, spinner),
        Scene::Pond(pond) => {
            draw_background(&draw, model, window_rect);
            draw_fish(&draw, model, pond, window_rect);

            if model.params.show_overlay {
                draw_overlay(&draw, model, pond, window_rect);
            }

            if model.params.show_debug {
                draw_pond_debug(&draw, pond, window_rect);
            }
        }
    }

    if model.params.show_debug {
        let fish_len = match &model.scene {
            Scene::Pond(pond) => pond.school.len(),
            Scene::Spin(_) => 0,
        };
        ui::draw_debug_info(&draw, &model.debug_info, window_rect, fish_len);
    }

    // Finish drawing
    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("failed to render frame: {:?}", err);
    }

    // Draw the egui UI
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::error!("failed to render controls: {:?}", err);
    }
}

// The sprite sits in the middle of the window, anchored at its centre
fn draw_spinner(draw: &Draw, model: &Model, spinner: &SpinningSprite) {
    match &model.assets.bunny {
        Some(texture) => {
            let [w, h] = texture.size();
            draw.texture(texture)
                .x_y(0.0, 0.0)
                .w_h(w as f32, h as f32)
                .rotate(-spinner.rotation);
        }
        None => {
            draw.rect()
                .x_y(0.0, 0.0)
                .w_h(26.0, 37.0)
                .rotate(-spinner.rotation)
                .color(rgb(236u8, 236u8, 236u8));
        }
    }
}

// Scale the background to cover the window and keep it centred
fn draw_background(draw: &Draw, model: &Model, window_rect: Rect) {
    if let Some(texture) = &model.assets.background {
        let [w, h] = texture.size();
        let scale = cover_scale(window_rect.w(), window_rect.h(), w as f32, h as f32);
        draw.texture(texture)
            .x_y(0.0, 0.0)
            .w_h(w as f32 * scale, h as f32 * scale);
    }
}

fn draw_fish(draw: &Draw, model: &Model, pond: &PondScene, window_rect: Rect) {
    let displacement = model
        .assets
        .active_displacement(model.params.enable_displacement, model.params.displacement_scale);

    for fish in &pond.school {
        let position = screen_to_world(draw_position(fish, displacement), window_rect);
        let rotation = -fish.visual_rotation();

        let Some(texture) = model.assets.fish_texture(fish.variant) else {
            draw_fallback_fish(draw, fish, position, rotation);
            continue;
        };

        let [w, h] = texture.size();
        draw.texture(texture)
            .xy(position)
            .w_h(w as f32 * fish.scale, h as f32 * fish.scale)
            .rotate(rotation);
    }
}

// Fish artwork faces -x, so the procedural fish does too
fn draw_fallback_fish(draw: &Draw, fish: &Fish, position: Point2, rotation: f32) {
    let size = FISH_SIZE * fish.scale;
    let (r, g, b) = FISH_COLORS[fish.variant % FISH_COLORS.len()];

    let body = [
        pt2(-size, 0.0),
        pt2(0.0, size * 0.4),
        pt2(size * 0.5, 0.0),
        pt2(0.0, -size * 0.4),
    ];
    let tail = [
        pt2(size * 0.4, 0.0),
        pt2(size, size * 0.35),
        pt2(size, -size * 0.35),
    ];

    draw.polygon()
        .color(rgb(r, g, b))
        .points(body)
        .xy(position)
        .rotate(rotation);
    draw.polygon()
        .color(rgb(r, g, b))
        .points(tail)
        .xy(position)
        .rotate(rotation);
}

// Repeat the wave texture across the window at the current scroll offset
fn draw_overlay(draw: &Draw, model: &Model, pond: &PondScene, window_rect: Rect) {
    let Some(texture) = &model.assets.overlay else {
        return;
    };

    let [w, h] = texture.size();
    let area = pond
        .overlay
        .texture_area(window_rect.w(), window_rect.h(), w as f32, h as f32);

    let sampler = wgpu::SamplerBuilder::new()
        .address_mode(wgpu::AddressMode::Repeat)
        .into_descriptor();

    let draw = draw.sampler(sampler);
    draw.texture(texture)
        .area(area)
        .x_y(0.0, 0.0)
        .wh(window_rect.wh());
}

// Outline the wrap bounds and show where the first fish is heading
fn draw_pond_debug(draw: &Draw, pond: &PondScene, window_rect: Rect) {
    let domain = &pond.domain;
    draw.rect()
        .x_y(0.0, 0.0)
        .w_h(domain.bound_width(), domain.bound_height())
        .no_fill()
        .stroke_weight(1.0)
        .stroke(rgba(1.0, 0.5, 0.0, 0.7));

    if let Some(first) = pond.school.first() {
        let start = screen_to_world(first.position, window_rect);
        let direction = first.direction();
        let end = start + vec2(direction.x, -direction.y) * first.speed() * 15.0;

        draw.arrow()
            .start(start)
            .end(end)
            .color(YELLOW)
            .stroke_weight(2.0);
    }
}
