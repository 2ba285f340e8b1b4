/*
 * Application Module
 *
 * This module defines the main application model and logic for the demos.
 * It handles the initialization and per-frame update of whichever demo was
 * picked at launch. Rendering lives in the renderer module.
 *
 * Frame handling:
 * - every fish is stepped exactly once per rendered frame
 * - the overlay and the spinning sprite advance by frame-rate relative delta time
 * - the pond follows the window size so the wrap bounds track resizes
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::sync::OnceLock;

use crate::assets::PondAssets;
use crate::config::{Demo, LaunchOptions};
use crate::debug::DebugInfo;
use crate::domain::Domain;
use crate::fish::Fish;
use crate::params::PondParams;
use crate::physics;
use crate::renderer;
use crate::scene::{self, SpinningSprite, TilingOverlay};
use crate::ui;

// nannou's model function cannot capture, so launch options are parked here
static LAUNCH_OPTIONS: OnceLock<LaunchOptions> = OnceLock::new();

// Share of the primary monitor the window takes up
const WINDOW_FRACTION: f32 = 0.8;
const FALLBACK_WINDOW_SIZE: (f32, f32) = (1024.0, 768.0);

// The animated pond: a fixed school plus the scrolling overlay
#[derive(Debug, Clone, PartialEq)]
pub struct PondScene {
    pub school: Vec<Fish>,
    pub overlay: TilingOverlay,
    pub domain: Domain,
}

impl PondScene {
    pub fn new<R: rand::Rng>(rng: &mut R, fish_count: usize, domain: Domain) -> Self {
        Self {
            school: physics::spawn_school(rng, fish_count, &domain),
            overlay: TilingOverlay::default(),
            domain,
        }
    }

    // One rendered frame: fish step once each, the overlay scrolls by delta time
    pub fn update(&mut self, delta_time: f32) {
        physics::update_school(&mut self.school, &self.domain);
        self.overlay.advance(delta_time);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.domain.width = width;
        self.domain.height = height;
    }

    pub fn respawn<R: rand::Rng>(&mut self, rng: &mut R, fish_count: usize) {
        self.school = physics::spawn_school(rng, fish_count, &self.domain);
    }
}

pub enum Scene {
    Spin(SpinningSprite),
    Pond(PondScene),
}

// Main model for the application
pub struct Model {
    pub options: LaunchOptions,
    pub params: PondParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub assets: PondAssets,
    pub scene: Scene,
    rng: SmallRng,
}

// Start the nannou app with the given options
pub fn run(options: LaunchOptions) {
    if LAUNCH_OPTIONS.set(options).is_err() {
        log::warn!("launch options were already set, keeping the first ones");
    }
    nannou::app(model).update(update).run();
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let options = LAUNCH_OPTIONS.get().cloned().unwrap_or_default();

    // Size the window from the primary monitor when there is one
    let (window_width, window_height) = app
        .primary_monitor()
        .map(|monitor| {
            let size = monitor.size();
            (size.width as f32 * WINDOW_FRACTION, size.height as f32 * WINDOW_FRACTION)
        })
        .unwrap_or(FALLBACK_WINDOW_SIZE);

    let title = match options.demo {
        Demo::Spin => "Spinning Sprite",
        Demo::Pond => "Fish Pond",
    };

    // Create the main window with dynamic size
    let window_id = app
        .new_window()
        .title(title)
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to build the main window");

    // Create the UI
    let egui = {
        let window = app.window(window_id).expect("main window closed during setup");
        Egui::from_window(&window)
    };

    let params = options.initial_params();
    let mut rng = match options.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let (assets, scene) = match options.demo {
        Demo::Spin => {
            let assets = PondAssets::load_spin(app, &options.assets);
            let spinner = SpinningSprite {
                spin_rate: params.spin_rate,
                ..SpinningSprite::default()
            };
            (assets, Scene::Spin(spinner))
        }
        Demo::Pond => {
            let assets = PondAssets::load_pond(app, &options.assets);
            let rect = app.window_rect();
            let domain = Domain::from_viewport(rect.w(), rect.h());
            let pond = PondScene::new(&mut rng, params.fish_count, domain);
            log::info!(
                "pond ready: {} fish, {} fish textures, seed {:?}",
                pond.school.len(),
                assets.fish_textures_loaded(),
                options.seed
            );
            (assets, Scene::Pond(pond))
        }
    };

    Model {
        options,
        params,
        egui,
        debug_info: DebugInfo::default(),
        assets,
        scene,
        rng,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    let delta_time = scene::delta_time(update.since_last);
    model.debug_info.record_frame(app.fps(), update.since_last, delta_time);

    // Update UI and check whether the school needs respawning
    model.egui.set_elapsed_time(update.since_start);
    let actions = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info, model.options.demo);

    if actions.changes.any_changed {
        log::debug!("parameters changed: {:?}", model.params);
    }

    match &mut model.scene {
        Scene::Spin(spinner) => {
            spinner.spin_rate = model.params.spin_rate;

            if !model.params.pause_simulation {
                spinner.advance(delta_time);
            }
        }
        Scene::Pond(pond) => {
            pond.overlay.tile_scale = model.params.overlay_tile_scale;
            pond.overlay.scroll_speed = model.params.overlay_scroll_speed;

            // Keep the wrap bounds in step with the window
            let rect = app.window_rect();
            pond.resize(rect.w(), rect.h());

            if actions.respawn || actions.changes.fish_count_changed {
                pond.respawn(&mut model.rng, model.params.fish_count);
                model.debug_info.respawns += 1;
                log::info!("respawned the school with {} fish", pond.school.len());
            }

            if !model.params.pause_simulation {
                pond.update(delta_time);
            }
        }
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
