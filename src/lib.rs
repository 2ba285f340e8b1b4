/*
 * Fish Pond - Module Definitions
 *
 * This file defines the module structure for the fish pond demos.
 * The motion model (fish, domain, physics) has no window or GPU
 * dependencies, the rest wires it into a nannou application.
 */

// Re-export key components for easier access
pub use app::Model;
pub use config::{Demo, LaunchOptions};
pub use domain::Domain;
pub use fish::Fish;
pub use params::PondParams;

// Define modules
pub mod app;
pub mod assets;
pub mod config;
pub mod debug;
pub mod domain;
pub mod effects;
pub mod fish;
pub mod params;
pub mod physics;
pub mod renderer;
pub mod scene;
pub mod ui;

// Constants
pub const TURN_COEFFICIENT: f32 = 0.01;
pub const STAGE_PADDING: f32 = 100.0;
pub const FISH_VARIANTS: usize = 5;
pub const FISH_SIZE: f32 = 60.0;
