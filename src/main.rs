/*
 * Fish Pond
 *
 * Two small animation demos:
 * 1. Spin: a sprite rotating in the middle of the window
 * 2. Pond: wandering fish over a pond background with scrolling waves
 *    and water distortion
 *
 * Set RUST_LOG=info (or debug) to follow asset loading and respawns.
 */

use clap::Parser;
use fishpond::{app, LaunchOptions};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = LaunchOptions::parse();
    log::info!("starting {:?} demo", options.demo);

    app::run(options);
}
