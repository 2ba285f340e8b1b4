/*
 * Launch Options Module
 *
 * Command line options read once at start-up. Everything that can be tuned
 * while running lives in PondParams instead.
 */

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::params::PondParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// A single sprite rotating in the middle of the window
    Spin,
    /// Wandering fish over a pond with waves and water distortion
    Pond,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "fishpond", version, about = "Spinning sprite and animated fish pond demos")]
pub struct LaunchOptions {
    /// Which demo to run
    #[arg(long, value_enum, default_value_t = Demo::Pond)]
    pub demo: Demo,

    /// Number of fish in the pond
    #[arg(long, default_value_t = 20)]
    pub fish: usize,

    /// Seed for fish placement, random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory holding the demo images
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,

    /// Turn off the water distortion
    #[arg(long)]
    pub no_displacement: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            demo: Demo::Pond,
            fish: 20,
            seed: None,
            assets: PathBuf::from("assets"),
            no_displacement: false,
        }
    }
}

impl LaunchOptions {
    // Starting UI parameters for these options
    pub fn initial_params(&self) -> PondParams {
        let mut params = PondParams::default();
        params.fish_count = self.fish;
        params.enable_displacement = !self.no_displacement;
        params
    }
}
