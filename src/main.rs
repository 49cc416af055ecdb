/*
 * Flocking Simulation
 *
 * Boids follow three local rules (alignment, cohesion and separation)
 * against the neighbors they can perceive. The control panel tunes the
 * rules live; clicking in the window adds a boid.
 */

use anyhow::{ensure, Result};
use clap::Parser;

use flocking::SimulationConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Reynolds flocking simulation", long_about = None)]
struct Args {
    /// Number of boids spawned at startup
    #[arg(short = 'n', long, default_value_t = 150)]
    boids: usize,

    /// Seed for spawn positions and headings
    #[arg(short, long)]
    seed: Option<u64>,

    /// Window size as a fraction of the primary monitor, in (0, 1]
    #[arg(long, default_value_t = 0.5)]
    scale: f32,

    /// Run the per-boid update on all cores
    #[arg(short, long)]
    parallel: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    fn into_config(self) -> Result<SimulationConfig> {
        ensure!(
            self.scale.is_finite() && self.scale > 0.0 && self.scale <= 1.0,
            "window scale must be in (0, 1], got {}",
            self.scale
        );

        Ok(SimulationConfig {
            boid_count: self.boids,
            seed: self.seed,
            window_scale: self.scale,
            parallel: self.parallel,
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = args.into_config()?;
    log::info!("flocking simulation starting with {:?}", config);

    flocking::app::run(config);

    Ok(())
}
