//! Multipong entry point
//!
//! Headless soak harness: loads and validates the config, seeds the RNG and
//! drives the game loop through the scripted frontend, logging a run
//! summary. A windowed frontend plugs into the same `Frontend` trait.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::Rng;

use multipong::frontend::Headless;
use multipong::sim::Phase;
use multipong::{Config, Game, SouthWall};

#[derive(Parser, Debug)]
#[command(name = "multipong", about = "One-paddle multiball arcade game (headless harness)")]
struct Args {
    /// JSON config file; defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed; random when omitted (always logged for reproducibility)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: usize,

    /// Simulated milliseconds per frame
    #[arg(long, default_value_t = 1000.0 / 60.0)]
    dt_ms: f32,

    /// Play the ceaseless variant: the south wall bounces instead of ending the run
    #[arg(long)]
    bounce: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if args.bounce {
        config.south_wall = SouthWall::Bounce;
    }

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("seed {seed}");

    let mut game = Game::new(config, seed)?;
    let mut frontend = Headless::idle(args.dt_ms, args.frames);
    let frames = game.run(&mut frontend);

    log::info!(
        "run complete: {frames} frames, {} balls in play, {:.1}s of game time, {}",
        game.world.balls.len(),
        game.world.elapsed_ms / 1000.0,
        match game.world.phase {
            Phase::Running => "still running",
            Phase::GameOver => "ended in game over",
        }
    );

    Ok(())
}
