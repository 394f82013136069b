//! World state
//!
//! The `World` aggregate owns everything the tick mutates: walls, paddle,
//! balls, the run clock, the phase flag and the seeded RNG. No process-wide
//! state; the loop controller owns the one instance.

use std::f32::consts::FRAC_PI_4;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::Mover;
use super::geometry::Rect;
use crate::config::Config;

/// Display color, not part of physics.
pub type Rgb = [u8; 3];

pub const WALL_COLOR: Rgb = [0, 0, 255];
pub const PADDLE_COLOR: Rgb = [255, 0, 0];
const SEED_BALL_COLOR: Rgb = [0, 255, 0];

/// Spawned balls draw uniformly from this palette.
pub const PALETTE: [Rgb; 11] = [
    [0, 255, 0],
    [0, 0, 255],
    [255, 255, 0],
    [255, 0, 255],
    [0, 255, 255],
    [128, 255, 0],
    [255, 128, 0],
    [128, 0, 255],
    [255, 0, 128],
    [0, 255, 128],
    [0, 128, 255],
];

/// Current phase of gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Active play
    Running,
    /// A ball got past the paddle; physics frozen until restart
    GameOver,
}

/// A ball entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub mover: Mover,
    pub color: Rgb,
}

/// The four static boundary walls, one wall-thickness outside each screen
/// edge. A ball only fully overlaps a wall while crossing the boundary.
#[derive(Debug, Clone, Copy)]
pub struct Walls {
    pub north: Rect,
    pub east: Rect,
    pub south: Rect,
    pub west: Rect,
}

impl Walls {
    fn new(config: &Config) -> Self {
        let (w, h, t) = (
            config.window_width,
            config.window_height,
            config.wall_thickness,
        );
        Self {
            north: Rect::new(0.0, -t, w, t),
            east: Rect::new(w, 0.0, t, h),
            south: Rect::new(0.0, h, w, t),
            west: Rect::new(-t, 0.0, t, h),
        }
    }
}

/// Complete game state for one run.
#[derive(Debug, Clone)]
pub struct World {
    config: Config,
    pub walls: Walls,
    pub paddle: Mover,
    /// Insertion order = spawn order; balls only leave on reset.
    pub balls: Vec<Ball>,
    /// Milliseconds since the last (re)start.
    pub elapsed_ms: f32,
    pub phase: Phase,
    rng: Pcg32,
}

impl World {
    /// Build a fresh world: walls, centered paddle, one seed ball.
    /// `config` must already be validated.
    pub fn new(config: Config, seed: u64) -> Self {
        let walls = Walls::new(&config);
        let mut world = Self {
            walls,
            paddle: Self::starting_paddle(&config),
            balls: Vec::with_capacity(config.max_balls),
            elapsed_ms: 0.0,
            phase: Phase::Running,
            rng: Pcg32::seed_from_u64(seed),
            config,
        };
        let ball = world.seed_ball();
        world.balls.push(ball);
        world
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn starting_paddle(config: &Config) -> Mover {
        let rect = Rect::new(
            (config.window_width - config.paddle_width) / 2.0,
            (config.window_height * 0.9).round(),
            config.paddle_width,
            config.paddle_height,
        );
        // Theta pinned at 0; input drives direction through the sign of dt.
        Mover::new(rect, config.paddle_speed, 0.0)
    }

    fn seed_ball(&self) -> Ball {
        let size = self.config.ball_size;
        Ball {
            mover: Mover::new(
                Rect::new((self.config.window_width / 2.0).round(), 100.0, size, size),
                self.config.ball_speed,
                FRAC_PI_4,
            ),
            color: SEED_BALL_COLOR,
        }
    }

    /// Full reset: discard all but a fresh seed ball, recenter the paddle,
    /// zero the clock, clear game-over. The RNG stream is not reseeded.
    pub fn reset(&mut self) {
        self.paddle = Self::starting_paddle(&self.config);
        self.balls.clear();
        let ball = self.seed_ball();
        self.balls.push(ball);
        self.elapsed_ms = 0.0;
        self.phase = Phase::Running;
        log::debug!("world reset");
    }

    /// Append one randomized ball: near the horizontal center and the top
    /// band, sized ±25% of nominal, heading steeply down-left or down-right,
    /// palette color, fixed speed.
    pub fn spawn_ball(&mut self) {
        use std::f32::consts::PI;

        let theta = if self.rng.random_bool(0.5) {
            self.rng.random_range(PI / 6.0..=PI / 3.0)
        } else {
            self.rng.random_range(2.0 * PI / 3.0..=5.0 * PI / 6.0)
        };
        let size = (self.config.ball_size * (1.0 + self.rng.random_range(-0.25..=0.25))).round();
        let x = (self.config.window_width * (0.5 + self.rng.random_range(-0.3..=0.3))).round();
        let y = (self.config.window_height * (0.1 + self.rng.random_range(-0.1..=0.1))).round();
        let color = PALETTE[self.rng.random_range(0..PALETTE.len())];

        let ball = Ball {
            mover: Mover::new(Rect::new(x, y, size, size), self.config.ball_speed, theta),
            color,
        };
        log::debug!(
            "spawned ball #{} at ({x}, {y}) size {size} theta {theta:.3}",
            self.balls.len() + 1
        );
        self.balls.push(ball);
    }
}
