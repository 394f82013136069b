//! Game configuration
//!
//! All tuning values live here. Loaded once at startup (defaults, or a JSON
//! file); anything malformed is rejected before the tick loop ever runs.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Behavior when a ball crosses the south wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SouthWall {
    /// Loss condition: the ball got past the paddle, the run ends.
    #[default]
    GameOver,
    /// Ceaseless arcade mode: the south wall bounces like the north one.
    Bounce,
}

impl SouthWall {
    pub fn as_str(&self) -> &'static str {
        match self {
            SouthWall::GameOver => "game_over",
            SouthWall::Bounce => "bounce",
        }
    }
}

/// A configuration value that would break the simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A dimension or rate that must be strictly positive is not.
    NonPositive { field: &'static str, value: f32 },
    /// Ball cap of zero would leave the arena empty forever.
    ZeroMaxBalls,
    /// Frame limiter cannot pace to zero frames per second.
    ZeroTargetFps,
    /// Paddle cannot be clamped inside a window it does not fit in.
    PaddleTooWide { paddle: f32, window: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { field, value } => {
                write!(f, "config field `{field}` must be positive, got {value}")
            }
            ConfigError::ZeroMaxBalls => write!(f, "config field `max_balls` must be at least 1"),
            ConfigError::ZeroTargetFps => write!(f, "config field `target_fps` must be at least 1"),
            ConfigError::PaddleTooWide { paddle, window } => write!(
                f,
                "paddle width {paddle} does not fit inside window width {window}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Game tuning values.
///
/// Not runtime-reconfigurable: the world is built from a validated snapshot
/// at startup and keeps it for the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Playfield size in pixels
    pub window_width: f32,
    pub window_height: f32,
    /// Depth of the off-screen boundary walls
    pub wall_thickness: f32,

    /// Hard cap on simultaneous balls
    pub max_balls: usize,
    /// Seconds between ball spawns
    pub spawn_rate_secs: f32,
    /// Speed of every ball, pixels/second
    pub ball_speed: f32,
    /// Nominal ball edge length; spawns randomize ±25% around this
    pub ball_size: f32,

    /// Paddle speed, pixels/second
    pub paddle_speed: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,

    /// Frame limiter target
    pub target_fps: u32,
    /// South-wall ruleset (loss vs. bounce)
    pub south_wall: SouthWall,
}

impl Default for Config {
    fn default() -> Self {
        let window_width = 500.0;
        let window_height = 700.0;
        Self {
            window_width,
            window_height,
            wall_thickness: 20.0,
            max_balls: 10,
            spawn_rate_secs: 5.0,
            ball_speed: 200.0,
            ball_size: 25.0,
            paddle_speed: window_width * 2.0,
            paddle_width: (window_width / 3.0).round(),
            paddle_height: (window_height / 40.0).round(),
            target_fps: 60,
            south_wall: SouthWall::GameOver,
        }
    }
}

impl Config {
    /// Reject values that would corrupt the tick loop (divide-by-zero in the
    /// spawn threshold, degenerate rectangles, unclampable paddle).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive: [(&'static str, f32); 8] = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("wall_thickness", self.wall_thickness),
            ("spawn_rate_secs", self.spawn_rate_secs),
            ("ball_speed", self.ball_speed),
            ("ball_size", self.ball_size),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        // Paddle speed of zero is playable (a statue paddle), negative is not.
        if self.paddle_speed < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "paddle_speed",
                value: self.paddle_speed,
            });
        }
        if self.max_balls == 0 {
            return Err(ConfigError::ZeroMaxBalls);
        }
        if self.target_fps == 0 {
            return Err(ConfigError::ZeroTargetFps);
        }
        if self.paddle_width > self.window_width {
            return Err(ConfigError::PaddleTooWide {
                paddle: self.paddle_width,
                window: self.window_width,
            });
        }
        Ok(())
    }

    /// Load and validate a JSON config file. Missing fields fall back to
    /// defaults; a file that parses but fails validation is still fatal.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("validating config file {}", path.display()))?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }
}
