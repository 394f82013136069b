//! Multipong - a one-paddle multiball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, entities, world state, tick)
//! - `frontend`: Rendering/input collaborator contract + headless driver
//! - `app`: Game loop controller (timing, input translation, restart/quit)
//! - `config`: Tuning constants with startup validation

pub mod app;
pub mod config;
pub mod frontend;
pub mod sim;

pub use app::Game;
pub use config::{Config, ConfigError, SouthWall};

/// Normalize an angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if a >= TAU { 0.0 } else { a }
}
