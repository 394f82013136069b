//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod entity;
pub mod geometry;
pub mod state;
pub mod tick;

pub use entity::Mover;
pub use geometry::{Rect, horizontal_overlap, vertical_overlap};
pub use state::{Ball, PALETTE, Phase, Rgb, Walls, World};
pub use tick::{TickInput, tick};
