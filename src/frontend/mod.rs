//! Rendering/input collaborator contract
//!
//! The simulation never talks to a window, a font or a keyboard directly;
//! everything outer lives behind this trait. A real windowed frontend and
//! the headless test driver are interchangeable here.

pub mod headless;

pub use headless::Headless;

use crate::sim::{Rect, Rgb};

/// Key state sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub quit: bool,
    pub left: bool,
    pub right: bool,
    pub restart: bool,
}

/// The external collaborator: per-frame timing, key-state queries and the
/// drawing primitives. Implementations own their window/event-loop resources;
/// a failure to acquire them is a startup failure in the implementation's
/// constructor, never mid-loop.
pub trait Frontend {
    /// Sample the current key state.
    fn poll_input(&mut self) -> InputState;

    /// Wall-clock milliseconds since the previous frame.
    fn elapsed_ms(&mut self) -> f32;

    /// Queue a filled rectangle for this frame.
    fn draw_rect(&mut self, rect: &Rect, color: Rgb);

    /// Queue a text run for this frame.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Rgb, font_size: u32);

    /// Flush the queued frame to the screen.
    fn present(&mut self);

    /// Block/yield until the frame budget for `target_fps` has elapsed.
    fn limit_frame_rate(&mut self, target_fps: u32);
}
