//! Headless frontend
//!
//! Replays a scripted input sequence with a fixed frame delta and discards
//! draw calls (while counting them). Drives the soak harness in `main` and
//! the integration tests; once the script runs out it reports quit, which
//! ends the loop cleanly.

use super::{Frontend, InputState};
use crate::sim::{Rect, Rgb};

pub struct Headless {
    script: Vec<InputState>,
    cursor: usize,
    frame_dt_ms: f32,
    /// Draw/present counters for assertions and run summaries.
    pub frames_presented: u64,
    pub rects_drawn: u64,
    /// Text runs queued since the last present.
    pending_texts: Vec<String>,
    /// Text runs of the most recently presented frame.
    pub last_frame_texts: Vec<String>,
}

impl Headless {
    /// A driver that replays `script` one entry per frame, then quits.
    pub fn new(frame_dt_ms: f32, script: Vec<InputState>) -> Self {
        Self {
            script,
            cursor: 0,
            frame_dt_ms,
            frames_presented: 0,
            rects_drawn: 0,
            pending_texts: Vec::new(),
            last_frame_texts: Vec::new(),
        }
    }

    /// A driver that idles (no keys held) for `frames` frames, then quits.
    pub fn idle(frame_dt_ms: f32, frames: usize) -> Self {
        Self::new(frame_dt_ms, vec![InputState::default(); frames])
    }
}

impl Frontend for Headless {
    fn poll_input(&mut self) -> InputState {
        match self.script.get(self.cursor) {
            Some(input) => {
                self.cursor += 1;
                *input
            }
            None => InputState {
                quit: true,
                ..InputState::default()
            },
        }
    }

    fn elapsed_ms(&mut self) -> f32 {
        self.frame_dt_ms
    }

    fn draw_rect(&mut self, _rect: &Rect, _color: Rgb) {
        self.rects_drawn += 1;
    }

    fn draw_text(&mut self, text: &str, _x: f32, _y: f32, _color: Rgb, _font_size: u32) {
        self.pending_texts.push(text.to_owned());
    }

    fn present(&mut self) {
        self.frames_presented += 1;
        self.last_frame_texts = std::mem::take(&mut self.pending_texts);
    }

    fn limit_frame_rate(&mut self, _target_fps: u32) {
        // Headless frames take no time; nothing to pace.
    }
}
