//! Game loop controller
//!
//! Owns the world and the frame loop: poll input, tick the simulation,
//! render, present, pace to the target frame rate, in that fixed order.
//! Single-threaded and cooperative; the whole collision pass completes
//! before anything is drawn.

use crate::config::{Config, ConfigError};
use crate::frontend::{Frontend, InputState};
use crate::sim::{Phase, TickInput, World, state};

const GAME_OVER_FONT: u32 = 32;
const RESTART_FONT: u32 = 20;

/// One game session bound to a frontend for the duration of `run`.
pub struct Game {
    pub world: World,
}

impl Game {
    /// Validate `config` and build the starting world. Rejecting a bad
    /// config here keeps divide-by-zero spawn math and degenerate
    /// rectangles out of the tick loop entirely.
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "new game: seed {seed}, {}x{} window, south wall {}",
            config.window_width,
            config.window_height,
            config.south_wall.as_str()
        );
        Ok(Self {
            world: World::new(config, seed),
        })
    }

    /// Run until the frontend reports quit. Returns the number of frames
    /// presented; process exit status is the caller's business (normal quit
    /// maps to exit code 0).
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> u64 {
        let mut frames: u64 = 0;
        loop {
            let input = frontend.poll_input();
            if input.quit {
                log::info!("quit after {frames} frames");
                return frames;
            }

            let dt_ms = frontend.elapsed_ms();
            self.step(input, dt_ms);
            self.render(frontend);

            frontend.present();
            frontend.limit_frame_rate(self.world.config().target_fps);
            frames += 1;
        }
    }

    /// Input translation + one simulation tick. Restart is honored in any
    /// phase and re-resets every frame while held.
    fn step(&mut self, input: InputState, dt_ms: f32) {
        if input.restart {
            self.world.reset();
        }

        let tick_input = TickInput {
            left: input.left,
            right: input.right,
        };
        crate::sim::tick(&mut self.world, &tick_input, dt_ms);
    }

    fn render<F: Frontend>(&self, frontend: &mut F) {
        for ball in &self.world.balls {
            frontend.draw_rect(&ball.mover.rect, ball.color);
        }
        frontend.draw_rect(&self.world.paddle.rect, state::PADDLE_COLOR);

        if self.world.phase == Phase::GameOver {
            let config = self.world.config();
            let cx = (config.window_width / 2.0).round();
            let cy = (config.window_height / 2.0).round();
            frontend.draw_text("GAME OVER", cx - 100.0, cy, [255, 0, 0], GAME_OVER_FONT);
            frontend.draw_text(
                "Press 'r' to play again",
                cx - 105.0,
                cy + 40.0,
                [255, 255, 255],
                RESTART_FONT,
            );
        }
    }
}
