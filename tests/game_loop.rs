//! End-to-end runs through the game loop with the headless frontend.

use std::f32::consts::FRAC_PI_2;

use multipong::frontend::{Headless, InputState};
use multipong::sim::{Mover, Phase, Rect};
use multipong::{Config, Game, SouthWall};

const DT_MS: f32 = 1000.0 / 60.0;

#[test]
fn arcade_mode_soak_reaches_ball_cap() {
    let config = Config {
        south_wall: SouthWall::Bounce,
        ..Config::default()
    };
    let mut game = Game::new(config, 2024).unwrap();

    // Two simulated minutes; the spawn ramp tops out at 50 seconds.
    let mut frontend = Headless::idle(DT_MS, 120 * 60);
    let frames = game.run(&mut frontend);

    assert_eq!(frames, 120 * 60);
    assert_eq!(game.world.phase, Phase::Running);
    assert_eq!(game.world.balls.len(), game.world.config().max_balls);
    // Elastic model: every ball still travels at the base speed.
    for ball in &game.world.balls {
        assert_eq!(ball.mover.speed, game.world.config().ball_speed);
    }
}

#[test]
fn missed_ball_ends_the_run_with_overlay() {
    let mut game = Game::new(Config::default(), 7).unwrap();
    // Straight down at x=50, well clear of the centered paddle.
    game.world.balls[0].mover = Mover::new(Rect::new(50.0, 100.0, 25.0, 25.0), 200.0, FRAC_PI_2);

    // The drop takes ~3 seconds of game time.
    let mut frontend = Headless::idle(DT_MS, 400);
    game.run(&mut frontend);

    assert_eq!(game.world.phase, Phase::GameOver);
    assert_eq!(
        frontend.last_frame_texts,
        vec![
            "GAME OVER".to_owned(),
            "Press 'r' to play again".to_owned()
        ]
    );
}

#[test]
fn restart_after_loss_starts_a_fresh_run() {
    let mut game = Game::new(Config::default(), 7).unwrap();
    game.world.balls[0].mover = Mover::new(Rect::new(50.0, 100.0, 25.0, 25.0), 200.0, FRAC_PI_2);

    let mut script = vec![InputState::default(); 250];
    script.push(InputState {
        restart: true,
        ..InputState::default()
    });
    script.extend(vec![InputState::default(); 100]);

    let mut frontend = Headless::new(DT_MS, script);
    game.run(&mut frontend);

    assert_eq!(game.world.phase, Phase::Running);
    assert_eq!(game.world.balls.len(), 1);
    // Clock restarted at the reset frame: 101 frames of game time since.
    let expected = 101.0 * DT_MS;
    assert!((game.world.elapsed_ms - expected).abs() < 1.0);
    // Paddle back on its centered baseline.
    let config = game.world.config();
    let centered = (config.window_width - config.paddle_width) / 2.0;
    assert!((game.world.paddle.rect.pos.x - centered).abs() < 1e-3);
}

#[test]
fn holding_a_direction_keeps_the_paddle_in_bounds() {
    let config = Config {
        south_wall: SouthWall::Bounce,
        ..Config::default()
    };
    let mut game = Game::new(config, 3).unwrap();

    let mut script = vec![
        InputState {
            left: true,
            ..InputState::default()
        };
        300
    ];
    script.extend(vec![
        InputState {
            right: true,
            ..InputState::default()
        };
        300
    ]);

    let mut frontend = Headless::new(DT_MS, script);
    game.run(&mut frontend);

    let config = game.world.config();
    let x = game.world.paddle.rect.pos.x;
    assert!(x >= 0.0);
    assert!(x + config.paddle_width <= config.window_width);
    // 300 right-held frames from the west pin is ample to reach the east pin.
    assert_eq!(x, config.window_width - config.paddle_width);
}
