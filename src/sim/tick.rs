//! Simulation step
//!
//! One tick advances the paddle and every ball, resolves wall/paddle/pair
//! collisions, then applies the spawn policy. The order is fixed; changing
//! it changes outcomes.

use super::entity::Mover;
use super::geometry::{Rect, horizontal_overlap, vertical_overlap};
use super::state::{Phase, World};
use crate::config::SouthWall;

/// Input commands for a single tick.
///
/// Left and right are mutually exclusive; left wins when both are held.
/// Quit and restart are loop-controller concerns and never reach the tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// Advance the world by `dt_ms` milliseconds of wall-clock time.
///
/// Does nothing while the world is in `Phase::GameOver`; the run clock
/// freezes with it. Only `World::reset` leaves game-over.
pub fn tick(world: &mut World, input: &TickInput, dt_ms: f32) {
    if world.phase == Phase::GameOver {
        return;
    }

    world.elapsed_ms += dt_ms;

    step_paddle(world, input, dt_ms);
    step_balls(world, dt_ms);

    // A ball may have crossed the baseline this tick; frozen means frozen.
    if world.phase == Phase::Running {
        apply_spawn_policy(world);
    }
}

/// Input-driven paddle movement, then clamp inside the east/west walls.
fn step_paddle(world: &mut World, input: &TickInput, dt_ms: f32) {
    if input.left {
        world.paddle.advance(-dt_ms);
    } else if input.right {
        world.paddle.advance(dt_ms);
    }

    if horizontal_overlap(&world.paddle.rect, &world.walls.west).is_some() {
        world.paddle.rect.pos.x = world.walls.west.right();
    }
    if horizontal_overlap(&world.paddle.rect, &world.walls.east).is_some() {
        world.paddle.rect.pos.x = world.walls.east.left() - world.paddle.rect.size.x;
    }
}

/// Move every ball in spawn order and resolve its collisions: walls first,
/// then every other ball, then the paddle.
fn step_balls(world: &mut World, dt_ms: f32) {
    let walls = world.walls;
    let south_mode = world.config().south_wall;

    for i in 0..world.balls.len() {
        world.balls[i].mover.advance(dt_ms);

        let rect = world.balls[i].mover.rect;
        if horizontal_overlap(&rect, &walls.east).is_some()
            || horizontal_overlap(&rect, &walls.west).is_some()
        {
            world.balls[i].mover.reflect_horizontal();
        }

        let rect = world.balls[i].mover.rect;
        if vertical_overlap(&rect, &walls.north).is_some() {
            world.balls[i].mover.reflect_vertical();
        }

        let rect = world.balls[i].mover.rect;
        if vertical_overlap(&rect, &walls.south).is_some() {
            match south_mode {
                SouthWall::GameOver => {
                    if world.phase != Phase::GameOver {
                        log::info!(
                            "ball crossed the baseline after {:.1}s with {} balls in play",
                            world.elapsed_ms / 1000.0,
                            world.balls.len()
                        );
                    }
                    world.phase = Phase::GameOver;
                }
                SouthWall::Bounce => world.balls[i].mover.reflect_vertical(),
            }
        }

        // Pairwise pass, no ordering guard: each ball checks every other,
        // so a touching pair usually reflects both members this tick.
        for n in 0..world.balls.len() {
            if n == i {
                continue;
            }
            let other = world.balls[n].mover.rect;
            reflect_on_contact(&mut world.balls[i].mover, &other);
        }

        let paddle = world.paddle.rect;
        reflect_on_contact(&mut world.balls[i].mover, &paddle);
    }
}

/// Overlap-and-reflect rule shared by ball-ball and ball-paddle contacts.
///
/// Requires overlap on both axes. The collision normal is approximated as
/// the axis of shallower penetration: deeper vertical overlap means the hit
/// came from the side (reflect horizontally), deeper horizontal overlap
/// means it came from above/below (reflect vertically). Equal depths are a
/// documented no-op.
fn reflect_on_contact(mover: &mut Mover, obstacle: &Rect) {
    let Some(h) = horizontal_overlap(&mover.rect, obstacle) else {
        return;
    };
    let Some(v) = vertical_overlap(&mover.rect, obstacle) else {
        return;
    };

    if v > h {
        mover.reflect_horizontal();
    } else if h > v {
        mover.reflect_vertical();
    }
}

/// One ball per tick while the ramp is ahead of the population and the cap
/// has not been reached. `spawn_rate_secs` is validated positive, so the
/// threshold division is safe.
fn apply_spawn_policy(world: &mut World) {
    let threshold = world.elapsed_ms / (1000.0 * world.config().spawn_rate_secs);
    if threshold > world.balls.len() as f32 && world.balls.len() < world.config().max_balls {
        world.spawn_ball();
    }
}
