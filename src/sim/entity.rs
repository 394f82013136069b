//! Movable entities
//!
//! A `Mover` is a rectangle carrying a constant scalar speed and a direction
//! angle. Collision response is elastic and frictionless: only the angle ever
//! changes, never the speed.

use std::f32::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::normalize_angle;

/// A rectangle in motion: paddle and balls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mover {
    pub rect: Rect,
    /// Speed in pixels/second. Invariant: reflections never touch this.
    pub speed: f32,
    /// Direction of travel in radians from the positive x-axis, kept in [0, 2π).
    pub theta: f32,
}

impl Mover {
    pub fn new(rect: Rect, speed: f32, theta: f32) -> Self {
        Self {
            rect,
            speed,
            theta: normalize_angle(theta),
        }
    }

    /// Euler step: advance position by `speed` along `theta` for `dt_ms`
    /// milliseconds. No substeps; a huge delta (e.g. after a stall) can
    /// tunnel through thin obstacles.
    ///
    /// A negative `dt_ms` moves against the heading; the paddle uses this
    /// to drive left with theta pinned at 0.
    pub fn advance(&mut self, dt_ms: f32) {
        let dt = dt_ms / 1000.0;
        self.rect.pos.x += self.speed * self.theta.cos() * dt;
        self.rect.pos.y += self.speed * self.theta.sin() * dt;
    }

    /// Mirror the heading across the vertical axis: reverses the x-component
    /// of velocity, preserves the y-component. Does not reposition; the
    /// reflected heading carries the entity out of penetration over the next
    /// ticks.
    pub fn reflect_horizontal(&mut self) {
        self.theta = normalize_angle(PI - self.theta);
    }

    /// Mirror the heading across the horizontal axis: reverses the
    /// y-component, preserves the x-component.
    pub fn reflect_vertical(&mut self) {
        self.theta = normalize_angle(TAU - self.theta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_4;

    fn mover(theta: f32) -> Mover {
        Mover::new(Rect::new(0.0, 0.0, 25.0, 25.0), 200.0, theta)
    }

    #[test]
    fn test_advance_euler_step() {
        // One full second at 200 px/s along the diagonal
        let mut m = Mover::new(Rect::new(240.0, 100.0, 25.0, 25.0), 200.0, FRAC_PI_4);
        m.advance(1000.0);
        assert!((m.rect.pos.x - (240.0 + 200.0 * FRAC_PI_4.cos())).abs() < 1e-3);
        assert!((m.rect.pos.y - (100.0 + 200.0 * FRAC_PI_4.sin())).abs() < 1e-3);
        // ≈ (381.4, 241.4)
        assert!((m.rect.pos.x - 381.42).abs() < 0.01);
        assert!((m.rect.pos.y - 241.42).abs() < 0.01);
    }

    #[test]
    fn test_negative_dt_reverses_motion() {
        let mut m = mover(0.0);
        m.advance(-500.0);
        assert!((m.rect.pos.x - (-100.0)).abs() < 1e-3);
        assert_eq!(m.rect.pos.y, 0.0);
    }

    #[test]
    fn test_reflect_horizontal_flips_x_component() {
        let mut m = mover(FRAC_PI_4);
        let (vx, vy) = (m.theta.cos(), m.theta.sin());
        m.reflect_horizontal();
        assert!((m.theta.cos() + vx).abs() < 1e-6);
        assert!((m.theta.sin() - vy).abs() < 1e-6);
    }

    #[test]
    fn test_reflect_vertical_flips_y_component() {
        let mut m = mover(FRAC_PI_4);
        let (vx, vy) = (m.theta.cos(), m.theta.sin());
        m.reflect_vertical();
        assert!((m.theta.cos() - vx).abs() < 1e-6);
        assert!((m.theta.sin() + vy).abs() < 1e-6);
    }

    proptest! {
        /// Each reflection is its own inverse mod 2π.
        #[test]
        fn prop_reflections_self_inverse(theta in 0.0f32..std::f32::consts::TAU) {
            let mut m = mover(theta);
            m.reflect_horizontal();
            m.reflect_horizontal();
            prop_assert!((m.theta - theta).abs() < 1e-4 ||
                         (m.theta - theta).abs() > std::f32::consts::TAU - 1e-4);

            let mut m = mover(theta);
            m.reflect_vertical();
            m.reflect_vertical();
            prop_assert!((m.theta - theta).abs() < 1e-4 ||
                         (m.theta - theta).abs() > std::f32::consts::TAU - 1e-4);
        }

        /// Speed is invariant under any sequence of reflections.
        #[test]
        fn prop_speed_invariant(theta in 0.0f32..std::f32::consts::TAU, seq in proptest::collection::vec(any::<bool>(), 0..32)) {
            let mut m = mover(theta);
            for horizontal in seq {
                if horizontal {
                    m.reflect_horizontal();
                } else {
                    m.reflect_vertical();
                }
            }
            prop_assert_eq!(m.speed, 200.0);
            prop_assert!(m.theta >= 0.0 && m.theta < std::f32::consts::TAU);
        }
    }
}
