//! Axis-aligned rectangles and 1-D overlap queries
//!
//! The whole collision model is built on two per-axis penetration tests.
//! Neither implies a 2-D hit on its own; callers must check both axes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle. `pos` is the top-left corner (y grows down,
/// screen convention). Positions are real-valued even though rendering
/// rounds to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Horizontal penetration depth of `a` into `b`.
///
/// Hit cases: `a`'s left edge inside `b`'s x-span (depth `b.right - a.left`),
/// or `a`'s right edge inside `b`'s x-span (depth `a.right - b.left`).
/// Returns `None` when neither edge is contained. Not symmetric in its
/// arguments: `a` is the moving entity, `b` the obstacle.
pub fn horizontal_overlap(a: &Rect, b: &Rect) -> Option<f32> {
    if a.left() >= b.left() && a.left() <= b.right() {
        return Some(b.right() - a.left());
    }
    if a.right() >= b.left() && a.right() <= b.right() {
        return Some(a.right() - b.left());
    }
    None
}

/// Vertical penetration depth of `a` into `b`.
///
/// Same logic transposed to the y-axis; `a`'s bottom edge is checked first
/// (depth `a.bottom - b.top`), then `a`'s top edge (depth `b.bottom - a.top`).
pub fn vertical_overlap(a: &Rect, b: &Rect) -> Option<f32> {
    if a.bottom() >= b.top() && a.bottom() <= b.bottom() {
        return Some(a.bottom() - b.top());
    }
    if a.top() >= b.top() && a.top() <= b.bottom() {
        return Some(b.bottom() - a.top());
    }
    None
}
