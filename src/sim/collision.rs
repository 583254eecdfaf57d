//! Collision predicates
//!
//! Stateless shape tests called every frame against every live pair.
//! Pools are small, so brute force is all any game needs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, top-left origin, y down
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centred on `center`
    pub fn centered(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Circles overlap when the center distance is below the radius sum
#[inline]
pub fn circle_circle(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> bool {
    c1.distance_squared(c2) < (r1 + r2) * (r1 + r2) && r1 + r2 > 0.0
}

/// Circle touches a rectangle when the closest point of the rectangle is within `r`
pub fn circle_rect(center: Vec2, r: f32, rect: &Rect) -> bool {
    if r <= 0.0 {
        return false;
    }
    let closest = Vec2::new(
        center.x.clamp(rect.x, rect.right()),
        center.y.clamp(rect.y, rect.bottom()),
    );
    center.distance_squared(closest) < r * r
}

/// Axis-aligned overlap
#[inline]
pub fn rect_rect(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Point inside a rectangle, edges included
#[inline]
pub fn point_in_rect(p: Vec2, rect: &Rect) -> bool {
    p.x >= rect.x && p.x <= rect.right() && p.y >= rect.y && p.y <= rect.bottom()
}

/// Point strictly inside a circle
#[inline]
pub fn point_in_circle(p: Vec2, center: Vec2, r: f32) -> bool {
    circle_circle(p, 0.0, center, r)
}
