//! Collision detection
//!
//! Two primitive tests cover everything the game needs: circle-vs-rect for
//! the bird against pipe halves, circle-vs-circle for pickups. Both use a
//! strict `<` on squared distances, so exact touching does not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Closest point of the rect to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.x, self.x + self.w),
            p.y.clamp(self.y, self.y + self.h),
        )
    }
}

/// Circle-vs-rect overlap test (strict: touching is not colliding)
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.distance_squared(rect.closest_point(center)) < radius * radius
}

/// Circle-vs-circle overlap test (strict: touching is not colliding)
#[inline]
pub fn circle_circle_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    a.distance_squared(b) < reach * reach
}
