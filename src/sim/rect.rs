//! Axis-aligned rectangle geometry
//!
//! The player hitbox is an axis-aligned rectangle; the collision test needs
//! its closest point to an arbitrary circle center.

use glam::Vec2;

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (both non-negative)
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Right edge x
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge y
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Check if a point is inside (edges inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x <= self.max_x()
            && point.y >= self.pos.y
            && point.y <= self.max_y()
    }

    /// Closest point on (or inside) the rectangle to the given point.
    /// For a point inside the rectangle this is the point itself.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.pos.x, self.max_x()),
            point.y.clamp(self.pos.y, self.max_y()),
        )
    }
}
