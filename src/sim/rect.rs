//! Axis-aligned rectangle geometry for the paddle and bricks
//!
//! In screen coordinates a rectangle is defined by:
//! - pos: top-left corner (y grows downward)
//! - width, height: extents, strictly positive

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, stored as top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Horizontal extent (> 0)
    pub width: f32,
    /// Vertical extent (> 0)
    pub height: f32,
}

impl Rect {
    /// Panics on non-positive dimensions; a degenerate rectangle would
    /// make every collision result meaningless.
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "degenerate rectangle {width}x{height}"
        );
        Self { pos, width, height }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width, self.height) / 2.0
    }

    /// Move by the given offset, keeping the size
    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            pos: self.pos + offset,
            ..*self
        }
    }

    /// Check if a point lies inside the rectangle (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let rect = Rect::new(Vec2::new(10.0, 20.0), 60.0, 20.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 70.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 40.0);
        assert_eq!(rect.center(), Vec2::new(40.0, 30.0));
    }

    #[test]
    fn test_translate_keeps_size() {
        let rect = Rect::new(Vec2::ZERO, 10.0, 10.0);
        let moved = rect.translate(Vec2::new(5.0, -3.0));
        assert_eq!(moved.pos, Vec2::new(5.0, -3.0));
        assert_eq!(moved.width, 10.0);
        assert_eq!(moved.height, 10.0);
    }

    #[test]
    fn test_contains_point() {
        let rect = Rect::new(Vec2::ZERO, 10.0, 10.0);
        assert!(rect.contains_point(Vec2::new(5.0, 5.0)));
        // Edges are inclusive
        assert!(rect.contains_point(Vec2::new(10.0, 10.0)));
        assert!(!rect.contains_point(Vec2::new(10.1, 5.0)));
    }

    #[test]
    #[should_panic]
    fn test_degenerate_rect_panics() {
        Rect::new(Vec2::ZERO, 0.0, 10.0);
    }
}
