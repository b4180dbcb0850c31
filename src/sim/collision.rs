//! Collision detection and response
//!
//! The tricky part of Brickfall: detecting overlap between the ball and
//! axis-aligned rectangles (bricks, paddle), then computing the unit
//! impulse vector the ball travels along after the bounce.

use glam::Vec2;

use super::rect::Rect;

/// Check intersection between an axis-aligned rectangle and a circle.
///
/// `circle_pos` is the circle's center, `circle_vel` its current
/// velocity. The overlap test compares the signed distance from each
/// rectangle edge to the circle center against the radius, treating the
/// ball as a point with a per-axis reach of `radius` rather than
/// computing the exact circle-rectangle distance. Near corners this
/// slightly enlarges the effective collision boundary; the error is
/// bounded by the radius and invisible at gameplay speeds. Tangency
/// counts as contact.
///
/// Returns `None` when the shapes are separated. Otherwise returns the
/// normalized direction the circle moves after the collision: the
/// incoming direction with each axis component flipped where the circle
/// overlaps that edge while still heading further into the rectangle.
/// A corner hit can flip both axes.
///
/// Panics when called with a resting circle: a collision with zero
/// velocity has no incoming direction to reflect, and the game never
/// checks collisions before the ball is launched.
pub fn intersect_rect_circle(
    rect: &Rect,
    circle_pos: Vec2,
    circle_radius: f32,
    circle_vel: Vec2,
) -> Option<Vec2> {
    debug_assert!(circle_radius > 0.0);

    // Signed distance from each rectangle edge to the circle center
    let top = rect.top() - circle_pos.y;
    let bottom = rect.bottom() - circle_pos.y;
    let left = rect.left() - circle_pos.x;
    let right = rect.right() - circle_pos.x;

    let r = circle_radius;
    let intersecting = left <= r && top <= r && right >= -r && bottom >= -r;
    if !intersecting {
        return None;
    }

    assert!(
        circle_vel.length_squared() > 0.0,
        "collision check with a resting circle"
    );
    let mut impulse = circle_vel.normalize();

    // Each axis corrects independently, so the flips below may combine
    // on a corner hit.
    if left.abs() <= r && impulse.x > 0.0 {
        impulse.x = -impulse.x;
    }
    if right.abs() <= r && impulse.x < 0.0 {
        impulse.x = -impulse.x;
    }
    if top.abs() <= r && impulse.y > 0.0 {
        impulse.y = -impulse.y;
    }
    if bottom.abs() <= r && impulse.y < 0.0 {
        impulse.y = -impulse.y;
    }

    Some(impulse.normalize())
}

/// Check intersection between two circles.
///
/// Returns the unit vector from circle A's center toward circle B's
/// center when the circles overlap (tangency inclusive), `None`
/// otherwise. Coincident centers have no direction to report and are
/// treated as no collision.
pub fn intersect_circles(
    center_a: Vec2,
    radius_a: f32,
    center_b: Vec2,
    radius_b: f32,
) -> Option<Vec2> {
    debug_assert!(radius_a > 0.0 && radius_b > 0.0);

    let delta = center_b - center_a;
    if delta == Vec2::ZERO {
        return None;
    }
    if radius_a + radius_b >= delta.length() {
        Some(delta.normalize())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-4;

    fn assert_vec_eq(actual: Vec2, expected: Vec2) {
        assert!(
            (actual - expected).length() < EPS,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_separated_returns_none() {
        let rect = Rect::new(Vec2::ZERO, 10.0, 10.0);
        // Circle well to the right of the rectangle
        let hit = intersect_rect_circle(&rect, Vec2::new(20.0, 5.0), 2.0, Vec2::new(-3.0, 0.0));
        assert!(hit.is_none());
        // And well above
        let hit = intersect_rect_circle(&rect, Vec2::new(5.0, -10.0), 2.0, Vec2::new(0.0, 3.0));
        assert!(hit.is_none());
    }

    #[test]
    fn test_right_edge_overlap_flips_x() {
        // Rectangle at origin, 10x10; ball center one pixel inside the
        // right edge, moving left: the impulse points back out.
        let rect = Rect::new(Vec2::ZERO, 10.0, 10.0);
        let hit = intersect_rect_circle(&rect, Vec2::new(11.0, 5.0), 2.0, Vec2::new(-3.0, 0.0));
        assert_vec_eq(hit.unwrap(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_tangency_is_inclusive() {
        // Ball center exactly `r` outside the right edge still collides
        let rect = Rect::new(Vec2::ZERO, 10.0, 10.0);
        let hit = intersect_rect_circle(&rect, Vec2::new(12.0, 5.0), 2.0, Vec2::new(-3.0, 0.0));
        assert_vec_eq(hit.unwrap(), Vec2::new(1.0, 0.0));
        // One step further out misses
        let miss = intersect_rect_circle(&rect, Vec2::new(12.1, 5.0), 2.0, Vec2::new(-3.0, 0.0));
        assert!(miss.is_none());
    }

    #[test]
    fn test_left_edge_overlap_flips_x() {
        let rect = Rect::new(Vec2::ZERO, 10.0, 10.0);
        let hit = intersect_rect_circle(&rect, Vec2::new(-1.0, 5.0), 2.0, Vec2::new(3.0, 0.0));
        assert_vec_eq(hit.unwrap(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_top_edge_overlap_flips_y() {
        let rect = Rect::new(Vec2::ZERO, 10.0, 10.0);
        let hit = intersect_rect_circle(&rect, Vec2::new(5.0, -1.0), 2.0, Vec2::new(0.0, 3.0));
        assert_vec_eq(hit.unwrap(), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_corner_hit_flips_both_axes() {
        // Overlapping both the left and top edges while moving down-right
        let rect = Rect::new(Vec2::ZERO, 10.0, 10.0);
        let hit = intersect_rect_circle(&rect, Vec2::new(-1.0, -1.0), 2.0, Vec2::new(3.0, 3.0));
        let expected = Vec2::new(-1.0, -1.0).normalize();
        assert_vec_eq(hit.unwrap(), expected);
    }

    #[test]
    fn test_impulse_without_edge_overlap_keeps_direction() {
        // Center inside the bounding test but no |edge| <= r overlap:
        // the impulse is just the normalized incoming velocity.
        let rect = Rect::new(Vec2::ZERO, 10.0, 10.0);
        let hit = intersect_rect_circle(&rect, Vec2::new(5.0, 5.0), 2.0, Vec2::new(0.0, 4.0));
        assert_vec_eq(hit.unwrap(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_circles_overlapping() {
        // Distance 8, radii 5 + 4 = 9: overlap, impulse from A to B
        let hit = intersect_circles(Vec2::ZERO, 5.0, Vec2::new(8.0, 0.0), 4.0);
        assert_vec_eq(hit.unwrap(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_circles_tangent_and_separated() {
        // Distance exactly equal to the radius sum counts as contact
        assert!(intersect_circles(Vec2::ZERO, 5.0, Vec2::new(9.0, 0.0), 4.0).is_some());
        assert!(intersect_circles(Vec2::ZERO, 5.0, Vec2::new(9.1, 0.0), 4.0).is_none());
    }

    #[test]
    fn test_circles_coincident_centers() {
        // No direction to report
        assert!(intersect_circles(Vec2::new(3.0, 3.0), 5.0, Vec2::new(3.0, 3.0), 4.0).is_none());
    }

    proptest! {
        /// A circle strictly beyond one edge's reach never collides.
        #[test]
        fn prop_separated_never_collides(
            rx in -200.0f32..200.0,
            ry in -200.0f32..200.0,
            w in 1.0f32..100.0,
            h in 1.0f32..100.0,
            r in 0.1f32..30.0,
            gap in 0.01f32..100.0,
        ) {
            let rect = Rect::new(Vec2::new(rx, ry), w, h);
            let pos = Vec2::new(rect.right() + r + gap, ry);
            prop_assert!(
                intersect_rect_circle(&rect, pos, r, Vec2::new(-1.0, 0.0)).is_none()
            );
        }

        /// Any reported impulse is unit length.
        #[test]
        fn prop_impulse_is_unit_length(
            px in -15.0f32..25.0,
            py in -15.0f32..25.0,
            vx in -10.0f32..10.0,
            vy in -10.0f32..10.0,
        ) {
            let rect = Rect::new(Vec2::ZERO, 10.0, 10.0);
            let vel = Vec2::new(vx, vy);
            prop_assume!(vel.length() > 0.01);
            if let Some(impulse) =
                intersect_rect_circle(&rect, Vec2::new(px, py), 8.0, vel)
            {
                prop_assert!((impulse.length() - 1.0).abs() < 1e-3);
            }
        }

        /// A circle-circle impulse always points from A toward B.
        #[test]
        fn prop_circle_impulse_points_a_to_b(
            ax in -100.0f32..100.0,
            ay in -100.0f32..100.0,
            bx in -100.0f32..100.0,
            by in -100.0f32..100.0,
            ra in 0.1f32..50.0,
            rb in 0.1f32..50.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            let delta = b - a;
            prop_assume!(delta.length() > 0.001);

            match intersect_circles(a, ra, b, rb) {
                Some(impulse) => {
                    prop_assert!(ra + rb >= delta.length());
                    prop_assert!(impulse.dot(delta) > 0.0);
                    prop_assert!((impulse.length() - 1.0).abs() < 1e-3);
                }
                None => prop_assert!(ra + rb < delta.length()),
            }
        }
    }
}
