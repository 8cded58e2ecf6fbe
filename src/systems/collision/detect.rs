//! Overlap predicates. Pure, no side effects.
//!
//! All tests are strict: shapes that only touch do not collide.

use super::shapes::{Aabb, Circle};

#[inline]
pub fn aabb_vs_aabb(a: &Aabb, b: &Aabb) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

#[inline]
pub fn circle_vs_circle(a: &Circle, b: &Circle) -> bool {
    let dist = a.center.distance(b.center);
    dist < a.radius + b.radius
}

/// Squared distance from the circle center to its closest point on the box,
/// compared against radius².
#[inline]
pub fn aabb_vs_circle(aabb: &Aabb, circle: &Circle) -> bool {
    let closest = aabb.clamp_point(circle.center);
    let dist_sq = (circle.center - closest).length_squared();
    dist_sq < circle.radius * circle.radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Vec2;

    fn aabb(x0: f32, y0: f32, x1: f32, y1: f32) -> Aabb {
        Aabb::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        assert!(!aabb_vs_aabb(&aabb(0.0, 0.0, 4.0, 4.0), &aabb(4.0, 0.0, 6.0, 4.0)));
        assert!(!aabb_vs_aabb(&aabb(0.0, 0.0, 4.0, 4.0), &aabb(0.0, 4.0, 4.0, 6.0)));
    }

    #[test]
    fn contained_box_overlaps() {
        assert!(aabb_vs_aabb(&aabb(0.0, 0.0, 4.0, 4.0), &aabb(1.0, 1.0, 3.0, 3.0)));
        assert!(aabb_vs_aabb(&aabb(1.0, 1.0, 3.0, 3.0), &aabb(0.0, 0.0, 4.0, 4.0)));
    }

    #[test]
    fn circles_overlap_strictly() {
        let a = Circle::new(Vec2::new(0.0, 0.0), 1.0);
        assert!(circle_vs_circle(&a, &Circle::new(Vec2::new(1.5, 0.0), 1.0)));
        assert!(!circle_vs_circle(&a, &Circle::new(Vec2::new(2.0, 0.0), 1.0)));
        assert!(!circle_vs_circle(&a, &Circle::new(Vec2::new(5.0, 5.0), 1.0)));
    }

    #[test]
    fn box_circle_uses_closest_point() {
        let b = aabb(0.0, 0.0, 2.0, 2.0);
        // Center inside the box
        assert!(aabb_vs_circle(&b, &Circle::new(Vec2::new(1.0, 1.0), 0.1)));
        // Just off the right edge, within radius
        assert!(aabb_vs_circle(&b, &Circle::new(Vec2::new(2.5, 1.0), 0.6)));
        // Exactly touching the edge
        assert!(!aabb_vs_circle(&b, &Circle::new(Vec2::new(3.0, 1.0), 1.0)));
        // Near the corner but outside radius (distance ~0.707)
        assert!(!aabb_vs_circle(&b, &Circle::new(Vec2::new(2.5, 2.5), 0.7)));
    }
}
