//! Pair resolution
//!
//! Box/box is the complete path: push apart along the axis of least
//! penetration, split by inverse mass, then zero velocity on that axis.
//! Circle/circle and box/circle only stop both bodies (no positional
//! correction yet).

use crate::core::math::Vec2;
use crate::systems::rigid_body::{Body, Shape};

use super::detect::{aabb_vs_aabb, aabb_vs_circle, circle_vs_circle};
use super::shapes::{Aabb, Circle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Box/box contact that was pushed apart
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub axis: Axis,
    /// Penetration depth before correction
    pub depth: f32,
}

/// What happened to a pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolution {
    /// Shapes do not overlap (or bounds were stale)
    Clear,
    /// Boxes pushed apart
    Separated(Contact),
    /// Circle pair: velocities zeroed, positions untouched
    Stopped,
}

/// Per-axis overlap of two boxes (`<= 0` on an axis means separated)
#[inline]
pub fn overlap(a: &Aabb, b: &Aabb) -> Vec2 {
    Vec2::new(
        a.max.x.min(b.max.x) - a.min.x.max(b.min.x),
        a.max.y.min(b.max.y) - a.min.y.max(b.min.y),
    )
}

/// Separate two overlapping box bodies.
///
/// Returns `None` when the cached bounds no longer overlap.
pub fn resolve_aabb_aabb(a: &mut Body, b: &mut Body) -> Option<Contact> {
    let overlap = overlap(&a.bounds, &b.bounds);
    if overlap.x <= 0.0 || overlap.y <= 0.0 {
        return None;
    }

    let (axis, depth) = if overlap.x < overlap.y {
        (Axis::X, overlap.x)
    } else {
        (Axis::Y, overlap.y)
    };

    let inv_a = a.inverse_mass();
    let inv_b = b.inverse_mass();
    let mut inv_total = inv_a + inv_b;
    if inv_total == 0.0 {
        inv_total = 1.0;
    }
    let share_a = inv_a / inv_total;
    let share_b = inv_b / inv_total;

    let center_a = a.bounds.center();
    let center_b = b.bounds.center();

    match axis {
        Axis::X => {
            let dir = if center_a.x > center_b.x { 1.0 } else { -1.0 };
            a.position.x += dir * depth * share_a;
            b.position.x -= dir * depth * share_b;
            a.velocity.x = 0.0;
            b.velocity.x = 0.0;
        }
        Axis::Y => {
            let dir = if center_a.y > center_b.y { 1.0 } else { -1.0 };
            a.position.y += dir * depth * share_a;
            b.position.y -= dir * depth * share_b;
            a.velocity.y = 0.0;
            b.velocity.y = 0.0;
        }
    }

    a.refresh_bounds();
    b.refresh_bounds();

    Some(Contact { axis, depth })
}

/// Circle/circle stub: stops both bodies
pub fn resolve_circle_circle(a: &mut Body, b: &mut Body) {
    a.velocity = Vec2::zero();
    b.velocity = Vec2::zero();
}

/// Box/circle stub: stops both bodies
pub fn resolve_aabb_circle(a: &mut Body, b: &mut Body) {
    a.velocity = Vec2::zero();
    b.velocity = Vec2::zero();
}

/// Narrow phase + resolution, dispatched on both shapes
pub fn resolve_pair(a: &mut Body, b: &mut Body) -> Resolution {
    let shapes: (Shape, Shape) = (*a.shape(), *b.shape());
    match shapes {
        (Shape::Box, Shape::Box) => {
            if !aabb_vs_aabb(&a.bounds, &b.bounds) {
                return Resolution::Clear;
            }
            match resolve_aabb_aabb(a, b) {
                Some(contact) => Resolution::Separated(contact),
                None => Resolution::Clear,
            }
        }
        (Shape::Circle(ca), Shape::Circle(cb)) => {
            if !circle_vs_circle(&ca, &cb) {
                return Resolution::Clear;
            }
            resolve_circle_circle(a, b);
            Resolution::Stopped
        }
        (Shape::Box, Shape::Circle(c)) => box_circle(a, b, &c),
        (Shape::Circle(c), Shape::Box) => box_circle(b, a, &c),
    }
}

fn box_circle(box_body: &mut Body, circle_body: &mut Body, circle: &Circle) -> Resolution {
    if !aabb_vs_circle(&box_body.bounds, circle) {
        return Resolution::Clear;
    }
    resolve_aabb_circle(box_body, circle_body);
    Resolution::Stopped
}
