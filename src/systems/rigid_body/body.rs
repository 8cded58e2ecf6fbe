use crate::core::math::Vec2;
use crate::systems::collision::{Aabb, Circle};

use super::handle::WorldId;

/// Static bodies never move; dynamic bodies integrate forces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BodyKind {
    Static = 0,
    Dynamic = 1,
}

impl BodyKind {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(BodyKind::Static),
            1 => Some(BodyKind::Dynamic),
            _ => None,
        }
    }
}

/// Shape tag used when constructing a body
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ShapeKind {
    Box = 0,
    Circle = 1,
}

impl ShapeKind {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ShapeKind::Box),
            1 => Some(ShapeKind::Circle),
            _ => None,
        }
    }
}

/// Shape-specific geometry. Boxes use the cached bounds directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Box,
    Circle(Circle),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Box => ShapeKind::Box,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }
}

/// Rigid Body - one simulated object
///
/// `size` holds half-extents for the box bounds; circles read `size.x` as
/// their diameter. Mass and kind are private so the inverse mass always
/// matches them.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    // === Kinematic State ===
    /// World position (center)
    pub position: Vec2,
    /// Velocity (units per second)
    pub velocity: Vec2,
    pub size: Vec2,

    shape: Shape,
    kind: BodyKind,

    // === Mass ===
    /// Accumulated force, cleared by every integration
    pub(crate) force: Vec2,
    mass: f32,
    inverse_mass: f32,

    // === Material (stored, not yet read by resolution) ===
    restitution: f32,
    friction: f32,

    /// Cached bounds, refreshed on every integration
    pub(crate) bounds: Aabb,

    // === World membership ===
    index: Option<usize>,
    world: Option<WorldId>,
}

#[inline]
fn inverse_mass_for(kind: BodyKind, mass: f32) -> f32 {
    if kind == BodyKind::Static || !(mass > 0.0) {
        0.0
    } else {
        1.0 / mass
    }
}

impl Body {
    /// Create an unowned body. Bounds and circle geometry are derived immediately.
    pub fn new(position: Vec2, size: Vec2, shape: ShapeKind, kind: BodyKind, mass: f32) -> Self {
        let shape = match shape {
            ShapeKind::Box => Shape::Box,
            ShapeKind::Circle => Shape::Circle(Circle::default()),
        };
        let mut body = Self {
            position,
            velocity: Vec2::zero(),
            size,
            shape,
            kind,
            force: Vec2::zero(),
            mass,
            inverse_mass: inverse_mass_for(kind, mass),
            restitution: 0.3,
            friction: 0.2,
            bounds: Aabb::default(),
            index: None,
            world: None,
        };
        body.refresh_bounds();
        body
    }

    /// Create a box body
    pub fn new_box(position: Vec2, size: Vec2, kind: BodyKind, mass: f32) -> Self {
        Self::new(position, size, ShapeKind::Box, kind, mass)
    }

    /// Create a circle body (`size.x` is the diameter)
    pub fn new_circle(position: Vec2, size: Vec2, kind: BodyKind, mass: f32) -> Self {
        Self::new(position, size, ShapeKind::Circle, kind, mass)
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    pub fn is_dynamic(&self) -> bool {
        self.kind == BodyKind::Dynamic
    }

    pub fn set_kind(&mut self, kind: BodyKind) {
        self.kind = kind;
        self.inverse_mass = inverse_mass_for(kind, self.mass);
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn inverse_mass(&self) -> f32 {
        self.inverse_mass
    }

    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass;
        self.inverse_mass = inverse_mass_for(self.kind, mass);
    }

    /// Force accumulated since the last integration
    pub fn accumulated_force(&self) -> Vec2 {
        self.force
    }

    pub fn restitution(&self) -> f32 {
        self.restitution
    }

    /// Set restitution (bounciness)
    pub fn set_restitution(&mut self, r: f32) {
        self.restitution = r.clamp(0.0, 1.0);
    }

    pub fn friction(&self) -> f32 {
        self.friction
    }

    pub fn set_friction(&mut self, f: f32) {
        self.friction = f.clamp(0.0, 1.0);
    }

    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// Slot in the owning world, `None` when unowned
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Owning world, `None` when unowned
    pub fn world(&self) -> Option<WorldId> {
        self.world
    }

    pub(crate) fn stamp(&mut self, index: usize, world: WorldId) {
        self.index = Some(index);
        self.world = Some(world);
    }

    /// Recompute bounds (and circle geometry) from position and size
    pub fn refresh_bounds(&mut self) {
        self.bounds = Aabb::from_center(self.position, self.size);
        if let Shape::Circle(circle) = &mut self.shape {
            circle.center = self.position;
            circle.radius = self.size.x / 2.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_mass_tracks_kind_and_mass() {
        let mut body = Body::new_box(Vec2::zero(), Vec2::new(1.0, 1.0), BodyKind::Dynamic, 4.0);
        assert_eq!(body.inverse_mass(), 0.25);

        body.set_mass(0.0);
        assert_eq!(body.inverse_mass(), 0.0);

        body.set_mass(-2.0);
        assert_eq!(body.inverse_mass(), 0.0);

        body.set_mass(2.0);
        body.set_kind(BodyKind::Static);
        assert_eq!(body.inverse_mass(), 0.0);

        body.set_kind(BodyKind::Dynamic);
        assert_eq!(body.inverse_mass(), 0.5);
    }

    #[test]
    fn new_box_derives_bounds_from_half_extents() {
        let body = Body::new_box(Vec2::new(2.0, 3.0), Vec2::new(1.0, 2.0), BodyKind::Static, 0.0);
        assert_eq!(body.bounds().min, Vec2::new(1.0, 1.0));
        assert_eq!(body.bounds().max, Vec2::new(3.0, 5.0));
        assert_eq!(body.index(), None);
        assert_eq!(body.world(), None);
        assert_eq!(body.shape().kind(), ShapeKind::Box);
    }

    #[test]
    fn new_circle_uses_size_x_as_diameter() {
        let body = Body::new_circle(Vec2::new(5.0, 5.0), Vec2::new(4.0, 9.0), BodyKind::Dynamic, 1.0);
        match body.shape() {
            Shape::Circle(c) => {
                assert_eq!(c.center, Vec2::new(5.0, 5.0));
                assert_eq!(c.radius, 2.0);
            }
            Shape::Box => panic!("expected circle"),
        }
    }

    #[test]
    fn material_setters_clamp() {
        let mut body = Body::new_box(Vec2::zero(), Vec2::new(1.0, 1.0), BodyKind::Dynamic, 1.0);
        body.set_restitution(3.0);
        body.set_friction(-1.0);
        assert_eq!(body.restitution(), 1.0);
        assert_eq!(body.friction(), 0.0);
    }

    #[test]
    fn kind_and_shape_codes() {
        assert_eq!(BodyKind::from_code(1), Some(BodyKind::Dynamic));
        assert_eq!(ShapeKind::from_code(1), Some(ShapeKind::Circle));
        assert_eq!(ShapeKind::from_code(7), None);
    }
}
