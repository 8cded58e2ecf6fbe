//! Integrator - force accumulation and semi-implicit Euler
//!
//! Per dynamic body, per step:
//! 1. force += gravity * mass (positive Y is down)
//! 2. a = force * inverse_mass
//! 3. v += a * dt, then v *= (1 - damping)
//! 4. p += v * dt
//! 5. force = 0
//!
//! Bounds are refreshed for every body, static ones included.

use crate::core::math::{clamp, Vec2};
use crate::domain::error::{PhysicsError, Result};
use crate::domain::settings::{WorldSettings, DEFAULT_DAMPING};
use crate::systems::diagnostics::tracked;

use super::body::Body;

/// Constants for one integration pass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntegrationParams {
    pub gravity: f32,
    pub damping: f32,
    /// Per-axis velocity clamp, `None` when guards are off
    pub max_velocity: Option<f32>,
}

impl IntegrationParams {
    pub fn new(gravity: f32) -> Self {
        Self {
            gravity,
            damping: DEFAULT_DAMPING,
            max_velocity: None,
        }
    }

    pub fn from_settings(settings: &WorldSettings, gravity: f32) -> Self {
        Self {
            gravity,
            damping: settings.damping,
            max_velocity: settings.enforce_guards.then_some(settings.max_velocity),
        }
    }
}

/// dt must be a finite, strictly positive number
#[inline]
pub fn check_delta_time(dt: f32) -> Result<f32> {
    if dt.is_finite() && dt > 0.0 {
        Ok(dt)
    } else {
        Err(PhysicsError::InvalidValue)
    }
}

#[inline]
fn check_vector(v: Vec2) -> Result<Vec2> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PhysicsError::NullValue)
    }
}

impl Body {
    /// Add a force, applied at the next integration
    pub fn apply_force(&mut self, force: Vec2) -> Result<()> {
        tracked("apply_force", || {
            let force = check_vector(force)?;
            if !self.is_dynamic() {
                return Err(PhysicsError::BodyNotValid);
            }
            self.force += force;
            Ok(())
        })
    }

    /// Change velocity immediately by `impulse * inverse_mass`
    pub fn apply_impulse(&mut self, impulse: Vec2) -> Result<()> {
        tracked("apply_impulse", || {
            let impulse = check_vector(impulse)?;
            if !self.is_dynamic() {
                return Err(PhysicsError::BodyNotValid);
            }
            self.velocity += impulse * self.inverse_mass();
            Ok(())
        })
    }

    /// Advance this body by `dt` with the default damping
    pub fn integrate(&mut self, dt: f32, gravity: f32) -> Result<()> {
        self.integrate_with(dt, &IntegrationParams::new(gravity))
    }

    pub fn integrate_with(&mut self, dt: f32, params: &IntegrationParams) -> Result<()> {
        tracked("integrate", || {
            let dt = check_delta_time(dt)?;
            self.advance(dt, params);
            Ok(())
        })
    }

    /// Integration without validation. `dt` has been checked by the caller.
    pub(crate) fn advance(&mut self, dt: f32, params: &IntegrationParams) {
        if self.is_dynamic() && self.inverse_mass() > 0.0 {
            self.force.y += self.mass() * params.gravity;

            let acceleration = self.force * self.inverse_mass();
            self.velocity += acceleration * dt;

            let keep = 1.0 - params.damping;
            self.velocity = self.velocity * keep;

            if let Some(max) = params.max_velocity {
                self.velocity.x = clamp(self.velocity.x, -max, max);
                self.velocity.y = clamp(self.velocity.y, -max, max);
            }

            self.position += self.velocity * dt;
            self.force = Vec2::zero();
        }

        self.refresh_bounds();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::GRAVITY;
    use crate::systems::rigid_body::BodyKind;

    fn dynamic_box(mass: f32) -> Body {
        Body::new_box(Vec2::zero(), Vec2::new(1.0, 1.0), BodyKind::Dynamic, mass)
    }

    #[test]
    fn one_second_of_gravity_with_damping() {
        let mut body = dynamic_box(1.0);
        body.integrate(1.0, GRAVITY).unwrap();

        let expected = GRAVITY * (1.0 - DEFAULT_DAMPING);
        assert!((body.velocity.y - expected).abs() < 1e-4);
        assert!((body.velocity.y - 9.7119).abs() < 1e-3);
        assert!((body.position.y - expected).abs() < 1e-4);
        assert_eq!(body.velocity.x, 0.0);
        assert_eq!(body.accumulated_force(), Vec2::ZERO);
    }

    #[test]
    fn gravity_acceleration_is_mass_independent() {
        let mut light = dynamic_box(0.4);
        let mut heavy = dynamic_box(50.0);
        light.integrate(0.5, GRAVITY).unwrap();
        heavy.integrate(0.5, GRAVITY).unwrap();
        assert!((light.velocity.y - heavy.velocity.y).abs() < 1e-4);
    }

    #[test]
    fn static_body_only_refreshes_bounds() {
        let mut body = Body::new_box(Vec2::zero(), Vec2::new(1.0, 1.0), BodyKind::Static, 5.0);
        body.position = Vec2::new(10.0, 0.0);
        body.integrate(1.0, GRAVITY).unwrap();

        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.position, Vec2::new(10.0, 0.0));
        assert_eq!(body.bounds().min, Vec2::new(9.0, -1.0));
    }

    #[test]
    fn zero_mass_dynamic_body_does_not_move() {
        let mut body = dynamic_box(0.0);
        body.integrate(1.0, GRAVITY).unwrap();
        assert_eq!(body.position, Vec2::ZERO);
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn non_positive_delta_time_is_rejected() {
        let mut body = dynamic_box(1.0);
        assert_eq!(body.integrate(0.0, GRAVITY), Err(PhysicsError::InvalidValue));
        assert_eq!(body.integrate(-0.1, GRAVITY), Err(PhysicsError::InvalidValue));
        assert_eq!(body.integrate(f32::NAN, GRAVITY), Err(PhysicsError::InvalidValue));
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn applied_force_waits_for_integration() {
        let mut body = dynamic_box(2.0);
        body.apply_force(Vec2::new(4.0, 0.0)).unwrap();
        body.apply_force(Vec2::new(4.0, 0.0)).unwrap();
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.accumulated_force(), Vec2::new(8.0, 0.0));

        body.integrate(1.0, 0.0).unwrap();
        // a = 8 / 2 = 4, damped by 1%
        assert!((body.velocity.x - 3.96).abs() < 1e-4);
        assert_eq!(body.accumulated_force(), Vec2::ZERO);
    }

    #[test]
    fn impulse_changes_velocity_immediately() {
        let mut body = dynamic_box(4.0);
        body.apply_impulse(Vec2::new(0.0, -8.0)).unwrap();
        assert_eq!(body.velocity, Vec2::new(0.0, -2.0));
    }

    #[test]
    fn static_bodies_reject_force_and_impulse() {
        let mut body = Body::new_box(Vec2::zero(), Vec2::new(1.0, 1.0), BodyKind::Static, 1.0);
        assert_eq!(body.apply_force(Vec2::new(1.0, 0.0)), Err(PhysicsError::BodyNotValid));
        assert_eq!(body.apply_impulse(Vec2::new(1.0, 0.0)), Err(PhysicsError::BodyNotValid));
    }

    #[test]
    fn non_finite_force_is_a_null_value() {
        let mut body = dynamic_box(1.0);
        assert_eq!(body.apply_force(Vec2::new(f32::NAN, 0.0)), Err(PhysicsError::NullValue));
        assert_eq!(body.accumulated_force(), Vec2::ZERO);
    }

    #[test]
    fn guard_clamps_velocity() {
        let mut body = dynamic_box(1.0);
        let params = IntegrationParams { gravity: 0.0, damping: 0.0, max_velocity: Some(5.0) };
        body.apply_impulse(Vec2::new(100.0, -100.0)).unwrap();
        body.integrate_with(1.0, &params).unwrap();
        assert_eq!(body.velocity, Vec2::new(5.0, -5.0));
        assert_eq!(body.position, Vec2::new(5.0, -5.0));
    }

    #[test]
    fn circle_geometry_follows_position() {
        let mut body = Body::new_circle(Vec2::zero(), Vec2::new(2.0, 2.0), BodyKind::Dynamic, 1.0);
        body.integrate(1.0, GRAVITY).unwrap();
        match body.shape() {
            crate::systems::rigid_body::Shape::Circle(c) => {
                assert_eq!(c.center, body.position);
                assert_eq!(c.radius, 1.0);
            }
            _ => panic!("expected circle"),
        }
    }
}
