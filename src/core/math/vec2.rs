use serde::{Deserialize, Serialize};

/// 2D Vector for physics calculations
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Both components are finite (no NaN / inf)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar 2D cross product (z of the 3D cross)
    pub fn cross(&self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Component-wise product
    pub fn mul_elem(&self, other: Vec2) -> Self {
        Self { x: self.x * other.x, y: self.y * other.y }
    }

    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0001 {
            Self { x: self.x / len, y: self.y / len }
        } else {
            Self::zero()
        }
    }

    pub fn distance(&self, other: Vec2) -> f32 {
        (other - *self).length()
    }

    /// Unit vector pointing from `self` towards `other` (zero if they coincide)
    pub fn direction_to(&self, other: Vec2) -> Self {
        (other - *self).normalize()
    }

    /// Projection of `self` onto `onto`
    pub fn project(&self, onto: Vec2) -> Self {
        let denom = onto.length_squared();
        if denom == 0.0 {
            return Self::zero();
        }
        onto * (self.dot(onto) / denom)
    }

    /// Reflect across a unit normal
    pub fn reflect(&self, normal: Vec2) -> Self {
        *self - normal * (2.0 * self.dot(normal))
    }

    pub fn perpendicular(&self) -> Self {
        Self { x: -self.y, y: self.x }
    }

    pub fn min(&self, other: Vec2) -> Self {
        Self { x: self.x.min(other.x), y: self.y.min(other.y) }
    }

    pub fn max(&self, other: Vec2) -> Self {
        Self { x: self.x.max(other.x), y: self.y.max(other.y) }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_of_zero_stays_zero() {
        assert_eq!(Vec2::zero().normalize(), Vec2::ZERO);
        let n = Vec2::new(3.0, 4.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn project_and_reflect() {
        let p = Vec2::new(2.0, 3.0).project(Vec2::new(1.0, 0.0));
        assert_eq!(p, Vec2::new(2.0, 0.0));
        assert_eq!(Vec2::new(1.0, 1.0).project(Vec2::ZERO), Vec2::ZERO);

        let r = Vec2::new(1.0, -1.0).reflect(Vec2::new(0.0, 1.0));
        assert_eq!(r, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn cross_and_perpendicular() {
        let a = Vec2::new(1.0, 0.0);
        assert_eq!(a.cross(Vec2::new(0.0, 1.0)), 1.0);
        assert_eq!(a.perpendicular(), Vec2::new(0.0, 1.0));
        assert_eq!(a.direction_to(Vec2::new(1.0, 5.0)), Vec2::new(0.0, 1.0));
    }
}
