use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

use super::FixedScalar;

/// Three-component counterpart of [`super::FixedVec2`], y-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedVec3 {
    pub x: FixedScalar,
    pub y: FixedScalar,
    pub z: FixedScalar,
}

impl FixedVec3 {
    pub const ZERO: Self = Self::splat(FixedScalar::ZERO);
    pub const ONE: Self = Self::splat(FixedScalar::ONE);
    pub const MINUS_ONE: Self = Self::splat(FixedScalar::MINUS_ONE);
    pub const UP: Self = Self::new(FixedScalar::ZERO, FixedScalar::ONE, FixedScalar::ZERO);
    pub const DOWN: Self = Self::new(FixedScalar::ZERO, FixedScalar::MINUS_ONE, FixedScalar::ZERO);
    pub const LEFT: Self = Self::new(FixedScalar::MINUS_ONE, FixedScalar::ZERO, FixedScalar::ZERO);
    pub const RIGHT: Self = Self::new(FixedScalar::ONE, FixedScalar::ZERO, FixedScalar::ZERO);
    pub const FORWARD: Self = Self::new(FixedScalar::ZERO, FixedScalar::ZERO, FixedScalar::ONE);
    pub const BACK: Self = Self::new(FixedScalar::ZERO, FixedScalar::ZERO, FixedScalar::MINUS_ONE);

    pub const fn new(x: FixedScalar, y: FixedScalar, z: FixedScalar) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(value: FixedScalar) -> Self {
        Self { x: value, y: value, z: value }
    }

    pub const fn from_ints(x: i32, y: i32, z: i32) -> Self {
        Self {
            x: FixedScalar::from_int(x),
            y: FixedScalar::from_int(y),
            z: FixedScalar::from_int(z),
        }
    }

    pub fn from_f32_unsafe(x: f32, y: f32, z: f32) -> Self {
        Self {
            x: FixedScalar::from_f32_unsafe(x),
            y: FixedScalar::from_f32_unsafe(y),
            z: FixedScalar::from_f32_unsafe(z),
        }
    }

    pub fn from_vec3_unsafe(value: Vec3) -> Self {
        Self::from_f32_unsafe(value.x, value.y, value.z)
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x.to_f32(), self.y.to_f32(), self.z.to_f32())
    }

    pub fn length_squared(self) -> FixedScalar {
        self.dot(self)
    }

    pub fn length(self) -> FixedScalar {
        self.length_squared().sqrt()
    }

    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == FixedScalar::ZERO {
            Self::ZERO
        } else {
            self / len
        }
    }

    pub fn distance(self, other: Self) -> FixedScalar {
        (other - self).length()
    }

    pub fn clamp_length(self, max_length: FixedScalar) -> Self {
        if self.length_squared() > max_length * max_length {
            self.normalize() * max_length
        } else {
            self
        }
    }

    pub fn dot(self, other: Self) -> FixedScalar {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn project(self, onto: Self) -> Self {
        onto * (self.dot(onto) / onto.dot(onto))
    }

    pub fn project_on_plane(self, normal: Self) -> Self {
        self - self.project(normal)
    }

    /// Reflection off a surface with unit `normal`.
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (FixedScalar::TWO * self.dot(normal))
    }

    /// Unsigned angle in radians, `[0, PI]`.
    pub fn radians_between(self, other: Self) -> FixedScalar {
        // Long vectors overflow the squared product; fall back to the
        // coarser product of lengths there.
        let denominator = match self.length_squared().checked_mul(other.length_squared()) {
            Some(product) => product.sqrt(),
            None => self.length() * other.length(),
        };
        if denominator == FixedScalar::ZERO {
            return FixedScalar::ZERO;
        }
        (self.dot(other) / denominator)
            .clamp(FixedScalar::MINUS_ONE, FixedScalar::ONE)
            .acos()
    }

    /// Unsigned angle in degrees.
    pub fn angle_between(self, other: Self) -> FixedScalar {
        self.radians_between(other) * FixedScalar::RAD_TO_DEG
    }

    /// Angle in degrees, negative when the rotation from `self` to `other`
    /// is clockwise around `axis`.
    pub fn signed_angle(self, other: Self, axis: Self) -> FixedScalar {
        let angle = self.angle_between(other);
        if axis.dot(self.cross(other)) < FixedScalar::ZERO {
            -angle
        } else {
            angle
        }
    }

    pub fn lerp(self, to: Self, t: FixedScalar) -> Self {
        let t = t.clamp01();
        self + (to - self) * t
    }

    pub fn move_towards(self, target: Self, max_distance: FixedScalar) -> Self {
        let delta = target - self;
        let distance = delta.length();
        if distance <= max_distance || distance == FixedScalar::ZERO {
            return target;
        }
        self + delta / distance * max_distance
    }
}

impl std::fmt::Display for FixedVec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl std::ops::Add for FixedVec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl std::ops::Sub for FixedVec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl std::ops::Mul<FixedScalar> for FixedVec3 {
    type Output = Self;
    fn mul(self, rhs: FixedScalar) -> Self::Output {
        Self { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
    }
}

impl std::ops::Div<FixedScalar> for FixedVec3 {
    type Output = Self;
    fn div(self, rhs: FixedScalar) -> Self::Output {
        Self { x: self.x / rhs, y: self.y / rhs, z: self.z / rhs }
    }
}

impl std::ops::Neg for FixedVec3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self { x: -self.x, y: -self.y, z: -self.z }
    }
}
