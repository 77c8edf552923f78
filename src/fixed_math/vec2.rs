use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use super::{FixedMat2, FixedScalar};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedVec2 {
    pub x: FixedScalar,
    pub y: FixedScalar,
}

impl FixedVec2 {
    pub const ZERO: Self = Self::splat(FixedScalar::ZERO);
    pub const ONE: Self = Self::splat(FixedScalar::ONE);
    pub const MINUS_ONE: Self = Self::splat(FixedScalar::MINUS_ONE);
    pub const LEFT: Self = Self::new(FixedScalar::MINUS_ONE, FixedScalar::ZERO);
    pub const RIGHT: Self = Self::new(FixedScalar::ONE, FixedScalar::ZERO);
    pub const UP: Self = Self::new(FixedScalar::ZERO, FixedScalar::ONE);
    pub const DOWN: Self = Self::new(FixedScalar::ZERO, FixedScalar::MINUS_ONE);

    pub const fn new(x: FixedScalar, y: FixedScalar) -> Self {
        Self { x, y }
    }

    pub const fn splat(value: FixedScalar) -> Self {
        Self { x: value, y: value }
    }

    pub const fn from_ints(x: i32, y: i32) -> Self {
        Self {
            x: FixedScalar::from_int(x),
            y: FixedScalar::from_int(y),
        }
    }

    /// Truncating integer components.
    pub const fn to_ints(self) -> (i32, i32) {
        (self.x.to_int(), self.y.to_int())
    }

    /// Boundary conversion from floats; never use inside the simulation step.
    pub fn from_f32_unsafe(x: f32, y: f32) -> Self {
        Self {
            x: FixedScalar::from_f32_unsafe(x),
            y: FixedScalar::from_f32_unsafe(y),
        }
    }

    pub fn from_vec2_unsafe(value: Vec2) -> Self {
        Self::from_f32_unsafe(value.x, value.y)
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x.to_f32(), self.y.to_f32())
    }

    pub fn length(self) -> FixedScalar {
        let len_sq = self.length_squared();
        if len_sq == FixedScalar::ZERO {
            return FixedScalar::ZERO;
        }
        len_sq.sqrt()
    }

    pub fn length_squared(self) -> FixedScalar {
        self.x * self.x + self.y * self.y
    }

    /// Unit vector in the same direction, or zero for a zero vector.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == FixedScalar::ZERO {
            Self::ZERO
        } else {
            Self {
                x: self.x / len,
                y: self.y / len,
            }
        }
    }

    pub fn distance(self, other: Self) -> FixedScalar {
        (other - self).length()
    }

    pub fn distance_squared(self, other: Self) -> FixedScalar {
        (other - self).length_squared()
    }

    /// Shorten the vector to at most `max_length`.
    pub fn clamp_length(self, max_length: FixedScalar) -> Self {
        if self.length_squared() > max_length * max_length {
            self.normalize() * max_length
        } else {
            self
        }
    }

    pub fn dot(self, other: Self) -> FixedScalar {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    pub fn cross(self, other: Self) -> FixedScalar {
        self.x * other.y - self.y * other.x
    }

    /// Counter-clockwise perpendicular `(-y, x)`.
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Projection of `self` onto `onto`. `onto` must be non-zero.
    pub fn project(self, onto: Self) -> Self {
        onto * (self.dot(onto) / onto.dot(onto))
    }

    /// Reflection of `self` off a surface with unit `normal`.
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (FixedScalar::TWO * self.dot(normal))
    }

    /// Direction angle in radians, `atan2(y, x)`.
    pub fn angle(self) -> FixedScalar {
        self.y.atan2(self.x)
    }

    /// Unsigned angle between two vectors in radians, `[0, PI]`.
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

    /// Unsigned angle between two vectors in degrees.
    pub fn angle_between(self, other: Self) -> FixedScalar {
        self.radians_between(other) * FixedScalar::RAD_TO_DEG
    }

    /// Signed angle from `self` to `other` in radians, positive counter-clockwise.
    pub fn signed_angle(self, other: Self) -> FixedScalar {
        self.cross(other).atan2(self.dot(other))
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn rotate(self, angle: FixedScalar) -> Self {
        FixedMat2::rotate(angle).mul_vec2(self)
    }

    pub fn lerp(self, to: Self, t: FixedScalar) -> Self {
        let t = t.clamp01();
        self + (to - self) * t
    }

    /// Step toward `target` by at most `max_distance`.
    pub fn move_towards(self, target: Self, max_distance: FixedScalar) -> Self {
        let delta = target - self;
        let distance = delta.length();
        if distance <= max_distance || distance == FixedScalar::ZERO {
            return target;
        }
        self + delta / distance * max_distance
    }

    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Little-endian raw bytes, `x` then `y`.
    pub fn to_le_bytes(self) -> [u8; 16] {
        let mut bytes = [0; 16];
        bytes[..8].copy_from_slice(&self.x.to_le_bytes());
        bytes[8..].copy_from_slice(&self.y.to_le_bytes());
        bytes
    }

    pub fn from_le_bytes(bytes: [u8; 16]) -> Self {
        let mut x = [0; 8];
        let mut y = [0; 8];
        x.copy_from_slice(&bytes[..8]);
        y.copy_from_slice(&bytes[8..]);
        Self::new(FixedScalar::from_le_bytes(x), FixedScalar::from_le_bytes(y))
    }
}

impl std::fmt::Display for FixedVec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl std::ops::Add for FixedVec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for FixedVec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul for FixedVec2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self { x: self.x * rhs.x, y: self.y * rhs.y }
    }
}

impl std::ops::Mul<FixedScalar> for FixedVec2 {
    type Output = Self;
    fn mul(self, rhs: FixedScalar) -> Self::Output {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl std::ops::Mul<FixedVec2> for FixedScalar {
    type Output = FixedVec2;
    fn mul(self, rhs: FixedVec2) -> Self::Output {
        rhs * self
    }
}

impl std::ops::Div for FixedVec2 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        Self { x: self.x / rhs.x, y: self.y / rhs.y }
    }
}

impl std::ops::Div<FixedScalar> for FixedVec2 {
    type Output = Self;
    fn div(self, rhs: FixedScalar) -> Self::Output {
        Self { x: self.x / rhs, y: self.y / rhs }
    }
}

impl std::ops::Div<FixedVec2> for FixedScalar {
    type Output = FixedVec2;
    fn div(self, rhs: FixedVec2) -> Self::Output {
        FixedVec2 { x: self / rhs.x, y: self / rhs.y }
    }
}

impl std::ops::Neg for FixedVec2 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self { x: -self.x, y: -self.y }
    }
}

impl std::ops::AddAssign for FixedVec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign for FixedVec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
