use serde::{Deserialize, Serialize};

use super::{FixedScalar, FixedVec2};

/// Column-major 2x2 matrix.
///
/// `*` and `/` between two matrices are not provided because they would be
/// ambiguous; use [`FixedMat2::mul_mat`] for the matrix product or the
/// `*_elementwise` methods for component-wise arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedMat2 {
    pub c0: FixedVec2,
    pub c1: FixedVec2,
}

impl FixedMat2 {
    pub const ZERO: Self = Self::from_cols(FixedVec2::ZERO, FixedVec2::ZERO);
    pub const ONE: Self = Self::from_cols(FixedVec2::ONE, FixedVec2::ONE);
    pub const MINUS_ONE: Self = Self::from_cols(FixedVec2::MINUS_ONE, FixedVec2::MINUS_ONE);
    pub const IDENTITY: Self = Self::from_cols(FixedVec2::RIGHT, FixedVec2::UP);

    pub const fn from_cols(c0: FixedVec2, c1: FixedVec2) -> Self {
        Self { c0, c1 }
    }

    /// `c0 = (c00, c01)`, `c1 = (c10, c11)`.
    pub const fn new(c00: FixedScalar, c01: FixedScalar, c10: FixedScalar, c11: FixedScalar) -> Self {
        Self {
            c0: FixedVec2::new(c00, c01),
            c1: FixedVec2::new(c10, c11),
        }
    }

    /// Counter-clockwise rotation by `angle` radians.
    ///
    /// Applied with [`FixedMat2::mul_vec2`], `(1, 0)` rotated by `PI / 2`
    /// becomes `(0, 1)`.
    pub fn rotate(angle: FixedScalar) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, -s, s, c)
    }

    /// Uniform scale on both axes.
    pub const fn scale(s: FixedScalar) -> Self {
        Self::scale_xy(s, s)
    }

    pub const fn scale_xy(x: FixedScalar, y: FixedScalar) -> Self {
        Self::new(x, FixedScalar::ZERO, FixedScalar::ZERO, y)
    }

    pub const fn scale_vec(v: FixedVec2) -> Self {
        Self::scale_xy(v.x, v.y)
    }

    /// Row vector times matrix: `(v . c0, v . c1)`.
    pub fn mul_vec2(self, v: FixedVec2) -> FixedVec2 {
        FixedVec2::new(v.dot(self.c0), v.dot(self.c1))
    }

    /// Matrix product `self * rhs` in the same row-vector convention, so
    /// `a.mul_mat(b).mul_vec2(v) == b.mul_vec2(a.mul_vec2(v))` up to rounding.
    pub fn mul_mat(self, rhs: Self) -> Self {
        let t = self.transpose();
        Self::from_cols(t.mul_vec2(rhs.c0), t.mul_vec2(rhs.c1))
    }

    pub fn transpose(self) -> Self {
        Self::new(self.c0.x, self.c1.x, self.c0.y, self.c1.y)
    }

    pub fn determinant(self) -> FixedScalar {
        self.c0.x * self.c1.y - self.c1.x * self.c0.y
    }

    pub fn mul_elementwise(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 * rhs.c0, self.c1 * rhs.c1)
    }

    /// # Panics
    /// Panics if any component of `rhs` is zero.
    pub fn div_elementwise(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 / rhs.c0, self.c1 / rhs.c1)
    }
}

impl std::fmt::Display for FixedMat2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.c0, self.c1)
    }
}

impl std::ops::Add for FixedMat2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_cols(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }
}

impl std::ops::Sub for FixedMat2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_cols(self.c0 - rhs.c0, self.c1 - rhs.c1)
    }
}

impl std::ops::Mul<FixedScalar> for FixedMat2 {
    type Output = Self;
    fn mul(self, rhs: FixedScalar) -> Self::Output {
        Self::from_cols(self.c0 * rhs, self.c1 * rhs)
    }
}

impl std::ops::Div<FixedScalar> for FixedMat2 {
    type Output = Self;
    fn div(self, rhs: FixedScalar) -> Self::Output {
        Self::from_cols(self.c0 / rhs, self.c1 / rhs)
    }
}

impl std::ops::Neg for FixedMat2 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::from_cols(-self.c0, -self.c1)
    }
}
