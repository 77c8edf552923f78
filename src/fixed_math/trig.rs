//! Angle-based trigonometry on top of the lookup tables in [`crate::lut`].
//!
//! Periodic functions reduce the angle to a fraction of a full turn and hand
//! it to the table; inverse functions pass their `[-1, 1]` argument through
//! unchanged. The arctangent family uses a polynomial instead of a table.

use super::scalar::{FRACTIONAL_BITS, FRACTION_MASK};
use super::FixedScalar;
use crate::lut;

// Odd minimax polynomial for atan on [0, 1], highest degree first, evaluated
// in `t^2`. Signs alternate starting from the leading negative term.
const ATAN2_C11: FixedScalar = FixedScalar::from_raw(-883);
const ATAN2_C9: FixedScalar = FixedScalar::from_raw(3767);
const ATAN2_C7: FixedScalar = FixedScalar::from_raw(7945);
const ATAN2_C5: FixedScalar = FixedScalar::from_raw(12821);
const ATAN2_C3: FixedScalar = FixedScalar::from_raw(21822);
const ATAN2_C1: FixedScalar = FixedScalar::from_raw(65536);
// Octant folds.
const ATAN2_HALF_PI: FixedScalar = FixedScalar::from_raw(102943);
const ATAN2_PI: FixedScalar = FixedScalar::from_raw(205887);

const ATAN_APPROX_A: FixedScalar = FixedScalar::from_raw(16036);
const ATAN_APPROX_B: FixedScalar = FixedScalar::from_raw(4345);

impl FixedScalar {
    /// Angle in radians as a raw fraction of a full turn in `[0, ONE)`,
    /// rounded to the nearest step.
    fn turn_fraction(self) -> i64 {
        let tau = Self::TAU.raw();
        let wrapped = self.raw().rem_euclid(tau);
        (((wrapped << FRACTIONAL_BITS) + (tau >> 1)) / tau) & FRACTION_MASK
    }

    /// Sine of an angle in radians.
    #[inline]
    pub fn sin(self) -> Self {
        Self::from_raw(lut::sin(self.turn_fraction()))
    }

    /// Cosine of an angle in radians.
    #[inline]
    pub fn cos(self) -> Self {
        Self::from_raw(lut::cos(self.turn_fraction()))
    }

    /// Tangent of an angle in radians. Near the asymptotes the table holds
    /// saturated samples and the result is meaningless.
    #[inline]
    pub fn tan(self) -> Self {
        Self::from_raw(lut::tan(self.turn_fraction()))
    }

    /// `(sin, cos)` sharing one table position.
    #[inline]
    pub fn sin_cos(self) -> (Self, Self) {
        let (sin, cos) = lut::sin_cos(self.turn_fraction());
        (Self::from_raw(sin), Self::from_raw(cos))
    }

    /// Arcsine for input in `[-1, 1]`.
    ///
    /// # Panics
    /// Input outside `[-1, 1]` indexes past the table and panics; clamp first.
    #[inline]
    pub fn asin(self) -> Self {
        Self::from_raw(lut::asin(self.raw()))
    }

    /// Arccosine for input in `[-1, 1]`.
    ///
    /// # Panics
    /// Input outside `[-1, 1]` indexes past the table and panics; clamp first.
    #[inline]
    pub fn acos(self) -> Self {
        Self::from_raw(lut::acos(self.raw()))
    }

    /// Arctangent, `atan2(self, 1)`.
    #[inline]
    pub fn atan(self) -> Self {
        self.atan2(Self::ONE)
    }

    /// Cheaper arctangent for input in `[-1, 1]` with no division.
    /// Maximum error is about 0.0015 rad.
    pub fn atan_approx(self) -> Self {
        let abs = self.abs();
        Self::PI_QUARTER * self - self * (abs - Self::ONE) * (ATAN_APPROX_A + ATAN_APPROX_B * abs)
    }

    /// Four-quadrant arctangent of `self / x` (`self` is the numerator),
    /// in `[-PI, PI]`. Returns zero at the origin.
    pub fn atan2(self, x: Self) -> Self {
        let y = self;
        let abs_x = x.abs();
        let abs_y = y.abs();

        let max = abs_x.max(abs_y);
        let min = abs_x.min(abs_y);
        if max == Self::ZERO {
            return Self::ZERO;
        }

        let ratio = min * (Self::ONE / max);
        let ratio_sq = ratio * ratio;

        let mut poly = ATAN2_C11;
        poly = poly * ratio_sq + ATAN2_C9;
        poly = poly * ratio_sq - ATAN2_C7;
        poly = poly * ratio_sq + ATAN2_C5;
        poly = poly * ratio_sq - ATAN2_C3;
        poly = poly * ratio_sq + ATAN2_C1;
        let mut angle = poly * ratio;

        if abs_y > abs_x {
            angle = ATAN2_HALF_PI - angle;
        }
        if x < Self::ZERO {
            angle = ATAN2_PI - angle;
        }
        if y < Self::ZERO {
            angle = -angle;
        }
        angle
    }
}
