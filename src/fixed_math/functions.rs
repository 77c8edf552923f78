//! Scalar math library: roots, exponentials, rounding and interpolation.
//!
//! Everything here is built from the raw-integer primitives in `scalar.rs`,
//! never from floating point.

use super::scalar::{FRACTIONAL_BITS, FRACTION_MASK, HALF_RAW, ONE_RAW};
use super::FixedScalar;

/// `ONE << 16`; dividing it by a raw value yields the raw reciprocal directly.
const FULL_SCALE_SQUARED: i64 = ONE_RAW << FRACTIONAL_BITS;

/// Above this input `exp` saturates to `MAX` (raw of 32.0).
const EXP_SATURATE_RAW: i64 = 32 << FRACTIONAL_BITS;
/// Below this input `exp` flushes to zero (raw of -12.0).
const EXP_FLUSH_RAW: i64 = -12 << FRACTIONAL_BITS;
const EXP_MAX_TERMS: i64 = 30;

impl FixedScalar {
    #[inline]
    pub const fn abs(self) -> Self {
        Self::from_raw(if self.raw() < 0 {
            self.raw().wrapping_neg()
        } else {
            self.raw()
        })
    }

    /// `+1` for non-negative input, `-1` otherwise. Zero maps to `+1`.
    #[inline]
    pub const fn sign(self) -> Self {
        if self.raw() < 0 {
            Self::MINUS_ONE
        } else {
            Self::ONE
        }
    }

    /// True when exactly one of the two values has its sign bit set.
    #[inline]
    pub const fn is_opposite_sign(self, other: Self) -> bool {
        (self.raw() ^ other.raw()) < 0
    }

    /// `self` with its sign flipped when it disagrees with `reference`.
    #[inline]
    pub const fn set_same_sign(self, reference: Self) -> Self {
        if self.is_opposite_sign(reference) {
            Self::from_raw(self.raw().wrapping_neg())
        } else {
            self
        }
    }

    /// Clamp into `[min, max]`. Unlike `Ord::clamp` this never panics; with
    /// `min > max` the lower bound is checked first.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }

    #[inline]
    pub fn clamp01(self) -> Self {
        self.clamp(Self::ZERO, Self::ONE)
    }

    /// Largest integer value not greater than `self`.
    #[inline]
    pub const fn floor(self) -> Self {
        Self::from_raw(self.raw() & !FRACTION_MASK)
    }

    /// Smallest integer value not less than `self`.
    #[inline]
    pub const fn ceil(self) -> Self {
        if self.raw() & FRACTION_MASK == 0 {
            return self;
        }
        Self::from_raw((self.raw() & !FRACTION_MASK) + ONE_RAW)
    }

    /// Fractional bits only. For negative input this is `self - floor(self)`.
    #[inline]
    pub const fn fract(self) -> Self {
        Self::from_raw(self.raw() & FRACTION_MASK)
    }

    /// Round to the nearest integer; exact halves round up.
    #[inline]
    pub const fn round_to_int(self) -> i32 {
        if self.raw() & FRACTION_MASK >= HALF_RAW {
            self.to_int() + 1
        } else {
            self.to_int()
        }
    }

    /// `2^power`. Negative powers down to `-16` are exact; below that the
    /// result is zero.
    ///
    /// Positive powers past the usable range shift bits out of the top of the
    /// raw value: `47` lands on [`FixedScalar::MIN`] and `48` or more is zero.
    pub const fn pow2(power: i32) -> Self {
        let shift = power.unsigned_abs();
        let raw = if power >= 0 {
            ONE_RAW.checked_shl(shift)
        } else {
            ONE_RAW.checked_shr(shift)
        };
        match raw {
            Some(raw) => Self::from_raw(raw),
            None => Self::ZERO,
        }
    }

    /// Square root by integer Newton-Raphson on the raw value.
    ///
    /// `isqrt(raw) << 8` restores the Q16 scale, so the result is accurate to
    /// about `2^-8`. Zero and negative inputs return zero.
    pub fn sqrt(self) -> Self {
        let raw = self.raw();
        if raw <= 0 {
            return Self::ZERO;
        }

        let mut b = (raw >> 1) + 1;
        let mut c = (b + raw / b) >> 1;
        while c < b {
            b = c;
            c = (b + raw / b) >> 1;
        }

        Self::from_raw(b << (FRACTIONAL_BITS >> 1))
    }

    /// `1 / self` without the extra truncation of going through `/`.
    ///
    /// # Panics
    /// Panics if `self` is zero.
    #[inline]
    pub fn rcp(self) -> Self {
        Self::from_raw(FULL_SCALE_SQUARED / self.raw())
    }

    /// `1 / sqrt(self)`.
    ///
    /// # Panics
    /// Panics if `self` is zero or negative.
    #[inline]
    pub fn rsqrt(self) -> Self {
        Self::from_raw(FULL_SCALE_SQUARED / self.sqrt().raw())
    }

    /// `e^self` by power series.
    ///
    /// Inputs at or above 32 saturate to [`FixedScalar::MAX`], inputs at or
    /// below -12 return zero. Negative inputs are evaluated as `1 / e^-x`.
    pub fn exp(self) -> Self {
        if self == Self::ZERO {
            return Self::ONE;
        }
        if self == Self::ONE {
            return Self::E;
        }
        if self.raw() >= EXP_SATURATE_RAW {
            return Self::MAX;
        }
        if self.raw() <= EXP_FLUSH_RAW {
            return Self::ZERO;
        }

        let negative = self.is_negative();
        let x = self.abs();

        let mut result = x + Self::ONE;
        let mut term = x;
        for i in 2..EXP_MAX_TERMS {
            term *= Self::from_raw(x.raw() / i);
            result += term;

            // Larger inputs need many terms, so past 15 the cutoff loosens.
            if term.raw() < 500 && (i > 15 || term.raw() < 20) {
                break;
            }
        }

        if negative {
            Self::ONE / result
        } else {
            result
        }
    }

    /// Linear interpolation with `t` clamped to `[0, 1]`.
    #[inline]
    pub fn lerp(self, to: Self, t: Self) -> Self {
        self.lerp_unclamped(to, t.clamp01())
    }

    #[inline]
    pub fn lerp_unclamped(self, to: Self, t: Self) -> Self {
        self + (to - self) * t
    }

    /// Wrap `self` into `[0, length]`.
    pub fn repeat(self, length: Self) -> Self {
        (self - (self / length).floor() * length).clamp(Self::ZERO, length)
    }

    /// Wrap an angle into `(-PI, PI]`.
    pub fn normalize_radians(self) -> Self {
        let wrapped = self.raw().rem_euclid(Self::TAU.raw());
        if wrapped > Self::PI.raw() {
            Self::from_raw(wrapped - Self::TAU.raw())
        } else {
            Self::from_raw(wrapped)
        }
    }

    /// Interpolate between two angles in radians along the shorter arc.
    pub fn lerp_angle(self, to: Self, t: Self) -> Self {
        let delta = (to - self).repeat(Self::TAU);
        let delta = if delta > Self::PI {
            delta - Self::TAU
        } else {
            delta
        };
        self.lerp(self + delta, t)
    }

    /// Step toward `target` by at most `max_delta`.
    pub fn move_towards(self, target: Self, max_delta: Self) -> Self {
        if (target - self).abs() <= max_delta {
            target
        } else {
            self + (target - self).sign() * max_delta
        }
    }

    #[inline]
    pub fn to_radians(self) -> Self {
        self * Self::DEG_TO_RAD
    }

    #[inline]
    pub fn to_degrees(self) -> Self {
        self * Self::RAD_TO_DEG
    }
}
