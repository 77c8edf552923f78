use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use fixed::types::I48F16;
use serde::{Deserialize, Serialize};

use super::FixedError;

/// Number of fractional bits in the raw representation.
pub const FRACTIONAL_BITS: u32 = 16;
/// Raw value of the real number 1 (the full-scale constant).
pub const ONE_RAW: i64 = 1 << FRACTIONAL_BITS;
/// Raw value of the real number 0.5.
pub const HALF_RAW: i64 = ONE_RAW >> 1;
/// Mask selecting the fractional bits of a raw value.
pub const FRACTION_MASK: i64 = ONE_RAW - 1;

/// Deterministic Q48.16 fixed-point scalar.
///
/// The value is stored as a signed 64-bit raw integer where
/// `real = raw / 2^16`. Every operation is pure integer arithmetic, so the same
/// inputs produce bit-identical outputs on every platform.
///
/// # Overflow
///
/// `+`, `-` and unary `-` wrap silently on overflow. `*` and `/` compute a
/// full-width intermediate and then truncate back to 64 bits, which also wraps.
/// Keeping operands inside [`FixedScalar::USABLE_MIN`, `FixedScalar::USABLE_MAX`]
/// is the caller's responsibility.
///
/// # Division by zero
///
/// `/` and `%` by [`FixedScalar::ZERO`] panic with the native integer
/// "attempt to divide by zero" condition. Use [`FixedScalar::checked_div`] to
/// get a [`FixedError`] instead.
///
/// No `From<i32>` or `From<f32>` exists. Exact construction goes through
/// [`FixedScalar::from_int`] or [`FixedScalar::parse`]; the float paths are
/// named `*_unsafe`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FixedScalar(i64);

impl FixedScalar {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(ONE_RAW);
    pub const TWO: Self = Self::from_int(2);
    pub const THREE: Self = Self::from_int(3);
    pub const FOUR: Self = Self::from_int(4);
    pub const FIVE: Self = Self::from_int(5);
    pub const SIX: Self = Self::from_int(6);
    pub const SEVEN: Self = Self::from_int(7);
    pub const EIGHT: Self = Self::from_int(8);
    pub const NINE: Self = Self::from_int(9);
    pub const TEN: Self = Self::from_int(10);
    pub const HUNDRED: Self = Self::from_int(100);
    pub const MINUS_ONE: Self = Self::from_int(-1);

    // Fractions hold the truncated quotient `ONE / n`, the same bits the
    // division operator produces.
    pub const HUNDREDTH: Self = Self(655);
    pub const TENTH: Self = Self(6553);
    pub const FIFTH: Self = Self(13106);
    pub const QUARTER: Self = Self(16384);
    pub const THIRD: Self = Self(21845);
    pub const HALF: Self = Self(HALF_RAW);
    pub const THREE_QUARTERS: Self = Self(49152);

    /// Largest representable value.
    pub const MAX: Self = Self(i64::MAX);
    /// Smallest representable value.
    pub const MIN: Self = Self(i64::MIN);
    /// Upper bound of the range where `*` and `/` stay exact (raw `2^31`).
    pub const USABLE_MAX: Self = Self(1 << 31);
    /// Lower bound of the range where `*` and `/` stay exact.
    pub const USABLE_MIN: Self = Self(-(1 << 31));
    /// Smallest positive value (raw 1, about 0.0000153).
    pub const EPSILON: Self = Self(1);

    pub const PI: Self = Self(205887);
    /// Full turn, `PI * 2`.
    pub const TAU: Self = Self(411774);
    /// `PI * 0.5`, truncated.
    pub const PI_HALF: Self = Self(102943);
    /// `PI * 0.25`, truncated.
    pub const PI_QUARTER: Self = Self(51471);
    /// `1 / TAU`, truncated.
    pub const ONE_DIV_TAU: Self = Self(10430);
    pub const DEG_TO_RAD: Self = Self(1143);
    pub const RAD_TO_DEG: Self = Self(3754936);
    /// Euler's number.
    pub const E: Self = Self(178145);

    /// Wrap a raw Q48.16 value.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw Q48.16 value.
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Exact conversion from an integer.
    #[inline]
    pub const fn from_int(value: i32) -> Self {
        Self((value as i64) << FRACTIONAL_BITS)
    }

    /// Conversion from a 64-bit integer; wraps outside `±2^47`.
    #[inline]
    pub const fn from_i64(value: i64) -> Self {
        Self(value << FRACTIONAL_BITS)
    }

    /// Integer part, rounded toward negative infinity.
    #[inline]
    pub const fn to_int(self) -> i32 {
        (self.0 >> FRACTIONAL_BITS) as i32
    }

    #[inline]
    pub const fn to_i64(self) -> i64 {
        self.0 >> FRACTIONAL_BITS
    }

    /// Lossy conversion for display and debugging only.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / ONE_RAW as f32
    }

    /// Lossy conversion for display and debugging only.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / ONE_RAW as f64
    }

    /// [`Self::to_f32`] rounded to five decimals.
    pub fn to_f32_rounded(self) -> f32 {
        self.to_f64_rounded() as f32
    }

    /// [`Self::to_f64`] rounded to five decimals.
    pub fn to_f64_rounded(self) -> f64 {
        (self.to_f64() * 100_000.0).round() / 100_000.0
    }

    /// Convert from `f32`, rounding half away from zero.
    ///
    /// Float rounding differs between targets and compiler settings, so values
    /// built this way must never feed deterministic simulation state.
    pub fn from_f32_unsafe(value: f32) -> Self {
        let bias = if value < 0.0 { -0.5 } else { 0.5 };
        Self((value * ONE_RAW as f32 + bias) as i64)
    }

    /// Convert from `f64`, rounding half away from zero. Not deterministic.
    pub fn from_f64_unsafe(value: f64) -> Self {
        let bias = if value < 0.0 { -0.5 } else { 0.5 };
        Self((value * ONE_RAW as f64 + bias) as i64)
    }

    /// Interop with the `fixed` crate; both types share the Q48.16 layout.
    #[inline]
    pub const fn from_fixed(value: I48F16) -> Self {
        Self(value.to_bits())
    }

    #[inline]
    pub const fn to_fixed(self) -> I48F16 {
        I48F16::from_bits(self.0)
    }

    /// Encode as the little-endian bytes of the raw value.
    #[inline]
    pub const fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    #[inline]
    pub const fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Self(i64::from_le_bytes(bytes))
    }

    /// Multiply the raw value by an integer factor, no shift involved.
    #[inline]
    pub const fn mul_int(self, factor: i32) -> Self {
        Self(self.0.wrapping_mul(factor as i64))
    }

    /// Divide the raw value by an integer divisor, truncating toward zero.
    ///
    /// # Panics
    /// Panics if `divisor` is zero.
    #[inline]
    pub const fn div_int(self, divisor: i32) -> Self {
        Self(self.0.wrapping_div(divisor as i64))
    }

    /// Product, or `None` when it does not fit the raw range.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        let product = (self.0 as i128 * rhs.0 as i128) >> FRACTIONAL_BITS;
        i64::try_from(product).ok().map(Self)
    }

    /// Division that reports a zero divisor instead of panicking.
    pub fn checked_div(self, rhs: Self) -> Result<Self, FixedError> {
        if rhs.0 == 0 {
            return Err(FixedError::DivideByZero);
        }
        Ok(self / rhs)
    }

    /// Remainder that reports a zero divisor instead of panicking.
    pub fn checked_rem(self, rhs: Self) -> Result<Self, FixedError> {
        if rhs.0 == 0 {
            return Err(FixedError::DivideByZero);
        }
        Ok(self % rhs)
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for FixedScalar {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for FixedScalar {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl Mul for FixedScalar {
    type Output = Self;
    /// `(a * b) >> 16` on the full 128-bit product; the low bits are truncated.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self(((self.0 as i128 * rhs.0 as i128) >> FRACTIONAL_BITS) as i64)
    }
}

impl Div for FixedScalar {
    type Output = Self;
    /// `(a << 16) / b`, truncated toward zero.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        Self((((self.0 as i128) << FRACTIONAL_BITS) / rhs.0 as i128) as i64)
    }
}

impl Rem for FixedScalar {
    type Output = Self;
    /// Remainder of the raw values; the sign follows the dividend.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    #[inline]
    fn rem(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_rem(rhs.0))
    }
}

impl Neg for FixedScalar {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0.wrapping_neg())
    }
}

impl AddAssign for FixedScalar {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for FixedScalar {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for FixedScalar {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for FixedScalar {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl From<I48F16> for FixedScalar {
    fn from(value: I48F16) -> Self {
        Self::from_fixed(value)
    }
}

impl From<FixedScalar> for I48F16 {
    fn from(value: FixedScalar) -> Self {
        value.to_fixed()
    }
}
