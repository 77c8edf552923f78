//! Exact decimal text codec for [`FixedScalar`].
//!
//! Parsing and formatting use integer arithmetic only, so a value written on
//! one machine reads back to the same raw bits on every other machine.

use std::fmt;
use std::str::FromStr;

use super::scalar::{FRACTIONAL_BITS, FRACTION_MASK, HALF_RAW, ONE_RAW};
use super::{FixedError, FixedScalar};

/// Fractional digits taken into account when parsing.
const PARSE_DIGITS: usize = 5;
const PARSE_SCALE: i64 = 100_000;

/// Fractional digits written by `Display`.
const DISPLAY_DIGITS: usize = 4;
const DISPLAY_SCALE: u64 = 10_000;

impl FixedScalar {
    /// Parse a decimal literal such as `-12.375` deterministically.
    ///
    /// Accepts an optional sign, integer digits, and an optional `.` followed by
    /// fractional digits; either side of the point may be empty but not both.
    /// Only the first five fractional digits matter. The fraction is
    /// `round(digits * 2^16 / 100000)`, so the result is identical on every
    /// platform. An empty string parses as zero.
    pub fn parse(text: &str) -> Result<Self, FixedError> {
        if text.is_empty() {
            return Ok(Self::ZERO);
        }

        let invalid = || FixedError::InvalidDecimal {
            input: text.to_string(),
        };

        let (negative, unsigned) = match text.as_bytes()[0] {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };

        let (integer_digits, fraction_digits) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (unsigned, ""),
        };

        if integer_digits.is_empty() && fraction_digits.is_empty() {
            return Err(invalid());
        }
        if !integer_digits.bytes().all(|b| b.is_ascii_digit())
            || !fraction_digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let out_of_range = || FixedError::DecimalOutOfRange {
            input: text.to_string(),
        };

        let integer = integer_digits.bytes().try_fold(0i64, |acc, digit| {
            acc.checked_mul(10)?.checked_add(i64::from(digit - b'0'))
        });
        let integer = integer.ok_or_else(out_of_range)?;

        // Sign applied before narrowing so `MIN` itself parses.
        let magnitude =
            i128::from(integer) * i128::from(ONE_RAW) + i128::from(parse_fraction(fraction_digits));
        let raw = i64::try_from(if negative { -magnitude } else { magnitude })
            .map_err(|_| out_of_range())?;

        Ok(Self::from_raw(raw))
    }

    /// Parse through `f64`. Faster than [`FixedScalar::parse`] for bulk loading
    /// but float parsing and rounding are not guaranteed identical everywhere.
    pub fn parse_unsafe(text: &str) -> Result<Self, FixedError> {
        if text.is_empty() {
            return Ok(Self::ZERO);
        }
        let value: f64 = text.parse().map_err(|_| FixedError::InvalidDecimal {
            input: text.to_string(),
        })?;
        Ok(Self::from_f64_unsafe(value))
    }
}

/// Raw fraction for the given digits, padded or cut to five places.
fn parse_fraction(digits: &str) -> i64 {
    let mut scaled: i64 = 0;
    let mut taken = 0;
    for digit in digits.bytes().take(PARSE_DIGITS) {
        scaled = scaled * 10 + i64::from(digit - b'0');
        taken += 1;
    }
    for _ in taken..PARSE_DIGITS {
        scaled *= 10;
    }
    // Half-up on a non-negative numerator.
    (scaled * ONE_RAW + PARSE_SCALE / 2) / PARSE_SCALE
}

impl FromStr for FixedScalar {
    type Err = FixedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Canonical form: four fractional digits, rounded half away from zero.
///
/// Values within half a digit of [`FixedScalar::MAX`] round up to a string
/// that [`FixedScalar::parse`] rejects as out of range.
impl fmt::Display for FixedScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.raw();
        let magnitude = raw.unsigned_abs();
        let mut integer = magnitude >> FRACTIONAL_BITS;
        let fraction = magnitude & FRACTION_MASK as u64;
        let mut digits = (fraction * DISPLAY_SCALE + HALF_RAW as u64) >> FRACTIONAL_BITS;
        if digits == DISPLAY_SCALE {
            integer += 1;
            digits = 0;
        }
        let sign = if raw < 0 && (integer != 0 || digits != 0) {
            "-"
        } else {
            ""
        };
        write!(
            f,
            "{sign}{integer}.{digits:0width$}",
            width = DISPLAY_DIGITS
        )
    }
}
