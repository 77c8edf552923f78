//! Sampling and quantization of the analytic functions behind each table.
//!
//! This is the only place in the crate that evaluates floating-point
//! trigonometry. It runs offline; the committed output is what the runtime
//! reads.

use std::f64::consts::PI;

use tracing::warn;

use super::LutGenError;
use crate::config::TargetFormat;

/// Angle of sample `index` out of `samples` over one full turn.
pub fn periodic_position(index: usize, samples: usize) -> f64 {
    2.0 * PI * index as f64 / samples as f64
}

/// Argument of sample `index` out of `samples` over `[-1, 1]`.
///
/// The last sample is pinned to exactly `1.0` so the table ends on the
/// function's endpoint value.
pub fn inverse_position(index: usize, samples: usize) -> f64 {
    if index + 1 == samples {
        1.0
    } else {
        2.0 * index as f64 / samples as f64 - 1.0
    }
}

/// Scale `value` to the target format, rounding half away from zero.
///
/// Values beyond the `i32` range (the tangent asymptotes) saturate and are
/// reported with a warning.
pub fn quantize(
    table: &'static str,
    index: usize,
    position: f64,
    value: f64,
    target: &TargetFormat,
) -> Result<i32, LutGenError> {
    if !value.is_finite() {
        return Err(LutGenError::NonFiniteSample {
            table,
            index,
            position,
        });
    }

    let scaled = (value * target.one as f64).round();
    if scaled > f64::from(i32::MAX) {
        warn!("{} sample {} ({}) saturated to i32::MAX", table, index, value);
        Ok(i32::MAX)
    } else if scaled < f64::from(i32::MIN) {
        warn!("{} sample {} ({}) saturated to i32::MIN", table, index, value);
        Ok(i32::MIN)
    } else {
        Ok(scaled as i32)
    }
}

/// `samples` values of `f` over `[0, 2*PI)` followed by the first value again.
pub fn sample_periodic(
    table: &'static str,
    samples: usize,
    target: &TargetFormat,
    f: impl Fn(f64) -> f64,
) -> Result<Vec<i32>, LutGenError> {
    let mut entries = Vec::with_capacity(samples + 1);
    for index in 0..samples {
        let angle = periodic_position(index, samples);
        entries.push(quantize(table, index, angle, f(angle), target)?);
    }
    entries.push(entries[0]);
    Ok(entries)
}

/// `samples` `(sin, cos)` pairs over `[0, 2*PI)` followed by the first pair.
pub fn sample_interleaved(
    table: &'static str,
    samples: usize,
    target: &TargetFormat,
) -> Result<Vec<i32>, LutGenError> {
    let mut entries = Vec::with_capacity(samples * 2 + 2);
    for index in 0..samples {
        let angle = periodic_position(index, samples);
        entries.push(quantize(table, index, angle, angle.sin(), target)?);
        entries.push(quantize(table, index, angle, angle.cos(), target)?);
    }
    entries.push(entries[0]);
    entries.push(entries[1]);
    Ok(entries)
}

/// `samples` values of `f` over `[-1, 1]` followed by the last value twice.
pub fn sample_inverse(
    table: &'static str,
    samples: usize,
    target: &TargetFormat,
    f: impl Fn(f64) -> f64,
) -> Result<Vec<i32>, LutGenError> {
    let mut entries = Vec::with_capacity(samples + 2);
    for index in 0..samples {
        let position = inverse_position(index, samples);
        entries.push(quantize(table, index, position, f(position), target)?);
    }
    let last = entries[samples - 1];
    entries.push(last);
    entries.push(last);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q16() -> TargetFormat {
        TargetFormat::default()
    }

    #[test]
    fn test_quantize_rounds_half_away_from_zero() {
        let target = q16();
        let half_step = 0.5 / 65536.0;
        assert_eq!(quantize("t", 0, 0.0, half_step, &target).unwrap(), 1);
        assert_eq!(quantize("t", 0, 0.0, -half_step, &target).unwrap(), -1);
        assert_eq!(quantize("t", 0, 0.0, 1.0, &target).unwrap(), 65536);
    }

    #[test]
    fn test_quantize_saturates() {
        let target = q16();
        assert_eq!(quantize("tan", 0, 0.0, 1e16, &target).unwrap(), i32::MAX);
        assert_eq!(quantize("tan", 0, 0.0, -1e16, &target).unwrap(), i32::MIN);
    }

    #[test]
    fn test_quantize_rejects_non_finite() {
        let err = quantize("asin", 3, 1.5, f64::NAN, &q16()).unwrap_err();
        assert!(matches!(
            err,
            LutGenError::NonFiniteSample { table: "asin", index: 3, .. }
        ));
    }

    #[test]
    fn test_periodic_layout() {
        let entries = sample_periodic("sin", 4, &q16(), f64::sin).unwrap();
        assert_eq!(entries, vec![0, 65536, 0, -65536, 0]);
    }

    #[test]
    fn test_interleaved_layout() {
        let entries = sample_interleaved("sin_cos", 4, &q16()).unwrap();
        assert_eq!(
            entries,
            vec![0, 65536, 65536, 0, 0, -65536, -65536, 0, 0, 65536]
        );
    }

    #[test]
    fn test_inverse_layout_pins_last_position() {
        assert_eq!(inverse_position(0, 4), -1.0);
        assert_eq!(inverse_position(2, 4), 0.0);
        assert_eq!(inverse_position(3, 4), 1.0);

        let entries = sample_inverse("asin", 4, &q16(), f64::asin).unwrap();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0], -102944);
        assert_eq!(entries[2], 0);
        assert_eq!(entries[3], 102944);
        assert_eq!(entries[4], entries[3]);
        assert_eq!(entries[5], entries[3]);
    }
}
