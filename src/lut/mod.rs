//! Runtime trigonometry lookup tables.
//!
//! The tables are produced offline by the `lut_gen` binary (see
//! [`crate::lut_gen`]) and committed under `src/lut/generated/`. They are plain
//! `static` arrays, so they are fully built before any code can read them and
//! can be shared between threads without synchronization.
//!
//! All lookups work on raw Q48.16 integers:
//!
//! - Periodic tables (sin, cos, tan, interleaved sin/cos) take a fraction of a
//!   full turn in `[0, ONE)`.
//! - Inverse tables (asin, acos) take a value in `[-ONE, ONE]`.
//!
//! The position inside the table is split into an index and a 16-bit weight,
//! and the result interpolates linearly between `table[index]` and
//! `table[index + 1]`. Sentinel entries at the end of every table make that
//! second read always valid, so there are no boundary branches.

use crate::fixed_math::scalar::{FRACTIONAL_BITS, FRACTION_MASK, ONE_RAW};

mod generated {
    include!("generated/sin_lut.rs");
    include!("generated/cos_lut.rs");
    include!("generated/tan_lut.rs");
    include!("generated/sin_cos_lut.rs");
    include!("generated/asin_lut.rs");
    include!("generated/acos_lut.rs");
}

pub use generated::{ACOS_LUT, ASIN_LUT, COS_LUT, SIN_COS_LUT, SIN_LUT, TAN_LUT};

/// Layout of a lookup table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// `samples` values over `[0, 2*PI)` plus the first value repeated.
    Periodic,
    /// `samples` `(sin, cos)` pairs over `[0, 2*PI)` plus the first pair repeated.
    Interleaved,
    /// `samples` values over `[-1, 1]` plus the last value repeated twice.
    Inverse,
}

impl TableKind {
    /// Number of sentinel entries appended after the samples.
    pub const fn sentinel_count(self) -> usize {
        match self {
            TableKind::Periodic => 1,
            TableKind::Interleaved => 2,
            TableKind::Inverse => 2,
        }
    }

    /// Total number of entries for a table with `samples` samples.
    pub const fn table_len(self, samples: usize) -> usize {
        match self {
            TableKind::Interleaved => samples * 2 + 2,
            _ => samples + self.sentinel_count(),
        }
    }
}

/// A read-only, pre-quantized sample table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrigTable<'a> {
    kind: TableKind,
    entries: &'a [i32],
}

impl<'a> TrigTable<'a> {
    /// Wrap `entries` laid out as `kind`.
    ///
    /// # Panics
    /// Panics when the length cannot hold at least one sample plus the
    /// sentinels of `kind`. In a `static` this is a compile error.
    pub const fn new(kind: TableKind, entries: &'a [i32]) -> Self {
        let len = entries.len();
        match kind {
            TableKind::Periodic => assert!(len >= 2, "periodic table needs a sample and a sentinel"),
            TableKind::Interleaved => assert!(
                len >= 4 && len % 2 == 0,
                "interleaved table needs whole sin/cos pairs"
            ),
            TableKind::Inverse => assert!(len >= 3, "inverse table needs a sample and two sentinels"),
        }
        Self { kind, entries }
    }

    pub const fn kind(&self) -> TableKind {
        self.kind
    }

    pub const fn entries(&self) -> &'a [i32] {
        self.entries
    }

    /// Number of real samples, excluding sentinels.
    pub const fn samples(&self) -> usize {
        match self.kind {
            TableKind::Interleaved => (self.entries.len() - 2) / 2,
            _ => self.entries.len() - self.kind.sentinel_count(),
        }
    }

    /// Interpolated value of a periodic table at `fraction` of a turn.
    ///
    /// `fraction` is a raw value in `[0, ONE)`.
    #[inline]
    pub fn sample_periodic(&self, fraction: i64) -> i64 {
        debug_assert_eq!(self.kind, TableKind::Periodic);
        let (index, weight) = split_position(fraction * self.samples() as i64);
        interpolate(self.entries[index], self.entries[index + 1], weight)
    }

    /// Interpolated `(first, second)` pair of an interleaved table.
    #[inline]
    pub fn sample_pair(&self, fraction: i64) -> (i64, i64) {
        debug_assert_eq!(self.kind, TableKind::Interleaved);
        let (index, weight) = split_position(fraction * self.samples() as i64);
        let base = index * 2;
        (
            interpolate(self.entries[base], self.entries[base + 2], weight),
            interpolate(self.entries[base + 1], self.entries[base + 3], weight),
        )
    }

    /// Interpolated value of an inverse table at raw `value` in `[-ONE, ONE]`.
    ///
    /// # Panics
    /// Panics when `value` is outside `[-ONE, ONE]`.
    #[inline]
    pub fn sample_inverse(&self, value: i64) -> i64 {
        debug_assert_eq!(self.kind, TableKind::Inverse);
        let (index, weight) = split_position((value + ONE_RAW) * self.samples() as i64 / 2);
        interpolate(self.entries[index], self.entries[index + 1], weight)
    }
}

/// Split a Q16 table position into an index and a 16-bit weight.
#[inline]
fn split_position(position: i64) -> (usize, i64) {
    ((position >> FRACTIONAL_BITS) as usize, position & FRACTION_MASK)
}

/// `a + (b - a) * weight`, with the same truncating shift as fixed-point `*`.
#[inline]
fn interpolate(a: i32, b: i32, weight: i64) -> i64 {
    let a = i64::from(a);
    let b = i64::from(b);
    a + (((b - a) * weight) >> FRACTIONAL_BITS)
}

/// The full set of runtime tables.
#[derive(Clone, Copy, Debug)]
pub struct TrigTables {
    pub sin: TrigTable<'static>,
    pub cos: TrigTable<'static>,
    pub tan: TrigTable<'static>,
    pub sin_cos: TrigTable<'static>,
    pub asin: TrigTable<'static>,
    pub acos: TrigTable<'static>,
}

/// Process-wide tables backed by the committed generated arrays.
pub static TRIG_TABLES: TrigTables = TrigTables {
    sin: TrigTable::new(TableKind::Periodic, &SIN_LUT),
    cos: TrigTable::new(TableKind::Periodic, &COS_LUT),
    tan: TrigTable::new(TableKind::Periodic, &TAN_LUT),
    sin_cos: TrigTable::new(TableKind::Interleaved, &SIN_COS_LUT),
    asin: TrigTable::new(TableKind::Inverse, &ASIN_LUT),
    acos: TrigTable::new(TableKind::Inverse, &ACOS_LUT),
};

/// Shared reference to the process-wide tables.
#[inline]
pub fn tables() -> &'static TrigTables {
    &TRIG_TABLES
}

/// Raw sine at `fraction` of a full turn.
#[inline]
pub fn sin(fraction: i64) -> i64 {
    TRIG_TABLES.sin.sample_periodic(fraction)
}

/// Raw cosine at `fraction` of a full turn.
#[inline]
pub fn cos(fraction: i64) -> i64 {
    TRIG_TABLES.cos.sample_periodic(fraction)
}

/// Raw tangent at `fraction` of a full turn.
#[inline]
pub fn tan(fraction: i64) -> i64 {
    TRIG_TABLES.tan.sample_periodic(fraction)
}

/// Raw `(sin, cos)` at `fraction` of a full turn.
#[inline]
pub fn sin_cos(fraction: i64) -> (i64, i64) {
    TRIG_TABLES.sin_cos.sample_pair(fraction)
}

/// Raw arcsine of a raw value in `[-ONE, ONE]`.
#[inline]
pub fn asin(value: i64) -> i64 {
    TRIG_TABLES.asin.sample_inverse(value)
}

/// Raw arccosine of a raw value in `[-ONE, ONE]`.
#[inline]
pub fn acos(value: i64) -> i64 {
    TRIG_TABLES.acos.sample_inverse(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUARTER_TURN: i64 = ONE_RAW / 4;

    #[test]
    fn test_table_lengths_match_layout() {
        let tables = tables();
        assert_eq!(tables.sin.entries().len(), TableKind::Periodic.table_len(tables.sin.samples()));
        assert_eq!(tables.sin.samples(), 512);
        assert_eq!(tables.cos.samples(), 512);
        assert_eq!(tables.tan.samples(), 512);
        assert_eq!(SIN_COS_LUT.len(), 512 * 2 + 2);
        assert_eq!(tables.sin_cos.samples(), 512);
        assert_eq!(ASIN_LUT.len(), 512 + 2);
        assert_eq!(tables.asin.samples(), 512);
        assert_eq!(tables.acos.samples(), 512);
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(SIN_LUT[512], SIN_LUT[0]);
        assert_eq!(COS_LUT[512], COS_LUT[0]);
        assert_eq!(TAN_LUT[512], TAN_LUT[0]);
        assert_eq!(SIN_COS_LUT[1024], SIN_COS_LUT[0]);
        assert_eq!(SIN_COS_LUT[1025], SIN_COS_LUT[1]);
        assert_eq!(ASIN_LUT[512], ASIN_LUT[511]);
        assert_eq!(ASIN_LUT[513], ASIN_LUT[511]);
        assert_eq!(ACOS_LUT[512], ACOS_LUT[511]);
        assert_eq!(ACOS_LUT[513], ACOS_LUT[511]);
    }

    #[test]
    fn test_sample_points_are_exact() {
        // Every 128 raw steps of the turn land exactly on a 512-sample entry.
        for i in 0..512 {
            let fraction = (i as i64) << 7;
            assert_eq!(sin(fraction), i64::from(SIN_LUT[i]));
            assert_eq!(cos(fraction), i64::from(COS_LUT[i]));
            let (s, c) = sin_cos(fraction);
            assert_eq!(s, i64::from(SIN_LUT[i]));
            assert_eq!(c, i64::from(COS_LUT[i]));
        }
    }

    #[test]
    fn test_quarter_turns() {
        assert_eq!(sin(0), 0);
        assert_eq!(sin(QUARTER_TURN), ONE_RAW);
        assert_eq!(cos(0), ONE_RAW);
        assert_eq!(cos(QUARTER_TURN * 2), -ONE_RAW);
        assert_eq!(sin(QUARTER_TURN * 3), -ONE_RAW);
    }

    #[test]
    fn test_interpolates_between_neighbours() {
        // Halfway between entries 0 and 1.
        let halfway = 64;
        let expected = i64::from(SIN_LUT[0]) + (i64::from(SIN_LUT[1] - SIN_LUT[0]) >> 1);
        assert_eq!(sin(halfway), expected);
    }

    #[test]
    fn test_last_fraction_reads_sentinel() {
        let last = ONE_RAW - 1;
        let value = sin(last);
        assert!(value <= 0 && value > i64::from(SIN_LUT[511]));
    }

    #[test]
    fn test_inverse_endpoints_are_exact() {
        assert_eq!(asin(ONE_RAW), i64::from(ASIN_LUT[511]));
        assert_eq!(asin(-ONE_RAW), i64::from(ASIN_LUT[0]));
        assert_eq!(acos(ONE_RAW), 0);
        assert_eq!(acos(-ONE_RAW), i64::from(ACOS_LUT[0]));
        assert_eq!(asin(0), 0);
    }

    #[test]
    fn test_custom_table_uses_its_own_sample_count() {
        // Four samples of a sawtooth 0, 1, 2, 3 with the wrap sentinel.
        let entries = [0, ONE_RAW as i32, 2 * ONE_RAW as i32, 3 * ONE_RAW as i32, 0];
        let table = TrigTable::new(TableKind::Periodic, &entries);
        assert_eq!(table.samples(), 4);
        assert_eq!(table.sample_periodic(ONE_RAW / 8), ONE_RAW / 2);
        assert_eq!(table.sample_periodic(ONE_RAW / 2), 2 * ONE_RAW);
    }

    #[test]
    #[should_panic]
    fn test_rejects_short_table() {
        let _ = TrigTable::new(TableKind::Inverse, &[0, 0]);
    }
}
