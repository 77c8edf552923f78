//! Deterministic Q48.16 fixed-point math for lockstep simulation.
//!
//! - [`fixed_math`]: the [`FixedScalar`] number type, its exact decimal
//!   codec, the scalar math library, trigonometry and small vector/matrix
//!   types.
//! - [`lut`]: the committed lookup tables the trigonometry reads.
//! - [`lut_gen`] and [`config`]: the offline generator that produces those
//!   tables (run it with `cargo run --bin lut_gen`).
//!
//! Every operation on the simulation path is integer-only, so the same
//! inputs give bit-identical results on every platform.

pub mod config;
pub mod fixed_math;
pub mod lut;
pub mod lut_gen;

pub use fixed_math::{FixedError, FixedMat2, FixedScalar, FixedVec2, FixedVec3};
