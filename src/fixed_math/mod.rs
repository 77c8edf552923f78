//! Deterministic fixed-point mathematics library.
//!
//! This module provides deterministic math types and operations using fixed-point
//! arithmetic to ensure identical behavior across different platforms and architectures.
//! All peers of a lockstep simulation must compute bit-identical results, so nothing
//! on the simulation path touches floating point: transcendental functions read the
//! precomputed tables in [`crate::lut`] and everything else is integer arithmetic
//! on the raw Q48.16 value.
//!
//! Floats only appear at the boundary, in constructors and accessors whose names end
//! in `_unsafe` or that return `f32`/`f64`.

pub use error::FixedError;
pub use mat2::FixedMat2;
pub use scalar::FixedScalar;
pub use vec2::FixedVec2;
pub use vec3::FixedVec3;

pub mod scalar;

mod decimal;
mod error;
mod functions;
mod mat2;
mod trig;
mod vec2;
mod vec3;
