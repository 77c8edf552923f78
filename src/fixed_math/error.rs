use thiserror::Error;

/// Failures reported by the checked entry points of the fixed-point layer.
///
/// The arithmetic operators never return this: overflow wraps and division by
/// the zero representation panics, exactly like native integer division.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixedError {
    #[error("attempt to divide by zero")]
    DivideByZero,
    #[error("invalid decimal literal `{input}`")]
    InvalidDecimal { input: String },
    #[error("decimal literal `{input}` is outside the representable range")]
    DecimalOutOfRange { input: String },
}
