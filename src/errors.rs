// ============================================================================
// Numeric Errors
// Error types for the fallible boundary operations
// ============================================================================

use std::fmt;

/// Errors that can occur when crossing the API boundary of the crate.
///
/// Arithmetic operators never return errors: debug builds trap on overflow
/// and release builds wrap. This type covers the fallible conversions only
/// (string parsing and `rust_decimal` interop).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedPointError {
    /// Coefficient does not fit the representation width
    Overflow,
    /// Input string or value is invalid
    InvalidInput,
    /// Scale cannot be expressed by the target type
    UnrepresentableScale,
}

impl fmt::Display for FixedPointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixedPointError::Overflow => {
                write!(f, "overflow: coefficient does not fit the representation width")
            },
            FixedPointError::InvalidInput => write!(f, "invalid input: could not parse value"),
            FixedPointError::UnrepresentableScale => {
                write!(f, "scale cannot be expressed by the target type")
            },
        }
    }
}

impl std::error::Error for FixedPointError {}

/// Result type alias for fallible fixed-point operations
pub type FixedPointResult<T> = Result<T, FixedPointError>;
