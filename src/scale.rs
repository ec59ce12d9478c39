// ============================================================================
// Scale and Radix
// The exponent and base halves of the `coefficient * radix^scale` model
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Signed power-of-radix exponent attached to a coefficient.
///
/// Positive scale means the coefficient counts multiples of `radix^scale`
/// (coarse magnitude, trailing zeros); negative scale means fractional
/// digits (`Scale(-3)` is three digits right of the point in base 10).
///
/// A scale is never normalized implicitly: a value constructed with scale
/// `s` keeps scale `s` until explicitly rescaled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Scale(pub i32);

impl From<i32> for Scale {
    #[inline]
    fn from(exponent: i32) -> Self {
        Scale(exponent)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The base of a fixed-point number, fixed at the type level.
///
/// Used as a const-generic argument through its discriminant, since stable
/// Rust cannot take an enum as a const parameter directly:
///
/// ```rust
/// use fixed_point::prelude::*;
///
/// type Decimal = FixedPoint<i64, { Radix::Base10 as u32 }>; // same as Decimal64
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum Radix {
    Base2 = 2,
    Base10 = 10,
}
