// ============================================================================
// Representation Widths
// Sealed trait over the supported coefficient types
// ============================================================================

use crate::scaling::powers::Power10;
use std::fmt;
use std::ops::{Add, Div, Neg, Shl, Shr, Sub};

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for i128 {}
}

/// Backing storage for a fixed-point coefficient.
///
/// Implemented for exactly `i32`, `i64` and `i128`; the trait is sealed so
/// no other width can be supplied. The coefficient is always a plain
/// two's-complement signed integer: no NaN, no infinity, no denormals.
///
/// The `Power10<Self>` supertrait ties each representation to the
/// power-of-10 kernel of its own width.
pub trait FixedPointRep:
    sealed::Sealed
    + Copy
    + Eq
    + Ord
    + Default
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + Power10<Self>
{
    const ZERO: Self;
    const ONE: Self;
    const MIN: Self;
    const MAX: Self;

    /// Truncating cast from the widest supported representation.
    fn from_i128(value: i128) -> Self;

    /// Widening cast to the widest supported representation.
    fn to_i128(self) -> i128;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
    fn wrapping_div(self, rhs: Self) -> Self;
    fn wrapping_rem(self, rhs: Self) -> Self;
}

macro_rules! impl_fixed_point_rep {
    ($($t:ty),*) => {$(
        impl FixedPointRep for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn from_i128(value: i128) -> Self {
                value as $t
            }

            #[inline]
            fn to_i128(self) -> i128 {
                self as i128
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }

            #[inline]
            fn wrapping_div(self, rhs: Self) -> Self {
                <$t>::wrapping_div(self, rhs)
            }

            #[inline]
            fn wrapping_rem(self, rhs: Self) -> Self {
                <$t>::wrapping_rem(self, rhs)
            }
        }
    )*};
}

impl_fixed_point_rep!(i32, i64, i128);
