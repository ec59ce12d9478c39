// ============================================================================
// Fixed-Point Arithmetic Library
// Exact-precision decimal and binary fixed-point numbers
// ============================================================================

//! # Fixed Point
//!
//! Exact-precision fixed-point arithmetic for financial, analytical and
//! data-processing workloads where floating-point rounding is unacceptable.
//!
//! Every value is an integer coefficient paired with an integer scale; the
//! represented quantity is `coefficient * radix^scale` with the radix (2 or
//! 10) and the representation width (`i32`, `i64` or `i128`) fixed at the
//! type level.
//!
//! ## Features
//!
//! - **Exact scaling** through width-specialized power-of-10 kernels, up to
//!   38 decimal digits with a 128-bit coefficient
//! - **Scale-reconciling operators**: addition, subtraction, modulo and all
//!   comparisons rescale the coarser operand to the finer scale;
//!   multiplication adds scales, division subtracts them
//! - **Truncation toward zero** as the only rounding policy
//! - **Debug-only overflow trapping**: the public overflow predicates back
//!   `debug_assert!`s in the operators; release builds wrap
//! - **Bit-exact decimal formatting** against the stored value
//!
//! ## Example
//!
//! ```rust
//! use fixed_point::prelude::*;
//!
//! // 1.50 and 0.25, stored exactly
//! let price = Decimal32::from_scaled(ScaledInteger::new(150, Scale(-2)));
//! let tick = Decimal32::from_scaled(ScaledInteger::new(25, Scale(-2)));
//!
//! let total = price + tick;
//! assert_eq!(total.to_string(), "1.75");
//!
//! // mismatched scales reconcile to the finer one
//! let coarse = Decimal32::from_scaled(ScaledInteger::new(15, Scale(-1)));
//! assert_eq!(price, coarse);
//!
//! // conversions truncate toward zero
//! assert_eq!(i32::from(total), 1);
//! ```
//!
//! Values are immutable and the operators are pure leaf computations: no
//! allocation (formatting aside), no locks, no global state, so any number
//! of threads may share and compute on values freely.

pub mod errors;
pub mod fixed_point;
pub mod overflow;
pub mod rep;
pub mod scale;
pub mod scaling;

// Re-exports for convenience
pub mod prelude {
    pub use crate::errors::{FixedPointError, FixedPointResult};
    pub use crate::fixed_point::{Decimal128, Decimal32, Decimal64, FixedPoint, ScaledInteger};
    pub use crate::overflow::{
        addition_overflow, division_overflow, multiplication_overflow, subtraction_overflow,
    };
    pub use crate::rep::FixedPointRep;
    pub use crate::scale::{Radix, Scale};
    pub use crate::scaling::ipow;
}
