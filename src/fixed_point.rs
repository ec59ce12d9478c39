// ============================================================================
// FixedPoint Value Type
// An integer coefficient paired with a power-of-radix scale
// ============================================================================

use crate::errors::{FixedPointError, FixedPointResult};
use crate::overflow::{
    addition_overflow, division_overflow, multiplication_overflow, subtraction_overflow,
};
use crate::rep::FixedPointRep;
use crate::scale::{Radix, Scale};
use crate::scaling::powers::{ipow, Power10};
use crate::scaling::shift::shift;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// ScaledInteger
// ============================================================================

/// A coefficient that is already shifted, paired with its scale.
///
/// This is the raw in-memory form of a [`FixedPoint`] and the only way to
/// construct one without performing a shift:
///
/// ```rust
/// use fixed_point::prelude::*;
///
/// let n = Decimal32::from_scaled(ScaledInteger::new(1001, Scale(-3))); // 1.001
/// assert_eq!(n.to_string(), "1.001");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScaledInteger<Rep> {
    /// The shifted coefficient
    pub value: Rep,
    /// The scale of the value
    pub scale: Scale,
}

impl<Rep> ScaledInteger<Rep> {
    #[inline]
    pub const fn new(value: Rep, scale: Scale) -> Self {
        Self { value, scale }
    }
}

// ============================================================================
// FixedPoint
// ============================================================================

/// A number with a fixed amount of precision, representing
/// `coefficient * RADIX^scale`.
///
/// The representation width (`i32`, `i64` or `i128`) and the radix (2 or 10,
/// passed as the [`Radix`] discriminant) are part of the type; binary
/// operations are only defined between values of the same type. Values are
/// immutable: every operation produces a new value, and no operation
/// allocates except formatting.
///
/// Two values with different scales may denote the same number; comparisons
/// and the scale-reconciling operators rescale the coarser operand down to
/// the finer scale before touching coefficients. Multiplication adds scales
/// and division subtracts them, with no renormalization.
///
/// Overflow checking is debug-only: the operators assert the
/// [overflow predicates](crate::overflow) under `debug_assertions` and wrap
/// in release builds. Division truncates toward zero; there is no other
/// rounding policy.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedPoint<Rep, const RADIX: u32> {
    value: Rep,
    scale: Scale,
}

impl<Rep: FixedPointRep, const RADIX: u32> FixedPoint<Rep, RADIX> {
    // Referenced from every construction path so an unsupported radix fails
    // to compile.
    const SUPPORTED_RADIX: () = assert!(
        RADIX == Radix::Base2 as u32 || RADIX == Radix::Base10 as u32,
        "FixedPoint radix must be 2 or 10"
    );

    /// Shifting constructor: stores `value` scaled by `RADIX^(-scale)` so
    /// that the result still represents `value`.
    ///
    /// A positive scale truncates coarse digits (`new(150, Scale(2))` stores
    /// coefficient 1 and represents 100); a negative scale grows the
    /// coefficient (`new(150, Scale(-2))` stores 15000 and represents
    /// 150.00). The cast to `Rep` happens before the shift so a wide
    /// representation has room for a narrow source.
    #[inline]
    pub fn new<T: Into<i128>>(value: T, scale: Scale) -> Self {
        let () = Self::SUPPORTED_RADIX;
        let coefficient = Rep::from_i128(value.into());
        Self {
            value: shift::<Rep, RADIX, Rep>(coefficient, scale),
            scale,
        }
    }

    /// Raw constructor: takes the coefficient verbatim, no shifting.
    #[inline]
    pub fn from_scaled(scaled: ScaledInteger<Rep>) -> Self {
        let () = Self::SUPPORTED_RADIX;
        Self {
            value: scaled.value,
            scale: scaled.scale,
        }
    }

    /// Scale-less constructor, equivalent to [`FixedPoint::new`] with scale
    /// zero.
    #[inline]
    pub fn from_integer<T: Into<i128>>(value: T) -> Self {
        let () = Self::SUPPORTED_RADIX;
        Self {
            value: Rep::from_i128(value.into()),
            scale: Scale(0),
        }
    }

    /// The raw coefficient.
    #[inline]
    pub fn value(self) -> Rep {
        self.value
    }

    /// The raw scale.
    #[inline]
    pub fn scale(self) -> Scale {
        self.scale
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.value == Rep::ZERO
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.value > Rep::ZERO
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.value < Rep::ZERO
    }

    /// The same number at a different scale.
    ///
    /// Rescaling to a coarser (larger) scale truncates toward zero;
    /// rescaling to a finer (smaller) scale multiplies the coefficient,
    /// which may overflow. That headroom is the caller's responsibility.
    #[inline]
    pub fn rescaled(self, scale: Scale) -> Self {
        if scale == self.scale {
            return self;
        }
        let value = shift::<Rep, RADIX, Rep>(self.value, Scale(scale.0 - self.scale.0));
        Self { value, scale }
    }

    /// Adds one whole unit at the current scale; the `++` of a C-family
    /// interface. At a positive scale one unit is below the grid and the
    /// value is unchanged.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        *self = *self + Self::new(1, self.scale);
        self
    }
}

impl<Rep: FixedPointRep, const RADIX: u32> Default for FixedPoint<Rep, RADIX> {
    #[inline]
    fn default() -> Self {
        let () = Self::SUPPORTED_RADIX;
        Self {
            value: Rep::ZERO,
            scale: Scale(0),
        }
    }
}

impl<Rep: FixedPointRep, const RADIX: u32> From<ScaledInteger<Rep>> for FixedPoint<Rep, RADIX> {
    #[inline]
    fn from(scaled: ScaledInteger<Rep>) -> Self {
        Self::from_scaled(scaled)
    }
}

impl<Rep: FixedPointRep, const RADIX: u32> From<FixedPoint<Rep, RADIX>> for ScaledInteger<Rep> {
    #[inline]
    fn from(fp: FixedPoint<Rep, RADIX>) -> Self {
        ScaledInteger::new(fp.value, fp.scale)
    }
}

// ============================================================================
// Arithmetic Operators
// ============================================================================

impl<Rep: FixedPointRep, const RADIX: u32> Add for FixedPoint<Rep, RADIX> {
    type Output = Self;

    /// Rescales the coarser operand to the finer scale, then adds
    /// coefficients. The result carries the finer scale.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let scale = self.scale.min(rhs.scale);
        let lhs = self.rescaled(scale).value;
        let rhs = rhs.rescaled(scale).value;
        debug_assert!(!addition_overflow::<Rep>(lhs, rhs), "fixed-point overflow");
        Self::from_scaled(ScaledInteger::new(lhs.wrapping_add(rhs), scale))
    }
}

impl<Rep: FixedPointRep, const RADIX: u32> Sub for FixedPoint<Rep, RADIX> {
    type Output = Self;

    /// Rescales the coarser operand to the finer scale, then subtracts
    /// coefficients. The result carries the finer scale.
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let scale = self.scale.min(rhs.scale);
        let lhs = self.rescaled(scale).value;
        let rhs = rhs.rescaled(scale).value;
        debug_assert!(
            !subtraction_overflow::<Rep>(lhs, rhs),
            "fixed-point overflow"
        );
        Self::from_scaled(ScaledInteger::new(lhs.wrapping_sub(rhs), scale))
    }
}

impl<Rep: FixedPointRep, const RADIX: u32> Mul for FixedPoint<Rep, RADIX> {
    type Output = Self;

    /// Multiplies coefficients and adds scales.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        debug_assert!(
            !multiplication_overflow::<Rep>(self.value, rhs.value),
            "fixed-point overflow"
        );
        Self::from_scaled(ScaledInteger::new(
            self.value.wrapping_mul(rhs.value),
            Scale(self.scale.0 + rhs.scale.0),
        ))
    }
}

impl<Rep: FixedPointRep, const RADIX: u32> Div for FixedPoint<Rep, RADIX> {
    type Output = Self;

    /// Divides coefficients (truncation toward zero) and subtracts scales.
    /// Division by zero follows the platform: it panics on the CPU.
    #[inline]
    fn div(self, rhs: Self) -> Self {
        debug_assert!(
            !division_overflow::<Rep>(self.value, rhs.value),
            "fixed-point overflow"
        );
        Self::from_scaled(ScaledInteger::new(
            self.value.wrapping_div(rhs.value),
            Scale(self.scale.0 - rhs.scale.0),
        ))
    }
}

impl<Rep: FixedPointRep, const RADIX: u32> Rem for FixedPoint<Rep, RADIX> {
    type Output = Self;

    /// Rescales the coarser operand to the finer scale, then takes the
    /// coefficient remainder. The result carries the finer scale.
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        let scale = self.scale.min(rhs.scale);
        let lhs = self.rescaled(scale).value;
        let rhs = rhs.rescaled(scale).value;
        Self::from_scaled(ScaledInteger::new(lhs.wrapping_rem(rhs), scale))
    }
}

impl<Rep: FixedPointRep, const RADIX: u32> AddAssign for FixedPoint<Rep, RADIX> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<Rep: FixedPointRep, const RADIX: u32> SubAssign for FixedPoint<Rep, RADIX> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<Rep: FixedPointRep, const RADIX: u32> MulAssign for FixedPoint<Rep, RADIX> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<Rep: FixedPointRep, const RADIX: u32> DivAssign for FixedPoint<Rep, RADIX> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<Rep: FixedPointRep, const RADIX: u32> RemAssign for FixedPoint<Rep, RADIX> {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

// ============================================================================
// Comparisons
// ============================================================================
//
// Equality is value equality: both sides are rescaled to the finer of the
// two scales before their coefficients are compared. Rescaling toward the
// finer scale is lossless (the coarser coefficient is multiplied), so the
// relation is a genuine total order as long as that multiply has headroom.

impl<Rep: FixedPointRep, const RADIX: u32> PartialEq for FixedPoint<Rep, RADIX> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        let scale = self.scale.min(other.scale);
        self.rescaled(scale).value == other.rescaled(scale).value
    }
}

impl<Rep: FixedPointRep, const RADIX: u32> Eq for FixedPoint<Rep, RADIX> {}

impl<Rep: FixedPointRep, const RADIX: u32> PartialOrd for FixedPoint<Rep, RADIX> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Rep: FixedPointRep, const RADIX: u32> Ord for FixedPoint<Rep, RADIX> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.min(other.scale);
        self.rescaled(scale).value.cmp(&other.rescaled(scale).value)
    }
}

// ============================================================================
// Integer and Boolean Conversions
// ============================================================================

impl<Rep, const RADIX: u32> FixedPoint<Rep, RADIX>
where
    Rep: FixedPointRep,
    i128: Power10<Rep>,
{
    /// The coefficient unscaled back to a plain integer, truncating any
    /// fractional digits toward zero.
    ///
    /// The computation widens to `i128` before shifting (value-preserving,
    /// so narrowing the result afterwards matches computing in the common
    /// width of the representation and the target) while the kernel range
    /// stays that of `Rep`.
    #[inline]
    fn to_unscaled_i128(self) -> i128 {
        shift::<Rep, RADIX, i128>(self.value.to_i128(), Scale(-self.scale.0))
    }
}

macro_rules! impl_int_from_fixed_point {
    ($($t:ty),*) => {$(
        impl<Rep, const RADIX: u32> From<FixedPoint<Rep, RADIX>> for $t
        where
            Rep: FixedPointRep,
            i128: Power10<Rep>,
        {
            #[inline]
            fn from(fp: FixedPoint<Rep, RADIX>) -> $t {
                fp.to_unscaled_i128() as $t
            }
        }
    )*};
}

impl_int_from_fixed_point!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl<Rep: FixedPointRep, const RADIX: u32> From<FixedPoint<Rep, RADIX>> for bool {
    /// Zero coefficient is `false`, anything else is `true`.
    #[inline]
    fn from(fp: FixedPoint<Rep, RADIX>) -> bool {
        !fp.is_zero()
    }
}

// ============================================================================
// Decimal Formatting (base 10 only)
// ============================================================================

impl<Rep: FixedPointRep> fmt::Display for FixedPoint<Rep, { Radix::Base10 as u32 }> {
    /// Bit-exact decimal rendering of the stored value.
    ///
    /// A negative scale prints `scale` fractional digits, left-padded with
    /// zeros; a non-negative scale prints the coefficient followed by
    /// `scale` zeros.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale.0 < 0 {
            // the widest representation covers MIN coefficients of every width
            let av = self.value.to_i128().unsigned_abs();
            let n = ipow::<i128, { Radix::Base10 as u32 }>(-self.scale.0).unsigned_abs();
            let sign = if self.value < Rep::ZERO { "-" } else { "" };
            write!(
                f,
                "{}{}.{:0>width$}",
                sign,
                av / n,
                av % n,
                width = (-self.scale.0) as usize
            )
        } else {
            write!(f, "{}{}", self.value, "0".repeat(self.scale.0 as usize))
        }
    }
}

// ============================================================================
// String Parsing (base 10 only)
// ============================================================================

impl<Rep: FixedPointRep> FromStr for FixedPoint<Rep, { Radix::Base10 as u32 }> {
    type Err = FixedPointError;

    /// Parses a plain decimal string; the scale is the negated count of
    /// fractional digits, so parsing round-trips with `Display`.
    ///
    /// - `"123"` -> coefficient 123, scale 0
    /// - `"123.45"` -> coefficient 12345, scale -2
    /// - `"-0.05"` -> coefficient -5, scale -2
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (int_str, frac_str) = match digits.split_once('.') {
            Some((int_str, frac_str)) => (int_str, frac_str),
            None => (digits, ""),
        };
        if int_str.is_empty() && frac_str.is_empty() {
            return Err(FixedPointError::InvalidInput);
        }

        let mut coefficient: i128 = 0;
        for byte in int_str.bytes().chain(frac_str.bytes()) {
            if !byte.is_ascii_digit() {
                return Err(FixedPointError::InvalidInput);
            }
            coefficient = coefficient
                .checked_mul(10)
                .and_then(|c| c.checked_add(i128::from(byte - b'0')))
                .ok_or(FixedPointError::Overflow)?;
        }
        if negative {
            coefficient = -coefficient;
        }

        if coefficient > Rep::MAX.to_i128() || coefficient < Rep::MIN.to_i128() {
            return Err(FixedPointError::Overflow);
        }

        Ok(Self::from_scaled(ScaledInteger::new(
            Rep::from_i128(coefficient),
            Scale(-(frac_str.len() as i32)),
        )))
    }
}

// ============================================================================
// rust_decimal Interop (base 10 only)
// ============================================================================

impl<Rep: FixedPointRep> FixedPoint<Rep, { Radix::Base10 as u32 }> {
    /// Converts from [`rust_decimal::Decimal`], intended for API boundaries
    /// (parsing user input, wire formats).
    ///
    /// The mantissa is taken verbatim as the coefficient and the decimal's
    /// fractional-digit count becomes the (negative) scale.
    ///
    /// # Errors
    /// [`FixedPointError::Overflow`] if the mantissa does not fit `Rep`.
    pub fn from_decimal(decimal: Decimal) -> FixedPointResult<Self> {
        let mantissa = decimal.mantissa();
        if mantissa > Rep::MAX.to_i128() || mantissa < Rep::MIN.to_i128() {
            return Err(FixedPointError::Overflow);
        }
        Ok(Self::from_scaled(ScaledInteger::new(
            Rep::from_i128(mantissa),
            Scale(-(decimal.scale() as i32)),
        )))
    }

    /// Converts to [`rust_decimal::Decimal`], intended for display and
    /// interop only.
    ///
    /// # Errors
    /// [`FixedPointError::UnrepresentableScale`] for more than 28 fractional
    /// digits; [`FixedPointError::Overflow`] if the mantissa does not fit
    /// `Decimal`'s 96 bits.
    pub fn to_decimal(self) -> FixedPointResult<Decimal> {
        let mut mantissa = self.value.to_i128();
        if self.scale.0 <= 0 {
            let fractional_digits = -self.scale.0;
            if fractional_digits > 28 {
                return Err(FixedPointError::UnrepresentableScale);
            }
            return Decimal::try_from_i128_with_scale(mantissa, fractional_digits as u32)
                .map_err(|_| FixedPointError::Overflow);
        }

        // a positive scale folds its trailing zeros into the mantissa
        if mantissa == 0 {
            return Ok(Decimal::ZERO);
        }
        for _ in 0..self.scale.0 {
            mantissa = mantissa.checked_mul(10).ok_or(FixedPointError::Overflow)?;
        }
        Decimal::try_from_i128_with_scale(mantissa, 0).map_err(|_| FixedPointError::Overflow)
    }
}

// ============================================================================
// Type Aliases
// ============================================================================

/// 32-bit decimal fixed point (up to 9 significant digits)
pub type Decimal32 = FixedPoint<i32, { Radix::Base10 as u32 }>;

/// 64-bit decimal fixed point (up to 19 significant digits)
pub type Decimal64 = FixedPoint<i64, { Radix::Base10 as u32 }>;

/// 128-bit decimal fixed point (up to 38 significant digits)
pub type Decimal128 = FixedPoint<i128, { Radix::Base10 as u32 }>;

// ============================================================================
// Tests
// ============================================================================
