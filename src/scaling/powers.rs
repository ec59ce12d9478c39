// ============================================================================
// Power-of-10 Scaling Kernels
// Width-specialized exact multiplication and division by 10^k
// ============================================================================
//
// Each kernel is a dense match with the literal divisor or multiplier in
// every arm. The literal is what lets the compiler specialize the division
// into shifts and multiplies by a constant; an array lookup or a runtime
// pow loop loses that. The three widths stay separate functions for the
// same reason: a merged switch raises register pressure in every caller.
// The 128-bit bodies are too large to inline profitably and carry
// `#[inline(never)]`.

use crate::rep::FixedPointRep;
use crate::scale::Radix;

/// 10^exp10 for exp10 in [18, 38], as a 128-bit integer.
///
/// Powers above 10^18 have no integer literal narrower than 128 bits; they
/// are built by recursive multiplication from the 10^18 literal, evaluated
/// at compile time through the inline-const arms below.
const fn large_power_of_10(exp10: u32) -> i128 {
    assert!(exp10 >= 18);
    if exp10 == 18 {
        1_000_000_000_000_000_000
    } else {
        large_power_of_10(exp10 - 1) * 10
    }
}

// ============================================================================
// Per-width kernel traits
// ============================================================================

/// Scaling by a power of 10 that fits a 32-bit integer (`exp10` in `[0, 9]`).
///
/// Out-of-range exponents return zero; the caller must stay in range.
/// Multiplication wraps in the operand type.
pub trait Power10Width32: Sized {
    fn divide_power10_32bit(self, exp10: i32) -> Self;
    fn multiply_power10_32bit(self, exp10: i32) -> Self;
}

/// Scaling by a power of 10 that fits a 64-bit integer (`exp10` in `[0, 19]`).
///
/// Out-of-range exponents return zero; the caller must stay in range.
/// Multiplication wraps in the operand type.
pub trait Power10Width64: Sized {
    fn divide_power10_64bit(self, exp10: i32) -> Self;
    fn multiply_power10_64bit(self, exp10: i32) -> Self;
}

/// Scaling by a power of 10 that fits a 128-bit integer (`exp10` in `[0, 38]`).
///
/// Out-of-range exponents return zero; the caller must stay in range.
/// Multiplication wraps in the operand type.
pub trait Power10Width128: Sized {
    fn divide_power10_128bit(self, exp10: i32) -> Self;
    fn multiply_power10_128bit(self, exp10: i32) -> Self;
}

macro_rules! impl_power10_width32 {
    ($($t:ty),*) => {$(
        impl Power10Width32 for $t {
            #[inline]
            fn divide_power10_32bit(self, exp10: i32) -> $t {
                match exp10 {
                    0 => self,
                    1 => self / 10,
                    2 => self / 100,
                    3 => self / 1_000,
                    4 => self / 10_000,
                    5 => self / 100_000,
                    6 => self / 1_000_000,
                    7 => self / 10_000_000,
                    8 => self / 100_000_000,
                    9 => self / 1_000_000_000,
                    _ => 0,
                }
            }

            #[inline]
            fn multiply_power10_32bit(self, exp10: i32) -> $t {
                match exp10 {
                    0 => self,
                    1 => self.wrapping_mul(10),
                    2 => self.wrapping_mul(100),
                    3 => self.wrapping_mul(1_000),
                    4 => self.wrapping_mul(10_000),
                    5 => self.wrapping_mul(100_000),
                    6 => self.wrapping_mul(1_000_000),
                    7 => self.wrapping_mul(10_000_000),
                    8 => self.wrapping_mul(100_000_000),
                    9 => self.wrapping_mul(1_000_000_000),
                    _ => 0,
                }
            }
        }
    )*};
}

impl_power10_width32!(i32, i64, i128);

impl Power10Width64 for i64 {
    #[inline]
    fn divide_power10_64bit(self, exp10: i32) -> i64 {
        match exp10 {
            0 => self,
            1 => self / 10,
            2 => self / 100,
            3 => self / 1_000,
            4 => self / 10_000,
            5 => self / 100_000,
            6 => self / 1_000_000,
            7 => self / 10_000_000,
            8 => self / 100_000_000,
            9 => self / 1_000_000_000,
            10 => self / 10_000_000_000,
            11 => self / 100_000_000_000,
            12 => self / 1_000_000_000_000,
            13 => self / 10_000_000_000_000,
            14 => self / 100_000_000_000_000,
            15 => self / 1_000_000_000_000_000,
            16 => self / 10_000_000_000_000_000,
            17 => self / 100_000_000_000_000_000,
            18 => self / 1_000_000_000_000_000_000,
            // 10^19 only fits unsigned; the signed reinterpretation wraps
            19 => ((self as u64) / 10_000_000_000_000_000_000) as i64,
            _ => 0,
        }
    }

    #[inline]
    fn multiply_power10_64bit(self, exp10: i32) -> i64 {
        match exp10 {
            0 => self,
            1 => self.wrapping_mul(10),
            2 => self.wrapping_mul(100),
            3 => self.wrapping_mul(1_000),
            4 => self.wrapping_mul(10_000),
            5 => self.wrapping_mul(100_000),
            6 => self.wrapping_mul(1_000_000),
            7 => self.wrapping_mul(10_000_000),
            8 => self.wrapping_mul(100_000_000),
            9 => self.wrapping_mul(1_000_000_000),
            10 => self.wrapping_mul(10_000_000_000),
            11 => self.wrapping_mul(100_000_000_000),
            12 => self.wrapping_mul(1_000_000_000_000),
            13 => self.wrapping_mul(10_000_000_000_000),
            14 => self.wrapping_mul(100_000_000_000_000),
            15 => self.wrapping_mul(1_000_000_000_000_000),
            16 => self.wrapping_mul(10_000_000_000_000_000),
            17 => self.wrapping_mul(100_000_000_000_000_000),
            18 => self.wrapping_mul(1_000_000_000_000_000_000),
            // 10^19 only fits unsigned; the signed reinterpretation wraps
            19 => (self as u64).wrapping_mul(10_000_000_000_000_000_000) as i64,
            _ => 0,
        }
    }
}

impl Power10Width64 for i128 {
    #[inline]
    fn divide_power10_64bit(self, exp10: i32) -> i128 {
        match exp10 {
            0 => self,
            1 => self / 10,
            2 => self / 100,
            3 => self / 1_000,
            4 => self / 10_000,
            5 => self / 100_000,
            6 => self / 1_000_000,
            7 => self / 10_000_000,
            8 => self / 100_000_000,
            9 => self / 1_000_000_000,
            10 => self / 10_000_000_000,
            11 => self / 100_000_000_000,
            12 => self / 1_000_000_000_000,
            13 => self / 10_000_000_000_000,
            14 => self / 100_000_000_000_000,
            15 => self / 1_000_000_000_000_000,
            16 => self / 10_000_000_000_000_000,
            17 => self / 100_000_000_000_000_000,
            18 => self / 1_000_000_000_000_000_000,
            19 => self / 10_000_000_000_000_000_000,
            _ => 0,
        }
    }

    #[inline]
    fn multiply_power10_64bit(self, exp10: i32) -> i128 {
        match exp10 {
            0 => self,
            1 => self.wrapping_mul(10),
            2 => self.wrapping_mul(100),
            3 => self.wrapping_mul(1_000),
            4 => self.wrapping_mul(10_000),
            5 => self.wrapping_mul(100_000),
            6 => self.wrapping_mul(1_000_000),
            7 => self.wrapping_mul(10_000_000),
            8 => self.wrapping_mul(100_000_000),
            9 => self.wrapping_mul(1_000_000_000),
            10 => self.wrapping_mul(10_000_000_000),
            11 => self.wrapping_mul(100_000_000_000),
            12 => self.wrapping_mul(1_000_000_000_000),
            13 => self.wrapping_mul(10_000_000_000_000),
            14 => self.wrapping_mul(100_000_000_000_000),
            15 => self.wrapping_mul(1_000_000_000_000_000),
            16 => self.wrapping_mul(10_000_000_000_000_000),
            17 => self.wrapping_mul(100_000_000_000_000_000),
            18 => self.wrapping_mul(1_000_000_000_000_000_000),
            19 => self.wrapping_mul(10_000_000_000_000_000_000),
            _ => 0,
        }
    }
}

impl Power10Width128 for i128 {
    // Inlining this body regresses callers; keep it a real call.
    #[inline(never)]
    fn divide_power10_128bit(self, exp10: i32) -> i128 {
        match exp10 {
            0 => self,
            1 => self / 10,
            2 => self / 100,
            3 => self / 1_000,
            4 => self / 10_000,
            5 => self / 100_000,
            6 => self / 1_000_000,
            7 => self / 10_000_000,
            8 => self / 100_000_000,
            9 => self / 1_000_000_000,
            10 => self / 10_000_000_000,
            11 => self / 100_000_000_000,
            12 => self / 1_000_000_000_000,
            13 => self / 10_000_000_000_000,
            14 => self / 100_000_000_000_000,
            15 => self / 1_000_000_000_000_000,
            16 => self / 10_000_000_000_000_000,
            17 => self / 100_000_000_000_000_000,
            18 => self / 1_000_000_000_000_000_000,
            19 => self / const { large_power_of_10(19) },
            20 => self / const { large_power_of_10(20) },
            21 => self / const { large_power_of_10(21) },
            22 => self / const { large_power_of_10(22) },
            23 => self / const { large_power_of_10(23) },
            24 => self / const { large_power_of_10(24) },
            25 => self / const { large_power_of_10(25) },
            26 => self / const { large_power_of_10(26) },
            27 => self / const { large_power_of_10(27) },
            28 => self / const { large_power_of_10(28) },
            29 => self / const { large_power_of_10(29) },
            30 => self / const { large_power_of_10(30) },
            31 => self / const { large_power_of_10(31) },
            32 => self / const { large_power_of_10(32) },
            33 => self / const { large_power_of_10(33) },
            34 => self / const { large_power_of_10(34) },
            35 => self / const { large_power_of_10(35) },
            36 => self / const { large_power_of_10(36) },
            37 => self / const { large_power_of_10(37) },
            38 => self / const { large_power_of_10(38) },
            _ => 0,
        }
    }

    // Inlining this body regresses callers; keep it a real call.
    #[inline(never)]
    fn multiply_power10_128bit(self, exp10: i32) -> i128 {
        match exp10 {
            0 => self,
            1 => self.wrapping_mul(10),
            2 => self.wrapping_mul(100),
            3 => self.wrapping_mul(1_000),
            4 => self.wrapping_mul(10_000),
            5 => self.wrapping_mul(100_000),
            6 => self.wrapping_mul(1_000_000),
            7 => self.wrapping_mul(10_000_000),
            8 => self.wrapping_mul(100_000_000),
            9 => self.wrapping_mul(1_000_000_000),
            10 => self.wrapping_mul(10_000_000_000),
            11 => self.wrapping_mul(100_000_000_000),
            12 => self.wrapping_mul(1_000_000_000_000),
            13 => self.wrapping_mul(10_000_000_000_000),
            14 => self.wrapping_mul(100_000_000_000_000),
            15 => self.wrapping_mul(1_000_000_000_000_000),
            16 => self.wrapping_mul(10_000_000_000_000_000),
            17 => self.wrapping_mul(100_000_000_000_000_000),
            18 => self.wrapping_mul(1_000_000_000_000_000_000),
            19 => self.wrapping_mul(const { large_power_of_10(19) }),
            20 => self.wrapping_mul(const { large_power_of_10(20) }),
            21 => self.wrapping_mul(const { large_power_of_10(21) }),
            22 => self.wrapping_mul(const { large_power_of_10(22) }),
            23 => self.wrapping_mul(const { large_power_of_10(23) }),
            24 => self.wrapping_mul(const { large_power_of_10(24) }),
            25 => self.wrapping_mul(const { large_power_of_10(25) }),
            26 => self.wrapping_mul(const { large_power_of_10(26) }),
            27 => self.wrapping_mul(const { large_power_of_10(27) }),
            28 => self.wrapping_mul(const { large_power_of_10(28) }),
            29 => self.wrapping_mul(const { large_power_of_10(29) }),
            30 => self.wrapping_mul(const { large_power_of_10(30) }),
            31 => self.wrapping_mul(const { large_power_of_10(31) }),
            32 => self.wrapping_mul(const { large_power_of_10(32) }),
            33 => self.wrapping_mul(const { large_power_of_10(33) }),
            34 => self.wrapping_mul(const { large_power_of_10(34) }),
            35 => self.wrapping_mul(const { large_power_of_10(35) }),
            36 => self.wrapping_mul(const { large_power_of_10(36) }),
            37 => self.wrapping_mul(const { large_power_of_10(37) }),
            38 => self.wrapping_mul(const { large_power_of_10(38) }),
            _ => 0,
        }
    }
}

// ============================================================================
// Width dispatch
// ============================================================================

/// Power-of-10 scaling with the kernel width selected by the representation
/// `R` while the operand may be `R` itself or a wider integer.
///
/// Callers constructing a wide value from a narrow source pass the wide `R`
/// so the kernel range matches the headroom of the representation.
pub trait Power10<R>: Sized {
    fn divide_power10(self, exp10: i32) -> Self;
    fn multiply_power10(self, exp10: i32) -> Self;
}

impl<T: Power10Width32> Power10<i32> for T {
    #[inline]
    fn divide_power10(self, exp10: i32) -> T {
        self.divide_power10_32bit(exp10)
    }

    #[inline]
    fn multiply_power10(self, exp10: i32) -> T {
        self.multiply_power10_32bit(exp10)
    }
}

impl<T: Power10Width64> Power10<i64> for T {
    #[inline]
    fn divide_power10(self, exp10: i32) -> T {
        self.divide_power10_64bit(exp10)
    }

    #[inline]
    fn multiply_power10(self, exp10: i32) -> T {
        self.multiply_power10_64bit(exp10)
    }
}

impl<T: Power10Width128> Power10<i128> for T {
    #[inline]
    fn divide_power10(self, exp10: i32) -> T {
        self.divide_power10_128bit(exp10)
    }

    #[inline]
    fn multiply_power10(self, exp10: i32) -> T {
        self.multiply_power10_128bit(exp10)
    }
}

// ============================================================================
// Integer exponentiation
// ============================================================================

/// `RADIX^exponent` in the representation type, by squaring.
///
/// For base 2 this is a plain shift. The exponent must be non-negative;
/// a negative exponent is a programming error and traps in debug builds.
/// Overflow wraps in the representation type.
pub fn ipow<Rep: FixedPointRep, const RADIX: u32>(exponent: i32) -> Rep {
    debug_assert!(
        exponent >= 0,
        "integer exponentiation with negative exponent is not possible"
    );

    if RADIX == Radix::Base2 as u32 {
        return Rep::ONE << exponent as u32;
    }

    if exponent == 0 {
        return Rep::ONE;
    }

    // Iterative squaring; a lookup table here costs registers in callers.
    let mut exponent = exponent;
    let mut extra = Rep::ONE;
    let mut square = Rep::from_i128(RADIX as i128);
    while exponent > 1 {
        if exponent & 1 == 1 {
            extra = extra.wrapping_mul(square);
        }
        exponent >>= 1;
        square = square.wrapping_mul(square);
    }
    square.wrapping_mul(extra)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_2: u32 = Radix::Base2 as u32;
    const BASE_10: u32 = Radix::Base10 as u32;

    #[test]
    fn test_large_power_of_10() {
        assert_eq!(large_power_of_10(18), 1_000_000_000_000_000_000);
        assert_eq!(large_power_of_10(19), 10_000_000_000_000_000_000);
        assert_eq!(large_power_of_10(38), 10i128.pow(38));
    }

    #[test]
    fn test_divide_32bit() {
        assert_eq!(123_456_789i32.divide_power10_32bit(0), 123_456_789);
        assert_eq!(123_456_789i32.divide_power10_32bit(4), 12_345);
        assert_eq!(2_000_000_000i32.divide_power10_32bit(9), 2);
        // truncation toward zero
        assert_eq!((-1_999i32).divide_power10_32bit(3), -1);
        // wider operands use the same bound
        assert_eq!(5_000_000i64.divide_power10_32bit(6), 5);
        assert_eq!(5_000_000i128.divide_power10_32bit(6), 5);
    }

    #[test]
    fn test_multiply_32bit() {
        assert_eq!(21i32.multiply_power10_32bit(2), 2_100);
        assert_eq!((-3i32).multiply_power10_32bit(9), -3_000_000_000i64 as i32);
        assert_eq!(7i64.multiply_power10_32bit(9), 7_000_000_000);
    }

    #[test]
    fn test_divide_64bit() {
        assert_eq!(1_000_000_000_000_000_000i64.divide_power10_64bit(18), 1);
        assert_eq!((-1_234_567_890_123i64).divide_power10_64bit(10), -123);
        // the 10^19 divisor reads the operand as unsigned
        assert_eq!(i64::MAX.divide_power10_64bit(19), 0);
        // negative operands wrap through the unsigned reinterpretation
        assert_eq!((-1i64).divide_power10_64bit(19), 1);
        // a 128-bit operand divides by the signed 10^19 literal directly
        assert_eq!(30_000_000_000_000_000_000i128.divide_power10_64bit(19), 3);
    }

    #[test]
    fn test_multiply_64bit() {
        assert_eq!(42i64.multiply_power10_64bit(17), 4_200_000_000_000_000_000);
        assert_eq!(5i128.multiply_power10_64bit(19), 50_000_000_000_000_000_000);
    }

    #[test]
    fn test_divide_128bit() {
        let coefficient = 10i128.pow(36);
        assert_eq!(coefficient.divide_power10_128bit(38), 0);
        assert_eq!(coefficient.divide_power10_128bit(36), 1);
        assert_eq!((7 * 10i128.pow(30)).divide_power10_128bit(30), 7);
    }

    #[test]
    fn test_multiply_128bit() {
        assert_eq!(3i128.multiply_power10_128bit(38), 3 * 10i128.pow(38));
        assert_eq!((-2i128).multiply_power10_128bit(20), -2 * 10i128.pow(20));
    }

    #[test]
    fn test_out_of_range_exponent_is_zero() {
        assert_eq!(123i32.divide_power10_32bit(10), 0);
        assert_eq!(123i32.multiply_power10_32bit(-1), 0);
        assert_eq!(123i64.divide_power10_64bit(20), 0);
        assert_eq!(123i128.multiply_power10_128bit(39), 0);
    }

    #[test]
    fn test_width_dispatch() {
        // operand wider than the representation still uses the narrow bound
        assert_eq!(<i64 as Power10<i32>>::divide_power10(77_000, 3), 77);
        assert_eq!(<i64 as Power10<i32>>::divide_power10(77, 10), 0);
        assert_eq!(<i128 as Power10<i64>>::divide_power10(77, 10), 0);
        assert_eq!(<i128 as Power10<i128>>::multiply_power10(1, 38), 10i128.pow(38));
    }

    #[test]
    fn test_ipow_base10() {
        assert_eq!(ipow::<i32, BASE_10>(0), 1);
        assert_eq!(ipow::<i32, BASE_10>(5), 100_000);
        assert_eq!(ipow::<i64, BASE_10>(18), 1_000_000_000_000_000_000);
        assert_eq!(ipow::<i128, BASE_10>(38), 10i128.pow(38));
    }

    #[test]
    fn test_ipow_base2() {
        assert_eq!(ipow::<i32, BASE_2>(0), 1);
        assert_eq!(ipow::<i64, BASE_2>(10), 1_024);
    }
}
