// ============================================================================
// Overflow Predicates
// Checked-arithmetic predicates for the representation type
// ============================================================================
//
// The arithmetic operators call these from debug assertions only; release
// builds wrap. They are public so callers can opt into checked arithmetic
// before an operation without paying for it on the release hot path.

use crate::rep::FixedPointRep;

/// True when `lhs + rhs` wraps in `Rep`.
#[inline]
pub fn addition_overflow<Rep: FixedPointRep>(lhs: Rep, rhs: Rep) -> bool {
    if rhs > Rep::ZERO {
        lhs > Rep::MAX - rhs
    } else {
        lhs < Rep::MIN - rhs
    }
}

/// True when `lhs - rhs` wraps in `Rep`.
#[inline]
pub fn subtraction_overflow<Rep: FixedPointRep>(lhs: Rep, rhs: Rep) -> bool {
    if rhs > Rep::ZERO {
        lhs < Rep::MIN + rhs
    } else {
        lhs > Rep::MAX + rhs
    }
}

/// True when `lhs * rhs` wraps in `Rep`.
#[inline]
pub fn multiplication_overflow<Rep: FixedPointRep>(lhs: Rep, rhs: Rep) -> bool {
    let neg_one = -Rep::ONE;
    if rhs > Rep::ZERO {
        return lhs > Rep::MAX / rhs || lhs < Rep::MIN / rhs;
    }
    if rhs < neg_one {
        return lhs > Rep::MIN / rhs || lhs < Rep::MAX / rhs;
    }
    rhs == neg_one && lhs == Rep::MIN
}

/// True when `lhs / rhs` wraps in `Rep`; only `MIN / -1` does.
#[inline]
pub fn division_overflow<Rep: FixedPointRep>(lhs: Rep, rhs: Rep) -> bool {
    lhs == Rep::MIN && rhs == -Rep::ONE
}
