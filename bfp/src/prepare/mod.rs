//! Exponent planners.
//!
//! Every planner is a pure function of operand exponents and headrooms (and,
//! for a few reductions, the vector length). It returns the exponent of the
//! result together with the shift each operand must receive before the
//! kernel runs, where a positive shift is a rounding right shift and a
//! negative shift a saturating left shift.

mod additive;
mod complex;
mod macc;
mod multiplicative;
mod nonlinear;
mod reduction;

pub use additive::*;
pub use complex::*;
pub use macc::*;
pub use multiplicative::*;
pub use nonlinear::*;
pub use reduction::*;

use crate::layouts::{Exponent, RightShift};

/// Plan for an operation with two vector (or vector and scalar) operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinaryPlan {
    pub a_exp: Exponent,
    pub b_shr: RightShift,
    pub c_shr: RightShift,
}

/// Plan for an operation with a single operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnaryPlan {
    pub a_exp: Exponent,
    pub b_shr: RightShift,
}

/// Plan for a 16-bit product: the rounding shift applied to the 32-bit
/// product of the unshifted operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductPlan {
    pub a_exp: Exponent,
    pub a_shr: RightShift,
}

/// `ceil(log2(n))`, with `ceil_log2(0) == ceil_log2(1) == 0`.
#[inline]
pub fn ceil_log2(n: usize) -> i32 {
    if n <= 1 { 0 } else { (usize::BITS - (n - 1).leading_zeros()) as i32 }
}

#[cfg(test)]
mod tests {
    use crate::prepare::ceil_log2;

    #[test]
    fn ceil_log2_values() {
        assert_eq!(ceil_log2(1), 0);
        assert_eq!(ceil_log2(2), 1);
        assert_eq!(ceil_log2(3), 2);
        assert_eq!(ceil_log2(128), 7);
        assert_eq!(ceil_log2(129), 8);
    }
}
