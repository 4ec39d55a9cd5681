use crate::{
    layouts::{Exponent, Headroom, Mantissa, RightShift},
    prepare::UnaryPlan,
    reference::{headroom, vect_min_abs_ref},
};

/// Plan for `res[k] = 2^scale / b[k]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InversePlan {
    pub a_exp: Exponent,
    pub scale: u32,
}

/// Shared square-root planner: removes all headroom, then gives back one bit
/// if the shifted exponent is odd so that it halves exactly.
#[inline]
fn sqrt_solve(b_exp: Exponent, b_hr: Headroom, frac_bits: i32) -> UnaryPlan {
    let mut b_shr: RightShift = -(b_hr as i32);
    if (b_exp + b_shr) & 1 == 1 {
        b_shr += 1;
    }
    UnaryPlan {
        a_exp: (b_exp + b_shr - frac_bits) >> 1,
        b_shr,
    }
}

#[inline]
pub fn vect_s32_sqrt_prepare(b_exp: Exponent, b_hr: Headroom) -> UnaryPlan {
    sqrt_solve(b_exp, b_hr, 30)
}

#[inline]
pub fn vect_s16_sqrt_prepare(b_exp: Exponent, b_hr: Headroom) -> UnaryPlan {
    sqrt_solve(b_exp, b_hr, 14)
}

/// Shared inverse planner. The smallest magnitude `m` of `b` satisfies
/// `2^(BITS-2-hr) <= m < 2^(BITS-1-hr)`; `scale` puts `2^scale / m` just
/// under `2^(BITS-2)`, one bit short of full scale.
#[inline]
fn inverse_solve<T: Mantissa>(b: &[T], b_exp: Exponent, top: u32) -> InversePlan {
    let hr: Headroom = headroom(vect_min_abs_ref(b));
    let scale: u32 = top - hr;
    InversePlan {
        a_exp: -b_exp - scale as i32,
        scale,
    }
}

/// Planner for the element-wise 32-bit inverse.
pub fn vect_s32_inverse_prepare(b: &[i32], b_exp: Exponent) -> InversePlan {
    inverse_solve(b, b_exp, 60)
}

/// Planner for the element-wise 16-bit inverse.
pub fn vect_s16_inverse_prepare(b: &[i16], b_exp: Exponent) -> InversePlan {
    inverse_solve(b, b_exp, 28)
}

#[cfg(test)]
mod tests {
    use crate::prepare::{InversePlan, UnaryPlan, vect_s16_inverse_prepare, vect_s16_sqrt_prepare, vect_s32_inverse_prepare, vect_s32_sqrt_prepare};

    #[test]
    fn s32_sqrt_exponent_is_halved() {
        assert_eq!(vect_s32_sqrt_prepare(-30, 0), UnaryPlan { a_exp: -30, b_shr: 0 });
        assert_eq!(vect_s32_sqrt_prepare(-28, 2), UnaryPlan { a_exp: -30, b_shr: -2 });
        assert_eq!(vect_s32_sqrt_prepare(0, 26), UnaryPlan { a_exp: -28, b_shr: -26 });
        assert_eq!(vect_s32_sqrt_prepare(-29, 0), UnaryPlan { a_exp: -29, b_shr: 1 });
    }

    #[test]
    fn s16_sqrt_exponent_is_halved() {
        assert_eq!(vect_s16_sqrt_prepare(-14, 0), UnaryPlan { a_exp: -14, b_shr: 0 });
        assert_eq!(vect_s16_sqrt_prepare(-12, 2), UnaryPlan { a_exp: -14, b_shr: -2 });
        assert_eq!(vect_s16_sqrt_prepare(0, 10), UnaryPlan { a_exp: -12, b_shr: -10 });
        assert_eq!(vect_s16_sqrt_prepare(-13, 0), UnaryPlan { a_exp: -13, b_shr: 1 });
    }

    #[test]
    fn inverse_scale_follows_smallest_magnitude() {
        // min |b| = 3 has 29 bits of headroom.
        assert_eq!(vect_s32_inverse_prepare(&[100, -3, 7], -2), InversePlan { a_exp: -29, scale: 31 });
        // min |b| = 0x100 has 6 bits of headroom.
        assert_eq!(vect_s16_inverse_prepare(&[0x1000, -0x100], 4), InversePlan { a_exp: -26, scale: 22 });
    }
}
