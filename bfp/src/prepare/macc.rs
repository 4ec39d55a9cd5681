use crate::layouts::{Exponent, Headroom, RightShift};

/// Plan for `acc = (acc >> acc_shr) +/- (b >> b_shr) * (c >> c_shr) >> 30`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaccPlan {
    pub acc_exp: Exponent,
    pub acc_shr: RightShift,
    pub b_shr: RightShift,
    pub c_shr: RightShift,
}

/// Plan for the 16-bit `acc = (acc >> acc_shr) +/- (b * c) >> bc_shr`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaccS16Plan {
    pub acc_exp: Exponent,
    pub acc_shr: RightShift,
    pub bc_shr: RightShift,
}

/// Shared 32-bit macc solver. `b_shr`/`c_shr` put the product at `p_exp`
/// with one bit of headroom; the accumulator would have one bit of headroom
/// at `acc_exp - acc_hr + 1`. The larger of the two becomes the new
/// accumulator exponent and the product shift is split between B and C.
#[inline]
fn macc_solve(acc_exp: Exponent, acc_hr: Headroom, b_shr: RightShift, c_shr: RightShift, p_exp: Exponent) -> MaccPlan {
    let d_exp: Exponent = acc_exp - acc_hr as i32 + 1;
    let new_exp: Exponent = d_exp.max(p_exp);
    let p_shr: RightShift = new_exp - p_exp;
    MaccPlan {
        acc_exp: new_exp,
        acc_shr: new_exp - acc_exp,
        b_shr: b_shr + (p_shr >> 1),
        c_shr: c_shr + (p_shr - (p_shr >> 1)),
    }
}

/// Planner for 32-bit macc and nmacc.
#[inline]
pub fn vect_s32_macc_prepare(
    acc_exp: Exponent,
    b_exp: Exponent,
    c_exp: Exponent,
    acc_hr: Headroom,
    b_hr: Headroom,
    c_hr: Headroom,
) -> MaccPlan {
    let p_exp: Exponent = b_exp + c_exp - b_hr as i32 - c_hr as i32 + 32;
    macc_solve(acc_exp, acc_hr, 1 - b_hr as i32, 1 - c_hr as i32, p_exp)
}

#[inline]
pub fn vect_s32_nmacc_prepare(
    acc_exp: Exponent,
    b_exp: Exponent,
    c_exp: Exponent,
    acc_hr: Headroom,
    b_hr: Headroom,
    c_hr: Headroom,
) -> MaccPlan {
    vect_s32_macc_prepare(acc_exp, b_exp, c_exp, acc_hr, b_hr, c_hr)
}

/// Planner for complex 32-bit macc variants. The complex product sums two
/// partial products, so C gives up one more bit than in the real case.
#[inline]
pub fn vect_complex_s32_macc_prepare(
    acc_exp: Exponent,
    b_exp: Exponent,
    c_exp: Exponent,
    acc_hr: Headroom,
    b_hr: Headroom,
    c_hr: Headroom,
) -> MaccPlan {
    let p_exp: Exponent = b_exp + c_exp - b_hr as i32 - c_hr as i32 + 33;
    macc_solve(acc_exp, acc_hr, 1 - b_hr as i32, 2 - c_hr as i32, p_exp)
}

/// Shared 16-bit macc solver: `product_bits` is the width the exact
/// `b * c` product is brought down from (16 real, 17 complex).
#[inline]
fn macc_s16_solve(
    acc_exp: Exponent,
    b_exp: Exponent,
    c_exp: Exponent,
    acc_hr: Headroom,
    b_hr: Headroom,
    c_hr: Headroom,
    product_bits: i32,
) -> MaccS16Plan {
    let bc_hr: i32 = (b_hr + c_hr) as i32;
    let bc_exp: Exponent = b_exp + c_exp - bc_hr + product_bits;
    let tmp_exp: Exponent = acc_exp - acc_hr as i32 + 1;
    let new_exp: Exponent = bc_exp.max(tmp_exp);
    MaccS16Plan {
        acc_exp: new_exp,
        acc_shr: new_exp - acc_exp,
        bc_shr: product_bits - bc_hr + (new_exp - bc_exp),
    }
}

/// Planner for 16-bit macc and nmacc.
#[inline]
pub fn vect_s16_macc_prepare(
    acc_exp: Exponent,
    b_exp: Exponent,
    c_exp: Exponent,
    acc_hr: Headroom,
    b_hr: Headroom,
    c_hr: Headroom,
) -> MaccS16Plan {
    macc_s16_solve(acc_exp, b_exp, c_exp, acc_hr, b_hr, c_hr, 16)
}

#[inline]
pub fn vect_s16_nmacc_prepare(
    acc_exp: Exponent,
    b_exp: Exponent,
    c_exp: Exponent,
    acc_hr: Headroom,
    b_hr: Headroom,
    c_hr: Headroom,
) -> MaccS16Plan {
    vect_s16_macc_prepare(acc_exp, b_exp, c_exp, acc_hr, b_hr, c_hr)
}

/// Planner for complex 16-bit macc variants.
#[inline]
pub fn vect_complex_s16_macc_prepare(
    acc_exp: Exponent,
    b_exp: Exponent,
    c_exp: Exponent,
    acc_hr: Headroom,
    b_hr: Headroom,
    c_hr: Headroom,
) -> MaccS16Plan {
    macc_s16_solve(acc_exp, b_exp, c_exp, acc_hr, b_hr, c_hr, 17)
}

#[cfg(test)]
mod tests {
    use crate::prepare::{MaccPlan, MaccS16Plan, vect_s16_macc_prepare, vect_s32_macc_prepare};

    #[test]
    fn s32_macc_product_dominates() {
        // p_exp = 32, d_exp = -29.
        let plan: MaccPlan = vect_s32_macc_prepare(-30, 0, 0, 0, 0, 0);
        assert_eq!(plan, MaccPlan { acc_exp: 32, acc_shr: 62, b_shr: 1, c_shr: 1 });
    }

    #[test]
    fn s32_macc_accumulator_dominates() {
        let plan: MaccPlan = vect_s32_macc_prepare(10, -30, -30, 0, 2, 2);
        // p_exp = -60 - 4 + 32 = -32, d_exp = 11, p_shr = 43.
        assert_eq!(plan, MaccPlan { acc_exp: 11, acc_shr: 1, b_shr: -1 + 21, c_shr: -1 + 22 });
    }

    #[test]
    fn s16_macc() {
        let plan: MaccS16Plan = vect_s16_macc_prepare(0, -10, -10, 3, 1, 1);
        // bc_exp = -20 - 2 + 16 = -6, tmp = -2.
        assert_eq!(plan, MaccS16Plan { acc_exp: -2, acc_shr: -2, bc_shr: 14 + 4 });
    }
}
