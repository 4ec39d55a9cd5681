use crate::{
    layouts::{Exponent, Headroom, RightShift},
    prepare::{BinaryPlan, ProductPlan},
};

/// Planner for the 32-bit element-wise product `(b >> b_shr) * (c >> c_shr) >> 30`.
///
/// The worst-case operands `-2^(31-b_hr)` and `-2^(31-c_hr)` give a product of
/// `2^(32 - b_hr - c_hr - b_shr - c_shr)`; the shifts are chosen so that it
/// lands on `2^30`, leaving one bit of headroom, and split so that neither
/// operand loses more precision than needed.
#[inline]
pub fn vect_s32_mul_prepare(b_exp: Exponent, c_exp: Exponent, b_hr: Headroom, c_hr: Headroom) -> BinaryPlan {
    let total_hr: i32 = (b_hr + c_hr) as i32;
    let (b_shr, c_shr): (RightShift, RightShift) = if total_hr == 0 {
        (1, 1)
    } else if total_hr == 1 {
        (if b_hr == 0 { 1 } else { 0 }, if c_hr == 0 { 1 } else { 0 })
    } else if b_hr == 0 {
        (0, 2 - total_hr)
    } else if c_hr == 0 {
        (2 - total_hr, 0)
    } else {
        (1 - b_hr as i32, 1 - c_hr as i32)
    };
    BinaryPlan {
        a_exp: b_exp + c_exp + b_shr + c_shr + 30,
        b_shr,
        c_shr,
    }
}

/// Planner for scaling a 32-bit vector by a scalar; identical to the
/// element-wise product.
#[inline]
pub fn vect_s32_scale_prepare(b_exp: Exponent, c_exp: Exponent, b_hr: Headroom, c_hr: Headroom) -> BinaryPlan {
    vect_s32_mul_prepare(b_exp, c_exp, b_hr, c_hr)
}

/// Planner for the 16-bit element-wise product `(b * c) >> a_shr`.
///
/// The worst-case product `2^(30 - b_hr - c_hr)` is brought down to `2^14`.
#[inline]
pub fn vect_s16_mul_prepare(b_exp: Exponent, c_exp: Exponent, b_hr: Headroom, c_hr: Headroom) -> ProductPlan {
    let a_shr: RightShift = (16 - (b_hr + c_hr) as i32).max(0);
    ProductPlan {
        a_exp: b_exp + c_exp + a_shr,
        a_shr,
    }
}

/// Planner for scaling a 16-bit vector by a scalar. The worst-case product is
/// brought down to `2^15`, which may saturate by one LSB.
#[inline]
pub fn vect_s16_scale_prepare(b_exp: Exponent, c_exp: Exponent, b_hr: Headroom, c_hr: Headroom) -> ProductPlan {
    let a_shr: RightShift = (15 - (b_hr + c_hr) as i32).max(0);
    ProductPlan {
        a_exp: b_exp + c_exp + a_shr,
        a_shr,
    }
}

#[cfg(test)]
mod tests {
    use crate::prepare::{BinaryPlan, ProductPlan, vect_s16_mul_prepare, vect_s16_scale_prepare, vect_s32_mul_prepare};

    #[test]
    fn s32_mul_cases() {
        assert_eq!(vect_s32_mul_prepare(0, 0, 0, 0), BinaryPlan { a_exp: 32, b_shr: 1, c_shr: 1 });
        assert_eq!(vect_s32_mul_prepare(0, 0, 1, 0), BinaryPlan { a_exp: 31, b_shr: 0, c_shr: 1 });
        assert_eq!(vect_s32_mul_prepare(0, 0, 0, 5), BinaryPlan { a_exp: 27, b_shr: 0, c_shr: -3 });
        assert_eq!(vect_s32_mul_prepare(0, 0, 4, 0), BinaryPlan { a_exp: 28, b_shr: -2, c_shr: 0 });
        assert_eq!(vect_s32_mul_prepare(-3, 2, 3, 2), BinaryPlan { a_exp: 26, b_shr: -2, c_shr: -1 });
    }

    #[test]
    fn s16_product_shifts() {
        assert_eq!(vect_s16_mul_prepare(-15, -15, 0, 0), ProductPlan { a_exp: -14, a_shr: 16 });
        assert_eq!(vect_s16_mul_prepare(0, 0, 10, 10), ProductPlan { a_exp: 0, a_shr: 0 });
        assert_eq!(vect_s16_scale_prepare(0, 0, 1, 2), ProductPlan { a_exp: 12, a_shr: 12 });
    }
}
