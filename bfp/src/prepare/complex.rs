use crate::{
    layouts::{Exponent, Headroom, RightShift},
    prepare::{BinaryPlan, ProductPlan, UnaryPlan},
};

/// Planner for the complex 16-bit product and conjugate product. Each output
/// part sums two 30-bit partial products, so the worst case is brought down
/// from `2^(31 - b_hr - c_hr)` to `2^15`.
#[inline]
pub fn vect_complex_s16_mul_prepare(b_exp: Exponent, c_exp: Exponent, b_hr: Headroom, c_hr: Headroom) -> ProductPlan {
    let a_shr: RightShift = (16 - (b_hr + c_hr) as i32).max(0);
    ProductPlan {
        a_exp: b_exp + c_exp + a_shr,
        a_shr,
    }
}

/// Planner for scaling a complex 16-bit vector by a complex scalar.
#[inline]
pub fn vect_complex_s16_scale_prepare(b_exp: Exponent, c_exp: Exponent, b_hr: Headroom, c_hr: Headroom) -> ProductPlan {
    vect_complex_s16_mul_prepare(b_exp, c_exp, b_hr, c_hr)
}

/// Planner for multiplying a complex 16-bit vector by a real one. Only the
/// positive end can saturate, by one LSB.
#[inline]
pub fn vect_complex_s16_real_mul_prepare(b_exp: Exponent, c_exp: Exponent, b_hr: Headroom, c_hr: Headroom) -> ProductPlan {
    let a_shr: RightShift = (15 - (b_hr + c_hr) as i32).max(0);
    ProductPlan {
        a_exp: b_exp + c_exp + a_shr,
        a_shr,
    }
}

#[inline]
pub fn vect_complex_s16_real_scale_prepare(b_exp: Exponent, c_exp: Exponent, b_hr: Headroom, c_hr: Headroom) -> ProductPlan {
    vect_complex_s16_real_mul_prepare(b_exp, c_exp, b_hr, c_hr)
}

/// Planner for `|b[k]|^2` of a complex 16-bit vector.
#[inline]
pub fn vect_complex_s16_squared_mag_prepare(b_exp: Exponent, b_hr: Headroom) -> ProductPlan {
    let a_shr: RightShift = (16 - 2 * b_hr as i32).max(0);
    ProductPlan {
        a_exp: 2 * b_exp + a_shr,
        a_shr,
    }
}

/// Planner for `|b[k]|` of a complex 16-bit vector: leaves one bit of
/// headroom in the shifted input.
#[inline]
pub fn vect_complex_s16_mag_prepare(b_exp: Exponent, b_hr: Headroom) -> UnaryPlan {
    let b_shr: RightShift = 1 - b_hr as i32;
    UnaryPlan {
        a_exp: b_exp + b_shr,
        b_shr,
    }
}

/// Planner for the complex 32-bit product and conjugate product.
///
/// The worst case `2^(33 - total_hr - b_shr - c_shr)` must land on `2^31`.
/// A negative total shift is taken from B first; a positive one is split
/// with the larger half going to the operand with less headroom.
pub fn vect_complex_s32_mul_prepare(b_exp: Exponent, c_exp: Exponent, b_hr: Headroom, c_hr: Headroom) -> BinaryPlan {
    let total_shr: RightShift = 2 - (b_hr + c_hr) as i32;
    let b_shr: RightShift = if total_shr < 0 {
        total_shr.max(-(b_hr as i32))
    } else if b_hr <= c_hr {
        total_shr - (total_shr >> 1)
    } else {
        total_shr >> 1
    };
    let c_shr: RightShift = total_shr - b_shr;
    BinaryPlan {
        a_exp: b_exp + c_exp + b_shr + c_shr + 30,
        b_shr,
        c_shr,
    }
}

#[inline]
pub fn vect_complex_s32_conj_mul_prepare(b_exp: Exponent, c_exp: Exponent, b_hr: Headroom, c_hr: Headroom) -> BinaryPlan {
    vect_complex_s32_mul_prepare(b_exp, c_exp, b_hr, c_hr)
}

/// Planner for multiplying a complex 32-bit vector by a real one: strips
/// all headroom and gives one bit back, on B when it had any.
pub fn vect_complex_s32_real_mul_prepare(b_exp: Exponent, c_exp: Exponent, b_hr: Headroom, c_hr: Headroom) -> BinaryPlan {
    let mut b_shr: RightShift = -(b_hr as i32);
    let mut c_shr: RightShift = -(c_hr as i32);
    if b_hr > 0 {
        b_shr += 1;
    } else {
        c_shr += 1;
    }
    BinaryPlan {
        a_exp: b_exp + c_exp + b_shr + c_shr + 30,
        b_shr,
        c_shr,
    }
}

/// Planner for scaling a complex 32-bit vector by a complex scalar. The
/// scalar is only shifted when B runs out of headroom to give.
pub fn vect_complex_s32_scale_prepare(b_exp: Exponent, c_exp: Exponent, b_hr: Headroom, c_hr: Headroom) -> BinaryPlan {
    let mut b_shr: RightShift = 2 - (b_hr + c_hr) as i32;
    let mut c_shr: RightShift = 0;
    if b_shr < -(b_hr as i32) {
        c_shr = b_shr + b_hr as i32;
        b_shr = -(b_hr as i32);
    }
    BinaryPlan {
        a_exp: b_exp + c_exp + b_shr + c_shr + 30,
        b_shr,
        c_shr,
    }
}

/// Planner for scaling a complex 32-bit vector by a real scalar.
#[inline]
pub fn vect_complex_s32_real_scale_prepare(b_exp: Exponent, c_exp: Exponent, b_hr: Headroom, c_hr: Headroom) -> BinaryPlan {
    crate::prepare::vect_s32_mul_prepare(b_exp, c_exp, b_hr, c_hr)
}

#[inline]
pub fn vect_complex_s32_mag_prepare(b_exp: Exponent, b_hr: Headroom) -> UnaryPlan {
    let b_shr: RightShift = 1 - b_hr as i32;
    UnaryPlan {
        a_exp: b_exp + b_shr,
        b_shr,
    }
}

/// Planner for `|b[k]|^2 >> 30` of a complex 32-bit vector.
#[inline]
pub fn vect_complex_s32_squared_mag_prepare(b_exp: Exponent, b_hr: Headroom) -> UnaryPlan {
    let b_shr: RightShift = 1 - b_hr as i32;
    UnaryPlan {
        a_exp: 2 * (b_exp + b_shr) + 30,
        b_shr,
    }
}

#[cfg(test)]
mod tests {
    use crate::prepare::{
        BinaryPlan, ProductPlan, UnaryPlan, vect_complex_s16_mag_prepare, vect_complex_s16_mul_prepare,
        vect_complex_s16_real_mul_prepare, vect_complex_s16_squared_mag_prepare, vect_complex_s32_mag_prepare,
        vect_complex_s32_mul_prepare, vect_complex_s32_real_mul_prepare, vect_complex_s32_scale_prepare,
        vect_complex_s32_squared_mag_prepare,
    };

    #[test]
    fn s16_products() {
        assert_eq!(vect_complex_s16_mul_prepare(-10, -12, 2, 3), ProductPlan { a_exp: -11, a_shr: 11 });
        assert_eq!(vect_complex_s16_real_mul_prepare(-10, -12, 2, 3), ProductPlan { a_exp: -12, a_shr: 10 });
        assert_eq!(vect_complex_s16_mul_prepare(0, 0, 9, 9), ProductPlan { a_exp: 0, a_shr: 0 });
    }

    #[test]
    fn s16_magnitudes() {
        assert_eq!(vect_complex_s16_squared_mag_prepare(-14, 3), ProductPlan { a_exp: -18, a_shr: 10 });
        assert_eq!(vect_complex_s16_mag_prepare(-14, 3), UnaryPlan { a_exp: -16, b_shr: -2 });
    }

    #[test]
    fn s32_mul_splits_shift() {
        // total_shr = 2.
        assert_eq!(vect_complex_s32_mul_prepare(0, 0, 0, 0), BinaryPlan { a_exp: 32, b_shr: 1, c_shr: 1 });
        // total_shr = 1, c has less headroom.
        assert_eq!(vect_complex_s32_mul_prepare(0, 0, 1, 0), BinaryPlan { a_exp: 31, b_shr: 0, c_shr: 1 });
        // total_shr = -6, bounded by b_hr.
        assert_eq!(vect_complex_s32_mul_prepare(0, 0, 3, 5), BinaryPlan { a_exp: 24, b_shr: -3, c_shr: -3 });
    }

    #[test]
    fn s32_real_mul_and_scale() {
        assert_eq!(vect_complex_s32_real_mul_prepare(0, 0, 2, 4), BinaryPlan { a_exp: 25, b_shr: -1, c_shr: -4 });
        assert_eq!(vect_complex_s32_real_mul_prepare(0, 0, 0, 4), BinaryPlan { a_exp: 27, b_shr: 0, c_shr: -3 });
        assert_eq!(vect_complex_s32_scale_prepare(0, 0, 1, 6), BinaryPlan { a_exp: 25, b_shr: -1, c_shr: -4 });
        assert_eq!(vect_complex_s32_scale_prepare(0, 0, 1, 0), BinaryPlan { a_exp: 31, b_shr: 1, c_shr: 0 });
    }

    #[test]
    fn s32_magnitudes() {
        assert_eq!(vect_complex_s32_mag_prepare(-20, 4), UnaryPlan { a_exp: -23, b_shr: -3 });
        assert_eq!(vect_complex_s32_squared_mag_prepare(-20, 4), UnaryPlan { a_exp: -16, b_shr: -3 });
    }
}
