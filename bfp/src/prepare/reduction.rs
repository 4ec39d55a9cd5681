use crate::{
    layouts::{Exponent, Headroom, RightShift},
    prepare::{BinaryPlan, UnaryPlan, ceil_log2},
};

/// Planner for the 32-bit inner product
/// `sum_k ((b[k] >> b_shr) * (c[k] >> c_shr)) >> 30` on a 40-bit accumulator.
///
/// Headroom is removed from both operands first. Only when `len` worst-case
/// products could reach `2^39` are the operands shifted back right, B taking
/// the smaller half of the excess.
pub fn vect_s32_dot_prepare(b_exp: Exponent, c_exp: Exponent, b_hr: Headroom, c_hr: Headroom, len: usize) -> BinaryPlan {
    let total_hr: i32 = (b_hr + c_hr) as i32;
    let mut total_shr: RightShift = ceil_log2(len) - 7;

    let mut b_shr: RightShift = -(b_hr as i32);
    let mut c_shr: RightShift = -(c_hr as i32);

    if total_shr >= total_hr {
        b_shr += b_hr as i32;
        c_shr += c_hr as i32;
        total_shr -= total_hr;
        b_shr += total_shr >> 1;
        c_shr += total_shr - (total_shr >> 1);
    } else if total_shr >= 0 {
        let b_part: i32 = (b_hr as i32).min(total_shr);
        b_shr += b_part;
        c_shr += total_shr - b_part;
    }

    BinaryPlan {
        a_exp: b_exp + c_exp + b_shr + c_shr + 30,
        b_shr,
        c_shr,
    }
}

/// Planner for the 32-bit energy `sum_k (b[k] >> b_shr)^2 >> 30`.
pub fn vect_s32_energy_prepare(len: usize, b_exp: Exponent, b_hr: Headroom) -> UnaryPlan {
    let b_shr: RightShift = ((ceil_log2(len) - 6) / 2 - b_hr as i32).max(-(b_hr as i32));
    UnaryPlan {
        a_exp: 2 * (b_exp + b_shr) + 30,
        b_shr,
    }
}

/// Planner for the sum of a complex 32-bit vector on 40-bit accumulators,
/// which hold 8 guard bits above the input headroom.
pub fn vect_complex_s32_sum_prepare(b_exp: Exponent, b_hr: Headroom, len: usize) -> UnaryPlan {
    let acc_hr: i32 = 8 + b_hr as i32;
    let b_shr: RightShift = (ceil_log2(len) - acc_hr).max(0);
    UnaryPlan {
        a_exp: b_exp + b_shr,
        b_shr,
    }
}

#[cfg(test)]
mod tests {
    use crate::prepare::{BinaryPlan, UnaryPlan, vect_complex_s32_sum_prepare, vect_s32_dot_prepare, vect_s32_energy_prepare};

    #[test]
    fn dot_short_vectors_remove_headroom() {
        assert_eq!(
            vect_s32_dot_prepare(-30, -30, 3, 5, 16),
            BinaryPlan { a_exp: -38, b_shr: -3, c_shr: -5 }
        );
    }

    #[test]
    fn dot_long_vectors_split_excess() {
        // K = 10, total_shr = 3 >= total_hr = 0.
        assert_eq!(
            vect_s32_dot_prepare(0, 0, 0, 0, 1000),
            BinaryPlan { a_exp: 33, b_shr: 1, c_shr: 2 }
        );
        // K = 9, total_shr = 2 < total_hr = 4.
        assert_eq!(
            vect_s32_dot_prepare(0, 0, 1, 3, 512),
            BinaryPlan { a_exp: 28, b_shr: 0, c_shr: -2 }
        );
    }

    #[test]
    fn energy() {
        assert_eq!(vect_s32_energy_prepare(64, -31, 4), UnaryPlan { a_exp: -40, b_shr: -4 });
        assert_eq!(vect_s32_energy_prepare(1 << 12, 0, 0), UnaryPlan { a_exp: 36, b_shr: 3 });
    }

    #[test]
    fn complex_sum() {
        assert_eq!(vect_complex_s32_sum_prepare(-20, 0, 200), UnaryPlan { a_exp: -20, b_shr: 0 });
        assert_eq!(vect_complex_s32_sum_prepare(-20, 1, 1 << 12), UnaryPlan { a_exp: -17, b_shr: 3 });
    }
}
