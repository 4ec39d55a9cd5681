use crate::{
    layouts::{Exponent, Headroom, Mantissa, RightShift},
    prepare::BinaryPlan,
};

/// Canonical additive planner.
///
/// Aligns both operands on `a_exp = max(b_exp - b_hr, c_exp - c_hr) + extra_hr`,
/// so each shifted operand keeps at least `extra_hr` bits of headroom. With
/// `extra_hr == 1` a sum or difference of the aligned operands cannot
/// overflow.
#[inline]
pub fn vect_2vec_prepare(b_exp: Exponent, c_exp: Exponent, b_hr: Headroom, c_hr: Headroom, extra_hr: Headroom) -> BinaryPlan {
    let b_min_exp: Exponent = b_exp - b_hr as i32;
    let c_min_exp: Exponent = c_exp - c_hr as i32;
    let a_exp: Exponent = b_min_exp.max(c_min_exp) + extra_hr as i32;
    BinaryPlan {
        a_exp,
        b_shr: a_exp - b_exp,
        c_shr: a_exp - c_exp,
    }
}

#[inline]
pub fn vect_add_prepare(b_exp: Exponent, c_exp: Exponent, b_hr: Headroom, c_hr: Headroom) -> BinaryPlan {
    vect_2vec_prepare(b_exp, c_exp, b_hr, c_hr, 1)
}

#[inline]
pub fn vect_sub_prepare(b_exp: Exponent, c_exp: Exponent, b_hr: Headroom, c_hr: Headroom) -> BinaryPlan {
    vect_2vec_prepare(b_exp, c_exp, b_hr, c_hr, 1)
}

/// Planner for adding the scalar `c * 2^c_exp` to a vector.
#[inline]
pub fn vect_add_scalar_prepare(b_exp: Exponent, c_exp: Exponent, b_hr: Headroom, c_hr: Headroom) -> BinaryPlan {
    vect_2vec_prepare(b_exp, c_exp, b_hr, c_hr, 1)
}

/// Planner for element-wise max/min of two vectors.
#[inline]
pub fn vect_elementwise_prepare(b_exp: Exponent, c_exp: Exponent, b_hr: Headroom, c_hr: Headroom) -> BinaryPlan {
    vect_2vec_prepare(b_exp, c_exp, b_hr, c_hr, 1)
}

impl BinaryPlan {
    /// Replaces the output exponent of an additive plan by `a_exp` and
    /// re-derives the shifts. Choosing an exponent below the planned one may
    /// saturate.
    #[inline]
    pub fn with_exponent(a_exp: Exponent, b_exp: Exponent, c_exp: Exponent) -> Self {
        BinaryPlan {
            a_exp,
            b_shr: a_exp - b_exp,
            c_shr: a_exp - c_exp,
        }
    }
}

/// Outcome of planning a clip against `[lower, upper] * 2^bound_exp`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipPlan<T> {
    /// Every output element takes `value * 2^exp`.
    Fill { exp: Exponent, value: T },
    /// Shift the input by `b_shr` and clamp it to `[lower, upper]`, both
    /// expressed at `a_exp`.
    Clip {
        a_exp: Exponent,
        b_shr: RightShift,
        lower: T,
        upper: T,
    },
}

/// Clip planner: keeps the input exponent and moves the bounds onto it.
///
/// Bounds moved left saturate to `[MIN, MAX]`; bounds moved right are rounded
/// inwards (upper down, lower up). A bound that saturates past the input
/// range decides every output element.
pub fn vect_clip_prepare<T: Mantissa>(b_exp: Exponent, bound_exp: Exponent, lower: T, upper: T) -> ClipPlan<T> {
    assert!(lower <= upper, "clip: lower bound {lower} > upper bound {upper}");
    let a_exp: Exponent = b_exp;
    let bound_shr: RightShift = a_exp - bound_exp;
    let (lb, ub): (T, T) = if bound_shr < 0 {
        let shl: u32 = bound_shr.unsigned_abs().min(T::BITS);
        (
            T::sat_from_i64(lower.to_i64() << shl),
            T::sat_from_i64(upper.to_i64() << shl),
        )
    } else {
        let shr: u32 = bound_shr.unsigned_abs().min(T::BITS);
        (
            T::sat_from_i64((lower.to_i64() + ((1i64 << shr) - 1)) >> shr),
            T::sat_from_i64(upper.to_i64() >> shr),
        )
    };

    if ub == T::MIN {
        ClipPlan::Fill {
            exp: bound_exp,
            value: upper,
        }
    } else if lb == T::MAX {
        ClipPlan::Fill {
            exp: bound_exp,
            value: lower,
        }
    } else if ub <= lb {
        // At most one value at the input resolution lies within the bounds.
        ClipPlan::Fill { exp: a_exp, value: ub }
    } else {
        ClipPlan::Clip {
            a_exp,
            b_shr: 0,
            lower: lb,
            upper: ub,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prepare::{BinaryPlan, ClipPlan, vect_add_prepare, vect_clip_prepare};

    #[test]
    fn add_plan_example() {
        let plan: BinaryPlan = vect_add_prepare(-4, -2, 3, 5);
        assert_eq!(plan, BinaryPlan { a_exp: -6, b_shr: -2, c_shr: -4 });
    }

    #[test]
    fn override_rederives_shifts() {
        let plan: BinaryPlan = BinaryPlan::with_exponent(-3, -4, -2);
        assert_eq!(plan, BinaryPlan { a_exp: -3, b_shr: 1, c_shr: -1 });
    }

    #[test]
    fn clip_plans() {
        assert_eq!(
            vect_clip_prepare::<i32>(-10, -8, -3, 5),
            ClipPlan::Clip { a_exp: -10, b_shr: 0, lower: -12, upper: 20 }
        );
        assert_eq!(
            vect_clip_prepare::<i32>(0, -4, -17, 33),
            ClipPlan::Clip { a_exp: 0, b_shr: 0, lower: -1, upper: 2 }
        );
        assert_eq!(vect_clip_prepare::<i16>(-30, 0, -5, -2), ClipPlan::Fill { exp: 0, value: -2 });
        assert_eq!(vect_clip_prepare::<i16>(-30, 0, 2, 5), ClipPlan::Fill { exp: 0, value: 2 });
        assert_eq!(vect_clip_prepare::<i16>(0, -8, 1, 3), ClipPlan::Fill { exp: 0, value: 0 });
    }

    #[test]
    fn clip_bounds_far_below_input_resolution() {
        assert_eq!(vect_clip_prepare::<i32>(0, -100, -5, 5), ClipPlan::Fill { exp: 0, value: 0 });
        assert_eq!(vect_clip_prepare::<i32>(0, -64, 1, i32::MAX), ClipPlan::Fill { exp: 0, value: 0 });
        assert_eq!(
            vect_clip_prepare::<i16>(4, -60, -i16::MAX, 7),
            ClipPlan::Fill { exp: 4, value: 0 }
        );
    }
}
