use itertools::izip;

use crate::{
    layouts::{Headroom, LeftShift, Mantissa, RightShift},
    reference::{headroom, shift_sat, vect_headroom},
};

/// `res[k] = a[k] << shl` (saturating left, rounding right). Returns the
/// headroom of `res`.
#[inline(always)]
pub fn vect_shl_ref<T: Mantissa>(res: &mut [T], a: &[T], shl: LeftShift) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    let shr: RightShift = shl.saturating_neg();
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| *r = shift_sat(x, shr));
    vect_headroom(res)
}

#[inline(always)]
pub fn vect_shl_inplace_ref<T: Mantissa>(res: &mut [T], shl: LeftShift) -> Headroom {
    let shr: RightShift = shl.saturating_neg();
    res.iter_mut().for_each(|r| *r = shift_sat(*r, shr));
    vect_headroom(res)
}

/// `res[k] = sat(a[k] >> a_shr + b[k] >> b_shr)`.
#[inline(always)]
pub fn vect_add_ref<T: Mantissa>(res: &mut [T], a: &[T], b: &[T], a_shr: RightShift, b_shr: RightShift) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }
    izip!(res.iter_mut(), a.iter(), b.iter()).for_each(|(r, &x, &y)| {
        *r = T::sat_from_i64(shift_sat(x, a_shr).to_i64() + shift_sat(y, b_shr).to_i64());
    });
    vect_headroom(res)
}

/// `res[k] = sat(res[k] >> res_shr + a[k] >> a_shr)`.
#[inline(always)]
pub fn vect_add_inplace_ref<T: Mantissa>(res: &mut [T], a: &[T], res_shr: RightShift, a_shr: RightShift) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| {
        *r = T::sat_from_i64(shift_sat(*r, res_shr).to_i64() + shift_sat(x, a_shr).to_i64());
    });
    vect_headroom(res)
}

/// `res[k] = sat(a[k] >> a_shr - b[k] >> b_shr)`.
#[inline(always)]
pub fn vect_sub_ref<T: Mantissa>(res: &mut [T], a: &[T], b: &[T], a_shr: RightShift, b_shr: RightShift) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }
    izip!(res.iter_mut(), a.iter(), b.iter()).for_each(|(r, &x, &y)| {
        *r = T::sat_from_i64(shift_sat(x, a_shr).to_i64() - shift_sat(y, b_shr).to_i64());
    });
    vect_headroom(res)
}

/// `res[k] = sat(res[k] >> res_shr - a[k] >> a_shr)`.
#[inline(always)]
pub fn vect_sub_inplace_ref<T: Mantissa>(res: &mut [T], a: &[T], res_shr: RightShift, a_shr: RightShift) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| {
        *r = T::sat_from_i64(shift_sat(*r, res_shr).to_i64() - shift_sat(x, a_shr).to_i64());
    });
    vect_headroom(res)
}

/// `res[k] = sat(a[k] >> a_shr + c)`; `c` is already aligned to the output
/// exponent.
#[inline(always)]
pub fn vect_add_scalar_ref<T: Mantissa>(res: &mut [T], a: &[T], c: T, a_shr: RightShift) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| {
        *r = T::sat_from_i64(shift_sat(x, a_shr).to_i64() + c.to_i64());
    });
    vect_headroom(res)
}

#[inline(always)]
pub fn vect_add_scalar_inplace_ref<T: Mantissa>(res: &mut [T], c: T, res_shr: RightShift) -> Headroom {
    res.iter_mut()
        .for_each(|r| *r = T::sat_from_i64(shift_sat(*r, res_shr).to_i64() + c.to_i64()));
    vect_headroom(res)
}

/// Sets every element to `value` and returns its headroom.
#[inline(always)]
pub fn vect_set_ref<T: Mantissa>(res: &mut [T], value: T) -> Headroom {
    res.fill(value);
    headroom(value)
}

/// `res[k] = |a[k]|`, saturating the most negative value to `MAX`.
#[inline(always)]
pub fn vect_abs_ref<T: Mantissa>(res: &mut [T], a: &[T]) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| *r = T::sat_from_i64(x.to_i64().abs()));
    vect_headroom(res)
}

#[inline(always)]
pub fn vect_abs_inplace_ref<T: Mantissa>(res: &mut [T]) -> Headroom {
    res.iter_mut().for_each(|r| *r = T::sat_from_i64(r.to_i64().abs()));
    vect_headroom(res)
}

/// `res[k] = max(a[k], 0)`.
#[inline(always)]
pub fn vect_rect_ref<T: Mantissa>(res: &mut [T], a: &[T]) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| *r = x.max(T::ZERO));
    vect_headroom(res)
}

#[inline(always)]
pub fn vect_rect_inplace_ref<T: Mantissa>(res: &mut [T]) -> Headroom {
    res.iter_mut().for_each(|r| *r = (*r).max(T::ZERO));
    vect_headroom(res)
}

/// `res[k] = clamp(a[k] >> a_shr, lower, upper)`.
#[inline(always)]
pub fn vect_clip_ref<T: Mantissa>(res: &mut [T], a: &[T], lower: T, upper: T, a_shr: RightShift) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert!(lower <= upper);
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| {
        let y: T = shift_sat(x, a_shr);
        *r = if y <= lower {
            lower
        } else if y >= upper {
            upper
        } else {
            y
        };
    });
    vect_headroom(res)
}

/// `res[k] = max(a[k] >> a_shr, b[k] >> b_shr)`.
#[inline(always)]
pub fn vect_max_elementwise_ref<T: Mantissa>(
    res: &mut [T],
    a: &[T],
    b: &[T],
    a_shr: RightShift,
    b_shr: RightShift,
) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }
    izip!(res.iter_mut(), a.iter(), b.iter()).for_each(|(r, &x, &y)| *r = shift_sat(x, a_shr).max(shift_sat(y, b_shr)));
    vect_headroom(res)
}

/// `res[k] = min(a[k] >> a_shr, b[k] >> b_shr)`.
#[inline(always)]
pub fn vect_min_elementwise_ref<T: Mantissa>(
    res: &mut [T],
    a: &[T],
    b: &[T],
    a_shr: RightShift,
    b_shr: RightShift,
) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }
    izip!(res.iter_mut(), a.iter(), b.iter()).for_each(|(r, &x, &y)| *r = shift_sat(x, a_shr).min(shift_sat(y, b_shr)));
    vect_headroom(res)
}

#[cfg(test)]
mod tests {
    use crate::reference::{
        vect_abs_ref, vect_add_ref, vect_add_scalar_ref, vect_clip_ref, vect_max_elementwise_ref, vect_rect_inplace_ref,
        vect_shl_ref, vect_sub_inplace_ref,
    };

    #[test]
    fn add_aligns_and_saturates() {
        let a: [i16; 3] = [100, -100, 0x7FFF];
        let b: [i16; 3] = [3, 3, 0x7FFF];
        let mut res: [i16; 3] = [0; 3];
        let hr = vect_add_ref(&mut res, &a, &b, 1, -2);
        assert_eq!(res, [62, -38, 0x7FFF]);
        assert_eq!(hr, 0);
    }

    #[test]
    fn sub_inplace() {
        let mut res: [i32; 2] = [10, -10];
        let a: [i32; 2] = [4, 4];
        vect_sub_inplace_ref(&mut res, &a, -1, 1);
        assert_eq!(res, [18, -22]);
    }

    #[test]
    fn add_scalar() {
        let a: [i16; 2] = [8, -8];
        let mut res: [i16; 2] = [0; 2];
        vect_add_scalar_ref(&mut res, &a, 5, 2);
        assert_eq!(res, [7, 3]);
    }

    #[test]
    fn abs_saturates_most_negative() {
        let a: [i16; 3] = [i16::MIN, -5, 5];
        let mut res: [i16; 3] = [0; 3];
        vect_abs_ref(&mut res, &a);
        assert_eq!(res, [i16::MAX, 5, 5]);
    }

    #[test]
    fn rect_and_clip() {
        let mut res: [i32; 4] = [-3, 0, 9, -1];
        let hr = vect_rect_inplace_ref(&mut res);
        assert_eq!(res, [0, 0, 9, 0]);
        assert_eq!(hr, 27);
        let a: [i32; 4] = [-40, -8, 8, 40];
        let mut out: [i32; 4] = [0; 4];
        vect_clip_ref(&mut out, &a, -5, 6, 1);
        assert_eq!(out, [-5, -4, 4, 6]);
    }

    #[test]
    fn shl_and_max() {
        let a: [i16; 2] = [3, -0x2000];
        let mut res: [i16; 2] = [0; 2];
        let hr = vect_shl_ref(&mut res, &a, 2);
        assert_eq!(res, [12, -0x7FFF]);
        assert_eq!(hr, 0);
        let b: [i16; 2] = [7, 7];
        vect_max_elementwise_ref(&mut res, &a, &b, 0, 1);
        assert_eq!(res, [4, 4]);
    }
}
