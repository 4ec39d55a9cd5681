use itertools::izip;

use crate::{
    layouts::{Mantissa, RightShift},
    reference::shift_sat,
};

/// Square root of one mantissa interpreted with `BITS - 2` fractional bits:
/// `floor(sqrt(x * 2^(BITS-2)))`, refined one bit at a time from bit
/// `BITS - 2` down for `depth` bits. Non-positive inputs give 0.
#[inline(always)]
pub fn sqrt_bitwise<T: Mantissa>(x: T, depth: u32) -> T {
    let frac: u32 = T::BITS - 2;
    let v: i64 = x.to_i64();
    if v <= 0 {
        return T::ZERO;
    }
    let target: i64 = v << frac;
    let mut r: i64 = 0;
    for i in 0..depth.min(frac + 1) {
        let t: i64 = r | (1i64 << (frac - i));
        if t * t <= target {
            r = t;
        }
    }
    T::sat_from_i64(r)
}

/// `res[k] = sqrt(a[k] >> a_shr)` with `BITS - 2` fractional bits.
#[inline(always)]
pub fn vect_sqrt_ref<T: Mantissa>(res: &mut [T], a: &[T], a_shr: RightShift, depth: u32) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| *r = sqrt_bitwise(shift_sat(x, a_shr), depth));
}

/// `res[k] = 2^scale / a[k]`, truncated toward zero and saturated. A zero
/// divisor gives `MAX`.
#[inline(always)]
pub fn vect_inverse_ref<T: Mantissa>(res: &mut [T], a: &[T], scale: u32) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert!(scale < 63);
    }
    let dividend: i64 = 1i64 << scale;
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| {
        let d: i64 = x.to_i64();
        *r = if d == 0 { T::MAX } else { T::sat_from_i64(dividend / d) };
    });
}

/// Smallest saturated magnitude `min |a[k]|`.
#[inline(always)]
pub fn vect_min_abs_ref<T: Mantissa>(a: &[T]) -> T {
    T::sat_from_i64(a.iter().map(|x| x.to_i64().abs()).min().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use crate::reference::{sqrt_bitwise, vect_inverse_ref, vect_min_abs_ref, vect_sqrt_ref};

    #[test]
    fn sqrt_of_exact_squares() {
        assert_eq!(sqrt_bitwise(1i32 << 30, 31), 1 << 30);
        assert_eq!(sqrt_bitwise(1i32 << 28, 31), 1 << 29);
        assert_eq!(sqrt_bitwise(1i16 << 14, 15), 1 << 14);
        assert_eq!(sqrt_bitwise(1i16 << 12, 15), 1 << 13);
        assert_eq!(sqrt_bitwise(-5i32, 31), 0);
        assert_eq!(sqrt_bitwise(0i16, 15), 0);
    }

    #[test]
    fn sqrt_is_floor_and_depth_truncates() {
        let x: i32 = 3 << 28;
        let r: i64 = sqrt_bitwise(x, 31) as i64;
        let target: i64 = (x as i64) << 30;
        assert!(r * r <= target && (r + 1) * (r + 1) > target);
        let shallow: i32 = sqrt_bitwise(x, 4);
        assert_eq!(shallow & ((1 << 27) - 1), 0);
        assert!(shallow as i64 <= r);

        let mut res: [i16; 2] = [0; 2];
        vect_sqrt_ref(&mut res, &[1 << 13, -1], 1, 15);
        assert_eq!(res, [1 << 13, 0]);
    }

    #[test]
    fn inverse_and_zero_divisor() {
        let mut res: [i32; 3] = [0; 3];
        vect_inverse_ref(&mut res, &[1 << 30, -(1 << 29), 0], 60);
        assert_eq!(res, [1 << 30, -i32::MAX, i32::MAX]);
        assert_eq!(vect_min_abs_ref(&[-7i16, 9, i16::MIN]), 7);
    }
}
