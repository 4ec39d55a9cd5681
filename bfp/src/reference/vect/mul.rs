use itertools::izip;

use crate::{
    layouts::{Mantissa, RightShift},
    reference::{mul_sat, mul_shr_sat, shift_i64, shift_sat},
};

/// `res[k] = (a[k] >> a_shr) * (b[k] >> b_shr) >> 30`, saturated.
#[inline(always)]
pub fn vect_s32_mul_ref(res: &mut [i32], a: &[i32], b: &[i32], a_shr: RightShift, b_shr: RightShift) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }
    izip!(res.iter_mut(), a.iter(), b.iter()).for_each(|(r, &x, &y)| *r = mul_sat(shift_sat(x, a_shr), shift_sat(y, b_shr)));
}

#[inline(always)]
pub fn vect_s32_mul_inplace_ref(res: &mut [i32], a: &[i32], res_shr: RightShift, a_shr: RightShift) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| *r = mul_sat(shift_sat(*r, res_shr), shift_sat(x, a_shr)));
}

/// `res[k] = (a[k] >> a_shr) * c >> 30`, saturated; `c` is already shifted.
#[inline(always)]
pub fn vect_s32_scale_ref(res: &mut [i32], a: &[i32], c: i32, a_shr: RightShift) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| *r = mul_sat(shift_sat(x, a_shr), c));
}

#[inline(always)]
pub fn vect_s32_scale_inplace_ref(res: &mut [i32], c: i32, res_shr: RightShift) {
    res.iter_mut().for_each(|r| *r = mul_sat(shift_sat(*r, res_shr), c));
}

/// `res[k] = a[k] * b[k] >> a_shr`, computed on the 32-bit product and
/// saturated to 16 bits.
#[inline(always)]
pub fn vect_s16_mul_ref(res: &mut [i16], a: &[i16], b: &[i16], a_shr: RightShift) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }
    izip!(res.iter_mut(), a.iter(), b.iter()).for_each(|(r, &x, &y)| *r = mul_shr_sat(x, y, a_shr));
}

#[inline(always)]
pub fn vect_s16_mul_inplace_ref(res: &mut [i16], a: &[i16], a_shr: RightShift) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| *r = mul_shr_sat(*r, x, a_shr));
}

/// `res[k] = a[k] * c >> a_shr`, saturated to 16 bits.
#[inline(always)]
pub fn vect_s16_scale_ref(res: &mut [i16], a: &[i16], c: i16, a_shr: RightShift) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| *r = mul_shr_sat(x, c, a_shr));
}

#[inline(always)]
pub fn vect_s16_scale_inplace_ref(res: &mut [i16], c: i16, a_shr: RightShift) {
    res.iter_mut().for_each(|r| *r = mul_shr_sat(*r, c, a_shr));
}

/// `acc[k] = sat(acc[k] >> acc_shr +/- (b[k] >> b_shr) * (c[k] >> c_shr) >> 30)`.
#[inline(always)]
fn vect_s32_macc_inner(
    acc: &mut [i32],
    b: &[i32],
    c: &[i32],
    acc_shr: RightShift,
    b_shr: RightShift,
    c_shr: RightShift,
    negate: bool,
) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(acc.len(), b.len());
        assert_eq!(acc.len(), c.len());
    }
    izip!(acc.iter_mut(), b.iter(), c.iter()).for_each(|(r, &x, &y)| {
        let p: i64 = mul_sat(shift_sat(x, b_shr), shift_sat(y, c_shr)) as i64;
        let a: i64 = shift_sat(*r, acc_shr) as i64;
        *r = i32::sat_from_i64(if negate { a - p } else { a + p });
    });
}

#[inline(always)]
pub fn vect_s32_macc_ref(acc: &mut [i32], b: &[i32], c: &[i32], acc_shr: RightShift, b_shr: RightShift, c_shr: RightShift) {
    vect_s32_macc_inner(acc, b, c, acc_shr, b_shr, c_shr, false)
}

#[inline(always)]
pub fn vect_s32_nmacc_ref(acc: &mut [i32], b: &[i32], c: &[i32], acc_shr: RightShift, b_shr: RightShift, c_shr: RightShift) {
    vect_s32_macc_inner(acc, b, c, acc_shr, b_shr, c_shr, true)
}

/// `acc[k] = sat16(acc[k] >> acc_shr +/- sat16(b[k] * c[k] >> bc_shr))`.
#[inline(always)]
fn vect_s16_macc_inner(acc: &mut [i16], b: &[i16], c: &[i16], acc_shr: RightShift, bc_shr: RightShift, negate: bool) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(acc.len(), b.len());
        assert_eq!(acc.len(), c.len());
    }
    izip!(acc.iter_mut(), b.iter(), c.iter()).for_each(|(r, &x, &y)| {
        let p: i64 = i16::sat_from_i64(shift_i64(x as i64 * y as i64, bc_shr)) as i64;
        let a: i64 = shift_sat(*r, acc_shr) as i64;
        *r = i16::sat_from_i64(if negate { a - p } else { a + p });
    });
}

#[inline(always)]
pub fn vect_s16_macc_ref(acc: &mut [i16], b: &[i16], c: &[i16], acc_shr: RightShift, bc_shr: RightShift) {
    vect_s16_macc_inner(acc, b, c, acc_shr, bc_shr, false)
}

#[inline(always)]
pub fn vect_s16_nmacc_ref(acc: &mut [i16], b: &[i16], c: &[i16], acc_shr: RightShift, bc_shr: RightShift) {
    vect_s16_macc_inner(acc, b, c, acc_shr, bc_shr, true)
}

#[cfg(test)]
mod tests {
    use crate::reference::{vect_s16_macc_ref, vect_s16_mul_ref, vect_s32_mul_ref, vect_s32_nmacc_ref, vect_s32_scale_ref};

    #[test]
    fn s32_mul_and_scale() {
        let one: i32 = 1 << 30;
        let a: [i32; 2] = [one, -one];
        let b: [i32; 2] = [one >> 1, one];
        let mut res: [i32; 2] = [0; 2];
        vect_s32_mul_ref(&mut res, &a, &b, 1, 0);
        assert_eq!(res, [one >> 2, -(one >> 1)]);
        vect_s32_scale_ref(&mut res, &a, 3, -1);
        assert_eq!(res, [6, -6]);
    }

    #[test]
    fn s16_mul_uses_product_shift() {
        let a: [i16; 2] = [300, -300];
        let b: [i16; 2] = [100, 100];
        let mut res: [i16; 2] = [0; 2];
        vect_s16_mul_ref(&mut res, &a, &b, 4);
        assert_eq!(res, [1875, -1875]);
        vect_s16_mul_ref(&mut res, &a, &b, 0);
        assert_eq!(res, [30000, -30000]);

        let b: [i16; 2] = [200, 200];
        vect_s16_mul_ref(&mut res, &a, &b, 0);
        assert_eq!(res, [i16::MAX, -i16::MAX]);
        vect_s16_mul_ref(&mut res, &a, &b, 1);
        assert_eq!(res, [30000, -30000]);
    }

    #[test]
    fn macc_combines_accumulator_and_product() {
        let one: i32 = 1 << 30;
        let mut acc: [i32; 1] = [100];
        vect_s32_nmacc_ref(&mut acc, &[one], &[40], -1, 0, 0);
        assert_eq!(acc, [160]);
        let mut acc16: [i16; 2] = [10, -10];
        vect_s16_macc_ref(&mut acc16, &[64, 64], &[64, -64], 1, 8);
        assert_eq!(acc16, [21, -21]);
    }
}
