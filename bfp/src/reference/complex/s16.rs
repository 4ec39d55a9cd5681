use itertools::izip;

use crate::{
    layouts::{ComplexS16, ComplexS32, ComplexS64, Headroom, Mantissa, RightShift},
    reference::{ComplexMacc, shift_i64, shift_sat, vect_complex_s32_headroom, vect_headroom},
};

/// Exact complex product; with `conj` the second operand is conjugated.
#[inline(always)]
fn complex_wide(b_re: i16, b_im: i16, c_re: i16, c_im: i16, conj: bool) -> (i64, i64) {
    let (br, bi, cr, ci) = (b_re as i64, b_im as i64, c_re as i64, c_im as i64);
    if conj {
        (br * cr + bi * ci, bi * cr - br * ci)
    } else {
        (br * cr - bi * ci, br * ci + bi * cr)
    }
}

#[inline(always)]
fn sat16_shr(x: i64, shr: RightShift) -> i16 {
    i16::sat_from_i64(shift_i64(x, shr))
}

/// `res = (a * b) >> sat` per element with a real `b`.
#[inline(always)]
pub fn vect_complex_s16_real_mul_ref(
    res_re: &mut [i16],
    res_im: &mut [i16],
    a_re: &[i16],
    a_im: &[i16],
    b: &[i16],
    sat: RightShift,
) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res_re.len(), a_re.len());
        assert_eq!(res_im.len(), a_re.len());
        assert_eq!(a_im.len(), a_re.len());
        assert_eq!(b.len(), a_re.len());
    }
    izip!(res_re.iter_mut(), res_im.iter_mut(), a_re.iter(), a_im.iter(), b.iter()).for_each(|(rr, ri, &xr, &xi, &y)| {
        *rr = sat16_shr(xr as i64 * y as i64, sat);
        *ri = sat16_shr(xi as i64 * y as i64, sat);
    });
    vect_headroom(res_re).min(vect_headroom(res_im))
}

/// Element-wise complex product shifted by `sat`; with `conj` the second
/// operand is conjugated.
#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub fn vect_complex_s16_mul_ref(
    res_re: &mut [i16],
    res_im: &mut [i16],
    a_re: &[i16],
    a_im: &[i16],
    b_re: &[i16],
    b_im: &[i16],
    sat: RightShift,
    conj: bool,
) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res_re.len(), a_re.len());
        assert_eq!(res_im.len(), a_re.len());
        assert_eq!(a_im.len(), a_re.len());
        assert_eq!(b_re.len(), a_re.len());
        assert_eq!(b_im.len(), a_re.len());
    }
    for k in 0..res_re.len() {
        let (re, im) = complex_wide(a_re[k], a_im[k], b_re[k], b_im[k], conj);
        res_re[k] = sat16_shr(re, sat);
        res_im[k] = sat16_shr(im, sat);
    }
    vect_headroom(res_re).min(vect_headroom(res_im))
}

/// `res = a * c >> sat` with a complex scalar `c`.
#[inline(always)]
pub fn vect_complex_s16_scale_ref(
    res_re: &mut [i16],
    res_im: &mut [i16],
    a_re: &[i16],
    a_im: &[i16],
    c: ComplexS16,
    sat: RightShift,
) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res_re.len(), a_re.len());
        assert_eq!(res_im.len(), a_re.len());
        assert_eq!(a_im.len(), a_re.len());
    }
    izip!(res_re.iter_mut(), res_im.iter_mut(), a_re.iter(), a_im.iter()).for_each(|(rr, ri, &xr, &xi)| {
        let (re, im) = complex_wide(xr, xi, c.re, c.im, false);
        *rr = sat16_shr(re, sat);
        *ri = sat16_shr(im, sat);
    });
    vect_headroom(res_re).min(vect_headroom(res_im))
}

/// `res[k] = (re^2 + im^2) >> sat`.
#[inline(always)]
pub fn vect_complex_s16_squared_mag_ref(res: &mut [i16], a_re: &[i16], a_im: &[i16], sat: RightShift) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a_re.len());
        assert_eq!(res.len(), a_im.len());
    }
    izip!(res.iter_mut(), a_re.iter(), a_im.iter()).for_each(|(r, &xr, &xi)| {
        *r = sat16_shr(xr as i64 * xr as i64 + xi as i64 * xi as i64, sat);
    });
    vect_headroom(res)
}

/// `res[k] = |a[k] >> a_shr|`, the floor of the Euclidean norm.
#[inline(always)]
pub fn vect_complex_s16_mag_ref(res: &mut [i16], a_re: &[i16], a_im: &[i16], a_shr: RightShift) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a_re.len());
        assert_eq!(res.len(), a_im.len());
    }
    izip!(res.iter_mut(), a_re.iter(), a_im.iter()).for_each(|(r, &xr, &xi)| {
        let xr: i64 = shift_sat(xr, a_shr) as i64;
        let xi: i64 = shift_sat(xi, a_shr) as i64;
        *r = i16::sat_from_i64(((xr * xr + xi * xi) as u64).isqrt() as i64);
    });
    vect_headroom(res)
}

/// Exact sum of the elements.
#[inline(always)]
pub fn vect_complex_s16_sum_ref(a_re: &[i16], a_im: &[i16]) -> ComplexS64 {
    ComplexS64::new(
        a_re.iter().map(|&x| x as i64).sum(),
        a_im.iter().map(|&x| x as i64).sum(),
    )
}

/// `acc = (acc >> acc_shr) +/- sat16((b * c) >> bc_shr)`, optionally
/// conjugating `c`.
#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub fn vect_complex_s16_macc_ref(
    acc_re: &mut [i16],
    acc_im: &mut [i16],
    b_re: &[i16],
    b_im: &[i16],
    c_re: &[i16],
    c_im: &[i16],
    acc_shr: RightShift,
    bc_shr: RightShift,
    kind: ComplexMacc,
) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(acc_im.len(), acc_re.len());
        assert_eq!(b_re.len(), acc_re.len());
        assert_eq!(b_im.len(), acc_re.len());
        assert_eq!(c_re.len(), acc_re.len());
        assert_eq!(c_im.len(), acc_re.len());
    }
    for k in 0..acc_re.len() {
        let (re, im) = complex_wide(b_re[k], b_im[k], c_re[k], c_im[k], kind.conj());
        let (p_re, p_im) = (sat16_shr(re, bc_shr) as i64, sat16_shr(im, bc_shr) as i64);
        let (a_re, a_im) = (shift_sat(acc_re[k], acc_shr) as i64, shift_sat(acc_im[k], acc_shr) as i64);
        if kind.negate() {
            acc_re[k] = i16::sat_from_i64(a_re - p_re);
            acc_im[k] = i16::sat_from_i64(a_im - p_im);
        } else {
            acc_re[k] = i16::sat_from_i64(a_re + p_re);
            acc_im[k] = i16::sat_from_i64(a_im + p_im);
        }
    }
    vect_headroom(acc_re).min(vect_headroom(acc_im))
}

/// `res = conj(a)`.
#[inline(always)]
pub fn vect_complex_s16_conjugate_ref(res_re: &mut [i16], res_im: &mut [i16], a_re: &[i16], a_im: &[i16]) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res_re.len(), a_re.len());
        assert_eq!(res_im.len(), a_im.len());
    }
    res_re.copy_from_slice(a_re);
    izip!(res_im.iter_mut(), a_im.iter()).for_each(|(r, &x)| *r = i16::sat_from_i64(-(x as i64)));
    vect_headroom(res_re).min(vect_headroom(res_im))
}

/// Interleaves split 16-bit parts into 32-bit complex elements, unshifted.
#[inline(always)]
pub fn vect_complex_s16_to_s32_ref(res: &mut [ComplexS32], a_re: &[i16], a_im: &[i16]) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a_re.len());
        assert_eq!(res.len(), a_im.len());
    }
    izip!(res.iter_mut(), a_re.iter(), a_im.iter()).for_each(|(r, &xr, &xi)| *r = ComplexS32::new(xr as i32, xi as i32));
    vect_complex_s32_headroom(res)
}

#[cfg(test)]
mod tests {
    use crate::{
        layouts::ComplexS32,
        reference::{
            ComplexMacc, vect_complex_s16_conjugate_ref, vect_complex_s16_macc_ref, vect_complex_s16_mag_ref,
            vect_complex_s16_mul_ref, vect_complex_s16_squared_mag_ref, vect_complex_s16_to_s32_ref,
        },
    };

    #[test]
    fn mul_and_conj_mul() {
        let (a_re, a_im) = ([3i16], [4i16]);
        let (b_re, b_im) = ([1i16 << 8], [-(2i16 << 8)]);
        let (mut re, mut im) = ([0i16], [0i16]);
        vect_complex_s16_mul_ref(&mut re, &mut im, &a_re, &a_im, &b_re, &b_im, 8, false);
        assert_eq!((re[0], im[0]), (11, -2));
        vect_complex_s16_mul_ref(&mut re, &mut im, &a_re, &a_im, &b_re, &b_im, 8, true);
        assert_eq!((re[0], im[0]), (-5, 10));
    }

    #[test]
    fn magnitudes() {
        let (a_re, a_im) = ([300i16, 0], [-400i16, 0]);
        let mut res: [i16; 2] = [0; 2];
        vect_complex_s16_mag_ref(&mut res, &a_re, &a_im, 0);
        assert_eq!(res, [500, 0]);
        vect_complex_s16_squared_mag_ref(&mut res, &a_re, &a_im, 4);
        assert_eq!(res, [15625, 0]);
    }

    #[test]
    fn macc_and_conjugate() {
        let (mut acc_re, mut acc_im) = ([100i16], [-100i16]);
        vect_complex_s16_macc_ref(&mut acc_re, &mut acc_im, &[2], &[0], &[5], &[7], 0, 0, ComplexMacc::Nmacc);
        assert_eq!((acc_re[0], acc_im[0]), (90, -114));
        let (mut re, mut im) = ([0i16], [0i16]);
        vect_complex_s16_conjugate_ref(&mut re, &mut im, &[1], &[i16::MIN]);
        assert_eq!((re[0], im[0]), (1, i16::MAX));
    }

    #[test]
    fn widening_keeps_values() {
        let mut res: [ComplexS32; 2] = [ComplexS32::default(); 2];
        let hr = vect_complex_s16_to_s32_ref(&mut res, &[-1, 0x4000], &[7, -0x4000]);
        assert_eq!(res[1], ComplexS32::new(0x4000, -0x4000));
        assert_eq!(hr, 16);
    }
}
