use itertools::izip;

use crate::{
    layouts::{ComplexS32, ComplexS64, Headroom, LeftShift, Mantissa, RightShift},
    reference::{
        ACC_BITS, ComplexMacc, mul_sat, round_shr_i64, sat_bits, shift_i64, shift_sat, vect_complex_s32_headroom, vect_headroom,
    },
};

#[inline(always)]
fn shifted(x: ComplexS32, shr: RightShift) -> ComplexS32 {
    ComplexS32::new(shift_sat(x.re, shr), shift_sat(x.im, shr))
}

#[inline(always)]
fn q30(x: i32, y: i32) -> i64 {
    round_shr_i64(x as i64 * y as i64, 30)
}

/// Complex product of pre-shifted operands, each partial product rounded by 30
/// bits. With `conj` the second operand is conjugated.
#[inline(always)]
fn complex_q30(b: ComplexS32, c: ComplexS32, conj: bool) -> (i64, i64) {
    if conj {
        (q30(b.re, c.re) + q30(b.im, c.im), q30(b.im, c.re) - q30(b.re, c.im))
    } else {
        (q30(b.re, c.re) - q30(b.im, c.im), q30(b.re, c.im) + q30(b.im, c.re))
    }
}

#[inline(always)]
fn sat_pair(p: (i64, i64)) -> ComplexS32 {
    ComplexS32::new(i32::sat_from_i64(p.0), i32::sat_from_i64(p.1))
}

#[inline(always)]
pub fn vect_complex_s32_shl_ref(res: &mut [ComplexS32], a: &[ComplexS32], shl: LeftShift) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    let shr: RightShift = shl.saturating_neg();
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| *r = shifted(x, shr));
    vect_complex_s32_headroom(res)
}

#[inline(always)]
pub fn vect_complex_s32_shl_inplace_ref(res: &mut [ComplexS32], shl: LeftShift) -> Headroom {
    let shr: RightShift = shl.saturating_neg();
    res.iter_mut().for_each(|r| *r = shifted(*r, shr));
    vect_complex_s32_headroom(res)
}

/// `res[k] = (a[k] >> a_shr) + (b[k] >> b_shr)`, or the difference when
/// `sub` is set.
#[inline(always)]
fn vect_complex_s32_add_sub(
    res: &mut [ComplexS32],
    a: &[ComplexS32],
    b: &[ComplexS32],
    a_shr: RightShift,
    b_shr: RightShift,
    sub: bool,
) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }
    izip!(res.iter_mut(), a.iter(), b.iter()).for_each(|(r, &x, &y)| {
        let x: ComplexS32 = shifted(x, a_shr);
        let y: ComplexS32 = shifted(y, b_shr);
        *r = if sub {
            sat_pair((x.re as i64 - y.re as i64, x.im as i64 - y.im as i64))
        } else {
            sat_pair((x.re as i64 + y.re as i64, x.im as i64 + y.im as i64))
        };
    });
    vect_complex_s32_headroom(res)
}

#[inline(always)]
pub fn vect_complex_s32_add_ref(
    res: &mut [ComplexS32],
    a: &[ComplexS32],
    b: &[ComplexS32],
    a_shr: RightShift,
    b_shr: RightShift,
) -> Headroom {
    vect_complex_s32_add_sub(res, a, b, a_shr, b_shr, false)
}

#[inline(always)]
pub fn vect_complex_s32_sub_ref(
    res: &mut [ComplexS32],
    a: &[ComplexS32],
    b: &[ComplexS32],
    a_shr: RightShift,
    b_shr: RightShift,
) -> Headroom {
    vect_complex_s32_add_sub(res, a, b, a_shr, b_shr, true)
}

/// `res[k] = (res[k] >> res_shr) + (a[k] >> a_shr)`.
#[inline(always)]
pub fn vect_complex_s32_add_inplace_ref(res: &mut [ComplexS32], a: &[ComplexS32], res_shr: RightShift, a_shr: RightShift) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &y)| {
        let x: ComplexS32 = shifted(*r, res_shr);
        let y: ComplexS32 = shifted(y, a_shr);
        *r = sat_pair((x.re as i64 + y.re as i64, x.im as i64 + y.im as i64));
    });
    vect_complex_s32_headroom(res)
}

/// `res[k] = (res[k] >> res_shr) - (a[k] >> a_shr)`.
#[inline(always)]
pub fn vect_complex_s32_sub_inplace_ref(res: &mut [ComplexS32], a: &[ComplexS32], res_shr: RightShift, a_shr: RightShift) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &y)| {
        let x: ComplexS32 = shifted(*r, res_shr);
        let y: ComplexS32 = shifted(y, a_shr);
        *r = sat_pair((x.re as i64 - y.re as i64, x.im as i64 - y.im as i64));
    });
    vect_complex_s32_headroom(res)
}

/// `res[k] = (a[k] >> a_shr) + c`; `c` is already aligned.
#[inline(always)]
pub fn vect_complex_s32_add_scalar_ref(res: &mut [ComplexS32], a: &[ComplexS32], c: ComplexS32, a_shr: RightShift) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| {
        let x: ComplexS32 = shifted(x, a_shr);
        *r = sat_pair((x.re as i64 + c.re as i64, x.im as i64 + c.im as i64));
    });
    vect_complex_s32_headroom(res)
}

/// `res[k] = (a[k] >> a_shr) * (b[k] >> b_shr) >> 30` with a real `b`.
#[inline(always)]
pub fn vect_complex_s32_real_mul_ref(
    res: &mut [ComplexS32],
    a: &[ComplexS32],
    b: &[i32],
    a_shr: RightShift,
    b_shr: RightShift,
) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }
    izip!(res.iter_mut(), a.iter(), b.iter()).for_each(|(r, &x, &y)| {
        let x: ComplexS32 = shifted(x, a_shr);
        let y: i32 = shift_sat(y, b_shr);
        *r = ComplexS32::new(mul_sat(x.re, y), mul_sat(x.im, y));
    });
    vect_complex_s32_headroom(res)
}

/// Element-wise complex product; with `conj` the second operand is
/// conjugated.
#[inline(always)]
pub fn vect_complex_s32_mul_ref(
    res: &mut [ComplexS32],
    a: &[ComplexS32],
    b: &[ComplexS32],
    a_shr: RightShift,
    b_shr: RightShift,
    conj: bool,
) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }
    izip!(res.iter_mut(), a.iter(), b.iter()).for_each(|(r, &x, &y)| {
        *r = sat_pair(complex_q30(shifted(x, a_shr), shifted(y, b_shr), conj));
    });
    vect_complex_s32_headroom(res)
}

/// `res[k] = (a[k] >> a_shr) * c >> 30` with a real scalar `c`, already
/// shifted.
#[inline(always)]
pub fn vect_complex_s32_real_scale_ref(res: &mut [ComplexS32], a: &[ComplexS32], c: i32, a_shr: RightShift) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| {
        let x: ComplexS32 = shifted(x, a_shr);
        *r = ComplexS32::new(mul_sat(x.re, c), mul_sat(x.im, c));
    });
    vect_complex_s32_headroom(res)
}

/// `res[k] = (a[k] >> a_shr) * c` with a complex scalar `c`, already
/// shifted.
#[inline(always)]
pub fn vect_complex_s32_scale_ref(res: &mut [ComplexS32], a: &[ComplexS32], c: ComplexS32, a_shr: RightShift) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| *r = sat_pair(complex_q30(shifted(x, a_shr), c, false)));
    vect_complex_s32_headroom(res)
}

/// `res[k] = (re^2 + im^2) >> 30` of the shifted input.
#[inline(always)]
pub fn vect_complex_s32_squared_mag_ref(res: &mut [i32], a: &[ComplexS32], a_shr: RightShift) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| {
        let x: ComplexS32 = shifted(x, a_shr);
        *r = i32::sat_from_i64(q30(x.re, x.re) + q30(x.im, x.im));
    });
    vect_headroom(res)
}

/// `res[k] = |a[k] >> a_shr|`, the floor of the Euclidean norm.
#[inline(always)]
pub fn vect_complex_s32_mag_ref(res: &mut [i32], a: &[ComplexS32], a_shr: RightShift) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| {
        let x: ComplexS32 = shifted(x, a_shr);
        let sq: u64 = (x.re as i64 * x.re as i64 + x.im as i64 * x.im as i64) as u64;
        *r = i32::sat_from_i64(sq.isqrt() as i64);
    });
    vect_headroom(res)
}

/// Sum of the shifted elements, each part in a saturating 40-bit accumulator.
#[inline(always)]
pub fn vect_complex_s32_sum_ref(a: &[ComplexS32], a_shr: RightShift) -> ComplexS64 {
    a.iter().fold(ComplexS64::default(), |acc, &x| {
        let x: ComplexS32 = shifted(x, a_shr);
        ComplexS64::new(
            sat_bits(acc.re + x.re as i64, ACC_BITS),
            sat_bits(acc.im + x.im as i64, ACC_BITS),
        )
    })
}

/// `acc[k] = (acc[k] >> acc_shr) +/- (b[k] >> b_shr) * (c[k] >> c_shr)`,
/// optionally conjugating `c`.
#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub fn vect_complex_s32_macc_ref(
    acc: &mut [ComplexS32],
    b: &[ComplexS32],
    c: &[ComplexS32],
    acc_shr: RightShift,
    b_shr: RightShift,
    c_shr: RightShift,
    kind: ComplexMacc,
) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(acc.len(), b.len());
        assert_eq!(acc.len(), c.len());
    }
    izip!(acc.iter_mut(), b.iter(), c.iter()).for_each(|(r, &x, &y)| {
        let (p_re, p_im) = complex_q30(shifted(x, b_shr), shifted(y, c_shr), kind.conj());
        let a: ComplexS32 = shifted(*r, acc_shr);
        *r = if kind.negate() {
            sat_pair((a.re as i64 - p_re, a.im as i64 - p_im))
        } else {
            sat_pair((a.re as i64 + p_re, a.im as i64 + p_im))
        };
    });
    vect_complex_s32_headroom(acc)
}

/// `res[k] = conj(a[k])`.
#[inline(always)]
pub fn vect_complex_s32_conjugate_ref(res: &mut [ComplexS32], a: &[ComplexS32]) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| *r = ComplexS32::new(x.re, i32::sat_from_i64(-(x.im as i64))));
    vect_complex_s32_headroom(res)
}

/// Splits the shifted input into 16-bit real and imaginary buffers.
#[inline(always)]
pub fn vect_complex_s32_to_s16_ref(res_re: &mut [i16], res_im: &mut [i16], a: &[ComplexS32], a_shr: RightShift) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res_re.len(), a.len());
        assert_eq!(res_im.len(), a.len());
    }
    izip!(res_re.iter_mut(), res_im.iter_mut(), a.iter()).for_each(|(r, i, &x)| {
        *r = i16::sat_from_i64(shift_i64(x.re as i64, a_shr));
        *i = i16::sat_from_i64(shift_i64(x.im as i64, a_shr));
    });
    vect_headroom(res_re).min(vect_headroom(res_im))
}

/// Interleaves two shifted real vectors: `res[k] = (re[k] >> re_shr, im[k] >> im_shr)`.
#[inline(always)]
pub fn vect_complex_s32_make_ref(
    res: &mut [ComplexS32],
    re: &[i32],
    im: &[i32],
    re_shr: RightShift,
    im_shr: RightShift,
) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), re.len());
        assert_eq!(res.len(), im.len());
    }
    izip!(res.iter_mut(), re.iter(), im.iter())
        .for_each(|(r, &x, &y)| *r = ComplexS32::new(shift_sat(x, re_shr), shift_sat(y, im_shr)));
    vect_complex_s32_headroom(res)
}

/// Copies the real parts of `a`.
#[inline(always)]
pub fn vect_complex_s32_real_part_ref(res: &mut [i32], a: &[ComplexS32]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, x)| *r = x.re);
}

/// Copies the imaginary parts of `a`.
#[inline(always)]
pub fn vect_complex_s32_imag_part_ref(res: &mut [i32], a: &[ComplexS32]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, x)| *r = x.im);
}

#[cfg(test)]
mod tests {
    use crate::{
        layouts::ComplexS32,
        reference::{
            ComplexMacc, vect_complex_s32_conjugate_ref, vect_complex_s32_mag_ref, vect_complex_s32_macc_ref,
            vect_complex_s32_mul_ref, vect_complex_s32_squared_mag_ref, vect_complex_s32_sum_ref,
        },
    };

    const ONE: i32 = 1 << 30;

    #[test]
    fn mul_and_conj_mul() {
        let a: [ComplexS32; 1] = [ComplexS32::new(ONE >> 1, ONE >> 2)];
        let b: [ComplexS32; 1] = [ComplexS32::new(0, ONE)];
        let mut res: [ComplexS32; 1] = [ComplexS32::default(); 1];
        vect_complex_s32_mul_ref(&mut res, &a, &b, 0, 0, false);
        assert_eq!(res[0], ComplexS32::new(-(ONE >> 2), ONE >> 1));
        vect_complex_s32_mul_ref(&mut res, &a, &b, 0, 0, true);
        assert_eq!(res[0], ComplexS32::new(ONE >> 2, -(ONE >> 1)));
    }

    #[test]
    fn magnitudes() {
        let a: [ComplexS32; 2] = [ComplexS32::new(3 << 20, -(4 << 20)), ComplexS32::new(0, 0)];
        let mut mag: [i32; 2] = [0; 2];
        vect_complex_s32_mag_ref(&mut mag, &a, 0);
        assert_eq!(mag, [5 << 20, 0]);
        vect_complex_s32_squared_mag_ref(&mut mag, &a, -5);
        assert_eq!(mag, [25 << 20, 0]);
    }

    #[test]
    fn macc_kinds() {
        let b: [ComplexS32; 1] = [ComplexS32::new(0, ONE)];
        let c: [ComplexS32; 1] = [ComplexS32::new(10, 20)];
        let mut acc: [ComplexS32; 1] = [ComplexS32::new(100, 100)];
        vect_complex_s32_macc_ref(&mut acc, &b, &c, 0, 0, 0, ComplexMacc::Macc);
        assert_eq!(acc[0], ComplexS32::new(80, 110));
        vect_complex_s32_macc_ref(&mut acc, &b, &c, 0, 0, 0, ComplexMacc::ConjNmacc);
        assert_eq!(acc[0], ComplexS32::new(60, 100));
    }

    #[test]
    fn conjugate_and_sum() {
        let a: [ComplexS32; 2] = [ComplexS32::new(1, i32::MIN), ComplexS32::new(-3, 5)];
        let mut res: [ComplexS32; 2] = [ComplexS32::default(); 2];
        vect_complex_s32_conjugate_ref(&mut res, &a);
        assert_eq!(res[0], ComplexS32::new(1, i32::MAX));
        assert_eq!(res[1], ComplexS32::new(-3, -5));
        let s = vect_complex_s32_sum_ref(&res, 0);
        assert_eq!((s.re, s.im), (-2, i32::MAX as i64 - 5));
    }
}
