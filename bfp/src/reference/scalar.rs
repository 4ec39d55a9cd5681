//! Scalar block-floating-point helpers, used by the reductions that
//! post-process a wide result (`rms`, `mean`) and available on their own.

use crate::{
    layouts::{Exponent, FloatS16, FloatS32, Headroom, LeftShift, Mantissa, RightShift},
    prepare::{vect_s16_mul_prepare, vect_s16_sqrt_prepare, vect_s32_mul_prepare, vect_s32_sqrt_prepare},
    reference::{headroom, headroom_i64, mul_sat, mul_shr_sat, shift_sat, sqrt_bitwise},
};

/// Narrows a 64-bit mantissa to 32 bits, keeping as much precision as fits.
/// The dropped bits are truncated.
pub fn s64_to_s32(b: i64, b_exp: Exponent) -> FloatS32 {
    let shr: RightShift = (32 - headroom_i64(b) as i32).max(0);
    FloatS32::new(i32::sat_from_i64(b >> shr), b_exp + shr)
}

/// Narrows a 32-bit mantissa to 16 bits, truncating the dropped bits.
pub fn s32_to_s16(b: i32, b_exp: Exponent) -> FloatS16 {
    let shr: RightShift = (16 - headroom(b) as i32).max(0);
    FloatS16::new(i16::sat_from_i64((b >> shr) as i64), b_exp + shr)
}

/// Widens a 16-bit mantissa; with `remove_hr` the result is normalized so
/// that it has no headroom left.
pub fn s16_to_s32(b: i16, b_exp: Exponent, remove_hr: bool) -> FloatS32 {
    let shl: LeftShift = if remove_hr { 16 + headroom(b) as i32 } else { 0 };
    FloatS32::new(i32::sat_from_i64((b as i64) << shl), b_exp - shl)
}

pub fn s16_mul(b: i16, c: i16, b_exp: Exponent, c_exp: Exponent) -> FloatS16 {
    let plan = vect_s16_mul_prepare(b_exp, c_exp, headroom(b), headroom(c));
    FloatS16::new(mul_shr_sat(b, c, plan.a_shr), plan.a_exp)
}

pub fn s32_mul(b: i32, c: i32, b_exp: Exponent, c_exp: Exponent) -> FloatS32 {
    let plan = vect_s32_mul_prepare(b_exp, c_exp, headroom(b), headroom(c));
    FloatS32::new(mul_sat(shift_sat(b, plan.b_shr), shift_sat(c, plan.c_shr)), plan.a_exp)
}

#[inline]
fn inverse<T: Mantissa>(b: T, top: u32) -> (T, Exponent) {
    let hr: Headroom = headroom(b);
    let scale: u32 = top - hr;
    let d: i64 = b.to_i64();
    let mant: T = if d == 0 { T::MAX } else { T::sat_from_i64((1i64 << scale) / d) };
    (mant, -(scale as i32))
}

/// `1 / b` as `2^scale / b * 2^-scale`. A zero input gives `MAX * 2^-scale`.
pub fn s16_inverse(b: i16) -> FloatS16 {
    let (mant, exp) = inverse(b, 28);
    FloatS16::new(mant, exp)
}

/// `1 / b` as `2^scale / b * 2^-scale`. A zero input gives `MAX * 2^-scale`.
pub fn s32_inverse(b: i32) -> FloatS32 {
    let (mant, exp) = inverse(b, 60);
    FloatS32::new(mant, exp)
}

/// Square root of `b * 2^b_exp`, refined for `depth` bits. Negative inputs
/// give 0.
pub fn s32_sqrt(b: i32, b_exp: Exponent, depth: u32) -> FloatS32 {
    let plan = vect_s32_sqrt_prepare(b_exp, headroom(b));
    FloatS32::new(sqrt_bitwise(shift_sat(b, plan.b_shr), depth), plan.a_exp)
}

pub fn s16_sqrt(b: i16, b_exp: Exponent, depth: u32) -> FloatS16 {
    let plan = vect_s16_sqrt_prepare(b_exp, headroom(b));
    FloatS16::new(sqrt_bitwise(shift_sat(b, plan.b_shr), depth), plan.a_exp)
}

/// Aligns `x` and `y` on a common exponent with one bit of headroom each.
#[inline]
fn float_s32_align(x: FloatS32, y: FloatS32) -> (i64, i64, Exponent) {
    let exp: Exponent = (x.exp - headroom(x.mant) as i32).max(y.exp - headroom(y.mant) as i32) + 1;
    (
        shift_sat(x.mant, exp - x.exp).to_i64(),
        shift_sat(y.mant, exp - y.exp).to_i64(),
        exp,
    )
}

pub fn float_s32_add(x: FloatS32, y: FloatS32) -> FloatS32 {
    let (a, b, exp) = float_s32_align(x, y);
    FloatS32::new(i32::sat_from_i64(a + b), exp)
}

pub fn float_s32_sub(x: FloatS32, y: FloatS32) -> FloatS32 {
    let (a, b, exp) = float_s32_align(x, y);
    FloatS32::new(i32::sat_from_i64(a - b), exp)
}

pub fn float_s32_mul(x: FloatS32, y: FloatS32) -> FloatS32 {
    s32_mul(x.mant, y.mant, x.exp, y.exp)
}

/// `x / y`, computed as `x * (1 / y)`.
pub fn float_s32_div(x: FloatS32, y: FloatS32) -> FloatS32 {
    let mut t: FloatS32 = s32_inverse(y.mant);
    t.exp -= y.exp;
    float_s32_mul(x, t)
}

pub fn float_s32_abs(x: FloatS32) -> FloatS32 {
    FloatS32::new(i32::sat_from_i64(x.mant.to_i64().abs()), x.exp)
}

pub fn float_s32_gt(x: FloatS32, y: FloatS32) -> bool {
    float_s32_sub(x, y).mant > 0
}

pub fn float_s32_gte(x: FloatS32, y: FloatS32) -> bool {
    float_s32_sub(x, y).mant >= 0
}

pub fn float_s32_sqrt(x: FloatS32, depth: u32) -> FloatS32 {
    s32_sqrt(x.mant, x.exp, depth)
}

#[cfg(test)]
mod tests {
    use crate::{
        layouts::{FloatS16, FloatS32},
        reference::{
            float_s32_abs, float_s32_add, float_s32_div, float_s32_gt, float_s32_gte, float_s32_mul, float_s32_sqrt,
            float_s32_sub, s16_inverse, s16_mul, s16_to_s32, s32_inverse, s32_sqrt, s32_to_s16, s64_to_s32,
        },
    };

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(f64::MIN_POSITIVE)
    }

    #[test]
    fn narrowing_keeps_value() {
        let x: FloatS32 = s64_to_s32(0x1234_5678_9ABC, -20);
        assert_eq!(x.exp, -20 + 14);
        assert_eq!(x.mant, (0x1234_5678_9ABCi64 >> 14) as i32);
        assert_eq!(s64_to_s32(-7, 3), FloatS32::new(-7, 3));

        let y: FloatS16 = s32_to_s16(0x0012_3456, 0);
        assert_eq!(y, FloatS16::new((0x0012_3456 >> 6) as i16, 6));
    }

    #[test]
    fn widening_removes_headroom() {
        assert_eq!(s16_to_s32(3, -2, false), FloatS32::new(3, -2));
        // headroom(3) = 13.
        assert_eq!(s16_to_s32(3, -2, true), FloatS32::new(3 << 29, -31));
    }

    #[test]
    fn inverses() {
        let x: FloatS32 = s32_inverse(3);
        assert!(close(x.to_f64(), 1.0 / 3.0, 1e-8));
        let y: FloatS16 = s16_inverse(-100);
        assert!(close(y.to_f64(), -0.01, 1e-3));
        assert_eq!(s32_inverse(0).mant, i32::MAX);
    }

    #[test]
    fn products() {
        let x: FloatS16 = s16_mul(0x4000, 0x4000, -14, -14);
        assert!(close(x.to_f64(), 1.0, 1e-4));
        let y: FloatS32 = float_s32_mul(FloatS32::new(3 << 20, -20), FloatS32::new(-5 << 24, -24));
        assert!(close(y.to_f64(), -15.0, 1e-8));
    }

    #[test]
    fn float_arithmetic() {
        let a: FloatS32 = FloatS32::new(0x4000_0000, -30);
        let b: FloatS32 = FloatS32::new(-0x3000_0000, -28);
        assert!(close(float_s32_add(a, b).to_f64(), -2.0, 1e-8));
        assert!(close(float_s32_sub(a, b).to_f64(), 4.0, 1e-8));
        assert!(close(float_s32_div(a, b).to_f64(), -1.0 / 3.0, 1e-7));
        assert_eq!(float_s32_abs(FloatS32::new(-i32::MAX, 0)).mant, i32::MAX);
        assert!(float_s32_gt(a, b));
        assert!(!float_s32_gt(b, a));
        assert!(float_s32_gte(a, a));
    }

    #[test]
    fn square_roots() {
        let x: FloatS32 = s32_sqrt(9, 0, 31);
        assert!(close(x.to_f64(), 3.0, 1e-8));
        let y: FloatS32 = float_s32_sqrt(FloatS32::new(1 << 20, -21), 31);
        assert!(close(y.to_f64(), 0.5f64.sqrt(), 1e-8));
        assert_eq!(s32_sqrt(-4, 0, 31).mant, 0);
    }
}
