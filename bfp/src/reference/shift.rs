use crate::layouts::{Mantissa, RightShift};

/// `(x + 2^(shr-1)) >> shr`: arithmetic right shift rounding half up.
#[inline(always)]
pub fn round_shr_i64(x: i64, shr: u32) -> i64 {
    match shr {
        0 => x,
        1..=63 => ((x as i128 + (1i128 << (shr - 1))) >> shr) as i64,
        _ => 0,
    }
}

/// Signed shift of a wide value: rounding right shift for `shr > 0`, left
/// shift clamped to the `i64` range for `shr < 0`.
#[inline(always)]
pub fn shift_i64(x: i64, shr: RightShift) -> i64 {
    if shr >= 0 {
        round_shr_i64(x, shr as u32)
    } else {
        let shl: u32 = shr.unsigned_abs().min(64);
        if x == 0 {
            return 0;
        }
        let wide: i128 = if shl >= 64 { x.signum() as i128 * i128::MAX } else { (x as i128) << shl };
        wide.clamp(i64::MIN as i128, i64::MAX as i128) as i64
    }
}

/// Clamps `x` to the symmetric `bits`-wide range `[-(2^(bits-1)-1), 2^(bits-1)-1]`.
#[inline(always)]
pub fn sat_bits(x: i64, bits: u32) -> i64 {
    let max: i64 = (1i64 << (bits - 1)) - 1;
    x.clamp(-max, max)
}

/// Width of the saturating accumulator used by the 32-bit reductions.
pub const ACC_BITS: u32 = 40;

/// Shift-saturate kernel.
///
/// - `shr > 0`: `(x + 2^(shr-1)) >> shr`; shifts of `BITS` or more give 0.
/// - `shr == 0`: `x` unchanged.
/// - `shr < 0`: `x << -shr`, saturated to `[-MAX, MAX]`.
#[inline(always)]
pub fn shift_sat<T: Mantissa>(x: T, shr: RightShift) -> T {
    if shr > 0 {
        if shr as u32 >= T::BITS {
            return T::ZERO;
        }
        T::sat_from_i64(round_shr_i64(x.to_i64(), shr as u32))
    } else if shr == 0 {
        x
    } else {
        if x == T::ZERO {
            return x;
        }
        // |x| <= 2^(BITS-1) so any shift of BITS or more saturates.
        let shl: u32 = shr.unsigned_abs().min(T::BITS);
        T::sat_from_i64(x.to_i64() << shl)
    }
}

/// Fixed-point product of two mantissas: `round(x * y / 2^(BITS-2))`,
/// saturated. For 32-bit operands this is a Q2.30 multiply, for 16-bit a
/// Q2.14 multiply.
#[inline(always)]
pub fn mul_sat<T: Mantissa>(x: T, y: T) -> T {
    T::sat_from_i64(round_shr_i64(x.to_i64() * y.to_i64(), T::BITS - 2))
}

/// `round(x * y / 2^shr)`, saturated. Used where the product shift is
/// chosen by a planner.
#[inline(always)]
pub fn mul_shr_sat<T: Mantissa>(x: T, y: T, shr: RightShift) -> T {
    T::sat_from_i64(shift_i64(x.to_i64() * y.to_i64(), shr))
}

#[cfg(test)]
mod tests {
    use crate::reference::{headroom, mul_sat, round_shr_i64, shift_i64, shift_sat};

    #[test]
    fn symmetric_saturation() {
        assert_eq!(shift_sat(-32768i16, -1), -32767);
        assert_eq!(shift_sat(0x4000i16, -1), 0x7FFF);
        assert_eq!(shift_sat(-0x4001i16, -1), -0x7FFF);
        assert_eq!(shift_sat(i32::MIN, -3), -i32::MAX);
        assert_eq!(shift_sat(1i32, -40), i32::MAX);
        assert_eq!(shift_sat(-1i16, -16), -i16::MAX);
        assert_eq!(shift_sat(0i16, -100), 0);
    }

    #[test]
    fn shift_by_zero_is_identity() {
        assert_eq!(shift_sat(i16::MIN, 0), i16::MIN);
        assert_eq!(shift_sat(i32::MIN, 0), i32::MIN);
    }

    #[test]
    fn right_shift_rounds_half_up() {
        assert_eq!(shift_sat(5i16, 1), 3);
        assert_eq!(shift_sat(-5i16, 1), -2);
        assert_eq!(shift_sat(-6i16, 2), -1);
        assert_eq!(shift_sat(-7i32, 2), -2);
        assert_eq!(shift_sat(0x7FFFi16, 15), 1);
        assert_eq!(shift_sat(0x7FFFi16, 16), 0);
        assert_eq!(shift_sat(i32::MIN, 32), 0);
        assert_eq!(round_shr_i64(i64::MAX, 64), 0);
        assert_eq!(round_shr_i64(3, 1), 2);
        assert_eq!(shift_i64(3, -4), 48);
        assert_eq!(shift_i64(-1, -70), i64::MIN);
    }

    #[test]
    fn left_then_right_recovers_value_with_headroom() {
        for s in 0..15 {
            let bound: i32 = 1 << (15 - s);
            for x in (-bound + 1..bound).step_by(7) {
                let x: i16 = x as i16;
                let y: i16 = shift_sat(x, -s);
                assert_eq!(shift_sat(y, s), x, "x={x} s={s}");
            }
        }
        for s in [0, 1, 5, 17, 29] {
            let x: i32 = -(1 << (30 - s)) + 3;
            assert_eq!(shift_sat(shift_sat(x, -s), s), x);
        }
    }

    #[test]
    fn left_shift_onto_most_negative_clamps() {
        // -2^(15-s) has s bits of headroom but lands on -2^15.
        for s in 1..16 {
            let x: i16 = -(1i32 << (15 - s)) as i16;
            assert_eq!(headroom(x), s as u32);
            assert_eq!(shift_sat(x, -s), -i16::MAX, "s={s}");
        }
        assert_eq!(shift_sat(-(1i32 << 27), -4), -i32::MAX);
        assert_eq!(shift_sat(-(1i32 << 27) + 1, -4), i32::MIN + 16);
    }

    #[test]
    fn q30_product() {
        let one: i32 = 1 << 30;
        assert_eq!(mul_sat(one, one), one);
        assert_eq!(mul_sat(-one, one), -one);
        assert_eq!(mul_sat(i32::MIN, i32::MIN), i32::MAX);
        assert_eq!(mul_sat(0x4000i16, 0x2000i16), 0x2000);
        assert_eq!(mul_sat(i16::MIN, i16::MIN), i16::MAX);
    }
}
