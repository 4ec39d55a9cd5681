use crate::layouts::{Complex, ComplexS32, Headroom, Mantissa};

/// Count of leading sign bits of `x`.
#[inline(always)]
pub fn cls<T: Mantissa>(x: T) -> u32 {
    x.leading_sign_bits()
}

/// Headroom of a single mantissa: `cls(x) - 1`. A zero has `BITS - 1`.
#[inline(always)]
pub fn headroom<T: Mantissa>(x: T) -> Headroom {
    x.leading_sign_bits() - 1
}

/// Headroom of a 64-bit value.
#[inline(always)]
pub fn headroom_i64(x: i64) -> Headroom {
    (if x < 0 { x.leading_ones() } else { x.leading_zeros() }) - 1
}

/// Headroom of a complex mantissa: the smaller of both parts.
#[inline(always)]
pub fn complex_headroom<T: Mantissa>(x: Complex<T>) -> Headroom {
    headroom(x.re).min(headroom(x.im))
}

#[inline(always)]
pub fn complex_s32_headroom(x: ComplexS32) -> Headroom {
    headroom(x.re).min(headroom(x.im))
}

/// Headroom shared by every element of `a`; an empty slice reports
/// `BITS - 1`.
pub fn vect_headroom<T: Mantissa>(a: &[T]) -> Headroom {
    a.iter().fold(T::BITS - 1, |hr, &x| hr.min(headroom(x)))
}

pub fn vect_complex_s32_headroom(a: &[ComplexS32]) -> Headroom {
    a.iter().fold(i32::BITS - 1, |hr, &x| hr.min(complex_s32_headroom(x)))
}

pub fn vect_complex_s16_headroom(re: &[i16], im: &[i16]) -> Headroom {
    vect_headroom(re).min(vect_headroom(im))
}

#[cfg(test)]
mod tests {
    use sampling::{
        distributions::{MantissaDist, fill_i16, fill_i32},
        source::Source,
    };

    use crate::{
        layouts::Mantissa,
        reference::{headroom, headroom_i64, shift_sat, vect_headroom},
    };

    #[test]
    fn single_values() {
        assert_eq!(headroom(0i16), 15);
        assert_eq!(headroom(-1i16), 15);
        assert_eq!(headroom(0i32), 31);
        assert_eq!(headroom(1i32), 30);
        assert_eq!(headroom(0x4000i16), 0);
        assert_eq!(headroom(-0x4000i16), 1);
        assert_eq!(headroom(-0x4001i16), 0);
        assert_eq!(headroom(0i8), 7);
        assert_eq!(headroom_i64(0), 63);
        assert_eq!(headroom_i64(-(1 << 40)), 23);
    }

    /// Shifting by the headroom never saturates, shifting by one more does
    /// for at least one element. The one exception is `-2^(BITS-1-hr)`,
    /// which lands on the excluded most negative value and clamps by one.
    fn check_sound_and_tight<T: Mantissa>(a: &[T]) {
        let hr = vect_headroom(a);
        let floor: i64 = -(T::MAX.to_i64() + 1);
        a.iter().for_each(|&x| {
            let y: T = shift_sat(x, -(hr as i32));
            let wide: i64 = x.to_i64() << hr;
            assert!(wide >= floor, "{x} << {hr} overflowed");
            assert_eq!(y.to_i64(), wide.max(-T::MAX.to_i64()), "{x} << {hr} saturated");
        });
        if hr < T::BITS - 1 {
            assert!(a.iter().any(|&x| {
                let wide: i64 = x.to_i64() << (hr + 1);
                wide > T::MAX.to_i64() || wide < -(T::MAX.to_i64() + 1)
            }));
        }
    }

    #[test]
    fn vector_headroom_is_sound_and_tight() {
        let mut source: Source = Source::new([3u8; 32]);
        for hr in 0..15 {
            let mut a: Vec<i16> = vec![0; 64];
            fill_i16(&mut source, MantissaDist::Headroom(hr), &mut a);
            assert_eq!(vect_headroom(&a), hr);
            check_sound_and_tight(&a);
        }
        for hr in 0..31 {
            let mut a: Vec<i32> = vec![0; 64];
            fill_i32(&mut source, MantissaDist::Headroom(hr), &mut a);
            assert_eq!(vect_headroom(&a), hr);
            check_sound_and_tight(&a);
        }
    }
}
