use rand_distr::{Distribution, Normal};
use rand_core::RngCore;

use crate::source::Source;

/// Shape of a random mantissa vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MantissaDist {
    /// Uniform over `±(2^(BITS-1-hr) - 1)`, with one element pinned so the
    /// vector has exactly `hr` bits of headroom. The most negative value of
    /// that width is never drawn, so shifting left by `hr` is always exact.
    Headroom(u32),
    /// Zero-mean normal with the given standard deviation, in units of one LSB.
    /// Samples are clamped to the symmetric range of the container.
    Normal(f64),
}

macro_rules! impl_fill {
    ($name:ident, $ty:ty) => {
        /// Fills `data` following `dist`.
        ///
        /// # Panics
        /// Panics if `data` is empty, if a headroom is larger than the container
        /// allows, or if the normal deviation is not finite and positive.
        pub fn $name(source: &mut Source, dist: MantissaDist, data: &mut [$ty]) {
            assert!(!data.is_empty(), "{}: empty data", stringify!($name));
            const BITS: u32 = <$ty>::BITS;
            match dist {
                MantissaDist::Headroom(hr) => {
                    assert!(hr < BITS, "{}: headroom {hr} >= {BITS}", stringify!($name));
                    if hr == BITS - 1 {
                        data.iter_mut().for_each(|x| *x = 0);
                        return;
                    }
                    // Uniform over the symmetric range [-(2^n - 1), 2^n - 1], n = BITS - 1 - hr.
                    let half: u64 = 1u64 << (BITS - 1 - hr);
                    let span: u64 = 2 * half - 1;
                    let mask: u64 = (1u64 << (BITS - hr)) - 1;
                    for x in data.iter_mut() {
                        *x = (source.next_u64n(span, mask) as i64 - (half as i64 - 1)) as $ty;
                    }
                    // 2^(n-1) and -2^(n-1) - 1 both have exactly hr bits of headroom.
                    let len: u64 = data.len() as u64;
                    let k: usize = source.next_u64n(len, len.next_power_of_two() - 1) as usize;
                    let pinned: i64 = if source.next_bool() {
                        -(1i64 << (BITS - 2 - hr)) - 1
                    } else {
                        1i64 << (BITS - 2 - hr)
                    };
                    data[k] = pinned as $ty;
                }
                MantissaDist::Normal(sigma) => {
                    let normal: Normal<f64> = Normal::new(0.0, sigma)
                        .unwrap_or_else(|e| panic!("{}: invalid sigma {sigma}: {e}", stringify!($name)));
                    let bound: f64 = <$ty>::MAX as f64;
                    for x in data.iter_mut() {
                        *x = normal.sample(source).round().clamp(-bound, bound) as $ty;
                    }
                }
            }
        }
    };
}

impl_fill!(fill_i8, i8);
impl_fill!(fill_i16, i16);
impl_fill!(fill_i32, i32);

#[cfg(test)]
mod tests {
    use super::*;

    fn hr_i32(x: i32) -> u32 {
        (if x < 0 { x.leading_ones() } else { x.leading_zeros() }) - 1
    }

    #[test]
    fn headroom_is_exact() {
        let mut source: Source = Source::new([1u8; 32]);
        let mut data: Vec<i32> = vec![0; 37];
        for hr in 0..31 {
            fill_i32(&mut source, MantissaDist::Headroom(hr), &mut data);
            let got: u32 = data.iter().map(|&x| hr_i32(x)).min().unwrap();
            assert_eq!(got, hr);
            let floor: i64 = -(1i64 << (31 - hr));
            assert!(data.iter().all(|&x| x as i64 > floor), "hr={hr}");
        }
    }

    #[test]
    fn headroom_fills_single_element() {
        let mut source: Source = Source::new([3u8; 32]);
        let mut data: [i16; 1] = [0];
        for hr in 0..15 {
            fill_i16(&mut source, MantissaDist::Headroom(hr), &mut data);
            assert!(data[0] == 1 << (14 - hr) || data[0] == -(1 << (14 - hr)) - 1, "hr={hr} x={}", data[0]);
        }
        fill_i16(&mut source, MantissaDist::Headroom(15), &mut data);
        assert_eq!(data[0], 0);
    }

    #[test]
    fn normal_is_clamped_symmetric() {
        let mut source: Source = Source::new([2u8; 32]);
        let mut data: Vec<i16> = vec![0; 256];
        fill_i16(&mut source, MantissaDist::Normal(1.0e9), &mut data);
        assert!(data.iter().all(|&x| x != i16::MIN));
    }
}
