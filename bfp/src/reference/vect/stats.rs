use itertools::izip;

use crate::{
    layouts::{Mantissa, RightShift},
    reference::{ACC_BITS, round_shr_i64, sat_bits, shift_sat},
};

/// Largest element.
#[inline(always)]
pub fn vect_max_ref<T: Mantissa>(a: &[T]) -> T {
    debug_assert!(!a.is_empty());
    a.iter().copied().fold(a[0], |m, x| m.max(x))
}

/// Smallest element.
#[inline(always)]
pub fn vect_min_ref<T: Mantissa>(a: &[T]) -> T {
    debug_assert!(!a.is_empty());
    a.iter().copied().fold(a[0], |m, x| m.min(x))
}

/// Index of the first occurrence of the largest element.
#[inline(always)]
pub fn vect_argmax_ref<T: Mantissa>(a: &[T]) -> usize {
    debug_assert!(!a.is_empty());
    let mut idx: usize = 0;
    for (k, &x) in a.iter().enumerate().skip(1) {
        if x > a[idx] {
            idx = k;
        }
    }
    idx
}

/// Index of the first occurrence of the smallest element.
#[inline(always)]
pub fn vect_argmin_ref<T: Mantissa>(a: &[T]) -> usize {
    debug_assert!(!a.is_empty());
    let mut idx: usize = 0;
    for (k, &x) in a.iter().enumerate().skip(1) {
        if x < a[idx] {
            idx = k;
        }
    }
    idx
}

/// Exact sum of the elements.
#[inline(always)]
pub fn vect_sum_ref<T: Mantissa>(a: &[T]) -> i64 {
    a.iter().map(|x| x.to_i64()).sum()
}

/// Exact sum of the saturated absolute values.
#[inline(always)]
pub fn vect_abs_sum_ref<T: Mantissa>(a: &[T]) -> i64 {
    a.iter().map(|x| x.to_i64().abs().min(T::MAX.to_i64())).sum()
}

/// Inner product of 32-bit vectors: each operand is shifted, the products are
/// rounded by 30 bits and accumulated in a saturating 40-bit accumulator.
#[inline(always)]
pub fn vect_s32_dot_ref(a: &[i32], b: &[i32], a_shr: RightShift, b_shr: RightShift) -> i64 {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), b.len());
    }
    izip!(a.iter(), b.iter()).fold(0i64, |acc, (&x, &y)| {
        let p: i64 = shift_sat(x, a_shr) as i64 * shift_sat(y, b_shr) as i64;
        sat_bits(acc + round_shr_i64(p, 30), ACC_BITS)
    })
}

/// Energy of a 32-bit vector: `sum (a[k] >> a_shr)^2`, products rounded by 30
/// bits into a saturating 40-bit accumulator.
#[inline(always)]
pub fn vect_s32_energy_ref(a: &[i32], a_shr: RightShift) -> i64 {
    a.iter().fold(0i64, |acc, &x| {
        let y: i64 = shift_sat(x, a_shr) as i64;
        sat_bits(acc + round_shr_i64(y * y, 30), ACC_BITS)
    })
}

/// Exact inner product of 16-bit vectors.
#[inline(always)]
pub fn vect_s16_dot_ref(a: &[i16], b: &[i16]) -> i64 {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), b.len());
    }
    izip!(a.iter(), b.iter()).map(|(&x, &y)| x as i64 * y as i64).sum()
}

#[cfg(test)]
mod tests {
    use crate::reference::{
        vect_abs_sum_ref, vect_argmax_ref, vect_argmin_ref, vect_max_ref, vect_min_ref, vect_s16_dot_ref, vect_s32_dot_ref,
        vect_s32_energy_ref, vect_sum_ref,
    };

    #[test]
    fn extrema_take_first_occurrence() {
        let a: [i16; 6] = [3, 9, -4, 9, -4, 0];
        assert_eq!(vect_max_ref(&a), 9);
        assert_eq!(vect_min_ref(&a), -4);
        assert_eq!(vect_argmax_ref(&a), 1);
        assert_eq!(vect_argmin_ref(&a), 2);
    }

    #[test]
    fn sums_are_exact() {
        let a: Vec<i32> = vec![i32::MAX; 1000];
        assert_eq!(vect_sum_ref(&a), 1000 * i32::MAX as i64);
        let b: [i16; 3] = [i16::MIN, 5, -5];
        assert_eq!(vect_abs_sum_ref(&b), i16::MAX as i64 + 10);
    }

    #[test]
    fn dot_products() {
        let one: i32 = 1 << 30;
        let a: [i32; 3] = [one, one, -one];
        let b: [i32; 3] = [one, -one >> 1, one];
        assert_eq!(vect_s32_dot_ref(&a, &b, 0, 0), (1 << 30) - (1 << 29) - (1 << 30));
        assert_eq!(vect_s32_energy_ref(&a, 1), 3 * (1 << 28));
        let c: [i16; 2] = [-300, 200];
        let d: [i16; 2] = [1000, 1000];
        assert_eq!(vect_s16_dot_ref(&c, &d), -100_000);
    }

    #[test]
    fn dot_saturates_at_40_bits() {
        let a: Vec<i32> = vec![i32::MAX; 1024];
        let max40: i64 = (1i64 << 39) - 1;
        assert_eq!(vect_s32_dot_ref(&a, &a, 0, 0), max40);
    }
}
