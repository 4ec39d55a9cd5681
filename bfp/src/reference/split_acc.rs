use crate::{
    layouts::{Headroom, Mantissa, RightShift, SPLIT_ACC_LANES, SplitAccS32},
    reference::{headroom, shift_i64, shift_sat},
};

/// Merges the first `res.len()` split accumulators into `res`.
pub fn vect_s32_merge_accs_ref(res: &mut [i32], a: &[SplitAccS32]) {
    #[cfg(debug_assertions)]
    {
        assert!(a.len() * SPLIT_ACC_LANES >= res.len());
    }
    res.chunks_mut(SPLIT_ACC_LANES)
        .zip(a.iter())
        .for_each(|(r, chunk)| r.iter_mut().enumerate().for_each(|(lane, x)| *x = chunk.get(lane)));
}

/// Splits `a` into the first `a.len()` lanes of `res`.
pub fn vect_s32_split_accs_ref(res: &mut [SplitAccS32], a: &[i32]) {
    #[cfg(debug_assertions)]
    {
        assert!(res.len() * SPLIT_ACC_LANES >= a.len());
    }
    a.chunks(SPLIT_ACC_LANES)
        .zip(res.iter_mut())
        .for_each(|(x, chunk)| x.iter().enumerate().for_each(|(lane, &v)| chunk.put(lane, v)));
}

/// Shifts the first `len` split accumulators by `shr` (rounding right,
/// saturating left) in place.
pub fn vect_split_acc_s32_shr_ref(a: &mut [SplitAccS32], len: usize, shr: RightShift) {
    #[cfg(debug_assertions)]
    {
        assert!(a.len() * SPLIT_ACC_LANES >= len);
    }
    for k in 0..len {
        let (chunk, lane) = (&mut a[k / SPLIT_ACC_LANES], k % SPLIT_ACC_LANES);
        chunk.put(lane, shift_sat(chunk.get(lane), shr));
    }
}

/// Adds `b[k] >> b_shr` to the first `b.len()` split accumulators,
/// saturating to 32 bits.
///
/// Returns the headroom of the updated accumulators, capped at 15.
pub fn vect_split_acc_s16_accumulate_ref(acc: &mut [SplitAccS32], b: &[i16], b_shr: RightShift) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert!(acc.len() * SPLIT_ACC_LANES >= b.len());
    }
    let mut hr: Headroom = 15;
    b.chunks(SPLIT_ACC_LANES).zip(acc.iter_mut()).for_each(|(x, chunk)| {
        x.iter().enumerate().for_each(|(lane, &v)| {
            let sum: i32 = i32::sat_from_i64(chunk.get(lane) as i64 + shift_i64(v as i64, b_shr));
            chunk.put(lane, sum);
            hr = hr.min(headroom(sum));
        })
    });
    hr
}

#[cfg(test)]
mod tests {
    use crate::{
        layouts::SplitAccS32,
        reference::{vect_s32_merge_accs_ref, vect_s32_split_accs_ref, vect_split_acc_s16_accumulate_ref, vect_split_acc_s32_shr_ref},
    };

    #[test]
    fn split_then_merge_round_trips() {
        let a: Vec<i32> = (0..37).map(|k: i32| (k - 18).wrapping_mul(0x0765_4321)).collect();
        let mut split: Vec<SplitAccS32> = SplitAccS32::alloc(a.len());
        vect_s32_split_accs_ref(&mut split, &a);
        let mut back: Vec<i32> = vec![0; a.len()];
        vect_s32_merge_accs_ref(&mut back, &split);
        assert_eq!(a, back);
    }

    #[test]
    fn shift_in_place() {
        let a: Vec<i32> = vec![0x10000, -0x10000, 3];
        let mut split: Vec<SplitAccS32> = SplitAccS32::alloc(a.len());
        vect_s32_split_accs_ref(&mut split, &a);
        vect_split_acc_s32_shr_ref(&mut split, a.len(), 4);
        let mut back: Vec<i32> = vec![0; a.len()];
        vect_s32_merge_accs_ref(&mut back, &split);
        assert_eq!(back, [0x1000, -0x1000, 0]);
    }

    #[test]
    fn accumulate_reports_capped_headroom() {
        let mut split: Vec<SplitAccS32> = SplitAccS32::alloc(20);
        let b: Vec<i16> = vec![5; 20];
        let hr = vect_split_acc_s16_accumulate_ref(&mut split, &b, 0);
        assert_eq!(hr, 15);
        let hr = vect_split_acc_s16_accumulate_ref(&mut split, &b, -20);
        let mut back: Vec<i32> = vec![0; 20];
        vect_s32_merge_accs_ref(&mut back, &split);
        assert!(back.iter().all(|&x| x == 5 + (5 << 20)));
        assert_eq!(hr, 8);
    }
}
