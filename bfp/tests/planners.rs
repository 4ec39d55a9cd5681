use bfp::{
    layouts::{Headroom, SplitAccS32},
    prepare::{BinaryPlan, vect_add_prepare, vect_s32_mul_prepare},
    reference::{
        headroom, shift_sat, vect_add_ref, vect_headroom, vect_s32_merge_accs_ref, vect_s32_mul_ref, vect_s32_split_accs_ref,
        vect_split_acc_s32_shr_ref,
    },
};
use proptest::prelude::*;

/// Mantissas with at least `hr` bits of headroom.
fn with_headroom(hr: Headroom) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>().prop_map(move |x| x >> hr), 1..64)
}

proptest! {
    #[test]
    fn headroom_is_tight(x in any::<i32>()) {
        let hr: Headroom = headroom(x);
        if x == 0 {
            prop_assert_eq!(hr, 31);
        } else {
            let wide: i64 = x as i64;
            prop_assert!(i32::try_from(wide << hr).is_ok());
            prop_assert!(i32::try_from(wide << (hr + 1)).is_err());
        }
    }

    #[test]
    fn add_never_overflows(
        (b_hr, b) in (0u32..31).prop_flat_map(|hr| (Just(hr), with_headroom(hr))),
        (c_hr, c) in (0u32..31).prop_flat_map(|hr| (Just(hr), with_headroom(hr))),
        b_exp in -40i32..40,
        c_exp in -40i32..40,
    ) {
        let len: usize = b.len().min(c.len());
        let (b, c) = (&b[..len], &c[..len]);
        let plan: BinaryPlan = vect_add_prepare(b_exp, c_exp, b_hr, c_hr);
        let mut res: Vec<i32> = vec![0; len];
        let hr: Headroom = vect_add_ref(&mut res, b, c, plan.b_shr, plan.c_shr);
        prop_assert_eq!(hr, vect_headroom(&res));

        let lsb: f64 = 2f64.powi(plan.a_exp);
        for k in 0..len {
            let want: f64 = b[k] as f64 * 2f64.powi(b_exp) + c[k] as f64 * 2f64.powi(c_exp);
            prop_assert!((res[k] as f64 * lsb - want).abs() <= 2.0 * lsb, "k={} res={} want={}", k, res[k], want / lsb);
        }
    }

    #[test]
    fn s32_mul_keeps_one_bit_of_headroom(
        (b_hr, b) in (0u32..31).prop_flat_map(|hr| (Just(hr), with_headroom(hr))),
        (c_hr, c) in (0u32..31).prop_flat_map(|hr| (Just(hr), with_headroom(hr))),
    ) {
        let len: usize = b.len().min(c.len());
        let (b, c) = (&b[..len], &c[..len]);
        let plan: BinaryPlan = vect_s32_mul_prepare(0, 0, b_hr, c_hr);
        let mut res: Vec<i32> = vec![0; len];
        vect_s32_mul_ref(&mut res, b, c, plan.b_shr, plan.c_shr);

        let scale: f64 = 2f64.powi(-plan.a_exp);
        for k in 0..len {
            prop_assert!(res[k].unsigned_abs() <= 1 << 30, "k={} res={}", k, res[k]);
            let want: f64 = b[k] as f64 * c[k] as f64 * scale;
            prop_assert!((res[k] as f64 - want).abs() <= 2.0, "k={} res={} want={}", k, res[k], want);
        }
    }

    #[test]
    fn split_accumulators_round_trip(a in prop::collection::vec(any::<i32>(), 1..80), shr in -4i32..20) {
        let mut acc: Vec<SplitAccS32> = SplitAccS32::alloc(a.len());
        vect_s32_split_accs_ref(&mut acc, &a);
        let mut back: Vec<i32> = vec![0; a.len()];
        vect_s32_merge_accs_ref(&mut back, &acc);
        prop_assert_eq!(&back, &a);

        vect_split_acc_s32_shr_ref(&mut acc, a.len(), shr);
        vect_s32_merge_accs_ref(&mut back, &acc);
        let want: Vec<i32> = a.iter().map(|&x| shift_sat(x, shr)).collect();
        prop_assert_eq!(back, want);
    }
}
