use tracing::trace;

use crate::{
    api::{BfpS16Accumulate, SplitAccMerge, SplitAccShr, SplitAccSplit},
    layouts::{Allocator, BfpS16, BfpS32, DataMut, DataRef, Exponent, Headroom, Module, RightShift, SPLIT_ACC_LANES, SplitAccS32},
    reference::{
        vect_s32_merge_accs_ref, vect_s32_split_accs_ref, vect_split_acc_s16_accumulate_ref, vect_split_acc_s32_shr_ref,
    },
};

impl<M: Allocator> Module<M> {
    fn assert_acc_capacity(&self, op: &str, acc: &[SplitAccS32], len: usize) {
        assert!(
            acc.len() * SPLIT_ACC_LANES >= len,
            "{op}: {} accumulator chunks cannot hold {len} lanes",
            acc.len()
        );
    }
}

impl<M: Allocator> BfpS16Accumulate for Module<M> {
    fn bfp_s16_accumulate<B>(&self, acc: &mut [SplitAccS32], acc_exp: Exponent, b: &BfpS16<B>) -> Headroom
    where
        B: DataRef<i16>,
    {
        self.assert_not_empty("bfp_s16_accumulate", b.len());
        self.assert_acc_capacity("bfp_s16_accumulate", acc, b.len());
        let b_shr: RightShift = acc_exp - b.exp();
        assert!(
            (-14..=14).contains(&b_shr),
            "bfp_s16_accumulate: exponent gap {b_shr} outside [-14, 14]"
        );
        trace!("bfp_s16_accumulate: b_shr={b_shr}");
        vect_split_acc_s16_accumulate_ref(acc, b.data(), b_shr)
    }
}

impl<M: Allocator> SplitAccMerge for Module<M> {
    fn split_acc_merge<R>(&self, res: &mut BfpS32<R>, acc: &[SplitAccS32], acc_exp: Exponent)
    where
        R: DataMut<i32>,
    {
        self.assert_not_empty("split_acc_merge", res.len());
        self.assert_acc_capacity("split_acc_merge", acc, res.len());
        vect_s32_merge_accs_ref(res.data_mut(), acc);
        res.set_exp(acc_exp);
        res.update_hr();
    }
}

impl<M: Allocator> SplitAccSplit for Module<M> {
    fn split_acc_split<A>(&self, acc: &mut [SplitAccS32], a: &BfpS32<A>)
    where
        A: DataRef<i32>,
    {
        self.assert_not_empty("split_acc_split", a.len());
        self.assert_acc_capacity("split_acc_split", acc, a.len());
        vect_s32_split_accs_ref(acc, a.data());
    }
}

impl<M: Allocator> SplitAccShr for Module<M> {
    fn split_acc_shr(&self, acc: &mut [SplitAccS32], len: usize, shr: RightShift) {
        self.assert_acc_capacity("split_acc_shr", acc, len);
        vect_split_acc_s32_shr_ref(acc, len, shr);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        api::{BfpAlloc, BfpS16Accumulate, SplitAccMerge},
        layouts::{BfpConfig, BfpS16Owned, BfpS32Owned, Module, SplitAccS32},
    };

    #[test]
    #[should_panic(expected = "outside [-14, 14]")]
    fn accumulate_rejects_wide_exponent_gap() {
        let module: Module = Module::new(BfpConfig::default());
        let mut acc: Vec<SplitAccS32> = module.split_acc_alloc(4);
        let b: BfpS16Owned = BfpS16Owned::alloc(4, -20);
        module.bfp_s16_accumulate(&mut acc, -5, &b);
    }

    #[test]
    fn accumulate_then_merge() {
        let module: Module = Module::new(BfpConfig::default());
        let mut acc: Vec<SplitAccS32> = module.split_acc_alloc(20);
        let mut b: BfpS16Owned = BfpS16Owned::alloc(20, -8);
        b.set(-1000, -8);
        for _ in 0..50 {
            module.bfp_s16_accumulate(&mut acc, -8, &b);
        }
        let mut res: BfpS32Owned = BfpS32Owned::alloc(20, 0);
        module.split_acc_merge(&mut res, &acc, -8);
        assert_eq!(res.exp(), -8);
        assert!(res.data().iter().all(|&x| x == -50_000));
    }
}
