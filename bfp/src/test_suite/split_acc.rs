use sampling::source::Source;

use crate::{
    api::{BfpAlloc, BfpS16Accumulate, SplitAccMerge, SplitAccShr, SplitAccSplit},
    layouts::{Allocator, BfpS16Owned, BfpS32Owned, Exponent, Headroom, Module, SplitAccS32},
    test_suite::{assert_close_lsb, random_s16, random_s32, value},
};

/// Accumulates 16-bit vectors of mixed exponents, reclaims headroom halfway
/// and checks the merged result against the exact running sum.
pub fn test_split_acc_accumulate<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpS16Accumulate + SplitAccShr + SplitAccMerge + BfpAlloc,
{
    let mut source: Source = Source::new([60u8; 32]);
    let len: usize = 37;
    let rounds: usize = 24;

    let mut acc: Vec<SplitAccS32> = module.split_acc_alloc(len);
    let mut acc_exp: Exponent = -8;
    let mut want: Vec<f64> = vec![0.0; len];
    let mut lsbs: f64 = 0.0;

    for round in 0..rounds {
        let b_exp: Exponent = acc_exp + source.next_range_i32(-6, 6);
        let b: BfpS16Owned = random_s16(&mut source, len, b_exp, 2);
        let hr: Headroom = module.bfp_s16_accumulate(&mut acc, acc_exp, &b);
        (0..len).for_each(|k| want[k] += value(&b, k));
        if b_exp < acc_exp {
            lsbs += 0.5;
        }
        assert!(hr <= 15);

        if round == rounds / 2 {
            module.split_acc_shr(&mut acc, len, 3);
            acc_exp += 3;
            lsbs = lsbs / 8.0 + 0.5;
        }
    }

    let mut res: BfpS32Owned = module.bfp_alloc(len, 0);
    module.split_acc_merge(&mut res, &acc, acc_exp);
    assert_eq!(res.exp(), acc_exp);
    for k in 0..len {
        assert_close_lsb("split_acc", k, res.data()[k] as i64, acc_exp, want[k], lsbs.max(0.5));
    }
}

pub fn test_split_acc_split_merge<M: Allocator>(module: &Module<M>)
where
    Module<M>: SplitAccSplit + SplitAccMerge + BfpAlloc,
{
    let mut source: Source = Source::new([61u8; 32]);
    for len in [1, 16, 17, 100] {
        let a: BfpS32Owned = random_s32(&mut source, len, -13, 0);
        let mut acc: Vec<SplitAccS32> = module.split_acc_alloc(len);
        module.split_acc_split(&mut acc, &a);
        let mut res: BfpS32Owned = module.bfp_alloc(len, 0);
        module.split_acc_merge(&mut res, &acc, a.exp());
        assert_eq!(res, a);
    }
}
