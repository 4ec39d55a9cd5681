use sampling::source::Source;

use crate::{
    api::{BfpAlloc, BfpInverse, BfpSqrt},
    layouts::{Allocator, BfpS16Owned, BfpS32Owned, BfpVec, Exponent, Headroom, Module},
    test_suite::{assert_close_lsb, assert_hr_valid, random_s16, random_s32, value},
};

fn positive_s32(source: &mut Source, len: usize, exp: Exponent, hr: Headroom) -> BfpS32Owned {
    let a: BfpS32Owned = random_s32(source, len, exp, hr);
    let data: Vec<i32> = a.data().iter().map(|&x| x.saturating_abs().max(1)).collect();
    BfpVec::init(data, exp, true)
}

fn positive_s16(source: &mut Source, len: usize, exp: Exponent, hr: Headroom) -> BfpS16Owned {
    let a: BfpS16Owned = random_s16(source, len, exp, hr);
    let data: Vec<i16> = a.data().iter().map(|&x| x.saturating_abs().max(1)).collect();
    BfpVec::init(data, exp, true)
}

pub fn test_bfp_sqrt<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpSqrt<i32> + BfpSqrt<i16> + BfpAlloc,
{
    let mut source: Source = Source::new([30u8; 32]);
    let len: usize = 64;

    for (exp, hr) in [(-30, 0), (-29, 1), (0, 5), (17, 20), (-61, 3)] {
        let a: BfpS32Owned = positive_s32(&mut source, len, exp, hr);
        let mut res: BfpS32Owned = module.bfp_alloc(len, 0);
        module.bfp_sqrt(&mut res, &a);
        assert_hr_valid("bfp_sqrt<i32>", &res);
        for k in 0..len {
            assert_close_lsb("bfp_sqrt<i32>", k, res.data()[k] as i64, res.exp(), value(&a, k).sqrt(), 2.0);
        }
    }

    for (exp, hr) in [(-14, 0), (-13, 2), (6, 9)] {
        let a: BfpS16Owned = positive_s16(&mut source, len, exp, hr);
        let mut res: BfpS16Owned = module.bfp_alloc(len, 0);
        module.bfp_sqrt(&mut res, &a);
        assert_hr_valid("bfp_sqrt<i16>", &res);
        for k in 0..len {
            assert_close_lsb("bfp_sqrt<i16>", k, res.data()[k] as i64, res.exp(), value(&a, k).sqrt(), 2.0);
        }
    }

    // Negative inputs give zero.
    let a: BfpS32Owned = BfpVec::init(vec![-5, 1 << 28, -(1 << 30)], -28, true);
    let mut res: BfpS32Owned = module.bfp_alloc(3, 0);
    module.bfp_sqrt(&mut res, &a);
    assert_eq!(res.data()[0], 0);
    assert_eq!(res.data()[2], 0);
    assert_close_lsb("bfp_sqrt<i32>", 1, res.data()[1] as i64, res.exp(), 1.0, 1.0);
}

pub fn test_bfp_inverse<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpInverse<i32> + BfpInverse<i16> + BfpAlloc,
{
    let mut source: Source = Source::new([31u8; 32]);
    let len: usize = 48;

    for (exp, hr) in [(-31, 0), (4, 6), (-10, 17)] {
        let mut a: BfpS32Owned = random_s32(&mut source, len, exp, hr);
        a.data_mut().iter_mut().filter(|x| **x == 0).for_each(|x| *x = 1);
        let mut res: BfpS32Owned = module.bfp_alloc(len, 0);
        module.bfp_inverse(&mut res, &a);
        assert_hr_valid("bfp_inverse<i32>", &res);
        for k in 0..len {
            assert_close_lsb("bfp_inverse<i32>", k, res.data()[k] as i64, res.exp(), 1.0 / value(&a, k), 1.0);
        }
    }

    for (exp, hr) in [(-15, 0), (3, 4)] {
        let mut a: BfpS16Owned = random_s16(&mut source, len, exp, hr);
        a.data_mut().iter_mut().filter(|x| **x == 0).for_each(|x| *x = -1);
        let mut res: BfpS16Owned = module.bfp_alloc(len, 0);
        module.bfp_inverse(&mut res, &a);
        assert_hr_valid("bfp_inverse<i16>", &res);
        for k in 0..len {
            assert_close_lsb("bfp_inverse<i16>", k, res.data()[k] as i64, res.exp(), 1.0 / value(&a, k), 1.0);
        }
    }
}
