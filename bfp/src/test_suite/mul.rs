use sampling::source::Source;

use crate::{
    api::{BfpAlloc, BfpMacc, BfpMul, BfpMulInplace, BfpNmacc, BfpScale, BfpScaleInplace},
    layouts::{Allocator, BfpS16Owned, BfpS32Owned, BfpVec, Exponent, Float, Headroom, Module},
    test_suite::{assert_close_lsb, assert_hr_valid, random_s16, random_s32, value},
};

const HR_PAIRS: [(Headroom, Headroom); 6] = [(0, 0), (1, 0), (0, 3), (3, 5), (7, 9), (15, 2)];

pub fn test_bfp_s32_mul<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpMul<i32> + BfpMulInplace<i32> + BfpAlloc,
{
    let mut source: Source = Source::new([10u8; 32]);
    let len: usize = 33;
    for (b_hr, c_hr) in HR_PAIRS {
        let b: BfpS32Owned = random_s32(&mut source, len, -25, b_hr);
        let c: BfpS32Owned = random_s32(&mut source, len, 4, c_hr);

        let mut res: BfpS32Owned = module.bfp_alloc(len, 0);
        module.bfp_mul(&mut res, &b, &c);
        assert_hr_valid("bfp_mul<i32>", &res);
        for k in 0..len {
            let want: f64 = value(&b, k) * value(&c, k);
            assert_close_lsb("bfp_mul<i32>", k, res.data()[k] as i64, res.exp(), want, 3.0);
        }

        let mut inplace: BfpS32Owned = b.clone();
        module.bfp_mul_inplace(&mut inplace, &c);
        assert_eq!(inplace, res);
    }
}

pub fn test_bfp_s16_mul<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpMul<i16> + BfpMulInplace<i16> + BfpAlloc,
{
    let mut source: Source = Source::new([11u8; 32]);
    let len: usize = 33;
    for (b_hr, c_hr) in HR_PAIRS {
        let b: BfpS16Owned = random_s16(&mut source, len, -9, b_hr);
        let c: BfpS16Owned = random_s16(&mut source, len, -2, c_hr);

        let mut res: BfpS16Owned = module.bfp_alloc(len, 0);
        module.bfp_mul(&mut res, &b, &c);
        assert_hr_valid("bfp_mul<i16>", &res);
        for k in 0..len {
            let want: f64 = value(&b, k) * value(&c, k);
            assert_close_lsb("bfp_mul<i16>", k, res.data()[k] as i64, res.exp(), want, 1.0);
        }

        let mut inplace: BfpS16Owned = b.clone();
        module.bfp_mul_inplace(&mut inplace, &c);
        assert_eq!(inplace, res);
    }
}

/// Multiplying the most negative mantissas allowed by each headroom lands
/// exactly on one bit of output headroom.
pub fn test_bfp_mul_minimal_exponent<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpMul<i32> + BfpMul<i16> + BfpAlloc,
{
    let len: usize = 8;
    let (b_exp, c_exp): (Exponent, Exponent) = (-7, 3);
    for (b_hr, c_hr) in [(0, 0), (1, 0), (0, 3), (3, 5), (7, 9)] {
        let b: BfpS32Owned = BfpVec::init(vec![-(1i64 << (31 - b_hr)) as i32; len], b_exp, true);
        let c: BfpS32Owned = BfpVec::init(vec![-(1i64 << (31 - c_hr)) as i32; len], c_exp, true);
        assert_eq!((b.hr(), c.hr()), (b_hr, c_hr));
        let mut res: BfpS32Owned = module.bfp_alloc(len, 0);
        module.bfp_mul(&mut res, &b, &c);
        assert_eq!(res.exp(), b_exp + c_exp + 32 - (b_hr + c_hr) as i32);
        assert!(res.data().iter().all(|&x| x == 1 << 30), "bfp_mul<i32> hr=({b_hr}, {c_hr}): {res}");

        let b: BfpS16Owned = BfpVec::init(vec![-(1i32 << (15 - b_hr)) as i16; len], b_exp, true);
        let c: BfpS16Owned = BfpVec::init(vec![-(1i32 << (15 - c_hr)) as i16; len], c_exp, true);
        let mut res: BfpS16Owned = module.bfp_alloc(len, 0);
        module.bfp_mul(&mut res, &b, &c);
        assert_eq!(res.exp(), b_exp + c_exp + 16 - (b_hr + c_hr) as i32);
        assert!(res.data().iter().all(|&x| x == 1 << 14), "bfp_mul<i16> hr=({b_hr}, {c_hr}): {res}");
    }
}

pub fn test_bfp_scale<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpScale<i32> + BfpScale<i16> + BfpScaleInplace<i32> + BfpScaleInplace<i16> + BfpAlloc,
{
    let mut source: Source = Source::new([12u8; 32]);
    let len: usize = 29;

    for c in [Float::new(0x12345, -20), Float::new(i32::MIN + 1, 0), Float::new(-3, 7)] {
        let a: BfpS32Owned = random_s32(&mut source, len, -14, 2);
        let mut res: BfpS32Owned = module.bfp_alloc(len, 0);
        module.bfp_scale(&mut res, &a, c);
        assert_hr_valid("bfp_scale<i32>", &res);
        for k in 0..len {
            let want: f64 = value(&a, k) * c.to_f64();
            assert_close_lsb("bfp_scale<i32>", k, res.data()[k] as i64, res.exp(), want, 3.0);
        }
        let mut inplace: BfpS32Owned = a.clone();
        module.bfp_scale_inplace(&mut inplace, c);
        assert_eq!(inplace, res);
    }

    for c in [Float::new(-300i16, -4), Float::new(i16::MAX, -15), Float::new(1, 2)] {
        let a: BfpS16Owned = random_s16(&mut source, len, 3, 1);
        let mut res: BfpS16Owned = module.bfp_alloc(len, 0);
        module.bfp_scale(&mut res, &a, c);
        assert_hr_valid("bfp_scale<i16>", &res);
        for k in 0..len {
            let want: f64 = value(&a, k) * c.to_f64();
            assert_close_lsb("bfp_scale<i16>", k, res.data()[k] as i64, res.exp(), want, 2.0);
        }
        let mut inplace: BfpS16Owned = a.clone();
        module.bfp_scale_inplace(&mut inplace, c);
        assert_eq!(inplace, res);
    }
}

pub fn test_bfp_s32_macc<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpMacc<i32> + BfpNmacc<i32>,
{
    let mut source: Source = Source::new([13u8; 32]);
    let len: usize = 24;
    for (acc_exp, acc_hr) in [(-10, 2), (30, 0), (-60, 12)] {
        for (b_hr, c_hr) in [(0, 0), (4, 1), (10, 10)] {
            let acc: BfpS32Owned = random_s32(&mut source, len, acc_exp, acc_hr);
            let b: BfpS32Owned = random_s32(&mut source, len, -20, b_hr);
            let c: BfpS32Owned = random_s32(&mut source, len, -12, c_hr);

            let mut plus: BfpS32Owned = acc.clone();
            let mut minus: BfpS32Owned = acc.clone();
            module.bfp_macc(&mut plus, &b, &c);
            module.bfp_nmacc(&mut minus, &b, &c);
            assert_hr_valid("bfp_macc<i32>", &plus);
            assert_hr_valid("bfp_nmacc<i32>", &minus);
            for k in 0..len {
                let p: f64 = value(&b, k) * value(&c, k);
                let x: f64 = value(&acc, k);
                assert_close_lsb("bfp_macc<i32>", k, plus.data()[k] as i64, plus.exp(), x + p, 3.0);
                assert_close_lsb("bfp_nmacc<i32>", k, minus.data()[k] as i64, minus.exp(), x - p, 3.0);
            }
        }
    }
}

pub fn test_bfp_s16_macc<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpMacc<i16> + BfpNmacc<i16>,
{
    let mut source: Source = Source::new([14u8; 32]);
    let len: usize = 24;
    for (acc_exp, acc_hr) in [(-10, 3), (12, 0)] {
        for (b_hr, c_hr) in [(0, 0), (1, 1), (6, 2)] {
            let acc: BfpS16Owned = random_s16(&mut source, len, acc_exp, acc_hr);
            let b: BfpS16Owned = random_s16(&mut source, len, -10, b_hr);
            let c: BfpS16Owned = random_s16(&mut source, len, -3, c_hr);

            let mut plus: BfpS16Owned = acc.clone();
            let mut minus: BfpS16Owned = acc.clone();
            module.bfp_macc(&mut plus, &b, &c);
            module.bfp_nmacc(&mut minus, &b, &c);
            assert_hr_valid("bfp_macc<i16>", &plus);
            assert_hr_valid("bfp_nmacc<i16>", &minus);
            for k in 0..len {
                let p: f64 = value(&b, k) * value(&c, k);
                let x: f64 = value(&acc, k);
                assert_close_lsb("bfp_macc<i16>", k, plus.data()[k] as i64, plus.exp(), x + p, 2.0);
                assert_close_lsb("bfp_nmacc<i16>", k, minus.data()[k] as i64, minus.exp(), x - p, 2.0);
            }
        }
    }
}
