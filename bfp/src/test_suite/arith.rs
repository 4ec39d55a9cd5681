use sampling::source::Source;

use crate::{
    api::{
        BfpAbs, BfpAdd, BfpAddInplace, BfpAddScalar, BfpAlloc, BfpClip, BfpMaxElementwise, BfpMinElementwise, BfpRect, BfpShl,
        BfpSub, BfpSubInplace, BfpUseExponent,
    },
    layouts::{Allocator, BfpS16Owned, BfpS32Owned, BfpVec, Float, Module},
    prepare::{BinaryPlan, vect_add_prepare},
    test_suite::{assert_close_lsb, assert_hr_valid, random_s16, random_s32, value},
};

/// Two 16-bit vectors at exponents -4 and -2 with 3 and 5 bits of headroom
/// are aligned on exponent -6 and summed within one rounding unit.
pub fn test_bfp_add_scenario<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpAdd<i16> + BfpAlloc,
{
    let plan: BinaryPlan = vect_add_prepare(-4, -2, 3, 5);
    assert_eq!(
        plan,
        BinaryPlan {
            a_exp: -6,
            b_shr: -2,
            c_shr: -4
        }
    );

    let mut source: Source = Source::new([0u8; 32]);
    let len: usize = 64;
    let b: BfpS16Owned = random_s16(&mut source, len, -4, 3);
    let c: BfpS16Owned = random_s16(&mut source, len, -2, 5);
    assert_eq!((b.hr(), c.hr()), (3, 5));

    let mut res: BfpS16Owned = module.bfp_alloc(len, 0);
    module.bfp_add(&mut res, &b, &c);
    assert_eq!(res.exp(), -6);
    assert_hr_valid("bfp_add", &res);
    for k in 0..len {
        let want: f64 = value(&b, k) + value(&c, k);
        assert_close_lsb("bfp_add", k, res.data()[k] as i64, res.exp(), want, 1.0);
    }
}

pub fn test_bfp_add_sub<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpAdd<i32> + BfpSub<i32> + BfpAddInplace<i32> + BfpSubInplace<i32> + BfpAlloc,
{
    let mut source: Source = Source::new([1u8; 32]);
    let len: usize = 37;
    for (b_exp, c_exp) in [(0, 0), (-10, -3), (5, -7)] {
        for (b_hr, c_hr) in [(0, 0), (0, 7), (4, 1), (12, 20)] {
            let b: BfpS32Owned = random_s32(&mut source, len, b_exp, b_hr);
            let c: BfpS32Owned = random_s32(&mut source, len, c_exp, c_hr);

            let mut sum: BfpS32Owned = module.bfp_alloc(len, 0);
            let mut diff: BfpS32Owned = module.bfp_alloc(len, 0);
            module.bfp_add(&mut sum, &b, &c);
            module.bfp_sub(&mut diff, &b, &c);
            assert_hr_valid("bfp_add", &sum);
            assert_hr_valid("bfp_sub", &diff);

            let mut sum_inplace: BfpS32Owned = b.clone();
            let mut diff_inplace: BfpS32Owned = b.clone();
            module.bfp_add_inplace(&mut sum_inplace, &c);
            module.bfp_sub_inplace(&mut diff_inplace, &c);
            assert_eq!(sum_inplace, sum);
            assert_eq!(diff_inplace, diff);

            for k in 0..len {
                let (x, y): (f64, f64) = (value(&b, k), value(&c, k));
                assert_close_lsb("bfp_add", k, sum.data()[k] as i64, sum.exp(), x + y, 1.0);
                assert_close_lsb("bfp_sub", k, diff.data()[k] as i64, diff.exp(), x - y, 1.0);
            }
        }
    }
}

pub fn test_bfp_shl<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpShl<i16> + BfpShl<i32> + BfpAlloc,
{
    let mut source: Source = Source::new([2u8; 32]);
    let a: BfpS32Owned = random_s32(&mut source, 16, -3, 5);
    let mut res: BfpS32Owned = module.bfp_alloc(16, 0);
    module.bfp_shl(&mut res, &a, 3);
    assert_eq!(res.exp(), -3);
    assert_eq!(res.hr(), 2);
    for k in 0..16 {
        assert_eq!(res.data()[k], a.data()[k] << 3);
    }

    // The most negative mantissa saturates one unit short.
    let a: BfpS16Owned = BfpVec::init(vec![i16::MIN, 1000, -1], 0, true);
    let mut res: BfpS16Owned = module.bfp_alloc(3, 0);
    module.bfp_shl(&mut res, &a, 1);
    assert_eq!(res.data(), &[-32767, 2000, -2]);
    assert_eq!(res.hr(), 0);
}

pub fn test_bfp_use_exponent<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpUseExponent<i32>,
{
    let mut source: Source = Source::new([3u8; 32]);
    let a: BfpS32Owned = random_s32(&mut source, 25, -20, 6);

    let mut up: BfpS32Owned = a.clone();
    module.bfp_use_exponent(&mut up, -17);
    assert_eq!(up.exp(), -17);
    assert_hr_valid("bfp_use_exponent", &up);
    for k in 0..25 {
        assert_close_lsb("bfp_use_exponent", k, up.data()[k] as i64, up.exp(), value(&a, k), 0.5);
    }

    let mut down: BfpS32Owned = a.clone();
    module.bfp_use_exponent(&mut down, -26);
    assert_eq!(down.hr(), 0);
    for k in 0..25 {
        assert_eq!(down.data()[k] as i64, (a.data()[k] as i64) << 6);
    }
}

pub fn test_bfp_add_scalar<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpAddScalar<i32> + BfpAddScalar<i16> + BfpAlloc,
{
    let mut source: Source = Source::new([4u8; 32]);
    let len: usize = 20;

    let a: BfpS32Owned = random_s32(&mut source, len, -12, 3);
    let c: Float<i32> = Float::new(-0x2345, -6);
    let mut res: BfpS32Owned = module.bfp_alloc(len, 0);
    module.bfp_add_scalar(&mut res, &a, c);
    assert_hr_valid("bfp_add_scalar", &res);
    for k in 0..len {
        let want: f64 = value(&a, k) + c.to_f64();
        assert_close_lsb("bfp_add_scalar", k, res.data()[k] as i64, res.exp(), want, 1.0);
    }

    let a: BfpS16Owned = random_s16(&mut source, len, 2, 0);
    let c: Float<i16> = Float::new(7, 10);
    let mut res: BfpS16Owned = module.bfp_alloc(len, 0);
    module.bfp_add_scalar(&mut res, &a, c);
    assert_hr_valid("bfp_add_scalar", &res);
    for k in 0..len {
        let want: f64 = value(&a, k) + c.to_f64();
        assert_close_lsb("bfp_add_scalar", k, res.data()[k] as i64, res.exp(), want, 1.0);
    }
}

pub fn test_bfp_abs_rect_clip<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpAbs<i32> + BfpRect<i32> + BfpClip<i32> + BfpAlloc,
{
    let mut source: Source = Source::new([5u8; 32]);
    let len: usize = 50;
    let a: BfpS32Owned = random_s32(&mut source, len, -9, 18);

    let mut abs: BfpS32Owned = module.bfp_alloc(len, 0);
    let mut rect: BfpS32Owned = module.bfp_alloc(len, 0);
    let mut clip: BfpS32Owned = module.bfp_alloc(len, 0);
    module.bfp_abs(&mut abs, &a);
    module.bfp_rect(&mut rect, &a);
    module.bfp_clip(&mut clip, &a, -1000, 2000, -9);

    for (op, r) in [("bfp_abs", &abs), ("bfp_rect", &rect), ("bfp_clip", &clip)] {
        assert_eq!(r.exp(), -9, "{op}");
        assert_hr_valid(op, r);
    }
    for k in 0..len {
        let x: i32 = a.data()[k];
        assert_eq!(abs.data()[k], x.abs());
        assert_eq!(rect.data()[k], x.max(0));
        assert_eq!(clip.data()[k], x.clamp(-1000, 2000));
    }
}

pub fn test_bfp_elementwise_min_max<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpMaxElementwise<i16> + BfpMinElementwise<i16> + BfpAlloc,
{
    let mut source: Source = Source::new([6u8; 32]);
    let len: usize = 40;
    let a: BfpS16Owned = random_s16(&mut source, len, -3, 2);
    let b: BfpS16Owned = random_s16(&mut source, len, -6, 0);

    let mut max: BfpS16Owned = module.bfp_alloc(len, 0);
    let mut min: BfpS16Owned = module.bfp_alloc(len, 0);
    module.bfp_max_elementwise(&mut max, &a, &b);
    module.bfp_min_elementwise(&mut min, &a, &b);
    assert_hr_valid("bfp_max_elementwise", &max);
    assert_hr_valid("bfp_min_elementwise", &min);
    for k in 0..len {
        let (x, y): (f64, f64) = (value(&a, k), value(&b, k));
        assert_close_lsb("bfp_max_elementwise", k, max.data()[k] as i64, max.exp(), x.max(y), 1.0);
        assert_close_lsb("bfp_min_elementwise", k, min.data()[k] as i64, min.exp(), x.min(y), 1.0);
    }
}
