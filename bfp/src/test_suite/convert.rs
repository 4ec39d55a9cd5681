use sampling::source::Source;

use crate::{
    api::{
        BfpAlloc, BfpComplexS16ToS32, BfpComplexS32ImagPart, BfpComplexS32Make, BfpComplexS32RealPart, BfpComplexS32ToS16,
        BfpS16ToS32, BfpS32ToS16,
    },
    layouts::{Allocator, BfpComplexS16Owned, BfpComplexS32Owned, BfpS16Owned, BfpS32Owned, Module},
    test_suite::{assert_close_lsb, assert_hr_valid, random_complex_s16, random_complex_s32, random_s16, random_s32, value},
};

pub fn test_bfp_s32_s16_conversions<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpS32ToS16 + BfpS16ToS32 + BfpAlloc,
{
    let mut source: Source = Source::new([50u8; 32]);
    let len: usize = 45;

    for (exp, hr) in [(-20, 3), (0, 0), (7, 16), (-31, 25)] {
        let a: BfpS32Owned = random_s32(&mut source, len, exp, hr);
        let mut res: BfpS16Owned = module.bfp_alloc(len, 0);
        module.bfp_s32_to_s16(&mut res, &a);
        assert_eq!(res.exp(), exp + 16 - hr as i32);
        assert_hr_valid("bfp_s32_to_s16", &res);
        for k in 0..len {
            assert_close_lsb("bfp_s32_to_s16", k, res.data()[k] as i64, res.exp(), value(&a, k), 1.0);
        }
    }

    let a: BfpS16Owned = random_s16(&mut source, len, -4, 2);
    let mut res: BfpS32Owned = module.bfp_alloc(len, 0);
    module.bfp_s16_to_s32(&mut res, &a);
    assert_eq!(res.exp(), -12);
    assert_eq!(res.hr(), 10);
    for k in 0..len {
        assert_eq!(res.data()[k], (a.data()[k] as i32) << 8);
    }
}

pub fn test_bfp_complex_conversions<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpComplexS32ToS16 + BfpComplexS16ToS32 + BfpAlloc,
{
    let mut source: Source = Source::new([51u8; 32]);
    let len: usize = 33;

    let a: BfpComplexS32Owned = random_complex_s32(&mut source, len, -9, 5);
    let mut narrow: BfpComplexS16Owned = module.bfp_complex_s16_alloc(len, 0);
    module.bfp_complex_s32_to_s16(&mut narrow, &a);
    assert_eq!(narrow.exp(), -9 + 16 - a.hr() as i32);
    let lsb: f64 = 2f64.powi(narrow.exp());
    for k in 0..len {
        let (x, got) = (a.data()[k], narrow.get(k));
        let scale: f64 = 2f64.powi(a.exp());
        assert!((got.re as f64 * lsb - x.re as f64 * scale).abs() <= lsb, "bfp_complex_s32_to_s16.re[{k}]");
        assert!((got.im as f64 * lsb - x.im as f64 * scale).abs() <= lsb, "bfp_complex_s32_to_s16.im[{k}]");
    }

    let b: BfpComplexS16Owned = random_complex_s16(&mut source, len, 3, 1);
    let mut wide: BfpComplexS32Owned = module.bfp_complex_s32_alloc(len, 0);
    module.bfp_complex_s16_to_s32(&mut wide, &b);
    assert_eq!(wide.exp(), 3);
    for k in 0..len {
        let x = b.get(k);
        assert_eq!((wide.data()[k].re, wide.data()[k].im), (x.re as i32, x.im as i32));
    }
}

pub fn test_bfp_complex_make_parts<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpComplexS32Make + BfpComplexS32RealPart + BfpComplexS32ImagPart + BfpAlloc,
{
    let mut source: Source = Source::new([52u8; 32]);
    let len: usize = 21;
    for ((re_exp, re_hr), (im_exp, im_hr)) in [((0, 0), (0, 0)), ((-10, 4), (-3, 0)), ((5, 20), (-12, 1))] {
        let re: BfpS32Owned = random_s32(&mut source, len, re_exp, re_hr);
        let im: BfpS32Owned = random_s32(&mut source, len, im_exp, im_hr);
        let mut c: BfpComplexS32Owned = module.bfp_complex_s32_alloc(len, 0);
        module.bfp_complex_s32_make(&mut c, &re, &im);

        let mut re_out: BfpS32Owned = module.bfp_alloc(len, 0);
        let mut im_out: BfpS32Owned = module.bfp_alloc(len, 0);
        module.bfp_complex_s32_real_part(&mut re_out, &c);
        module.bfp_complex_s32_imag_part(&mut im_out, &c);
        assert_eq!((re_out.exp(), im_out.exp()), (c.exp(), c.exp()));
        assert_hr_valid("bfp_complex_s32_real_part", &re_out);
        assert_hr_valid("bfp_complex_s32_imag_part", &im_out);
        for k in 0..len {
            assert_close_lsb("bfp_complex_s32_make.re", k, re_out.data()[k] as i64, re_out.exp(), value(&re, k), 0.5);
            assert_close_lsb("bfp_complex_s32_make.im", k, im_out.data()[k] as i64, im_out.exp(), value(&im, k), 0.5);
        }
    }
}
