use sampling::source::Source;

use crate::{
    api::{
        BfpAlloc, BfpComplexS16Add, BfpComplexS16AddScalar, BfpComplexS16ConjMacc, BfpComplexS16ConjMul, BfpComplexS16ConjNmacc,
        BfpComplexS16Conjugate, BfpComplexS16Energy, BfpComplexS16Mag, BfpComplexS16Macc, BfpComplexS16Mul, BfpComplexS16Nmacc,
        BfpComplexS16Shl, BfpComplexS16SquaredMag, BfpComplexS16Sub, BfpComplexS16Sum, BfpComplexS16UseExponent, BfpComplexS32Add,
        BfpComplexS32AddScalar, BfpComplexS32ConjMacc, BfpComplexS32ConjMul, BfpComplexS32ConjNmacc, BfpComplexS32Conjugate,
        BfpComplexS32Energy, BfpComplexS32Mag, BfpComplexS32Macc, BfpComplexS32Mul, BfpComplexS32Nmacc, BfpComplexS32RealMul,
        BfpComplexS32Scale, BfpComplexS32Shl, BfpComplexS32SquaredMag, BfpComplexS32Sub, BfpComplexS32Sum, BfpComplexS32UseExponent,
    },
    layouts::{
        Allocator, BfpComplexS16, BfpComplexS16Owned, BfpComplexS32, BfpComplexS32Owned, BfpS16Owned, BfpS32Owned, ComplexS16,
        ComplexS32, DataRef, Exponent, FloatComplexS16, FloatComplexS32, FloatComplexS64, FloatS64, Headroom, Module,
    },
    reference::{vect_complex_s16_headroom, vect_complex_s32_headroom},
    test_suite::{assert_close_lsb, assert_hr_valid, random_complex_s16, random_complex_s32, random_s32, value},
};

fn value_s32<D: DataRef<ComplexS32>>(a: &BfpComplexS32<D>, k: usize) -> (f64, f64) {
    let scale: f64 = 2f64.powi(a.exp());
    (a.data()[k].re as f64 * scale, a.data()[k].im as f64 * scale)
}

fn value_s16<D: DataRef<i16>>(a: &BfpComplexS16<D>, k: usize) -> (f64, f64) {
    let scale: f64 = 2f64.powi(a.exp());
    (a.real()[k] as f64 * scale, a.imag()[k] as f64 * scale)
}

fn cmul(x: (f64, f64), y: (f64, f64), conj: bool) -> (f64, f64) {
    let y: (f64, f64) = if conj { (y.0, -y.1) } else { y };
    (x.0 * y.0 - x.1 * y.1, x.0 * y.1 + x.1 * y.0)
}

#[track_caller]
fn assert_complex_close(op: &str, k: usize, mant: (i64, i64), exp: Exponent, want: (f64, f64), lsbs: f64) {
    assert_close_lsb(&format!("{op}.re"), k, mant.0, exp, want.0, lsbs);
    assert_close_lsb(&format!("{op}.im"), k, mant.1, exp, want.1, lsbs);
}

#[track_caller]
fn assert_s32_close(op: &str, res: &BfpComplexS32Owned, want: impl Fn(usize) -> (f64, f64), lsbs: f64) {
    assert!(res.hr() <= vect_complex_s32_headroom(res.data()), "{op}: stored hr overstated");
    for (k, x) in res.data().iter().enumerate() {
        assert_complex_close(op, k, (x.re as i64, x.im as i64), res.exp(), want(k), lsbs);
    }
}

#[track_caller]
fn assert_s16_close(op: &str, res: &BfpComplexS16Owned, want: impl Fn(usize) -> (f64, f64), lsbs: f64) {
    assert!(res.hr() <= vect_complex_s16_headroom(res.real(), res.imag()), "{op}: stored hr overstated");
    for k in 0..res.len() {
        let mant: (i64, i64) = (res.real()[k] as i64, res.imag()[k] as i64);
        assert_complex_close(op, k, mant, res.exp(), want(k), lsbs);
    }
}

const HR_PAIRS: [(Headroom, Headroom); 5] = [(0, 0), (0, 1), (2, 0), (3, 4), (9, 12)];

pub fn test_bfp_complex_s32_add_sub<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpComplexS32Add + BfpComplexS32Sub + BfpComplexS32Sum + BfpAlloc,
{
    let mut source: Source = Source::new([40u8; 32]);
    let len: usize = 31;
    for (b_hr, c_hr) in HR_PAIRS {
        let b: BfpComplexS32Owned = random_complex_s32(&mut source, len, -5, b_hr);
        let c: BfpComplexS32Owned = random_complex_s32(&mut source, len, -9, c_hr);
        let mut sum: BfpComplexS32Owned = module.bfp_complex_s32_alloc(len, 0);
        let mut diff: BfpComplexS32Owned = module.bfp_complex_s32_alloc(len, 0);
        module.bfp_complex_s32_add(&mut sum, &b, &c);
        module.bfp_complex_s32_sub(&mut diff, &b, &c);
        assert_s32_close(
            "bfp_complex_s32_add",
            &sum,
            |k| {
                let (x, y) = (value_s32(&b, k), value_s32(&c, k));
                (x.0 + y.0, x.1 + y.1)
            },
            1.0,
        );
        assert_s32_close(
            "bfp_complex_s32_sub",
            &diff,
            |k| {
                let (x, y) = (value_s32(&b, k), value_s32(&c, k));
                (x.0 - y.0, x.1 - y.1)
            },
            1.0,
        );
    }

    for (len, hr) in [(100, 0), (4096, 1), (5000, 0)] {
        let a: BfpComplexS32Owned = random_complex_s32(&mut source, len, -3, hr);
        let sum: FloatComplexS64 = module.bfp_complex_s32_sum(&a);
        let want: (f64, f64) = (0..len).fold((0.0, 0.0), |acc, k| {
            let x: (f64, f64) = value_s32(&a, k);
            (acc.0 + x.0, acc.1 + x.1)
        });
        assert_complex_close("bfp_complex_s32_sum", len, (sum.mant.re, sum.mant.im), sum.exp, want, len as f64);
    }
}

pub fn test_bfp_complex_s32_mul<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpComplexS32Mul + BfpComplexS32ConjMul + BfpComplexS32RealMul + BfpComplexS32Scale + BfpAlloc,
{
    let mut source: Source = Source::new([41u8; 32]);
    let len: usize = 27;
    for (b_hr, c_hr) in HR_PAIRS {
        let b: BfpComplexS32Owned = random_complex_s32(&mut source, len, -20, b_hr);
        let c: BfpComplexS32Owned = random_complex_s32(&mut source, len, 3, c_hr);

        let mut res: BfpComplexS32Owned = module.bfp_complex_s32_alloc(len, 0);
        module.bfp_complex_s32_mul(&mut res, &b, &c);
        assert_s32_close("bfp_complex_s32_mul", &res, |k| cmul(value_s32(&b, k), value_s32(&c, k), false), 4.0);

        module.bfp_complex_s32_conj_mul(&mut res, &b, &c);
        assert_s32_close("bfp_complex_s32_conj_mul", &res, |k| cmul(value_s32(&b, k), value_s32(&c, k), true), 4.0);

        let r: BfpS32Owned = random_s32(&mut source, len, 3, c_hr);
        module.bfp_complex_s32_real_mul(&mut res, &b, &r);
        assert_s32_close(
            "bfp_complex_s32_real_mul",
            &res,
            |k| {
                let x: (f64, f64) = value_s32(&b, k);
                (x.0 * value(&r, k), x.1 * value(&r, k))
            },
            3.0,
        );
    }

    // a * conj(a) is real and non-negative.
    let a: BfpComplexS32Owned = random_complex_s32(&mut source, len, -30, 1);
    let mut res: BfpComplexS32Owned = module.bfp_complex_s32_alloc(len, 0);
    module.bfp_complex_s32_conj_mul(&mut res, &a, &a);
    assert!(res.data().iter().all(|x| x.im == 0 && x.re >= 0), "{res}");

    let c: FloatComplexS32 = FloatComplexS32::new(ComplexS32::new(0x3456, -0x789a), -12);
    module.bfp_complex_s32_scale(&mut res, &a, c);
    let cv: (f64, f64) = (c.mant.re as f64 * 2f64.powi(c.exp), c.mant.im as f64 * 2f64.powi(c.exp));
    assert_s32_close("bfp_complex_s32_scale", &res, |k| cmul(value_s32(&a, k), cv, false), 4.0);
}

pub fn test_bfp_complex_s32_macc<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpComplexS32Macc + BfpComplexS32Nmacc + BfpComplexS32ConjMacc + BfpComplexS32ConjNmacc,
{
    let mut source: Source = Source::new([42u8; 32]);
    let len: usize = 19;
    for (acc_exp, acc_hr) in [(-40, 0), (0, 5), (-80, 20)] {
        for (b_hr, c_hr) in [(0, 0), (3, 1), (8, 8)] {
            let acc: BfpComplexS32Owned = random_complex_s32(&mut source, len, acc_exp, acc_hr);
            let b: BfpComplexS32Owned = random_complex_s32(&mut source, len, -31, b_hr);
            let c: BfpComplexS32Owned = random_complex_s32(&mut source, len, -20, c_hr);

            for (op, conj, negate) in [
                ("bfp_complex_s32_macc", false, false),
                ("bfp_complex_s32_nmacc", false, true),
                ("bfp_complex_s32_conj_macc", true, false),
                ("bfp_complex_s32_conj_nmacc", true, true),
            ] {
                let mut res: BfpComplexS32Owned = acc.clone();
                match (conj, negate) {
                    (false, false) => module.bfp_complex_s32_macc(&mut res, &b, &c),
                    (false, true) => module.bfp_complex_s32_nmacc(&mut res, &b, &c),
                    (true, false) => module.bfp_complex_s32_conj_macc(&mut res, &b, &c),
                    (true, true) => module.bfp_complex_s32_conj_nmacc(&mut res, &b, &c),
                }
                let sign: f64 = if negate { -1.0 } else { 1.0 };
                assert_s32_close(
                    op,
                    &res,
                    |k| {
                        let x: (f64, f64) = value_s32(&acc, k);
                        let p: (f64, f64) = cmul(value_s32(&b, k), value_s32(&c, k), conj);
                        (x.0 + sign * p.0, x.1 + sign * p.1)
                    },
                    5.0,
                );
            }
        }
    }
}

pub fn test_bfp_complex_s32_mag<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpComplexS32Mag + BfpComplexS32SquaredMag + BfpAlloc,
{
    let mut source: Source = Source::new([43u8; 32]);
    let len: usize = 40;
    for hr in [0, 1, 6, 25] {
        let a: BfpComplexS32Owned = random_complex_s32(&mut source, len, -16, hr);
        let mut mag: BfpS32Owned = module.bfp_alloc(len, 0);
        let mut sq: BfpS32Owned = module.bfp_alloc(len, 0);
        module.bfp_complex_s32_mag(&mut mag, &a);
        module.bfp_complex_s32_squared_mag(&mut sq, &a);
        assert_hr_valid("bfp_complex_s32_mag", &mag);
        assert_hr_valid("bfp_complex_s32_squared_mag", &sq);
        for k in 0..len {
            let (re, im) = value_s32(&a, k);
            let want: f64 = re * re + im * im;
            assert_close_lsb("bfp_complex_s32_mag", k, mag.data()[k] as i64, mag.exp(), want.sqrt(), 2.0);
            assert_close_lsb("bfp_complex_s32_squared_mag", k, sq.data()[k] as i64, sq.exp(), want, 4.0);
        }
    }
}

pub fn test_bfp_complex_s16_mul<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpComplexS16Mul + BfpComplexS16ConjMul + BfpComplexS16Sum + BfpAlloc,
{
    let mut source: Source = Source::new([44u8; 32]);
    let len: usize = 27;
    for (b_hr, c_hr) in HR_PAIRS {
        let b: BfpComplexS16Owned = random_complex_s16(&mut source, len, -7, b_hr);
        let c: BfpComplexS16Owned = random_complex_s16(&mut source, len, 2, c_hr);
        let mut res: BfpComplexS16Owned = module.bfp_complex_s16_alloc(len, 0);

        module.bfp_complex_s16_mul(&mut res, &b, &c);
        assert_s16_close("bfp_complex_s16_mul", &res, |k| cmul(value_s16(&b, k), value_s16(&c, k), false), 2.0);

        module.bfp_complex_s16_conj_mul(&mut res, &b, &c);
        assert_s16_close("bfp_complex_s16_conj_mul", &res, |k| cmul(value_s16(&b, k), value_s16(&c, k), true), 2.0);
    }

    let a: BfpComplexS16Owned = random_complex_s16(&mut source, 3000, 4, 0);
    let sum: FloatComplexS64 = module.bfp_complex_s16_sum(&a);
    let re: i64 = a.real().iter().map(|&x| x as i64).sum();
    let im: i64 = a.imag().iter().map(|&x| x as i64).sum();
    assert_eq!((sum.mant.re, sum.mant.im, sum.exp), (re, im, 4));
}

pub fn test_bfp_complex_s16_macc<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpComplexS16Macc + BfpComplexS16Nmacc + BfpComplexS16ConjMacc + BfpComplexS16ConjNmacc,
{
    let mut source: Source = Source::new([45u8; 32]);
    let len: usize = 19;
    for (acc_exp, acc_hr) in [(-20, 0), (4, 3)] {
        for (b_hr, c_hr) in [(0, 0), (2, 1), (6, 5)] {
            let acc: BfpComplexS16Owned = random_complex_s16(&mut source, len, acc_exp, acc_hr);
            let b: BfpComplexS16Owned = random_complex_s16(&mut source, len, -15, b_hr);
            let c: BfpComplexS16Owned = random_complex_s16(&mut source, len, -6, c_hr);

            for (op, conj, negate) in [
                ("bfp_complex_s16_macc", false, false),
                ("bfp_complex_s16_nmacc", false, true),
                ("bfp_complex_s16_conj_macc", true, false),
                ("bfp_complex_s16_conj_nmacc", true, true),
            ] {
                let mut res: BfpComplexS16Owned = acc.clone();
                match (conj, negate) {
                    (false, false) => module.bfp_complex_s16_macc(&mut res, &b, &c),
                    (false, true) => module.bfp_complex_s16_nmacc(&mut res, &b, &c),
                    (true, false) => module.bfp_complex_s16_conj_macc(&mut res, &b, &c),
                    (true, true) => module.bfp_complex_s16_conj_nmacc(&mut res, &b, &c),
                }
                let sign: f64 = if negate { -1.0 } else { 1.0 };
                assert_s16_close(
                    op,
                    &res,
                    |k| {
                        let x: (f64, f64) = value_s16(&acc, k);
                        let p: (f64, f64) = cmul(value_s16(&b, k), value_s16(&c, k), conj);
                        (x.0 + sign * p.0, x.1 + sign * p.1)
                    },
                    3.0,
                );
            }
        }
    }
}

pub fn test_bfp_complex_s16_mag<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpComplexS16Mag + BfpComplexS16SquaredMag + BfpAlloc,
{
    let mut source: Source = Source::new([46u8; 32]);
    let len: usize = 40;
    for hr in [0, 1, 4, 9] {
        let a: BfpComplexS16Owned = random_complex_s16(&mut source, len, -3, hr);
        let mut mag: BfpS16Owned = module.bfp_alloc(len, 0);
        let mut sq: BfpS16Owned = module.bfp_alloc(len, 0);
        module.bfp_complex_s16_mag(&mut mag, &a);
        module.bfp_complex_s16_squared_mag(&mut sq, &a);
        assert_hr_valid("bfp_complex_s16_mag", &mag);
        assert_hr_valid("bfp_complex_s16_squared_mag", &sq);
        for k in 0..len {
            let (re, im) = value_s16(&a, k);
            let want: f64 = re * re + im * im;
            assert_close_lsb("bfp_complex_s16_mag", k, mag.data()[k] as i64, mag.exp(), want.sqrt(), 2.0);
            assert_close_lsb("bfp_complex_s16_squared_mag", k, sq.data()[k] as i64, sq.exp(), want, 2.0);
        }
    }
}

pub fn test_bfp_complex_s32_shift_conj_energy<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpComplexS32Shl
        + BfpComplexS32UseExponent
        + BfpComplexS32Conjugate
        + BfpComplexS32AddScalar
        + BfpComplexS32Energy
        + BfpAlloc,
{
    let mut source: Source = Source::new([47u8; 32]);
    let len: usize = 41;

    let a: BfpComplexS32Owned = random_complex_s32(&mut source, len, -10, 4);
    let mut res: BfpComplexS32Owned = module.bfp_complex_s32_alloc(len, 0);
    module.bfp_complex_s32_shl(&mut res, &a, 2);
    assert_eq!((res.exp(), res.hr()), (-10, 2));
    assert_s32_close("bfp_complex_s32_shl", &res, |k| (value_s32(&a, k).0 * 4.0, value_s32(&a, k).1 * 4.0), 0.0);

    let mut b: BfpComplexS32Owned = a.clone();
    module.bfp_complex_s32_use_exponent(&mut b, -13);
    assert_eq!((b.exp(), b.hr()), (-13, 1));
    assert_s32_close("bfp_complex_s32_use_exponent", &b, |k| value_s32(&a, k), 0.0);
    module.bfp_complex_s32_use_exponent(&mut b, -8);
    assert_eq!(b.exp(), -8);
    assert_s32_close("bfp_complex_s32_use_exponent", &b, |k| value_s32(&a, k), 0.5);

    module.bfp_complex_s32_conjugate(&mut res, &a);
    assert_eq!(res.exp(), a.exp());
    assert_s32_close("bfp_complex_s32_conjugate", &res, |k| (value_s32(&a, k).0, -value_s32(&a, k).1), 0.0);

    let c: FloatComplexS32 = FloatComplexS32::new(ComplexS32::new(12345, -6789), -3);
    let b: BfpComplexS32Owned = random_complex_s32(&mut source, len, -5, 1);
    module.bfp_complex_s32_add_scalar(&mut res, &b, c);
    assert_s32_close(
        "bfp_complex_s32_add_scalar",
        &res,
        |k| (value_s32(&b, k).0 + 12345.0 / 8.0, value_s32(&b, k).1 - 6789.0 / 8.0),
        1.0,
    );

    for (len, hr) in [(50, 2), (3000, 0)] {
        let a: BfpComplexS32Owned = random_complex_s32(&mut source, len, -20, hr);
        let energy: FloatS64 = module.bfp_complex_s32_energy(&a);
        let want: f64 = (0..len)
            .map(|k| {
                let (re, im) = value_s32(&a, k);
                re * re + im * im
            })
            .sum();
        assert_close_lsb("bfp_complex_s32_energy", len, energy.mant, energy.exp, want, 2.0 * len as f64);
    }
}

pub fn test_bfp_complex_s16_arith<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpComplexS16Add
        + BfpComplexS16Sub
        + BfpComplexS16AddScalar
        + BfpComplexS16Shl
        + BfpComplexS16UseExponent
        + BfpComplexS16Conjugate
        + BfpComplexS16Energy
        + BfpAlloc,
{
    let mut source: Source = Source::new([48u8; 32]);
    let len: usize = 35;

    for (b_hr, c_hr) in HR_PAIRS {
        let b: BfpComplexS16Owned = random_complex_s16(&mut source, len, -3, b_hr);
        let c: BfpComplexS16Owned = random_complex_s16(&mut source, len, 1, c_hr);
        let mut res: BfpComplexS16Owned = module.bfp_complex_s16_alloc(len, 0);
        module.bfp_complex_s16_add(&mut res, &b, &c);
        assert_s16_close(
            "bfp_complex_s16_add",
            &res,
            |k| {
                let (x, y) = (value_s16(&b, k), value_s16(&c, k));
                (x.0 + y.0, x.1 + y.1)
            },
            1.0,
        );
        module.bfp_complex_s16_sub(&mut res, &b, &c);
        assert_s16_close(
            "bfp_complex_s16_sub",
            &res,
            |k| {
                let (x, y) = (value_s16(&b, k), value_s16(&c, k));
                (x.0 - y.0, x.1 - y.1)
            },
            1.0,
        );
    }

    let a: BfpComplexS16Owned = random_complex_s16(&mut source, len, 2, 3);
    let mut res: BfpComplexS16Owned = module.bfp_complex_s16_alloc(len, 0);
    module.bfp_complex_s16_shl(&mut res, &a, 3);
    assert_eq!((res.exp(), res.hr()), (2, 0));
    assert_s16_close("bfp_complex_s16_shl", &res, |k| (value_s16(&a, k).0 * 8.0, value_s16(&a, k).1 * 8.0), 0.0);

    let mut b: BfpComplexS16Owned = a.clone();
    module.bfp_complex_s16_use_exponent(&mut b, 5);
    assert_eq!(b.exp(), 5);
    assert_s16_close("bfp_complex_s16_use_exponent", &b, |k| value_s16(&a, k), 0.5);

    module.bfp_complex_s16_conjugate(&mut res, &a);
    assert_s16_close("bfp_complex_s16_conjugate", &res, |k| (value_s16(&a, k).0, -value_s16(&a, k).1), 0.0);

    let c: FloatComplexS16 = FloatComplexS16::new(ComplexS16::new(-300, 77), 0);
    module.bfp_complex_s16_add_scalar(&mut res, &a, c);
    assert_s16_close(
        "bfp_complex_s16_add_scalar",
        &res,
        |k| (value_s16(&a, k).0 - 300.0, value_s16(&a, k).1 + 77.0),
        1.0,
    );

    let energy: FloatS64 = module.bfp_complex_s16_energy(&a);
    let want: i64 = (0..len).map(|k| a.real()[k] as i64 * a.real()[k] as i64 + a.imag()[k] as i64 * a.imag()[k] as i64).sum();
    assert_eq!(energy, FloatS64::new(want, 4));
}
