use sampling::{
    distributions::{MantissaDist, fill_i32},
    source::Source,
};

use crate::{
    api::{BfpAbsSum, BfpArgmax, BfpArgmin, BfpDot, BfpEnergy, BfpMax, BfpMean, BfpMin, BfpRms, BfpSum},
    layouts::{Allocator, BfpS16Owned, BfpS32Owned, BfpVec, Float, FloatS32, FloatS64, Module},
    test_suite::{assert_close_lsb, random_s16, random_s32, value},
};

pub fn test_bfp_sum<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpSum<i32> + BfpSum<i16> + BfpAbsSum<i32> + BfpAbsSum<i16>,
{
    let mut source: Source = Source::new([20u8; 32]);

    let a: BfpS32Owned = random_s32(&mut source, 1000, -17, 0);
    let sum: FloatS64 = module.bfp_sum(&a);
    let abs_sum: FloatS64 = module.bfp_abs_sum(&a);
    assert_eq!(sum, FloatS64::new(a.data().iter().map(|&x| x as i64).sum(), -17));
    assert_eq!(abs_sum, FloatS64::new(a.data().iter().map(|&x| (x as i64).abs()).sum(), -17));

    // A stray i32::MIN counts as -MAX.
    let a: BfpS32Owned = BfpVec::init(vec![i32::MIN, -3, 4], 0, false);
    assert_eq!(module.bfp_abs_sum(&a), FloatS64::new(i32::MAX as i64 + 7, 0));

    let a: BfpS16Owned = random_s16(&mut source, 1000, 5, 2);
    let sum: FloatS64 = module.bfp_sum(&a);
    let abs_sum: FloatS64 = module.bfp_abs_sum(&a);
    assert_eq!(sum, FloatS64::new(a.data().iter().map(|&x| x as i64).sum(), 5));
    assert_eq!(abs_sum, FloatS64::new(a.data().iter().map(|&x| (x as i64).abs()).sum(), 5));
}

pub fn test_bfp_dot<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpDot<i32> + BfpDot<i16>,
{
    let mut source: Source = Source::new([21u8; 32]);
    for (len, b_hr, c_hr) in [(16, 3, 5), (100, 0, 0), (1000, 1, 3), (4096, 0, 6)] {
        let b: BfpS32Owned = random_s32(&mut source, len, -30, b_hr);
        let c: BfpS32Owned = random_s32(&mut source, len, -8, c_hr);
        let dot: FloatS64 = module.bfp_dot(&b, &c);
        let want: f64 = (0..len).map(|k| value(&b, k) * value(&c, k)).sum();
        assert_close_lsb("bfp_dot<i32>", len, dot.mant, dot.exp, want, len as f64);
    }

    let b: BfpS16Owned = random_s16(&mut source, 500, -3, 0);
    let c: BfpS16Owned = random_s16(&mut source, 500, 4, 1);
    let dot: FloatS64 = module.bfp_dot(&b, &c);
    let want: i64 = b.data().iter().zip(c.data()).map(|(&x, &y)| x as i64 * y as i64).sum();
    assert_eq!(dot, FloatS64::new(want, 1));
}

pub fn test_bfp_energy<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpEnergy<i32> + BfpEnergy<i16> + BfpRms<i32> + BfpRms<i16>,
{
    let mut source: Source = Source::new([22u8; 32]);
    for (len, hr) in [(64, 4), (300, 4), (4096, 0), (5000, 9)] {
        let a: BfpS32Owned = random_s32(&mut source, len, -31, hr);
        let energy: FloatS64 = module.bfp_energy(&a);
        let want: f64 = (0..len).map(|k| value(&a, k).powi(2)).sum();
        assert_close_lsb("bfp_energy<i32>", len, energy.mant, energy.exp, want, len as f64);

        let rms: FloatS32 = module.bfp_rms(&a);
        let want: f64 = (want / len as f64).sqrt();
        assert!(
            (rms.to_f64() - want).abs() <= 1e-6 * want,
            "bfp_rms<i32>: got {rms} = {}, want {want}",
            rms.to_f64()
        );
    }

    // Noise with a deviation of 2^20 LSBs at exponent -20 has an rms close to 1.
    let mut noise: Vec<i32> = vec![0; 4096];
    fill_i32(&mut source, MantissaDist::Normal((1u32 << 20) as f64), &mut noise);
    let a: BfpS32Owned = BfpVec::init(noise, -20, true);
    let energy: FloatS64 = module.bfp_energy(&a);
    let want: f64 = (0..a.len()).map(|k| value(&a, k).powi(2)).sum();
    assert_close_lsb("bfp_energy<i32>", a.len(), energy.mant, energy.exp, want, a.len() as f64);
    let rms: f64 = module.bfp_rms(&a).to_f64();
    assert!((rms - (want / 4096.0).sqrt()).abs() <= 1e-6 * rms, "bfp_rms<i32>: got {rms}");
    assert!((rms - 1.0).abs() < 0.1, "bfp_rms<i32>: noise rms {rms} far from 1");

    let a: BfpS16Owned = random_s16(&mut source, 777, -12, 3);
    let energy: FloatS64 = module.bfp_energy(&a);
    let want: i64 = a.data().iter().map(|&x| x as i64 * x as i64).sum();
    assert_eq!(energy, FloatS64::new(want, -24));

    let rms: FloatS32 = module.bfp_rms(&a);
    let want: f64 = (want as f64 * 2f64.powi(-24) / 777.0).sqrt();
    assert!((rms.to_f64() - want).abs() <= 1e-6 * want, "bfp_rms<i16>: got {rms}, want {want}");
}

pub fn test_bfp_mean<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpMean<i32> + BfpMean<i16>,
{
    let mut source: Source = Source::new([23u8; 32]);
    for (len, exp, hr) in [(1, -3, 0), (10, 0, 0), (333, -40, 7), (10_000, 12, 1)] {
        let a: BfpS32Owned = random_s32(&mut source, len, exp, hr);
        let mean: FloatS32 = module.bfp_mean(&a);
        let want: f64 = (0..len).map(|k| value(&a, k)).sum::<f64>() / len as f64;
        assert_close_lsb("bfp_mean<i32>", len, mean.mant as i64, mean.exp, want, 1.0);
    }

    let a: BfpS16Owned = random_s16(&mut source, 1000, -6, 2);
    let mean: FloatS32 = module.bfp_mean(&a);
    let want: f64 = (0..1000).map(|k| value(&a, k)).sum::<f64>() / 1000.0;
    assert_close_lsb("bfp_mean<i16>", 1000, mean.mant as i64, mean.exp, want, 1.0);
}

pub fn test_bfp_max_min<M: Allocator>(module: &Module<M>)
where
    Module<M>: BfpMax<i32> + BfpMin<i32> + BfpArgmax<i32> + BfpArgmin<i32> + BfpMax<i16> + BfpArgmax<i16>,
{
    let mut source: Source = Source::new([24u8; 32]);
    let a: BfpS32Owned = random_s32(&mut source, 201, -9, 12);
    let max: i32 = *a.data().iter().max().unwrap();
    let min: i32 = *a.data().iter().min().unwrap();
    assert_eq!(module.bfp_max(&a), Float::new(max, -9));
    assert_eq!(module.bfp_min(&a), Float::new(min, -9));
    assert_eq!(Some(module.bfp_argmax(&a)), a.data().iter().position(|&x| x == max));
    assert_eq!(Some(module.bfp_argmin(&a)), a.data().iter().position(|&x| x == min));

    // Ties resolve to the first occurrence.
    let a: BfpS16Owned = BfpVec::init(vec![3, 9, -4, 9, 9], 2, true);
    assert_eq!(module.bfp_max(&a), Float::new(9i16, 2));
    assert_eq!(module.bfp_argmax(&a), 1);
}
