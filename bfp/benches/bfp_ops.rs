use std::hint::black_box;

use bfp::{
    api::{BfpAdd, BfpAlloc, BfpComplexS32Mul, BfpDot, BfpMul, BfpS16Accumulate, BfpSqrt},
    layouts::{BfpComplexS32Owned, BfpConfig, BfpS16Owned, BfpS32Owned, Module, SplitAccS32},
    test_suite::{random_complex_s32, random_s16, random_s32},
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sampling::source::Source;

const LOG_LENS: [usize; 4] = [6, 8, 10, 12];

fn bench_bfp_s32_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfp_add::s32");

    fn runner(len: usize) -> impl FnMut() {
        let module: Module = Module::new(BfpConfig::default());
        let mut source: Source = Source::new([0u8; 32]);
        let a: BfpS32Owned = random_s32(&mut source, len, -10, 2);
        let b: BfpS32Owned = random_s32(&mut source, len, -7, 4);
        let mut res: BfpS32Owned = module.bfp_alloc(len, 0);
        move || {
            module.bfp_add(&mut res, &a, &b);
            black_box(());
        }
    }

    for log_len in LOG_LENS {
        let id = BenchmarkId::from_parameter(1 << log_len);
        let mut runner = runner(1 << log_len);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    }

    group.finish();
}

fn bench_bfp_s32_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfp_mul::s32");

    fn runner(len: usize) -> impl FnMut() {
        let module: Module = Module::new(BfpConfig::default());
        let mut source: Source = Source::new([1u8; 32]);
        let a: BfpS32Owned = random_s32(&mut source, len, -20, 1);
        let b: BfpS32Owned = random_s32(&mut source, len, 3, 0);
        let mut res: BfpS32Owned = module.bfp_alloc(len, 0);
        move || {
            module.bfp_mul(&mut res, &a, &b);
            black_box(());
        }
    }

    for log_len in LOG_LENS {
        let id = BenchmarkId::from_parameter(1 << log_len);
        let mut runner = runner(1 << log_len);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    }

    group.finish();
}

fn bench_bfp_s32_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfp_dot::s32");

    fn runner(len: usize) -> impl FnMut() {
        let module: Module = Module::new(BfpConfig::default());
        let mut source: Source = Source::new([2u8; 32]);
        let a: BfpS32Owned = random_s32(&mut source, len, -30, 0);
        let b: BfpS32Owned = random_s32(&mut source, len, -30, 0);
        move || {
            black_box(module.bfp_dot(&a, &b));
        }
    }

    for log_len in LOG_LENS {
        let id = BenchmarkId::from_parameter(1 << log_len);
        let mut runner = runner(1 << log_len);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    }

    group.finish();
}

fn bench_bfp_s32_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfp_sqrt::s32");

    fn runner(len: usize) -> impl FnMut() {
        let module: Module = Module::new(BfpConfig::default());
        let mut source: Source = Source::new([3u8; 32]);
        let mut a: BfpS32Owned = random_s32(&mut source, len, -12, 3);
        a.data_mut().iter_mut().for_each(|x| *x = x.saturating_abs());
        let mut res: BfpS32Owned = module.bfp_alloc(len, 0);
        move || {
            module.bfp_sqrt(&mut res, &a);
            black_box(());
        }
    }

    for log_len in LOG_LENS {
        let id = BenchmarkId::from_parameter(1 << log_len);
        let mut runner = runner(1 << log_len);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    }

    group.finish();
}

fn bench_bfp_complex_s32_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfp_complex_s32_mul");

    fn runner(len: usize) -> impl FnMut() {
        let module: Module = Module::new(BfpConfig::default());
        let mut source: Source = Source::new([4u8; 32]);
        let a: BfpComplexS32Owned = random_complex_s32(&mut source, len, -8, 1);
        let b: BfpComplexS32Owned = random_complex_s32(&mut source, len, -8, 2);
        let mut res: BfpComplexS32Owned = module.bfp_complex_s32_alloc(len, 0);
        move || {
            module.bfp_complex_s32_mul(&mut res, &a, &b);
            black_box(());
        }
    }

    for log_len in LOG_LENS {
        let id = BenchmarkId::from_parameter(1 << log_len);
        let mut runner = runner(1 << log_len);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    }

    group.finish();
}

fn bench_bfp_s16_accumulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfp_s16_accumulate");

    fn runner(len: usize) -> impl FnMut() {
        let module: Module = Module::new(BfpConfig::default());
        let mut source: Source = Source::new([5u8; 32]);
        let b: BfpS16Owned = random_s16(&mut source, len, -4, 14);
        let mut acc: Vec<SplitAccS32> = module.split_acc_alloc(len);
        move || {
            black_box(module.bfp_s16_accumulate(&mut acc, -4, &b));
        }
    }

    for log_len in LOG_LENS {
        let id = BenchmarkId::from_parameter(1 << log_len);
        let mut runner = runner(1 << log_len);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_bfp_s32_add,
    bench_bfp_s32_mul,
    bench_bfp_s32_dot,
    bench_bfp_s32_sqrt,
    bench_bfp_complex_s32_mul,
    bench_bfp_s16_accumulate,
);
criterion_main!(benches);
