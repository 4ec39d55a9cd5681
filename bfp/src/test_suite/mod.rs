pub mod arith;
pub mod complex;
pub mod convert;
pub mod mul;
pub mod nonlinear;
pub mod reduction;
pub mod split_acc;

use sampling::{
    distributions::{MantissaDist, fill_i16, fill_i32},
    source::Source,
};

use crate::{
    layouts::{BfpComplexS16, BfpComplexS32, BfpS16Owned, BfpS32Owned, BfpVec, ComplexS32, DataRef, Exponent, Headroom, Mantissa},
    reference::vect_headroom,
};

#[macro_export]
macro_rules! bfp_test_suite {
    (
        mod $modname:ident,
        allocator = $alloc:ty,
        config = $config:expr,
        tests = {
            $( $(#[$attr:meta])* $test_name:ident => $impl:path ),+ $(,)?
        }
    ) => {
        mod $modname {
            use std::sync::LazyLock;

            use bfp::layouts::Module;

            static MODULE: LazyLock<Module<$alloc>> =
                LazyLock::new(|| Module::<$alloc>::with_allocator($config, <$alloc as Default>::default()));

            $(
                $(#[$attr])*
                #[test]
                fn $test_name() {
                    ($impl)(&*MODULE);
                }
            )+
        }
    };
}

/// Random 32-bit vector whose headroom is exactly `hr`.
pub fn random_s32(source: &mut Source, len: usize, exp: Exponent, hr: Headroom) -> BfpS32Owned {
    let mut data: Vec<i32> = vec![0; len];
    fill_i32(source, MantissaDist::Headroom(hr), &mut data);
    BfpVec::init(data, exp, true)
}

/// Random 16-bit vector whose headroom is exactly `hr`.
pub fn random_s16(source: &mut Source, len: usize, exp: Exponent, hr: Headroom) -> BfpS16Owned {
    let mut data: Vec<i16> = vec![0; len];
    fill_i16(source, MantissaDist::Headroom(hr), &mut data);
    BfpVec::init(data, exp, true)
}

/// Random complex 32-bit vector; each part has a headroom of at least `hr`.
pub fn random_complex_s32(source: &mut Source, len: usize, exp: Exponent, hr: Headroom) -> BfpComplexS32<Vec<ComplexS32>> {
    let mut re: Vec<i32> = vec![0; len];
    let mut im: Vec<i32> = vec![0; len];
    fill_i32(source, MantissaDist::Headroom(hr), &mut re);
    fill_i32(source, MantissaDist::Headroom(hr), &mut im);
    let data: Vec<ComplexS32> = re.iter().zip(im.iter()).map(|(&x, &y)| ComplexS32::new(x, y)).collect();
    BfpComplexS32::init(data, exp, true)
}

pub fn random_complex_s16(source: &mut Source, len: usize, exp: Exponent, hr: Headroom) -> BfpComplexS16<Vec<i16>> {
    let mut re: Vec<i16> = vec![0; len];
    let mut im: Vec<i16> = vec![0; len];
    fill_i16(source, MantissaDist::Headroom(hr), &mut re);
    fill_i16(source, MantissaDist::Headroom(hr), &mut im);
    BfpComplexS16::init(re, im, exp, true)
}

/// Value of element `k` as `f64`.
pub fn value<T: Mantissa, D: DataRef<T>>(a: &BfpVec<T, D>, k: usize) -> f64 {
    a.data()[k].to_i64() as f64 * 2f64.powi(a.exp())
}

/// Asserts that `mant * 2^exp` lies within `lsbs` units of `2^exp` of `want`.
#[track_caller]
pub fn assert_close_lsb(op: &str, k: usize, mant: i64, exp: Exponent, want: f64, lsbs: f64) {
    let lsb: f64 = 2f64.powi(exp);
    let got: f64 = mant as f64 * lsb;
    assert!(
        (got - want).abs() <= lsbs * lsb,
        "{op}[{k}]: got {got} (mant={mant}, exp={exp}), want {want}, tolerance {lsbs} lsb"
    );
}

/// Asserts the stored headroom of `a` does not overstate its mantissas.
#[track_caller]
pub fn assert_hr_valid<T: Mantissa, D: DataRef<T>>(op: &str, a: &BfpVec<T, D>) {
    let true_hr: Headroom = vect_headroom(a.data());
    assert!(a.hr() <= true_hr, "{op}: stored hr {} > true hr {true_hr}", a.hr());
}
