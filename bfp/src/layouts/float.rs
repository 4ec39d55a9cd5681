use std::fmt::Display;

use crate::layouts::{Complex, ComplexS16, ComplexS32, Exponent};

/// A single mantissa with its own exponent: `mant * 2^exp`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Float<T> {
    pub mant: T,
    pub exp: Exponent,
}

impl<T> Float<T> {
    pub const fn new(mant: T, exp: Exponent) -> Self {
        Self { mant, exp }
    }
}

pub type FloatS16 = Float<i16>;
pub type FloatS32 = Float<i32>;
pub type FloatS64 = Float<i64>;
pub type FloatComplexS16 = Float<ComplexS16>;
pub type FloatComplexS32 = Float<ComplexS32>;
pub type FloatComplexS64 = Float<Complex<i64>>;

impl Float<i16> {
    pub fn to_f64(&self) -> f64 {
        self.mant as f64 * 2f64.powi(self.exp)
    }
}

impl Float<i32> {
    pub fn to_f64(&self) -> f64 {
        self.mant as f64 * 2f64.powi(self.exp)
    }
}

impl Float<i64> {
    pub fn to_f64(&self) -> f64 {
        self.mant as f64 * 2f64.powi(self.exp)
    }
}

impl<T: Display> Display for Float<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} * 2^{}", self.mant, self.exp)
    }
}
