use crate::layouts::{BfpComplexS16Owned, BfpComplexS32Owned, BfpVec, Exponent, Mantissa, SplitAccS32};

pub trait BfpAlloc {
    /// Allocates a zeroed real vector of `len` elements with exponent `exp`.
    fn bfp_alloc<T: Mantissa>(&self, len: usize, exp: Exponent) -> BfpVec<T, Vec<T>>;

    /// Allocates a zeroed complex 32-bit vector of `len` elements.
    fn bfp_complex_s32_alloc(&self, len: usize, exp: Exponent) -> BfpComplexS32Owned;

    /// Allocates a zeroed complex 16-bit vector of `len` elements (two buffers).
    fn bfp_complex_s16_alloc(&self, len: usize, exp: Exponent) -> BfpComplexS16Owned;

    /// Allocates enough zeroed split accumulators to hold `len` lanes.
    fn split_acc_alloc(&self, len: usize) -> Vec<SplitAccS32>;
}

/// Hands owned buffers back to the allocator that produced them.
pub trait BfpRelease {
    fn bfp_release<T: Mantissa>(&self, a: BfpVec<T, Vec<T>>);

    fn bfp_complex_s32_release(&self, a: BfpComplexS32Owned);

    fn bfp_complex_s16_release(&self, a: BfpComplexS16Owned);

    fn split_acc_release(&self, acc: Vec<SplitAccS32>);
}
