use tracing::debug;

use crate::{
    api::{BfpAlloc, BfpRelease},
    layouts::{
        Allocator, BfpComplexS16, BfpComplexS16Owned, BfpComplexS32, BfpComplexS32Owned, BfpVec, ComplexS32, Exponent, Mantissa,
        Module, SplitAccS32,
    },
};

impl<M: Allocator> BfpAlloc for Module<M> {
    fn bfp_alloc<T: Mantissa>(&self, len: usize, exp: Exponent) -> BfpVec<T, Vec<T>> {
        debug!("bfp_alloc: len={len} bits={} exp={exp}", T::BITS);
        BfpVec::from_vec(self.allocator().alloc::<T>(len), exp)
    }

    fn bfp_complex_s32_alloc(&self, len: usize, exp: Exponent) -> BfpComplexS32Owned {
        debug!("bfp_complex_s32_alloc: len={len} exp={exp}");
        BfpComplexS32::from_vec(self.allocator().alloc::<ComplexS32>(len), exp)
    }

    fn bfp_complex_s16_alloc(&self, len: usize, exp: Exponent) -> BfpComplexS16Owned {
        debug!("bfp_complex_s16_alloc: len={len} exp={exp}");
        BfpComplexS16::from_vecs(self.allocator().alloc::<i16>(len), self.allocator().alloc::<i16>(len), exp)
    }

    fn split_acc_alloc(&self, len: usize) -> Vec<SplitAccS32> {
        debug!("split_acc_alloc: len={len}");
        self.allocator().alloc::<SplitAccS32>(SplitAccS32::chunks_for(len))
    }
}

impl<M: Allocator> BfpRelease for Module<M> {
    fn bfp_release<T: Mantissa>(&self, a: BfpVec<T, Vec<T>>) {
        debug!("bfp_release: len={} bits={}", a.len(), T::BITS);
        self.allocator().release(a.into_data());
    }

    fn bfp_complex_s32_release(&self, a: BfpComplexS32Owned) {
        debug!("bfp_complex_s32_release: len={}", a.len());
        self.allocator().release(a.into_data());
    }

    fn bfp_complex_s16_release(&self, a: BfpComplexS16Owned) {
        debug!("bfp_complex_s16_release: len={}", a.len());
        let (real, imag) = a.into_parts();
        self.allocator().release(real);
        self.allocator().release(imag);
    }

    fn split_acc_release(&self, acc: Vec<SplitAccS32>) {
        debug!("split_acc_release: chunks={}", acc.len());
        self.allocator().release(acc);
    }
}
