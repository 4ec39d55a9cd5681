use crate::layouts::{BfpS16, BfpS32, DataMut, DataRef, Exponent, Headroom, RightShift, SplitAccS32};

pub trait BfpS16Accumulate {
    /// Adds `b`, brought to `acc_exp`, to the first `b.len()` lanes of `acc`.
    ///
    /// Returns the headroom of the updated accumulators, capped at 15. The
    /// caller reclaims headroom with [`SplitAccShr`] before it runs out.
    ///
    /// # Panics
    /// If `acc_exp - b.exp()` is outside `[-14, 14]`.
    fn bfp_s16_accumulate<B>(&self, acc: &mut [SplitAccS32], acc_exp: Exponent, b: &BfpS16<B>) -> Headroom
    where
        B: DataRef<i16>;
}

pub trait SplitAccMerge {
    /// Merges the first `res.len()` lanes of `acc` into `res` with exponent
    /// `acc_exp`.
    fn split_acc_merge<R>(&self, res: &mut BfpS32<R>, acc: &[SplitAccS32], acc_exp: Exponent)
    where
        R: DataMut<i32>;
}

pub trait SplitAccSplit {
    /// Splits the mantissas of `a` into the first `a.len()` lanes of `acc`.
    /// The accumulators take the exponent of `a`.
    fn split_acc_split<A>(&self, acc: &mut [SplitAccS32], a: &BfpS32<A>)
    where
        A: DataRef<i32>;
}

pub trait SplitAccShr {
    /// Shifts the first `len` lanes of `acc` by `shr` in place. The
    /// accumulator exponent grows by `shr`.
    fn split_acc_shr(&self, acc: &mut [SplitAccS32], len: usize, shr: RightShift);
}
