use crate::layouts::{
    BfpComplexS16, BfpComplexS32, BfpS32, ComplexS32, DataMut, DataRef, Exponent, FloatComplexS32, FloatComplexS64, FloatS32,
    FloatS64, Headroom, LeftShift,
};

pub trait BfpComplexS32Headroom {
    fn bfp_complex_s32_headroom<A>(&self, a: &mut BfpComplexS32<A>) -> Headroom
    where
        A: DataMut<ComplexS32>;
}

pub trait BfpComplexS32UseExponent {
    fn bfp_complex_s32_use_exponent<A>(&self, a: &mut BfpComplexS32<A>, exp: Exponent)
    where
        A: DataMut<ComplexS32>;
}

pub trait BfpComplexS32Shl {
    fn bfp_complex_s32_shl<R, A>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>, shl: LeftShift)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>;
}

pub trait BfpComplexS32ShlInplace {
    fn bfp_complex_s32_shl_inplace<A>(&self, a: &mut BfpComplexS32<A>, shl: LeftShift)
    where
        A: DataMut<ComplexS32>;
}

pub trait BfpComplexS32Add {
    fn bfp_complex_s32_add<R, A, B>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>, b: &BfpComplexS32<B>)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>,
        B: DataRef<ComplexS32>;
}

pub trait BfpComplexS32AddInplace {
    fn bfp_complex_s32_add_inplace<R, A>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>;
}

pub trait BfpComplexS32Sub {
    fn bfp_complex_s32_sub<R, A, B>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>, b: &BfpComplexS32<B>)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>,
        B: DataRef<ComplexS32>;
}

pub trait BfpComplexS32SubInplace {
    fn bfp_complex_s32_sub_inplace<R, A>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>;
}

pub trait BfpComplexS32AddScalar {
    fn bfp_complex_s32_add_scalar<R, A>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>, c: FloatComplexS32)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>;
}

pub trait BfpComplexS32RealMul {
    /// res\[k\] = a\[k\] * b\[k\] with a real `b`.
    fn bfp_complex_s32_real_mul<R, A, B>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>, b: &BfpS32<B>)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>,
        B: DataRef<i32>;
}

pub trait BfpComplexS32Mul {
    fn bfp_complex_s32_mul<R, A, B>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>, b: &BfpComplexS32<B>)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>,
        B: DataRef<ComplexS32>;
}

pub trait BfpComplexS32ConjMul {
    /// res\[k\] = a\[k\] * conj(b\[k\])
    fn bfp_complex_s32_conj_mul<R, A, B>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>, b: &BfpComplexS32<B>)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>,
        B: DataRef<ComplexS32>;
}

pub trait BfpComplexS32RealScale {
    fn bfp_complex_s32_real_scale<R, A>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>, c: FloatS32)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>;
}

pub trait BfpComplexS32Scale {
    fn bfp_complex_s32_scale<R, A>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>, c: FloatComplexS32)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>;
}

pub trait BfpComplexS32SquaredMag {
    /// res\[k\] = |a\[k\]|^2
    fn bfp_complex_s32_squared_mag<R, A>(&self, res: &mut BfpS32<R>, a: &BfpComplexS32<A>)
    where
        R: DataMut<i32>,
        A: DataRef<ComplexS32>;
}

pub trait BfpComplexS32Mag {
    /// res\[k\] = |a\[k\]|
    fn bfp_complex_s32_mag<R, A>(&self, res: &mut BfpS32<R>, a: &BfpComplexS32<A>)
    where
        R: DataMut<i32>,
        A: DataRef<ComplexS32>;
}

pub trait BfpComplexS32Sum {
    fn bfp_complex_s32_sum<A>(&self, a: &BfpComplexS32<A>) -> FloatComplexS64
    where
        A: DataRef<ComplexS32>;
}

pub trait BfpComplexS32Energy {
    /// Sum of `|a[k]|^2`.
    fn bfp_complex_s32_energy<A>(&self, a: &BfpComplexS32<A>) -> FloatS64
    where
        A: DataRef<ComplexS32>;
}

pub trait BfpComplexS32ToS16 {
    fn bfp_complex_s32_to_s16<R, A>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS32<A>)
    where
        R: DataMut<i16>,
        A: DataRef<ComplexS32>;
}

pub trait BfpComplexS32Macc {
    /// acc\[k\] = acc\[k\] + b\[k\] * c\[k\]
    fn bfp_complex_s32_macc<R, B, C>(&self, acc: &mut BfpComplexS32<R>, b: &BfpComplexS32<B>, c: &BfpComplexS32<C>)
    where
        R: DataMut<ComplexS32>,
        B: DataRef<ComplexS32>,
        C: DataRef<ComplexS32>;
}

pub trait BfpComplexS32Nmacc {
    /// acc\[k\] = acc\[k\] - b\[k\] * c\[k\]
    fn bfp_complex_s32_nmacc<R, B, C>(&self, acc: &mut BfpComplexS32<R>, b: &BfpComplexS32<B>, c: &BfpComplexS32<C>)
    where
        R: DataMut<ComplexS32>,
        B: DataRef<ComplexS32>,
        C: DataRef<ComplexS32>;
}

pub trait BfpComplexS32ConjMacc {
    /// acc\[k\] = acc\[k\] + b\[k\] * conj(c\[k\])
    fn bfp_complex_s32_conj_macc<R, B, C>(&self, acc: &mut BfpComplexS32<R>, b: &BfpComplexS32<B>, c: &BfpComplexS32<C>)
    where
        R: DataMut<ComplexS32>,
        B: DataRef<ComplexS32>,
        C: DataRef<ComplexS32>;
}

pub trait BfpComplexS32ConjNmacc {
    /// acc\[k\] = acc\[k\] - b\[k\] * conj(c\[k\])
    fn bfp_complex_s32_conj_nmacc<R, B, C>(&self, acc: &mut BfpComplexS32<R>, b: &BfpComplexS32<B>, c: &BfpComplexS32<C>)
    where
        R: DataMut<ComplexS32>,
        B: DataRef<ComplexS32>,
        C: DataRef<ComplexS32>;
}

pub trait BfpComplexS32Conjugate {
    fn bfp_complex_s32_conjugate<R, A>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>;
}

pub trait BfpComplexS32Make {
    /// Zips the real vectors `re` and `im` into `res`, aligned on a common
    /// exponent.
    fn bfp_complex_s32_make<R, A, B>(&self, res: &mut BfpComplexS32<R>, re: &BfpS32<A>, im: &BfpS32<B>)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<i32>,
        B: DataRef<i32>;
}

pub trait BfpComplexS32RealPart {
    /// Copies the real parts of `a`. The headroom of `a` is carried over and
    /// may understate that of the result.
    fn bfp_complex_s32_real_part<R, A>(&self, res: &mut BfpS32<R>, a: &BfpComplexS32<A>)
    where
        R: DataMut<i32>,
        A: DataRef<ComplexS32>;
}

pub trait BfpComplexS32ImagPart {
    fn bfp_complex_s32_imag_part<R, A>(&self, res: &mut BfpS32<R>, a: &BfpComplexS32<A>)
    where
        R: DataMut<i32>,
        A: DataRef<ComplexS32>;
}
