use crate::layouts::{
    BfpComplexS16, BfpComplexS32, BfpS16, ComplexS32, DataMut, DataRef, Exponent, FloatComplexS16, FloatComplexS64, FloatS16,
    FloatS64, Headroom, LeftShift,
};

pub trait BfpComplexS16Headroom {
    fn bfp_complex_s16_headroom<A>(&self, a: &mut BfpComplexS16<A>) -> Headroom
    where
        A: DataMut<i16>;
}

pub trait BfpComplexS16UseExponent {
    fn bfp_complex_s16_use_exponent<A>(&self, a: &mut BfpComplexS16<A>, exp: Exponent)
    where
        A: DataMut<i16>;
}

pub trait BfpComplexS16Shl {
    fn bfp_complex_s16_shl<R, A>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS16<A>, shl: LeftShift)
    where
        R: DataMut<i16>,
        A: DataRef<i16>;
}

pub trait BfpComplexS16Add {
    fn bfp_complex_s16_add<R, A, B>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS16<A>, b: &BfpComplexS16<B>)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
        B: DataRef<i16>;
}

pub trait BfpComplexS16Sub {
    fn bfp_complex_s16_sub<R, A, B>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS16<A>, b: &BfpComplexS16<B>)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
        B: DataRef<i16>;
}

pub trait BfpComplexS16AddScalar {
    fn bfp_complex_s16_add_scalar<R, A>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS16<A>, c: FloatComplexS16)
    where
        R: DataMut<i16>,
        A: DataRef<i16>;
}

pub trait BfpComplexS16RealMul {
    fn bfp_complex_s16_real_mul<R, A, B>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS16<A>, b: &BfpS16<B>)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
        B: DataRef<i16>;
}

pub trait BfpComplexS16Mul {
    fn bfp_complex_s16_mul<R, A, B>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS16<A>, b: &BfpComplexS16<B>)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
        B: DataRef<i16>;
}

pub trait BfpComplexS16ConjMul {
    /// res\[k\] = a\[k\] * conj(b\[k\])
    fn bfp_complex_s16_conj_mul<R, A, B>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS16<A>, b: &BfpComplexS16<B>)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
        B: DataRef<i16>;
}

pub trait BfpComplexS16RealScale {
    fn bfp_complex_s16_real_scale<R, A>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS16<A>, c: FloatS16)
    where
        R: DataMut<i16>,
        A: DataRef<i16>;
}

pub trait BfpComplexS16Scale {
    fn bfp_complex_s16_scale<R, A>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS16<A>, c: FloatComplexS16)
    where
        R: DataMut<i16>,
        A: DataRef<i16>;
}

pub trait BfpComplexS16SquaredMag {
    fn bfp_complex_s16_squared_mag<R, A>(&self, res: &mut BfpS16<R>, a: &BfpComplexS16<A>)
    where
        R: DataMut<i16>,
        A: DataRef<i16>;
}

pub trait BfpComplexS16Mag {
    fn bfp_complex_s16_mag<R, A>(&self, res: &mut BfpS16<R>, a: &BfpComplexS16<A>)
    where
        R: DataMut<i16>,
        A: DataRef<i16>;
}

pub trait BfpComplexS16Sum {
    /// Exact sum of the elements of `a`.
    fn bfp_complex_s16_sum<A>(&self, a: &BfpComplexS16<A>) -> FloatComplexS64
    where
        A: DataRef<i16>;
}

pub trait BfpComplexS16Energy {
    /// Exact sum of `|a[k]|^2`.
    fn bfp_complex_s16_energy<A>(&self, a: &BfpComplexS16<A>) -> FloatS64
    where
        A: DataRef<i16>;
}

pub trait BfpComplexS16ToS32 {
    fn bfp_complex_s16_to_s32<R, A>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS16<A>)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<i16>;
}

pub trait BfpComplexS16Macc {
    fn bfp_complex_s16_macc<R, B, C>(&self, acc: &mut BfpComplexS16<R>, b: &BfpComplexS16<B>, c: &BfpComplexS16<C>)
    where
        R: DataMut<i16>,
        B: DataRef<i16>,
        C: DataRef<i16>;
}

pub trait BfpComplexS16Nmacc {
    fn bfp_complex_s16_nmacc<R, B, C>(&self, acc: &mut BfpComplexS16<R>, b: &BfpComplexS16<B>, c: &BfpComplexS16<C>)
    where
        R: DataMut<i16>,
        B: DataRef<i16>,
        C: DataRef<i16>;
}

pub trait BfpComplexS16ConjMacc {
    fn bfp_complex_s16_conj_macc<R, B, C>(&self, acc: &mut BfpComplexS16<R>, b: &BfpComplexS16<B>, c: &BfpComplexS16<C>)
    where
        R: DataMut<i16>,
        B: DataRef<i16>,
        C: DataRef<i16>;
}

pub trait BfpComplexS16ConjNmacc {
    fn bfp_complex_s16_conj_nmacc<R, B, C>(&self, acc: &mut BfpComplexS16<R>, b: &BfpComplexS16<B>, c: &BfpComplexS16<C>)
    where
        R: DataMut<i16>,
        B: DataRef<i16>,
        C: DataRef<i16>;
}

pub trait BfpComplexS16Conjugate {
    fn bfp_complex_s16_conjugate<R, A>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS16<A>)
    where
        R: DataMut<i16>,
        A: DataRef<i16>;
}
