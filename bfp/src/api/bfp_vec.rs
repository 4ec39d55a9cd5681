use crate::layouts::{BfpS16, BfpS32, BfpVec, DataMut, DataRef, Exponent, Float, FloatS32, FloatS64, Headroom, LeftShift, Mantissa};

pub trait BfpHeadroom<T: Mantissa> {
    /// Rescans the mantissas of `a`, stores and returns their headroom.
    fn bfp_headroom<A>(&self, a: &mut BfpVec<T, A>) -> Headroom
    where
        A: DataMut<T>;
}

pub trait BfpUseExponent<T: Mantissa> {
    /// Rescales `a` so that its exponent becomes `exp`.
    ///
    /// Raising the exponent rounds away low bits; lowering it may saturate.
    fn bfp_use_exponent<A>(&self, a: &mut BfpVec<T, A>, exp: Exponent)
    where
        A: DataMut<T>;
}

pub trait BfpShl<T: Mantissa> {
    /// Sets `res` to the mantissas of `a` shifted left by `shl` bits (right
    /// for negative `shl`), keeping the exponent of `a`. The represented
    /// values are scaled by `2^shl`.
    fn bfp_shl<R, A>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>, shl: LeftShift)
    where
        R: DataMut<T>,
        A: DataRef<T>;
}

pub trait BfpShlInplace<T: Mantissa> {
    fn bfp_shl_inplace<A>(&self, a: &mut BfpVec<T, A>, shl: LeftShift)
    where
        A: DataMut<T>;
}

pub trait BfpAdd<T: Mantissa> {
    /// res = a + b
    fn bfp_add<R, A, B>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>, b: &BfpVec<T, B>)
    where
        R: DataMut<T>,
        A: DataRef<T>,
        B: DataRef<T>;
}

pub trait BfpAddInplace<T: Mantissa> {
    /// res = res + a
    fn bfp_add_inplace<R, A>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>)
    where
        R: DataMut<T>,
        A: DataRef<T>;
}

pub trait BfpSub<T: Mantissa> {
    /// res = a - b
    fn bfp_sub<R, A, B>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>, b: &BfpVec<T, B>)
    where
        R: DataMut<T>,
        A: DataRef<T>,
        B: DataRef<T>;
}

pub trait BfpSubInplace<T: Mantissa> {
    /// res = res - a
    fn bfp_sub_inplace<R, A>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>)
    where
        R: DataMut<T>,
        A: DataRef<T>;
}

pub trait BfpAddScalar<T: Mantissa> {
    /// res\[k\] = a\[k\] + c
    fn bfp_add_scalar<R, A>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>, c: Float<T>)
    where
        R: DataMut<T>,
        A: DataRef<T>;
}

pub trait BfpAddScalarInplace<T: Mantissa> {
    fn bfp_add_scalar_inplace<R>(&self, res: &mut BfpVec<T, R>, c: Float<T>)
    where
        R: DataMut<T>;
}

pub trait BfpMul<T: Mantissa> {
    /// Element-wise product: res\[k\] = a\[k\] * b\[k\]
    fn bfp_mul<R, A, B>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>, b: &BfpVec<T, B>)
    where
        R: DataMut<T>,
        A: DataRef<T>,
        B: DataRef<T>;
}

pub trait BfpMulInplace<T: Mantissa> {
    /// res\[k\] = res\[k\] * a\[k\]
    fn bfp_mul_inplace<R, A>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>)
    where
        R: DataMut<T>,
        A: DataRef<T>;
}

pub trait BfpScale<T: Mantissa> {
    /// res\[k\] = a\[k\] * c
    fn bfp_scale<R, A>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>, c: Float<T>)
    where
        R: DataMut<T>,
        A: DataRef<T>;
}

pub trait BfpScaleInplace<T: Mantissa> {
    fn bfp_scale_inplace<R>(&self, res: &mut BfpVec<T, R>, c: Float<T>)
    where
        R: DataMut<T>;
}

pub trait BfpAbs<T: Mantissa> {
    fn bfp_abs<R, A>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>)
    where
        R: DataMut<T>,
        A: DataRef<T>;
}

pub trait BfpAbsInplace<T: Mantissa> {
    fn bfp_abs_inplace<R>(&self, res: &mut BfpVec<T, R>)
    where
        R: DataMut<T>;
}

pub trait BfpRect<T: Mantissa> {
    /// res\[k\] = max(a\[k\], 0)
    fn bfp_rect<R, A>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>)
    where
        R: DataMut<T>,
        A: DataRef<T>;
}

pub trait BfpRectInplace<T: Mantissa> {
    fn bfp_rect_inplace<R>(&self, res: &mut BfpVec<T, R>)
    where
        R: DataMut<T>;
}

pub trait BfpClip<T: Mantissa> {
    /// Clamps every element of `a` to `[lower, upper] * 2^bound_exp`.
    ///
    /// # Panics
    /// If `lower > upper`.
    fn bfp_clip<R, A>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>, lower: T, upper: T, bound_exp: Exponent)
    where
        R: DataMut<T>,
        A: DataRef<T>;
}

pub trait BfpSqrt<T: Mantissa> {
    /// Element-wise square root, refined to the depth configured on the
    /// module. Negative elements give 0.
    fn bfp_sqrt<R, A>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>)
    where
        R: DataMut<T>,
        A: DataRef<T>;
}

pub trait BfpInverse<T: Mantissa> {
    /// Element-wise reciprocal. Zero elements saturate to the largest
    /// positive mantissa.
    fn bfp_inverse<R, A>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>)
    where
        R: DataMut<T>,
        A: DataRef<T>;
}

pub trait BfpSum<T: Mantissa> {
    /// Exact sum of the elements of `a`.
    fn bfp_sum<A>(&self, a: &BfpVec<T, A>) -> FloatS64
    where
        A: DataRef<T>;
}

pub trait BfpAbsSum<T: Mantissa> {
    fn bfp_abs_sum<A>(&self, a: &BfpVec<T, A>) -> FloatS64
    where
        A: DataRef<T>;
}

pub trait BfpDot<T: Mantissa> {
    /// Inner product of `a` and `b`.
    fn bfp_dot<A, B>(&self, a: &BfpVec<T, A>, b: &BfpVec<T, B>) -> FloatS64
    where
        A: DataRef<T>,
        B: DataRef<T>;
}

pub trait BfpEnergy<T: Mantissa> {
    /// Sum of the squared elements of `a`.
    fn bfp_energy<A>(&self, a: &BfpVec<T, A>) -> FloatS64
    where
        A: DataRef<T>;
}

pub trait BfpMean<T: Mantissa> {
    fn bfp_mean<A>(&self, a: &BfpVec<T, A>) -> FloatS32
    where
        A: DataRef<T>;
}

pub trait BfpRms<T: Mantissa> {
    /// Root mean square of the elements of `a`.
    fn bfp_rms<A>(&self, a: &BfpVec<T, A>) -> FloatS32
    where
        A: DataRef<T>;
}

pub trait BfpMax<T: Mantissa> {
    fn bfp_max<A>(&self, a: &BfpVec<T, A>) -> Float<T>
    where
        A: DataRef<T>;
}

pub trait BfpMin<T: Mantissa> {
    fn bfp_min<A>(&self, a: &BfpVec<T, A>) -> Float<T>
    where
        A: DataRef<T>;
}

pub trait BfpArgmax<T: Mantissa> {
    /// Index of the first largest element.
    fn bfp_argmax<A>(&self, a: &BfpVec<T, A>) -> usize
    where
        A: DataRef<T>;
}

pub trait BfpArgmin<T: Mantissa> {
    /// Index of the first smallest element.
    fn bfp_argmin<A>(&self, a: &BfpVec<T, A>) -> usize
    where
        A: DataRef<T>;
}

pub trait BfpMaxElementwise<T: Mantissa> {
    /// res\[k\] = max(a\[k\], b\[k\])
    fn bfp_max_elementwise<R, A, B>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>, b: &BfpVec<T, B>)
    where
        R: DataMut<T>,
        A: DataRef<T>,
        B: DataRef<T>;
}

pub trait BfpMinElementwise<T: Mantissa> {
    /// res\[k\] = min(a\[k\], b\[k\])
    fn bfp_min_elementwise<R, A, B>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>, b: &BfpVec<T, B>)
    where
        R: DataMut<T>,
        A: DataRef<T>,
        B: DataRef<T>;
}

pub trait BfpMacc<T: Mantissa> {
    /// acc\[k\] = acc\[k\] + b\[k\] * c\[k\]
    fn bfp_macc<R, B, C>(&self, acc: &mut BfpVec<T, R>, b: &BfpVec<T, B>, c: &BfpVec<T, C>)
    where
        R: DataMut<T>,
        B: DataRef<T>,
        C: DataRef<T>;
}

pub trait BfpNmacc<T: Mantissa> {
    /// acc\[k\] = acc\[k\] - b\[k\] * c\[k\]
    fn bfp_nmacc<R, B, C>(&self, acc: &mut BfpVec<T, R>, b: &BfpVec<T, B>, c: &BfpVec<T, C>)
    where
        R: DataMut<T>,
        B: DataRef<T>,
        C: DataRef<T>;
}

pub trait BfpS32ToS16 {
    /// Narrows `a` to 16 bits, keeping as much precision as fits.
    fn bfp_s32_to_s16<R, A>(&self, res: &mut BfpS16<R>, a: &BfpS32<A>)
    where
        R: DataMut<i16>,
        A: DataRef<i32>;
}

pub trait BfpS16ToS32 {
    /// Widens `a` to 32 bits. The mantissas move up by 8 bits, leaving 8
    /// bits of added headroom.
    fn bfp_s16_to_s32<R, A>(&self, res: &mut BfpS32<R>, a: &BfpS16<A>)
    where
        R: DataMut<i32>,
        A: DataRef<i16>;
}
