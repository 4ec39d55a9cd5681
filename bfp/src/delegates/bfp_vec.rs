use tracing::{debug, trace};

use crate::{
    api::{
        BfpAbs, BfpAbsInplace, BfpAbsSum, BfpAdd, BfpAddInplace, BfpAddScalar, BfpAddScalarInplace, BfpArgmax, BfpArgmin, BfpClip,
        BfpDot, BfpEnergy, BfpHeadroom, BfpInverse, BfpMacc, BfpMax, BfpMaxElementwise, BfpMean, BfpMin, BfpMinElementwise, BfpMul,
        BfpMulInplace, BfpNmacc, BfpRect, BfpRectInplace, BfpRms, BfpS16ToS32, BfpS32ToS16, BfpScale, BfpScaleInplace, BfpShl,
        BfpShlInplace, BfpSqrt, BfpSub, BfpSubInplace, BfpSum, BfpUseExponent,
    },
    layouts::{
        Allocator, BfpS16, BfpS32, BfpVec, DataMut, DataRef, Exponent, Float, FloatS32, FloatS64, Headroom, LeftShift, Mantissa,
        Module, RightShift,
    },
    prepare::{
        BinaryPlan, ClipPlan, InversePlan, MaccPlan, MaccS16Plan, ProductPlan, UnaryPlan, vect_add_prepare,
        vect_add_scalar_prepare, vect_clip_prepare, vect_elementwise_prepare, vect_s16_inverse_prepare, vect_s16_macc_prepare,
        vect_s16_mul_prepare, vect_s16_nmacc_prepare, vect_s16_scale_prepare, vect_s16_sqrt_prepare, vect_s32_dot_prepare,
        vect_s32_energy_prepare, vect_s32_inverse_prepare, vect_s32_macc_prepare, vect_s32_mul_prepare, vect_s32_nmacc_prepare,
        vect_s32_scale_prepare, vect_s32_sqrt_prepare, vect_sub_prepare,
    },
    reference::{
        headroom, headroom_i64, round_shr_i64, s32_inverse, s32_mul, s32_sqrt, s64_to_s32, shift_sat, vect_abs_inplace_ref,
        vect_abs_ref, vect_abs_sum_ref, vect_add_inplace_ref, vect_add_ref, vect_add_scalar_inplace_ref, vect_add_scalar_ref,
        vect_argmax_ref, vect_argmin_ref, vect_clip_ref, vect_inverse_ref, vect_max_elementwise_ref, vect_max_ref,
        vect_min_elementwise_ref, vect_min_ref, vect_rect_inplace_ref, vect_rect_ref, vect_s16_dot_ref, vect_s16_macc_ref,
        vect_s16_mul_inplace_ref, vect_s16_mul_ref, vect_s16_nmacc_ref, vect_s16_scale_inplace_ref, vect_s16_scale_ref,
        vect_s16_to_s32_ref, vect_s32_dot_ref, vect_s32_energy_ref, vect_s32_macc_ref, vect_s32_mul_inplace_ref,
        vect_s32_mul_ref, vect_s32_nmacc_ref, vect_s32_scale_inplace_ref, vect_s32_scale_ref, vect_s32_to_s16_ref, vect_set_ref,
        vect_shl_inplace_ref, vect_shl_ref, vect_sqrt_ref, vect_sub_inplace_ref, vect_sub_ref, vect_sum_ref,
    },
};

impl<T: Mantissa, M: Allocator> BfpHeadroom<T> for Module<M> {
    fn bfp_headroom<A>(&self, a: &mut BfpVec<T, A>) -> Headroom
    where
        A: DataMut<T>,
    {
        a.update_hr()
    }
}

impl<T: Mantissa, M: Allocator> BfpUseExponent<T> for Module<M> {
    fn bfp_use_exponent<A>(&self, a: &mut BfpVec<T, A>, exp: Exponent)
    where
        A: DataMut<T>,
    {
        self.assert_not_empty("bfp_use_exponent", a.len());
        let shr: RightShift = exp - a.exp();
        if shr == 0 {
            return;
        }
        debug!("bfp_use_exponent: exp={} -> {exp} shr={shr}", a.exp());
        let hr: Headroom = vect_shl_inplace_ref(a.data_mut(), -shr);
        a.set_exp(exp);
        a.set_hr(hr);
    }
}

impl<T: Mantissa, M: Allocator> BfpShl<T> for Module<M> {
    fn bfp_shl<R, A>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>, shl: LeftShift)
    where
        R: DataMut<T>,
        A: DataRef<T>,
    {
        self.assert_same_len("bfp_shl", res.len(), a.len());
        self.assert_not_empty("bfp_shl", a.len());
        let hr: Headroom = vect_shl_ref(res.data_mut(), a.data(), shl);
        res.set_exp(a.exp());
        res.set_hr(hr);
    }
}

impl<T: Mantissa, M: Allocator> BfpShlInplace<T> for Module<M> {
    fn bfp_shl_inplace<A>(&self, a: &mut BfpVec<T, A>, shl: LeftShift)
    where
        A: DataMut<T>,
    {
        self.assert_not_empty("bfp_shl_inplace", a.len());
        let hr: Headroom = vect_shl_inplace_ref(a.data_mut(), shl);
        a.set_hr(hr);
    }
}

impl<T: Mantissa, M: Allocator> BfpAdd<T> for Module<M> {
    fn bfp_add<R, A, B>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>, b: &BfpVec<T, B>)
    where
        R: DataMut<T>,
        A: DataRef<T>,
        B: DataRef<T>,
    {
        self.assert_same_len("bfp_add", res.len(), a.len());
        self.assert_same_len("bfp_add", a.len(), b.len());
        self.assert_not_empty("bfp_add", a.len());
        let plan: BinaryPlan = vect_add_prepare(a.exp(), b.exp(), a.hr(), b.hr());
        trace!("bfp_add: {plan:?}");
        let hr: Headroom = vect_add_ref(res.data_mut(), a.data(), b.data(), plan.b_shr, plan.c_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<T: Mantissa, M: Allocator> BfpAddInplace<T> for Module<M> {
    fn bfp_add_inplace<R, A>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>)
    where
        R: DataMut<T>,
        A: DataRef<T>,
    {
        self.assert_same_len("bfp_add_inplace", res.len(), a.len());
        self.assert_not_empty("bfp_add_inplace", a.len());
        let plan: BinaryPlan = vect_add_prepare(res.exp(), a.exp(), res.hr(), a.hr());
        trace!("bfp_add_inplace: {plan:?}");
        let hr: Headroom = vect_add_inplace_ref(res.data_mut(), a.data(), plan.b_shr, plan.c_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<T: Mantissa, M: Allocator> BfpSub<T> for Module<M> {
    fn bfp_sub<R, A, B>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>, b: &BfpVec<T, B>)
    where
        R: DataMut<T>,
        A: DataRef<T>,
        B: DataRef<T>,
    {
        self.assert_same_len("bfp_sub", res.len(), a.len());
        self.assert_same_len("bfp_sub", a.len(), b.len());
        self.assert_not_empty("bfp_sub", a.len());
        let plan: BinaryPlan = vect_sub_prepare(a.exp(), b.exp(), a.hr(), b.hr());
        trace!("bfp_sub: {plan:?}");
        let hr: Headroom = vect_sub_ref(res.data_mut(), a.data(), b.data(), plan.b_shr, plan.c_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<T: Mantissa, M: Allocator> BfpSubInplace<T> for Module<M> {
    fn bfp_sub_inplace<R, A>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>)
    where
        R: DataMut<T>,
        A: DataRef<T>,
    {
        self.assert_same_len("bfp_sub_inplace", res.len(), a.len());
        self.assert_not_empty("bfp_sub_inplace", a.len());
        let plan: BinaryPlan = vect_sub_prepare(res.exp(), a.exp(), res.hr(), a.hr());
        trace!("bfp_sub_inplace: {plan:?}");
        let hr: Headroom = vect_sub_inplace_ref(res.data_mut(), a.data(), plan.b_shr, plan.c_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<T: Mantissa, M: Allocator> BfpAddScalar<T> for Module<M> {
    fn bfp_add_scalar<R, A>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>, c: Float<T>)
    where
        R: DataMut<T>,
        A: DataRef<T>,
    {
        self.assert_same_len("bfp_add_scalar", res.len(), a.len());
        self.assert_not_empty("bfp_add_scalar", a.len());
        let plan: BinaryPlan = vect_add_scalar_prepare(a.exp(), c.exp, a.hr(), headroom(c.mant));
        trace!("bfp_add_scalar: {plan:?}");
        let c: T = shift_sat(c.mant, plan.c_shr);
        let hr: Headroom = vect_add_scalar_ref(res.data_mut(), a.data(), c, plan.b_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<T: Mantissa, M: Allocator> BfpAddScalarInplace<T> for Module<M> {
    fn bfp_add_scalar_inplace<R>(&self, res: &mut BfpVec<T, R>, c: Float<T>)
    where
        R: DataMut<T>,
    {
        self.assert_not_empty("bfp_add_scalar_inplace", res.len());
        let plan: BinaryPlan = vect_add_scalar_prepare(res.exp(), c.exp, res.hr(), headroom(c.mant));
        trace!("bfp_add_scalar_inplace: {plan:?}");
        let c: T = shift_sat(c.mant, plan.c_shr);
        let hr: Headroom = vect_add_scalar_inplace_ref(res.data_mut(), c, plan.b_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpMul<i32> for Module<M> {
    fn bfp_mul<R, A, B>(&self, res: &mut BfpS32<R>, a: &BfpS32<A>, b: &BfpS32<B>)
    where
        R: DataMut<i32>,
        A: DataRef<i32>,
        B: DataRef<i32>,
    {
        self.assert_same_len("bfp_mul", res.len(), a.len());
        self.assert_same_len("bfp_mul", a.len(), b.len());
        self.assert_not_empty("bfp_mul", a.len());
        let plan: BinaryPlan = vect_s32_mul_prepare(a.exp(), b.exp(), a.hr(), b.hr());
        trace!("bfp_mul<i32>: {plan:?}");
        vect_s32_mul_ref(res.data_mut(), a.data(), b.data(), plan.b_shr, plan.c_shr);
        res.set_exp(plan.a_exp);
        res.update_hr();
    }
}

impl<M: Allocator> BfpMul<i16> for Module<M> {
    fn bfp_mul<R, A, B>(&self, res: &mut BfpS16<R>, a: &BfpS16<A>, b: &BfpS16<B>)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
        B: DataRef<i16>,
    {
        self.assert_same_len("bfp_mul", res.len(), a.len());
        self.assert_same_len("bfp_mul", a.len(), b.len());
        self.assert_not_empty("bfp_mul", a.len());
        let plan: ProductPlan = vect_s16_mul_prepare(a.exp(), b.exp(), a.hr(), b.hr());
        trace!("bfp_mul<i16>: {plan:?}");
        vect_s16_mul_ref(res.data_mut(), a.data(), b.data(), plan.a_shr);
        res.set_exp(plan.a_exp);
        res.update_hr();
    }
}

impl<M: Allocator> BfpMulInplace<i32> for Module<M> {
    fn bfp_mul_inplace<R, A>(&self, res: &mut BfpS32<R>, a: &BfpS32<A>)
    where
        R: DataMut<i32>,
        A: DataRef<i32>,
    {
        self.assert_same_len("bfp_mul_inplace", res.len(), a.len());
        self.assert_not_empty("bfp_mul_inplace", a.len());
        let plan: BinaryPlan = vect_s32_mul_prepare(res.exp(), a.exp(), res.hr(), a.hr());
        trace!("bfp_mul_inplace<i32>: {plan:?}");
        vect_s32_mul_inplace_ref(res.data_mut(), a.data(), plan.b_shr, plan.c_shr);
        res.set_exp(plan.a_exp);
        res.update_hr();
    }
}

impl<M: Allocator> BfpMulInplace<i16> for Module<M> {
    fn bfp_mul_inplace<R, A>(&self, res: &mut BfpS16<R>, a: &BfpS16<A>)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
    {
        self.assert_same_len("bfp_mul_inplace", res.len(), a.len());
        self.assert_not_empty("bfp_mul_inplace", a.len());
        let plan: ProductPlan = vect_s16_mul_prepare(res.exp(), a.exp(), res.hr(), a.hr());
        trace!("bfp_mul_inplace<i16>: {plan:?}");
        vect_s16_mul_inplace_ref(res.data_mut(), a.data(), plan.a_shr);
        res.set_exp(plan.a_exp);
        res.update_hr();
    }
}

impl<M: Allocator> BfpScale<i32> for Module<M> {
    fn bfp_scale<R, A>(&self, res: &mut BfpS32<R>, a: &BfpS32<A>, c: FloatS32)
    where
        R: DataMut<i32>,
        A: DataRef<i32>,
    {
        self.assert_same_len("bfp_scale", res.len(), a.len());
        self.assert_not_empty("bfp_scale", a.len());
        let plan: BinaryPlan = vect_s32_scale_prepare(a.exp(), c.exp, a.hr(), headroom(c.mant));
        trace!("bfp_scale<i32>: {plan:?}");
        vect_s32_scale_ref(res.data_mut(), a.data(), shift_sat(c.mant, plan.c_shr), plan.b_shr);
        res.set_exp(plan.a_exp);
        res.update_hr();
    }
}

impl<M: Allocator> BfpScale<i16> for Module<M> {
    fn bfp_scale<R, A>(&self, res: &mut BfpS16<R>, a: &BfpS16<A>, c: Float<i16>)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
    {
        self.assert_same_len("bfp_scale", res.len(), a.len());
        self.assert_not_empty("bfp_scale", a.len());
        let plan: ProductPlan = vect_s16_scale_prepare(a.exp(), c.exp, a.hr(), headroom(c.mant));
        trace!("bfp_scale<i16>: {plan:?}");
        vect_s16_scale_ref(res.data_mut(), a.data(), c.mant, plan.a_shr);
        res.set_exp(plan.a_exp);
        res.update_hr();
    }
}

impl<M: Allocator> BfpScaleInplace<i32> for Module<M> {
    fn bfp_scale_inplace<R>(&self, res: &mut BfpS32<R>, c: FloatS32)
    where
        R: DataMut<i32>,
    {
        self.assert_not_empty("bfp_scale_inplace", res.len());
        let plan: BinaryPlan = vect_s32_scale_prepare(res.exp(), c.exp, res.hr(), headroom(c.mant));
        trace!("bfp_scale_inplace<i32>: {plan:?}");
        vect_s32_scale_inplace_ref(res.data_mut(), shift_sat(c.mant, plan.c_shr), plan.b_shr);
        res.set_exp(plan.a_exp);
        res.update_hr();
    }
}

impl<M: Allocator> BfpScaleInplace<i16> for Module<M> {
    fn bfp_scale_inplace<R>(&self, res: &mut BfpS16<R>, c: Float<i16>)
    where
        R: DataMut<i16>,
    {
        self.assert_not_empty("bfp_scale_inplace", res.len());
        let plan: ProductPlan = vect_s16_scale_prepare(res.exp(), c.exp, res.hr(), headroom(c.mant));
        trace!("bfp_scale_inplace<i16>: {plan:?}");
        vect_s16_scale_inplace_ref(res.data_mut(), c.mant, plan.a_shr);
        res.set_exp(plan.a_exp);
        res.update_hr();
    }
}

impl<T: Mantissa, M: Allocator> BfpAbs<T> for Module<M> {
    fn bfp_abs<R, A>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>)
    where
        R: DataMut<T>,
        A: DataRef<T>,
    {
        self.assert_same_len("bfp_abs", res.len(), a.len());
        self.assert_not_empty("bfp_abs", a.len());
        let hr: Headroom = vect_abs_ref(res.data_mut(), a.data());
        res.set_exp(a.exp());
        res.set_hr(hr);
    }
}

impl<T: Mantissa, M: Allocator> BfpAbsInplace<T> for Module<M> {
    fn bfp_abs_inplace<R>(&self, res: &mut BfpVec<T, R>)
    where
        R: DataMut<T>,
    {
        self.assert_not_empty("bfp_abs_inplace", res.len());
        let hr: Headroom = vect_abs_inplace_ref(res.data_mut());
        res.set_hr(hr);
    }
}

impl<T: Mantissa, M: Allocator> BfpRect<T> for Module<M> {
    fn bfp_rect<R, A>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>)
    where
        R: DataMut<T>,
        A: DataRef<T>,
    {
        self.assert_same_len("bfp_rect", res.len(), a.len());
        self.assert_not_empty("bfp_rect", a.len());
        let hr: Headroom = vect_rect_ref(res.data_mut(), a.data());
        res.set_exp(a.exp());
        res.set_hr(hr);
    }
}

impl<T: Mantissa, M: Allocator> BfpRectInplace<T> for Module<M> {
    fn bfp_rect_inplace<R>(&self, res: &mut BfpVec<T, R>)
    where
        R: DataMut<T>,
    {
        self.assert_not_empty("bfp_rect_inplace", res.len());
        let hr: Headroom = vect_rect_inplace_ref(res.data_mut());
        res.set_hr(hr);
    }
}

impl<T: Mantissa, M: Allocator> BfpClip<T> for Module<M> {
    fn bfp_clip<R, A>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>, lower: T, upper: T, bound_exp: Exponent)
    where
        R: DataMut<T>,
        A: DataRef<T>,
    {
        self.assert_same_len("bfp_clip", res.len(), a.len());
        self.assert_not_empty("bfp_clip", a.len());
        let plan: ClipPlan<T> = vect_clip_prepare(a.exp(), bound_exp, lower, upper);
        trace!("bfp_clip: {plan:?}");
        match plan {
            ClipPlan::Fill { exp, value } => {
                let hr: Headroom = vect_set_ref(res.data_mut(), value);
                res.set_exp(exp);
                res.set_hr(hr);
            }
            ClipPlan::Clip {
                a_exp,
                b_shr,
                lower,
                upper,
            } => {
                let hr: Headroom = vect_clip_ref(res.data_mut(), a.data(), lower, upper, b_shr);
                res.set_exp(a_exp);
                res.set_hr(hr);
            }
        }
    }
}

impl<M: Allocator> BfpSqrt<i32> for Module<M> {
    fn bfp_sqrt<R, A>(&self, res: &mut BfpS32<R>, a: &BfpS32<A>)
    where
        R: DataMut<i32>,
        A: DataRef<i32>,
    {
        self.assert_same_len("bfp_sqrt", res.len(), a.len());
        self.assert_not_empty("bfp_sqrt", a.len());
        let plan: UnaryPlan = vect_s32_sqrt_prepare(a.exp(), a.hr());
        trace!("bfp_sqrt<i32>: {plan:?}");
        vect_sqrt_ref(res.data_mut(), a.data(), plan.b_shr, self.config().sqrt_depth_s32());
        res.set_exp(plan.a_exp);
        res.update_hr();
    }
}

impl<M: Allocator> BfpSqrt<i16> for Module<M> {
    fn bfp_sqrt<R, A>(&self, res: &mut BfpS16<R>, a: &BfpS16<A>)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
    {
        self.assert_same_len("bfp_sqrt", res.len(), a.len());
        self.assert_not_empty("bfp_sqrt", a.len());
        let plan: UnaryPlan = vect_s16_sqrt_prepare(a.exp(), a.hr());
        trace!("bfp_sqrt<i16>: {plan:?}");
        vect_sqrt_ref(res.data_mut(), a.data(), plan.b_shr, self.config().sqrt_depth_s16());
        res.set_exp(plan.a_exp);
        res.update_hr();
    }
}

impl<M: Allocator> BfpInverse<i32> for Module<M> {
    fn bfp_inverse<R, A>(&self, res: &mut BfpS32<R>, a: &BfpS32<A>)
    where
        R: DataMut<i32>,
        A: DataRef<i32>,
    {
        self.assert_same_len("bfp_inverse", res.len(), a.len());
        self.assert_not_empty("bfp_inverse", a.len());
        let plan: InversePlan = vect_s32_inverse_prepare(a.data(), a.exp());
        trace!("bfp_inverse<i32>: {plan:?}");
        vect_inverse_ref(res.data_mut(), a.data(), plan.scale);
        res.set_exp(plan.a_exp);
        res.update_hr();
    }
}

impl<M: Allocator> BfpInverse<i16> for Module<M> {
    fn bfp_inverse<R, A>(&self, res: &mut BfpS16<R>, a: &BfpS16<A>)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
    {
        self.assert_same_len("bfp_inverse", res.len(), a.len());
        self.assert_not_empty("bfp_inverse", a.len());
        let plan: InversePlan = vect_s16_inverse_prepare(a.data(), a.exp());
        trace!("bfp_inverse<i16>: {plan:?}");
        vect_inverse_ref(res.data_mut(), a.data(), plan.scale);
        res.set_exp(plan.a_exp);
        res.update_hr();
    }
}

impl<T: Mantissa, M: Allocator> BfpSum<T> for Module<M> {
    fn bfp_sum<A>(&self, a: &BfpVec<T, A>) -> FloatS64
    where
        A: DataRef<T>,
    {
        self.assert_not_empty("bfp_sum", a.len());
        FloatS64::new(vect_sum_ref(a.data()), a.exp())
    }
}

impl<T: Mantissa, M: Allocator> BfpAbsSum<T> for Module<M> {
    fn bfp_abs_sum<A>(&self, a: &BfpVec<T, A>) -> FloatS64
    where
        A: DataRef<T>,
    {
        self.assert_not_empty("bfp_abs_sum", a.len());
        FloatS64::new(vect_abs_sum_ref(a.data()), a.exp())
    }
}

impl<M: Allocator> BfpDot<i32> for Module<M> {
    fn bfp_dot<A, B>(&self, a: &BfpS32<A>, b: &BfpS32<B>) -> FloatS64
    where
        A: DataRef<i32>,
        B: DataRef<i32>,
    {
        self.assert_same_len("bfp_dot", a.len(), b.len());
        self.assert_not_empty("bfp_dot", a.len());
        let plan: BinaryPlan = vect_s32_dot_prepare(a.exp(), b.exp(), a.hr(), b.hr(), a.len());
        trace!("bfp_dot<i32>: {plan:?}");
        FloatS64::new(vect_s32_dot_ref(a.data(), b.data(), plan.b_shr, plan.c_shr), plan.a_exp)
    }
}

impl<M: Allocator> BfpDot<i16> for Module<M> {
    fn bfp_dot<A, B>(&self, a: &BfpS16<A>, b: &BfpS16<B>) -> FloatS64
    where
        A: DataRef<i16>,
        B: DataRef<i16>,
    {
        self.assert_same_len("bfp_dot", a.len(), b.len());
        self.assert_not_empty("bfp_dot", a.len());
        FloatS64::new(vect_s16_dot_ref(a.data(), b.data()), a.exp() + b.exp())
    }
}

impl<M: Allocator> BfpEnergy<i32> for Module<M> {
    fn bfp_energy<A>(&self, a: &BfpS32<A>) -> FloatS64
    where
        A: DataRef<i32>,
    {
        self.assert_not_empty("bfp_energy", a.len());
        let plan: UnaryPlan = vect_s32_energy_prepare(a.len(), a.exp(), a.hr());
        trace!("bfp_energy<i32>: {plan:?}");
        FloatS64::new(vect_s32_energy_ref(a.data(), plan.b_shr), plan.a_exp)
    }
}

impl<M: Allocator> BfpEnergy<i16> for Module<M> {
    fn bfp_energy<A>(&self, a: &BfpS16<A>) -> FloatS64
    where
        A: DataRef<i16>,
    {
        self.assert_not_empty("bfp_energy", a.len());
        FloatS64::new(vect_s16_dot_ref(a.data(), a.data()), 2 * a.exp())
    }
}

impl<T: Mantissa, M: Allocator> BfpMean<T> for Module<M> {
    fn bfp_mean<A>(&self, a: &BfpVec<T, A>) -> FloatS32
    where
        A: DataRef<T>,
    {
        self.assert_not_empty("bfp_mean", a.len());
        let sum: i64 = vect_sum_ref(a.data());
        let hr: Headroom = headroom_i64(sum);
        let mean: i64 = (sum << hr) / a.len() as i64;
        let shr: RightShift = (32 - headroom_i64(mean) as i32).max(0);
        FloatS32::new(
            i32::sat_from_i64(round_shr_i64(mean, shr as u32)),
            a.exp() - hr as i32 + shr,
        )
    }
}

/// `sqrt(energy / len)` with the scalar helpers.
fn rms_from_energy(energy: FloatS64, len: usize, depth: u32) -> FloatS32 {
    assert!(len <= i32::MAX as usize, "bfp_rms: length {len} exceeds i32::MAX");
    let energy: FloatS32 = s64_to_s32(energy.mant, energy.exp);
    let len_inv: FloatS32 = s32_inverse(len as i32);
    let mean: FloatS32 = s32_mul(energy.mant, len_inv.mant, energy.exp, len_inv.exp);
    s32_sqrt(mean.mant, mean.exp, depth)
}

impl<M: Allocator> BfpRms<i32> for Module<M> {
    fn bfp_rms<A>(&self, a: &BfpS32<A>) -> FloatS32
    where
        A: DataRef<i32>,
    {
        let energy: FloatS64 = self.bfp_energy(a);
        rms_from_energy(energy, a.len(), self.config().sqrt_depth_s32())
    }
}

impl<M: Allocator> BfpRms<i16> for Module<M> {
    fn bfp_rms<A>(&self, a: &BfpS16<A>) -> FloatS32
    where
        A: DataRef<i16>,
    {
        let energy: FloatS64 = self.bfp_energy(a);
        rms_from_energy(energy, a.len(), self.config().sqrt_depth_s32())
    }
}

impl<T: Mantissa, M: Allocator> BfpMax<T> for Module<M> {
    fn bfp_max<A>(&self, a: &BfpVec<T, A>) -> Float<T>
    where
        A: DataRef<T>,
    {
        self.assert_not_empty("bfp_max", a.len());
        Float::new(vect_max_ref(a.data()), a.exp())
    }
}

impl<T: Mantissa, M: Allocator> BfpMin<T> for Module<M> {
    fn bfp_min<A>(&self, a: &BfpVec<T, A>) -> Float<T>
    where
        A: DataRef<T>,
    {
        self.assert_not_empty("bfp_min", a.len());
        Float::new(vect_min_ref(a.data()), a.exp())
    }
}

impl<T: Mantissa, M: Allocator> BfpArgmax<T> for Module<M> {
    fn bfp_argmax<A>(&self, a: &BfpVec<T, A>) -> usize
    where
        A: DataRef<T>,
    {
        self.assert_not_empty("bfp_argmax", a.len());
        vect_argmax_ref(a.data())
    }
}

impl<T: Mantissa, M: Allocator> BfpArgmin<T> for Module<M> {
    fn bfp_argmin<A>(&self, a: &BfpVec<T, A>) -> usize
    where
        A: DataRef<T>,
    {
        self.assert_not_empty("bfp_argmin", a.len());
        vect_argmin_ref(a.data())
    }
}

impl<T: Mantissa, M: Allocator> BfpMaxElementwise<T> for Module<M> {
    fn bfp_max_elementwise<R, A, B>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>, b: &BfpVec<T, B>)
    where
        R: DataMut<T>,
        A: DataRef<T>,
        B: DataRef<T>,
    {
        self.assert_same_len("bfp_max_elementwise", res.len(), a.len());
        self.assert_same_len("bfp_max_elementwise", a.len(), b.len());
        self.assert_not_empty("bfp_max_elementwise", a.len());
        let plan: BinaryPlan = vect_elementwise_prepare(a.exp(), b.exp(), a.hr(), b.hr());
        trace!("bfp_max_elementwise: {plan:?}");
        let hr: Headroom = vect_max_elementwise_ref(res.data_mut(), a.data(), b.data(), plan.b_shr, plan.c_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<T: Mantissa, M: Allocator> BfpMinElementwise<T> for Module<M> {
    fn bfp_min_elementwise<R, A, B>(&self, res: &mut BfpVec<T, R>, a: &BfpVec<T, A>, b: &BfpVec<T, B>)
    where
        R: DataMut<T>,
        A: DataRef<T>,
        B: DataRef<T>,
    {
        self.assert_same_len("bfp_min_elementwise", res.len(), a.len());
        self.assert_same_len("bfp_min_elementwise", a.len(), b.len());
        self.assert_not_empty("bfp_min_elementwise", a.len());
        let plan: BinaryPlan = vect_elementwise_prepare(a.exp(), b.exp(), a.hr(), b.hr());
        trace!("bfp_min_elementwise: {plan:?}");
        let hr: Headroom = vect_min_elementwise_ref(res.data_mut(), a.data(), b.data(), plan.b_shr, plan.c_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpMacc<i32> for Module<M> {
    fn bfp_macc<R, B, C>(&self, acc: &mut BfpS32<R>, b: &BfpS32<B>, c: &BfpS32<C>)
    where
        R: DataMut<i32>,
        B: DataRef<i32>,
        C: DataRef<i32>,
    {
        self.assert_same_len("bfp_macc", acc.len(), b.len());
        self.assert_same_len("bfp_macc", b.len(), c.len());
        self.assert_not_empty("bfp_macc", b.len());
        let plan: MaccPlan = vect_s32_macc_prepare(acc.exp(), b.exp(), c.exp(), acc.hr(), b.hr(), c.hr());
        trace!("bfp_macc<i32>: {plan:?}");
        vect_s32_macc_ref(acc.data_mut(), b.data(), c.data(), plan.acc_shr, plan.b_shr, plan.c_shr);
        acc.set_exp(plan.acc_exp);
        acc.update_hr();
    }
}

impl<M: Allocator> BfpMacc<i16> for Module<M> {
    fn bfp_macc<R, B, C>(&self, acc: &mut BfpS16<R>, b: &BfpS16<B>, c: &BfpS16<C>)
    where
        R: DataMut<i16>,
        B: DataRef<i16>,
        C: DataRef<i16>,
    {
        self.assert_same_len("bfp_macc", acc.len(), b.len());
        self.assert_same_len("bfp_macc", b.len(), c.len());
        self.assert_not_empty("bfp_macc", b.len());
        let plan: MaccS16Plan = vect_s16_macc_prepare(acc.exp(), b.exp(), c.exp(), acc.hr(), b.hr(), c.hr());
        trace!("bfp_macc<i16>: {plan:?}");
        vect_s16_macc_ref(acc.data_mut(), b.data(), c.data(), plan.acc_shr, plan.bc_shr);
        acc.set_exp(plan.acc_exp);
        acc.update_hr();
    }
}

impl<M: Allocator> BfpNmacc<i32> for Module<M> {
    fn bfp_nmacc<R, B, C>(&self, acc: &mut BfpS32<R>, b: &BfpS32<B>, c: &BfpS32<C>)
    where
        R: DataMut<i32>,
        B: DataRef<i32>,
        C: DataRef<i32>,
    {
        self.assert_same_len("bfp_nmacc", acc.len(), b.len());
        self.assert_same_len("bfp_nmacc", b.len(), c.len());
        self.assert_not_empty("bfp_nmacc", b.len());
        let plan: MaccPlan = vect_s32_nmacc_prepare(acc.exp(), b.exp(), c.exp(), acc.hr(), b.hr(), c.hr());
        trace!("bfp_nmacc<i32>: {plan:?}");
        vect_s32_nmacc_ref(acc.data_mut(), b.data(), c.data(), plan.acc_shr, plan.b_shr, plan.c_shr);
        acc.set_exp(plan.acc_exp);
        acc.update_hr();
    }
}

impl<M: Allocator> BfpNmacc<i16> for Module<M> {
    fn bfp_nmacc<R, B, C>(&self, acc: &mut BfpS16<R>, b: &BfpS16<B>, c: &BfpS16<C>)
    where
        R: DataMut<i16>,
        B: DataRef<i16>,
        C: DataRef<i16>,
    {
        self.assert_same_len("bfp_nmacc", acc.len(), b.len());
        self.assert_same_len("bfp_nmacc", b.len(), c.len());
        self.assert_not_empty("bfp_nmacc", b.len());
        let plan: MaccS16Plan = vect_s16_nmacc_prepare(acc.exp(), b.exp(), c.exp(), acc.hr(), b.hr(), c.hr());
        trace!("bfp_nmacc<i16>: {plan:?}");
        vect_s16_nmacc_ref(acc.data_mut(), b.data(), c.data(), plan.acc_shr, plan.bc_shr);
        acc.set_exp(plan.acc_exp);
        acc.update_hr();
    }
}

impl<M: Allocator> BfpS32ToS16 for Module<M> {
    fn bfp_s32_to_s16<R, A>(&self, res: &mut BfpS16<R>, a: &BfpS32<A>)
    where
        R: DataMut<i16>,
        A: DataRef<i32>,
    {
        self.assert_same_len("bfp_s32_to_s16", res.len(), a.len());
        self.assert_not_empty("bfp_s32_to_s16", a.len());
        let b_shr: RightShift = 16 - a.hr() as i32;
        trace!("bfp_s32_to_s16: b_shr={b_shr}");
        let hr: Headroom = vect_s32_to_s16_ref(res.data_mut(), a.data(), b_shr);
        res.set_exp(a.exp() + b_shr);
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpS16ToS32 for Module<M> {
    fn bfp_s16_to_s32<R, A>(&self, res: &mut BfpS32<R>, a: &BfpS16<A>)
    where
        R: DataMut<i32>,
        A: DataRef<i16>,
    {
        self.assert_same_len("bfp_s16_to_s32", res.len(), a.len());
        self.assert_not_empty("bfp_s16_to_s32", a.len());
        let hr: Headroom = vect_s16_to_s32_ref(res.data_mut(), a.data(), 8);
        res.set_exp(a.exp() - 8);
        res.set_hr(hr);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        api::{BfpClip, BfpMean, BfpUseExponent},
        layouts::{BfpConfig, BfpS16Owned, BfpS32Owned, Module},
    };

    #[test]
    fn use_exponent_is_noop_at_current_exponent() {
        let module: Module = Module::new(BfpConfig::default());
        let mut a: BfpS16Owned = BfpS16Owned::alloc(4, -3);
        a.set(-0x1234, -3);
        let before: Vec<i16> = a.data().to_vec();
        module.bfp_use_exponent(&mut a, -3);
        assert_eq!(a.data(), &before[..]);
        module.bfp_use_exponent(&mut a, -1);
        assert_eq!(a.exp(), -1);
        assert!(a.data().iter().all(|&x| x == -0x48d));
    }

    #[test]
    fn clip_fills_when_bounds_exclude_input_range() {
        let module: Module = Module::new(BfpConfig::default());
        let mut a: BfpS32Owned = BfpS32Owned::alloc(3, -30);
        a.set(1 << 20, -30);
        let mut res: BfpS32Owned = BfpS32Owned::alloc(3, 0);
        module.bfp_clip(&mut res, &a, 5, 9, 0);
        assert_eq!(res.exp(), 0);
        assert!(res.data().iter().all(|&x| x == 5));
    }

    #[test]
    fn mean_of_constant_vector() {
        let module: Module = Module::new(BfpConfig::default());
        let mut a: BfpS32Owned = BfpS32Owned::alloc(7, -10);
        a.set(-1234, -10);
        let mean = module.bfp_mean(&a);
        assert!((mean.to_f64() - (-1234.0 / 1024.0)).abs() < 1e-6);
    }
}
