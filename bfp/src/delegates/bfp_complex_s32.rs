use tracing::{debug, trace};

use crate::{
    api::{
        BfpComplexS32Add, BfpComplexS32AddInplace, BfpComplexS32AddScalar, BfpComplexS32ConjMacc, BfpComplexS32ConjMul,
        BfpComplexS32ConjNmacc, BfpComplexS32Conjugate, BfpComplexS32Energy, BfpComplexS32Headroom, BfpComplexS32ImagPart,
        BfpComplexS32Macc, BfpComplexS32Mag, BfpComplexS32Make, BfpComplexS32Mul, BfpComplexS32Nmacc, BfpComplexS32RealMul,
        BfpComplexS32RealPart, BfpComplexS32RealScale, BfpComplexS32Scale, BfpComplexS32Shl, BfpComplexS32ShlInplace,
        BfpComplexS32SquaredMag, BfpComplexS32Sub, BfpComplexS32SubInplace, BfpComplexS32Sum, BfpComplexS32ToS16,
        BfpComplexS32UseExponent,
    },
    cast,
    layouts::{
        Allocator, BfpComplexS16, BfpComplexS32, BfpS32, ComplexS32, DataMut, DataRef, Exponent, FloatComplexS32, FloatComplexS64,
        FloatS32, FloatS64, Headroom, LeftShift, Module, RightShift,
    },
    prepare::{
        BinaryPlan, MaccPlan, UnaryPlan, vect_2vec_prepare, vect_add_prepare, vect_add_scalar_prepare,
        vect_complex_s32_conj_mul_prepare, vect_complex_s32_macc_prepare, vect_complex_s32_mag_prepare,
        vect_complex_s32_mul_prepare, vect_complex_s32_real_mul_prepare, vect_complex_s32_real_scale_prepare,
        vect_complex_s32_scale_prepare, vect_complex_s32_squared_mag_prepare, vect_complex_s32_sum_prepare,
        vect_s32_energy_prepare, vect_sub_prepare,
    },
    reference::{
        ComplexMacc, complex_s32_headroom, headroom, shift_sat, vect_complex_s32_add_inplace_ref, vect_complex_s32_add_ref,
        vect_complex_s32_add_scalar_ref, vect_complex_s32_conjugate_ref, vect_complex_s32_imag_part_ref, vect_complex_s32_macc_ref,
        vect_complex_s32_mag_ref, vect_complex_s32_make_ref, vect_complex_s32_mul_ref, vect_complex_s32_real_mul_ref,
        vect_complex_s32_real_part_ref, vect_complex_s32_real_scale_ref, vect_complex_s32_scale_ref, vect_complex_s32_shl_inplace_ref,
        vect_complex_s32_shl_ref, vect_complex_s32_squared_mag_ref, vect_complex_s32_sub_inplace_ref, vect_complex_s32_sub_ref,
        vect_complex_s32_sum_ref, vect_complex_s32_to_s16_ref, vect_s32_energy_ref,
    },
};

#[inline]
fn shifted(c: ComplexS32, shr: RightShift) -> ComplexS32 {
    ComplexS32::new(shift_sat(c.re, shr), shift_sat(c.im, shr))
}

impl<M: Allocator> BfpComplexS32Headroom for Module<M> {
    fn bfp_complex_s32_headroom<A>(&self, a: &mut BfpComplexS32<A>) -> Headroom
    where
        A: DataMut<ComplexS32>,
    {
        a.update_hr()
    }
}

impl<M: Allocator> BfpComplexS32UseExponent for Module<M> {
    fn bfp_complex_s32_use_exponent<A>(&self, a: &mut BfpComplexS32<A>, exp: Exponent)
    where
        A: DataMut<ComplexS32>,
    {
        self.assert_not_empty("bfp_complex_s32_use_exponent", a.len());
        let shr: RightShift = exp - a.exp();
        if shr == 0 {
            return;
        }
        debug!("bfp_complex_s32_use_exponent: exp={} -> {exp} shr={shr}", a.exp());
        let hr: Headroom = vect_complex_s32_shl_inplace_ref(a.data_mut(), -shr);
        a.set_exp(exp);
        a.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS32Shl for Module<M> {
    fn bfp_complex_s32_shl<R, A>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>, shl: LeftShift)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>,
    {
        self.assert_same_len("bfp_complex_s32_shl", res.len(), a.len());
        self.assert_not_empty("bfp_complex_s32_shl", a.len());
        let hr: Headroom = vect_complex_s32_shl_ref(res.data_mut(), a.data(), shl);
        res.set_exp(a.exp());
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS32ShlInplace for Module<M> {
    fn bfp_complex_s32_shl_inplace<A>(&self, a: &mut BfpComplexS32<A>, shl: LeftShift)
    where
        A: DataMut<ComplexS32>,
    {
        self.assert_not_empty("bfp_complex_s32_shl_inplace", a.len());
        let hr: Headroom = vect_complex_s32_shl_inplace_ref(a.data_mut(), shl);
        a.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS32Add for Module<M> {
    fn bfp_complex_s32_add<R, A, B>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>, b: &BfpComplexS32<B>)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>,
        B: DataRef<ComplexS32>,
    {
        self.assert_same_len("bfp_complex_s32_add", res.len(), a.len());
        self.assert_same_len("bfp_complex_s32_add", a.len(), b.len());
        self.assert_not_empty("bfp_complex_s32_add", a.len());
        let plan: BinaryPlan = vect_add_prepare(a.exp(), b.exp(), a.hr(), b.hr());
        trace!("bfp_complex_s32_add: {plan:?}");
        let hr: Headroom = vect_complex_s32_add_ref(res.data_mut(), a.data(), b.data(), plan.b_shr, plan.c_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS32AddInplace for Module<M> {
    fn bfp_complex_s32_add_inplace<R, A>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>,
    {
        self.assert_same_len("bfp_complex_s32_add_inplace", res.len(), a.len());
        self.assert_not_empty("bfp_complex_s32_add_inplace", a.len());
        let plan: BinaryPlan = vect_add_prepare(res.exp(), a.exp(), res.hr(), a.hr());
        trace!("bfp_complex_s32_add_inplace: {plan:?}");
        let hr: Headroom = vect_complex_s32_add_inplace_ref(res.data_mut(), a.data(), plan.b_shr, plan.c_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS32Sub for Module<M> {
    fn bfp_complex_s32_sub<R, A, B>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>, b: &BfpComplexS32<B>)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>,
        B: DataRef<ComplexS32>,
    {
        self.assert_same_len("bfp_complex_s32_sub", res.len(), a.len());
        self.assert_same_len("bfp_complex_s32_sub", a.len(), b.len());
        self.assert_not_empty("bfp_complex_s32_sub", a.len());
        let plan: BinaryPlan = vect_sub_prepare(a.exp(), b.exp(), a.hr(), b.hr());
        trace!("bfp_complex_s32_sub: {plan:?}");
        let hr: Headroom = vect_complex_s32_sub_ref(res.data_mut(), a.data(), b.data(), plan.b_shr, plan.c_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS32SubInplace for Module<M> {
    fn bfp_complex_s32_sub_inplace<R, A>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>,
    {
        self.assert_same_len("bfp_complex_s32_sub_inplace", res.len(), a.len());
        self.assert_not_empty("bfp_complex_s32_sub_inplace", a.len());
        let plan: BinaryPlan = vect_sub_prepare(res.exp(), a.exp(), res.hr(), a.hr());
        trace!("bfp_complex_s32_sub_inplace: {plan:?}");
        let hr: Headroom = vect_complex_s32_sub_inplace_ref(res.data_mut(), a.data(), plan.b_shr, plan.c_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS32AddScalar for Module<M> {
    fn bfp_complex_s32_add_scalar<R, A>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>, c: FloatComplexS32)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>,
    {
        self.assert_same_len("bfp_complex_s32_add_scalar", res.len(), a.len());
        self.assert_not_empty("bfp_complex_s32_add_scalar", a.len());
        let plan: BinaryPlan = vect_add_scalar_prepare(a.exp(), c.exp, a.hr(), complex_s32_headroom(c.mant));
        trace!("bfp_complex_s32_add_scalar: {plan:?}");
        let hr: Headroom = vect_complex_s32_add_scalar_ref(res.data_mut(), a.data(), shifted(c.mant, plan.c_shr), plan.b_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS32RealMul for Module<M> {
    fn bfp_complex_s32_real_mul<R, A, B>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>, b: &BfpS32<B>)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>,
        B: DataRef<i32>,
    {
        self.assert_same_len("bfp_complex_s32_real_mul", res.len(), a.len());
        self.assert_same_len("bfp_complex_s32_real_mul", a.len(), b.len());
        self.assert_not_empty("bfp_complex_s32_real_mul", a.len());
        let plan: BinaryPlan = vect_complex_s32_real_mul_prepare(a.exp(), b.exp(), a.hr(), b.hr());
        trace!("bfp_complex_s32_real_mul: {plan:?}");
        let hr: Headroom = vect_complex_s32_real_mul_ref(res.data_mut(), a.data(), b.data(), plan.b_shr, plan.c_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS32Mul for Module<M> {
    fn bfp_complex_s32_mul<R, A, B>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>, b: &BfpComplexS32<B>)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>,
        B: DataRef<ComplexS32>,
    {
        self.assert_same_len("bfp_complex_s32_mul", res.len(), a.len());
        self.assert_same_len("bfp_complex_s32_mul", a.len(), b.len());
        self.assert_not_empty("bfp_complex_s32_mul", a.len());
        let plan: BinaryPlan = vect_complex_s32_mul_prepare(a.exp(), b.exp(), a.hr(), b.hr());
        trace!("bfp_complex_s32_mul: {plan:?}");
        let hr: Headroom = vect_complex_s32_mul_ref(res.data_mut(), a.data(), b.data(), plan.b_shr, plan.c_shr, false);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS32ConjMul for Module<M> {
    fn bfp_complex_s32_conj_mul<R, A, B>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>, b: &BfpComplexS32<B>)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>,
        B: DataRef<ComplexS32>,
    {
        self.assert_same_len("bfp_complex_s32_conj_mul", res.len(), a.len());
        self.assert_same_len("bfp_complex_s32_conj_mul", a.len(), b.len());
        self.assert_not_empty("bfp_complex_s32_conj_mul", a.len());
        let plan: BinaryPlan = vect_complex_s32_conj_mul_prepare(a.exp(), b.exp(), a.hr(), b.hr());
        trace!("bfp_complex_s32_conj_mul: {plan:?}");
        let hr: Headroom = vect_complex_s32_mul_ref(res.data_mut(), a.data(), b.data(), plan.b_shr, plan.c_shr, true);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS32RealScale for Module<M> {
    fn bfp_complex_s32_real_scale<R, A>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>, c: FloatS32)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>,
    {
        self.assert_same_len("bfp_complex_s32_real_scale", res.len(), a.len());
        self.assert_not_empty("bfp_complex_s32_real_scale", a.len());
        let plan: BinaryPlan = vect_complex_s32_real_scale_prepare(a.exp(), c.exp, a.hr(), headroom(c.mant));
        trace!("bfp_complex_s32_real_scale: {plan:?}");
        let hr: Headroom = vect_complex_s32_real_scale_ref(res.data_mut(), a.data(), shift_sat(c.mant, plan.c_shr), plan.b_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS32Scale for Module<M> {
    fn bfp_complex_s32_scale<R, A>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>, c: FloatComplexS32)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>,
    {
        self.assert_same_len("bfp_complex_s32_scale", res.len(), a.len());
        self.assert_not_empty("bfp_complex_s32_scale", a.len());
        let plan: BinaryPlan = vect_complex_s32_scale_prepare(a.exp(), c.exp, a.hr(), complex_s32_headroom(c.mant));
        trace!("bfp_complex_s32_scale: {plan:?}");
        let hr: Headroom = vect_complex_s32_scale_ref(res.data_mut(), a.data(), shifted(c.mant, plan.c_shr), plan.b_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS32SquaredMag for Module<M> {
    fn bfp_complex_s32_squared_mag<R, A>(&self, res: &mut BfpS32<R>, a: &BfpComplexS32<A>)
    where
        R: DataMut<i32>,
        A: DataRef<ComplexS32>,
    {
        self.assert_same_len("bfp_complex_s32_squared_mag", res.len(), a.len());
        self.assert_not_empty("bfp_complex_s32_squared_mag", a.len());
        let plan: UnaryPlan = vect_complex_s32_squared_mag_prepare(a.exp(), a.hr());
        trace!("bfp_complex_s32_squared_mag: {plan:?}");
        let hr: Headroom = vect_complex_s32_squared_mag_ref(res.data_mut(), a.data(), plan.b_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS32Mag for Module<M> {
    fn bfp_complex_s32_mag<R, A>(&self, res: &mut BfpS32<R>, a: &BfpComplexS32<A>)
    where
        R: DataMut<i32>,
        A: DataRef<ComplexS32>,
    {
        self.assert_same_len("bfp_complex_s32_mag", res.len(), a.len());
        self.assert_not_empty("bfp_complex_s32_mag", a.len());
        let plan: UnaryPlan = vect_complex_s32_mag_prepare(a.exp(), a.hr());
        trace!("bfp_complex_s32_mag: {plan:?}");
        let hr: Headroom = vect_complex_s32_mag_ref(res.data_mut(), a.data(), plan.b_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS32Sum for Module<M> {
    fn bfp_complex_s32_sum<A>(&self, a: &BfpComplexS32<A>) -> FloatComplexS64
    where
        A: DataRef<ComplexS32>,
    {
        self.assert_not_empty("bfp_complex_s32_sum", a.len());
        let plan: UnaryPlan = vect_complex_s32_sum_prepare(a.exp(), a.hr(), a.len());
        trace!("bfp_complex_s32_sum: {plan:?}");
        FloatComplexS64::new(vect_complex_s32_sum_ref(a.data(), plan.b_shr), plan.a_exp)
    }
}

impl<M: Allocator> BfpComplexS32Energy for Module<M> {
    fn bfp_complex_s32_energy<A>(&self, a: &BfpComplexS32<A>) -> FloatS64
    where
        A: DataRef<ComplexS32>,
    {
        self.assert_not_empty("bfp_complex_s32_energy", a.len());
        // |a[k]|^2 is the energy of the interleaved parts.
        let parts: &[i32] = cast(a.data());
        let plan: UnaryPlan = vect_s32_energy_prepare(parts.len(), a.exp(), a.hr());
        trace!("bfp_complex_s32_energy: {plan:?}");
        FloatS64::new(vect_s32_energy_ref(parts, plan.b_shr), plan.a_exp)
    }
}

impl<M: Allocator> BfpComplexS32ToS16 for Module<M> {
    fn bfp_complex_s32_to_s16<R, A>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS32<A>)
    where
        R: DataMut<i16>,
        A: DataRef<ComplexS32>,
    {
        self.assert_same_len("bfp_complex_s32_to_s16", res.len(), a.len());
        self.assert_not_empty("bfp_complex_s32_to_s16", a.len());
        let b_shr: RightShift = 16 - a.hr() as i32;
        trace!("bfp_complex_s32_to_s16: b_shr={b_shr}");
        let (res_re, res_im) = res.parts_mut();
        let hr: Headroom = vect_complex_s32_to_s16_ref(res_re, res_im, a.data(), b_shr);
        res.set_exp(a.exp() + b_shr);
        res.set_hr(hr);
    }
}

impl<M: Allocator> Module<M> {
    fn complex_s32_macc<R, B, C>(
        &self,
        op: &str,
        acc: &mut BfpComplexS32<R>,
        b: &BfpComplexS32<B>,
        c: &BfpComplexS32<C>,
        kind: ComplexMacc,
    ) where
        R: DataMut<ComplexS32>,
        B: DataRef<ComplexS32>,
        C: DataRef<ComplexS32>,
    {
        self.assert_same_len(op, acc.len(), b.len());
        self.assert_same_len(op, b.len(), c.len());
        self.assert_not_empty(op, b.len());
        let plan: MaccPlan = vect_complex_s32_macc_prepare(acc.exp(), b.exp(), c.exp(), acc.hr(), b.hr(), c.hr());
        trace!("{op}: {plan:?}");
        let hr: Headroom = vect_complex_s32_macc_ref(
            acc.data_mut(),
            b.data(),
            c.data(),
            plan.acc_shr,
            plan.b_shr,
            plan.c_shr,
            kind,
        );
        acc.set_exp(plan.acc_exp);
        acc.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS32Macc for Module<M> {
    fn bfp_complex_s32_macc<R, B, C>(&self, acc: &mut BfpComplexS32<R>, b: &BfpComplexS32<B>, c: &BfpComplexS32<C>)
    where
        R: DataMut<ComplexS32>,
        B: DataRef<ComplexS32>,
        C: DataRef<ComplexS32>,
    {
        self.complex_s32_macc("bfp_complex_s32_macc", acc, b, c, ComplexMacc::Macc);
    }
}

impl<M: Allocator> BfpComplexS32Nmacc for Module<M> {
    fn bfp_complex_s32_nmacc<R, B, C>(&self, acc: &mut BfpComplexS32<R>, b: &BfpComplexS32<B>, c: &BfpComplexS32<C>)
    where
        R: DataMut<ComplexS32>,
        B: DataRef<ComplexS32>,
        C: DataRef<ComplexS32>,
    {
        self.complex_s32_macc("bfp_complex_s32_nmacc", acc, b, c, ComplexMacc::Nmacc);
    }
}

impl<M: Allocator> BfpComplexS32ConjMacc for Module<M> {
    fn bfp_complex_s32_conj_macc<R, B, C>(&self, acc: &mut BfpComplexS32<R>, b: &BfpComplexS32<B>, c: &BfpComplexS32<C>)
    where
        R: DataMut<ComplexS32>,
        B: DataRef<ComplexS32>,
        C: DataRef<ComplexS32>,
    {
        self.complex_s32_macc("bfp_complex_s32_conj_macc", acc, b, c, ComplexMacc::ConjMacc);
    }
}

impl<M: Allocator> BfpComplexS32ConjNmacc for Module<M> {
    fn bfp_complex_s32_conj_nmacc<R, B, C>(&self, acc: &mut BfpComplexS32<R>, b: &BfpComplexS32<B>, c: &BfpComplexS32<C>)
    where
        R: DataMut<ComplexS32>,
        B: DataRef<ComplexS32>,
        C: DataRef<ComplexS32>,
    {
        self.complex_s32_macc("bfp_complex_s32_conj_nmacc", acc, b, c, ComplexMacc::ConjNmacc);
    }
}

impl<M: Allocator> BfpComplexS32Conjugate for Module<M> {
    fn bfp_complex_s32_conjugate<R, A>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS32<A>)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<ComplexS32>,
    {
        self.assert_same_len("bfp_complex_s32_conjugate", res.len(), a.len());
        self.assert_not_empty("bfp_complex_s32_conjugate", a.len());
        let hr: Headroom = vect_complex_s32_conjugate_ref(res.data_mut(), a.data());
        res.set_exp(a.exp());
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS32Make for Module<M> {
    fn bfp_complex_s32_make<R, A, B>(&self, res: &mut BfpComplexS32<R>, re: &BfpS32<A>, im: &BfpS32<B>)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<i32>,
        B: DataRef<i32>,
    {
        self.assert_same_len("bfp_complex_s32_make", res.len(), re.len());
        self.assert_same_len("bfp_complex_s32_make", re.len(), im.len());
        self.assert_not_empty("bfp_complex_s32_make", re.len());
        // Each part is a separate lane, so no margin is needed.
        let plan: BinaryPlan = vect_2vec_prepare(re.exp(), im.exp(), re.hr(), im.hr(), 0);
        trace!("bfp_complex_s32_make: {plan:?}");
        let hr: Headroom = vect_complex_s32_make_ref(res.data_mut(), re.data(), im.data(), plan.b_shr, plan.c_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS32RealPart for Module<M> {
    fn bfp_complex_s32_real_part<R, A>(&self, res: &mut BfpS32<R>, a: &BfpComplexS32<A>)
    where
        R: DataMut<i32>,
        A: DataRef<ComplexS32>,
    {
        self.assert_same_len("bfp_complex_s32_real_part", res.len(), a.len());
        self.assert_not_empty("bfp_complex_s32_real_part", a.len());
        vect_complex_s32_real_part_ref(res.data_mut(), a.data());
        res.set_exp(a.exp());
        res.set_hr(a.hr());
    }
}

impl<M: Allocator> BfpComplexS32ImagPart for Module<M> {
    fn bfp_complex_s32_imag_part<R, A>(&self, res: &mut BfpS32<R>, a: &BfpComplexS32<A>)
    where
        R: DataMut<i32>,
        A: DataRef<ComplexS32>,
    {
        self.assert_same_len("bfp_complex_s32_imag_part", res.len(), a.len());
        self.assert_not_empty("bfp_complex_s32_imag_part", a.len());
        vect_complex_s32_imag_part_ref(res.data_mut(), a.data());
        res.set_exp(a.exp());
        res.set_hr(a.hr());
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        api::{BfpComplexS32Energy, BfpComplexS32Make, BfpComplexS32RealPart},
        layouts::{BfpComplexS32Owned, BfpConfig, BfpS32Owned, ComplexS32, Module},
    };

    #[test]
    fn make_then_split_keeps_values() {
        let module: Module = Module::new(BfpConfig::default());
        let mut re: BfpS32Owned = BfpS32Owned::alloc(4, -8);
        let mut im: BfpS32Owned = BfpS32Owned::alloc(4, -12);
        re.set(300, -8);
        im.set(-5000, -12);
        let mut c: BfpComplexS32Owned = BfpComplexS32Owned::alloc(4, 0);
        module.bfp_complex_s32_make(&mut c, &re, &im);
        for k in 0..4 {
            let x: ComplexS32 = c.data()[k];
            let scale: f64 = 2f64.powi(c.exp());
            assert!((x.re as f64 * scale - 300.0 / 256.0).abs() < 1e-6);
            assert!((x.im as f64 * scale + 5000.0 / 4096.0).abs() < 1e-6);
        }
        let mut back: BfpS32Owned = BfpS32Owned::alloc(4, 0);
        module.bfp_complex_s32_real_part(&mut back, &c);
        assert!((back.to_f64(2) - 300.0 / 256.0).abs() < 1e-6);
    }

    #[test]
    fn energy_sums_both_parts() {
        let module: Module = Module::new(BfpConfig::default());
        let mut a: BfpComplexS32Owned = BfpComplexS32Owned::alloc(3, -4);
        a.set(ComplexS32::new(3, -4), -4);
        let energy = module.bfp_complex_s32_energy(&a);
        assert!((energy.to_f64() - 3.0 * 25.0 / 256.0).abs() < 1e-9);
    }
}
