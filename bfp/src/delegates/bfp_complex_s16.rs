use tracing::{debug, trace};

use crate::{
    api::{
        BfpComplexS16Add, BfpComplexS16AddScalar, BfpComplexS16ConjMacc, BfpComplexS16ConjMul, BfpComplexS16ConjNmacc,
        BfpComplexS16Conjugate, BfpComplexS16Energy, BfpComplexS16Headroom, BfpComplexS16Macc, BfpComplexS16Mag,
        BfpComplexS16Mul, BfpComplexS16Nmacc, BfpComplexS16RealMul, BfpComplexS16RealScale, BfpComplexS16Scale,
        BfpComplexS16Shl, BfpComplexS16SquaredMag, BfpComplexS16Sub, BfpComplexS16Sum, BfpComplexS16ToS32,
        BfpComplexS16UseExponent,
    },
    layouts::{
        Allocator, BfpComplexS16, BfpComplexS32, BfpS16, ComplexS32, DataMut, DataRef, Exponent, FloatComplexS16, FloatComplexS64,
        FloatS16, FloatS64, Headroom, LeftShift, Module, RightShift,
    },
    prepare::{
        BinaryPlan, MaccS16Plan, ProductPlan, UnaryPlan, vect_add_prepare, vect_add_scalar_prepare, vect_complex_s16_macc_prepare,
        vect_complex_s16_mag_prepare, vect_complex_s16_mul_prepare, vect_complex_s16_real_mul_prepare,
        vect_complex_s16_real_scale_prepare, vect_complex_s16_scale_prepare, vect_complex_s16_squared_mag_prepare,
        vect_sub_prepare,
    },
    reference::{
        ComplexMacc, complex_headroom, headroom, shift_sat, vect_add_ref, vect_add_scalar_ref, vect_complex_s16_conjugate_ref,
        vect_complex_s16_macc_ref, vect_complex_s16_mag_ref, vect_complex_s16_mul_ref, vect_complex_s16_real_mul_ref,
        vect_complex_s16_scale_ref, vect_complex_s16_squared_mag_ref, vect_complex_s16_sum_ref, vect_complex_s16_to_s32_ref,
        vect_headroom, vect_s16_dot_ref, vect_s16_scale_ref, vect_shl_inplace_ref, vect_shl_ref, vect_sub_ref,
    },
};

impl<M: Allocator> BfpComplexS16Headroom for Module<M> {
    fn bfp_complex_s16_headroom<A>(&self, a: &mut BfpComplexS16<A>) -> Headroom
    where
        A: DataMut<i16>,
    {
        a.update_hr()
    }
}

impl<M: Allocator> BfpComplexS16UseExponent for Module<M> {
    fn bfp_complex_s16_use_exponent<A>(&self, a: &mut BfpComplexS16<A>, exp: Exponent)
    where
        A: DataMut<i16>,
    {
        self.assert_not_empty("bfp_complex_s16_use_exponent", a.len());
        let shr: RightShift = exp - a.exp();
        if shr == 0 {
            return;
        }
        debug!("bfp_complex_s16_use_exponent: exp={} -> {exp} shr={shr}", a.exp());
        let (re, im) = a.parts_mut();
        let hr: Headroom = vect_shl_inplace_ref(re, -shr).min(vect_shl_inplace_ref(im, -shr));
        a.set_exp(exp);
        a.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS16Shl for Module<M> {
    fn bfp_complex_s16_shl<R, A>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS16<A>, shl: LeftShift)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
    {
        self.assert_same_len("bfp_complex_s16_shl", res.len(), a.len());
        self.assert_not_empty("bfp_complex_s16_shl", a.len());
        let (re, im) = res.parts_mut();
        let hr: Headroom = vect_shl_ref(re, a.real(), shl).min(vect_shl_ref(im, a.imag(), shl));
        res.set_exp(a.exp());
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS16Add for Module<M> {
    fn bfp_complex_s16_add<R, A, B>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS16<A>, b: &BfpComplexS16<B>)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
        B: DataRef<i16>,
    {
        self.assert_same_len("bfp_complex_s16_add", res.len(), a.len());
        self.assert_same_len("bfp_complex_s16_add", a.len(), b.len());
        self.assert_not_empty("bfp_complex_s16_add", a.len());
        let plan: BinaryPlan = vect_add_prepare(a.exp(), b.exp(), a.hr(), b.hr());
        trace!("bfp_complex_s16_add: {plan:?}");
        let (re, im) = res.parts_mut();
        let hr_re: Headroom = vect_add_ref(re, a.real(), b.real(), plan.b_shr, plan.c_shr);
        let hr_im: Headroom = vect_add_ref(im, a.imag(), b.imag(), plan.b_shr, plan.c_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr_re.min(hr_im));
    }
}

impl<M: Allocator> BfpComplexS16Sub for Module<M> {
    fn bfp_complex_s16_sub<R, A, B>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS16<A>, b: &BfpComplexS16<B>)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
        B: DataRef<i16>,
    {
        self.assert_same_len("bfp_complex_s16_sub", res.len(), a.len());
        self.assert_same_len("bfp_complex_s16_sub", a.len(), b.len());
        self.assert_not_empty("bfp_complex_s16_sub", a.len());
        let plan: BinaryPlan = vect_sub_prepare(a.exp(), b.exp(), a.hr(), b.hr());
        trace!("bfp_complex_s16_sub: {plan:?}");
        let (re, im) = res.parts_mut();
        let hr_re: Headroom = vect_sub_ref(re, a.real(), b.real(), plan.b_shr, plan.c_shr);
        let hr_im: Headroom = vect_sub_ref(im, a.imag(), b.imag(), plan.b_shr, plan.c_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr_re.min(hr_im));
    }
}

impl<M: Allocator> BfpComplexS16AddScalar for Module<M> {
    fn bfp_complex_s16_add_scalar<R, A>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS16<A>, c: FloatComplexS16)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
    {
        self.assert_same_len("bfp_complex_s16_add_scalar", res.len(), a.len());
        self.assert_not_empty("bfp_complex_s16_add_scalar", a.len());
        let plan: BinaryPlan = vect_add_scalar_prepare(a.exp(), c.exp, a.hr(), complex_headroom(c.mant));
        trace!("bfp_complex_s16_add_scalar: {plan:?}");
        let (c_re, c_im): (i16, i16) = (shift_sat(c.mant.re, plan.c_shr), shift_sat(c.mant.im, plan.c_shr));
        let (re, im) = res.parts_mut();
        let hr_re: Headroom = vect_add_scalar_ref(re, a.real(), c_re, plan.b_shr);
        let hr_im: Headroom = vect_add_scalar_ref(im, a.imag(), c_im, plan.b_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr_re.min(hr_im));
    }
}

impl<M: Allocator> BfpComplexS16RealMul for Module<M> {
    fn bfp_complex_s16_real_mul<R, A, B>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS16<A>, b: &BfpS16<B>)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
        B: DataRef<i16>,
    {
        self.assert_same_len("bfp_complex_s16_real_mul", res.len(), a.len());
        self.assert_same_len("bfp_complex_s16_real_mul", a.len(), b.len());
        self.assert_not_empty("bfp_complex_s16_real_mul", a.len());
        let plan: ProductPlan = vect_complex_s16_real_mul_prepare(a.exp(), b.exp(), a.hr(), b.hr());
        trace!("bfp_complex_s16_real_mul: {plan:?}");
        let (re, im) = res.parts_mut();
        let hr: Headroom = vect_complex_s16_real_mul_ref(re, im, a.real(), a.imag(), b.data(), plan.a_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<M: Allocator> Module<M> {
    fn complex_s16_mul<R, A, B>(&self, op: &str, res: &mut BfpComplexS16<R>, a: &BfpComplexS16<A>, b: &BfpComplexS16<B>, conj: bool)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
        B: DataRef<i16>,
    {
        self.assert_same_len(op, res.len(), a.len());
        self.assert_same_len(op, a.len(), b.len());
        self.assert_not_empty(op, a.len());
        let plan: ProductPlan = vect_complex_s16_mul_prepare(a.exp(), b.exp(), a.hr(), b.hr());
        trace!("{op}: {plan:?}");
        let (re, im) = res.parts_mut();
        let hr: Headroom = vect_complex_s16_mul_ref(re, im, a.real(), a.imag(), b.real(), b.imag(), plan.a_shr, conj);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }

    fn complex_s16_macc<R, B, C>(
        &self,
        op: &str,
        acc: &mut BfpComplexS16<R>,
        b: &BfpComplexS16<B>,
        c: &BfpComplexS16<C>,
        kind: ComplexMacc,
    ) where
        R: DataMut<i16>,
        B: DataRef<i16>,
        C: DataRef<i16>,
    {
        self.assert_same_len(op, acc.len(), b.len());
        self.assert_same_len(op, b.len(), c.len());
        self.assert_not_empty(op, b.len());
        let plan: MaccS16Plan = vect_complex_s16_macc_prepare(acc.exp(), b.exp(), c.exp(), acc.hr(), b.hr(), c.hr());
        trace!("{op}: {plan:?}");
        let (acc_re, acc_im) = acc.parts_mut();
        let hr: Headroom = vect_complex_s16_macc_ref(
            acc_re,
            acc_im,
            b.real(),
            b.imag(),
            c.real(),
            c.imag(),
            plan.acc_shr,
            plan.bc_shr,
            kind,
        );
        acc.set_exp(plan.acc_exp);
        acc.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS16Mul for Module<M> {
    fn bfp_complex_s16_mul<R, A, B>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS16<A>, b: &BfpComplexS16<B>)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
        B: DataRef<i16>,
    {
        self.complex_s16_mul("bfp_complex_s16_mul", res, a, b, false);
    }
}

impl<M: Allocator> BfpComplexS16ConjMul for Module<M> {
    fn bfp_complex_s16_conj_mul<R, A, B>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS16<A>, b: &BfpComplexS16<B>)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
        B: DataRef<i16>,
    {
        self.complex_s16_mul("bfp_complex_s16_conj_mul", res, a, b, true);
    }
}

impl<M: Allocator> BfpComplexS16RealScale for Module<M> {
    fn bfp_complex_s16_real_scale<R, A>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS16<A>, c: FloatS16)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
    {
        self.assert_same_len("bfp_complex_s16_real_scale", res.len(), a.len());
        self.assert_not_empty("bfp_complex_s16_real_scale", a.len());
        let plan: ProductPlan = vect_complex_s16_real_scale_prepare(a.exp(), c.exp, a.hr(), headroom(c.mant));
        trace!("bfp_complex_s16_real_scale: {plan:?}");
        let (re, im) = res.parts_mut();
        vect_s16_scale_ref(re, a.real(), c.mant, plan.a_shr);
        vect_s16_scale_ref(im, a.imag(), c.mant, plan.a_shr);
        let hr: Headroom = vect_headroom(re).min(vect_headroom(im));
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS16Scale for Module<M> {
    fn bfp_complex_s16_scale<R, A>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS16<A>, c: FloatComplexS16)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
    {
        self.assert_same_len("bfp_complex_s16_scale", res.len(), a.len());
        self.assert_not_empty("bfp_complex_s16_scale", a.len());
        let plan: ProductPlan = vect_complex_s16_scale_prepare(a.exp(), c.exp, a.hr(), complex_headroom(c.mant));
        trace!("bfp_complex_s16_scale: {plan:?}");
        let (re, im) = res.parts_mut();
        let hr: Headroom = vect_complex_s16_scale_ref(re, im, a.real(), a.imag(), c.mant, plan.a_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS16SquaredMag for Module<M> {
    fn bfp_complex_s16_squared_mag<R, A>(&self, res: &mut BfpS16<R>, a: &BfpComplexS16<A>)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
    {
        self.assert_same_len("bfp_complex_s16_squared_mag", res.len(), a.len());
        self.assert_not_empty("bfp_complex_s16_squared_mag", a.len());
        let plan: ProductPlan = vect_complex_s16_squared_mag_prepare(a.exp(), a.hr());
        trace!("bfp_complex_s16_squared_mag: {plan:?}");
        let hr: Headroom = vect_complex_s16_squared_mag_ref(res.data_mut(), a.real(), a.imag(), plan.a_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS16Mag for Module<M> {
    fn bfp_complex_s16_mag<R, A>(&self, res: &mut BfpS16<R>, a: &BfpComplexS16<A>)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
    {
        self.assert_same_len("bfp_complex_s16_mag", res.len(), a.len());
        self.assert_not_empty("bfp_complex_s16_mag", a.len());
        let plan: UnaryPlan = vect_complex_s16_mag_prepare(a.exp(), a.hr());
        trace!("bfp_complex_s16_mag: {plan:?}");
        let hr: Headroom = vect_complex_s16_mag_ref(res.data_mut(), a.real(), a.imag(), plan.b_shr);
        res.set_exp(plan.a_exp);
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS16Sum for Module<M> {
    fn bfp_complex_s16_sum<A>(&self, a: &BfpComplexS16<A>) -> FloatComplexS64
    where
        A: DataRef<i16>,
    {
        self.assert_not_empty("bfp_complex_s16_sum", a.len());
        FloatComplexS64::new(vect_complex_s16_sum_ref(a.real(), a.imag()), a.exp())
    }
}

impl<M: Allocator> BfpComplexS16Energy for Module<M> {
    fn bfp_complex_s16_energy<A>(&self, a: &BfpComplexS16<A>) -> FloatS64
    where
        A: DataRef<i16>,
    {
        self.assert_not_empty("bfp_complex_s16_energy", a.len());
        let energy: i64 = vect_s16_dot_ref(a.real(), a.real()) + vect_s16_dot_ref(a.imag(), a.imag());
        FloatS64::new(energy, 2 * a.exp())
    }
}

impl<M: Allocator> BfpComplexS16ToS32 for Module<M> {
    fn bfp_complex_s16_to_s32<R, A>(&self, res: &mut BfpComplexS32<R>, a: &BfpComplexS16<A>)
    where
        R: DataMut<ComplexS32>,
        A: DataRef<i16>,
    {
        self.assert_same_len("bfp_complex_s16_to_s32", res.len(), a.len());
        self.assert_not_empty("bfp_complex_s16_to_s32", a.len());
        let hr: Headroom = vect_complex_s16_to_s32_ref(res.data_mut(), a.real(), a.imag());
        res.set_exp(a.exp());
        res.set_hr(hr);
    }
}

impl<M: Allocator> BfpComplexS16Macc for Module<M> {
    fn bfp_complex_s16_macc<R, B, C>(&self, acc: &mut BfpComplexS16<R>, b: &BfpComplexS16<B>, c: &BfpComplexS16<C>)
    where
        R: DataMut<i16>,
        B: DataRef<i16>,
        C: DataRef<i16>,
    {
        self.complex_s16_macc("bfp_complex_s16_macc", acc, b, c, ComplexMacc::Macc);
    }
}

impl<M: Allocator> BfpComplexS16Nmacc for Module<M> {
    fn bfp_complex_s16_nmacc<R, B, C>(&self, acc: &mut BfpComplexS16<R>, b: &BfpComplexS16<B>, c: &BfpComplexS16<C>)
    where
        R: DataMut<i16>,
        B: DataRef<i16>,
        C: DataRef<i16>,
    {
        self.complex_s16_macc("bfp_complex_s16_nmacc", acc, b, c, ComplexMacc::Nmacc);
    }
}

impl<M: Allocator> BfpComplexS16ConjMacc for Module<M> {
    fn bfp_complex_s16_conj_macc<R, B, C>(&self, acc: &mut BfpComplexS16<R>, b: &BfpComplexS16<B>, c: &BfpComplexS16<C>)
    where
        R: DataMut<i16>,
        B: DataRef<i16>,
        C: DataRef<i16>,
    {
        self.complex_s16_macc("bfp_complex_s16_conj_macc", acc, b, c, ComplexMacc::ConjMacc);
    }
}

impl<M: Allocator> BfpComplexS16ConjNmacc for Module<M> {
    fn bfp_complex_s16_conj_nmacc<R, B, C>(&self, acc: &mut BfpComplexS16<R>, b: &BfpComplexS16<B>, c: &BfpComplexS16<C>)
    where
        R: DataMut<i16>,
        B: DataRef<i16>,
        C: DataRef<i16>,
    {
        self.complex_s16_macc("bfp_complex_s16_conj_nmacc", acc, b, c, ComplexMacc::ConjNmacc);
    }
}

impl<M: Allocator> BfpComplexS16Conjugate for Module<M> {
    fn bfp_complex_s16_conjugate<R, A>(&self, res: &mut BfpComplexS16<R>, a: &BfpComplexS16<A>)
    where
        R: DataMut<i16>,
        A: DataRef<i16>,
    {
        self.assert_same_len("bfp_complex_s16_conjugate", res.len(), a.len());
        self.assert_not_empty("bfp_complex_s16_conjugate", a.len());
        let (re, im) = res.parts_mut();
        let hr: Headroom = vect_complex_s16_conjugate_ref(re, im, a.real(), a.imag());
        res.set_exp(a.exp());
        res.set_hr(hr);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        api::{BfpComplexS16ConjMul, BfpComplexS16Sum},
        layouts::{BfpComplexS16Owned, BfpConfig, ComplexS16, Module},
    };

    #[test]
    fn conj_mul_by_self_is_real() {
        let module: Module = Module::new(BfpConfig::default());
        let mut a: BfpComplexS16Owned = BfpComplexS16Owned::alloc(5, -10);
        a.set(ComplexS16::new(300, -700), -10);
        let mut res: BfpComplexS16Owned = BfpComplexS16Owned::alloc(5, 0);
        module.bfp_complex_s16_conj_mul(&mut res, &a, &a);
        let expected: f64 = (300.0f64 * 300.0 + 700.0 * 700.0) * 2f64.powi(-20);
        let scale: f64 = 2f64.powi(res.exp());
        for k in 0..5 {
            assert_eq!(res.imag()[k], 0);
            assert!((res.real()[k] as f64 * scale - expected).abs() <= scale);
        }
    }

    #[test]
    fn sum_is_exact() {
        let module: Module = Module::new(BfpConfig::default());
        let mut a: BfpComplexS16Owned = BfpComplexS16Owned::alloc(1000, 3);
        a.set(ComplexS16::new(i16::MAX, -i16::MAX), 3);
        let sum = module.bfp_complex_s16_sum(&a);
        assert_eq!(sum.exp, 3);
        assert_eq!(sum.mant.re, 1000 * i16::MAX as i64);
        assert_eq!(sum.mant.im, -1000 * i16::MAX as i64);
    }
}
