use std::fmt;

use crate::{
    alloc_aligned,
    layouts::{ComplexS16, DataMut, DataRef, Exponent, Headroom},
    reference::{headroom, vect_complex_s16_headroom},
};

/// Complex 16-bit BFP vector with separate real and imaginary buffers of
/// equal length.
#[derive(PartialEq, Eq, Clone, Hash)]
pub struct BfpComplexS16<D> {
    real: D,
    imag: D,
    exp: Exponent,
    hr: Headroom,
}

pub type BfpComplexS16Owned = BfpComplexS16<Vec<i16>>;
pub type BfpComplexS16Ref<'a> = BfpComplexS16<&'a [i16]>;
pub type BfpComplexS16Mut<'a> = BfpComplexS16<&'a mut [i16]>;

impl<D: DataRef<i16>> BfpComplexS16<D> {
    /// Binds the `real` and `imag` buffers with exponent `exp`.
    ///
    /// # Panics
    /// If the two buffers differ in length.
    pub fn init(real: D, imag: D, exp: Exponent, calc_hr: bool) -> Self {
        assert_eq!(
            real.as_ref().len(),
            imag.as_ref().len(),
            "BfpComplexS16::init: real and imag lengths differ"
        );
        let hr: Headroom = if calc_hr {
            vect_complex_s16_headroom(real.as_ref(), imag.as_ref())
        } else {
            0
        };
        Self { real, imag, exp, hr }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.real.as_ref().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn exp(&self) -> Exponent {
        self.exp
    }

    #[inline]
    pub fn hr(&self) -> Headroom {
        self.hr
    }

    #[inline]
    pub fn real(&self) -> &[i16] {
        self.real.as_ref()
    }

    #[inline]
    pub fn imag(&self) -> &[i16] {
        self.imag.as_ref()
    }

    /// Element `k` as a complex pair.
    pub fn get(&self, k: usize) -> ComplexS16 {
        ComplexS16::new(self.real()[k], self.imag()[k])
    }

    pub fn to_ref(&self) -> BfpComplexS16<&[i16]> {
        BfpComplexS16 {
            real: self.real.as_ref(),
            imag: self.imag.as_ref(),
            exp: self.exp,
            hr: self.hr,
        }
    }

    pub fn into_parts(self) -> (D, D) {
        (self.real, self.imag)
    }
}

impl<D: DataMut<i16>> BfpComplexS16<D> {
    /// Mutable real and imaginary buffers.
    #[inline]
    pub fn parts_mut(&mut self) -> (&mut [i16], &mut [i16]) {
        (self.real.as_mut(), self.imag.as_mut())
    }

    #[inline]
    pub fn set_exp(&mut self, exp: Exponent) {
        self.exp = exp
    }

    #[inline]
    pub fn set_hr(&mut self, hr: Headroom) {
        self.hr = hr
    }

    pub fn update_hr(&mut self) -> Headroom {
        self.hr = vect_complex_s16_headroom(self.real.as_ref(), self.imag.as_ref());
        self.hr
    }

    /// Sets every element to `value` with exponent `exp`.
    pub fn set(&mut self, value: ComplexS16, exp: Exponent) {
        self.real.as_mut().fill(value.re);
        self.imag.as_mut().fill(value.im);
        self.exp = exp;
        self.hr = headroom(value.re).min(headroom(value.im));
    }
}

impl BfpComplexS16<Vec<i16>> {
    pub fn alloc(len: usize, exp: Exponent) -> Self {
        Self::from_vecs(alloc_aligned::<i16>(len), alloc_aligned::<i16>(len), exp)
    }

    pub(crate) fn from_vecs(real: Vec<i16>, imag: Vec<i16>, exp: Exponent) -> Self {
        Self::init(real, imag, exp, true)
    }
}

impl<D: DataRef<i16>> fmt::Display for BfpComplexS16<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BfpComplexS16(len={}, exp={}, hr={}):", self.len(), self.exp, self.hr)?;
        write!(f, "[")?;
        for k in 0..self.len() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", self.get(k))?;
        }
        write!(f, "]")
    }
}

impl<D: DataRef<i16>> fmt::Debug for BfpComplexS16<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use crate::layouts::{BfpComplexS16, BfpComplexS16Owned, ComplexS16};

    #[test]
    fn headroom_spans_both_parts() {
        let re: [i16; 3] = [1, 2, 3];
        let im: [i16; 3] = [0, -0x2000, 4];
        let a = BfpComplexS16::init(&re[..], &im[..], 0, true);
        assert_eq!(a.hr(), 2);
    }

    #[test]
    #[should_panic]
    fn init_rejects_length_mismatch() {
        let re: [i16; 3] = [0; 3];
        let im: [i16; 2] = [0; 2];
        let _ = BfpComplexS16::init(&re[..], &im[..], 0, false);
    }

    #[test]
    fn set_fills_both_parts() {
        let mut a: BfpComplexS16Owned = BfpComplexS16Owned::alloc(5, 0);
        a.set(ComplexS16::new(-3, 0x40), -2);
        assert!(a.real().iter().all(|&x| x == -3));
        assert!(a.imag().iter().all(|&x| x == 0x40));
        assert_eq!(a.hr(), 8);
    }
}
