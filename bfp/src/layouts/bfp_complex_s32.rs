use std::fmt;

use crate::{
    alloc_aligned, cast_mut,
    layouts::{ComplexS32, DataMut, DataRef, Exponent, Headroom},
    reference::{complex_s32_headroom, vect_complex_s32_headroom},
};

/// Complex 32-bit BFP vector with interleaved `(re, im)` storage.
#[derive(PartialEq, Eq, Clone, Hash)]
pub struct BfpComplexS32<D> {
    data: D,
    exp: Exponent,
    hr: Headroom,
}

pub type BfpComplexS32Owned = BfpComplexS32<Vec<ComplexS32>>;
pub type BfpComplexS32Ref<'a> = BfpComplexS32<&'a [ComplexS32]>;
pub type BfpComplexS32Mut<'a> = BfpComplexS32<&'a mut [ComplexS32]>;

impl<D: DataRef<ComplexS32>> BfpComplexS32<D> {
    /// Binds `data` with exponent `exp`; the headroom is computed when
    /// `calc_hr` is set and left at 0 otherwise.
    pub fn init(data: D, exp: Exponent, calc_hr: bool) -> Self {
        let hr: Headroom = if calc_hr { vect_complex_s32_headroom(data.as_ref()) } else { 0 };
        Self { data, exp, hr }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.as_ref().len()
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
    pub fn data(&self) -> &[ComplexS32] {
        self.data.as_ref()
    }

    pub fn to_ref(&self) -> BfpComplexS32<&[ComplexS32]> {
        BfpComplexS32 {
            data: self.data.as_ref(),
            exp: self.exp,
            hr: self.hr,
        }
    }

    pub fn into_data(self) -> D {
        self.data
    }
}

impl<'a> BfpComplexS32<&'a mut [ComplexS32]> {
    /// Binds an interleaved `[re0, im0, re1, im1, ...]` buffer.
    ///
    /// # Panics
    /// If `raw` has odd length or is not aligned to a double word.
    pub fn from_interleaved(raw: &'a mut [i32], exp: Exponent, calc_hr: bool) -> Self {
        assert!(
            raw.len().is_multiple_of(2),
            "from_interleaved: odd buffer length {}",
            raw.len()
        );
        Self::init(cast_mut::<i32, ComplexS32>(raw), exp, calc_hr)
    }
}

impl<D: DataMut<ComplexS32>> BfpComplexS32<D> {
    #[inline]
    pub fn data_mut(&mut self) -> &mut [ComplexS32] {
        self.data.as_mut()
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
        self.hr = vect_complex_s32_headroom(self.data.as_ref());
        self.hr
    }

    /// Sets every element to `value` with exponent `exp`.
    pub fn set(&mut self, value: ComplexS32, exp: Exponent) {
        self.data.as_mut().fill(value);
        self.exp = exp;
        self.hr = complex_s32_headroom(value);
    }
}

impl BfpComplexS32<Vec<ComplexS32>> {
    pub fn alloc(len: usize, exp: Exponent) -> Self {
        Self::from_vec(alloc_aligned::<ComplexS32>(len), exp)
    }

    pub(crate) fn from_vec(data: Vec<ComplexS32>, exp: Exponent) -> Self {
        let hr: Headroom = vect_complex_s32_headroom(&data);
        Self { data, exp, hr }
    }
}

impl<D: DataRef<ComplexS32>> fmt::Display for BfpComplexS32<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BfpComplexS32(len={}, exp={}, hr={}):", self.len(), self.exp, self.hr)?;
        write!(f, "[")?;
        for (i, x) in self.data().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}

impl<D: DataRef<ComplexS32>> fmt::Debug for BfpComplexS32<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        alloc_aligned,
        layouts::{BfpComplexS32, BfpComplexS32Owned, ComplexS32},
    };

    #[test]
    fn from_interleaved_reads_pairs() {
        let mut raw: Vec<i32> = alloc_aligned(6);
        raw.copy_from_slice(&[1, -2, 0x100, 0, -0x10000, 5]);
        let a = BfpComplexS32::from_interleaved(&mut raw, -7, true);
        assert_eq!(a.len(), 3);
        assert_eq!(a.data()[2], ComplexS32::new(-0x10000, 5));
        assert_eq!(a.hr(), 15);
    }

    #[test]
    #[should_panic]
    fn from_interleaved_rejects_misaligned() {
        let mut raw: Vec<i32> = alloc_aligned(8);
        let _ = BfpComplexS32::from_interleaved(&mut raw[1..7], 0, false);
    }

    #[test]
    fn set_updates_headroom() {
        let mut a: BfpComplexS32Owned = BfpComplexS32Owned::alloc(4, 0);
        assert_eq!(a.hr(), 31);
        a.set(ComplexS32::new(1, 0x4000_0000), 3);
        assert_eq!(a.hr(), 0);
    }
}
