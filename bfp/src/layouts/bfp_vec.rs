use std::{fmt, marker::PhantomData};

use crate::{
    alloc_aligned,
    layouts::{DataMut, DataRef, Exponent, Headroom, Mantissa},
    reference::{headroom, vect_headroom},
};

/// Real BFP vector: `data[k] * 2^exp` with `hr` bits of shared headroom.
///
/// The container `D` is an owned `Vec<T>` or a borrowed slice; binding a
/// borrowed slice never transfers ownership.
#[derive(PartialEq, Eq, Clone, Hash)]
pub struct BfpVec<T: Mantissa, D> {
    data: D,
    exp: Exponent,
    hr: Headroom,
    _phantom: PhantomData<T>,
}

pub type BfpS16<D> = BfpVec<i16, D>;
pub type BfpS32<D> = BfpVec<i32, D>;

pub type BfpS16Owned = BfpS16<Vec<i16>>;
pub type BfpS16Ref<'a> = BfpS16<&'a [i16]>;
pub type BfpS16Mut<'a> = BfpS16<&'a mut [i16]>;

pub type BfpS32Owned = BfpS32<Vec<i32>>;
pub type BfpS32Ref<'a> = BfpS32<&'a [i32]>;
pub type BfpS32Mut<'a> = BfpS32<&'a mut [i32]>;

impl<T: Mantissa, D: DataRef<T>> BfpVec<T, D> {
    /// Binds `data` as a BFP vector with exponent `exp`.
    ///
    /// When `calc_hr` is `false` the headroom is set to 0, which is always
    /// valid.
    pub fn init(data: D, exp: Exponent, calc_hr: bool) -> Self {
        let hr: Headroom = if calc_hr { vect_headroom(data.as_ref()) } else { 0 };
        Self {
            data,
            exp,
            hr,
            _phantom: PhantomData,
        }
    }

    /// Binds `data` with a caller-provided headroom.
    ///
    /// `hr` must not exceed the true headroom of `data`.
    pub fn from_parts(data: D, exp: Exponent, hr: Headroom) -> Self {
        #[cfg(debug_assertions)]
        {
            assert!(
                hr <= vect_headroom(data.as_ref()),
                "from_parts: hr={hr} overstates the headroom of the data"
            );
        }
        Self {
            data,
            exp,
            hr,
            _phantom: PhantomData,
        }
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
    pub fn data(&self) -> &[T] {
        self.data.as_ref()
    }

    /// Returns the element `k` as a floating-point value.
    pub fn to_f64(&self, k: usize) -> f64 {
        self.data()[k].to_i64() as f64 * 2f64.powi(self.exp)
    }

    /// Borrowed view over the same mantissas, exponent and headroom.
    pub fn to_ref(&self) -> BfpVec<T, &[T]> {
        BfpVec {
            data: self.data.as_ref(),
            exp: self.exp,
            hr: self.hr,
            _phantom: PhantomData,
        }
    }

    pub fn into_data(self) -> D {
        self.data
    }
}

impl<T: Mantissa, D: DataMut<T>> BfpVec<T, D> {
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }

    /// Sets the exponent without touching the mantissas.
    #[inline]
    pub fn set_exp(&mut self, exp: Exponent) {
        self.exp = exp
    }

    /// Sets the headroom. `hr` must not exceed the true headroom of the data.
    #[inline]
    pub fn set_hr(&mut self, hr: Headroom) {
        self.hr = hr
    }

    /// Rescans the mantissas and stores their headroom.
    pub fn update_hr(&mut self) -> Headroom {
        self.hr = vect_headroom(self.data.as_ref());
        self.hr
    }

    /// Sets every element to `value` with exponent `exp`.
    pub fn set(&mut self, value: T, exp: Exponent) {
        self.data.as_mut().fill(value);
        self.exp = exp;
        self.hr = headroom(value);
    }
}

impl<T: Mantissa> BfpVec<T, Vec<T>> {
    /// Allocates a zeroed vector of `len` elements aligned to
    /// [`crate::DEFAULTALIGN`]. A zero vector has full headroom.
    pub fn alloc(len: usize, exp: Exponent) -> Self {
        Self::from_vec(alloc_aligned::<T>(len), exp)
    }

    pub(crate) fn from_vec(data: Vec<T>, exp: Exponent) -> Self {
        let hr: Headroom = vect_headroom(&data);
        Self {
            data,
            exp,
            hr,
            _phantom: PhantomData,
        }
    }
}

impl<T: Mantissa, D: DataRef<T>> fmt::Display for BfpVec<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BfpVec(len={}, exp={}, hr={}):", self.len(), self.exp, self.hr)?;
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

impl<T: Mantissa, D: DataRef<T>> fmt::Debug for BfpVec<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use crate::layouts::{BfpS16, BfpS16Owned, BfpS32Owned};

    #[test]
    fn init_computes_headroom_on_request() {
        let mut data: [i16; 4] = [3, -4, 0, 7];
        let a: BfpS16<&mut [i16]> = BfpS16::init(&mut data[..], -3, true);
        assert_eq!(a.hr(), 12);
        assert_eq!(a.exp(), -3);
        let b: BfpS16<&[i16]> = BfpS16::init(&data[..], 0, false);
        assert_eq!(b.hr(), 0);
    }

    #[test]
    fn alloc_is_zero_with_full_headroom() {
        let a: BfpS32Owned = BfpS32Owned::alloc(33, 4);
        assert_eq!(a.len(), 33);
        assert!(a.data().iter().all(|&x| x == 0));
        assert_eq!(a.hr(), 31);
    }

    #[test]
    fn set_updates_headroom() {
        let mut a: BfpS16Owned = BfpS16Owned::alloc(8, 0);
        a.set(-0x100, 5);
        assert!(a.data().iter().all(|&x| x == -0x100));
        assert_eq!(a.exp(), 5);
        assert_eq!(a.hr(), 7);
    }
}
