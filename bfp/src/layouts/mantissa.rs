use std::fmt::{Debug, Display};

use crate::layouts::Word;

/// Signed fixed-width integer used as a BFP mantissa.
///
/// Saturation is symmetric: the representable range is `[-MAX, MAX]`, the
/// most negative two's complement value is never produced by a saturating
/// operation.
pub trait Mantissa: Word + Debug + Display + Eq + Ord + Send + Sync {
    /// Container width in bits.
    const BITS: u32;
    /// Largest value, `2^(BITS-1) - 1`.
    const MAX: Self;
    /// Smallest value reachable by saturation, `-MAX`.
    const MIN: Self;
    const ZERO: Self;

    fn to_i64(self) -> i64;

    /// Converts `x`, clamping it to `[MIN, MAX]`.
    fn sat_from_i64(x: i64) -> Self;

    /// Number of leading bits equal to the sign bit (at least 1).
    fn leading_sign_bits(self) -> u32;
}

macro_rules! impl_mantissa {
    ($t:ty) => {
        impl Mantissa for $t {
            const BITS: u32 = <$t>::BITS;
            const MAX: Self = <$t>::MAX;
            const MIN: Self = -<$t>::MAX;
            const ZERO: Self = 0;

            #[inline(always)]
            fn to_i64(self) -> i64 {
                self as i64
            }

            #[inline(always)]
            fn sat_from_i64(x: i64) -> Self {
                x.clamp(<Self as Mantissa>::MIN as i64, <Self as Mantissa>::MAX as i64) as $t
            }

            #[inline(always)]
            fn leading_sign_bits(self) -> u32 {
                if self < 0 { self.leading_ones() } else { self.leading_zeros() }
            }
        }
    };
}

impl_mantissa!(i8);
impl_mantissa!(i16);
impl_mantissa!(i32);

/// Complex value with the real part first, laid out like an interleaved
/// `[re, im]` pair.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T: Display> Display for Complex<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.re, self.im)
    }
}

pub type ComplexS16 = Complex<i16>;
pub type ComplexS64 = Complex<i64>;

/// Interleaved 32-bit complex mantissa, aligned to a double word so that a
/// `&[i32]` of `(re, im)` pairs can be viewed as `&[ComplexS32]`.
#[repr(C, align(8))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ComplexS32 {
    pub re: i32,
    pub im: i32,
}

impl ComplexS32 {
    pub const fn new(re: i32, im: i32) -> Self {
        Self { re, im }
    }
}

impl Display for ComplexS32 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.re, self.im)
    }
}

unsafe impl Word for ComplexS32 {}
unsafe impl Word for ComplexS16 {}
unsafe impl Word for ComplexS64 {}

#[cfg(test)]
mod tests {
    use crate::layouts::Mantissa;

    #[test]
    fn symmetric_range() {
        assert_eq!(<i16 as Mantissa>::MIN, -32767);
        assert_eq!(<i32 as Mantissa>::MIN, -i32::MAX);
        assert_eq!(i16::sat_from_i64(-40000), -32767);
        assert_eq!(i16::sat_from_i64(40000), 32767);
        assert_eq!(i8::sat_from_i64(-128), -127);
        assert_eq!(i16::sat_from_i64(-32768), -32767);
        assert_eq!(i32::sat_from_i64(i32::MIN as i64), -i32::MAX);
        assert_eq!(i32::sat_from_i64(i64::MIN), -i32::MAX);
    }

    #[test]
    fn leading_sign_bits() {
        assert_eq!(0i16.leading_sign_bits(), 16);
        assert_eq!((-1i16).leading_sign_bits(), 16);
        assert_eq!(1i16.leading_sign_bits(), 15);
        assert_eq!((-2i16).leading_sign_bits(), 15);
        assert_eq!(i32::MIN.leading_sign_bits(), 1);
        assert_eq!(i32::MAX.leading_sign_bits(), 1);
    }
}
