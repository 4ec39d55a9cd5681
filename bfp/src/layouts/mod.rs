mod bfp_complex_s16;
mod bfp_complex_s32;
mod bfp_vec;
mod float;
mod mantissa;
mod module;
mod split_acc;

pub use bfp_complex_s16::*;
pub use bfp_complex_s32::*;
pub use bfp_vec::*;
pub use float::*;
pub use mantissa::*;
pub use module::*;
pub use split_acc::*;

/// Power of two applied to every mantissa of a vector.
pub type Exponent = i32;

/// Number of redundant leading sign bits.
pub type Headroom = u32;

/// Signed shift: positive values shift right (with rounding), negative values
/// shift left (with saturation).
pub type RightShift = i32;

/// Signed shift: positive values shift left (with saturation), negative values
/// shift right (with rounding).
pub type LeftShift = i32;

/// Read access to a contiguous buffer of `T`.
pub trait DataRef<T>: AsRef<[T]> {}
impl<T, D: AsRef<[T]> + ?Sized> DataRef<T> for D {}

/// Read/write access to a contiguous buffer of `T`.
pub trait DataMut<T>: DataRef<T> + AsMut<[T]> {}
impl<T, D: AsRef<[T]> + AsMut<[T]> + ?Sized> DataMut<T> for D {}

/// Element types that may be stored in buffers handed out by an
/// [`Allocator`].
///
/// # Safety
/// The all-zero bit pattern must be a valid value of the type.
pub unsafe trait Word: Copy + Default + 'static {}

unsafe impl Word for i8 {}
unsafe impl Word for i16 {}
unsafe impl Word for u16 {}
unsafe impl Word for i32 {}
unsafe impl Word for i64 {}
