//! # bfp
//!
//! A block-floating-point (BFP) numerical core.
//!
//! A BFP vector is a buffer of fixed-width signed integer mantissas sharing a
//! single exponent: element `k` represents `mantissa[k] * 2^exp`. Alongside the
//! exponent every vector carries its *headroom*, the number of redundant sign
//! bits shared by all of its mantissas. Arithmetic routines use the headroom of
//! their operands to pick an output exponent such that results never silently
//! overflow while keeping as much precision as the container allows.
//!
//! ## Core Concepts
//!
//! **Headroom:** for an `N`-bit mantissa `x`, `headroom(x) = cls(x) - 1` where
//! `cls` counts the leading sign bits. A zero mantissa has headroom `N - 1`.
//! The stored headroom of a vector may understate its true headroom but never
//! overstate it.
//!
//! **Shift-saturate:** every kernel is built from one primitive: a right shift
//! with round-half-up, or a left shift saturating to the symmetric range
//! `[-(2^(N-1) - 1), 2^(N-1) - 1]`. See [`reference::shift_sat`].
//!
//! **Planning:** the [`prepare`] functions are pure. From operand exponents and
//! headrooms they return the output exponent and the shift to apply to each
//! operand, one canonical planner per algebraic family (additive,
//! multiplicative, multiply-accumulate, reduction, nonlinear).
//!
//! **Layout types** ([`layouts`]):
//! - [`layouts::BfpS16`], [`layouts::BfpS32`] -- real 16/32-bit BFP vectors.
//! - [`layouts::BfpComplexS16`] -- complex 16-bit BFP vector, split real/imag buffers.
//! - [`layouts::BfpComplexS32`] -- complex 32-bit BFP vector, interleaved `(re, im)`.
//! - [`layouts::SplitAccS32`] -- 32-bit accumulators stored as 16-bit high/low halves.
//! - [`layouts::Module`] -- configuration (sqrt depths, length checks) and allocator.
//!
//! All vector types are generic over a data container `D` (owned `Vec<T>`,
//! borrowed `&[T]` / `&mut [T]`), so caller-owned storage can be bound without
//! copying.
//!
//! ## Architecture
//!
//! 1. **[`api`]** -- Safe, user-facing BFP operation traits (e.g.
//!    [`api::BfpAdd`], [`api::BfpComplexS16Mul`]).
//! 2. **[`delegates`]** -- Implementations of every [`api`] trait on
//!    [`layouts::Module`]: plan, apply the reference kernel, update headroom.
//! 3. **[`prepare`]** -- Exponent planners.
//! 4. **[`mod@reference`]** -- Slice kernels: headroom scan, shift-saturate and
//!    the element-wise, reduction and conversion kernels built on it.
//!
//! ## Testing and Benchmarking
//!
//! The [`test_suite`] module provides generic, module-driven test functions,
//! instantiated through the [`bfp_test_suite!`] macro.
//!
//! ## Non-Goals
//!
//! - No arbitrary-precision or floating-point emulation beyond the defined
//!   fixed-point formats.
//! - No transforms (FFT, filters) built on top of the core.

#![deny(rustdoc::broken_intra_doc_links)]

/// Safe, user-facing trait definitions for BFP operations.
pub mod api;

/// Implementations of the [`api`] traits on [`layouts::Module`].
///
/// Each operation plans its output exponent with [`prepare`], runs the
/// matching [`mod@reference`] kernel and records the new exponent and headroom.
pub mod delegates;

/// BFP vectors, split accumulators, scalar floats and the module configuration.
pub mod layouts;

/// Pure exponent planners.
pub mod prepare;

/// Slice-level reference kernels.
pub mod reference;

/// Generic test functions instantiated by [`bfp_test_suite!`].
pub mod test_suite;

/// Default memory alignment in bytes for owned mantissa buffers.
pub const DEFAULTALIGN: usize = 64;

fn is_aligned_custom<T>(ptr: *const T, align: usize) -> bool {
    (ptr as usize).is_multiple_of(align)
}

/// Returns `true` if `ptr` is aligned to [`DEFAULTALIGN`] bytes.
pub fn is_aligned<T>(ptr: *const T) -> bool {
    is_aligned_custom(ptr, DEFAULTALIGN)
}

/// Reinterprets a `&[T]` as a `&[V]`.
///
/// # Panics
/// - If `V` is zero-sized.
/// - If the pointer is not aligned for `V`.
/// - If the total byte length is not a multiple of `size_of::<V>()`.
pub fn cast<T, V>(data: &[T]) -> &[V] {
    assert!(size_of::<V>() > 0, "cast: target type V must not be zero-sized");
    let byte_len: usize = data.len() * size_of::<T>();
    assert!(
        byte_len % size_of::<V>() == 0,
        "cast: byte length {} is not a multiple of target size {}",
        byte_len,
        size_of::<V>()
    );
    let ptr: *const V = data.as_ptr() as *const V;
    assert!(
        ptr.align_offset(align_of::<V>()) == 0,
        "cast: pointer {:p} is not aligned to {} bytes",
        ptr,
        align_of::<V>()
    );
    let len: usize = byte_len / size_of::<V>();
    unsafe { std::slice::from_raw_parts(ptr, len) }
}

/// Reinterprets a `&mut [T]` as a `&mut [V]`.
///
/// # Panics
/// - If `V` is zero-sized.
/// - If the pointer is not aligned for `V`.
/// - If the total byte length is not a multiple of `size_of::<V>()`.
pub fn cast_mut<T, V>(data: &mut [T]) -> &mut [V] {
    assert!(size_of::<V>() > 0, "cast_mut: target type V must not be zero-sized");
    let byte_len: usize = data.len() * size_of::<T>();
    assert!(
        byte_len % size_of::<V>() == 0,
        "cast_mut: byte length {} is not a multiple of target size {}",
        byte_len,
        size_of::<V>()
    );
    let ptr: *mut V = data.as_mut_ptr() as *mut V;
    assert!(
        ptr.align_offset(align_of::<V>()) == 0,
        "cast_mut: pointer {:p} is not aligned to {} bytes",
        ptr,
        align_of::<V>()
    );
    let len: usize = byte_len / size_of::<V>();
    unsafe { std::slice::from_raw_parts_mut(ptr, len) }
}

/// Allocates a zero-initialized `Vec<T>` of `len` elements whose buffer starts
/// on a [`DEFAULTALIGN`] boundary.
///
/// The underlying allocation is padded to a multiple of [`DEFAULTALIGN`] bytes;
/// the returned vector has length `len` and keeps the padding as capacity.
///
/// `T` must be a plain integer-like type for which the all-zero bit pattern
/// is a valid value (see [`layouts::Word`]).
pub fn alloc_aligned<T: layouts::Word>(len: usize) -> Vec<T> {
    assert!(size_of::<T>() > 0, "alloc_aligned: zero-sized types are not supported");
    let byte_len: usize = (len * size_of::<T>()).next_multiple_of(DEFAULTALIGN).max(DEFAULTALIGN);
    let cap: usize = byte_len / size_of::<T>();
    unsafe {
        let layout: std::alloc::Layout = match std::alloc::Layout::from_size_align(byte_len, DEFAULTALIGN) {
            Ok(layout) => layout,
            Err(err) => panic!("alloc_aligned: invalid layout for {len} elements: {err}"),
        };
        let ptr: *mut u8 = std::alloc::alloc_zeroed(layout);
        if ptr.is_null() {
            std::alloc::handle_alloc_error(layout);
        }
        assert!(
            is_aligned_custom(ptr, DEFAULTALIGN),
            "Memory allocation at {ptr:p} is not aligned to {DEFAULTALIGN} bytes"
        );
        Vec::from_raw_parts(ptr as *mut T, len, cap)
    }
}

#[cfg(test)]
mod tests {
    use crate::{alloc_aligned, cast, cast_mut, is_aligned, layouts::ComplexS32};

    #[test]
    fn alloc_aligned_is_zeroed_and_aligned() {
        for len in [1usize, 3, 16, 17, 100] {
            let v: Vec<i32> = alloc_aligned(len);
            assert_eq!(v.len(), len);
            assert!(is_aligned(v.as_ptr()));
            assert!(v.iter().all(|&x| x == 0));
        }
    }

    #[test]
    fn cast_interleaved_to_complex() {
        let mut raw: Vec<i32> = alloc_aligned(8);
        raw.iter_mut().enumerate().for_each(|(i, x)| *x = i as i32);
        let c: &mut [ComplexS32] = cast_mut(&mut raw);
        assert_eq!(c.len(), 4);
        assert_eq!(c[1], ComplexS32 { re: 2, im: 3 });
        c[3].im = -7;
        let back: &[i32] = cast(&raw);
        assert_eq!(back[7], -7);
    }
}
