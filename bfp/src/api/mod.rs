//! Safe, user-facing trait definitions for BFP operations.
//!
//! Traits are organized by vector family:
//! - **module** -- allocation and release of owned vectors through the module's allocator.
//! - **bfp\_vec** -- real 16/32-bit vectors (arithmetic, reductions, nonlinear ops, conversions).
//! - **bfp\_complex\_s32** -- interleaved complex 32-bit vectors.
//! - **bfp\_complex\_s16** -- split complex 16-bit vectors.
//! - **split\_acc** -- 32-bit split accumulators fed by 16-bit vectors.
//!
//! Every trait is implemented on [`crate::layouts::Module`] in
//! [`crate::delegates`]. Real-vector traits are generic over the mantissa
//! type; an operation available for a single width is only implemented for
//! that width.

mod bfp_complex_s16;
mod bfp_complex_s32;
mod bfp_vec;
mod module;
mod split_acc;

pub use bfp_complex_s16::*;
pub use bfp_complex_s32::*;
pub use bfp_vec::*;
pub use module::*;
pub use split_acc::*;
