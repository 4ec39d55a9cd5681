//! Implementations of the [`crate::api`] traits on [`crate::layouts::Module`].
//!
//! Every operation follows the same three steps: check the operand lengths,
//! plan the output exponent and operand shifts with [`crate::prepare`], then
//! run the [`crate::reference`] kernel and record the resulting exponent and
//! headroom on the output vector.

mod bfp_complex_s16;
mod bfp_complex_s32;
mod bfp_vec;
mod module;
mod split_acc;
