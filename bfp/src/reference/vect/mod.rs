mod arith;
mod convert;
mod mul;
mod nonlinear;
mod stats;

pub use arith::*;
pub use convert::*;
pub use mul::*;
pub use nonlinear::*;
pub use stats::*;
