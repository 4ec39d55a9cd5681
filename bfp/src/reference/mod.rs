mod complex;
mod headroom;
mod scalar;
mod shift;
mod split_acc;
mod vect;

pub use complex::*;
pub use headroom::*;
pub use scalar::*;
pub use shift::*;
pub use split_acc::*;
pub use vect::*;
