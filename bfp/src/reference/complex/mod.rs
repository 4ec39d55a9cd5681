mod s16;
mod s32;

pub use s16::*;
pub use s32::*;

/// Flavour of a complex multiply-accumulate: `acc +/- b * c` or
/// `acc +/- b * conj(c)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComplexMacc {
    Macc,
    Nmacc,
    ConjMacc,
    ConjNmacc,
}

impl ComplexMacc {
    #[inline(always)]
    pub fn conj(self) -> bool {
        matches!(self, ComplexMacc::ConjMacc | ComplexMacc::ConjNmacc)
    }

    #[inline(always)]
    pub fn negate(self) -> bool {
        matches!(self, ComplexMacc::Nmacc | ComplexMacc::ConjNmacc)
    }
}
