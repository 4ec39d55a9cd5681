use crate::{alloc_aligned, layouts::Word};

/// Largest sqrt depth (result bits computed) for 16-bit vectors.
pub const SQRT_MAX_DEPTH_S16: u32 = 15;

/// Largest sqrt depth (result bits computed) for 32-bit vectors.
pub const SQRT_MAX_DEPTH_S32: u32 = 31;

/// Source of owned mantissa buffers.
///
/// Buffers returned by [`Allocator::alloc`] are zero-initialized and have
/// exactly `len` elements. They are handed back through
/// [`Allocator::release`] when the owning BFP vector is released.
pub trait Allocator {
    fn alloc<T: Word>(&self, len: usize) -> Vec<T>;

    fn release<T: Word>(&self, data: Vec<T>) {
        drop(data)
    }
}

/// Default allocator: zeroed buffers aligned to [`crate::DEFAULTALIGN`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlignedAllocator;

impl Allocator for AlignedAllocator {
    fn alloc<T: Word>(&self, len: usize) -> Vec<T> {
        alloc_aligned::<T>(len)
    }
}

/// Tunables consumed by the BFP operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BfpConfig {
    sqrt_depth_s16: u32,
    sqrt_depth_s32: u32,
    check_lengths: bool,
}

impl Default for BfpConfig {
    fn default() -> Self {
        Self {
            sqrt_depth_s16: SQRT_MAX_DEPTH_S16,
            sqrt_depth_s32: SQRT_MAX_DEPTH_S32,
            check_lengths: cfg!(debug_assertions),
        }
    }
}

impl BfpConfig {
    /// Sets the number of result bits computed by the 16-bit sqrt.
    pub fn with_sqrt_depth_s16(mut self, depth: u32) -> Self {
        assert!(
            (1..=SQRT_MAX_DEPTH_S16).contains(&depth),
            "sqrt_depth_s16={depth} must be in [1, {SQRT_MAX_DEPTH_S16}]"
        );
        self.sqrt_depth_s16 = depth;
        self
    }

    /// Sets the number of result bits computed by the 32-bit sqrt.
    pub fn with_sqrt_depth_s32(mut self, depth: u32) -> Self {
        assert!(
            (1..=SQRT_MAX_DEPTH_S32).contains(&depth),
            "sqrt_depth_s32={depth} must be in [1, {SQRT_MAX_DEPTH_S32}]"
        );
        self.sqrt_depth_s32 = depth;
        self
    }

    /// Enables or disables the operand length checks of the BFP operations.
    pub fn with_check_lengths(mut self, check: bool) -> Self {
        self.check_lengths = check;
        self
    }

    #[inline]
    pub fn sqrt_depth_s16(&self) -> u32 {
        self.sqrt_depth_s16
    }

    #[inline]
    pub fn sqrt_depth_s32(&self) -> u32 {
        self.sqrt_depth_s32
    }

    #[inline]
    pub fn check_lengths(&self) -> bool {
        self.check_lengths
    }
}

/// Entry point of the BFP API: every operation trait of [`crate::api`] is
/// implemented on `Module`.
#[derive(Clone, Debug, Default)]
pub struct Module<A: Allocator = AlignedAllocator> {
    config: BfpConfig,
    allocator: A,
}

impl Module<AlignedAllocator> {
    pub fn new(config: BfpConfig) -> Self {
        Self {
            config,
            allocator: AlignedAllocator,
        }
    }
}

impl<A: Allocator> Module<A> {
    pub fn with_allocator(config: BfpConfig, allocator: A) -> Self {
        Self { config, allocator }
    }

    #[inline]
    pub fn config(&self) -> &BfpConfig {
        &self.config
    }

    #[inline]
    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    /// Panics if `len` is zero.
    #[inline]
    pub(crate) fn assert_not_empty(&self, op: &str, len: usize) {
        assert!(len > 0, "{op}: operation requires a non-empty vector");
    }

    /// Panics on a length mismatch when length checks are enabled.
    #[inline]
    pub(crate) fn assert_same_len(&self, op: &str, a: usize, b: usize) {
        if self.config.check_lengths {
            assert_eq!(a, b, "{op}: length mismatch {a} != {b}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::layouts::{Allocator, BfpConfig, Module, Word};

    #[derive(Default)]
    struct CountingAllocator {
        live: Cell<i64>,
    }

    impl Allocator for CountingAllocator {
        fn alloc<T: Word>(&self, len: usize) -> Vec<T> {
            self.live.set(self.live.get() + 1);
            vec![T::default(); len]
        }

        fn release<T: Word>(&self, data: Vec<T>) {
            self.live.set(self.live.get() - 1);
            drop(data)
        }
    }

    #[test]
    fn config_defaults() {
        let config: BfpConfig = BfpConfig::default();
        assert_eq!(config.sqrt_depth_s16(), 15);
        assert_eq!(config.sqrt_depth_s32(), 31);
        assert_eq!(config.check_lengths(), cfg!(debug_assertions));
    }

    #[test]
    #[should_panic]
    fn config_rejects_zero_depth() {
        let _ = BfpConfig::default().with_sqrt_depth_s32(0);
    }

    #[test]
    fn custom_allocator_is_used() {
        let module: Module<CountingAllocator> = Module::with_allocator(BfpConfig::default(), CountingAllocator::default());
        let v: Vec<i32> = module.allocator().alloc(10);
        assert_eq!(module.allocator().live.get(), 1);
        module.allocator().release(v);
        assert_eq!(module.allocator().live.get(), 0);
    }
}
