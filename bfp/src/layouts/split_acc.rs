use crate::{alloc_aligned, layouts::Word};

/// Number of accumulators per [`SplitAccS32`] chunk.
pub const SPLIT_ACC_LANES: usize = 16;

/// Sixteen 32-bit accumulators stored as signed high and unsigned low
/// 16-bit halves. The value of lane `k` is `(hi[k] << 16) + lo[k]`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SplitAccS32 {
    pub hi: [i16; SPLIT_ACC_LANES],
    pub lo: [u16; SPLIT_ACC_LANES],
}

unsafe impl Word for SplitAccS32 {}

impl SplitAccS32 {
    /// Number of chunks needed to hold `len` accumulators.
    #[inline]
    pub fn chunks_for(len: usize) -> usize {
        len.div_ceil(SPLIT_ACC_LANES)
    }

    /// Allocates zeroed chunks for `len` accumulators.
    pub fn alloc(len: usize) -> Vec<SplitAccS32> {
        alloc_aligned(Self::chunks_for(len))
    }

    #[inline(always)]
    pub fn get(&self, lane: usize) -> i32 {
        ((self.hi[lane] as i32) << 16) + self.lo[lane] as i32
    }

    #[inline(always)]
    pub fn put(&mut self, lane: usize, value: i32) {
        self.hi[lane] = (value >> 16) as i16;
        self.lo[lane] = value as u16;
    }
}

#[cfg(test)]
mod tests {
    use crate::layouts::SplitAccS32;

    #[test]
    fn lane_round_trip() {
        let mut acc: SplitAccS32 = SplitAccS32::default();
        for (lane, v) in [0, 1, -1, 0x7FFF_FFFF, i32::MIN, 0x1234_8000, -0x1234_8000].into_iter().enumerate() {
            acc.put(lane, v);
            assert_eq!(acc.get(lane), v);
        }
        acc.put(0, -1);
        assert_eq!((acc.hi[0], acc.lo[0]), (-1, 0xFFFF));
    }

    #[test]
    fn chunk_count() {
        assert_eq!(SplitAccS32::chunks_for(1), 1);
        assert_eq!(SplitAccS32::chunks_for(16), 1);
        assert_eq!(SplitAccS32::chunks_for(17), 2);
    }
}
