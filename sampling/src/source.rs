use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use rand_core::RngCore;

const MAXF64: f64 = 9007199254740992.0;

/// Seeded pseudorandom stream.
pub struct Source {
    source: ChaCha8Rng,
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    /// Derives an independent stream and returns it together with its seed.
    pub fn branch(&mut self) -> ([u8; 32], Self) {
        let seed: [u8; 32] = self.new_seed();
        (seed, Source::new(seed))
    }

    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.fill_bytes(&mut seed);
        seed
    }

    /// Rejection-samples `x & mask` until it falls below `max`.
    #[inline(always)]
    pub fn next_u64n(&mut self, max: u64, mask: u64) -> u64 {
        let mut x: u64 = self.next_u64() & mask;
        while x >= max {
            x = self.next_u64() & mask;
        }
        x
    }

    #[inline(always)]
    pub fn next_f64(&mut self, min: f64, max: f64) -> f64 {
        min + ((self.next_u64() << 11 >> 11) as f64) / MAXF64 * (max - min)
    }

    /// Uniform integer in `[min, max]`.
    #[inline(always)]
    pub fn next_range_i32(&mut self, min: i32, max: i32) -> i32 {
        assert!(min <= max, "next_range_i32: min={min} > max={max}");
        let span: u64 = (max as i64 - min as i64) as u64 + 1;
        let mask: u64 = span.next_power_of_two() - 1;
        (min as i64 + self.next_u64n(span, mask) as i64) as i32
    }

    #[inline(always)]
    pub fn next_bool(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }

    #[inline(always)]
    pub fn next_i16(&mut self) -> i16 {
        self.next_u32() as i16
    }

    #[inline(always)]
    pub fn next_i32(&mut self) -> i32 {
        self.next_u32() as i32
    }

    #[inline(always)]
    pub fn next_i64(&mut self) -> i64 {
        self.next_u64() as i64
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::Source;

    #[test]
    fn same_seed_same_stream() {
        let mut a: Source = Source::new([7u8; 32]);
        let mut b: Source = Source::new([7u8; 32]);
        for _ in 0..64 {
            assert_eq!(a.next_i32(), b.next_i32());
        }
    }

    #[test]
    fn next_range_i32_stays_in_bounds() {
        let mut source: Source = Source::new([0u8; 32]);
        for _ in 0..1000 {
            let x: i32 = source.next_range_i32(-14, 14);
            assert!((-14..=14).contains(&x), "{x}");
        }
        assert_eq!(source.next_range_i32(3, 3), 3);
    }
}
