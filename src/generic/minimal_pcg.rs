//! A simple pseudorandom number generator.
//!
//! Specifically, the minimal C PCG32 generator from <https://www.pcg-random.org/>, implemented to satisfy the [RngCore] and [SeedableRng] traits.
//!
//! The [VSIDS](crate::branching::vsids) strategy uses the generator to choose a polarity, seeded by [Config::seed](crate::config::Config::seed), so a solve with a fixed seed is reproducible.
//! The same generator is used to build random formulas for tests.

use rand_core::{impls, RngCore, SeedableRng};

/// State and increment
#[derive(Clone, Debug)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

const MULTIPLIER: u64 = 6364136223846793005;

/// The stream used when seeding through [SeedableRng].
const DEFAULT_STREAM: u64 = 0xda3e39cb94b95bdb;

impl MinimalPCG32 {
    /// A generator on the given stream, at the given initial state.
    pub fn new(seed: u64, stream: u64) -> Self {
        let mut pcg = MinimalPCG32 {
            state: 0,
            inc: (stream << 1) | 1,
        };
        pcg.step();
        pcg.state = pcg.state.wrapping_add(seed);
        pcg.step();
        pcg
    }

    fn step(&mut self) {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(self.inc);
    }
}

impl Default for MinimalPCG32 {
    fn default() -> Self {
        MinimalPCG32::new(0, DEFAULT_STREAM)
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.step();

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        MinimalPCG32::new(u64::from_le_bytes(seed), DEFAULT_STREAM)
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn reference_stream() {
        // The demonstration values of the C implementation.
        let mut pcg = MinimalPCG32::new(42, 54);
        assert_eq!(pcg.next_u32(), 0xa15c02b7);
        assert_eq!(pcg.next_u32(), 0x7b47f409);
        assert_eq!(pcg.next_u32(), 0xba1d3330);
    }

    #[test]
    fn two_seed() {
        let mut two_seed = MinimalPCG32::from_seed(2u64.to_le_bytes());
        assert_eq!(two_seed.next_u32(), 3149747405);
        assert_eq!(two_seed.next_u32(), 3434961531);
        assert_eq!(two_seed.next_u32(), 337222436);
        assert_eq!(two_seed.next_u32(), 2786738406);
        assert_eq!(two_seed.next_u32(), 1342667634);
    }

    #[test]
    fn seventy_three_seed() {
        let mut seventy_three_seed = MinimalPCG32::from_seed(73u64.to_le_bytes());

        assert_eq!(seventy_three_seed.next_u32(), 1669874684);
        assert_eq!(seventy_three_seed.next_u32(), 1207700176);
        assert_eq!(seventy_three_seed.next_u32(), 4028826767);
        assert_eq!(seventy_three_seed.next_u32(), 2607731501);
        assert_eq!(seventy_three_seed.next_u32(), 2851217701);
    }
}
