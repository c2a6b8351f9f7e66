//! Uniform random integers for obstacle generation

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

pub trait RandomSource {
    /// Uniform integer in `[lo, hi)`; returns `lo` when the range is empty
    fn range(&mut self, lo: i32, hi: i32) -> i32;
}

impl RandomSource for Pcg32 {
    fn range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.random_range(lo..hi)
    }
}

/// Deterministic generator for a run seed
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Always picks the low end of the range
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct LowestRandom;

#[cfg(test)]
impl RandomSource for LowestRandom {
    fn range(&mut self, lo: i32, _hi: i32) -> i32 {
        lo
    }
}

/// Always picks the top of the range
#[cfg(test)]
pub(crate) struct HighestRandom;

#[cfg(test)]
impl RandomSource for HighestRandom {
    fn range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo { lo } else { hi - 1 }
    }
}
