//! Deterministic RNG for spawn-point and destination selection.
//!
//! # Determinism strategy
//!
//! All randomness in the population manager flows through a single `SpawnRng`
//! owned by the controller and consulted only on its tick.  Given a fixed
//! seed, two runs against identical host responses draw identical spawn
//! points and destinations.  Destination sampling is deliberately retry-free
//! (one draw per attempt), so RNG consumption per operation is constant and
//! runs stay reproducible even when individual attempts fail.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seedable RNG for the population controller.
///
/// Single-threaded by design: only the controller tick reads it, so the type
/// makes no thread-safety promises.
pub struct SpawnRng(SmallRng);

impl SpawnRng {
    /// Seed deterministically — the same seed always produces the same
    /// sequence of draws.
    pub fn new(seed: u64) -> Self {
        SpawnRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy for a fresh, non-reproducible run.
    pub fn from_entropy() -> Self {
        SpawnRng(SmallRng::from_entropy())
    }

    /// Uniform integer in `[lo, hi]` (both bounds inclusive).
    ///
    /// # Panics
    /// Panics if `lo > hi`.
    #[inline]
    pub fn rand_range(&mut self, lo: usize, hi: usize) -> usize {
        self.0.gen_range(lo..=hi)
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
