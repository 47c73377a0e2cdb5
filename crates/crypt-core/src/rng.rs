//! Seeded randomness for layout generation
//!
//! Room placement and loop augmentation are the only stages that draw.
//! Both take the same [`DungeonRng`], placement first.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream plus the seed it started from
#[derive(Debug, Clone)]
pub struct DungeonRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl DungeonRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the thread RNG; the chosen seed is still recorded
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this stream was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Check that nothing has been drawn yet
    ///
    /// Only a fresh stream is reproduced by [`DungeonRng::new`] with
    /// [`DungeonRng::seed`].
    pub fn is_fresh(&self) -> bool {
        self.rng.get_word_pos() == 0
    }

    /// Uniform draw from `lo..=hi`
    ///
    /// An empty or single-value range returns `lo` without drawing.
    pub fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// True with probability `p`, clamped to `[0, 1]`
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }
}
