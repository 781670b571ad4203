//! Deterministic random number generation for action sampling.
//!
//! ```
//! use sorry_agent::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! let weights = [0.2, 0.0, 0.8];
//! assert_eq!(a.choose_weighted(&weights), b.choose_weighted(&weights));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 RNG. Same seed, same sequence.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Choose an index with probability proportional to its weight.
    ///
    /// Weights do not need to sum to 1.0. Non-finite and non-positive
    /// weights are never chosen. Returns `None` if no weight is positive.
    pub fn choose_weighted(&mut self, weights: &[f32]) -> Option<usize> {
        let usable = |w: f32| w.is_finite() && w > 0.0;

        let total: f32 = weights.iter().copied().filter(|&w| usable(w)).sum();
        if total <= 0.0 {
            return None;
        }

        let mut threshold = self.inner.gen::<f32>() * total;
        let mut last = None;

        for (i, &weight) in weights.iter().enumerate() {
            if !usable(weight) {
                continue;
            }
            last = Some(i);
            threshold -= weight;
            if threshold <= 0.0 {
                return Some(i);
            }
        }

        // Floating point edge case - return last usable weight
        last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);
        let weights = [1.0, 2.0, 3.0, 4.0];

        for _ in 0..100 {
            assert_eq!(rng1.choose_weighted(&weights), rng2.choose_weighted(&weights));
        }
    }

    #[test]
    fn test_choose_weighted_skips_unusable() {
        let mut rng = GameRng::new(1);
        let weights = [0.0, f32::NAN, 5.0, -1.0];

        for _ in 0..50 {
            assert_eq!(rng.choose_weighted(&weights), Some(2));
        }
    }

    #[test]
    fn test_choose_weighted_none() {
        let mut rng = GameRng::new(1);
        assert_eq!(rng.choose_weighted(&[]), None);
        assert_eq!(rng.choose_weighted(&[0.0, 0.0]), None);
        assert_eq!(rng.choose_weighted(&[f32::NAN]), None);
    }

    #[test]
    fn test_choose_weighted_distribution() {
        let mut rng = GameRng::new(9);
        let weights = [1.0, 3.0];
        let mut counts = [0usize; 2];
        for _ in 0..4000 {
            counts[rng.choose_weighted(&weights).unwrap()] += 1;
        }
        // Expect roughly 1000 / 3000.
        assert!(counts[0] > 800 && counts[0] < 1200, "counts = {counts:?}");
    }
}
