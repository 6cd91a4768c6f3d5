//! Randomness consumed by deck shuffling.

use rand::Rng;

/// A source of uniform random indices.
///
/// Every [`rand::Rng`] is a `RandomSource`. Implement it directly to script
/// the shuffle, e.g. to keep a stacked deck in place.
pub trait RandomSource {
    /// Returns a uniformly distributed index in `0..=upper`.
    fn pick_index(&mut self, upper: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn pick_index(&mut self, upper: usize) -> usize {
        self.random_range(0..=upper)
    }
}
