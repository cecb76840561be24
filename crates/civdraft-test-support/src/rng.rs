//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use civdraft_core::rng::DeterministicRng;

/// An RNG that always returns `min` from `next_u32_range`.
///
/// Under the Fisher–Yates shuffle every step swaps with index 0, which
/// rotates the pool left by one: `[A, B, C, D, E, F]` becomes
/// `[B, C, D, E, F, A]`.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

/// An RNG that returns values from a predetermined sequence, ignoring the
/// requested range. Panics if the sequence is exhausted.
///
/// A shuffle of `n` items draws `n - 1` values, for `i = n-1` down to `1`;
/// feeding `[n-1, n-2, ..., 1]` leaves the pool in its original order.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    /// A sequence that makes a shuffle of `len` items the identity.
    #[must_use]
    pub fn identity_shuffle(len: u32) -> Self {
        Self::new((1..len).rev().collect())
    }

    /// Number of values handed out so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}
