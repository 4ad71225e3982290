//! Strategies for picking one reply out of several candidates.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks an index into a list of `len` candidate replies.
///
/// Callers never pass `len == 0`.
pub trait ReplySelector: Send + std::fmt::Debug {
    /// Return an index in `0..len`.
    fn select(&mut self, len: usize) -> usize;

    /// Get the name of this selector.
    fn name(&self) -> &'static str;
}

/// Uniform choice from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl RandomSelector {
    pub fn new() -> Self {
        RandomSelector
    }
}

impl ReplySelector for RandomSelector {
    fn select(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Uniform choice from a seeded generator, reproducible across runs.
#[derive(Debug, Clone)]
pub struct SeededSelector {
    rng: StdRng,
}

impl SeededSelector {
    pub fn new(seed: u64) -> Self {
        SeededSelector {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ReplySelector for SeededSelector {
    fn select(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn name(&self) -> &'static str {
        "seeded"
    }
}

/// Always the same index, wrapped modulo the list length.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSelector {
    index: usize,
}

impl FixedSelector {
    pub fn new(index: usize) -> Self {
        FixedSelector { index }
    }
}

impl ReplySelector for FixedSelector {
    fn select(&mut self, len: usize) -> usize {
        self.index % len
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}
