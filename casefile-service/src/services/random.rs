//! Injectable randomness for prompt inputs.

use rand::Rng;

/// Picks an index into a fixed list of choices.
pub trait RandomSource: Send + Sync {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform selection from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always picks the same position (modulo `len`).
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}

/// Choose one element of `choices` using `random`.
pub fn choose<'a, T>(random: &dyn RandomSource, choices: &'a [T]) -> &'a T {
    &choices[random.pick(choices.len())]
}
