//! RNG module - injectable randomness for spawning
//!
//! The simulation only needs two primitives: a uniform float in `[0, 1)` and
//! a uniform choice among `n` options. Everything else (integer bands,
//! Fisher-Yates shuffles) is built on top of those, so a test can script the
//! exact sequence of decisions with [`ScriptedRng`].
//!
//! [`SeededRng`] is the production source: a ChaCha8 stream seeded from a
//! `u64`, so a seed fully determines a run.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of randomness consumed by the spawner.
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn uniform(&mut self) -> f32;

    /// Uniform index in `[0, n)`. `n` must be non-zero.
    fn choose(&mut self, n: usize) -> usize;

    /// Uniform integer in `[min, max]`.
    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max);
        let span = (max as i64 - min as i64) as usize + 1;
        (min as i64 + self.choose(span) as i64) as i32
    }
}

/// Shuffle a slice in place using Fisher-Yates.
pub fn shuffle<R: RandomSource + ?Sized, T>(rng: &mut R, slice: &mut [T]) {
    for i in (1..slice.len()).rev() {
        let j = rng.choose(i + 1);
        slice.swap(i, j);
    }
}

/// Seeded ChaCha8 random source.
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u64,
    inner: ChaCha8Rng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SeededRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SeededRng {
    fn uniform(&mut self) -> f32 {
        self.inner.gen::<f32>()
    }

    fn choose(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "choose from an empty set");
        self.inner.gen_range(0..n)
    }
}

/// Deterministic stub that replays queued answers.
///
/// When a queue runs dry, `uniform` answers `1.0` (never below any spawn
/// probability, so nothing spawns) and `choose` answers `0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    uniforms: VecDeque<f32>,
    choices: VecDeque<usize>,
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_uniforms(mut self, values: impl IntoIterator<Item = f32>) -> Self {
        self.uniforms.extend(values);
        self
    }

    pub fn with_choices(mut self, values: impl IntoIterator<Item = usize>) -> Self {
        self.choices.extend(values);
        self
    }

    pub fn push_uniform(&mut self, value: f32) {
        self.uniforms.push_back(value);
    }

    pub fn push_choice(&mut self, value: usize) {
        self.choices.push_back(value);
    }

    /// Answers not consumed yet, as `(uniforms, choices)`.
    pub fn pending(&self) -> (usize, usize) {
        (self.uniforms.len(), self.choices.len())
    }
}

impl RandomSource for ScriptedRng {
    fn uniform(&mut self) -> f32 {
        self.uniforms.pop_front().unwrap_or(1.0)
    }

    fn choose(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "choose from an empty set");
        self.choices.pop_front().unwrap_or(0).min(n - 1)
    }
}
