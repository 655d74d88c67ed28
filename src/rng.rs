//! Seedable randomness shared by the engine and the combat AI.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source for combat rolls, guard timing and camera jitter.
///
/// Seeding makes a whole bout reproducible, which the tests and the
/// headless runner rely on.
#[derive(Debug, Clone)]
pub struct FightRng {
    rng: StdRng,
    /// The seed used to initialise this RNG, if deterministic.
    pub seed: Option<u64>,
}

impl FightRng {
    /// Deterministic generator.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Non-deterministic generator seeded from the OS.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Derives an independent deterministic stream, or an entropy-seeded one
    /// when this generator is not seeded.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        match self.seed {
            Some(_) => Self::from_seed(self.rng.gen()),
            None => Self::from_entropy(),
        }
    }

    /// Uniform `f32` in `[0, 1)`.
    pub fn random_f32(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Uniform `f64` in `[min, max)`.
    pub fn random_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.rng.gen::<f64>() * (max - min)
    }

    /// `true` with probability `p`.
    pub fn chance(&mut self, p: f32) -> bool {
        self.random_f32() < p
    }

    /// Uniform index into a collection of `len` items.
    ///
    /// `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len.max(1))
    }

    /// `(rand - 0.5) * scale`: a symmetric jitter in `[-scale/2, scale/2)`.
    pub fn jitter(&mut self, scale: f32) -> f32 {
        (self.random_f32() - 0.5) * scale
    }
}

impl Default for FightRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
