//! RNG module - random source for dealing decks
//!
//! Wraps `rand`'s `StdRng` so a deal can either draw from OS entropy (normal
//! play) or from a fixed seed (tests, benchmarks, `--seed`). A seeded source
//! produces the same sequence of deals every run.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Random source used by the deck builder
#[derive(Debug, Clone)]
pub struct DeckRng {
    rng: StdRng,
    seed: Option<u64>,
}

impl DeckRng {
    /// Create a deterministic RNG from a seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create an RNG seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// The seed this RNG was created with, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Uniformly permute a slice in place (Fisher-Yates)
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.rng);
    }
}

impl Default for DeckRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
