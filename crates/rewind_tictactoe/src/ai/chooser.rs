//! Injectable randomness for tie-breaking among equally good cells.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks one index out of `len` candidates.
pub trait Chooser {
    /// Returns an index in `0..len`. `len` is never zero.
    fn choose(&mut self, len: usize) -> usize;
}

/// Uniform choice backed by a seedable RNG.
#[derive(Debug, Clone)]
pub struct RngChooser {
    rng: StdRng,
}

impl RngChooser {
    /// Seeds from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RngChooser {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Chooser for RngChooser {
    fn choose(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Always takes the first candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChooser;

impl Chooser for FirstChooser {
    fn choose(&mut self, _len: usize) -> usize {
        0
    }
}
