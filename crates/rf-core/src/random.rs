//! Injectable randomness.
//!
//! The engine never reaches for a global generator. Callers pass a
//! [`RandomSource`]: any `FnMut() -> f64` closure works, and [`SeededRandom`]
//! wraps a seedable `StdRng` for reproducible play.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform floats in `[0, 1)`.
pub trait RandomSource {
    /// Draw the next value.
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Random source backed by a standard PRNG.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// A reproducible source: the same seed yields the same sequence.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Map a unit float onto an index into a list of `len` items.
///
/// Computes `floor(r * len)` and clamps it into `0..len`, so injected values
/// outside `[0, 1)` (including NaN) can never index out of bounds. Returns 0
/// for an empty list.
pub fn pick_index(r: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    // Float-to-int casts saturate; NaN becomes 0.
    let scaled = (r * len as f64).floor() as usize;
    scaled.min(len - 1)
}
