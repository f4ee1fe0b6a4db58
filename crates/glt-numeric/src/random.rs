//! Deterministic single-draw uniform sampling.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Draw one uniform sample from `[min, max)`, seeded from `seed`.
///
/// Seeds a fresh ChaCha8 generator, draws exactly one sample, and
/// drops the generator — reseeding per call rather than maintaining a
/// stream. Identical seeds give identical draws. Callers that need
/// many draws from one stream should hold their own [`ChaCha8Rng`]
/// instead of paying the per-call reseed.
pub fn uniform_random(min: f64, max: f64, seed: u64) -> f64 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    min + rng.random::<f64>() * (max - min)
}
