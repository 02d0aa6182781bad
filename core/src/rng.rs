//! Pseudo-random source used by the generator.
//!
//! ChaCha8 is pinned so a given seed produces the same stream on every
//! platform and across `rand` minor releases. Components take `&mut R` for
//! any `R: rand::Rng`, so callers may still plug in their own engine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub type SearchRng = ChaCha8Rng;

/// Create the generator's source for a search iteration.
pub fn seeded(seed: u64) -> SearchRng {
    ChaCha8Rng::seed_from_u64(seed)
}
