//! Random source for the generator.
//!
//! The generator never reaches for a global RNG; callers build one here and
//! pass it in. Without a seed the source is seeded from the operating system,
//! with one it is fully reproducible.

use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
