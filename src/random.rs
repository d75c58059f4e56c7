//! Random number generation helpers.
//!
//! All randomized components take an optional seed. A fixed seed gives a
//! reproducible pivot sequence; `None` draws a fresh seed from the thread RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG from an optional seed.
pub fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// Shuffles `items` in place with the Fisher-Yates algorithm.
///
/// Every permutation is equally likely given a uniform `rng`.
///
/// # Complexity
/// O(n) time, O(1) space
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
