//! Shuffle selection
//!
//! Shuffle is memoryless: every "next" is a fresh uniform pick over the
//! whole list. The same episode can come up twice in a row, and the
//! current one is not excluded.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build the random source used for shuffle picks
///
/// A fixed seed gives a reproducible sequence of picks.
pub fn shuffle_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Pick a uniformly random index in `[0, len)`
///
/// Returns `None` for an empty list.
pub fn pick_random_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(rng.gen_range(0..len))
}
