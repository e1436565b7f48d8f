use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use super::place::Place;

/// Picks the place to propose out of the eligible ones
pub trait Selector: Send + Sync {
    /// Returns one of `places`, or `None` when `places` is empty
    fn select<'a>(&self, places: &'a [Place]) -> Option<&'a Place>;
}

/// Uniform random choice over the eligible places
///
/// Every candidate has the same chance regardless of its position.
/// Weighting by how long ago a place was visited or skipped is a
/// possible refinement; this selector intentionally does not do it.
///
/// The random source is owned by the selector so tests can seed it.
pub struct RandomSelector<R = StdRng> {
    rng: Mutex<R>,
}

impl RandomSelector<StdRng> {
    /// Creates a selector seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Creates a deterministic selector
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> RandomSelector<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl<R: Rng + Send> Selector for RandomSelector<R> {
    fn select<'a>(&self, places: &'a [Place]) -> Option<&'a Place> {
        // A poisoned lock still holds a usable RNG.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        places.choose(&mut *rng)
    }
}
