/*!
# Graph Generators

This module provides ready-made networks and random friendship generators.

Random generators follow a builder-style pattern:

1. Create a generator instance (e.g., `RandomFriendships::new()`).
2. Set parameters using setter methods (e.g., `.people(n).prob(p)`).
3. Generate friendships via `generate()` / `stream()` or a whole graph via `generate_graph()`.

Supported models:
- [`sample_network`]: a fixed network of six people, handy for demos and tests
- [`RandomFriendships`]: every possible friendship exists independently with probability `p`
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod sample;

pub use gnp::*;
pub use sample::*;

/// Trait for generators that allow setting the number of people.
pub trait NumPeopleGen {
    /// Sets the number of people in the generated network.
    fn people(self, n: NumNodes) -> Self;
}

/// General trait for a configurable random friendship generator.
///
/// Types implementing this trait can produce a complete list of friendships
/// or a lazily-evaluated stream (iterator) of them.
pub trait GraphGenerator {
    /// Generates a list of random friendships.
    ///
    /// This collects the full result from `stream()` into a `Vec<Edge>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated friendships.
    /// Every friendship is yielded once and normalized.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}
