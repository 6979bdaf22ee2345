//! Deterministic random number generation for move policies.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Independent streams, one per side of a game
//!
//! ```
//! use game_solver::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let moves = ["a", "b", "c"];
//!
//! let mut replay = GameRng::new(42);
//! assert_eq!(rng.choose(&moves), replay.choose(&moves));
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used to break ties between equally good moves.
///
/// Uses ChaCha8 for speed and reproducibility across platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent, deterministic stream.
    ///
    /// The parent's own sequence is not advanced.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &mut GameRng) -> Vec<u32> {
        let items: Vec<u32> = (0..1000).collect();
        (0..20).filter_map(|_| rng.choose(&items).copied()).collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(draws(&mut rng1), draws(&mut rng2));
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        assert_ne!(draws(&mut rng), draws(&mut forked));
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let (mut a1, mut b1) = (rng1.fork(), rng1.fork());
        let (mut a2, mut b2) = (rng2.fork(), rng2.fork());

        assert_eq!(draws(&mut a1), draws(&mut a2));
        assert_eq!(draws(&mut b1), draws(&mut b2));
        assert_ne!(draws(&mut a1), draws(&mut b1));
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }
}
