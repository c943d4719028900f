// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::BTreeMap;

use rand_core::RngCore;

use crate::fallback;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Random integers drawn from an injected [`EntropySource`], with a
/// per-call fallback.
///
/// Every draw first asks the entropy source. If that read fails, the same
/// draw is served from a process-wide fallback generator instead, and the
/// next draw asks the entropy source again. Callers cannot tell which path
/// produced a value.
///
/// The provider holds no state of its own, so it is `Sync` whenever `E` is
/// and can be shared between threads without locking.
///
/// # Example
///
/// ```rust
/// use gossip_rand::{RandomnessProvider, SystemEntropySource};
///
/// let provider = RandomnessProvider::new(SystemEntropySource::new());
///
/// let peer = provider.random_int(16);
/// assert!((0..16).contains(&peer));
///
/// let nonce = provider.random_u64();
/// # let _ = nonce;
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomnessProvider<E> {
    entropy: E,
}

impl RandomnessProvider<SystemEntropySource> {
    /// Creates a provider over the OS entropy source.
    pub const fn system() -> Self {
        Self::new(SystemEntropySource::new())
    }
}

impl<E: EntropySource> RandomnessProvider<E> {
    /// Creates a provider drawing from `entropy`.
    ///
    /// Pass `&source` to keep ownership of the source, e.g. to reconfigure a
    /// test source between draws.
    pub const fn new(entropy: E) -> Self {
        Self { entropy }
    }

    /// Returns a uniformly random integer in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound <= 0`. The check runs before any entropy is drawn.
    pub fn random_int(&self, bound: i64) -> i64 {
        assert!(bound > 0, "bound must be positive, got {bound}");

        // bound > 0, so both casts are lossless.
        self.uniform_below(bound as u64) as i64
    }

    /// Returns a uniformly random `u64` built from exactly 8 bytes of entropy.
    pub fn random_u64(&self) -> u64 {
        let mut bytes = [0u8; 8];
        self.fill(&mut bytes);
        u64::from_le_bytes(bytes)
    }

    /// Returns a uniformly random `u32` built from exactly 4 bytes of entropy.
    pub fn random_u32(&self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill(&mut bytes);
        u32::from_le_bytes(bytes)
    }

    /// Fills `dest` with random bytes. Never fails.
    pub fn fill_bytes(&self, dest: &mut [u8]) {
        self.fill(dest);
    }

    /// Picks `count` distinct indices from `[0, highest_index]`, in random
    /// order.
    ///
    /// Returns `None` if the range holds fewer than `count` indices, or if a
    /// `count`-long result cannot be allocated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gossip_rand::RandomnessProvider;
    ///
    /// let provider = RandomnessProvider::system();
    ///
    /// let peers = provider.random_indices(3, 9).expect("10 peers hold 3");
    /// assert_eq!(peers.len(), 3);
    ///
    /// assert!(provider.random_indices(11, 9).is_none());
    /// ```
    pub fn random_indices(&self, count: usize, highest_index: usize) -> Option<Vec<usize>> {
        // usize::MAX + 1 indices cannot be addressed; the top one is dropped.
        let population = highest_index.saturating_add(1);
        if population < count {
            return None;
        }

        let mut picked = Vec::new();
        picked.try_reserve_exact(count).ok()?;

        // Partial Fisher-Yates over a virtual 0..population array. Only the
        // displaced slots are stored, so memory is O(count). A BTreeMap keeps
        // this path free of hasher seeding, which reads OS entropy directly.
        let mut displaced: BTreeMap<usize, usize> = BTreeMap::new();

        for i in 0..count {
            let j = i + self.uniform_below((population - i) as u64) as usize;
            let at_i = displaced.get(&i).copied().unwrap_or(i);
            let at_j = displaced.get(&j).copied().unwrap_or(j);

            displaced.insert(j, at_i);
            picked.push(at_j);
        }

        Some(picked)
    }

    /// Shuffles `items` in place. Every permutation is equally likely.
    pub fn shuffle<T>(&self, items: &mut [T]) {
        if items.len() <= 1 {
            return;
        }

        // Fisher-Yates shuffle
        for i in (1..items.len()).rev() {
            let j = self.uniform_below(i as u64 + 1) as usize;
            items.swap(i, j);
        }
    }

    fn fill(&self, dest: &mut [u8]) {
        if let Err(err) = self.entropy.fill_bytes(dest) {
            log::warn!(
                "entropy source failed ({err}), serving {} bytes from fallback generator",
                dest.len()
            );
            // Partially written bytes are discarded along with the error.
            fallback::fill_bytes(dest);
        }
    }

    /// Uniform value in `[0, n)` by rejection sampling.
    ///
    /// Draws below `2^64 mod n` are rejected so that every residue is hit by
    /// the same number of accepted draws. Fewer than half of all draws are
    /// rejected for any `n`.
    fn uniform_below(&self, n: u64) -> u64 {
        debug_assert!(n > 0, "n must be positive");

        let threshold = n.wrapping_neg() % n;

        loop {
            let r = self.random_u64();
            if r >= threshold {
                return r % n;
            }
        }
    }
}

impl<E: EntropySource> RngCore for RandomnessProvider<E> {
    fn next_u32(&mut self) -> u32 {
        self.random_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.random_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.fill(dst);
    }
}
