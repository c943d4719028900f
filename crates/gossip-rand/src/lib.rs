// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # gossip_rand
//!
//! Random integers for gossip peer selection that stay available when the
//! entropy source does not.
//!
//! Draws come from an [`EntropySource`] (the OS CSPRNG by default). If a read
//! fails, that single draw is served by a fallback generator seeded from the
//! clock and process id; the next draw tries the entropy source again.
//! Entropy failures are never surfaced to callers. The only failure callers
//! can observe is a panic on a non-positive bound.
//!
//! ## Core Types
//!
//! - [`RandomnessProvider`]: bounded and unbounded draws over an injected source
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`ReaderEntropySource`]: any `std::io::Read` byte stream
//!
//! ## Traits
//!
//! - [`EntropySource`]: Interface for primary entropy sources
//!
//! ## Example
//!
//! ```rust
//! let peer = gossip_rand::random_int(8);
//! assert!((0..8).contains(&peer));
//!
//! let a = gossip_rand::random_u64();
//! let b = gossip_rand::random_u64();
//! assert_ne!(a, b);
//! ```
//!
//! ## Fault injection
//!
//! There is no process-wide source to swap. Build a provider over the source
//! under test instead:
//!
//! ```rust
//! use gossip_rand::{EntropyError, EntropySource, RandomnessProvider};
//!
//! struct Exhausted;
//!
//! impl EntropySource for Exhausted {
//!     fn fill_bytes(&self, _dest: &mut [u8]) -> Result<(), EntropyError> {
//!         Err(EntropyError::EntropyNotAvailable)
//!     }
//! }
//!
//! let provider = RandomnessProvider::new(Exhausted);
//! assert!(provider.random_int(10) < 10);
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod fallback;
mod provider;
mod reader;
mod support;
mod system;
mod traits;

pub use error::EntropyError;
pub use provider::RandomnessProvider;
pub use reader::ReaderEntropySource;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test_utils"))]
pub use support::test_utils;

static SYSTEM: RandomnessProvider<SystemEntropySource> = RandomnessProvider::system();

/// Returns a uniformly random integer in `[0, bound)` from the OS entropy
/// source, or the fallback generator if the OS source fails.
///
/// # Panics
///
/// Panics if `bound <= 0`.
pub fn random_int(bound: i64) -> i64 {
    SYSTEM.random_int(bound)
}

/// Returns a uniformly random `u64` from the OS entropy source, or the
/// fallback generator if the OS source fails.
pub fn random_u64() -> u64 {
    SYSTEM.random_u64()
}

/// Picks `count` distinct indices from `[0, highest_index]` in random order.
///
/// Returns `None` if the range holds fewer than `count` indices. See
/// [`RandomnessProvider::random_indices`].
pub fn random_indices(count: usize, highest_index: usize) -> Option<Vec<usize>> {
    SYSTEM.random_indices(count, highest_index)
}
