// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process-wide fallback generator.
//!
//! Serves a draw only when the primary [`EntropySource`](crate::EntropySource)
//! fails. The generator is xorshift64* seeded once per process from values
//! that do not depend on any entropy source (wall clock, process id and the
//! ASLR-randomized address of a static), so it cannot fail or block.
//!
//! Output is uniform and passes common statistical batteries, but it is
//! predictable to anyone who can guess the seed. It must never back key
//! material; it only keeps gossip peer selection available.

use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

/// Replaces an all-zero seed, which xorshift cannot leave.
const NONZERO_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// xorshift64* output multiplier (Vigna, 2014).
const XORSHIFT_STAR_MULTIPLIER: u64 = 0x2545_F491_4F6C_DD1D;

static FALLBACK: OnceLock<Mutex<Xorshift64Star>> = OnceLock::new();

/// Anchor whose address feeds the seed.
static SEED_ANCHOR: u8 = 0;

/// Xorshift64* PRNG state.
///
/// Period 2^64 - 1. The output multiplication scrambles the low bits that
/// plain xorshift64 leaves weak, which matters because bounded draws reduce
/// modulo small bounds.
pub(crate) struct Xorshift64Star {
    state: u64,
}

impl Xorshift64Star {
    /// Creates a generator from a seed.
    ///
    /// # Panics
    ///
    /// Panics if seed is 0 (xorshift requires non-zero state).
    pub(crate) fn new(seed: u64) -> Self {
        assert!(seed != 0, "xorshift64 seed cannot be zero");
        Self { state: seed }
    }

    /// Advances the state with shifts (12, 25, 27) and returns the scrambled
    /// output.
    pub(crate) fn next_u64(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(XORSHIFT_STAR_MULTIPLIER)
    }

    /// Fills `dest` with little-endian words, truncating the last one.
    pub(crate) fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let word = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}

/// SplitMix64 finalizer, used to spread the low-entropy seed inputs over
/// all 64 bits.
pub(crate) fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Derives a non-zero seed without touching any entropy source.
pub(crate) fn process_seed() -> u64 {
    // A clock set before the epoch still yields a usable (if weaker) seed.
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();
    let pid = u64::from(std::process::id());
    let anchor = core::ptr::addr_of!(SEED_ANCHOR) as usize as u64;

    let seed = splitmix64(nanos ^ pid.rotate_left(32) ^ splitmix64(anchor));

    if seed == 0 { NONZERO_SEED } else { seed }
}

/// Fills `dest` from the process-wide fallback generator.
///
/// Seeds the generator on first use. Never fails: a poisoned lock is
/// recovered, since the state is a single word that is valid at any point.
pub(crate) fn fill_bytes(dest: &mut [u8]) {
    let generator = FALLBACK.get_or_init(|| {
        log::debug!("seeding fallback generator from clock and process id");
        Mutex::new(Xorshift64Star::new(process_seed()))
    });

    generator
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .fill_bytes(dest);
}
