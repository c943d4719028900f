// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::fallback::{Xorshift64Star, fill_bytes, process_seed, splitmix64};

#[test]
#[should_panic(expected = "xorshift64 seed cannot be zero")]
fn test_xorshift_zero_seed_panics() {
    let _ = Xorshift64Star::new(0);
}

#[test]
fn test_xorshift_is_deterministic() {
    let mut a = Xorshift64Star::new(0x1234567890ABCDEF);
    let mut b = Xorshift64Star::new(0x1234567890ABCDEF);

    for _ in 0..64 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn test_xorshift_consecutive_outputs_differ() {
    let mut rng = Xorshift64Star::new(1);
    let mut previous = rng.next_u64();

    for _ in 0..1_000 {
        let next = rng.next_u64();
        assert_ne!(next, previous);
        previous = next;
    }
}

#[test]
fn test_xorshift_fill_bytes_truncates_last_word() {
    let mut words = Xorshift64Star::new(0xDEADBEEFCAFEBABE);
    let first = words.next_u64().to_le_bytes();
    let second = words.next_u64().to_le_bytes();

    let mut bytes = [0u8; 13];
    Xorshift64Star::new(0xDEADBEEFCAFEBABE).fill_bytes(&mut bytes);

    assert_eq!(bytes[..8], first);
    assert_eq!(bytes[8..], second[..5]);
}

#[test]
fn test_splitmix64_reference_output() {
    assert_eq!(splitmix64(0), 0xE220_A839_7B1D_CDAF);
}

#[test]
fn test_process_seed_is_non_zero() {
    assert_ne!(process_seed(), 0);
}

#[test]
fn test_fill_bytes_never_repeats_consecutive_draws() {
    let mut first = [0u8; 32];
    let mut second = [0u8; 32];

    fill_bytes(&mut first);
    fill_bytes(&mut second);

    assert_ne!(first, second);
}

#[test]
fn test_fill_bytes_empty_slice_ok() {
    let mut bytes: [u8; 0] = [];
    fill_bytes(&mut bytes);
}

#[test]
fn test_fill_bytes_from_many_threads() {
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let mut bytes = [0u8; 8];
                    fill_bytes(&mut bytes);
                    u64::from_le_bytes(bytes)
                })
            })
            .collect();

        let mut values: Vec<u64> = handles
            .into_iter()
            .map(|handle| handle.join().expect("Failed to join(..)"))
            .collect();
        values.sort_unstable();
        values.dedup();

        // All threads share one generator, so no two draws coincide.
        assert_eq!(values.len(), 8);
    });
}
