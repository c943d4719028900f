// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rand_core::RngCore;

use crate::provider::RandomnessProvider;
use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};

#[test]
fn test_next_u32() {
    let mut rng = RandomnessProvider::system();
    let a = rng.next_u32();
    let b = rng.next_u32();
    assert_ne!(a, b);
}

#[test]
fn test_next_u64() {
    let mut rng = RandomnessProvider::system();
    let a = rng.next_u64();
    let b = rng.next_u64();
    assert_ne!(a, b);
}

#[test]
fn test_fill_bytes() {
    let mut rng = RandomnessProvider::system();
    let mut a = [0u8; 64];
    let mut b = [0u8; 64];
    RngCore::fill_bytes(&mut rng, &mut a);
    RngCore::fill_bytes(&mut rng, &mut b);
    assert_ne!(a, b);
}

#[test]
fn test_rng_core_falls_back() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let mut rng = RandomnessProvider::new(&mock);

    let a = rng.next_u64();
    let b = rng.next_u64();

    assert_ne!(a, b);
    assert_eq!(mock.failure_count(), 2);
}

#[test]
fn test_rng_core_reads_primary_source() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::Constant(0x11));
    let mut rng = RandomnessProvider::new(&mock);

    assert_eq!(rng.next_u32(), 0x1111_1111);
    assert_eq!(rng.next_u64(), 0x1111_1111_1111_1111);
}
