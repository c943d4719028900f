// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Configurable behavior for [`MockEntropySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Normal operation (delegates to the OS entropy source).
    None,
    /// Always fail fill_bytes.
    FailAlways,
    /// Fail fill_bytes on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthFillBytes(usize),
    /// Write this many bytes of `0xAA`, then fail.
    FailAfterPartialFill(usize),
    /// Fill every byte with the given value. Makes primary draws predictable.
    Constant(u8),
}

/// Mock entropy source for testing.
///
/// Wraps [`SystemEntropySource`] but allows simulating failures via
/// [`MockEntropySourceBehaviour`]. The behaviour can be changed through a
/// shared reference, so a test can keep the mock while a
/// [`RandomnessProvider`](crate::RandomnessProvider) borrows it.
#[derive(Debug)]
pub struct MockEntropySource {
    inner: SystemEntropySource,
    behaviour: Mutex<MockEntropySourceBehaviour>,
    fill_bytes_count: AtomicUsize,
    failure_count: AtomicUsize,
}

impl MockEntropySource {
    /// Creates a new mock entropy source with the specified behavior.
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self {
            inner: SystemEntropySource::new(),
            behaviour: Mutex::new(behaviour),
            fill_bytes_count: AtomicUsize::new(0),
            failure_count: AtomicUsize::new(0),
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&self, behaviour: MockEntropySourceBehaviour) {
        *self.behaviour.lock().unwrap_or_else(PoisonError::into_inner) = behaviour;
    }

    /// Resets the call and failure counters.
    pub fn reset_count(&self) {
        self.fill_bytes_count.store(0, Ordering::SeqCst);
        self.failure_count.store(0, Ordering::SeqCst);
    }

    /// Returns the number of fill_bytes calls so far.
    pub fn call_count(&self) -> usize {
        self.fill_bytes_count.load(Ordering::SeqCst)
    }

    /// Returns the number of fill_bytes calls that failed.
    pub fn failure_count(&self) -> usize {
        self.failure_count.load(Ordering::SeqCst)
    }

    fn fail(&self) -> Result<(), EntropyError> {
        self.failure_count.fetch_add(1, Ordering::SeqCst);
        Err(EntropyError::EntropyNotAvailable)
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let current = self.fill_bytes_count.fetch_add(1, Ordering::SeqCst) + 1;
        let behaviour = *self.behaviour.lock().unwrap_or_else(PoisonError::into_inner);

        match behaviour {
            MockEntropySourceBehaviour::None => self.inner.fill_bytes(dest),
            MockEntropySourceBehaviour::FailAlways => self.fail(),
            MockEntropySourceBehaviour::FailAtNthFillBytes(n) if current == n => self.fail(),
            MockEntropySourceBehaviour::FailAtNthFillBytes(_) => self.inner.fill_bytes(dest),
            MockEntropySourceBehaviour::FailAfterPartialFill(n) => {
                let written = n.min(dest.len());
                dest[..written].fill(0xAA);
                self.fail()
            }
            MockEntropySourceBehaviour::Constant(byte) => {
                dest.fill(byte);
                Ok(())
            }
        }
    }
}
