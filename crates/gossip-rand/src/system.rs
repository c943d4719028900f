// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::error::EntropyError;
use crate::traits::EntropySource;

type FillFn = dyn Fn(&mut [u8]) -> Result<(), GetRandomError>;

/// Primary entropy source backed by the operating system CSPRNG.
///
/// Reads through `getrandom`, so it never blocks once the OS pool has been
/// initialized:
/// - Linux/Android: `getrandom()` syscall
/// - macOS/iOS: `getentropy()`
/// - Windows: `ProcessPrng`
/// - WASI: `random_get`
///
/// Zero-sized and `Sync`; a single value can be shared by every thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropySource;

impl SystemEntropySource {
    /// Creates the OS-backed source.
    pub const fn new() -> Self {
        Self
    }

    /// Runs `fill_fn` over `dest`, folding any `getrandom` failure into
    /// [`EntropyError::EntropyNotAvailable`].
    pub(crate) fn fill_bytes_with(fill_fn: &FillFn, dest: &mut [u8]) -> Result<(), EntropyError> {
        if dest.is_empty() {
            return Ok(());
        }

        fill_fn(dest).map_err(|_| EntropyError::EntropyNotAvailable)
    }
}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        Self::fill_bytes_with(&getrandom::fill, dest)
    }
}
