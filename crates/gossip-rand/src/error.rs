// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors reported by an [`EntropySource`](crate::EntropySource).
///
/// These never leave a [`RandomnessProvider`](crate::RandomnessProvider): any
/// of them makes the provider serve that draw from the fallback generator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntropyError {
    /// Entropy source is unavailable or failed to generate random data.
    #[error("EntropyNotAvailable")]
    EntropyNotAvailable,

    /// Byte stream ended before the buffer was filled.
    #[error("ShortRead: requested {requested} bytes, got {filled}")]
    ShortRead {
        /// Number of bytes asked for.
        requested: usize,
        /// Number of bytes actually written before the stream ended.
        filled: usize,
    },
}
