// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::{ErrorKind, Read};
use std::sync::{Mutex, PoisonError};

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Entropy source over an arbitrary byte stream.
///
/// Useful for device files such as `/dev/hwrng`, or for replaying a
/// captured stream. The reader sits behind a mutex so the source stays
/// `Sync` and concurrent draws never interleave partial reads.
///
/// # Example
///
/// ```rust
/// use gossip_rand::{EntropySource, ReaderEntropySource};
///
/// let source = ReaderEntropySource::new(&[7u8; 8][..]);
/// let mut buf = [0u8; 8];
/// source.fill_bytes(&mut buf).expect("Failed to fill_bytes(..)");
///
/// assert_eq!(buf, [7u8; 8]);
/// ```
#[derive(Debug)]
pub struct ReaderEntropySource<R> {
    reader: Mutex<R>,
}

impl<R: Read> ReaderEntropySource<R> {
    /// Wraps `reader` as an entropy source.
    pub fn new(reader: R) -> Self {
        Self {
            reader: Mutex::new(reader),
        }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: Read> EntropySource for ReaderEntropySource<R> {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let mut reader = self.reader.lock().unwrap_or_else(PoisonError::into_inner);
        let mut filled = 0;

        while filled < dest.len() {
            match reader.read(&mut dest[filled..]) {
                Ok(0) => {
                    return Err(EntropyError::ShortRead {
                        requested: dest.len(),
                        filled,
                    });
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    return Err(EntropyError::ShortRead {
                        requested: dest.len(),
                        filled,
                    });
                }
                Err(_) => return Err(EntropyError::EntropyNotAvailable),
            }
        }

        Ok(())
    }
}
