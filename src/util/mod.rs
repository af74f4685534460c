//! Internal utility functions and helpers.
//!
//! This module contains small helper functions used throughout the crate.
//! It is an implementation detail and not part of the public API.

/// Computes the buffer length after growing `current` to hold `required` bytes.
///
/// The length doubles, starting from at least 1, until it covers `required`.
/// A single doubling is not enough for tiny or empty buffers. The result
/// saturates at `usize::MAX`; the following `Vec::resize` then reports the
/// allocation failure.
pub(crate) fn grown_len(current: usize, required: usize) -> usize {
    let mut len = current.max(1);
    while len < required {
        len = len.saturating_mul(2);
        if len == usize::MAX {
            break;
        }
    }
    len
}
