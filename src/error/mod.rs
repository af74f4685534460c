//! Error types for bytecursor.

use thiserror::Error;

/// Errors that can occur while encoding or decoding with a [`ByteCursor`](crate::ByteCursor).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// A string's UTF-8 encoding does not fit the 16-bit length prefix.
    #[error("encoding too large: {actual} bytes (max {max})")]
    EncodingTooLarge {
        /// The encoded size that was attempted.
        actual: usize,
        /// The maximum encodable size.
        max: usize,
    },

    /// A checked read ran past the end of the buffer.
    #[error("out of bounds: {needed} bytes at offset {offset} (buffer holds {len})")]
    OutOfBounds {
        /// Cursor position at which the read started.
        offset: usize,
        /// Number of bytes the read required.
        needed: usize,
        /// Length of the underlying buffer.
        len: usize,
    },

    /// A checked string read found bytes that are not valid UTF-8.
    #[error("invalid utf-8 in string at offset {offset}")]
    InvalidUtf8 {
        /// Offset of the string's length prefix.
        offset: usize,
    },

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}
