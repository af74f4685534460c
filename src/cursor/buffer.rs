//! The cursor state: owned buffer, offset, growth and hand-off.

use bytes::Bytes;
use tracing::trace;

use crate::config::{CursorConfig, DEFAULT_INITIAL_CAPACITY};
use crate::error::CursorError;
use crate::util::grown_len;

/// A read/write cursor over an owned, growable byte buffer.
///
/// The buffer's length is the cursor's capacity: every byte in
/// `0..capacity()` is addressable, and writes past it grow the buffer by
/// doubling. The offset is shared by reads and writes, so a cursor is
/// normally used for one direction at a time: fill it and call
/// [`get_buffer`](Self::get_buffer), or build one over a received span and
/// read it back in the same field order.
///
/// A cursor is plain mutable state with no internal locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteCursor {
    pub(super) buffer: Vec<u8>,
    pub(super) offset: usize,
}

impl ByteCursor {
    /// Creates a cursor at offset 0 over an existing buffer.
    pub fn new(buffer: Vec<u8>) -> Self {
        Self::with_offset(buffer, 0)
    }

    /// Creates a cursor over an existing buffer, starting at `offset`.
    ///
    /// The offset is not checked against the buffer length; the first write
    /// grows the buffer as needed, while a read from past the end panics.
    pub fn with_offset(buffer: Vec<u8>, offset: usize) -> Self {
        Self { buffer, offset }
    }

    /// Creates a cursor over a zero-filled buffer of `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(vec![0u8; capacity])
    }

    /// Creates a cursor from a validated [`CursorConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::InvalidConfig`] if the configuration does not
    /// validate.
    ///
    /// # Example
    ///
    /// ```
    /// use bytecursor::{ByteCursor, CursorConfig};
    ///
    /// let config = CursorConfig::default().with_start_offset(2);
    /// let cursor = ByteCursor::from_config(&config)?;
    /// assert_eq!(cursor.offset(), 2);
    /// # Ok::<(), bytecursor::CursorError>(())
    /// ```
    pub fn from_config(config: &CursorConfig) -> Result<Self, CursorError> {
        config.validate()?;
        Ok(Self::with_offset(
            vec![0u8; config.initial_capacity()],
            config.start_offset(),
        ))
    }

    /// Returns the current read/write position.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Moves the cursor to `offset` without touching the buffer.
    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset;
    }

    /// Rewinds to offset 0, keeping the buffer for the next message.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Returns the length of the underlying buffer.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the number of buffer bytes after the cursor (0 if past the end).
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }

    /// Returns the written prefix of the buffer, `[0, offset)`.
    ///
    /// This is the span to transmit once all fields are written. It always
    /// starts at byte 0, regardless of where reading would resume. An offset
    /// moved past the end of the buffer is clamped to the buffer length.
    pub fn get_buffer(&self) -> &[u8] {
        &self.buffer[..self.written_len()]
    }

    /// Consumes the cursor, handing the written prefix off as [`Bytes`].
    ///
    /// The buffer is truncated in place, so no bytes are copied.
    pub fn into_bytes(self) -> Bytes {
        let len = self.written_len();
        let mut buffer = self.buffer;
        buffer.truncate(len);
        Bytes::from(buffer)
    }

    /// Consumes the cursor, returning the whole buffer and the final offset.
    pub fn into_inner(self) -> (Vec<u8>, usize) {
        (self.buffer, self.offset)
    }

    fn written_len(&self) -> usize {
        self.offset.min(self.buffer.len())
    }

    /// Grows the buffer so that `n` more bytes fit after the offset.
    ///
    /// Existing bytes are kept and the new tail is zero-filled. The buffer
    /// never shrinks.
    pub(super) fn reserve(&mut self, n: usize) {
        let required = self.offset.saturating_add(n);
        if self.buffer.len() >= required {
            return;
        }

        let from = self.buffer.len();
        let to = grown_len(from, required);
        trace!(from, to, offset = self.offset, needed = n, "growing cursor buffer");
        self.buffer.resize(to, 0);
    }

    /// Writes `bytes` at the offset, growing first if needed.
    pub(super) fn put(&mut self, bytes: &[u8]) {
        self.reserve(bytes.len());
        let end = self.offset + bytes.len();
        self.buffer[self.offset..end].copy_from_slice(bytes);
        self.offset = end;
    }

    /// Copies `N` bytes at the offset without advancing. Panics past the end.
    pub(super) fn peek_array<const N: usize>(&self) -> [u8; N] {
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.buffer[self.offset..self.offset + N]);
        bytes
    }

    pub(super) fn take<const N: usize>(&mut self) -> [u8; N] {
        let bytes = self.peek_array();
        self.offset += N;
        bytes
    }

    /// Bounds-checked [`peek_array`](Self::peek_array).
    pub(super) fn try_peek_array<const N: usize>(&self) -> Result<[u8; N], CursorError> {
        let src = self
            .offset
            .checked_add(N)
            .and_then(|end| self.buffer.get(self.offset..end))
            .ok_or(CursorError::OutOfBounds {
                offset: self.offset,
                needed: N,
                len: self.buffer.len(),
            })?;
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(src);
        Ok(bytes)
    }

    pub(super) fn try_take<const N: usize>(&mut self) -> Result<[u8; N], CursorError> {
        let bytes = self.try_peek_array()?;
        self.offset += N;
        Ok(bytes)
    }
}

impl Default for ByteCursor {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }
}

impl From<Vec<u8>> for ByteCursor {
    fn from(buffer: Vec<u8>) -> Self {
        Self::new(buffer)
    }
}

impl From<&[u8]> for ByteCursor {
    fn from(span: &[u8]) -> Self {
        Self::new(span.to_vec())
    }
}

impl From<Bytes> for ByteCursor {
    fn from(span: Bytes) -> Self {
        Self::new(Vec::from(span))
    }
}
