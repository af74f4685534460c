//! Bounds-checked reads for untrusted input.
//!
//! Each `try_*` method checks the field against the end of the buffer and
//! returns [`CursorError::OutOfBounds`] instead of panicking. On any error
//! the offset is left where it was.

use super::ByteCursor;
use crate::error::CursorError;

impl ByteCursor {
    /// Bounds-checked [`peek_packet_type`](Self::peek_packet_type).
    pub fn try_peek_packet_type(&self) -> Result<u16, CursorError> {
        self.try_peek_array().map(u16::from_le_bytes)
    }

    /// Bounds-checked [`read_u8`](Self::read_u8).
    pub fn try_read_u8(&mut self) -> Result<u8, CursorError> {
        self.try_take().map(u8::from_le_bytes)
    }

    /// Bounds-checked [`read_i8`](Self::read_i8).
    pub fn try_read_i8(&mut self) -> Result<i8, CursorError> {
        self.try_take().map(i8::from_le_bytes)
    }

    /// Bounds-checked [`read_u16`](Self::read_u16).
    pub fn try_read_u16(&mut self) -> Result<u16, CursorError> {
        self.try_take().map(u16::from_le_bytes)
    }

    /// Bounds-checked [`read_i16`](Self::read_i16).
    pub fn try_read_i16(&mut self) -> Result<i16, CursorError> {
        self.try_take().map(i16::from_le_bytes)
    }

    /// Bounds-checked [`read_u32`](Self::read_u32).
    pub fn try_read_u32(&mut self) -> Result<u32, CursorError> {
        self.try_take().map(u32::from_le_bytes)
    }

    /// Bounds-checked [`read_i32`](Self::read_i32).
    pub fn try_read_i32(&mut self) -> Result<i32, CursorError> {
        self.try_take().map(i32::from_le_bytes)
    }

    /// Bounds-checked [`read_f32`](Self::read_f32).
    pub fn try_read_f32(&mut self) -> Result<f32, CursorError> {
        self.try_read_u32().map(f32::from_bits)
    }

    /// Bounds-checked [`read_f64`](Self::read_f64).
    pub fn try_read_f64(&mut self) -> Result<f64, CursorError> {
        self.try_take().map(|bytes| f64::from_bits(u64::from_le_bytes(bytes)))
    }

    /// Reads a length-prefixed string, rejecting truncation and invalid UTF-8.
    ///
    /// Unlike [`read_s16`](Self::read_s16) this never substitutes replacement
    /// characters. If the prefix is readable but the body is not, the prefix
    /// is not consumed either.
    ///
    /// # Errors
    ///
    /// - [`CursorError::OutOfBounds`] if the prefix or body runs past the buffer.
    /// - [`CursorError::InvalidUtf8`] if the body is not valid UTF-8.
    ///
    /// # Example
    ///
    /// ```
    /// use bytecursor::{ByteCursor, CursorError};
    ///
    /// // Prefix claims 4 bytes, only 2 follow.
    /// let mut cursor = ByteCursor::new(vec![4, 0, b'h', b'i']);
    /// assert!(matches!(
    ///     cursor.try_read_s16(),
    ///     Err(CursorError::OutOfBounds { .. })
    /// ));
    /// assert_eq!(cursor.offset(), 0);
    /// ```
    pub fn try_read_s16(&mut self) -> Result<String, CursorError> {
        let start = self.offset;
        let len = usize::from(self.try_read_u16()?);
        let body_at = self.offset;

        let result = match body_at
            .checked_add(len)
            .and_then(|end| self.buffer.get(body_at..end))
        {
            Some(body) => std::str::from_utf8(body)
                .map(str::to_owned)
                .map_err(|_| CursorError::InvalidUtf8 { offset: start }),
            None => Err(CursorError::OutOfBounds {
                offset: body_at,
                needed: len,
                len: self.buffer.len(),
            }),
        };

        match result {
            Ok(value) => {
                self.offset = body_at + len;
                Ok(value)
            }
            Err(err) => {
                self.offset = start;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_reads_match_unchecked() {
        let mut writer = ByteCursor::with_capacity(0);
        writer.write_u8(200);
        writer.write_i8(-100);
        writer.write_u16(40_000);
        writer.write_i16(-30_000);
        writer.write_u32(4_000_000_000);
        writer.write_i32(-2_000_000_000);
        writer.write_f32(0.25);
        writer.write_f64(-1e300);
        writer.write_s16("checked").unwrap();

        let mut reader = ByteCursor::from(writer.get_buffer());
        assert_eq!(reader.try_peek_packet_type(), Ok(u16::from_le_bytes([200, 156])));
        assert_eq!(reader.try_read_u8(), Ok(200));
        assert_eq!(reader.try_read_i8(), Ok(-100));
        assert_eq!(reader.try_read_u16(), Ok(40_000));
        assert_eq!(reader.try_read_i16(), Ok(-30_000));
        assert_eq!(reader.try_read_u32(), Ok(4_000_000_000));
        assert_eq!(reader.try_read_i32(), Ok(-2_000_000_000));
        assert_eq!(reader.try_read_f32(), Ok(0.25));
        assert_eq!(reader.try_read_f64(), Ok(-1e300));
        assert_eq!(reader.try_read_s16().as_deref(), Ok("checked"));
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_try_read_out_of_bounds_keeps_offset() {
        let mut cursor = ByteCursor::new(vec![1, 2, 3]);
        cursor.set_offset(1);

        let err = cursor.try_read_u32().unwrap_err();
        assert_eq!(
            err,
            CursorError::OutOfBounds {
                offset: 1,
                needed: 4,
                len: 3
            }
        );
        assert_eq!(cursor.offset(), 1);

        // Smaller field still fits.
        assert_eq!(cursor.try_read_u16(), Ok(0x0302));
    }

    #[test]
    fn test_try_read_empty_buffer() {
        let mut cursor = ByteCursor::new(Vec::new());
        assert!(cursor.try_read_u8().is_err());
        assert!(cursor.try_peek_packet_type().is_err());
        assert!(cursor.try_read_s16().is_err());
    }

    #[test]
    fn test_try_read_offset_past_end() {
        let mut cursor = ByteCursor::with_offset(vec![0u8; 4], 9);
        assert!(matches!(
            cursor.try_read_u8(),
            Err(CursorError::OutOfBounds { offset: 9, .. })
        ));
    }

    #[test]
    fn test_try_read_s16_truncated_body() {
        let mut cursor = ByteCursor::new(vec![3, 0, b'a']);
        assert_eq!(
            cursor.try_read_s16(),
            Err(CursorError::OutOfBounds {
                offset: 2,
                needed: 3,
                len: 3
            })
        );
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_try_read_s16_invalid_utf8() {
        let mut cursor = ByteCursor::new(vec![0xAA, 2, 0, 0xC3, 0x28]);
        cursor.set_offset(1);
        assert_eq!(
            cursor.try_read_s16(),
            Err(CursorError::InvalidUtf8 { offset: 1 })
        );
        assert_eq!(cursor.offset(), 1);
    }
}
