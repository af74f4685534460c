//! Little-endian writes with automatic growth.

use tracing::debug;

use super::{ByteCursor, MAX_S16_LEN};
use crate::error::CursorError;

impl ByteCursor {
    /// Writes one byte.
    pub fn write_u8(&mut self, v: u8) {
        self.put(&[v]);
    }

    /// Writes one byte in two's complement.
    pub fn write_i8(&mut self, v: i8) {
        self.put(&v.to_le_bytes());
    }

    /// Writes a little-endian `u16`.
    pub fn write_u16(&mut self, v: u16) {
        self.put(&v.to_le_bytes());
    }

    /// Writes a little-endian `i16`.
    pub fn write_i16(&mut self, v: i16) {
        self.put(&v.to_le_bytes());
    }

    /// Writes a little-endian `u32`.
    pub fn write_u32(&mut self, v: u32) {
        self.put(&v.to_le_bytes());
    }

    /// Writes a little-endian `i32`.
    pub fn write_i32(&mut self, v: i32) {
        self.put(&v.to_le_bytes());
    }

    /// Writes the bit pattern of an `f32` as a little-endian `u32`.
    pub fn write_f32(&mut self, v: f32) {
        self.write_u32(v.to_bits());
    }

    /// Writes the bit pattern of an `f64` as 8 little-endian bytes.
    pub fn write_f64(&mut self, v: f64) {
        self.put(&v.to_bits().to_le_bytes());
    }

    /// Writes a string as a `u16` byte length followed by its UTF-8 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::EncodingTooLarge`] if the string is longer than
    /// 65535 bytes. Nothing is written in that case and the offset is
    /// unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use bytecursor::{ByteCursor, CursorError};
    ///
    /// let mut cursor = ByteCursor::default();
    /// cursor.write_s16("hé")?;
    /// assert_eq!(cursor.get_buffer(), &[3, 0, b'h', 0xC3, 0xA9]);
    ///
    /// let long = "x".repeat(65_536);
    /// assert!(matches!(
    ///     cursor.write_s16(&long),
    ///     Err(CursorError::EncodingTooLarge { .. })
    /// ));
    /// assert_eq!(cursor.offset(), 5);
    /// # Ok::<(), CursorError>(())
    /// ```
    pub fn write_s16(&mut self, v: &str) -> Result<(), CursorError> {
        let body = v.as_bytes();
        let len = u16::try_from(body.len()).map_err(|_| {
            debug!(len = body.len(), max = MAX_S16_LEN, "string too long for u16 prefix");
            CursorError::EncodingTooLarge {
                actual: body.len(),
                max: MAX_S16_LEN,
            }
        })?;

        // Grow once for prefix and body together.
        self.reserve(2 + body.len());
        self.write_u16(len);
        self.put(body);
        Ok(())
    }
}
