//! Unchecked little-endian reads.
//!
//! These index the buffer directly and panic when a field runs past its
//! end. The `try_read_*` variants are the fallible counterparts.

use super::ByteCursor;

impl ByteCursor {
    /// Reads the `u16` at the offset without advancing.
    ///
    /// Messages conventionally start with a 16-bit type discriminator; this
    /// lets a dispatcher inspect it before handing the cursor to the decoder
    /// that reads it again with [`read_u16`](Self::read_u16).
    pub fn peek_packet_type(&self) -> u16 {
        u16::from_le_bytes(self.peek_array())
    }

    /// Reads one byte.
    pub fn read_u8(&mut self) -> u8 {
        let v = self.buffer[self.offset];
        self.offset += 1;
        v
    }

    /// Reads one byte as a two's-complement `i8`.
    pub fn read_i8(&mut self) -> i8 {
        self.read_u8() as i8
    }

    /// Reads a little-endian `u16`.
    pub fn read_u16(&mut self) -> u16 {
        u16::from_le_bytes(self.take())
    }

    /// Reads a little-endian `i16`.
    pub fn read_i16(&mut self) -> i16 {
        i16::from_le_bytes(self.take())
    }

    /// Reads a little-endian `u32`.
    pub fn read_u32(&mut self) -> u32 {
        u32::from_le_bytes(self.take())
    }

    /// Reads a little-endian `i32`.
    pub fn read_i32(&mut self) -> i32 {
        i32::from_le_bytes(self.take())
    }

    /// Reads an `f32` from its little-endian bit pattern.
    ///
    /// The bits are reinterpreted, never converted, so NaN payloads survive.
    pub fn read_f32(&mut self) -> f32 {
        f32::from_bits(self.read_u32())
    }

    /// Reads an `f64` from its little-endian bit pattern.
    pub fn read_f64(&mut self) -> f64 {
        f64::from_bits(u64::from_le_bytes(self.take()))
    }

    /// Reads a string with a `u16` byte-length prefix.
    ///
    /// Invalid UTF-8 is replaced with `U+FFFD`; use
    /// [`try_read_s16`](Self::try_read_s16) to reject it instead.
    pub fn read_s16(&mut self) -> String {
        let len = usize::from(self.read_u16());
        let end = self.offset + len;
        let value = String::from_utf8_lossy(&self.buffer[self.offset..end]).into_owned();
        self.offset = end;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_le_integers() {
        let mut cursor = ByteCursor::new(vec![
            0xFF, // u8
            0xFE, // i8 = -2
            0x34, 0x12, // u16 = 0x1234
            0xFF, 0xFF, // i16 = -1
            0x78, 0x56, 0x34, 0x12, // u32 = 0x12345678
            0xD6, 0xFF, 0xFF, 0xFF, // i32 = -42
        ]);

        assert_eq!(cursor.read_u8(), 0xFF);
        assert_eq!(cursor.read_i8(), -2);
        assert_eq!(cursor.read_u16(), 0x1234);
        assert_eq!(cursor.read_i16(), -1);
        assert_eq!(cursor.read_u32(), 0x1234_5678);
        assert_eq!(cursor.read_i32(), -42);
        assert_eq!(cursor.offset(), 14);
    }

    #[test]
    fn test_read_f32_bits() {
        let mut cursor = ByteCursor::new(0x7FC0_0001u32.to_le_bytes().to_vec());
        let v = cursor.read_f32();
        assert!(v.is_nan());
        assert_eq!(v.to_bits(), 0x7FC0_0001);
    }

    #[test]
    fn test_read_f64_bytes() {
        let mut cursor = ByteCursor::new(1.5f64.to_le_bytes().to_vec());
        assert_eq!(cursor.read_f64(), 1.5);
        assert_eq!(cursor.offset(), 8);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let cursor = ByteCursor::new(vec![0x07, 0x00, 0xAA]);
        assert_eq!(cursor.peek_packet_type(), 7);
        assert_eq!(cursor.peek_packet_type(), 7);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_read_s16() {
        let mut cursor = ByteCursor::new(vec![2, 0, b'h', b'i', 0xEE]);
        assert_eq!(cursor.read_s16(), "hi");
        assert_eq!(cursor.offset(), 4);
    }

    #[test]
    fn test_read_s16_lossy() {
        let mut cursor = ByteCursor::new(vec![1, 0, 0xFF]);
        assert_eq!(cursor.read_s16(), "\u{FFFD}");
        assert_eq!(cursor.offset(), 3);
    }

    #[test]
    fn test_read_inside_buffer_returns_stale_bytes() {
        // Past the written prefix but inside the buffer: no error, just zeros.
        let mut cursor = ByteCursor::with_capacity(8);
        cursor.write_u16(5);
        assert_eq!(cursor.read_u32(), 0);
    }

    #[test]
    #[should_panic]
    fn test_read_past_end_panics() {
        let mut cursor = ByteCursor::new(vec![1]);
        cursor.read_u16();
    }
}
