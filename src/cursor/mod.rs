//! Offset-tracked binary encoding over a growable byte buffer.
//!
//! [`ByteCursor`] owns a `Vec<u8>` and a single offset shared by reads and
//! writes. Every multi-byte value is little-endian:
//!
//! | Field          | Bytes   | Encoding                                   |
//! |----------------|---------|--------------------------------------------|
//! | `u8` / `i8`    | 1       | raw byte                                   |
//! | `u16` / `i16`  | 2       | little-endian                              |
//! | `u32` / `i32`  | 4       | little-endian                              |
//! | `f32`          | 4       | binary32 bit pattern as little-endian u32  |
//! | `f64`          | 8       | binary64 bit pattern, little-endian        |
//! | string (`s16`) | 2 + N   | u16 byte length, then N UTF-8 bytes        |
//!
//! The format is not self-describing; encoder and decoder must agree on
//! field order. By convention a message starts with a `u16` packet type,
//! which [`ByteCursor::peek_packet_type`] reads without consuming.
//!
//! # Reads are unchecked
//!
//! `read_*` methods trust the caller to know how many bytes are valid.
//! Reading past the end of the buffer panics, and reading past the logically
//! written region returns stale or zeroed bytes. Decoders fed by untrusted
//! peers should use the `try_read_*` family instead, which returns
//! [`CursorError::OutOfBounds`](crate::CursorError::OutOfBounds) and leaves the
//! offset untouched on failure.
//!
//! # Example
//!
//! ```
//! use bytecursor::ByteCursor;
//!
//! let mut writer = ByteCursor::with_capacity(4);
//! writer.write_u16(1);
//! writer.write_i32(-42);
//! writer.write_f32(3.14);
//! writer.write_s16("hi")?;
//! assert_eq!(writer.get_buffer().len(), 14);
//!
//! let mut reader = ByteCursor::from(writer.get_buffer());
//! assert_eq!(reader.peek_packet_type(), 1);
//! assert_eq!(reader.read_u16(), 1);
//! assert_eq!(reader.read_i32(), -42);
//! assert_eq!(reader.read_f32().to_bits(), 3.14f32.to_bits());
//! assert_eq!(reader.read_s16(), "hi");
//! # Ok::<(), bytecursor::CursorError>(())
//! ```

mod buffer;
mod checked;
mod read;
mod write;

pub use buffer::ByteCursor;

/// Largest string body a 16-bit length prefix can describe.
pub const MAX_S16_LEN: usize = u16::MAX as usize;
