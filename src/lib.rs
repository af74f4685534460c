//! bytecursor
//!
//! Compact little-endian binary encoding for Rust.
//!
//! `bytecursor` writes and reads fixed-width integers, IEEE-754 floats and
//! length-prefixed UTF-8 strings through a single offset over a growable
//! byte buffer. It is meant for hand-written message codecs such as game
//! state updates, where both sides agree on the field order ahead of time.
//!
//! The crate intentionally:
//! - does NOT frame, checksum or version messages
//! - does NOT describe its own schema
//! - does NOT touch sockets or files
//! - does NOT synchronize; every type is plain `&mut self` state
//!
//! Alongside the cursor sits [`ListPool`], a small free-list for the scratch
//! vectors such code tends to allocate every tick.
//!
//! # Encode
//!
//! ```
//! use bytecursor::{ByteCursor, CursorError};
//!
//! fn main() -> Result<(), CursorError> {
//!     let mut cursor = ByteCursor::with_capacity(4);
//!     cursor.write_u16(1); // packet type
//!     cursor.write_i32(-42);
//!     cursor.write_f32(3.14);
//!     cursor.write_s16("hi")?;
//!
//!     let wire = cursor.into_bytes();
//!     assert_eq!(wire.len(), 14);
//!     Ok(())
//! }
//! ```
//!
//! # Decode
//!
//! ```
//! use bytecursor::ByteCursor;
//!
//! let wire = [1u8, 0, 0xD6, 0xFF, 0xFF, 0xFF];
//! let mut cursor = ByteCursor::from(&wire[..]);
//!
//! match cursor.peek_packet_type() {
//!     1 => {
//!         cursor.read_u16();
//!         assert_eq!(cursor.read_i32(), -42);
//!     }
//!     other => panic!("unknown packet {other}"),
//! }
//! ```
//!
//! Unchecked `read_*` calls panic when a field runs off the end of the
//! buffer. When the input comes from an untrusted peer, decode with the
//! `try_read_*` family instead.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod cursor;
mod error;
mod pool;

mod util; // internal growth arithmetic

//
// Public surface
//

pub use config::{CursorConfig, DEFAULT_INITIAL_CAPACITY, DEFAULT_POOL_SLOTS, PoolConfig};
pub use cursor::{ByteCursor, MAX_S16_LEN};
pub use error::CursorError;
pub use pool::ListPool;
