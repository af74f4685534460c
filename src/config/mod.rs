//! Construction parameters for cursors and pools.
//!
//! - [`CursorConfig`] - Initial buffer size and starting offset of a [`ByteCursor`](crate::ByteCursor)
//! - [`PoolConfig`] - Initial slot count of a [`ListPool`](crate::ListPool)
//!
//! # Example
//!
//! ```
//! use bytecursor::{ByteCursor, CursorConfig};
//!
//! let config = CursorConfig::new(64, 0)?;
//! let cursor = ByteCursor::from_config(&config)?;
//! assert_eq!(cursor.capacity(), 64);
//!
//! # Ok::<(), bytecursor::CursorError>(())
//! ```

use crate::error::CursorError;

/// Default size of a freshly allocated cursor buffer (256 bytes).
pub const DEFAULT_INITIAL_CAPACITY: usize = 256;

/// Default number of pre-reserved slots in a list pool.
pub const DEFAULT_POOL_SLOTS: usize = 8;

/// Configuration for a freshly allocated [`ByteCursor`](crate::ByteCursor).
///
/// The buffer is zero-filled to `initial_capacity` bytes and the cursor
/// starts at `start_offset`, which must lie inside the buffer.
///
/// # Example
///
/// ```
/// use bytecursor::CursorConfig;
///
/// let config = CursorConfig::default()
///     .with_initial_capacity(1024)
///     .with_start_offset(4);
/// assert!(config.validate().is_ok());
///
/// let bad = CursorConfig::default()
///     .with_initial_capacity(2)
///     .with_start_offset(4);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorConfig {
    /// Initial buffer length in bytes.
    initial_capacity: usize,

    /// Offset the cursor starts at.
    start_offset: usize,
}

impl CursorConfig {
    /// Creates a new configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::InvalidConfig`] if `start_offset` lies past
    /// the end of the initial buffer.
    pub fn new(initial_capacity: usize, start_offset: usize) -> Result<Self, CursorError> {
        if start_offset > initial_capacity {
            return Err(CursorError::InvalidConfig {
                message: "start_offset cannot be greater than initial_capacity",
            });
        }

        Ok(Self {
            initial_capacity,
            start_offset,
        })
    }

    /// Sets the initial buffer length.
    ///
    /// Note: This does not validate the configuration. Use [`CursorConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the starting offset.
    ///
    /// Note: This does not validate the configuration.
    pub fn with_start_offset(mut self, offset: usize) -> Self {
        self.start_offset = offset;
        self
    }

    /// Returns the initial buffer length.
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Returns the starting offset.
    pub fn start_offset(&self) -> usize {
        self.start_offset
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), CursorError> {
        Self::new(self.initial_capacity, self.start_offset).map(|_| ())
    }
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            start_offset: 0,
        }
    }
}

/// Configuration for a [`ListPool`](crate::ListPool).
///
/// `initial_slots` only pre-reserves the free-list; the pool still grows
/// without bound as lists are recycled. Zero is allowed.
///
/// # Example
///
/// ```
/// use bytecursor::PoolConfig;
///
/// let config = PoolConfig::new(32);
/// assert_eq!(config.initial_slots, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolConfig {
    /// Number of free-list slots reserved up front.
    pub initial_slots: usize,
}

impl PoolConfig {
    /// Creates a new pool configuration.
    pub const fn new(initial_slots: usize) -> Self {
        Self { initial_slots }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            initial_slots: DEFAULT_POOL_SLOTS,
        }
    }
}
