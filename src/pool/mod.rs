//! Object reuse for transient lists.
//!
//! [`ListPool`] keeps recycled, cleared vectors on a stack so that code
//! running every frame or network tick can reuse their allocations. It is
//! independent of the cursor and, like it, has no internal locking.

mod list;

pub use list::ListPool;
