//! LIFO free-list of reusable `Vec<T>` containers.

use tracing::trace;

use crate::config::PoolConfig;

/// A stack of cleared vectors, handed out most-recently-recycled first.
///
/// Hot paths such as per-tick message batching call [`get`](Self::get) for a
/// scratch list and [`recycle`](Self::recycle) it when done, so the list's
/// heap allocation is reused instead of freed. The pool never evicts, so it
/// keeps both its peak slot count and each list's peak capacity.
///
/// # Example
///
/// ```
/// use bytecursor::ListPool;
///
/// let mut pool = ListPool::new();
///
/// let mut batch: Vec<u32> = pool.get();
/// batch.extend([1, 2, 3]);
/// pool.recycle(batch);
///
/// let batch = pool.get();
/// assert!(batch.is_empty());
/// assert!(batch.capacity() >= 3);
/// ```
#[derive(Debug)]
pub struct ListPool<T> {
    slots: Vec<Vec<T>>,
}

impl<T> ListPool<T> {
    /// Creates an empty pool with the default slot reservation.
    pub fn new() -> Self {
        Self::with_config(PoolConfig::default())
    }

    /// Creates an empty pool with `config.initial_slots` slots reserved.
    pub fn with_config(config: PoolConfig) -> Self {
        Self {
            slots: Vec::with_capacity(config.initial_slots),
        }
    }

    /// Takes a list from the pool or creates a new one.
    ///
    /// The returned list is always empty.
    pub fn get(&mut self) -> Vec<T> {
        self.slots.pop().unwrap_or_default()
    }

    /// Clears `item` and stores it for reuse.
    ///
    /// The slot stack doubles when full.
    pub fn recycle(&mut self, mut item: Vec<T>) {
        item.clear();
        if self.slots.len() == self.slots.capacity() {
            let additional = self.slots.len().max(1);
            trace!(
                from = self.slots.capacity(),
                additional,
                "growing list pool slots"
            );
            self.slots.reserve_exact(additional);
        }
        self.slots.push(item);
    }

    /// Returns the number of lists ready to be handed out.
    pub fn available(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the next [`get`](Self::get) will allocate.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of slots the stack can hold before growing.
    pub fn slot_capacity(&self) -> usize {
        self.slots.capacity()
    }
}

impl<T> Default for ListPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_from_empty_pool() {
        let mut pool: ListPool<u8> = ListPool::new();
        assert!(pool.is_empty());
        let list = pool.get();
        assert!(list.is_empty());
        assert_eq!(pool.available(), 0);
    }

    #[test]
    fn test_recycle_clears() {
        let mut pool = ListPool::new();
        pool.recycle(vec![1, 2, 3]);
        assert_eq!(pool.available(), 1);

        let list = pool.get();
        assert!(list.is_empty());
        // Capacity should be preserved
        assert!(list.capacity() >= 3);
    }

    #[test]
    fn test_slots_double_when_full() {
        let mut pool: ListPool<u8> = ListPool::with_config(PoolConfig::new(2));
        for _ in 0..3 {
            pool.recycle(Vec::new());
        }
        assert_eq!(pool.available(), 3);
        assert!(pool.slot_capacity() >= 4);
    }

    #[test]
    fn test_zero_slot_pool_grows() {
        let mut pool: ListPool<u8> = ListPool::with_config(PoolConfig::new(0));
        pool.recycle(Vec::new());
        pool.recycle(Vec::new());
        assert_eq!(pool.available(), 2);
    }
}
