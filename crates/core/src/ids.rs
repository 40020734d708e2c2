//! Process-local sequential id allocation.
//!
//! Each repository owns one [`IdAllocator`]. It is seeded from the highest id
//! already present in the store before the server accepts requests, and hands
//! out `max + 1`, `max + 2`, ... from there. Ids are unique within a single
//! process; two processes sharing one store can still collide.

use std::sync::atomic::{AtomicI64, Ordering};

use crate::types::DbId;

#[derive(Debug, Default)]
pub struct IdAllocator {
    last: AtomicI64,
}

impl IdAllocator {
    /// Reset the counter so the next id is `last + 1`.
    ///
    /// Negative seeds are clamped to zero.
    pub fn reseed(&self, last: DbId) {
        self.last.store(last.max(0), Ordering::SeqCst);
    }

    /// Allocate the next id.
    pub fn next_id(&self) -> DbId {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allocator_starts_at_one() {
        let ids = IdAllocator::default();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
    }

    #[test]
    fn seeded_allocator_continues_after_max() {
        let ids = IdAllocator::default();
        ids.reseed(41);
        assert_eq!(ids.next_id(), 42);
        assert_eq!(ids.next_id(), 43);
    }

    #[test]
    fn reseed_resets_sequence() {
        let ids = IdAllocator::default();
        ids.reseed(10);
        ids.next_id();
        ids.reseed(0);
        assert_eq!(ids.next_id(), 1);
    }

    #[test]
    fn negative_seed_is_clamped() {
        let ids = IdAllocator::default();
        ids.reseed(-5);
        assert_eq!(ids.next_id(), 1);
    }

    #[test]
    fn concurrent_allocation_yields_unique_ids() {
        let ids = std::sync::Arc::new(IdAllocator::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = std::sync::Arc::clone(&ids);
                std::thread::spawn(move || (0..100).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut all: Vec<DbId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 800);
        assert_eq!(*all.last().unwrap(), 800);
    }
}
