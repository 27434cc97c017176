//! Record identifier generator.
//!
//! # Invariants
//! - Ids are strictly increasing for the lifetime of one generator.
//! - An id is never issued twice, however fast callers ask.

use crate::model::RecordId;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter handing out `RecordId`s.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    /// Creates a generator whose first id is `1`.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a generator whose first id is `first`.
    pub fn starting_at(first: RecordId) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Issues the next id.
    pub fn next_id(&self) -> RecordId {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Returns the id the next call to `next_id` will issue.
    pub fn peek(&self) -> RecordId {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::IdGenerator;

    #[test]
    fn ids_start_at_one_and_increase() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.peek(), 3);
    }

    #[test]
    fn starting_at_respects_offset() {
        let ids = IdGenerator::starting_at(100);
        assert_eq!(ids.next_id(), 100);
    }
}
