//! Insertion Order Module
//!
//! Tracks the order keys were first inserted, for FIFO eviction.

use std::collections::VecDeque;

// == Insertion Order ==
/// Tracks key insertion order for FIFO eviction.
///
/// Keys are stored in a VecDeque where:
/// - Back = most recently inserted
/// - Front = oldest insertion (next eviction candidate)
///
/// Unlike an LRU tracker, reads never reorder entries: eviction order is
/// fixed at insertion time. Overwriting an existing key keeps its original
/// position.
#[derive(Debug, Default)]
pub struct InsertionOrder {
    /// Keys ordered by first insertion
    order: VecDeque<String>,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Record Insert ==
    /// Records a newly inserted key at the back of the queue.
    ///
    /// Callers only invoke this for keys not already present; overwrites keep
    /// the key's original position.
    pub fn record_insert(&mut self, key: &str) {
        self.order.push_back(key.to_string());
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Evict Oldest ==
    /// Returns and removes the oldest-inserted key.
    ///
    /// Returns None if the tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    /// Returns the oldest-inserted key without removing it.
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.front()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Clear ==
    /// Removes all tracked keys.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    #[allow(dead_code)]
    pub fn contains(&self, key: &str) -> bool {
        self.order.iter().any(|k| k == key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_new() {
        let order = InsertionOrder::new();
        assert!(order.is_empty());
        assert_eq!(order.len(), 0);
        assert_eq!(order.peek_oldest(), None);
    }

    #[test]
    fn test_eviction_follows_insertion_order() {
        let mut order = InsertionOrder::new();

        order.record_insert("a");
        order.record_insert("b");
        order.record_insert("c");

        assert_eq!(order.evict_oldest(), Some("a".to_string()));
        assert_eq!(order.evict_oldest(), Some("b".to_string()));
        assert_eq!(order.evict_oldest(), Some("c".to_string()));
        assert_eq!(order.evict_oldest(), None);
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut order = InsertionOrder::new();

        order.record_insert("first");
        order.record_insert("second");

        assert_eq!(order.peek_oldest(), Some(&"first".to_string()));
        assert_eq!(order.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut order = InsertionOrder::new();

        order.record_insert("a");
        order.record_insert("b");
        order.record_insert("c");

        order.remove("b");

        assert_eq!(order.len(), 2);
        assert!(!order.contains("b"));
        assert_eq!(order.evict_oldest(), Some("a".to_string()));
        assert_eq!(order.evict_oldest(), Some("c".to_string()));
    }

    #[test]
    fn test_remove_nonexistent_key() {
        let mut order = InsertionOrder::new();

        order.record_insert("a");
        order.remove("nonexistent");

        assert_eq!(order.len(), 1);
        assert!(order.contains("a"));
    }

    #[test]
    fn test_clear() {
        let mut order = InsertionOrder::new();

        order.record_insert("a");
        order.record_insert("b");
        order.clear();

        assert!(order.is_empty());
        assert_eq!(order.evict_oldest(), None);
    }
}
