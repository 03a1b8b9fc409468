//! Construction-time configuration for [`FibonacciHeap`](crate::fibonacci::FibonacciHeap).
//!
//! A heap is either a min-heap (the default) or a max-heap. Every comparison
//! inside the heap goes through [`HeapOrder::precedes`], so the structural
//! code never branches on the direction itself.
//!
//! # Example
//!
//! ```rust
//! use keyed_fibonacci_heap::config::{HeapConfig, HeapOrder};
//! use keyed_fibonacci_heap::fibonacci::FibonacciHeap;
//!
//! let config = HeapConfig::new().order(HeapOrder::Max).capacity(64);
//! let mut heap = FibonacciHeap::with_config(config);
//! heap.push("low", 1);
//! heap.push("high", 9);
//! assert_eq!(heap.find_min(), (&"high", &9));
//! ```

use std::cmp::Ordering;

/// Direction in which keys are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeapOrder {
    /// Smallest key on top.
    #[default]
    Min,
    /// Largest key on top.
    Max,
}

impl HeapOrder {
    /// Compares two keys so that `Ordering::Less` means "closer to the top".
    #[inline]
    pub fn compare<K: Ord>(self, a: &K, b: &K) -> Ordering {
        match self {
            HeapOrder::Min => a.cmp(b),
            HeapOrder::Max => b.cmp(a),
        }
    }

    /// Returns true if `a` belongs strictly above `b`.
    #[inline]
    pub fn precedes<K: Ord>(self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// Builder for heap construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeapConfig {
    order: HeapOrder,
    capacity: usize,
}

impl HeapConfig {
    /// Default configuration: min-heap, no preallocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the key order.
    pub fn order(mut self, order: HeapOrder) -> Self {
        self.order = order;
        self
    }

    /// Preallocates room for `capacity` elements in the arena and identity map.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// The configured key order.
    pub fn get_order(&self) -> HeapOrder {
        self.order
    }

    /// The configured initial capacity.
    pub fn get_capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_order() {
        assert!(HeapOrder::Min.precedes(&1, &2));
        assert!(!HeapOrder::Min.precedes(&2, &1));
        assert!(!HeapOrder::Min.precedes(&2, &2));
    }

    #[test]
    fn test_max_order() {
        assert!(HeapOrder::Max.precedes(&2, &1));
        assert!(!HeapOrder::Max.precedes(&1, &2));
        assert_eq!(HeapOrder::Max.compare(&3, &3), Ordering::Equal);
    }

    #[test]
    fn test_builder() {
        let config = HeapConfig::new().order(HeapOrder::Max).capacity(10);
        assert_eq!(config.get_order(), HeapOrder::Max);
        assert_eq!(config.get_capacity(), 10);
        assert_eq!(HeapConfig::default().get_order(), HeapOrder::Min);
    }
}
