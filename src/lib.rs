//! Keyed Fibonacci Heap for Rust
//!
//! This crate provides a Fibonacci heap whose entries are addressed by the
//! element itself, the priority queue that shortest-path and
//! minimum-spanning-tree algorithms want when they update priorities in place.
//!
//! # Complexity
//!
//! - **push**: O(1)
//! - **peek** / **find_min**: O(1)
//! - **decrease_key**: O(1) amortized
//! - **extract_min**: O(log n) amortized
//! - **contains** / **key_of**: O(1)
//!
//! # Layout
//!
//! - [`fibonacci`]: the heap itself
//! - [`rank`]: the degree type and its logarithmic bound
//! - [`config`]: min/max ordering and preallocation
//! - [`stats`]: counters of links, cuts and marks
//! - [`traits`]: [`KeyedHeap`] and [`HeapError`]
//! - [`pathfinding`]: Dijkstra over any [`KeyedHeap`]
//!
//! # Example
//!
//! ```rust
//! use keyed_fibonacci_heap::fibonacci::FibonacciHeap;
//!
//! let mut heap = FibonacciHeap::new();
//! heap.push("item1", 5);
//! heap.push("item2", 3);
//! heap.decrease_key(&"item1", 1);
//! assert_eq!(heap.find_min(), (&"item1", &1));
//! ```

pub mod config;
pub mod fibonacci;
mod node;
pub mod pathfinding;
pub mod rank;
mod sibling_list;
pub mod stats;
pub mod traits;

// Re-export the main types for convenience
pub use config::{HeapConfig, HeapOrder};
pub use fibonacci::FibonacciHeap;
pub use stats::HeapStats;
pub use traits::{HeapError, KeyedHeap};
